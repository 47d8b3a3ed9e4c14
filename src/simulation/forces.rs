//! Force / acceleration contributors
//!
//! Defines the acceleration trait and direct Newtonian gravity. Every term
//! reads one immutable `System`, so all contributions in a step come from the
//! same position snapshot.

use crate::simulation::states::{NVec3, System};

/// The force model the integrator queries once per step. Today this is only
/// [`NewtonianGravity`]; every term sees the same `&System`, so no body's
/// acceleration depends on another body having already moved.
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// No terms: every body coasts
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Overwrite `out` with the acceleration of each body at its current position.
    /// `out` is indexed like `sys.bodies` and must be at least as long.
    pub fn accumulate_accels(&self, sys: &System, out: &mut [NVec3]) {
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        for term in &self.terms {
            term.acceleration(sys, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// One contribution to body accelerations. Adds into `out`, never overwrites it.
pub trait Acceleration {
    fn acceleration(&self, sys: &System, out: &mut [NVec3]);
}

/// Newtonian gravity without softening
///
/// `F = G * m_i * m_j / d^2` along the unit separation vector, divided by each
/// body's own mass. Pairs at exactly the same position exert no force on each
/// other.
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant, sim units
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, sys: &System, out: &mut [NVec3]) {
        let n = sys.bodies.len();

        // Each unordered pair once, equal and opposite
        for i in 0..n {
            let bi = &sys.bodies[i];
            for j in (i + 1)..n {
                let bj = &sys.bodies[j];

                // r points from i to j
                let r = bj.x - bi.x;
                let distance = r.norm();
                if distance == 0.0 {
                    continue; // coincident bodies
                }

                let magnitude = self.g * bi.m * bj.m / (distance * distance);
                let force = (r / distance) * magnitude;

                out[i] += force / bi.m;
                out[j] -= force / bj.m;
            }
        }
    }
}
