//! Core state types for the simulation.
//!
//! - `Body` / `System` hold the live bodies and the simulation clock `t`
//! - `Trail` is the bounded history of recent positions for one body
//!
//! Bodies are rebuilt from `BodyConfig` whenever the registry changes.

use std::collections::VecDeque;

use nalgebra::Vector3;

use crate::configuration::config::BodyConfig;

pub type NVec3 = Vector3<f64>;

/// Number of positions kept per trail unless configured otherwise
pub const TRAIL_CAPACITY: usize = 500;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub m: f64, // mass
    pub radius: f64, // display radius
    pub color: String, // display color, "#rrggbb"
}

impl Body {
    /// Runtime body at the configured initial position and velocity
    pub fn from_config(cfg: &BodyConfig) -> Self {
        Self {
            x: NVec3::new(cfg.x, cfg.y, cfg.z),
            v: NVec3::new(cfg.vx, cfg.vy, cfg.vz),
            m: cfg.mass,
            radius: cfg.radius,
            color: cfg.color.clone(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies, index 0 is the central body
    pub t: f64, // time
}

/// FIFO of recent positions. Pushing into a full trail evicts the oldest sample.
#[derive(Debug, Clone)]
pub struct Trail {
    points: VecDeque<NVec3>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, p: NVec3) {
        if self.capacity == 0 {
            return;
        }
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(p);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest first
    pub fn points(&self) -> impl Iterator<Item = &NVec3> {
        self.points.iter()
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new(TRAIL_CAPACITY)
    }
}
