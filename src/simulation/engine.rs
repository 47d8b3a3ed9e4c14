//! The simulation: one owner for the registry, live bodies, trails, orbit
//! trackers, parameters and the run flag
//!
//! Every operation goes through `&mut Simulation`, so ticks never overlap and
//! edits only happen between ticks.

use tracing::{debug, info};

use crate::configuration::config::BodyConfig;
use crate::error::SimResult;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::integrator::euler_step;
use crate::simulation::orbit::{OrbitEvent, OrbitTracker};
use crate::simulation::params::{self, Parameters};
use crate::simulation::registry::{BodyField, BodyRegistry, CENTRAL_BODY};
use crate::simulation::states::{Body, System, Trail};

pub struct Simulation {
    registry: BodyRegistry,
    system: System,
    forces: AccelSet,
    params: Parameters,
    trails: Vec<Trail>,
    trackers: Vec<Option<OrbitTracker>>, // None for the central body
    running: bool,
}

impl Simulation {
    /// Build a stopped simulation at t = 0 with every body at its configured state
    pub fn new(configs: Vec<BodyConfig>, params: Parameters) -> SimResult<Self> {
        let registry = BodyRegistry::new(configs)?;
        let forces = AccelSet::new().with(NewtonianGravity { g: params.g });

        let mut sim = Self {
            registry,
            system: System::default(),
            forces,
            params,
            trails: Vec::new(),
            trackers: Vec::new(),
            running: false,
        };
        sim.reinitialize_from_config();
        Ok(sim)
    }

    pub fn registry(&self) -> &BodyRegistry {
        &self.registry
    }

    pub fn system(&self) -> &System {
        &self.system
    }

    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }

    /// Simulation clock in sim seconds
    pub fn time(&self) -> f64 {
        self.system.t
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    pub fn trails(&self) -> &[Trail] {
        &self.trails
    }

    pub fn trail(&self, index: usize) -> Option<&Trail> {
        self.trails.get(index)
    }

    pub fn tracker(&self, index: usize) -> Option<&OrbitTracker> {
        self.trackers.get(index).and_then(Option::as_ref)
    }

    pub fn dt(&self) -> f64 {
        self.params.dt
    }

    pub fn set_time_step(&mut self, dt: f64) {
        self.params.dt = params::sanitize_dt(dt);
    }

    /// Time step from a raw text field, falling back to the default step
    pub fn set_time_step_input(&mut self, raw: &str) {
        self.params.dt = params::parse_dt(raw);
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Add a body and rebuild all bodies from configuration. Returns its index.
    pub fn add_body(&mut self, config: BodyConfig) -> SimResult<usize> {
        let index = self.registry.add(config)?;
        info!(index, "body added");
        self.reinitialize_from_config();
        Ok(index)
    }

    /// Remove a body (never the central one) and rebuild from configuration
    pub fn remove_body(&mut self, index: usize) -> SimResult<()> {
        let removed = self.registry.remove(index)?;
        info!(index, name = %removed.name, "body removed");
        self.reinitialize_from_config();
        Ok(())
    }

    /// Edit one configuration field by name, e.g. `("vy", "2.5")`, then rebuild
    /// every body from configuration
    pub fn configure_body(&mut self, index: usize, field: &str, value: &str) -> SimResult<()> {
        let field: BodyField = field.parse()?;
        self.update_body(index, field, value)
    }

    pub fn update_body(&mut self, index: usize, field: BodyField, value: &str) -> SimResult<()> {
        self.registry.update(index, field, value)?;
        self.reinitialize_from_config();
        Ok(())
    }

    /// Rebuild every body, trail and orbit tracker from the registry. O(n) in
    /// the number of bodies; the clock and run flag are left alone.
    pub fn reinitialize_from_config(&mut self) {
        self.system.bodies = self.registry.configs().iter().map(Body::from_config).collect();
        self.trails = (0..self.system.bodies.len())
            .map(|_| Trail::new(self.params.trail_capacity))
            .collect();
        self.trackers = self
            .system
            .bodies
            .iter()
            .enumerate()
            .map(|(i, b)| (i != CENTRAL_BODY).then(|| OrbitTracker::new(i, b.x, b.v)))
            .collect();
        debug!(bodies = self.system.bodies.len(), "reinitialized from config");
    }

    /// Stop, zero the clock and put every body back to its configured state
    /// with cleared trails and fresh orbit trackers
    pub fn reset(&mut self) {
        self.running = false;
        self.system.t = 0.0;
        self.reinitialize_from_config();
        info!("simulation reset");
    }

    /// Replace the whole body configuration and reset
    pub fn reset_all(&mut self, configs: Vec<BodyConfig>) -> SimResult<()> {
        self.registry.reset_all(configs)?;
        self.reset();
        Ok(())
    }

    /// One tick: integrate, record trails, then run orbit detection on the new
    /// positions. Does nothing while stopped.
    pub fn tick(&mut self) -> Vec<OrbitEvent> {
        if !self.running {
            return Vec::new();
        }

        // Detection frames are stamped with the clock as it read when this tick
        // began, not after `euler_step` has advanced it
        let t_start = self.system.t;
        euler_step(&mut self.system, &self.forces, &self.params);

        let mut events = Vec::new();
        for (i, body) in self.system.bodies.iter().enumerate() {
            // trail first, so a trail always ends at the position being observed
            self.trails[i].push(body.x);
            if let Some(tracker) = self.trackers[i].as_mut() {
                tracker.observe(&body.x, t_start, &mut events);
            }
        }
        events
    }
}
