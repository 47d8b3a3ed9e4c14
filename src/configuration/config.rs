//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`ParametersConfig`] – time step, optional G override and trail length
//! - [`BodySpec`]         – one body, either in simulation units ([`BodyConfig`])
//!   or in physical units ([`PhysicalBody`])
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   dt: 3600.0              # sim seconds per tick
//!   trail_capacity: 500     # optional
//!   # G: 6.6743e-2          # optional, defaults to the scaled SI value
//!
//! bodies:
//!   - name: Sun             # physical units: km, kg
//!     radius_km: 695700
//!     mass_kg: 1.9884e30
//!     distance_km: 0
//!     color: "#ffff00"
//!   - name: Probe           # simulation units
//!     mass: 10.0
//!     radius: 5.0
//!     x: 200.0
//!     vy: 2.0
//! ```
//!
//! Physical bodies are placed on the +x axis with a circular-orbit velocity
//! around the first body's mass.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::{SimError, SimResult};
use crate::simulation::units;

fn default_dt() -> f64 {
    1.0
}

fn default_radius() -> f64 {
    1.0
}

fn default_color() -> String {
    "#ffffff".to_string()
}

/// Global numerical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(default = "default_dt")]
    pub dt: f64, // sim seconds per tick
    #[serde(default, rename = "G")]
    pub g: Option<f64>, // gravitational constant in sim units
    #[serde(default)]
    pub trail_capacity: Option<usize>, // samples kept per trail
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            dt: default_dt(),
            g: None,
            trail_capacity: None,
        }
    }
}

/// Initial state of one body in simulation units
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    #[serde(default)]
    pub name: String,
    pub mass: f64, // sim mass units, must be > 0
    #[serde(default = "default_radius")]
    pub radius: f64, // display radius
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub z: f64,
    #[serde(default)]
    pub vx: f64,
    #[serde(default)]
    pub vy: f64,
    #[serde(default)]
    pub vz: f64,
}

impl BodyConfig {
    /// The body a user gets when adding a planet without filling anything in
    pub fn new_planet(n: usize) -> Self {
        const PALETTE: [&str; 6] = ["#88ff88", "#ff88ff", "#88ffff", "#ffaa44", "#aaaaff", "#ff6666"];
        Self {
            name: format!("Planet {n}"),
            mass: 10.0,
            radius: 5.0,
            color: PALETTE[n % PALETTE.len()].to_string(),
            x: 200.0,
            y: 0.0,
            z: 0.0,
            vx: 0.0,
            vy: 2.0,
            vz: 0.0,
        }
    }

    /// Reject masses the force law cannot divide by
    pub fn validate(&self) -> SimResult<()> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(SimError::InvalidConfiguration(format!(
                "body '{}' has mass {}, mass must be > 0",
                self.name, self.mass
            )));
        }
        Ok(())
    }
}

/// A body described with real-world data
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PhysicalBody {
    pub name: String,
    pub radius_km: f64,
    pub mass_kg: f64,
    pub distance_km: f64, // from the central body, 0 for the central body itself
    #[serde(default = "default_color")]
    pub color: String,
}

/// Either form of body entry in a scenario file
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum BodySpec {
    Physical(PhysicalBody),
    Sim(BodyConfig),
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodySpec>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> SimResult<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }

    /// Convert every entry to simulation units. Physical bodies orbit the first
    /// body, so the first entry must exist and carry a positive mass.
    pub fn resolve_bodies(&self) -> SimResult<Vec<BodyConfig>> {
        let central_mass_kg = match self.bodies.first() {
            Some(BodySpec::Physical(pb)) => pb.mass_kg,
            Some(BodySpec::Sim(bc)) => bc.mass * units::MASS_SCALE,
            None => {
                return Err(SimError::InvalidConfiguration(
                    "scenario has no bodies".to_string(),
                ))
            }
        };

        let bodies: Vec<BodyConfig> = self
            .bodies
            .iter()
            .map(|spec| match spec {
                BodySpec::Physical(pb) => units::body_from_physical(pb, central_mass_kg),
                BodySpec::Sim(bc) => bc.clone(),
            })
            .collect();

        for b in &bodies {
            b.validate()?;
        }
        Ok(bodies)
    }
}
