//! Build fully-initialized simulations from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a stopped `Simulation`
//! with bodies at t = 0. Also ships the built-in solar system made from real
//! planetary data.

use crate::configuration::config::{BodySpec, ParametersConfig, PhysicalBody, ScenarioConfig};
use crate::error::SimResult;
use crate::simulation::engine::Simulation;
use crate::simulation::params::Parameters;

/// Sun and planets: (name, radius km, mass kg, distance from the Sun km, color)
const SOLAR_SYSTEM: [(&str, f64, f64, f64, &str); 9] = [
    ("Sun", 695_700.0, 1.9884e30, 0.0, "#ffff00"),
    ("Mercury", 2_439.7, 3.301e23, 5.7909e7, "#bfbfbf"),
    ("Venus", 6_051.8, 4.8673e24, 1.0821e8, "#ffcc99"),
    ("Earth", 6_371.0, 5.9722e24, 1.49598e8, "#4444ff"),
    ("Mars", 3_389.5, 6.4169e23, 2.27956e8, "#ff4444"),
    ("Jupiter", 69_911.0, 1.89813e27, 7.78479e8, "#ffaa88"),
    ("Saturn", 58_232.0, 5.6832e26, 1.432041e9, "#ffdd77"),
    ("Uranus", 25_362.0, 8.6811e25, 2.867043e9, "#66ccff"),
    ("Neptune", 24_622.0, 1.02409e26, 4.514953e9, "#4477ff"),
];

fn physical(row: &(&str, f64, f64, f64, &str)) -> PhysicalBody {
    let (name, radius_km, mass_kg, distance_km, color) = *row;
    PhysicalBody {
        name: name.to_string(),
        radius_km,
        mass_kg,
        distance_km,
        color: color.to_string(),
    }
}

/// Sun plus the eight planets on circular orbits
pub fn solar_system() -> ScenarioConfig {
    ScenarioConfig {
        parameters: ParametersConfig::default(),
        bodies: SOLAR_SYSTEM.iter().map(|row| BodySpec::Physical(physical(row))).collect(),
    }
}

/// Sun and Earth only
pub fn sun_earth() -> ScenarioConfig {
    ScenarioConfig {
        parameters: ParametersConfig::default(),
        bodies: vec![
            BodySpec::Physical(physical(&SOLAR_SYSTEM[0])),
            BodySpec::Physical(physical(&SOLAR_SYSTEM[3])),
        ],
    }
}

impl Simulation {
    pub fn from_scenario(cfg: &ScenarioConfig) -> SimResult<Self> {
        let bodies = cfg.resolve_bodies()?;
        let parameters = Parameters::from(&cfg.parameters);
        Simulation::new(bodies, parameters)
    }
}
