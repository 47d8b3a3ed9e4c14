//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - integration step size `dt` (sim seconds per tick),
//! - gravitational constant in sim units,
//! - trail length per body

use tracing::warn;

use crate::configuration::config::ParametersConfig;
use crate::simulation::states::TRAIL_CAPACITY;
use crate::simulation::units;

/// Step size used when none (or garbage) is supplied
pub const DEFAULT_DT: f64 = 1.0;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64, // step size
    pub g: f64, // gravitational constant
    pub trail_capacity: usize, // samples kept per trail
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            g: units::g_sim(),
            trail_capacity: TRAIL_CAPACITY,
        }
    }
}

impl From<&ParametersConfig> for Parameters {
    fn from(cfg: &ParametersConfig) -> Self {
        Self {
            dt: sanitize_dt(cfg.dt),
            g: cfg.g.unwrap_or_else(units::g_sim),
            trail_capacity: cfg.trail_capacity.unwrap_or(TRAIL_CAPACITY),
        }
    }
}

/// Zero, NaN and infinities fall back to `DEFAULT_DT`
pub fn sanitize_dt(dt: f64) -> f64 {
    if dt.is_finite() && dt != 0.0 {
        dt
    } else {
        DEFAULT_DT
    }
}

/// Step size from a raw text field; anything unparsable becomes `DEFAULT_DT`
pub fn parse_dt(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(dt) => sanitize_dt(dt),
        Err(_) => {
            warn!(input = raw, "time step is not a number, using {DEFAULT_DT}");
            DEFAULT_DT
        }
    }
}
