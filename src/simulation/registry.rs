//! Body registry: the editable list of body configurations
//!
//! Index 0 is the central body and cannot be removed. The registry only holds
//! configuration; the `Simulation` rebuilds live state from it after every
//! change.

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::configuration::config::BodyConfig;
use crate::error::{SimError, SimResult};

/// Index of the body everything else orbits
pub const CENTRAL_BODY: usize = 0;

/// Editable field of a [`BodyConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyField {
    Mass,
    Color,
    Radius,
    X,
    Y,
    Z,
    Vx,
    Vy,
    Vz,
}

impl FromStr for BodyField {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mass" => Ok(Self::Mass),
            "color" => Ok(Self::Color),
            "radius" => Ok(Self::Radius),
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            "z" => Ok(Self::Z),
            "vx" => Ok(Self::Vx),
            "vy" => Ok(Self::Vy),
            "vz" => Ok(Self::Vz),
            other => Err(SimError::UnknownField(other.to_string())),
        }
    }
}

impl fmt::Display for BodyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Mass => "mass",
            Self::Color => "color",
            Self::Radius => "radius",
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
            Self::Vx => "vx",
            Self::Vy => "vy",
            Self::Vz => "vz",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default)]
pub struct BodyRegistry {
    configs: Vec<BodyConfig>,
}

impl BodyRegistry {
    /// Fails on an empty list: there must always be a central body
    pub fn new(configs: Vec<BodyConfig>) -> SimResult<Self> {
        validate_all(&configs)?;
        Ok(Self { configs })
    }

    pub fn configs(&self) -> &[BodyConfig] {
        &self.configs
    }

    pub fn get(&self, index: usize) -> Option<&BodyConfig> {
        self.configs.get(index)
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// Append a body, returning its index
    pub fn add(&mut self, config: BodyConfig) -> SimResult<usize> {
        config.validate()?;
        self.configs.push(config);
        Ok(self.configs.len() - 1)
    }

    /// Remove a body; later bodies shift down by one
    pub fn remove(&mut self, index: usize) -> SimResult<BodyConfig> {
        if index == CENTRAL_BODY {
            return Err(SimError::InvalidOperation(
                "the central body cannot be removed".to_string(),
            ));
        }
        self.check_index(index)?;
        Ok(self.configs.remove(index))
    }

    /// Set one field from raw text input. A numeric field given text that does
    /// not parse keeps its previous value.
    pub fn update(&mut self, index: usize, field: BodyField, raw: &str) -> SimResult<()> {
        self.check_index(index)?;

        let cfg = &mut self.configs[index];
        let slot = match field {
            BodyField::Color => {
                cfg.color = raw.trim().to_string();
                return Ok(());
            }
            BodyField::Mass => &mut cfg.mass,
            BodyField::Radius => &mut cfg.radius,
            BodyField::X => &mut cfg.x,
            BodyField::Y => &mut cfg.y,
            BodyField::Z => &mut cfg.z,
            BodyField::Vx => &mut cfg.vx,
            BodyField::Vy => &mut cfg.vy,
            BodyField::Vz => &mut cfg.vz,
        };

        let value = match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => {
                warn!(index, %field, input = raw, "not a number, keeping previous value");
                return Ok(());
            }
        };

        if field == BodyField::Mass && value <= 0.0 {
            return Err(SimError::InvalidConfiguration(format!(
                "mass must be > 0, got {value}"
            )));
        }

        *slot = value;
        Ok(())
    }

    /// Replace every configuration at once
    pub fn reset_all(&mut self, configs: Vec<BodyConfig>) -> SimResult<()> {
        validate_all(&configs)?;
        self.configs = configs;
        Ok(())
    }

    fn check_index(&self, index: usize) -> SimResult<()> {
        if index >= self.configs.len() {
            return Err(SimError::IndexOutOfRange {
                index,
                len: self.configs.len(),
            });
        }
        Ok(())
    }
}

fn validate_all(configs: &[BodyConfig]) -> SimResult<()> {
    if configs.is_empty() {
        return Err(SimError::InvalidConfiguration(
            "at least the central body is required".to_string(),
        ));
    }
    for cfg in configs {
        cfg.validate()?;
    }
    Ok(())
}
