//! Conversion from physical units (km, kg, km/s) to simulation units
//!
//! 1 sim distance unit = 1e6 km, 1 sim mass unit = 1e24 kg, time stays in seconds.
//! The gravitational constant is rescaled once so that circular-orbit speeds in
//! simulation units match the physical ones.

use crate::configuration::config::{BodyConfig, PhysicalBody};

/// km per sim distance unit
pub const DIST_SCALE: f64 = 1e6;
/// km per sim radius unit
pub const RADIUS_SCALE: f64 = 1e6;
/// kg per sim mass unit
pub const MASS_SCALE: f64 = 1e24;
/// Smallest radius handed to the renderer, in sim units
pub const MIN_RADIUS: f64 = 0.5;
/// Gravitational constant in km^3 / (kg s^2)
pub const G_SI: f64 = 6.67430e-20;

/// G in sim units: sim_unit^3 / (sim_mass s^2)
pub fn g_sim() -> f64 {
    G_SI * DIST_SCALE.powi(-3) * MASS_SCALE
}

pub fn distance_to_sim(km: f64) -> f64 {
    km / DIST_SCALE
}

pub fn mass_to_sim(kg: f64) -> f64 {
    kg / MASS_SCALE
}

/// Display radius, floored at `MIN_RADIUS`. Never feeds into mass or gravity.
pub fn radius_to_sim(km: f64) -> f64 {
    (km / RADIUS_SCALE).max(MIN_RADIUS)
}

/// Circular-orbit speed in sim units per second around `central_mass_kg` at `r_km`
pub fn orbital_velocity(central_mass_kg: f64, r_km: f64) -> f64 {
    let v_kms = (G_SI * central_mass_kg / r_km).sqrt();
    v_kms / DIST_SCALE
}

/// Body on the +x axis at its orbital distance, moving along +y at circular speed.
/// A body at distance 0 is placed at the origin at rest.
pub fn body_from_physical(pb: &PhysicalBody, central_mass_kg: f64) -> BodyConfig {
    let vy = if pb.distance_km > 0.0 {
        orbital_velocity(central_mass_kg, pb.distance_km)
    } else {
        0.0
    };

    BodyConfig {
        name: pb.name.clone(),
        mass: mass_to_sim(pb.mass_kg),
        radius: radius_to_sim(pb.radius_km),
        color: pb.color.clone(),
        x: distance_to_sim(pb.distance_km),
        y: 0.0,
        z: 0.0,
        vx: 0.0,
        vy,
        vz: 0.0,
    }
}
