//! Revolution detection for orbiting bodies
//!
//! Each non-central body gets an [`OrbitTracker`]. The tracker integrates the
//! signed angle swept around the center and uses the distance back to the
//! starting point to confirm a revolution:
//!
//! - **Idle**: no revolution pending. Once the swept angle reaches 2π a
//!   revolution becomes pending.
//! - **Pending**: while the body is inside `threshold` of its starting point the
//!   closest approach (and its frame) is refined. Leaving past `2 * threshold`
//!   confirms the revolution and carries the angle remainder into the next one.
//!
//! The gap between the entry and exit distances is the hysteresis band; wobbling
//! near the threshold cannot confirm a revolution twice.
//!
//! The angular-momentum direction taken at creation is only a sign reference for
//! the swept angle. Circular orbits are the primary contract; strongly eccentric
//! orbits are handled best-effort.

use std::f64::consts::TAU;

use tracing::{debug, info};

use crate::simulation::states::NVec3;

/// Frames per simulation second used to stamp detections
pub const FRAME_RATE: f64 = 60.0;
/// Entry threshold as a fraction of the initial orbital radius
pub const THRESHOLD_FRACTION: f64 = 0.10;
/// Exit threshold as a multiple of the entry threshold
pub const HYSTERESIS_FACTOR: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbitStatus {
    Pending,
    Confirmed,
}

/// Emitted when a revolution becomes pending, its closest approach improves,
/// or it is confirmed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitEvent {
    pub body_index: usize,
    pub orbit_count: u32,
    pub status: OrbitStatus,
    pub sim_time: f64, // sim seconds at which the revolution completed
}

#[derive(Debug, Clone)]
pub struct OrbitTracker {
    pub body_index: usize,
    pub center: NVec3, // fixed reference point
    pub prev_rel: NVec3, // relative position seen on the previous tick
    pub angular_momentum_dir: NVec3, // unit, or zero for a degenerate start
    pub initial_position: NVec3, // relative position at creation
    pub initial_radius: f64,
    pub angle_accumulated: f64, // signed swept angle, radians
    pub orbit_count: u32, // confirmed revolutions
    pub pending_orbit_count: u32, // 0 = nothing pending
    pub last_detection_distance: f64,
    pub last_detection_frame: i64,
}

impl OrbitTracker {
    /// Start tracking a body from its current position and velocity, with the
    /// center fixed at the origin
    pub fn new(body_index: usize, position: NVec3, velocity: NVec3) -> Self {
        Self::with_center(body_index, NVec3::zeros(), position, velocity)
    }

    pub fn with_center(body_index: usize, center: NVec3, position: NVec3, velocity: NVec3) -> Self {
        let rel0 = position - center;
        let angular_momentum_dir = rel0
            .cross(&velocity)
            .try_normalize(0.0)
            .unwrap_or_else(NVec3::zeros);

        Self {
            body_index,
            center,
            prev_rel: rel0,
            angular_momentum_dir,
            initial_position: rel0,
            initial_radius: rel0.norm(),
            angle_accumulated: 0.0,
            orbit_count: 0,
            pending_orbit_count: 0,
            last_detection_distance: f64::INFINITY,
            last_detection_frame: 0,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending_orbit_count > 0
    }

    /// Distance from the starting point below which a pending revolution is refined
    pub fn threshold(&self) -> f64 {
        self.initial_radius * THRESHOLD_FRACTION
    }

    /// Feed the body's position for one tick; `time` is the clock at the start
    /// of the tick. Events are appended to `events` in the order they happen.
    pub fn observe(&mut self, position: &NVec3, time: f64, events: &mut Vec<OrbitEvent>) {
        let rel = position - self.center;

        self.angle_accumulated += self.swept_angle(&rel);
        self.prev_rel = rel;

        let dist0 = (rel - self.initial_position).norm();
        let threshold = self.threshold();
        let current_frame = (time * FRAME_RATE).floor() as i64;

        if self.angle_accumulated >= TAU && !self.is_pending() {
            self.pending_orbit_count = self.orbit_count + 1;
            self.last_detection_distance = f64::INFINITY;
            self.last_detection_frame = current_frame;
            debug!(
                body = self.body_index,
                orbit = self.pending_orbit_count,
                time,
                "revolution pending"
            );
            events.push(self.event(self.pending_orbit_count, OrbitStatus::Pending, time));
        }

        if self.is_pending() && dist0 < threshold && dist0 < self.last_detection_distance {
            self.last_detection_distance = dist0;
            self.last_detection_frame = current_frame;
            debug!(body = self.body_index, distance = dist0, "closest approach updated");
            events.push(self.event(
                self.pending_orbit_count,
                OrbitStatus::Pending,
                self.detection_time(),
            ));
        }

        if self.is_pending() && dist0 > threshold * HYSTERESIS_FACTOR {
            self.orbit_count = self.pending_orbit_count;
            self.pending_orbit_count = 0;
            self.angle_accumulated -= TAU;
            info!(
                body = self.body_index,
                orbit = self.orbit_count,
                time = self.detection_time(),
                "revolution confirmed"
            );
            events.push(self.event(self.orbit_count, OrbitStatus::Confirmed, self.detection_time()));
        }
    }

    /// Signed angle from the previous relative position to `rel`, positive when
    /// turning the same way as the initial angular momentum
    fn swept_angle(&self, rel: &NVec3) -> f64 {
        let cross = self.prev_rel.cross(rel);
        let delta = cross.norm().atan2(self.prev_rel.dot(rel));
        if cross.dot(&self.angular_momentum_dir) < 0.0 {
            -delta
        } else {
            delta
        }
    }

    fn detection_time(&self) -> f64 {
        self.last_detection_frame as f64 / FRAME_RATE
    }

    fn event(&self, orbit_count: u32, status: OrbitStatus, sim_time: f64) -> OrbitEvent {
        OrbitEvent {
            body_index: self.body_index,
            orbit_count,
            status,
            sim_time,
        }
    }
}
