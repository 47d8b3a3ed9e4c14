//! Fixed-step time integrator
//!
//! Semi-implicit Euler driven by `AccelSet` and `Parameters`: velocity is kicked
//! with the acceleration at the start of the step, then position drifts with the
//! already-updated velocity. Swapping the two updates changes long-term energy
//! drift, so the order is fixed.

use super::forces::AccelSet;
use super::params::Parameters;
use super::states::{NVec3, System};

/// Advance the system by one step of `params.dt`
/// Updates positions, velocities and `sys.t` in place. The clock advances even
/// when there are no bodies.
pub fn euler_step(sys: &mut System, forces: &AccelSet, params: &Parameters) {
    let n = sys.bodies.len();
    let dt = params.dt;

    // a_n from x_n, computed for every body before anything moves
    let mut accel = vec![NVec3::zeros(); n];
    forces.accumulate_accels(&*sys, &mut accel);

    // Kick then drift: v_n+1 = v_n + dt a_n, x_n+1 = x_n + dt v_n+1
    for (b, a) in sys.bodies.iter_mut().zip(accel.iter()) {
        b.v += *a * dt;
        b.x += b.v * dt;
    }

    sys.t += dt;
}
