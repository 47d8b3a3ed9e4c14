use std::f64::consts::TAU;

use approx::assert_abs_diff_eq;

use orbitsim::{NVec3, OrbitEvent, OrbitStatus, OrbitTracker};

/// Point on the unit circle in the xy-plane
fn circle(theta: f64) -> NVec3 {
    NVec3::new(theta.cos(), theta.sin(), 0.0)
}

/// Tracker for a body starting at (1, 0, 0) moving counter-clockwise
fn unit_tracker() -> OrbitTracker {
    OrbitTracker::new(1, NVec3::new(1.0, 0.0, 0.0), NVec3::new(0.0, 1.0, 0.0))
}

/// Feed `theta` to the tracker at integer time `t` and return this tick's events
fn feed(tracker: &mut OrbitTracker, theta: f64, t: f64) -> Vec<OrbitEvent> {
    let mut events = Vec::new();
    tracker.observe(&circle(theta), t, &mut events);
    events
}

fn confirmed(events: &[OrbitEvent]) -> Vec<OrbitEvent> {
    events.iter().copied().filter(|e| e.status == OrbitStatus::Confirmed).collect()
}

#[test]
fn tracker_starts_idle() {
    let tracker = unit_tracker();
    assert_eq!(tracker.orbit_count, 0);
    assert_eq!(tracker.pending_orbit_count, 0);
    assert_eq!(tracker.angle_accumulated, 0.0);
    assert_eq!(tracker.initial_radius, 1.0);
    assert_eq!(tracker.angular_momentum_dir, NVec3::new(0.0, 0.0, 1.0));
    assert_abs_diff_eq!(tracker.threshold(), 0.1);
}

#[test]
fn swept_angle_accumulates() {
    let mut tracker = unit_tracker();
    for k in 1..=30 {
        feed(&mut tracker, k as f64 * 0.1, k as f64);
    }
    assert_abs_diff_eq!(tracker.angle_accumulated, 3.0, epsilon = 1e-9);
}

#[test]
fn no_event_before_full_turn() {
    let mut tracker = unit_tracker();
    for k in 1..=62 {
        let events = feed(&mut tracker, k as f64 * 0.1, k as f64);
        assert!(events.is_empty(), "unexpected event at step {k}: {events:?}");
    }
    assert!(!tracker.is_pending());
}

#[test]
fn pending_then_confirmed_after_leaving_hysteresis_band() {
    let mut tracker = unit_tracker();
    for k in 1..=62 {
        feed(&mut tracker, k as f64 * 0.1, k as f64);
    }

    // 6.3 rad: past 2π and 0.017 from the start
    let events = feed(&mut tracker, 6.3, 63.0);
    assert_eq!(events.len(), 2);
    assert_eq!(
        events[0],
        OrbitEvent { body_index: 1, orbit_count: 1, status: OrbitStatus::Pending, sim_time: 63.0 }
    );
    assert_eq!(events[1].status, OrbitStatus::Pending);
    assert_eq!(events[1].orbit_count, 1);
    assert_abs_diff_eq!(events[1].sim_time, 63.0);
    assert_eq!(tracker.pending_orbit_count, 1);
    assert_eq!(tracker.orbit_count, 0);
    assert_eq!(tracker.last_detection_frame, 63 * 60);

    // 6.4 rad: 0.117 from the start, inside the band, nothing happens
    assert!(feed(&mut tracker, 6.4, 64.0).is_empty());
    assert!(tracker.is_pending());

    // 6.5 rad: 0.216 from the start, past 2 * threshold
    let angle_before = tracker.angle_accumulated + 0.1;
    let events = feed(&mut tracker, 6.5, 65.0);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].status, OrbitStatus::Confirmed);
    assert_eq!(events[0].orbit_count, 1);
    // completion is stamped at the closest approach, not at confirmation
    assert_abs_diff_eq!(events[0].sim_time, 63.0);

    assert_eq!(tracker.orbit_count, 1);
    assert_eq!(tracker.pending_orbit_count, 0);
    assert_abs_diff_eq!(tracker.angle_accumulated, angle_before - TAU, epsilon = 1e-9);
    assert_abs_diff_eq!(tracker.angle_accumulated, 6.5 - TAU, epsilon = 1e-9);
}

#[test]
fn closest_approach_is_refined_while_pending() {
    let mut tracker = unit_tracker();
    for k in 1..=62 {
        feed(&mut tracker, k as f64 * 0.1, k as f64);
    }
    let start = NVec3::new(1.0, 0.0, 0.0);

    // Slightly inside the orbit: past 2π but still closing in on the start
    let inside = circle(6.29) * 0.95;
    let mut events = Vec::new();
    tracker.observe(&inside, 63.0, &mut events);
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e.status == OrbitStatus::Pending && e.sim_time == 63.0));
    assert_abs_diff_eq!(tracker.last_detection_distance, (inside - start).norm(), epsilon = 1e-12);

    // Closer still: the detection moves to this frame
    let mut events = Vec::new();
    tracker.observe(&circle(6.30), 64.0, &mut events);
    assert_eq!(
        events,
        vec![OrbitEvent { body_index: 1, orbit_count: 1, status: OrbitStatus::Pending, sim_time: 64.0 }]
    );
    assert_eq!(tracker.last_detection_frame, 64 * 60);

    // Moving away again inside the band: nothing
    assert!(feed(&mut tracker, 6.35, 65.0).is_empty());
    assert_eq!(tracker.last_detection_frame, 64 * 60);
    assert!(tracker.is_pending());
}

#[test]
fn oscillating_inside_hysteresis_band_confirms_once() {
    let mut tracker = unit_tracker();
    let mut events = Vec::new();
    let mut t = 0.0;
    let mut observe = |tracker: &mut OrbitTracker, theta: f64, events: &mut Vec<OrbitEvent>| {
        t += 1.0;
        tracker.observe(&circle(theta), t, events);
    };

    for k in 1..=63 {
        observe(&mut tracker, k as f64 * 0.1, &mut events);
    }
    assert!(tracker.is_pending());

    // Wobble between 0.05 and 0.19 rad past the start: dist0 crosses the entry
    // threshold (0.1) repeatedly but never the exit threshold (0.2)
    for _ in 0..50 {
        observe(&mut tracker, TAU + 0.05, &mut events);
        observe(&mut tracker, TAU + 0.12, &mut events);
        observe(&mut tracker, TAU + 0.19, &mut events);
    }
    assert!(confirmed(&events).is_empty());
    assert!(tracker.is_pending());

    // Leave the band
    observe(&mut tracker, TAU + 0.3, &mut events);
    assert_eq!(confirmed(&events).len(), 1);

    // Wobbling across the exit threshold afterwards must not confirm again
    for _ in 0..50 {
        observe(&mut tracker, TAU + 0.15, &mut events);
        observe(&mut tracker, TAU + 0.25, &mut events);
    }
    assert_eq!(confirmed(&events).len(), 1);
    assert_eq!(tracker.orbit_count, 1);
    assert!(!tracker.is_pending());
}

#[test]
fn orbit_count_increases_by_one_per_confirmation() {
    let mut tracker = unit_tracker();
    let mut events = Vec::new();
    for k in 1..=200 {
        tracker.observe(&circle(k as f64 * 0.1), k as f64, &mut events);
    }

    let counts: Vec<u32> = confirmed(&events).iter().map(|e| e.orbit_count).collect();
    assert_eq!(counts, vec![1, 2, 3]);
    assert_eq!(tracker.orbit_count, 3);

    // Remainder carried, never reset: 20.0 rad swept minus three full turns
    assert_abs_diff_eq!(tracker.angle_accumulated, 20.0 - 3.0 * TAU, epsilon = 1e-9);
}

#[test]
fn clockwise_orbit_is_detected_with_its_own_sign_reference() {
    let mut tracker = OrbitTracker::new(2, NVec3::new(1.0, 0.0, 0.0), NVec3::new(0.0, -1.0, 0.0));
    assert_eq!(tracker.angular_momentum_dir, NVec3::new(0.0, 0.0, -1.0));

    let mut events = Vec::new();
    for k in 1..=70 {
        tracker.observe(&circle(-(k as f64) * 0.1), k as f64, &mut events);
    }
    let done = confirmed(&events);
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].body_index, 2);
}

#[test]
fn motion_against_initial_momentum_never_completes() {
    let mut tracker = unit_tracker();
    let mut events = Vec::new();
    for k in 1..=100 {
        tracker.observe(&circle(-(k as f64) * 0.1), k as f64, &mut events);
    }
    assert!(events.is_empty());
    assert!(tracker.angle_accumulated < 0.0);
}

#[test]
fn radial_start_has_zero_reference_and_stays_finite() {
    // Velocity parallel to position: no angular momentum to normalize
    let mut tracker = OrbitTracker::new(1, NVec3::new(1.0, 0.0, 0.0), NVec3::new(1.0, 0.0, 0.0));
    assert_eq!(tracker.angular_momentum_dir, NVec3::zeros());

    let mut events = Vec::new();
    tracker.observe(&NVec3::new(2.0, 0.0, 0.0), 1.0, &mut events);
    assert!(tracker.angle_accumulated.is_finite());
    assert_eq!(tracker.angle_accumulated, 0.0);
}

#[test]
fn center_offsets_relative_positions() {
    let center = NVec3::new(10.0, 10.0, 0.0);
    let mut tracker =
        OrbitTracker::with_center(1, center, center + NVec3::new(1.0, 0.0, 0.0), NVec3::new(0.0, 1.0, 0.0));
    assert_eq!(tracker.initial_radius, 1.0);

    let mut events = Vec::new();
    for k in 1..=65 {
        tracker.observe(&(center + circle(k as f64 * 0.1)), k as f64, &mut events);
    }
    assert_eq!(confirmed(&events).len(), 1);
}
