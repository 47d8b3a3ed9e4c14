use std::time::Instant;

use crate::configuration::config::BodyConfig;
use crate::simulation::engine::Simulation;
use crate::simulation::params::Parameters;
use crate::simulation::units;

/// Helper to build a star with `n - 1` planets on circular rings
fn make_bodies(n: usize) -> Vec<BodyConfig> {
    let star_mass_kg = 1.9884e30;
    let mut bodies = Vec::with_capacity(n);

    bodies.push(BodyConfig {
        name: "Star".to_string(),
        mass: units::mass_to_sim(star_mass_kg),
        ..BodyConfig::new_planet(0)
    });

    for i in 1..n {
        let i_f = i as f64;
        // deterministic placement, no rand needed
        let r_km = 5.0e7 + i_f * 1.0e7;
        let phase = i_f * 0.37;
        let r = units::distance_to_sim(r_km);
        let v = units::orbital_velocity(star_mass_kg, r_km);

        bodies.push(BodyConfig {
            name: format!("Planet {i}"),
            mass: 1.0,
            x: r * phase.cos(),
            y: r * phase.sin(),
            z: 0.0,
            vx: -v * phase.sin(),
            vy: v * phase.cos(),
            vz: 0.0,
            ..BodyConfig::new_planet(i)
        });
    }
    bodies
}

/// Time `Simulation::tick` for growing body counts
/// Paste output directly into a spreadsheet to graph
pub fn bench_tick() {
    let ns = [2, 9, 50, 100, 200, 400, 800];

    println!("N,ticks,us_per_tick");

    for n in ns {
        // Large n: fewer ticks to avoid minutes of runtime
        let ticks = if n <= 100 { 10_000 } else { 200 };

        let params = Parameters {
            dt: 3600.0,
            ..Parameters::default()
        };
        let mut sim = match Simulation::new(make_bodies(n), params) {
            Ok(sim) => sim,
            Err(e) => {
                println!("N = {n}: could not build bodies: {e}");
                continue;
            }
        };
        sim.start();

        // Warm up
        sim.tick();

        let t0 = Instant::now();
        for _ in 0..ticks {
            sim.tick();
        }
        let us_per_tick = t0.elapsed().as_secs_f64() * 1e6 / ticks as f64;

        println!("{},{},{:.3}", n, ticks, us_per_tick);
    }
}
