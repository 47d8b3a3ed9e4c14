use orbitsim::simulation::scenario;
use orbitsim::{bench_tick, OrbitStatus, ScenarioConfig, Simulation};
use clap::Parser;
use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::path::PathBuf;

const SECONDS_PER_DAY: f64 = 24.0 * 3600.0;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file, looked up in `scenarios/` first. Built-in solar system if omitted.
    #[arg(short, long)]
    file_name: Option<String>,

    /// Sim seconds per tick, overrides the scenario
    #[arg(long)]
    dt: Option<f64>,

    /// Simulated days to run
    #[arg(long, default_value_t = 400.0)]
    days: f64,

    /// Run exactly this many ticks instead of `--days`
    #[arg(long)]
    ticks: Option<u64>,

    /// Time ticks for growing body counts and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario(file_name: Option<&str>) -> Result<ScenarioConfig> {
    let Some(file_name) = file_name else {
        return Ok(scenario::solar_system());
    };

    let bundled = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let path = if bundled.exists() { bundled } else { PathBuf::from(file_name) };

    ScenarioConfig::load(&path).with_context(|| format!("failed to load scenario {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    if args.bench {
        bench_tick();
        return Ok(());
    }

    let scenario_cfg = load_scenario(args.file_name.as_deref())?;
    let mut sim = Simulation::from_scenario(&scenario_cfg)?;
    if let Some(dt) = args.dt {
        sim.set_time_step(dt);
    }

    let ticks = match args.ticks {
        Some(t) => t,
        None => (args.days * SECONDS_PER_DAY / sim.dt()).ceil().max(0.0) as u64,
    };
    info!(bodies = sim.bodies().len(), dt = sim.dt(), ticks, "starting simulation");

    let names: Vec<String> = sim.registry().configs().iter().map(|c| c.name.clone()).collect();

    sim.start();
    for _ in 0..ticks {
        for event in sim.tick() {
            if event.status == OrbitStatus::Confirmed {
                info!(
                    body = %names[event.body_index],
                    orbit = event.orbit_count,
                    days = event.sim_time / SECONDS_PER_DAY,
                    "orbit completed"
                );
            }
        }
    }
    sim.stop();

    println!("t = {:.1} s ({:.2} days)", sim.time(), sim.time() / SECONDS_PER_DAY);
    for (i, body) in sim.bodies().iter().enumerate() {
        let orbits = sim.tracker(i).map_or(0, |t| t.orbit_count);
        println!(
            "{:>10}: r = {:10.4} units, |v| = {:.6} units/s, orbits = {}",
            names[i],
            body.x.norm(),
            body.v.norm(),
            orbits
        );
    }

    Ok(())
}
