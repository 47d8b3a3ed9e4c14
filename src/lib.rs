pub mod simulation;
pub mod configuration;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Body, System, Trail, NVec3};
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::integrator::euler_step;
pub use simulation::orbit::{OrbitEvent, OrbitStatus, OrbitTracker};
pub use simulation::registry::{BodyField, BodyRegistry};
pub use simulation::engine::Simulation;
pub use simulation::params::Parameters;
pub use configuration::config::{BodyConfig, BodySpec, ParametersConfig, PhysicalBody, ScenarioConfig};
pub use error::{SimError, SimResult};
pub use benchmark::benchmark::bench_tick;
