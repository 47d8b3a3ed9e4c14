pub mod units;
pub mod states;
pub mod params;
pub mod registry;
pub mod forces;
pub mod integrator;
pub mod orbit;
pub mod engine;
pub mod scenario;
