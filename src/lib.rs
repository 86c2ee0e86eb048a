pub mod error;
pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use error::SimError;

pub use simulation::vector::NVec3;
pub use simulation::states::{SimulationState, Spring};
pub use simulation::params::SimParams;
pub use simulation::forces::{spring_force, EndpointSnapshot, SpringForce};
pub use simulation::collision::{resolve_axis, resolve_particle, resolve_boundary};
pub use simulation::integrator::{advance, run, sim_time_step, StepReport};
pub use simulation::diagnostics::{energy, Energy};
pub use simulation::scenario::Scenario;

pub use configuration::config::{RunConfig, ParametersConfig, ParticleConfig, SpringConfig, LatticeConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_step, bench_step_curve};
