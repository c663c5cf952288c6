pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, BodyKind, NVec3, Range3, System, PLANET_RADIUS, STAR_RADIUS};
pub use simulation::forces::{Force, ForceSet, NewtonianGravity, StepEvents};
pub use simulation::integrator::symplectic_euler;
pub use simulation::params::Parameters;
pub use simulation::focus::{CameraTarget, FocusTracker};
pub use simulation::scenario::{Scenario, ScenarioError, Tunable};

pub use configuration::config::{BodyConfig, BodyKindConfig, ParametersConfig, RangeConfig, ScenarioConfig};

pub use visualization::gravsim_vis3d::run_3d;

pub use benchmark::benchmark::{bench_gravity, bench_tick};
