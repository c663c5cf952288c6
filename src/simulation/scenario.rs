//! Build and drive a fully-initialized simulation scenario
//!
//! Takes a [`ScenarioConfig`] (YAML-facing) and produces the runtime
//! bundle: parameters, system state at t = 0, the active force set, the
//! camera-focus tracker, the running flag, and a seeded RNG for
//! randomized restarts. The bundle is inserted into Bevy as a `Resource`
//! and driven one [`Scenario::tick`] per rendered frame.
//!
//! All configuration is validated here, at the boundary, so the
//! integrator never sees a non-positive mass, a zero time step, or two
//! bodies stacked on the same point.

use bevy::prelude::Resource;
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::configuration::config::{BodyKindConfig, RangeConfig, ScenarioConfig};
use crate::simulation::focus::FocusTracker;
use crate::simulation::forces::{ForceSet, NewtonianGravity};
use crate::simulation::integrator::symplectic_euler;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyKind, NVec3, Range3, System};
use crate::simulation::trail;

/// Default spawn box for randomized positions when the config gives none
const DEFAULT_POSITION_RANGE: (f64, f64) = (-50.0, 50.0);
/// Default spawn box for randomized velocities when the config gives none
const DEFAULT_VELOCITY_RANGE: (f64, f64) = (-1.0, 1.0);

/// Rejected configuration or tuning input.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("scenario has no bodies")]
    NoBodies,
    #[error("body {index}: mass must be positive and finite, got {value}")]
    NonPositiveMass { index: usize, value: f64 },
    #[error("time step must be positive and finite, got {0}")]
    NonPositiveTimeStep(f64),
    #[error("gravitational constant must be non-negative and finite, got {0}")]
    InvalidGravity(f64),
    #[error("trail limit must be at least 1")]
    ZeroTrailLimit,
    #[error("bodies {a} and {b} start at the same position")]
    CoincidentBodies { a: usize, b: usize },
    #[error("body {index}: spawn range has min > max on some axis")]
    InvalidRange { index: usize },
    #[error("body index {index} out of range for {len} bodies")]
    BodyIndexOutOfRange { index: usize, len: usize },
    #[error("body {index}: value must be finite")]
    NonFiniteValue { index: usize },
}

/// One settable field of the running scenario. This is the whole tuning
/// surface: every external control (panel, keyboard, test) goes through
/// [`Scenario::apply`], which validates before mutating.
#[derive(Debug, Clone, Copy)]
pub enum Tunable {
    TimeStep(f64),
    GravitationalConstant(f64),
    TrailLimit(usize),
    Running(bool),
    Mass { index: usize, value: f64 },
    InitialPosition { index: usize, value: NVec3 },
    InitialVelocity { index: usize, value: NVec3 },
    RandomizePosition { index: usize, on: bool },
    RandomizeVelocity { index: usize, on: bool },
    Focus { index: usize, on: bool },
}

/// Bevy resource holding the fully-initialized runtime scenario
#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub forces: ForceSet,
    pub focus: FocusTracker,
    /// Ticks advance only while this is set. A collision latches it
    /// false; only an explicit resume or restart sets it again.
    pub running: bool,
    rng: StdRng,
}

fn range_from_config(cfg: Option<&RangeConfig>, default: (f64, f64)) -> Range3 {
    match cfg {
        Some(r) => Range3 {
            min: NVec3::new(r.min[0], r.min[1], r.min[2]),
            max: NVec3::new(r.max[0], r.max[1], r.max[2]),
        },
        None => Range3 {
            min: NVec3::from_element(default.0),
            max: NVec3::from_element(default.1),
        },
    }
}

impl Scenario {
    /// Validate `cfg` and build the runtime bundle with bodies at t = 0.
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ScenarioError> {
        let p = &cfg.parameters;
        if !(p.dt.is_finite() && p.dt > 0.0) {
            return Err(ScenarioError::NonPositiveTimeStep(p.dt));
        }
        if !(p.g.is_finite() && p.g >= 0.0) {
            return Err(ScenarioError::InvalidGravity(p.g));
        }
        if p.trail_limit == 0 {
            return Err(ScenarioError::ZeroTrailLimit);
        }
        if cfg.bodies.is_empty() {
            return Err(ScenarioError::NoBodies);
        }

        let mut bodies = Vec::with_capacity(cfg.bodies.len());
        for (index, bc) in cfg.bodies.iter().enumerate() {
            if !(bc.m.is_finite() && bc.m > 0.0) {
                return Err(ScenarioError::NonPositiveMass { index, value: bc.m });
            }
            let x0 = NVec3::new(bc.x[0], bc.x[1], bc.x[2]);
            let v0 = NVec3::new(bc.v[0], bc.v[1], bc.v[2]);
            if !(x0.iter().all(|c| c.is_finite()) && v0.iter().all(|c| c.is_finite())) {
                return Err(ScenarioError::NonFiniteValue { index });
            }

            let x_range = range_from_config(bc.position_range.as_ref(), DEFAULT_POSITION_RANGE);
            let v_range = range_from_config(bc.velocity_range.as_ref(), DEFAULT_VELOCITY_RANGE);
            if !x_range.is_ordered() || !v_range.is_ordered() {
                return Err(ScenarioError::InvalidRange { index });
            }

            let kind = match bc.kind {
                BodyKindConfig::Star => BodyKind::Star,
                BodyKindConfig::Planet => BodyKind::Planet,
            };

            bodies.push(Body {
                kind,
                m: bc.m,
                x: x0,
                v: v0,
                f: NVec3::zeros(),
                trail: std::collections::VecDeque::new(),
                x0,
                v0,
                random_x: bc.random_position,
                random_v: bc.random_velocity,
                x_range,
                v_range,
                focus: false,
            });
        }

        // Two bodies on the same point would make the very first force
        // pass degenerate; reject instead of halting on tick one.
        for a in 0..bodies.len() {
            for b in (a + 1)..bodies.len() {
                if bodies[a].x0 == bodies[b].x0 {
                    return Err(ScenarioError::CoincidentBodies { a, b });
                }
            }
        }

        log::info!(
            "built scenario: {} bodies, dt = {}, g = {}, trail limit = {}",
            bodies.len(),
            p.dt,
            p.g,
            p.trail_limit
        );

        Ok(Self {
            parameters: Parameters {
                dt: p.dt,
                g: p.g,
                trail_limit: p.trail_limit,
            },
            system: System { bodies, t: 0.0 },
            forces: ForceSet::new().with(NewtonianGravity),
            focus: FocusTracker::default(),
            running: true,
            rng: StdRng::seed_from_u64(p.seed),
        })
    }

    /// One driver tick: integrate a step, record trails, latch the halt
    /// flag if the force pass saw a collision. No-op while paused or
    /// halted.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }

        let events = symplectic_euler(&mut self.system, &self.forces, &self.parameters);
        trail::record(&mut self.system, self.parameters.trail_limit);

        if events.collision {
            log::warn!("collision at t = {:.6}; simulation halted", self.system.t);
            self.running = false;
        }
    }

    /// Return to the unfocused, running state with trails cleared.
    /// Bodies flagged for randomization draw fresh initial conditions
    /// from their spawn ranges; all others reuse the stored ones.
    pub fn restart(&mut self) {
        for b in &mut self.system.bodies {
            if b.random_x {
                b.x0 = b.x_range.sample(&mut self.rng);
            }
            if b.random_v {
                b.v0 = b.v_range.sample(&mut self.rng);
            }
            b.x = b.x0;
            b.v = b.v0;
            b.f = NVec3::zeros();
            b.trail.clear();
        }
        self.focus.clear(&mut self.system);
        self.system.t = 0.0;
        self.running = true;
        log::info!("restart: {} bodies reset", self.system.bodies.len());
    }

    /// Apply one tuning change. Invalid values are rejected here and the
    /// scenario is left untouched; accepted scalar changes are read by
    /// the very next tick.
    pub fn apply(&mut self, change: Tunable) -> Result<(), ScenarioError> {
        match change {
            Tunable::TimeStep(dt) => {
                if !(dt.is_finite() && dt > 0.0) {
                    return Err(ScenarioError::NonPositiveTimeStep(dt));
                }
                self.parameters.dt = dt;
            }
            Tunable::GravitationalConstant(g) => {
                if !(g.is_finite() && g >= 0.0) {
                    return Err(ScenarioError::InvalidGravity(g));
                }
                self.parameters.g = g;
            }
            Tunable::TrailLimit(limit) => {
                if limit == 0 {
                    return Err(ScenarioError::ZeroTrailLimit);
                }
                self.parameters.trail_limit = limit;
            }
            Tunable::Running(on) => {
                self.running = on;
            }
            Tunable::Mass { index, value } => {
                self.check_index(index)?;
                if !(value.is_finite() && value > 0.0) {
                    return Err(ScenarioError::NonPositiveMass { index, value });
                }
                self.system.bodies[index].m = value;
            }
            Tunable::InitialPosition { index, value } => {
                self.check_index(index)?;
                if !value.iter().all(|c| c.is_finite()) {
                    return Err(ScenarioError::NonFiniteValue { index });
                }
                self.system.bodies[index].x0 = value;
            }
            Tunable::InitialVelocity { index, value } => {
                self.check_index(index)?;
                if !value.iter().all(|c| c.is_finite()) {
                    return Err(ScenarioError::NonFiniteValue { index });
                }
                self.system.bodies[index].v0 = value;
            }
            Tunable::RandomizePosition { index, on } => {
                self.check_index(index)?;
                self.system.bodies[index].random_x = on;
            }
            Tunable::RandomizeVelocity { index, on } => {
                self.check_index(index)?;
                self.system.bodies[index].random_v = on;
            }
            Tunable::Focus { index, on } => {
                self.check_index(index)?;
                self.focus.set(&mut self.system, index, on);
            }
        }
        Ok(())
    }

    /// Truncate all trails to the current limit right now instead of
    /// waiting for the next tick to converge them.
    pub fn enforce_trail_limits(&mut self) {
        trail::enforce_limit(&mut self.system, self.parameters.trail_limit);
    }

    fn check_index(&self, index: usize) -> Result<(), ScenarioError> {
        let len = self.system.bodies.len();
        if index >= len {
            return Err(ScenarioError::BodyIndexOutOfRange { index, len });
        }
        Ok(())
    }
}
