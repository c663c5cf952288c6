//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – tunable scalars and the restart RNG seed
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   dt: 0.01            # fixed time step per tick
//!   g: 1.0              # gravitational constant
//!   trail_limit: 400    # max trail positions per body
//!   seed: 42            # RNG seed for randomized restarts
//!
//! bodies:
//!   - kind: star
//!     m: 1000.0
//!     x: [0.0, 0.0, 0.0]
//!     v: [0.0, 0.0, 0.0]
//!   - kind: planet
//!     m: 1.0
//!     x: [60.0, 0.0, 0.0]
//!     v: [0.0, 0.0, 4.0]
//!     random_position: true
//!     position_range:
//!       min: [-80.0, -10.0, -80.0]
//!       max: [80.0, 10.0, 80.0]
//! ```
//!
//! Validation (positive mass, positive dt, distinct initial positions,
//! ordered ranges) happens when the runtime scenario is built, so these
//! structs stay a plain mirror of the file.

use serde::Deserialize;

/// Body kind as written in YAML: `star` or `planet`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKindConfig {
    #[serde(rename = "star")]
    Star,
    #[serde(rename = "planet")]
    Planet,
}

/// Tunable scalars for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64,            // fixed time step per tick
    pub g: f64,             // gravitational constant
    pub trail_limit: usize, // max stored trail positions per body
    #[serde(default)]
    pub seed: u64, // deterministic seed for randomized restarts
}

/// Axis-aligned sampling box for randomized initial conditions
#[derive(Deserialize, Debug, Clone)]
pub struct RangeConfig {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub kind: BodyKindConfig, // star or planet (radius + visuals only)
    pub m: f64,               // mass
    pub x: [f64; 3],          // initial position
    pub v: [f64; 3],          // initial velocity
    #[serde(default)]
    pub random_position: bool, // redraw position on restart
    #[serde(default)]
    pub random_velocity: bool, // redraw velocity on restart
    #[serde(default)]
    pub position_range: Option<RangeConfig>,
    #[serde(default)]
    pub velocity_range: Option<RangeConfig>,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
}
