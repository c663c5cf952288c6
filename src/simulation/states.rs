//! Core state types for the gravity simulation.
//!
//! Defines the body/system structs used everywhere else:
//! - `Body` — a point mass with live state, stored initial conditions,
//!   and a bounded trail of past positions
//! - `System` — the body collection plus the current simulation time `t`
//!
//! Bodies are constructed once at scenario build time and only mutated
//! in place afterwards; no body is added or removed at runtime.

use std::collections::VecDeque;

use nalgebra::Vector3;
use rand::Rng;

pub type NVec3 = Vector3<f64>;

/// Collision radius of a star, in world units
pub const STAR_RADIUS: f64 = 5.0;
/// Collision radius of a planet, in world units
pub const PLANET_RADIUS: f64 = 2.0;

/// What a body is rendered as. Affects the collision radius and the
/// visual asset, never the force law.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Star,
    Planet,
}

impl BodyKind {
    pub fn radius(self) -> f64 {
        match self {
            BodyKind::Star => STAR_RADIUS,
            BodyKind::Planet => PLANET_RADIUS,
        }
    }
}

/// Axis-aligned box used to draw randomized initial conditions,
/// sampled uniformly per component.
#[derive(Debug, Clone)]
pub struct Range3 {
    pub min: NVec3,
    pub max: NVec3,
}

impl Range3 {
    /// `min <= max` on every axis
    pub fn is_ordered(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y && self.min.z <= self.max.z
    }

    pub fn contains(&self, p: &NVec3) -> bool {
        self.min.x <= p.x && p.x <= self.max.x
            && self.min.y <= p.y && p.y <= self.max.y
            && self.min.z <= p.z && p.z <= self.max.z
    }

    /// Draw a uniform sample from the box. Degenerate axes (min == max)
    /// return that coordinate.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> NVec3 {
        NVec3::new(
            rng.gen_range(self.min.x..=self.max.x),
            rng.gen_range(self.min.y..=self.max.y),
            rng.gen_range(self.min.z..=self.max.z),
        )
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub kind: BodyKind,
    pub m: f64, // mass, always positive
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub f: NVec3, // accumulated force, recomputed every tick
    pub trail: VecDeque<NVec3>, // bounded position history, oldest in front
    pub x0: NVec3, // stored initial position, copied back on restart
    pub v0: NVec3, // stored initial velocity
    pub random_x: bool, // redraw x0 from x_range on restart
    pub random_v: bool, // redraw v0 from v_range on restart
    pub x_range: Range3,
    pub v_range: Range3,
    pub focus: bool, // at most one body has this set
}

impl Body {
    pub fn radius(&self) -> f64 {
        self.kind.radius()
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies
    pub t: f64, // time
}

impl System {
    /// Arithmetic mean of all body positions. Recomputed on every call,
    /// never cached.
    pub fn centroid(&self) -> NVec3 {
        let n = self.bodies.len();
        if n == 0 {
            return NVec3::zeros();
        }
        let sum: NVec3 = self.bodies.iter().map(|b| b.x).sum();
        sum / n as f64
    }
}
