//! Force contributors for the n-body core
//!
//! Defines the [`Force`] trait plus [`ForceSet`], a summing collection of
//! boxed contributors, and the direct pairwise [`NewtonianGravity`] term.
//!
//! Collision policy: a pair whose separation is at or below the sum of
//! the two collision radii is reported through [`StepEvents`] and skipped
//! before the force division, so the `1/d^2` arithmetic never sees a
//! near-zero separation. The radii are strictly positive for every
//! [`BodyKind`](crate::simulation::states::BodyKind), which makes the
//! check a hard guard, not a heuristic.

use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec3, System};

/// Per-tick observations made during the force pass.
#[derive(Debug, Default, Clone, Copy)]
pub struct StepEvents {
    /// Some pair came within the sum of its collision radii this tick
    pub collision: bool,
}

/// Trait for force sources operating on a [`System`]
/// Implementations add their contribution into `out[i]` for each body
/// and record anything noteworthy in `events`
pub trait Force {
    fn accumulate(&self, params: &Parameters, sys: &System, out: &mut [NVec3], events: &mut StepEvents);
}

/// Collection of force terms (gravity today, drag or thrust tomorrow)
/// Each term implements [`Force`] and their contributions are summed
/// into a single force vector per body
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Force + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total forces for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_forces(&self, params: &Parameters, sys: &System, out: &mut [NVec3]) -> StepEvents {
        // Zero buffer
        for f in out.iter_mut() {
            *f = NVec3::zeros();
        }
        let mut events = StepEvents::default();
        for term in &self.terms {
            term.accumulate(params, sys, out, &mut events);
        }
        events
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Direct O(n^2) pairwise Newtonian gravity
/// Reads the gravitational constant from [`Parameters`] at call time so
/// tuning-panel changes to `g` take effect on the very next tick
pub struct NewtonianGravity;

impl Force for NewtonianGravity {
    fn accumulate(&self, params: &Parameters, sys: &System, out: &mut [NVec3], events: &mut StepEvents) {
        let n = sys.bodies.len();
        if n == 0 {
            return;
        }

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let bi = &sys.bodies[i];
            let xi = bi.x;
            let mi = bi.m;

            for j in (i + 1)..n {
                let bj = &sys.bodies[j];

                // Displacement from i to j: i is pulled along +r,
                // j is pulled along -r
                let r = bj.x - xi;
                let d2 = r.dot(&r);
                let d = d2.sqrt();

                // Bodies touching or overlapping. Report and skip the
                // pair before dividing by a (near-)zero separation.
                if d <= bi.radius() + bj.radius() {
                    events.collision = true;
                    continue;
                }

                // |F| = G m_i m_j / d^2, along the unit displacement
                let mag = params.g * mi * bj.m / d2;
                let dir = r / d;

                // Equal and opposite
                out[i] += mag * dir;
                out[j] -= mag * dir;
            }
        }
    }
}
