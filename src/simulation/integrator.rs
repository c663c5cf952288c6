//! Fixed-step time integrator for the n-body system
//!
//! Semi-implicit (symplectic) Euler: forces are accumulated once per
//! tick, velocities are updated first, and positions advance using the
//! freshly updated velocities. Driven by a [`ForceSet`] and [`Parameters`].

use super::forces::{ForceSet, StepEvents};
use super::params::Parameters;
use super::states::{NVec3, System};

/// Advance the system by one step of `params.dt`
///
/// Updates every body's accumulated force, velocity, and position
/// in-place and advances `sys.t`. Pure physics: trail recording and
/// camera state are the driver's responsibility.
pub fn symplectic_euler(sys: &mut System, forces: &ForceSet, params: &Parameters) -> StepEvents {
    let n = sys.bodies.len();
    if n == 0 {
        return StepEvents::default();
    }

    let dt = params.dt;

    // f[i] will hold the total force on body i at the current positions
    let mut f = vec![NVec3::zeros(); n];
    let events = forces.accumulate_forces(params, &*sys, &mut f);

    // Kick then drift:
    // v_n+1 = v_n + (f / m) dt
    // x_n+1 = x_n + v_n+1 dt   (velocity first — semi-implicit Euler)
    for (b, fi) in sys.bodies.iter_mut().zip(f.iter()) {
        b.f = *fi;
        b.v += (b.f / b.m) * dt;
        b.x += b.v * dt;
    }

    sys.t += dt;

    events
}
