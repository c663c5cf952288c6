//! Micro-benchmarks for the force pass and the full driver tick
//!
//! Run from the binary with `--bench`. Output is plain CSV-ish text to
//! paste into a spreadsheet.

use std::time::Instant;

use crate::configuration::config::{BodyConfig, BodyKindConfig, ParametersConfig, ScenarioConfig};
use crate::simulation::forces::{ForceSet, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, BodyKind, NVec3, Range3, System};

/// Lattice spacing between benchmark bodies, in world units
const LATTICE_SPACING: f64 = 25.0;
/// Max per-component jitter; keeps neighbors at least
/// `LATTICE_SPACING - 2 * LATTICE_JITTER` apart, well over any
/// collision distance
const LATTICE_JITTER: f64 = 5.0;

/// Deterministic jittered-lattice placement. Adjacent cells stay at
/// least 15 units apart, so no pair ever starts within the 4-unit
/// planet contact distance and a warm-up tick can never latch the halt.
fn lattice(i: usize) -> NVec3 {
    let i_f = i as f64;
    let cell = NVec3::new(
        (i % 16) as f64,
        ((i / 16) % 16) as f64,
        (i / 256) as f64,
    ) * LATTICE_SPACING;
    let jitter = NVec3::new(
        (i_f * 0.37).sin(),
        (i_f * 0.13).cos(),
        (i_f * 0.07).sin(),
    ) * LATTICE_JITTER;
    cell + jitter
}

/// Body layout shared by the benchmarks; public so its spacing
/// guarantee is checkable from the integration tests
pub fn make_system(n: usize) -> System {
    let range = Range3 {
        min: NVec3::from_element(-500.0),
        max: NVec3::from_element(500.0),
    };
    let bodies = (0..n)
        .map(|i| {
            let x = lattice(i);
            Body {
                kind: BodyKind::Planet,
                m: 1.0,
                x,
                v: NVec3::zeros(),
                f: NVec3::zeros(),
                trail: std::collections::VecDeque::new(),
                x0: x,
                v0: NVec3::zeros(),
                random_x: false,
                random_v: false,
                x_range: range.clone(),
                v_range: range.clone(),
                focus: false,
            }
        })
        .collect();
    System { bodies, t: 0.0 }
}

fn make_params() -> Parameters {
    Parameters {
        dt: 0.001,
        g: 0.1,
        trail_limit: 100,
    }
}

/// Time a single direct force pass for a range of body counts
pub fn bench_gravity() {
    let ns = [200, 400, 800, 1600, 3200, 6400];

    println!("N,force_pass_ms");
    for n in ns {
        let sys = make_system(n);
        let params = make_params();
        let forces = ForceSet::new().with(NewtonianGravity);

        let mut out = vec![NVec3::zeros(); n];

        // Warm up
        forces.accumulate_forces(&params, &sys, &mut out);

        let t0 = Instant::now();
        forces.accumulate_forces(&params, &sys, &mut out);
        let ms = t0.elapsed().as_secs_f64() * 1000.0;

        println!("{n},{ms:.6}");
    }
}

/// Time full driver ticks (integrate + trail bookkeeping) for a range of
/// body counts
pub fn bench_tick() {
    let ns = [200, 400, 800, 1600, 3200];
    let steps = 5;

    println!("N,tick_ms");
    for n in ns {
        let cfg = ScenarioConfig {
            parameters: ParametersConfig {
                dt: 0.001,
                g: 0.1,
                trail_limit: 100,
                seed: 42,
            },
            bodies: (0..n)
                .map(|i| {
                    let x = lattice(i);
                    BodyConfig {
                        kind: BodyKindConfig::Planet,
                        m: 1.0,
                        x: [x.x, x.y, x.z],
                        v: [0.0, 0.0, 0.0],
                        random_position: false,
                        random_velocity: false,
                        position_range: None,
                        velocity_range: None,
                    }
                })
                .collect(),
        };
        let mut scenario = Scenario::build_scenario(cfg).expect("bench scenario is valid");

        // Warm up
        scenario.tick();
        assert!(scenario.running, "bench layout must not collide (n = {n})");

        let t0 = Instant::now();
        for _ in 0..steps {
            scenario.tick();
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;
        assert!(scenario.running, "bench layout must not collide (n = {n})");

        println!("{n},{ms:.6}");
    }
}
