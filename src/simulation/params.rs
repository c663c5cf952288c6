//! Tunable scalars for the simulation
//!
//! `Parameters` holds the values the tuning panel is allowed to change
//! at runtime. Writes land between frames and are read by the very next
//! tick; there is a single thread of execution, so no synchronization.

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64, // fixed time step per tick
    pub g: f64, // gravitational constant
    pub trail_limit: usize, // max stored trail positions per body
}
