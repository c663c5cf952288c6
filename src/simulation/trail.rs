//! Bounded per-body position history
//!
//! Each body keeps a FIFO of recent positions rendered as a polyline.
//! Capacity is global and may change at runtime; recording converges a
//! shrunk trail on the next tick, and [`enforce_limit`] truncates
//! immediately when the caller wants that right after a limit change.

use super::states::System;

/// Append the current position of every body to its trail, then evict
/// from the front while over `limit`
pub fn record(sys: &mut System, limit: usize) {
    for b in &mut sys.bodies {
        b.trail.push_back(b.x);
        while b.trail.len() > limit {
            b.trail.pop_front();
        }
    }
}

/// Truncate every trail to `limit` without recording a new snapshot
pub fn enforce_limit(sys: &mut System, limit: usize) {
    for b in &mut sys.bodies {
        while b.trail.len() > limit {
            b.trail.pop_front();
        }
    }
}

/// Empty every trail (restart path)
pub fn clear(sys: &mut System) {
    for b in &mut sys.bodies {
        b.trail.clear();
    }
}
