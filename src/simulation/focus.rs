//! Camera-target state machine
//!
//! Two states: unfocused (camera target = geometric centroid of all
//! bodies) and focused on one body (camera target = that body's current
//! position). Transitions are plain data operations on [`FocusTracker`],
//! so there is no callback chain to guard against re-entry.

use super::states::{NVec3, System};

/// Where the camera should look this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraTarget {
    /// Geometric centroid of all bodies
    Centroid,
    /// A single designated body, by index
    Body(usize),
}

/// Tracks which body, if any, holds the focus. Mirrors its decision into
/// the per-body `focus` flags so the tuning boundary sees a consistent
/// view: at most one flag is ever set.
#[derive(Debug, Default, Clone)]
pub struct FocusTracker {
    focused: Option<usize>,
}

impl FocusTracker {
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn target(&self) -> CameraTarget {
        match self.focused {
            Some(i) => CameraTarget::Body(i),
            None => CameraTarget::Centroid,
        }
    }

    /// Transition function. Focusing body `index` clears every other
    /// body's flag; unfocusing moves back to the centroid only when
    /// `index` is the currently focused body. An out-of-range index
    /// only affects the tracker, never panics.
    pub fn set(&mut self, sys: &mut System, index: usize, on: bool) {
        if on {
            for (i, b) in sys.bodies.iter_mut().enumerate() {
                b.focus = i == index;
            }
            self.focused = Some(index);
        } else {
            if let Some(b) = sys.bodies.get_mut(index) {
                b.focus = false;
            }
            if self.focused == Some(index) {
                self.focused = None;
            }
        }
    }

    /// Drop any focus and clear all per-body flags.
    pub fn clear(&mut self, sys: &mut System) {
        for b in &mut sys.bodies {
            b.focus = false;
        }
        self.focused = None;
    }

    /// The point the camera should track this frame: the focused body's
    /// current position, or the centroid when unfocused. A stale index
    /// (never produced by `set`, but cheap to tolerate) falls back to
    /// the centroid.
    pub fn target_point(&self, sys: &System) -> NVec3 {
        match self.focused {
            Some(i) if i < sys.bodies.len() => sys.bodies[i].x,
            _ => sys.centroid(),
        }
    }
}
