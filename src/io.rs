//! Collaborator seams
//!
//! The simulation never touches hardware. Input devices and displays plug in
//! through these traits.

use crate::sim::Snapshot;

/// Analog position plus a launch button
pub trait InputDevice {
    /// Raw analog sample, nominally in `[0, input_max]`
    fn read_position(&mut self) -> i32;
    /// True exactly once per button press
    fn read_launch_edge(&mut self) -> bool;
}

/// Anything that can draw a snapshot (erase old, draw new)
pub trait Display {
    fn present(&mut self, snapshot: &Snapshot);
}

/// Turns a debounced button level into press edges.
///
/// Holding the button yields a single edge, so a held button cannot
/// immediately relaunch after a lost ball or restart after game over.
#[derive(Debug, Clone, Copy, Default)]
pub struct LaunchEdge {
    was_pressed: bool,
}

impl LaunchEdge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current level; returns true on a released-to-pressed transition
    pub fn update(&mut self, pressed: bool) -> bool {
        let edge = pressed && !self.was_pressed;
        self.was_pressed = pressed;
        edge
    }
}
