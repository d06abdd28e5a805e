//! Input sampling for the scene controller
//!
//! The engine never owns a keyboard or window; it polls an opaque
//! [`DirectionalInput`] capability once per frame for four directional
//! boolean signals and leaves the mapping from real devices to the caller.

use bitflags::bitflags;

bitflags! {
    /// Snapshot of the four directional input signals for one frame
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DirectionFlags: u8 {
        /// Move along +Y
        const UP = 1 << 0;
        /// Move along -Y
        const DOWN = 1 << 1;
        /// Move along +X
        const LEFT = 1 << 2;
        /// Move along -X
        const RIGHT = 1 << 3;
    }
}

impl Default for DirectionFlags {
    /// No direction active
    fn default() -> Self {
        Self::empty()
    }
}

/// A pollable source of directional input
///
/// Sampled exactly once per scene update; implementations should report the
/// current state of the signals, not queued events.
pub trait DirectionalInput {
    /// Current state of the four directional signals
    fn sample(&self) -> DirectionFlags;
}

/// A fixed input source for scripted demos and tests
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticInput {
    flags: DirectionFlags,
}

impl StaticInput {
    /// Create a source that always reports the given flags
    pub fn new(flags: DirectionFlags) -> Self {
        Self { flags }
    }

    /// Replace the reported flags
    pub fn set(&mut self, flags: DirectionFlags) {
        self.flags = flags;
    }
}

impl DirectionalInput for StaticInput {
    fn sample(&self) -> DirectionFlags {
        self.flags
    }
}
