//! Per-frame input snapshot
//!
//! The input collaborator refreshes one of these before every update call.
//! The core never mutates it.

use serde::{Deserialize, Serialize};

/// Directional and modifier key state for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub up: bool,
    /// Present in the cursor-key set but unused by the controller
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Run modifier (shift): doubles horizontal pace while held
    pub run: bool,
}

impl InputState {
    /// True when either horizontal direction is held
    #[inline]
    pub fn horizontal_held(&self) -> bool {
        self.left || self.right
    }
}
