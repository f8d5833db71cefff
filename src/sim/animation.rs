//! Animation descriptor table
//!
//! Purely descriptive: maps logical action keys to spritesheet frame
//! ranges and playback parameters. Built once, never mutated; the host's
//! animation player consumes the descriptors.

use serde::{Deserialize, Serialize};

/// Logical animation keys the controller and level can select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimKey {
    Idle,
    Run,
    Jump,
    /// Ambient shimmer on item blocks, independent of the player
    ItemBlockShimmer,
}

impl AnimKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimKey::Idle => "idle",
            AnimKey::Run => "run",
            AnimKey::Jump => "jump",
            AnimKey::ItemBlockShimmer => "item_block_shimmer",
        }
    }
}

/// Frame range and playback parameters for one animation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationDescriptor {
    pub key: AnimKey,
    pub frame_start: u32,
    pub frame_end: u32,
    /// Frames per second; 0 holds a single static frame
    pub frame_rate: f32,
    pub repeat_forever: bool,
    /// Reverse direction at the ends of the cycle instead of wrapping
    pub yoyo: bool,
}

/// Immutable key → descriptor table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationRegistry {
    entries: Vec<AnimationDescriptor>,
}

impl AnimationRegistry {
    /// Registry with the prototype's reference animation set
    pub fn overworld() -> Self {
        Self {
            entries: vec![
                AnimationDescriptor {
                    key: AnimKey::Idle,
                    frame_start: 0,
                    frame_end: 0,
                    frame_rate: 0.0,
                    repeat_forever: true,
                    yoyo: false,
                },
                AnimationDescriptor {
                    key: AnimKey::Run,
                    frame_start: 1,
                    frame_end: 3,
                    frame_rate: 10.0,
                    repeat_forever: true,
                    yoyo: true,
                },
                AnimationDescriptor {
                    key: AnimKey::Jump,
                    frame_start: 5,
                    frame_end: 5,
                    frame_rate: 0.0,
                    repeat_forever: true,
                    yoyo: false,
                },
                AnimationDescriptor {
                    key: AnimKey::ItemBlockShimmer,
                    frame_start: 0,
                    frame_end: 2,
                    frame_rate: 3.0,
                    repeat_forever: true,
                    yoyo: true,
                },
            ],
        }
    }

    /// Build from an explicit descriptor list (e.g. deserialized data)
    pub fn from_entries(entries: Vec<AnimationDescriptor>) -> Self {
        Self { entries }
    }

    /// Look up a key; `None` is the defined not-found signal
    pub fn lookup(&self, key: AnimKey) -> Option<&AnimationDescriptor> {
        self.entries.iter().find(|d| d.key == key)
    }

    /// Look up a key, falling back to an idle descriptor with a warning
    /// when the key is not registered
    pub fn lookup_or_idle(&self, key: AnimKey) -> &AnimationDescriptor {
        match self.lookup(key) {
            Some(descriptor) => descriptor,
            None => {
                log::warn!("animation key {:?} not registered, falling back to idle", key);
                self.lookup(AnimKey::Idle).unwrap_or(&FALLBACK_IDLE)
            }
        }
    }
}

/// Single-frame idle used when even `Idle` is missing from a registry
const FALLBACK_IDLE: AnimationDescriptor = AnimationDescriptor {
    key: AnimKey::Idle,
    frame_start: 0,
    frame_end: 0,
    frame_rate: 0.0,
    repeat_forever: true,
    yoyo: false,
};
