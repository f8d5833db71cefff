//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One reducer call per rendered frame, fixed ordering
//! - No rendering, input-polling, or physics-integration dependencies
//! - The physics host owns position/velocity integration; the core only
//!   reads ground contact and emits desired velocity

pub mod animation;
pub mod input;
pub mod level;
pub mod player;

pub use animation::{AnimKey, AnimationDescriptor, AnimationRegistry};
pub use input::InputState;
pub use level::{GeometryConfig, GridCell, LevelGeometry, LevelLayout, StaticRect, TileKind};
pub use player::{AnimCommand, Facing, FrameOutput, PlayerAction, PlayerState, step};
