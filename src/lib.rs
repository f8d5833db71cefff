//! Block Hopper - simulation core for a 2D overworld platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player controller, level geometry, animations)
//! - `engine`: Collaborator traits the host engine implements (input, physics, animation playback)
//! - `scene`: Start/World/End scene flow and the per-frame world wiring

pub mod engine;
pub mod scene;
pub mod sim;

pub use scene::{Scene, SceneFlow, WorldScene};
pub use sim::{AnimCommand, AnimKey, FrameOutput, InputState, PlayerState};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Base horizontal speed in world units per second
    pub const BASE_RUN_SPEED: f32 = 200.0;
    /// Speed multiplier while the run modifier is held
    pub const RUN_MODIFIER: f32 = 2.0;
    /// Upward impulse applied on the jump-initiation frame (positive magnitude)
    pub const JUMP_IMPULSE: f32 = 750.0;
    /// Downward gravity handed to the physics host (the core never applies it)
    pub const GRAVITY_Y: f32 = 2000.0;

    /// World bounds in pixels
    pub const WORLD_WIDTH: f32 = 1500.0;
    pub const WORLD_HEIGHT: f32 = 480.0;

    /// Source tile dimensions in pixels, before scaling
    pub const CELL_WIDTH: u32 = 16;
    pub const CELL_HEIGHT: u32 = 16;
    /// Uniform sprite/tile scale factor
    pub const SPRITE_SCALE: f32 = 2.0;
    /// Background image width in pixels; the ground strip spans it
    pub const BACKGROUND_WIDTH: u32 = 768;
    /// World-space Y of the two stacked ground rows
    pub const GROUND_ROW_YS: [f32; 2] = [416.0, 448.0];

    /// Player spawn position (top-left origin)
    pub const PLAYER_SPAWN: Vec2 = Vec2::new(32.0, 300.0);
}

/// Scale a grid column to world pixels along the X axis
#[inline]
pub fn grid_to_world_x(grid_x: i32, cell_width: u32, scale: f32) -> f32 {
    grid_x as f32 * cell_width as f32 * scale
}

/// Scale a grid row to world pixels along the Y axis
#[inline]
pub fn grid_to_world_y(grid_y: i32, cell_height: u32, scale: f32) -> f32 {
    grid_y as f32 * cell_height as f32 * scale
}

/// World-space size of one scaled cell
#[inline]
pub fn cell_size(cell_width: u32, cell_height: u32, scale: f32) -> Vec2 {
    Vec2::new(cell_width as f32 * scale, cell_height as f32 * scale)
}
