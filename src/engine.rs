//! Collaborator contracts the core depends on
//!
//! The host engine (rendering, input polling, arcade physics, animation
//! playback) sits behind these traits so the simulation stays pure and any
//! backend satisfying them is substitutable.
//!
//! Required per-frame ordering: the physics pass refreshes
//! [`PhysicsHost::ground_contact`] strictly before the world update runs,
//! and consumes the velocities the update sets strictly after, before the
//! next contact refresh.

use glam::Vec2;

use crate::sim::{AnimKey, InputState, StaticRect};

/// Source of the per-frame input snapshot
pub trait InputSource {
    /// Current key state, refreshed once before each update
    fn sample(&self) -> InputState;
}

/// Arcade-style rigid-body physics backend
///
/// Static rectangles are immovable obstacles; the single dynamic body is
/// the player. Gravity and integration are the backend's job.
pub trait PhysicsHost {
    /// Register one immovable collision rectangle (scene setup only)
    fn add_static_rect(&mut self, rect: &StaticRect);

    /// Register the player's dynamic body at its spawn position
    fn spawn_player(&mut self, pos: Vec2);

    /// Is the dynamic body currently resting on a static body below it
    fn ground_contact(&self) -> bool;

    /// Desired horizontal velocity for the next integration step
    fn set_velocity_x(&mut self, vx: f32);

    /// Desired vertical velocity; only called on jump initiation
    fn set_velocity_y(&mut self, vy: f32);
}

/// Sprite animation playback
pub trait AnimationPlayer {
    /// Play the keyed animation; must be idempotent when the key is
    /// already active, and restart from the first frame on a key change
    fn play(&mut self, key: AnimKey);

    /// Stop cycling and hold the frame currently shown
    fn hold_frame(&mut self);

    /// Mirror the sprite horizontally
    fn set_flip_x(&mut self, flipped: bool);
}
