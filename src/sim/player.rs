//! Player controller state machine
//!
//! One reducer call per frame: `(PlayerState, InputState, ground_contact)`
//! in, velocity command + animation intent out. The physics host applies
//! gravity and integrates; this module owns only the control flags.

use serde::{Deserialize, Serialize};

use super::animation::AnimKey;
use super::input::InputState;
use crate::consts::{BASE_RUN_SPEED, JUMP_IMPULSE, RUN_MODIFIER};

/// Horizontal facing, derived from the last nonzero horizontal input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    /// Sprite's unmirrored orientation
    #[default]
    Right,
}

impl Facing {
    /// Whether the sprite should be horizontally mirrored
    #[inline]
    pub fn flip_x(&self) -> bool {
        matches!(self, Facing::Left)
    }
}

/// Control flags for the single player entity
///
/// Invariants, restored by every [`step`] call:
/// - ground contact clears `jumping` and `airborne` unconditionally
/// - no ground contact forces `airborne` true (falling off a ledge counts
///   even if no jump was ever initiated)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub facing: Facing,
    /// Latched from the jump-initiation frame until the next ground contact
    pub jumping: bool,
    /// True whenever the physics step reports no ground contact
    pub airborne: bool,
}

impl PlayerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the current action from flags + held input
    pub fn action(&self, input: &InputState) -> PlayerAction {
        if self.jumping {
            PlayerAction::Jumping
        } else if input.horizontal_held() {
            if self.airborne {
                PlayerAction::AirborneCoasting
            } else {
                PlayerAction::Running
            }
        } else {
            PlayerAction::Idle
        }
    }
}

/// The controller's states, in animation-priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Jump latch is set; wins over every other state
    Jumping,
    /// Horizontal input held while on the ground
    Running,
    /// Horizontal input held while airborne without a jump latch,
    /// e.g. after walking off a ledge
    AirborneCoasting,
    Idle,
}

impl PlayerAction {
    /// Rendering intent for this state
    pub fn render_intent(&self) -> AnimCommand {
        match self {
            PlayerAction::Jumping => AnimCommand::Play(AnimKey::Jump),
            PlayerAction::Running => AnimCommand::Play(AnimKey::Run),
            // Airborne coasting freezes the current frame instead of
            // looping the run cycle
            PlayerAction::AirborneCoasting => AnimCommand::HoldFrame,
            PlayerAction::Idle => AnimCommand::Play(AnimKey::Idle),
        }
    }
}

/// Animation intent for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimCommand {
    /// Play (or keep playing) the keyed animation; idempotent on the host
    Play(AnimKey),
    /// Stop cycling and hold whatever frame is currently shown
    HoldFrame,
}

/// Everything the controller tells its collaborators for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutput {
    /// Desired horizontal velocity, set every frame
    pub velocity_x: f32,
    /// Desired vertical velocity; `Some` only on the jump-initiation frame
    /// (negative = upward)
    pub velocity_y: Option<f32>,
    pub facing: Facing,
    pub anim: AnimCommand,
}

/// Advance the controller by one frame
///
/// `ground_contact` must come from the physics pass that ran immediately
/// before this call; the returned velocities must be handed to the
/// integrator before the next contact refresh.
pub fn step(state: &mut PlayerState, input: &InputState, ground_contact: bool) -> FrameOutput {
    // Ground contact clears the jump latch; losing contact marks airborne
    // without touching the latch.
    if ground_contact {
        state.jumping = false;
        state.airborne = false;
    } else {
        state.airborne = true;
    }

    // Horizontal pace; right wins when both directions are held.
    let pace = BASE_RUN_SPEED * if input.run { RUN_MODIFIER } else { 1.0 };
    let velocity_x = if input.right {
        state.facing = Facing::Right;
        pace
    } else if input.left {
        state.facing = Facing::Left;
        -pace
    } else {
        0.0
    };

    // Jump latch. Checked after the contact reset above, so holding up
    // across a landing frame re-jumps immediately (no input edge
    // detection, matching the original feel).
    let velocity_y = if input.up && !state.jumping {
        state.jumping = true;
        Some(-JUMP_IMPULSE)
    } else {
        None
    };

    FrameOutput {
        velocity_x,
        velocity_y,
        facing: state.facing,
        anim: state.action(input).render_intent(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn held(left: bool, right: bool, up: bool, run: bool) -> InputState {
        InputState {
            up,
            down: false,
            left,
            right,
            run,
        }
    }

    #[test]
    fn test_ground_contact_clears_flags() {
        let mut state = PlayerState {
            facing: Facing::Left,
            jumping: true,
            airborne: true,
        };
        step(&mut state, &InputState::default(), true);
        assert!(!state.jumping);
        assert!(!state.airborne);
    }

    #[test]
    fn test_losing_contact_sets_airborne_only() {
        let mut state = PlayerState::new();
        step(&mut state, &InputState::default(), false);
        assert!(state.airborne);
        assert!(!state.jumping);
    }

    #[test]
    fn test_jump_latch_fires_once() {
        let mut state = PlayerState::new();
        let input = held(false, false, true, false);

        // Airborne throughout: only the first frame gets the impulse
        let first = step(&mut state, &input, false);
        assert_eq!(first.velocity_y, Some(-750.0));
        assert!(state.jumping);

        for _ in 0..10 {
            let out = step(&mut state, &input, false);
            assert_eq!(out.velocity_y, None);
            assert!(state.jumping);
        }
    }

    #[test]
    fn test_jump_retrigger_on_landing_frame() {
        // Contact clears the latch before the jump check in the same call,
        // so holding up across a landing re-jumps immediately.
        let mut state = PlayerState {
            jumping: true,
            airborne: true,
            ..PlayerState::new()
        };
        let out = step(&mut state, &held(false, false, true, false), true);
        assert_eq!(out.velocity_y, Some(-750.0));
        assert!(state.jumping);
    }

    #[test]
    fn test_right_wins_when_both_held() {
        let mut state = PlayerState::new();
        let out = step(&mut state, &held(true, true, false, false), true);
        assert_eq!(out.velocity_x, 200.0);
        assert_eq!(out.facing, Facing::Right);
    }

    #[test]
    fn test_run_modifier_doubles_pace() {
        let mut state = PlayerState::new();
        let walk = step(&mut state, &held(true, false, false, false), true);
        let run = step(&mut state, &held(true, false, false, true), true);
        assert_eq!(walk.velocity_x, -200.0);
        assert_eq!(run.velocity_x, -400.0);
    }

    #[test]
    fn test_jump_animation_beats_run() {
        let mut state = PlayerState::new();
        let out = step(&mut state, &held(false, true, true, false), false);
        assert!(state.jumping);
        assert_eq!(out.anim, AnimCommand::Play(AnimKey::Jump));
    }

    #[test]
    fn test_airborne_coast_holds_frame() {
        let mut state = PlayerState::new();
        // Walked off a ledge: airborne without a jump latch
        let out = step(&mut state, &held(false, true, false, false), false);
        assert!(state.airborne);
        assert!(!state.jumping);
        assert_eq!(out.anim, AnimCommand::HoldFrame);
    }

    #[test]
    fn test_grounded_walk_left_reference_frame() {
        // {left held}, contact, latch pre-false: the spec'd reference frame
        let mut state = PlayerState::new();
        let out = step(&mut state, &held(true, false, false, false), true);
        assert_eq!(out.velocity_x, -200.0);
        assert_eq!(out.velocity_y, None);
        assert_eq!(out.facing, Facing::Left);
        assert_eq!(out.anim, AnimCommand::Play(AnimKey::Run));
    }

    #[test]
    fn test_idle_when_no_input() {
        let mut state = PlayerState::new();
        let out = step(&mut state, &InputState::default(), true);
        assert_eq!(out.velocity_x, 0.0);
        assert_eq!(out.anim, AnimCommand::Play(AnimKey::Idle));
    }

    #[test]
    fn test_facing_persists_when_input_released() {
        let mut state = PlayerState::new();
        step(&mut state, &held(true, false, false, false), true);
        let out = step(&mut state, &InputState::default(), true);
        assert_eq!(out.facing, Facing::Left);
    }

    proptest! {
        /// Flag invariants hold after any frame, from any prior flag state.
        #[test]
        fn prop_flag_invariants(
            up in any::<bool>(),
            left in any::<bool>(),
            right in any::<bool>(),
            run in any::<bool>(),
            contact in any::<bool>(),
            pre_jumping in any::<bool>(),
            pre_airborne in any::<bool>(),
        ) {
            let mut state = PlayerState {
                facing: Facing::Right,
                jumping: pre_jumping,
                airborne: pre_airborne,
            };
            let input = held(left, right, up, run);
            let out = step(&mut state, &input, contact);

            if contact && !up {
                prop_assert!(!state.jumping);
            }
            if contact {
                prop_assert!(!state.airborne);
            } else {
                prop_assert!(state.airborne);
            }
            // Without contact or a jump event the latch never changes
            if !contact && !up {
                prop_assert_eq!(state.jumping, pre_jumping);
            }
            if right {
                prop_assert_eq!(out.facing, Facing::Right);
            }
            // Magnitude is 0, pace, or 2*pace; never anything else
            let pace = 200.0 * if run { 2.0 } else { 1.0 };
            prop_assert!(out.velocity_x == 0.0 || out.velocity_x.abs() == pace);
        }

        /// Held jump over an airborne stretch emits exactly one impulse.
        #[test]
        fn prop_jump_impulse_at_most_once_airborne(frames in 1usize..30) {
            let mut state = PlayerState::new();
            let input = held(false, false, true, false);
            let mut impulses = 0;
            for _ in 0..frames {
                if step(&mut state, &input, false).velocity_y.is_some() {
                    impulses += 1;
                }
            }
            prop_assert_eq!(impulses, 1);
        }
    }
}
