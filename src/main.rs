//! Block Hopper headless demo
//!
//! Drives the world scene against a scripted stand-in for the engine's
//! physics and animation collaborators and logs each frame's output.
//! Useful for eyeballing controller behavior without a renderer.

use glam::Vec2;

use block_hopper::engine::{AnimationPlayer, PhysicsHost};
use block_hopper::sim::{AnimKey, InputState, StaticRect};
use block_hopper::{AnimCommand, SceneFlow, WorldScene};

/// Scripted physics stand-in: contact comes from a fixed per-frame script
/// instead of collision resolution.
struct ScriptedPhysics {
    statics: usize,
    contact_script: Vec<bool>,
    frame: usize,
}

impl ScriptedPhysics {
    fn new(contact_script: Vec<bool>) -> Self {
        Self {
            statics: 0,
            contact_script,
            frame: 0,
        }
    }

    fn advance(&mut self) {
        self.frame += 1;
    }
}

impl PhysicsHost for ScriptedPhysics {
    fn add_static_rect(&mut self, _rect: &StaticRect) {
        self.statics += 1;
    }

    fn spawn_player(&mut self, pos: Vec2) {
        log::debug!("player body spawned at {pos:?}");
    }

    fn ground_contact(&self) -> bool {
        self.contact_script
            .get(self.frame)
            .copied()
            .unwrap_or(true)
    }

    fn set_velocity_x(&mut self, _vx: f32) {}

    fn set_velocity_y(&mut self, _vy: f32) {}
}

/// Logs animation commands; tracks the active key to show idempotence.
#[derive(Default)]
struct LoggingAnims {
    active: Option<AnimKey>,
}

impl AnimationPlayer for LoggingAnims {
    fn play(&mut self, key: AnimKey) {
        if self.active != Some(key) {
            log::info!("animation -> {}", key.as_str());
            self.active = Some(key);
        }
    }

    fn hold_frame(&mut self) {
        if self.active.take().is_some() {
            log::info!("animation -> hold frame");
        }
    }

    fn set_flip_x(&mut self, _flipped: bool) {}
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut flow = SceneFlow::new();
    if let Some(scene) = flow.pointer_pressed() {
        log::info!("scene -> {scene:?}");
    }
    let mut world = WorldScene::overworld();

    // Walk right, sprint, jump, hang, land, idle
    let script: Vec<(InputState, bool)> = [
        (walk_right(false), true),
        (walk_right(false), true),
        (walk_right(true), true),
        (jump_right(), true),
        (jump_right(), false),
        (jump_right(), false),
        (walk_right(false), false),
        (walk_right(false), true),
        (InputState::default(), true),
    ]
    .into();

    let mut physics = ScriptedPhysics::new(script.iter().map(|(_, c)| *c).collect());
    let mut anims = LoggingAnims::default();
    world.setup(&mut physics);

    for (frame, (input, _)) in script.iter().enumerate() {
        let out = world.update(input, &mut physics, &mut anims);
        log::info!(
            "frame {frame}: vx={:+.0} vy={} anim={}",
            out.velocity_x,
            out.velocity_y
                .map_or("-".to_string(), |vy| format!("{vy:+.0}")),
            match out.anim {
                AnimCommand::Play(key) => key.as_str(),
                AnimCommand::HoldFrame => "hold",
            },
        );
        physics.advance();
    }
}

fn walk_right(run: bool) -> InputState {
    InputState {
        right: true,
        run,
        ..InputState::default()
    }
}

fn jump_right() -> InputState {
    InputState {
        up: true,
        right: true,
        ..InputState::default()
    }
}
