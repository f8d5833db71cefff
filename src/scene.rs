//! Scene flow and world wiring
//!
//! The host's scene stack owns rendering and transitions; this module
//! carries only the logic: which scene is active, when it changes, and the
//! setup-once / update-per-frame protocol of the playable world.

use serde::{Deserialize, Serialize};

use crate::consts::PLAYER_SPAWN;
use crate::engine::{AnimationPlayer, PhysicsHost};
use crate::sim::{
    AnimCommand, AnimationRegistry, FrameOutput, GeometryConfig, InputState, LevelGeometry,
    LevelLayout, PlayerState, step,
};

/// The three screens of the prototype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Scene {
    #[default]
    Start,
    World,
    End,
}

/// Scene transition state machine
///
/// Start and End screens advance on a pointer press; the world ends only
/// when the host raises the end event.
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneFlow {
    current: Scene,
}

impl SceneFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Scene {
        self.current
    }

    /// Pointer pressed this frame; returns the new scene if it changed
    pub fn pointer_pressed(&mut self) -> Option<Scene> {
        let next = match self.current {
            Scene::Start => Scene::World,
            Scene::World => return None,
            Scene::End => Scene::Start,
        };
        self.current = next;
        Some(next)
    }

    /// Host-raised end-of-run event
    pub fn end_world(&mut self) -> Option<Scene> {
        if self.current == Scene::World {
            self.current = Scene::End;
            Some(Scene::End)
        } else {
            None
        }
    }
}

/// The playable world: player, static geometry, animation table
///
/// Created on World entry, dropped on exit. `setup` registers everything
/// with the physics host once; `update` runs the controller every frame.
pub struct WorldScene {
    player: PlayerState,
    geometry: LevelGeometry,
    registry: AnimationRegistry,
}

impl WorldScene {
    pub fn new(cfg: &GeometryConfig, layout: &LevelLayout) -> Self {
        Self {
            player: PlayerState::new(),
            geometry: LevelGeometry::build(cfg, layout),
            registry: AnimationRegistry::overworld(),
        }
    }

    /// Default overworld configuration and placeholder layout
    pub fn overworld() -> Self {
        Self::new(&GeometryConfig::default(), &LevelLayout::default())
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn geometry(&self) -> &LevelGeometry {
        &self.geometry
    }

    pub fn registry(&self) -> &AnimationRegistry {
        &self.registry
    }

    /// Register static geometry and the player body with the physics host
    pub fn setup<P: PhysicsHost>(&self, physics: &mut P) {
        for rect in self.geometry.iter() {
            physics.add_static_rect(rect);
        }
        physics.spawn_player(PLAYER_SPAWN);
        log::info!(
            "world scene ready: {} static bodies, player at {:?}",
            self.geometry.len(),
            PLAYER_SPAWN
        );
    }

    /// One frame: reduce, then forward the commands to the collaborators
    pub fn update<P: PhysicsHost, A: AnimationPlayer>(
        &mut self,
        input: &InputState,
        physics: &mut P,
        anims: &mut A,
    ) -> FrameOutput {
        let contact = physics.ground_contact();
        let out = step(&mut self.player, input, contact);

        physics.set_velocity_x(out.velocity_x);
        if let Some(vy) = out.velocity_y {
            physics.set_velocity_y(vy);
        }

        anims.set_flip_x(out.facing.flip_x());
        match out.anim {
            AnimCommand::Play(key) => {
                // Unregistered keys degrade to idle rather than crash
                let descriptor = self.registry.lookup_or_idle(key);
                anims.play(descriptor.key);
            }
            AnimCommand::HoldFrame => anims.hold_frame(),
        }

        out
    }
}
