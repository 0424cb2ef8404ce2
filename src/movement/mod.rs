//! Movement domain: character controllers for 2.5D platforming.
//!
//! The motion core (`timer`, `jump`, `sensing`, `slope`, `controller`) has no
//! ECS or physics engine dependency; `backend` and `systems` hook it into
//! Bevy and Avian.

mod backend;
mod bootstrap;
mod components;
pub mod controller;
mod events;
pub mod jump;
mod resources;
pub mod sensing;
pub mod slope;
mod systems;
pub mod timer;

pub use components::{
    CharacterMotion, CharacterVisual, GameLayer, Ground, JumpPad, KinematicVelocity, Player,
};
pub use events::{JumpedEvent, LandedEvent};
pub use resources::{CharacterTuning, MovementInput};

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    detect_jump_pads, fixed_update_characters, frame_update_characters, read_input,
    sync_visual_rotation,
};

/// System sets for movement ordering
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MovementSet {
    /// Input sampling and facing, once per frame
    Frame,
    /// Sensing, jumping and moving, once per fixed step
    Step,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CharacterTuning>()
            .init_resource::<MovementInput>()
            .add_message::<JumpedEvent>()
            .add_message::<LandedEvent>()
            .add_systems(Startup, spawn_player)
            .add_systems(
                Update,
                (read_input, frame_update_characters, sync_visual_rotation)
                    .chain()
                    .in_set(MovementSet::Frame),
            )
            .add_systems(
                FixedUpdate,
                (detect_jump_pads, fixed_update_characters)
                    .chain()
                    .in_set(MovementSet::Step),
            );
    }
}
