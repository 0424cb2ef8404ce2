//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::controller::{ControllerTuning, MotionController};
use crate::movement::sensing::QueryLayers;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Walkable surfaces (floors, ramps, platforms)
    Ground,
    /// Player character
    Player,
    /// Trigger volumes such as jump pads - should not block movement
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

/// Owns the motion controller of one character entity.
#[derive(Component, Debug, Clone)]
pub struct CharacterMotion {
    pub controller: MotionController,
    /// Facing rotation produced by the last frame update.
    pub rotation: Quat,
}

impl CharacterMotion {
    pub fn new(tuning: ControllerTuning) -> Self {
        Self {
            controller: MotionController::new(tuning),
            rotation: Quat::IDENTITY,
        }
    }
}

/// Mesh child that turns to face the movement direction. The physics body
/// itself keeps its rotation locked.
#[derive(Component, Debug)]
pub struct CharacterVisual {
    pub owner: Entity,
}

/// Velocity of a kinematic character, integrated by the controller rather
/// than by the physics world.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct KinematicVelocity(pub Vec2);

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Sensor volume that launches characters while they overlap it.
#[derive(Component, Debug)]
pub struct JumpPad;

impl GameLayer {
    /// Layer bits in the form the controller's scene queries take.
    pub fn query_layers(self) -> QueryLayers {
        QueryLayers(self.to_bits())
    }
}
