//! Movement domain: tuning and input resources.

use bevy::prelude::*;

use crate::movement::GameLayer;
use crate::movement::controller::ControllerTuning;
use crate::movement::sensing::SensorTuning;

/// Tuning the player is spawned with, filled by the content loader.
#[derive(Resource, Debug, Clone)]
pub struct CharacterTuning(pub ControllerTuning);

impl Default for CharacterTuning {
    fn default() -> Self {
        Self(ControllerTuning {
            sensor: SensorTuning {
                ground_layers: GameLayer::Ground.query_layers(),
                ..default()
            },
            ..default()
        })
    }
}

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    /// Raw horizontal axis in [-1, 1]
    pub horizontal: f32,
    pub jump_just_pressed: bool,
    pub jump_just_released: bool,
}
