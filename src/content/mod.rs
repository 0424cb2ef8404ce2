//! Content domain: tuning loaded from RON at startup.

mod data;
mod loader;
#[cfg(test)]
mod tests;
mod validation;

pub use data::{CameraDef, ControllerDef, SensorDef, TUNING_SCHEMA_VERSION, TuningFile};
pub use loader::{ContentLoadError, load_tuning, parse_tuning};
pub use validation::{ValidationError, validate_tuning};

use bevy::prelude::*;
use std::path::Path;

use crate::movement::{CharacterTuning, GameLayer};

/// Tuning file read at startup, relative to the working directory.
pub const TUNING_PATH: &str = "assets/data/tuning.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_tuning_content);
    }
}

/// Replace the default tuning resources with the file's values. Any load or
/// validation failure keeps the built-in defaults.
fn load_tuning_content(mut commands: Commands) {
    let file = match load_tuning(Path::new(TUNING_PATH)) {
        Ok(file) => file,
        Err(e) => {
            warn!("{}; using default tuning", e);
            return;
        }
    };

    let errors = validate_tuning(&file);
    if !errors.is_empty() {
        for error in &errors {
            warn!("Invalid tuning: {}", error);
        }
        warn!(
            "{} invalid tuning value(s) in {}; using default tuning",
            errors.len(),
            TUNING_PATH
        );
        return;
    }

    let tuning = file.controller.to_tuning(GameLayer::Ground.query_layers());
    info!(
        "Loaded tuning from {}: variant={:?}, speed={}, jump_speed={}, double_jump={}",
        TUNING_PATH, tuning.variant, tuning.speed, tuning.jump.jump_speed, tuning.jump.double_jump
    );
    commands.insert_resource(CharacterTuning(tuning));
    commands.insert_resource(file.camera.to_tuning());
}
