//! Camera domain: side-view camera that follows the player and shakes on landings.

mod follow;
mod shake;

pub use follow::{FollowBorders, follow_step};
pub use shake::{CameraShake, shake_offset};

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::camera::follow::follow_player;
use crate::camera::shake::{apply_camera_shake, trigger_landing_shake};
use crate::movement::MovementSet;

#[derive(Resource, Debug, Clone)]
pub struct CameraTuning {
    pub borders: FollowBorders,
    pub smoothness: f32,
    /// Starting camera position
    pub start: Vec3,
    pub shake_seed: u64,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            borders: FollowBorders::default(),
            smoothness: 5.0,
            start: Vec3::new(-3.0, 2.0, 14.0),
            shake_seed: 7,
        }
    }
}

/// Where the camera would sit without shake. Follow moves the anchor; the
/// transform is derived from it every frame.
#[derive(Component, Debug, Default)]
pub struct CameraRig {
    pub anchor: Vec3,
}

/// Seeded noise source for shake offsets
#[derive(Resource)]
pub struct ShakeRng(pub ChaCha8Rng);

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraTuning>()
            .add_systems(Startup, setup_camera)
            .add_systems(FixedUpdate, follow_player.after(MovementSet::Step))
            .add_systems(
                Update,
                (trigger_landing_shake, apply_camera_shake)
                    .chain()
                    .after(MovementSet::Frame),
            );
    }
}

fn setup_camera(mut commands: Commands, tuning: Res<CameraTuning>) {
    commands.insert_resource(ShakeRng(ChaCha8Rng::seed_from_u64(tuning.shake_seed)));
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(tuning.start),
        CameraRig {
            anchor: tuning.start,
        },
        CameraShake::default(),
    ));
}
