//! Movement domain: player bootstrap from the loaded tuning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::controller::ControllerVariant;
use crate::movement::{
    CharacterMotion, CharacterTuning, CharacterVisual, GameLayer, KinematicVelocity, Player,
};

const CAPSULE_RADIUS: f32 = 0.5;
const CAPSULE_LENGTH: f32 = 1.0;

pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<CharacterTuning>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let tuning = tuning.0;
    let body = match tuning.variant {
        ControllerVariant::Dynamic => RigidBody::Dynamic,
        ControllerVariant::Kinematic => RigidBody::Kinematic,
    };

    info!(
        "Spawning player: variant={:?}, speed={}, jump_speed={}, double_jump={}, apex_boost={}, landing_shake={}",
        tuning.variant,
        tuning.speed,
        tuning.jump.jump_speed,
        tuning.jump.double_jump,
        tuning.apex_boost.is_some(),
        tuning.landing_shake.is_some()
    );

    let player = commands
        .spawn((
            // Identity & Movement
            (
                Player,
                CharacterMotion::new(tuning),
                KinematicVelocity::default(),
            ),
            Transform::from_xyz(-2.0, 1.0, 0.0),
            Visibility::default(),
            // Physics
            (
                body,
                Collider::capsule(CAPSULE_RADIUS, CAPSULE_LENGTH),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                Friction::new(0.0),
                CollisionEventsEnabled,
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Sensor]),
            ),
        ))
        .id();

    // Rendering lives on a child so facing rotation never touches the body
    let visual = commands
        .spawn((
            CharacterVisual { owner: player },
            ChildOf(player),
            Mesh3d(meshes.add(Capsule3d::new(CAPSULE_RADIUS, CAPSULE_LENGTH))),
            MeshMaterial3d(materials.add(Color::srgb(0.9, 0.9, 0.9))),
            Transform::default(),
        ))
        .id();

    // Nose marks the facing direction
    commands.spawn((
        ChildOf(visual),
        Mesh3d(meshes.add(Cuboid::new(0.3, 0.2, 0.2))),
        MeshMaterial3d(materials.add(Color::srgb(0.9, 0.4, 0.3))),
        Transform::from_xyz(0.45, 0.5, 0.0),
    ));
}
