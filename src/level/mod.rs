//! Level domain: test course exercising slopes, ledges and jump pads.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, JumpPad};

/// Depth of level geometry along Z. Physics ignores it.
const BLOCK_DEPTH: f32 = 3.0;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Gravity(Vec2::NEG_Y * 9.81))
            .add_systems(Startup, spawn_test_level);
    }
}

/// Axis-aligned or tilted slab of ground.
struct Block {
    size: Vec2,
    center: Vec2,
    /// Tilt around Z, in degrees
    tilt: f32,
    color: Color,
}

fn spawn_test_level(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);
    let steep_color = Color::srgb(0.6, 0.3, 0.3);

    let blocks = [
        // Floor
        Block {
            size: Vec2::new(60.0, 1.0),
            center: Vec2::new(0.0, -1.5),
            tilt: 0.0,
            color: ground_color,
        },
        // Walkable ramp (30 degrees)
        Block {
            size: Vec2::new(8.0, 0.5),
            center: Vec2::new(4.0, 0.0),
            tilt: 30.0,
            color: ground_color,
        },
        // Ledge at the top of the ramp
        Block {
            size: Vec2::new(6.0, 1.0),
            center: Vec2::new(10.4, 1.5),
            tilt: 0.0,
            color: ground_color,
        },
        // Too steep to walk (70 degrees)
        Block {
            size: Vec2::new(6.0, 0.5),
            center: Vec2::new(-12.0, 1.0),
            tilt: -70.0,
            color: steep_color,
        },
        // Floating platforms for coyote time and double jumps
        Block {
            size: Vec2::new(3.0, 0.4),
            center: Vec2::new(17.0, 3.5),
            tilt: 0.0,
            color: platform_color,
        },
        Block {
            size: Vec2::new(3.0, 0.4),
            center: Vec2::new(22.0, 5.5),
            tilt: 0.0,
            color: platform_color,
        },
    ];

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    for block in blocks {
        commands.spawn((
            Ground,
            Mesh3d(meshes.add(Cuboid::new(block.size.x, block.size.y, BLOCK_DEPTH))),
            MeshMaterial3d(materials.add(block.color)),
            Transform::from_translation(block.center.extend(0.0))
                .with_rotation(Quat::from_rotation_z(block.tilt.to_radians())),
            RigidBody::Static,
            Collider::rectangle(block.size.x, block.size.y),
            ground_layers,
        ));
    }

    // Jump pad flush with the floor so the forward slope ray passes over it
    commands.spawn((
        JumpPad,
        Mesh3d(meshes.add(Cuboid::new(2.0, 0.2, BLOCK_DEPTH))),
        MeshMaterial3d(materials.add(Color::srgb(0.3, 0.6, 0.9))),
        Transform::from_xyz(-7.0, -0.9, 0.0),
        Sensor,
        Collider::rectangle(2.0, 0.2),
        CollidingEntities::default(),
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 10.0, 8.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
