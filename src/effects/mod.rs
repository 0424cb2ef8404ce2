//! Effects domain: one-shot dust puffs spawned on jumps.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::{JumpedEvent, MovementSet};

/// Offset from the character origin down to its feet.
const FEET_OFFSET: Vec3 = Vec3::new(0.0, -1.0, 0.0);

/// A puff that grows while it fades, then despawns.
#[derive(Component, Debug)]
pub struct DustPuff {
    pub lifetime: Timer,
}

impl DustPuff {
    pub fn new(seconds: f32) -> Self {
        Self {
            lifetime: Timer::from_seconds(seconds, TimerMode::Once),
        }
    }

    /// Uniform scale for the elapsed fraction of the lifetime.
    pub fn scale(&self) -> f32 {
        0.4 + 1.2 * self.lifetime.fraction()
    }
}

#[derive(Resource)]
struct DustAssets {
    mesh: Handle<Mesh>,
    material: Handle<StandardMaterial>,
}

pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_dust_assets).add_systems(
            Update,
            (spawn_jump_dust, animate_dust).after(MovementSet::Frame),
        );
    }
}

fn load_dust_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(DustAssets {
        mesh: meshes.add(Sphere::new(0.25)),
        material: materials.add(StandardMaterial {
            base_color: Color::srgba(0.8, 0.75, 0.65, 0.8),
            alpha_mode: AlphaMode::Blend,
            ..default()
        }),
    });
}

fn spawn_jump_dust(
    mut commands: Commands,
    mut events: MessageReader<JumpedEvent>,
    assets: Res<DustAssets>,
) {
    for event in events.read() {
        // Parented to the character, like the effect it replaces
        commands.spawn((
            DustPuff::new(0.35),
            ChildOf(event.entity),
            Mesh3d(assets.mesh.clone()),
            MeshMaterial3d(assets.material.clone()),
            Transform::from_translation(FEET_OFFSET).with_scale(Vec3::splat(0.4)),
        ));
    }
}

fn animate_dust(
    mut commands: Commands,
    time: Res<Time>,
    mut puffs: Query<(Entity, &mut DustPuff, &mut Transform)>,
) {
    for (entity, mut puff, mut transform) in &mut puffs {
        puff.lifetime.tick(time.delta());
        if puff.lifetime.just_finished() {
            commands.entity(entity).despawn();
            continue;
        }
        transform.scale = Vec3::splat(puff.scale());
    }
}
