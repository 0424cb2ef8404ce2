//! Camera domain: dead-zone follow driven by viewport borders.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::camera::{CameraRig, CameraTuning};
use crate::movement::Player;

/// Fractions of the viewport (0..1) measured inward from each edge. The
/// camera moves only when the target enters one of these margins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FollowBorders {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Default for FollowBorders {
    fn default() -> Self {
        Self {
            left: 0.3,
            right: 0.3,
            top: 0.2,
            bottom: 0.25,
        }
    }
}

/// One follow step.
///
/// `viewport` is the target's viewport position (0..1, origin bottom-left)
/// and `world_per_viewport` converts a viewport offset into world units at
/// the target's depth. Each axis is lerped toward the position that would put
/// the target back on the border it crossed, with `t = dt * smoothness`.
pub fn follow_step(
    camera: Vec3,
    viewport: Vec2,
    world_per_viewport: Vec2,
    borders: &FollowBorders,
    smoothness: f32,
    dt: f32,
) -> Vec3 {
    let t = (dt * smoothness).clamp(0.0, 1.0);

    let move_left = viewport.x <= borders.left;
    let move_right = viewport.x >= 1.0 - borders.right;
    let move_up = viewport.y >= 1.0 - borders.top;
    let move_down = viewport.y <= borders.bottom;

    let mut position = camera;
    if move_left {
        let target = position.x + (viewport.x - borders.left) * world_per_viewport.x;
        position.x = lerp(position.x, target, t);
    }
    if move_up {
        let target = position.y + (viewport.y - 1.0 + borders.top) * world_per_viewport.y;
        position.y = lerp(position.y, target, t);
    }
    if move_right {
        let target = position.x + (viewport.x - 1.0 + borders.right) * world_per_viewport.x;
        position.x = lerp(position.x, target, t);
    }
    if move_down {
        let target = position.y + (viewport.y - borders.bottom) * world_per_viewport.y;
        position.y = lerp(position.y, target, t);
    }
    position
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Project a world position into viewport space (0..1, origin bottom-left).
pub(crate) fn viewport_point(
    camera: &Camera,
    camera_transform: &GlobalTransform,
    world: Vec3,
) -> Option<Vec2> {
    let view = camera_transform.affine().inverse().transform_point3(world);
    let ndc = camera.clip_from_view().project_point3(view);
    ndc.is_finite().then(|| (ndc.truncate() + Vec2::ONE) * 0.5)
}

/// World units covered by one full viewport at the depth of `world`.
pub(crate) fn world_per_viewport(
    camera: &Camera,
    camera_transform: &GlobalTransform,
    world: Vec3,
) -> Option<Vec2> {
    let origin = viewport_point(camera, camera_transform, world)?;
    let step_x = viewport_point(camera, camera_transform, world + Vec3::X)? - origin;
    let step_y = viewport_point(camera, camera_transform, world + Vec3::Y)? - origin;
    if step_x.x.abs() <= f32::EPSILON || step_y.y.abs() <= f32::EPSILON {
        return None;
    }
    Some(Vec2::new(1.0 / step_x.x, 1.0 / step_y.y))
}

pub(crate) fn follow_player(
    time: Res<Time>,
    tuning: Res<CameraTuning>,
    players: Query<&Transform, With<Player>>,
    mut cameras: Query<(&Camera, &GlobalTransform, &mut CameraRig)>,
) {
    let Ok(target) = players.single() else {
        return;
    };
    let dt = time.delta_secs();

    for (camera, camera_transform, mut rig) in &mut cameras {
        let Some(viewport) = viewport_point(camera, camera_transform, target.translation) else {
            continue;
        };
        let Some(scale) = world_per_viewport(camera, camera_transform, target.translation) else {
            continue;
        };

        rig.anchor = follow_step(
            rig.anchor,
            viewport,
            scale,
            &tuning.borders,
            tuning.smoothness,
            dt,
        );
    }
}
