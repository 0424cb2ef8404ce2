//! Movement domain: slope projection math.

use bevy::prelude::*;

use crate::movement::sensing::RayHit;

/// Remove the component of `direction` along `normal`, so the result lies
/// in the surface plane. A zero normal leaves the direction unchanged.
pub fn project_on_slope(direction: Vec3, normal: Vec3) -> Vec3 {
    direction - direction.dot(normal) * normal
}

/// Angle in degrees between a surface normal and world up.
///
/// A zero normal (missed ray) reports 0, so a miss never blocks movement.
pub fn slope_angle(normal: Vec3) -> f32 {
    if normal.length_squared() <= f32::EPSILON {
        return 0.0;
    }
    normal.angle_between(Vec3::Y).to_degrees()
}

/// Position delta for one step of walking along the ground.
///
/// Grounded movement follows `ground_normal`; airborne movement is
/// projected on flat ground.
pub fn slope_move_delta(
    horizontal_input: f32,
    grounded: bool,
    ground_normal: Vec3,
    speed: f32,
    dt: f32,
) -> Vec3 {
    let direction = Vec3::X * horizontal_input;
    let normal = if grounded { ground_normal } else { Vec3::Y };
    project_on_slope(direction, normal) * speed * dt
}

/// Gap kept between a swept body and what it hits.
pub const SKIN_WIDTH: f32 = 0.005;

/// Sweeps per move before the remaining motion is dropped.
const MAX_SLIDE_ITERATIONS: usize = 4;

/// Collide-and-slide a body from `start` by `delta`.
///
/// `sweep(origin, direction, distance)` returns the first hit of the body's
/// shape along a unit direction. After a hit the remaining motion follows the
/// surface: walkable surfaces (up to `max_slope_angle`) turn horizontal motion
/// into motion along the slope and absorb the part pressing into them; steeper
/// surfaces block horizontal motion and never lift the body.
pub fn slide_move<F>(mut sweep: F, start: Vec3, delta: Vec3, max_slope_angle: f32) -> Vec3
where
    F: FnMut(Vec3, Vec3, f32) -> Option<RayHit>,
{
    let mut position = start;
    let mut remaining = delta;

    for _ in 0..MAX_SLIDE_ITERATIONS {
        let distance = remaining.length();
        if distance <= f32::EPSILON {
            break;
        }
        let direction = remaining / distance;

        let Some(hit) = sweep(position, direction, distance) else {
            position += remaining;
            break;
        };

        let travel = (hit.distance - SKIN_WIDTH).clamp(0.0, distance);
        position += direction * travel;
        remaining *= 1.0 - travel / distance;

        let angle = slope_angle(hit.normal);
        remaining = if hit.normal != Vec3::ZERO && angle <= max_slope_angle {
            let horizontal = Vec3::new(remaining.x, 0.0, remaining.z);
            let along = project_on_slope(horizontal, hit.normal);
            // Same distance, redirected along the slope
            along.normalize_or_zero() * horizontal.length()
        } else {
            let slid = project_on_slope(remaining, hit.normal);
            if slid.y > 0.0 {
                let wall = Vec3::new(hit.normal.x, 0.0, hit.normal.z).normalize_or_zero();
                let blocked = project_on_slope(remaining, wall);
                Vec3::new(blocked.x, blocked.y.min(0.0), blocked.z)
            } else {
                slid
            }
        };
    }

    position
}
