//! Movement domain: ground and slope sensing through a narrow physics interface.
//!
//! The controller never talks to the physics engine directly. Everything it
//! needs from the scene goes through [`PhysicsQueries`], which keeps the jump
//! and slope logic testable with a fake backend.

use bevy::prelude::*;

use crate::movement::slope::slope_angle;

/// Collision layer bits used to filter scene queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryLayers(pub u32);

impl QueryLayers {
    pub const ALL: Self = Self(u32::MAX);
}

/// Result of a ray cast that hit something.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub normal: Vec3,
    pub distance: f32,
}

/// Read-only scene queries the controller depends on.
pub trait PhysicsQueries {
    /// Whether an oriented box overlaps any collider on `layers`.
    fn overlap_box(
        &self,
        center: Vec3,
        half_extents: Vec3,
        orientation: Quat,
        layers: QueryLayers,
    ) -> bool;

    /// Closest hit along a ray. `None` layers means every layer.
    fn cast_ray(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        layers: Option<QueryLayers>,
    ) -> Option<RayHit>;
}

/// Placement and limits of the ground and slope sensors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorTuning {
    /// Offset of the ground check box from the character origin.
    pub box_offset: Vec3,
    pub box_half_extents: Vec3,
    pub ground_layers: QueryLayers,
    /// Origin offset shared by the forward slope ray and the ground normal ray.
    pub slope_checker_offset: Vec3,
    pub slope_checker_length: f32,
    /// Steepest walkable slope, in degrees.
    pub max_slope_angle: f32,
    pub normal_ray_length: f32,
}

impl Default for SensorTuning {
    fn default() -> Self {
        Self {
            box_offset: Vec3::new(0.0, -0.7, 0.0),
            box_half_extents: Vec3::new(0.35, 0.31, 0.35),
            ground_layers: QueryLayers::ALL,
            slope_checker_offset: Vec3::ZERO,
            slope_checker_length: 0.51,
            max_slope_angle: 60.0,
            normal_ray_length: 100.0,
        }
    }
}

/// Everything the controller learns from the scene in one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundSensing {
    pub grounded: bool,
    pub can_move_forward: bool,
    pub ground_normal: Vec3,
}

impl Default for GroundSensing {
    fn default() -> Self {
        Self {
            grounded: false,
            can_move_forward: true,
            ground_normal: Vec3::ZERO,
        }
    }
}

/// Box overlap below the character. A box copes with slopes better than a
/// single ray straight down.
pub fn is_grounded<Q: PhysicsQueries + ?Sized>(
    queries: &Q,
    position: Vec3,
    tuning: &SensorTuning,
) -> bool {
    queries.overlap_box(
        position + tuning.box_offset,
        tuning.box_half_extents,
        Quat::IDENTITY,
        tuning.ground_layers,
    )
}

/// Direction the forward slope ray is cast in for a given input.
///
/// The input is rounded up, so any positive input casts to the right while
/// a partial left input yields a zero ray.
pub fn forward_ray_direction(horizontal_input: f32) -> Vec3 {
    Vec3::X * horizontal_input.ceil()
}

/// Whether the surface ahead is shallow enough to walk onto.
pub fn can_move_on_slope_forward<Q: PhysicsQueries + ?Sized>(
    queries: &Q,
    position: Vec3,
    horizontal_input: f32,
    tuning: &SensorTuning,
) -> bool {
    let direction = forward_ray_direction(horizontal_input);
    let normal = if direction == Vec3::ZERO {
        Vec3::ZERO
    } else {
        queries
            .cast_ray(
                position + tuning.slope_checker_offset,
                direction,
                tuning.slope_checker_length,
                None,
            )
            .map(|hit| hit.normal)
            .unwrap_or(Vec3::ZERO)
    };

    slope_angle(normal) <= tuning.max_slope_angle
}

/// Normal of the ground under the character.
///
/// NOTE: the ray runs `normal_ray_length` units down from the slope checker
/// origin, so on short slopes it can report the normal of whatever lies far
/// below the feet. A miss returns a zero normal.
pub fn ground_normal<Q: PhysicsQueries + ?Sized>(
    queries: &Q,
    position: Vec3,
    tuning: &SensorTuning,
) -> Vec3 {
    queries
        .cast_ray(
            position + tuning.slope_checker_offset,
            Vec3::NEG_Y,
            tuning.normal_ray_length,
            Some(tuning.ground_layers),
        )
        .map(|hit| hit.normal)
        .unwrap_or(Vec3::ZERO)
}

pub fn sense<Q: PhysicsQueries + ?Sized>(
    queries: &Q,
    position: Vec3,
    horizontal_input: f32,
    tuning: &SensorTuning,
) -> GroundSensing {
    let grounded = is_grounded(queries, position, tuning);
    GroundSensing {
        grounded,
        can_move_forward: can_move_on_slope_forward(queries, position, horizontal_input, tuning),
        ground_normal: ground_normal(queries, position, tuning),
    }
}
