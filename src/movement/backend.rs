//! Movement domain: Avian2D adapters for the controller's physics interfaces.
//!
//! The game plays out in the XY plane. The controller works in `Vec3`;
//! these adapters drop and restore the Z axis at the boundary.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::KinematicVelocity;
use crate::movement::controller::CharacterBody;
use crate::movement::sensing::{PhysicsQueries, QueryLayers, RayHit};
use crate::movement::slope::slide_move;

/// Spatial queries issued on behalf of one character, never hitting itself.
pub struct AvianQueries<'a, 'w, 's> {
    spatial: &'a SpatialQuery<'w, 's>,
    character: Entity,
}

impl<'a, 'w, 's> AvianQueries<'a, 'w, 's> {
    pub fn new(spatial: &'a SpatialQuery<'w, 's>, character: Entity) -> Self {
        Self { spatial, character }
    }

    fn filter(&self, layers: Option<QueryLayers>) -> SpatialQueryFilter {
        let filter = match layers {
            Some(layers) => SpatialQueryFilter::from_mask(LayerMask(layers.0)),
            None => SpatialQueryFilter::default(),
        };
        filter.with_excluded_entities([self.character])
    }
}

impl PhysicsQueries for AvianQueries<'_, '_, '_> {
    fn overlap_box(
        &self,
        center: Vec3,
        half_extents: Vec3,
        orientation: Quat,
        layers: QueryLayers,
    ) -> bool {
        let shape = Collider::rectangle(half_extents.x * 2.0, half_extents.y * 2.0);
        let (_, _, angle) = orientation.to_euler(EulerRot::XYZ);
        !self
            .spatial
            .shape_intersections(&shape, center.truncate(), angle, &self.filter(Some(layers)))
            .is_empty()
    }

    fn cast_ray(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        layers: Option<QueryLayers>,
    ) -> Option<RayHit> {
        let direction = Dir2::new(direction.truncate()).ok()?;
        self.spatial
            .cast_ray(
                origin.truncate(),
                direction,
                max_distance,
                true,
                &self.filter(layers),
            )
            .map(|hit| RayHit {
                normal: hit.normal.extend(0.0),
                distance: hit.distance,
            })
    }
}

/// Simulated rigid body: positions are written through `Transform`, which
/// Avian picks up at the start of its step.
pub struct DynamicBody<'a> {
    pub transform: &'a mut Transform,
    pub velocity: &'a mut LinearVelocity,
}

impl CharacterBody for DynamicBody<'_> {
    fn position(&self) -> Vec3 {
        self.transform.translation
    }

    fn velocity(&self) -> Vec3 {
        self.velocity.0.extend(0.0)
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity.0 = velocity.truncate();
    }

    fn move_by(&mut self, delta: Vec3) {
        self.transform.translation += delta.truncate().extend(0.0);
    }
}

/// Kinematic capsule moved by shape-cast sweeps that slide along walkable
/// slopes and stop at steep ones.
pub struct KinematicBody<'a, 'w, 's> {
    pub spatial: &'a SpatialQuery<'w, 's>,
    pub collider: &'a Collider,
    pub filter: SpatialQueryFilter,
    pub max_slope_angle: f32,
    pub transform: &'a mut Transform,
    pub velocity: &'a mut KinematicVelocity,
}

impl CharacterBody for KinematicBody<'_, '_, '_> {
    fn position(&self) -> Vec3 {
        self.transform.translation
    }

    fn velocity(&self) -> Vec3 {
        self.velocity.0.extend(0.0)
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity.0 = velocity.truncate();
    }

    fn move_by(&mut self, delta: Vec3) {
        let spatial = self.spatial;
        let collider = self.collider;
        let filter = &self.filter;

        let sweep = |origin: Vec3, direction: Vec3, distance: f32| {
            let direction = Dir2::new(direction.truncate()).ok()?;
            let config = ShapeCastConfig {
                ignore_origin_penetration: true,
                ..ShapeCastConfig::from_max_distance(distance)
            };
            spatial
                .cast_shape(collider, origin.truncate(), 0.0, direction, &config, filter)
                .map(|hit| RayHit {
                    normal: hit.normal1.extend(0.0),
                    distance: hit.distance,
                })
        };

        let start = self.transform.translation;
        let end = slide_move(sweep, start, delta.truncate().extend(0.0), self.max_slope_angle);
        self.transform.translation = end.truncate().extend(start.z);
    }
}
