//! Movement domain: systems driving the motion controllers.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::backend::{AvianQueries, DynamicBody, KinematicBody};
use crate::movement::controller::{ControllerVariant, FrameInput};
use crate::movement::{
    CharacterMotion, CharacterVisual, JumpedEvent, KinematicVelocity, LandedEvent, MovementInput,
    Player,
};

/// Once per rendered frame: feed input to the player and update facing.
pub(crate) fn frame_update_characters(
    time: Res<Time>,
    input: Res<MovementInput>,
    mut query: Query<&mut CharacterMotion, With<Player>>,
) {
    let dt = time.delta_secs();
    let frame_input = FrameInput {
        horizontal: input.horizontal,
        jump_pressed: input.jump_just_pressed,
        jump_released: input.jump_just_released,
    };

    for mut motion in &mut query {
        let current = motion.rotation;
        let rotation = motion.controller.frame_update(frame_input, dt, current);
        motion.rotation = rotation;
    }
}

pub(crate) fn sync_visual_rotation(
    characters: Query<&CharacterMotion>,
    mut visuals: Query<(&CharacterVisual, &mut Transform)>,
) {
    for (visual, mut transform) in &mut visuals {
        if let Ok(motion) = characters.get(visual.owner) {
            transform.rotation = motion.rotation;
        }
    }
}

/// Once per fixed step: sense, jump and move every character.
pub(crate) fn fixed_update_characters(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    mut query: Query<(
        Entity,
        &mut CharacterMotion,
        &mut Transform,
        &Collider,
        Option<&mut LinearVelocity>,
        Option<&mut KinematicVelocity>,
    )>,
    mut jumped_events: MessageWriter<JumpedEvent>,
    mut landed_events: MessageWriter<LandedEvent>,
) {
    let dt = time.delta_secs();

    for (entity, mut motion, mut transform, collider, linear_velocity, kinematic_velocity) in
        &mut query
    {
        let queries = AvianQueries::new(&spatial_query, entity);
        let tuning = *motion.controller.tuning();

        let report = match (tuning.variant, linear_velocity, kinematic_velocity) {
            (ControllerVariant::Dynamic, Some(mut velocity), _) => {
                let mut body = DynamicBody {
                    transform: &mut *transform,
                    velocity: &mut *velocity,
                };
                motion.controller.fixed_update(&queries, &mut body, dt)
            }
            (ControllerVariant::Kinematic, _, Some(mut velocity)) => {
                let filter = SpatialQueryFilter::from_mask(LayerMask(tuning.sensor.ground_layers.0))
                    .with_excluded_entities([entity]);
                let mut body = KinematicBody {
                    spatial: &spatial_query,
                    collider,
                    filter,
                    max_slope_angle: tuning.sensor.max_slope_angle,
                    transform: &mut *transform,
                    velocity: &mut *velocity,
                };
                motion.controller.fixed_update(&queries, &mut body, dt)
            }
            (variant, _, _) => {
                warn_once!(
                    "Character {:?} has no velocity component for the {:?} variant",
                    entity,
                    variant
                );
                continue;
            }
        };

        if let Some(kind) = report.jumped {
            debug!(
                "Jump: entity={:?}, kind={:?}, coyote={:.3}, can_double_jump={}",
                entity,
                kind,
                motion.controller.jump().coyote().value(),
                motion.controller.jump().can_double_jump()
            );
            jumped_events.write(JumpedEvent {
                entity,
                kind,
                position: transform.translation,
            });
        }

        if let Some(impact_speed) = report.landed {
            debug!(
                "Landed: entity={:?}, impact_speed={:.2}",
                entity, impact_speed
            );
            landed_events.write(LandedEvent {
                entity,
                impact_speed,
            });
        }
    }
}
