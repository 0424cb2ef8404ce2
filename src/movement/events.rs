//! Movement domain: messages for jumps and landings.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::jump::JumpKind;

/// Event fired on the fixed step a character leaves the ground by jumping
#[derive(Debug)]
pub struct JumpedEvent {
    pub entity: Entity,
    pub kind: JumpKind,
    pub position: Vec3,
}

impl Message for JumpedEvent {}

/// Event fired when a falling character touches the ground
#[derive(Debug)]
pub struct LandedEvent {
    pub entity: Entity,
    /// Fastest downward speed reached before touching down
    pub impact_speed: f32,
}

impl Message for LandedEvent {}
