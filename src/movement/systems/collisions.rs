//! Movement domain: jump pad overlap detection.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{CharacterMotion, JumpPad};

pub(crate) fn detect_jump_pads(
    pads: Query<&CollidingEntities, With<JumpPad>>,
    mut characters: Query<(Entity, &mut CharacterMotion)>,
) {
    for (entity, mut motion) in &mut characters {
        let on_pad = pads.iter().any(|colliding| colliding.contains(&entity));
        if on_pad == motion.controller.on_jump_pad() {
            continue;
        }

        debug!("Jump pad contact changed: entity={:?}, on_pad={}", entity, on_pad);
        motion.controller.set_on_jump_pad(on_pad);
    }
}
