//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::detect_jump_pads;
pub(crate) use input::read_input;
pub(crate) use movement::{fixed_update_characters, frame_update_characters, sync_visual_rotation};
