//! Debug tooling for tuning movement (dev-tools builds only).
//!
//! Features:
//! - F1: toggle sensor gizmos (ground box, forward slope ray, ground normal)
//! - F3: toggle the controller info overlay

mod systems;

use bevy::prelude::*;

use crate::debug::systems::{draw_sensor_gizmos, toggle_debug_views, update_debug_info_overlay};
use crate::movement::MovementSet;

// ============================================================================
// Debug State Resource
// ============================================================================

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether sensor gizmos are drawn
    pub show_gizmos: bool,
    /// Whether to show the controller info overlay
    pub show_info: bool,
}

/// Marker for the info overlay text
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

// ============================================================================
// Plugin
// ============================================================================

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                toggle_debug_views,
                draw_sensor_gizmos.run_if(|state: Res<DebugState>| state.show_gizmos),
                update_debug_info_overlay,
            )
                .chain()
                .after(MovementSet::Frame),
        );
    }
}
