//! Debug systems: hotkeys, sensor gizmos and the info overlay.

use bevy::prelude::*;

use crate::debug::{DebugInfoOverlay, DebugState};
use crate::movement::sensing::forward_ray_direction;
use crate::movement::{CharacterMotion, Player};

const BOX_COLOR: Color = Color::srgb(0.2, 0.9, 0.3);
const BOX_AIRBORNE_COLOR: Color = Color::srgb(0.9, 0.3, 0.2);
const SLOPE_RAY_COLOR: Color = Color::srgb(0.9, 0.8, 0.2);
const NORMAL_COLOR: Color = Color::srgb(0.3, 0.6, 1.0);

/// Length of the drawn ground normal; the ray itself is much longer.
const NORMAL_DRAW_LENGTH: f32 = 1.0;

/// Toggle gizmos with F1 and the info overlay with F3
pub(crate) fn toggle_debug_views(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.show_gizmos = !debug_state.show_gizmos;
        info!("Debug: sensor gizmos {}", on_off(debug_state.show_gizmos));
    }
    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.show_info = !debug_state.show_info;
        info!("Debug: info overlay {}", on_off(debug_state.show_info));
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "ON" } else { "OFF" }
}

/// Draw the sensors exactly where the last fixed step placed them
pub(crate) fn draw_sensor_gizmos(
    mut gizmos: Gizmos,
    characters: Query<(&Transform, &CharacterMotion)>,
) {
    for (transform, motion) in &characters {
        let controller = &motion.controller;
        let sensor = &controller.tuning().sensor;
        let sensing = controller.sensing();
        let position = transform.translation;

        let box_color = if sensing.grounded {
            BOX_COLOR
        } else {
            BOX_AIRBORNE_COLOR
        };
        gizmos.rect(
            Isometry3d::from_translation(position + sensor.box_offset),
            sensor.box_half_extents.truncate() * 2.0,
            box_color,
        );

        let ray_origin = position + sensor.slope_checker_offset;
        let direction = forward_ray_direction(controller.movement().horizontal_input);
        gizmos.line(
            ray_origin,
            ray_origin + direction * sensor.slope_checker_length,
            SLOPE_RAY_COLOR,
        );

        if sensing.ground_normal != Vec3::ZERO {
            let foot = position + sensor.box_offset;
            gizmos.arrow(
                foot,
                foot + sensing.ground_normal * NORMAL_DRAW_LENGTH,
                NORMAL_COLOR,
            );
        }
    }
}

/// Update the debug info overlay with current controller state
pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    player_query: Query<(&Transform, &CharacterMotion), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        // Cleanup overlay if it exists
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    // Ensure overlay exists
    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Ok((transform, motion)), Ok(mut text)) =
        (player_query.single(), overlay_query.single_mut())
    {
        let controller = &motion.controller;
        let movement = controller.movement();
        let jump = controller.jump();
        let sensing = controller.sensing();
        let pos = transform.translation;
        **text = format!(
            "Variant: {:?}\nPos: ({:.2}, {:.2})\nVel: ({:.2}, {:.2})\nFacing: {}\n\
             Grounded: {}\nCan move forward: {}\nNormal: ({:.2}, {:.2})\n\
             Phase: {:?}\nCoyote: {:.2}\nBuffer: {:.2}\nJump pad: {}",
            controller.tuning().variant,
            pos.x,
            pos.y,
            movement.velocity.x,
            movement.velocity.y,
            movement.facing,
            sensing.grounded,
            sensing.can_move_forward,
            sensing.ground_normal.x,
            sensing.ground_normal.y,
            jump.phase(),
            jump.coyote().value(),
            jump.buffer().value(),
            controller.on_jump_pad(),
        );
    }
}

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}
