//! Content domain: tests for tuning parsing and validation.

use bevy::prelude::Vec3;

use super::{TuningFile, parse_tuning, validate_tuning};
use crate::movement::GameLayer;
use crate::movement::controller::ControllerVariant;

fn parse(contents: &str) -> TuningFile {
    parse_tuning(contents, "test.ron").expect("tuning should parse")
}

// -----------------------------------------------------------------------------
// Parsing tests
// -----------------------------------------------------------------------------

#[test]
fn test_minimal_file_uses_defaults() {
    let file = parse("(schema_version: 1)");
    let tuning = file.controller.to_tuning(GameLayer::Ground.query_layers());

    assert_eq!(tuning.variant, ControllerVariant::Dynamic);
    assert_eq!(tuning.speed, 5.0);
    assert_eq!(tuning.jump.jump_speed, 5.0);
    assert_eq!(tuning.jump.coyote_time, 0.2);
    assert!(!tuning.jump.double_jump);
    assert_eq!(tuning.sensor.box_offset, Vec3::new(0.0, -0.7, 0.0));
    assert_eq!(tuning.sensor.max_slope_angle, 60.0);
    assert_eq!(tuning.sensor.ground_layers, GameLayer::Ground.query_layers());
    assert!(tuning.apex_boost.is_none());
    assert!(tuning.landing_shake.is_none());
    assert!(validate_tuning(&file).is_empty());
}

#[test]
fn test_partial_sections_keep_remaining_defaults() {
    let file = parse(
        "(
            schema_version: 1,
            controller: (
                variant: Kinematic,
                jump: (double_jump: true),
                sensor: (box_half_extents: (0.5, 0.2, 0.5)),
            ),
        )",
    );
    let tuning = file.controller.to_tuning(GameLayer::Ground.query_layers());

    assert_eq!(tuning.variant, ControllerVariant::Kinematic);
    assert!(tuning.jump.double_jump);
    assert_eq!(tuning.jump.buffer_time, 0.2);
    assert_eq!(tuning.sensor.box_half_extents, Vec3::new(0.5, 0.2, 0.5));
    assert_eq!(tuning.sensor.slope_checker_length, 0.51);
}

#[test]
fn test_optional_extras_without_some() {
    let file = parse(
        "(
            schema_version: 1,
            controller: (
                apex_boost: (speed_multiplier: 2.0),
                landing_shake: (amplitude: 0.5, duration: 0.1, min_impact_speed: 3.0),
            ),
        )",
    );

    let boost = file.controller.apex_boost.expect("apex boost present");
    assert_eq!(boost.speed_multiplier, 2.0);
    assert_eq!(boost.velocity_threshold, 1.5);

    let shake = file.controller.landing_shake.expect("landing shake present");
    assert_eq!(shake.amplitude, 0.5);
    assert_eq!(shake.min_impact_speed, 3.0);
}

#[test]
fn test_camera_section() {
    let file = parse(
        "(
            schema_version: 1,
            camera: (
                borders: (left: 0.1, right: 0.1, top: 0.1, bottom: 0.1),
                smoothness: 2.0,
                start: (0.0, 1.0, 10.0),
            ),
        )",
    );
    let camera = file.camera.to_tuning();

    assert_eq!(camera.borders.left, 0.1);
    assert_eq!(camera.smoothness, 2.0);
    assert_eq!(camera.start, Vec3::new(0.0, 1.0, 10.0));
    assert_eq!(camera.shake_seed, 7);
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_tuning("(schema_version: )", "broken.ron").unwrap_err();
    assert_eq!(err.file, "broken.ron");
    assert!(err.to_string().starts_with("Failed to load broken.ron"));
}

#[test]
fn test_shipped_tuning_file_is_valid() {
    let file = parse(include_str!("../../assets/data/tuning.ron"));
    assert!(validate_tuning(&file).is_empty());
}

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_negative_timers_rejected() {
    let mut file = parse("(schema_version: 1)");
    file.controller.jump.coyote_time = -0.1;
    file.controller.jump.buffer_time = -1.0;

    let fields: Vec<_> = validate_tuning(&file).iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["jump.coyote_time", "jump.buffer_time"]);
}

#[test]
fn test_slope_angle_range() {
    let mut file = parse("(schema_version: 1)");

    file.controller.sensor.max_slope_angle = 90.0;
    assert!(validate_tuning(&file).is_empty());

    file.controller.sensor.max_slope_angle = 91.0;
    let errors = validate_tuning(&file);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "sensor.max_slope_angle");
}

#[test]
fn test_nan_rejected() {
    let mut file = parse("(schema_version: 1)");
    file.controller.speed = f32::NAN;

    let errors = validate_tuning(&file);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "controller.speed");
}

#[test]
fn test_degenerate_ground_box_rejected() {
    let mut file = parse("(schema_version: 1)");
    file.controller.sensor.box_half_extents = [0.35, 0.0, 0.35];

    let errors = validate_tuning(&file);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "sensor.box_half_extents.y");
}

#[test]
fn test_borders_outside_viewport_rejected() {
    let mut file = parse("(schema_version: 1)");
    file.camera.borders.top = 1.5;

    let errors = validate_tuning(&file);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "camera.borders.top");
}

#[test]
fn test_unknown_schema_version_rejected() {
    let file = parse("(schema_version: 2)");

    let errors = validate_tuning(&file);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "schema_version");
}
