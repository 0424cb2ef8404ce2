//! Range checks for loaded tuning values.

use super::data::{TUNING_SCHEMA_VERSION, TuningFile};

/// A validation error with context about what failed.
#[derive(Debug, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub value: f32,
    pub message: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' = {} {}", self.field, self.value, self.message)
    }
}

/// Push an error unless `$ok` holds for the value
macro_rules! check {
    ($errors:expr, $field:expr, $value:expr, $ok:expr, $message:expr) => {
        let value = $value;
        if !$ok(value) {
            $errors.push(ValidationError {
                field: $field,
                value,
                message: $message,
            });
        }
    };
}

fn non_negative(value: f32) -> bool {
    value >= 0.0
}

fn positive(value: f32) -> bool {
    value > 0.0
}

fn unit_fraction(value: f32) -> bool {
    (0.0..=1.0).contains(&value)
}

/// Validate ranges in a tuning file.
/// Returns a list of validation errors, empty if every value is usable.
pub fn validate_tuning(file: &TuningFile) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if file.schema_version != TUNING_SCHEMA_VERSION {
        errors.push(ValidationError {
            field: "schema_version",
            value: file.schema_version as f32,
            message: "is not a supported schema version",
        });
    }

    let controller = &file.controller;
    check!(errors, "controller.speed", controller.speed, non_negative, "must not be negative");
    check!(
        errors,
        "controller.rotation_speed",
        controller.rotation_speed,
        non_negative,
        "must not be negative"
    );

    // Jump
    let jump = &controller.jump;
    check!(errors, "jump.jump_speed", jump.jump_speed, non_negative, "must not be negative");
    check!(errors, "jump.coyote_time", jump.coyote_time, non_negative, "must not be negative");
    check!(errors, "jump.buffer_time", jump.buffer_time, non_negative, "must not be negative");

    // Sensors
    let sensor = &controller.sensor;
    for (field, extent) in [
        ("sensor.box_half_extents.x", sensor.box_half_extents[0]),
        ("sensor.box_half_extents.y", sensor.box_half_extents[1]),
        ("sensor.box_half_extents.z", sensor.box_half_extents[2]),
    ] {
        check!(errors, field, extent, positive, "must be positive");
    }
    check!(
        errors,
        "sensor.slope_checker_length",
        sensor.slope_checker_length,
        non_negative,
        "must not be negative"
    );
    check!(
        errors,
        "sensor.max_slope_angle",
        sensor.max_slope_angle,
        |angle: f32| (0.0..=90.0).contains(&angle),
        "must be between 0 and 90 degrees"
    );
    check!(
        errors,
        "sensor.normal_ray_length",
        sensor.normal_ray_length,
        positive,
        "must be positive"
    );

    // Gravity and optional extras
    check!(errors, "gravity.force", controller.gravity.force, non_negative, "must not be negative");
    check!(
        errors,
        "gravity.max_fall_speed",
        controller.gravity.max_fall_speed,
        non_negative,
        "must not be negative"
    );
    if let Some(boost) = &controller.apex_boost {
        check!(
            errors,
            "apex_boost.velocity_threshold",
            boost.velocity_threshold,
            non_negative,
            "must not be negative"
        );
        check!(
            errors,
            "apex_boost.speed_multiplier",
            boost.speed_multiplier,
            non_negative,
            "must not be negative"
        );
    }
    if let Some(shake) = &controller.landing_shake {
        check!(
            errors,
            "landing_shake.amplitude",
            shake.amplitude,
            non_negative,
            "must not be negative"
        );
        check!(
            errors,
            "landing_shake.duration",
            shake.duration,
            non_negative,
            "must not be negative"
        );
    }

    // Camera
    let camera = &file.camera;
    for (field, border) in [
        ("camera.borders.left", camera.borders.left),
        ("camera.borders.right", camera.borders.right),
        ("camera.borders.top", camera.borders.top),
        ("camera.borders.bottom", camera.borders.bottom),
    ] {
        check!(errors, field, border, unit_fraction, "must be within 0..1");
    }
    check!(
        errors,
        "camera.smoothness",
        camera.smoothness,
        non_negative,
        "must not be negative"
    );

    errors
}
