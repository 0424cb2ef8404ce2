//! Camera domain: timed shake triggered by hard landings.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use rand::Rng;

use crate::camera::{CameraRig, ShakeRng};
use crate::movement::{CharacterMotion, LandedEvent};

/// Noise amplitude that decays linearly to zero over its duration.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct CameraShake {
    peak: f32,
    duration: f32,
    remaining: f32,
}

impl CameraShake {
    /// Start a shake. A weaker shake never cuts a stronger one short.
    pub fn trigger(&mut self, amplitude: f32, duration: f32) {
        if amplitude < self.amplitude() {
            return;
        }
        self.peak = amplitude.max(0.0);
        self.duration = duration.max(0.0);
        self.remaining = self.duration;
    }

    pub fn tick(&mut self, dt: f32) {
        self.remaining = (self.remaining - dt.max(0.0)).max(0.0);
    }

    pub fn amplitude(&self) -> f32 {
        if self.duration <= 0.0 {
            return 0.0;
        }
        self.peak * self.remaining / self.duration
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0.0 && self.peak > 0.0
    }
}

/// Random offset within a square of half-size `amplitude`.
pub fn shake_offset(rng: &mut impl Rng, amplitude: f32) -> Vec2 {
    if amplitude <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        rng.random_range(-1.0..=1.0),
        rng.random_range(-1.0..=1.0),
    ) * amplitude
}

pub(crate) fn trigger_landing_shake(
    mut events: MessageReader<LandedEvent>,
    characters: Query<&CharacterMotion>,
    mut cameras: Query<&mut CameraShake>,
) {
    for event in events.read() {
        let Ok(motion) = characters.get(event.entity) else {
            continue;
        };
        let Some(shake) = motion.controller.tuning().landing_shake else {
            continue;
        };
        if event.impact_speed < shake.min_impact_speed {
            continue;
        }

        debug!(
            "Landing shake: impact_speed={:.2}, amplitude={}",
            event.impact_speed, shake.amplitude
        );
        for mut camera_shake in &mut cameras {
            camera_shake.trigger(shake.amplitude, shake.duration);
        }
    }
}

/// Place the camera at its follow anchor plus the current shake offset.
pub(crate) fn apply_camera_shake(
    time: Res<Time>,
    mut rng: ResMut<ShakeRng>,
    mut cameras: Query<(&CameraRig, &mut CameraShake, &mut Transform)>,
) {
    let dt = time.delta_secs();

    for (rig, mut shake, mut transform) in &mut cameras {
        let offset = if shake.is_active() {
            shake_offset(&mut rng.0, shake.amplitude())
        } else {
            Vec2::ZERO
        };
        shake.tick(dt);
        transform.translation = rig.anchor + offset.extend(0.0);
    }
}
