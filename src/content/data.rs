//! Data definitions for the tuning RON file.
//!
//! These structs mirror assets/data/tuning.ron. Vectors are stored as plain
//! `[f32; 3]` arrays and converted into runtime tuning types after loading.
//! Every section is optional; missing fields fall back to the runtime defaults.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::camera::{CameraTuning, FollowBorders};
use crate::movement::controller::{
    ApexBoostTuning, ControllerTuning, ControllerVariant, GravityTuning, LandingShakeTuning,
};
use crate::movement::jump::JumpTuning;
use crate::movement::sensing::{QueryLayers, SensorTuning};

/// Schema version this build understands.
pub const TUNING_SCHEMA_VERSION: u32 = 1;

// ============================================================================
// Top level (tuning.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TuningFile {
    pub schema_version: u32,
    #[serde(default)]
    pub controller: ControllerDef,
    #[serde(default)]
    pub camera: CameraDef,
}

// ============================================================================
// Character controller
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ControllerDef {
    pub variant: ControllerVariant,
    pub speed: f32,
    pub rotation_speed: f32,
    pub jump: JumpTuning,
    pub sensor: SensorDef,
    pub gravity: GravityTuning,
    pub apex_boost: Option<ApexBoostTuning>,
    pub landing_shake: Option<LandingShakeTuning>,
}

impl Default for ControllerDef {
    fn default() -> Self {
        let tuning = ControllerTuning::default();
        Self {
            variant: tuning.variant,
            speed: tuning.speed,
            rotation_speed: tuning.rotation_speed,
            jump: tuning.jump,
            sensor: SensorDef::default(),
            gravity: tuning.gravity,
            apex_boost: tuning.apex_boost,
            landing_shake: tuning.landing_shake,
        }
    }
}

impl ControllerDef {
    /// Runtime tuning; ground queries are filtered by `ground_layers`.
    pub fn to_tuning(&self, ground_layers: QueryLayers) -> ControllerTuning {
        ControllerTuning {
            variant: self.variant,
            speed: self.speed,
            rotation_speed: self.rotation_speed,
            jump: self.jump,
            sensor: self.sensor.to_tuning(ground_layers),
            gravity: self.gravity,
            apex_boost: self.apex_boost,
            landing_shake: self.landing_shake,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SensorDef {
    pub box_offset: [f32; 3],
    pub box_half_extents: [f32; 3],
    pub slope_checker_offset: [f32; 3],
    pub slope_checker_length: f32,
    pub max_slope_angle: f32,
    pub normal_ray_length: f32,
}

impl Default for SensorDef {
    fn default() -> Self {
        let sensor = SensorTuning::default();
        Self {
            box_offset: sensor.box_offset.to_array(),
            box_half_extents: sensor.box_half_extents.to_array(),
            slope_checker_offset: sensor.slope_checker_offset.to_array(),
            slope_checker_length: sensor.slope_checker_length,
            max_slope_angle: sensor.max_slope_angle,
            normal_ray_length: sensor.normal_ray_length,
        }
    }
}

impl SensorDef {
    pub fn to_tuning(&self, ground_layers: QueryLayers) -> SensorTuning {
        SensorTuning {
            box_offset: Vec3::from_array(self.box_offset),
            box_half_extents: Vec3::from_array(self.box_half_extents),
            ground_layers,
            slope_checker_offset: Vec3::from_array(self.slope_checker_offset),
            slope_checker_length: self.slope_checker_length,
            max_slope_angle: self.max_slope_angle,
            normal_ray_length: self.normal_ray_length,
        }
    }
}

// ============================================================================
// Camera
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CameraDef {
    pub borders: FollowBorders,
    pub smoothness: f32,
    pub start: [f32; 3],
    pub shake_seed: u64,
}

impl Default for CameraDef {
    fn default() -> Self {
        let camera = CameraTuning::default();
        Self {
            borders: camera.borders,
            smoothness: camera.smoothness,
            start: camera.start.to_array(),
            shake_seed: camera.shake_seed,
        }
    }
}

impl CameraDef {
    pub fn to_tuning(&self) -> CameraTuning {
        CameraTuning {
            borders: self.borders,
            smoothness: self.smoothness,
            start: Vec3::from_array(self.start),
            shake_seed: self.shake_seed,
        }
    }
}
