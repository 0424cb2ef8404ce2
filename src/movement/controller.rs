//! Movement domain: the per-character motion controller.
//!
//! The controller is driven by two entry points, mirroring the host loop:
//! [`MotionController::frame_update`] once per rendered frame and
//! [`MotionController::fixed_update`] once per fixed physics step. Both take
//! their delta time as an argument.

use std::f32::consts::PI;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::jump::{JumpInput, JumpKind, JumpState, JumpTuning};
use crate::movement::sensing::{GroundSensing, PhysicsQueries, SensorTuning, sense};
use crate::movement::slope::slope_move_delta;

/// Body the controller moves. Implemented by the physics adapters and by
/// test doubles.
pub trait CharacterBody {
    fn position(&self) -> Vec3;
    fn velocity(&self) -> Vec3;
    fn set_velocity(&mut self, velocity: Vec3);
    /// Displace the body, letting the backend resolve collisions.
    fn move_by(&mut self, delta: Vec3);
}

/// Which body model drives the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ControllerVariant {
    /// Physics-simulated body moved along the slope by position deltas.
    #[default]
    Dynamic,
    /// Capsule moved by sweeps, with its own gravity.
    Kinematic,
}

/// Gravity for the kinematic variant; the dynamic variant uses the physics world's gravity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GravityTuning {
    pub force: f32,
    pub max_fall_speed: f32,
}

impl Default for GravityTuning {
    fn default() -> Self {
        Self {
            force: 15.0,
            max_fall_speed: 20.0,
        }
    }
}

/// Extra horizontal speed near the top of a jump arc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApexBoostTuning {
    /// Boost applies while |vertical velocity| is below this.
    pub velocity_threshold: f32,
    pub speed_multiplier: f32,
}

impl Default for ApexBoostTuning {
    fn default() -> Self {
        Self {
            velocity_threshold: 1.5,
            speed_multiplier: 1.4,
        }
    }
}

/// Camera shake requested by hard landings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingShakeTuning {
    pub min_impact_speed: f32,
    pub amplitude: f32,
    pub duration: f32,
}

impl Default for LandingShakeTuning {
    fn default() -> Self {
        Self {
            min_impact_speed: 6.0,
            amplitude: 0.3,
            duration: 0.25,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerTuning {
    pub variant: ControllerVariant,
    pub speed: f32,
    pub rotation_speed: f32,
    pub jump: JumpTuning,
    pub sensor: SensorTuning,
    pub gravity: GravityTuning,
    pub apex_boost: Option<ApexBoostTuning>,
    pub landing_shake: Option<LandingShakeTuning>,
}

impl Default for ControllerTuning {
    fn default() -> Self {
        Self {
            variant: ControllerVariant::Dynamic,
            speed: 5.0,
            rotation_speed: 10.0,
            jump: JumpTuning::default(),
            sensor: SensorTuning::default(),
            gravity: GravityTuning::default(),
            apex_boost: None,
            landing_shake: None,
        }
    }
}

/// Input sampled once per rendered frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub horizontal: f32,
    pub jump_pressed: bool,
    pub jump_released: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementState {
    /// Horizontal input in [-1, 1].
    pub horizontal_input: f32,
    /// Last velocity seen or produced by the controller.
    pub velocity: Vec3,
    /// +1 facing right, -1 facing left.
    pub facing: i32,
}

impl Default for MovementState {
    fn default() -> Self {
        Self {
            horizontal_input: 0.0,
            velocity: Vec3::ZERO,
            facing: 1,
        }
    }
}

/// What happened during one fixed step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepReport {
    pub grounded: bool,
    pub jumped: Option<JumpKind>,
    /// Fastest downward speed of the airborne phase that just ended.
    pub landed: Option<f32>,
}

#[derive(Debug, Clone, Copy, Default)]
struct LatchedEdges {
    pressed: bool,
    released: bool,
}

#[derive(Debug, Clone)]
pub struct MotionController {
    tuning: ControllerTuning,
    movement: MovementState,
    jump: JumpState,
    sensing: GroundSensing,
    edges: LatchedEdges,
    on_jump_pad: bool,
    was_grounded: bool,
    fall_speed: f32,
}

impl MotionController {
    pub fn new(tuning: ControllerTuning) -> Self {
        Self {
            jump: JumpState::new(&tuning.jump),
            tuning,
            movement: MovementState::default(),
            sensing: GroundSensing::default(),
            edges: LatchedEdges::default(),
            on_jump_pad: false,
            was_grounded: false,
            fall_speed: 0.0,
        }
    }

    pub fn tuning(&self) -> &ControllerTuning {
        &self.tuning
    }

    pub fn movement(&self) -> &MovementState {
        &self.movement
    }

    pub fn jump(&self) -> &JumpState {
        &self.jump
    }

    /// Sensing results from the last fixed step.
    pub fn sensing(&self) -> &GroundSensing {
        &self.sensing
    }

    pub fn on_jump_pad(&self) -> bool {
        self.on_jump_pad
    }

    pub fn set_on_jump_pad(&mut self, on_pad: bool) {
        self.on_jump_pad = on_pad;
    }

    /// Per-frame update: sample input, latch jump edges for the next fixed
    /// step and turn toward the facing direction. Returns the new rotation.
    pub fn frame_update(&mut self, input: FrameInput, frame_dt: f32, current_rotation: Quat) -> Quat {
        let horizontal = if input.horizontal.is_nan() {
            0.0
        } else {
            input.horizontal.clamp(-1.0, 1.0)
        };
        self.movement.horizontal_input = horizontal;
        self.edges.pressed |= input.jump_pressed;
        self.edges.released |= input.jump_released;

        if let Some(facing) = facing_from_input(horizontal, self.tuning.variant) {
            self.movement.facing = facing;
        }

        turn_towards(
            current_rotation,
            self.movement.facing,
            self.tuning.rotation_speed,
            frame_dt,
        )
    }

    /// Per-physics-step update: sense the ground, resolve jumps and move the body.
    pub fn fixed_update<Q, B>(&mut self, queries: &Q, body: &mut B, fixed_dt: f32) -> StepReport
    where
        Q: PhysicsQueries + ?Sized,
        B: CharacterBody + ?Sized,
    {
        let input = self.movement.horizontal_input;
        self.sensing = sense(queries, body.position(), input, &self.tuning.sensor);
        let grounded = self.sensing.grounded;

        let edges = std::mem::take(&mut self.edges);
        let mut velocity = body.velocity();
        let jumped = self.jump.step(
            JumpInput {
                grounded,
                pressed: edges.pressed,
                released: edges.released,
                on_jump_pad: self.on_jump_pad,
            },
            &mut velocity.y,
            fixed_dt,
        );

        let speed = self.tuning.speed * self.apex_multiplier(grounded, velocity.y);

        match self.tuning.variant {
            ControllerVariant::Dynamic => {
                if self.sensing.can_move_forward {
                    body.move_by(slope_move_delta(
                        input,
                        grounded,
                        self.sensing.ground_normal,
                        speed,
                        fixed_dt,
                    ));
                }
                // Horizontal motion comes only from position deltas.
                velocity = Vec3::Y * velocity.y;
                body.set_velocity(velocity);
            }
            ControllerVariant::Kinematic => {
                velocity.x = input * speed;
                if !grounded {
                    velocity.y = (velocity.y - self.tuning.gravity.force * fixed_dt)
                        .max(-self.tuning.gravity.max_fall_speed);
                }
                body.move_by((velocity.x * Vec3::X + velocity.y * Vec3::Y) * fixed_dt);
                // The ground has absorbed the fall; a later drop starts from rest.
                if grounded {
                    velocity.y = velocity.y.max(0.0);
                }
                body.set_velocity(velocity);
            }
        }
        self.movement.velocity = velocity;

        let landed = self.track_landing(grounded, velocity.y);

        StepReport {
            grounded,
            jumped,
            landed,
        }
    }

    fn apex_multiplier(&self, grounded: bool, vertical_velocity: f32) -> f32 {
        match self.tuning.apex_boost {
            Some(boost) if !grounded && vertical_velocity.abs() < boost.velocity_threshold => {
                boost.speed_multiplier
            }
            _ => 1.0,
        }
    }

    fn track_landing(&mut self, grounded: bool, vertical_velocity: f32) -> Option<f32> {
        let landed = if grounded && !self.was_grounded && self.fall_speed > 0.0 {
            Some(self.fall_speed)
        } else {
            None
        };

        if grounded {
            self.fall_speed = 0.0;
        } else {
            self.fall_speed = self.fall_speed.max(-vertical_velocity);
        }
        self.was_grounded = grounded;
        landed
    }
}

/// New facing for an input, or `None` to keep the current one.
///
/// The dynamic variant rounds the input up (so only a full left input turns
/// left); the kinematic variant follows the input's sign.
pub fn facing_from_input(horizontal_input: f32, variant: ControllerVariant) -> Option<i32> {
    let facing = match variant {
        ControllerVariant::Dynamic => horizontal_input.ceil() as i32,
        ControllerVariant::Kinematic if horizontal_input > 0.0 => 1,
        ControllerVariant::Kinematic if horizontal_input < 0.0 => -1,
        ControllerVariant::Kinematic => 0,
    };
    (facing != 0).then_some(facing)
}

/// Lerp a rotation toward identity (facing right) or a half turn about Y
/// (facing left).
pub fn turn_towards(current: Quat, facing: i32, rotation_speed: f32, dt: f32) -> Quat {
    let target = if facing < 0 {
        Quat::from_rotation_y(PI)
    } else {
        Quat::IDENTITY
    };
    let t = (dt * rotation_speed).clamp(0.0, 1.0);
    current.lerp(target, t).normalize()
}
