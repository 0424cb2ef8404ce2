//! Movement domain: jump timing (coyote time, jump buffer, double jump).

use serde::{Deserialize, Serialize};

use crate::movement::timer::ClampedTimer;

/// Jump parameters shared by both controller variants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JumpTuning {
    /// Vertical velocity set when a jump fires.
    pub jump_speed: f32,
    /// Grace period after leaving the ground during which a jump still counts as grounded.
    pub coyote_time: f32,
    /// How long an early jump press is remembered.
    pub buffer_time: f32,
    pub double_jump: bool,
}

impl Default for JumpTuning {
    fn default() -> Self {
        Self {
            jump_speed: 5.0,
            coyote_time: 0.2,
            buffer_time: 0.2,
            double_jump: false,
        }
    }
}

/// Which rule allowed a jump to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JumpKind {
    /// Grounded or within coyote time.
    Ground,
    /// Spent the double jump.
    Double,
    /// Launched by a jump pad.
    Pad,
}

/// Observable phase of the jump state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpPhase {
    Grounded,
    CoyoteWindow,
    AirborneCanDoubleJump,
    AirborneSpent,
}

/// Inputs for one jump step.
#[derive(Debug, Clone, Copy, Default)]
pub struct JumpInput {
    /// Result of this step's ground query.
    pub grounded: bool,
    /// Jump button went down since the last step.
    pub pressed: bool,
    /// Jump button went up since the last step.
    pub released: bool,
    /// Character is overlapping a jump pad.
    pub on_jump_pad: bool,
}

/// Per-character jump state, mutated once per fixed step.
#[derive(Debug, Clone, PartialEq)]
pub struct JumpState {
    coyote: ClampedTimer,
    buffer: ClampedTimer,
    can_double_jump: bool,
    double_jump_enabled: bool,
    grounded: bool,
    jump_speed: f32,
}

impl JumpState {
    pub fn new(tuning: &JumpTuning) -> Self {
        Self {
            coyote: ClampedTimer::new(tuning.coyote_time),
            buffer: ClampedTimer::new(tuning.buffer_time),
            can_double_jump: false,
            double_jump_enabled: tuning.double_jump,
            grounded: false,
            jump_speed: tuning.jump_speed,
        }
    }

    pub fn coyote(&self) -> &ClampedTimer {
        &self.coyote
    }

    pub fn buffer(&self) -> &ClampedTimer {
        &self.buffer
    }

    pub fn grounded(&self) -> bool {
        self.grounded
    }

    /// The double jump is only reported when the variant allows it.
    pub fn can_double_jump(&self) -> bool {
        self.double_jump_enabled && self.can_double_jump
    }

    pub fn phase(&self) -> JumpPhase {
        if self.grounded {
            JumpPhase::Grounded
        } else if self.coyote.is_running() {
            JumpPhase::CoyoteWindow
        } else if self.can_double_jump() {
            JumpPhase::AirborneCanDoubleJump
        } else {
            JumpPhase::AirborneSpent
        }
    }

    /// Whether a jump fires this step, given the current timers.
    pub fn wants_jump(&self) -> bool {
        self.buffer.is_running() && (self.coyote.is_running() || self.can_double_jump())
    }

    /// Advance one step. Sets `vertical_velocity` when a jump fires.
    pub fn step(
        &mut self,
        input: JumpInput,
        vertical_velocity: &mut f32,
        dt: f32,
    ) -> Option<JumpKind> {
        self.grounded = input.grounded;

        if input.grounded {
            self.coyote.reset();
            self.can_double_jump = true;
        }

        self.coyote.tick(dt);

        if input.pressed {
            self.buffer.reset();
        } else {
            self.buffer.tick(dt);
        }

        let jumped = if input.on_jump_pad {
            Some(JumpKind::Pad)
        } else if self.wants_jump() {
            if self.coyote.is_running() {
                Some(JumpKind::Ground)
            } else {
                self.can_double_jump = false;
                Some(JumpKind::Double)
            }
        } else {
            None
        };

        if jumped.is_some() {
            *vertical_velocity = self.jump_speed;
            self.buffer.clear();
        }

        // Releasing early while rising closes the coyote window so the
        // buffered press cannot fire a second ground jump.
        if input.released && *vertical_velocity > 0.0 && self.can_double_jump() {
            self.coyote.clear();
        }

        jumped
    }

    #[cfg(test)]
    pub(crate) fn force_timers(&mut self, buffer: f32, coyote: f32, can_double_jump: bool) {
        self.buffer.set(buffer);
        self.coyote.set(coyote);
        self.can_double_jump = can_double_jump;
    }
}
