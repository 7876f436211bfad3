use glam::{DQuat, DVec3};

use crate::config::ControllerConfig;
use crate::math::{small_angle_delta_into, EulerAngles};
use crate::traits::{Axis, ControlledObject, InputState, LogicalAction};

/// Per-tick snapshot of the 12 actions, each 0.0 or 1.0
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MoveState {
    pub up: f64,
    pub down: f64,
    pub left: f64,
    pub right: f64,
    pub forward: f64,
    pub back: f64,
    pub pitch_up: f64,
    pub pitch_down: f64,
    pub yaw_left: f64,
    pub yaw_right: f64,
    pub roll_left: f64,
    pub roll_right: f64,
}

impl MoveState {
    /// Query every action once
    pub fn sample<I: InputState + ?Sized>(input: &I) -> Self {
        let level = |action: LogicalAction| if input.is_active(action) { 1.0 } else { 0.0 };
        Self {
            up: level(LogicalAction::MoveUp),
            down: level(LogicalAction::MoveDown),
            left: level(LogicalAction::MoveLeft),
            right: level(LogicalAction::MoveRight),
            forward: level(LogicalAction::MoveForward),
            back: level(LogicalAction::MoveBack),
            pitch_up: level(LogicalAction::PitchUp),
            pitch_down: level(LogicalAction::PitchDown),
            yaw_left: level(LogicalAction::YawLeft),
            yaw_right: level(LogicalAction::YawRight),
            roll_left: level(LogicalAction::RollLeft),
            roll_right: level(LogicalAction::RollRight),
        }
    }

    /// Forward intent, with auto-forward standing in unless back is held
    pub fn effective_forward(&self, auto_forward: bool) -> f64 {
        if self.forward == 1.0 || (auto_forward && self.back == 0.0) {
            1.0
        } else {
            0.0
        }
    }

    /// Unscaled translation intent; +Z is back
    pub fn move_vector(&self, auto_forward: bool) -> DVec3 {
        DVec3::new(
            self.right - self.left,
            self.up - self.down,
            self.back - self.effective_forward(auto_forward),
        )
    }

    /// Unscaled rotation intent as (pitch, yaw, roll)
    pub fn rotation_vector(&self) -> DVec3 {
        DVec3::new(
            self.pitch_up - self.pitch_down,
            self.yaw_left - self.yaw_right,
            self.roll_left - self.roll_right,
        )
    }
}

/// Free-flight controller steering one object from held actions
///
/// Bind a borrowed handle with `FlyControls::new(&mut object)` to keep the
/// object owned elsewhere.
#[derive(Debug)]
pub struct FlyControls<O: ControlledObject> {
    object: O,
    pub config: ControllerConfig,
    move_state: MoveState,
    move_vector: DVec3,
    rotation_vector: DVec3,
    scratch: DQuat,
}

impl<O: ControlledObject> FlyControls<O> {
    pub fn new(object: O) -> Self {
        Self::with_config(object, ControllerConfig::default())
    }

    pub fn with_config(object: O, config: ControllerConfig) -> Self {
        Self {
            object,
            config,
            move_state: MoveState::default(),
            move_vector: DVec3::ZERO,
            rotation_vector: DVec3::ZERO,
            scratch: DQuat::IDENTITY,
        }
    }

    /// Advance by `delta_seconds`, which must be >= 0
    ///
    /// Translation uses the orientation from before this tick; the new
    /// rotation only affects later ticks.
    pub fn tick<I: InputState + ?Sized>(&mut self, delta_seconds: f64, input: &I) {
        self.move_state = MoveState::sample(input);
        self.move_vector = self.move_state.move_vector(self.config.auto_forward);
        self.rotation_vector = self.move_state.rotation_vector();

        let move_mult = delta_seconds * self.config.movement_speed;
        let rot_mult = delta_seconds * self.config.roll_speed;

        if self.move_vector != DVec3::ZERO || self.rotation_vector != DVec3::ZERO {
            log::trace!(
                "tick dt={} move={:?} rotation={:?}",
                delta_seconds,
                self.move_vector,
                self.rotation_vector
            );
        }

        self.object.translate_local(Axis::X, self.move_vector.x * move_mult);
        self.object.translate_local(Axis::Y, self.move_vector.y * move_mult);
        self.object.translate_local(Axis::Z, self.move_vector.z * move_mult);

        small_angle_delta_into(&mut self.scratch, self.rotation_vector * rot_mult);
        let orientation = self.object.orientation() * self.scratch;
        self.object.set_orientation(orientation);

        self.object
            .set_euler_view(EulerAngles::from_quat(orientation, self.config.euler_order));
    }

    pub fn object(&self) -> &O {
        &self.object
    }

    pub fn object_mut(&mut self) -> &mut O {
        &mut self.object
    }

    /// Release the bound object
    pub fn into_inner(self) -> O {
        self.object
    }

    pub fn move_state(&self) -> &MoveState {
        &self.move_state
    }

    pub fn move_vector(&self) -> DVec3 {
        self.move_vector
    }

    pub fn rotation_vector(&self) -> DVec3 {
        self.rotation_vector
    }

    /// Delta quaternion built by the last tick
    pub fn last_delta(&self) -> DQuat {
        self.scratch
    }
}
