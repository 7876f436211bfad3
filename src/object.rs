use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

use crate::math::{EulerAngles, EulerOrder};
use crate::traits::{Axis, ControlledObject};

/// Serializable snapshot of an object's placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: DVec3,
    pub orientation: DQuat,
    pub euler: EulerAngles,
}

/// Minimal scene-graph node: a position and a unit orientation
///
/// Forward is the local -Z axis, right is +X and up is +Y.
#[derive(Debug, Clone, PartialEq)]
pub struct Object3D {
    pub position: DVec3,
    orientation: DQuat,
    euler: EulerAngles,
}

impl Object3D {
    pub fn new() -> Self {
        Self::with_pose(DVec3::ZERO, DQuat::IDENTITY)
    }

    pub fn with_pose(position: DVec3, orientation: DQuat) -> Self {
        let orientation = orientation.normalize();
        Self {
            position,
            orientation,
            euler: EulerAngles::from_quat(orientation, EulerOrder::default()),
        }
    }

    /// Local -Z in world space
    pub fn forward(&self) -> DVec3 {
        self.orientation * DVec3::NEG_Z
    }

    pub fn right(&self) -> DVec3 {
        self.orientation * DVec3::X
    }

    pub fn up(&self) -> DVec3 {
        self.orientation * DVec3::Y
    }

    /// Last Euler view pushed by a controller
    pub fn euler(&self) -> EulerAngles {
        self.euler
    }

    pub fn pose(&self) -> Pose {
        Pose {
            position: self.position,
            orientation: self.orientation,
            euler: self.euler,
        }
    }
}

impl Default for Object3D {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlledObject for Object3D {
    fn translate_local(&mut self, axis: Axis, distance: f64) {
        self.position += self.orientation * (axis.unit() * distance);
    }

    fn orientation(&self) -> DQuat {
        self.orientation
    }

    fn set_orientation(&mut self, orientation: DQuat) {
        self.orientation = orientation;
    }

    fn set_euler_view(&mut self, euler: EulerAngles) {
        self.euler = euler;
    }
}
