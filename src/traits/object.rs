use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

use crate::math::EulerAngles;

/// One of an object's own local axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Unit vector of this axis in the object's local frame
    pub const fn unit(self) -> DVec3 {
        match self {
            Axis::X => DVec3::X,
            Axis::Y => DVec3::Y,
            Axis::Z => DVec3::Z,
        }
    }
}

/// Scene object a fly controller can steer
pub trait ControlledObject {
    /// Move along one of the object's current local axes
    fn translate_local(&mut self, axis: Axis, distance: f64);

    /// Current orientation as a unit quaternion
    fn orientation(&self) -> DQuat;

    fn set_orientation(&mut self, orientation: DQuat);

    /// Receive a derived Euler view of the orientation, for display only
    fn set_euler_view(&mut self, _euler: EulerAngles) {}
}

impl<T: ControlledObject + ?Sized> ControlledObject for &mut T {
    fn translate_local(&mut self, axis: Axis, distance: f64) {
        (**self).translate_local(axis, distance)
    }

    fn orientation(&self) -> DQuat {
        (**self).orientation()
    }

    fn set_orientation(&mut self, orientation: DQuat) {
        (**self).set_orientation(orientation)
    }

    fn set_euler_view(&mut self, euler: EulerAngles) {
        (**self).set_euler_view(euler)
    }
}
