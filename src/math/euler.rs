use glam::{DQuat, EulerRot};
use serde::{Deserialize, Serialize};

/// Intrinsic rotation order used when deriving Euler angles
///
/// Names follow the scene-graph convention: `XYZ` means the orientation is
/// `Rx(x) * Ry(y) * Rz(z)`.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
#[value(rename_all = "UPPER")]
pub enum EulerOrder {
    #[default]
    XYZ,
    XZY,
    YXZ,
    YZX,
    ZXY,
    ZYX,
}

impl EulerOrder {
    const fn to_glam(self) -> EulerRot {
        match self {
            EulerOrder::XYZ => EulerRot::XYZ,
            EulerOrder::XZY => EulerRot::XZY,
            EulerOrder::YXZ => EulerRot::YXZ,
            EulerOrder::YZX => EulerRot::YZX,
            EulerOrder::ZXY => EulerRot::ZXY,
            EulerOrder::ZYX => EulerRot::ZYX,
        }
    }
}

/// Euler view of an orientation, angles in radians about each local axis
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EulerAngles {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub order: EulerOrder,
}

impl EulerAngles {
    /// Derive angles from a unit quaternion in the given order
    pub fn from_quat(q: DQuat, order: EulerOrder) -> Self {
        let (a, b, c) = q.to_euler(order.to_glam());
        // glam returns angles in application order, map them back onto axes
        let (x, y, z) = match order {
            EulerOrder::XYZ => (a, b, c),
            EulerOrder::XZY => (a, c, b),
            EulerOrder::YXZ => (b, a, c),
            EulerOrder::YZX => (c, a, b),
            EulerOrder::ZXY => (b, c, a),
            EulerOrder::ZYX => (c, b, a),
        };
        Self { x, y, z, order }
    }

    /// Rebuild the quaternion these angles describe
    pub fn to_quat(&self) -> DQuat {
        let (a, b, c) = match self.order {
            EulerOrder::XYZ => (self.x, self.y, self.z),
            EulerOrder::XZY => (self.x, self.z, self.y),
            EulerOrder::YXZ => (self.y, self.x, self.z),
            EulerOrder::YZX => (self.y, self.z, self.x),
            EulerOrder::ZXY => (self.z, self.x, self.y),
            EulerOrder::ZYX => (self.z, self.y, self.x),
        };
        DQuat::from_euler(self.order.to_glam(), a, b, c)
    }
}
