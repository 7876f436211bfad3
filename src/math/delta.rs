use glam::{DQuat, DVec3};

/// Small-angle rotation delta: `(x, y, z, 1)` normalized
///
/// Approximates a rotation around `scaled` by an angle of `2 * atan(|scaled|)`,
/// which tracks `|scaled|` for small inputs and saturates below PI for large
/// ones. A zero vector yields the identity exactly.
pub fn small_angle_delta(scaled: DVec3) -> DQuat {
    DQuat::from_xyzw(scaled.x, scaled.y, scaled.z, 1.0).normalize()
}

/// Same as [`small_angle_delta`], writing into a caller-owned quaternion
pub fn small_angle_delta_into(out: &mut DQuat, scaled: DVec3) {
    *out = small_angle_delta(scaled);
}
