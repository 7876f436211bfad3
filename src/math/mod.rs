mod delta;
mod euler;

pub use delta::{small_angle_delta, small_angle_delta_into};
pub use euler::{EulerAngles, EulerOrder};
