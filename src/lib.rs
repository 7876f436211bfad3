pub mod cli;
pub mod config;
pub mod controls;
pub mod core;
pub mod math;
pub mod object;
pub mod traits;

pub use config::ControllerConfig;
pub use controls::{FlyControls, MoveState};
pub use object::{Object3D, Pose};
pub use traits::{Axis, ControlledObject, InputState, LogicalAction};
