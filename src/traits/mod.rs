pub mod input;
pub mod object;

pub use input::*;
pub use object::*;
