pub mod input_adapter;

pub use input_adapter::{KeyBindings, WinitInput};
