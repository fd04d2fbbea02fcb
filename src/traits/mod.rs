pub mod platform;
pub mod texture_target;
pub mod window;

pub use platform::*;
pub use texture_target::*;
pub use window::*;
