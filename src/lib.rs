pub mod bindings;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod gpu;
pub mod icon;
pub mod traits;
pub mod window;

pub use bindings::{Bindings, HostError, WindowHandle, WindowRequest};
pub use error::{fail_fast, Result, WindowError};
