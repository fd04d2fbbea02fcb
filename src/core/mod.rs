pub mod command_buffer;
pub mod editor_window;
pub mod geometry;
pub mod presenter;
pub mod surface;
pub mod surface_manager;
pub mod texture;

pub use command_buffer::{Command, CommandBuffer};
pub use editor_window::EditorWindow;
pub use geometry::{Rect, Size};
pub use surface::{Color, PixelSurface};
pub use surface_manager::{surface_scale, SurfaceManager, SurfaceView};
pub use texture::TextureRenderer;
