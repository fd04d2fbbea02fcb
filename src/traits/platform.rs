use crate::core::geometry::Size;
use crate::error::Result;

use super::texture_target::TextureTarget;
use super::window::NativeWindow;

/// Where a new window is placed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowPosition {
    Centered,
    At { x: i32, y: i32 },
}

/// Properties for window creation
#[derive(Debug, Clone, PartialEq)]
pub struct WindowAttributes {
    pub title: String,
    pub position: WindowPosition,
    /// Logical size
    pub size: Size,
    pub resizable: bool,
    pub high_pixel_density: bool,
    pub visible: bool,
}

/// Windowing system - creates windows and their renderers
pub trait Platform {
    type Window: NativeWindow;
    type Target: TextureTarget;

    /// Current mode of the primary display, in logical units
    fn primary_display_size(&self) -> Result<Size>;

    fn create_window(&mut self, attributes: &WindowAttributes) -> Result<Self::Window>;

    /// Renderer target bound to a window. No GPU work happens until
    /// `TextureTarget::create_renderer`.
    fn create_target(&mut self, window: &Self::Window) -> Result<Self::Target>;
}
