use crate::core::geometry::Size;
use crate::error::Result;
use crate::icon::IconData;

/// Native window handle - size queries and visibility
pub trait NativeWindow {
    /// Drawable size in physical pixels
    fn size_in_pixels(&self) -> Result<Size>;

    /// Window size in logical units
    fn size_in_points(&self) -> Result<Size>;

    /// Make a hidden window visible
    fn show(&self);

    fn set_title(&self, title: &str);

    fn set_icon(&self, icon: &IconData) -> Result<()>;

    /// Request the window to redraw
    fn request_redraw(&self);
}
