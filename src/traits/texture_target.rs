use crate::core::geometry::{Rect, Size};
use crate::error::Result;

/// Hardware renderer with a single streaming texture
///
/// Implementations only perform the platform calls; sequencing (lazy renderer,
/// destroy-before-recreate) lives in `TextureRenderer`.
pub trait TextureTarget {
    /// Create the renderer. Called at most once per window.
    fn create_renderer(&mut self) -> Result<()>;

    /// Create a streaming texture of the given physical size
    fn create_texture(&mut self, size: Size) -> Result<()>;

    /// Release the current texture, if any
    fn destroy_texture(&mut self);

    /// Upload a block of BGRA32 pixels into `rect` of the texture.
    /// `pixels` starts at the rect origin and rows are `pitch` bytes apart.
    fn update_texture(&mut self, rect: Rect, pixels: &[u8], pitch: u32) -> Result<()>;

    /// Draw the whole texture to the window and present the frame
    fn present(&mut self) -> Result<()>;
}
