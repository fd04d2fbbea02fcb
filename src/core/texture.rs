use crate::error::Result;
use crate::traits::TextureTarget;

use super::geometry::Size;

/// Sequences renderer and texture lifetimes over a `TextureTarget`
///
/// The renderer is created once, on the first setup. The texture is rebuilt on
/// every setup, always destroying the previous one first.
pub struct TextureRenderer<T: TextureTarget> {
    target: T,
    renderer_ready: bool,
    texture_size: Option<Size>,
}

impl<T: TextureTarget> TextureRenderer<T> {
    pub fn new(target: T) -> Self {
        Self {
            target,
            renderer_ready: false,
            texture_size: None,
        }
    }

    /// Ensure the renderer exists and (re)create the texture at `size`
    /// (physical pixels)
    pub fn setup(&mut self, size: Size) -> Result<()> {
        if !self.renderer_ready {
            self.target.create_renderer()?;
            self.renderer_ready = true;
            log::debug!("renderer created");
        }

        if self.texture_size.take().is_some() {
            self.target.destroy_texture();
        }
        self.target.create_texture(size)?;
        self.texture_size = Some(size);
        log::debug!("texture created: {}x{}", size.width, size.height);

        Ok(())
    }

    /// Size of the live texture, `None` before the first setup
    pub fn texture_size(&self) -> Option<Size> {
        self.texture_size
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }
}

impl<T: TextureTarget> Drop for TextureRenderer<T> {
    fn drop(&mut self) {
        if self.texture_size.take().is_some() {
            self.target.destroy_texture();
        }
    }
}
