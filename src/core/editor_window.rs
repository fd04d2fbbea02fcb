use crate::error::Result;
use crate::traits::{NativeWindow, TextureTarget};

use super::command_buffer::{Command, CommandBuffer};
use super::geometry::{Rect, Size};
use super::presenter;
use super::surface::PixelSurface;
use super::surface_manager::{SurfaceManager, SurfaceView};
use super::texture::TextureRenderer;

/// One editor window: native window, pixel surface, texture and command queue
///
/// Texture and surface physical sizes are equal after construction and after
/// every `resize_surface`. Dropping the window releases the texture, renderer
/// and native window.
pub struct EditorWindow<W: NativeWindow, T: TextureTarget> {
    surfaces: SurfaceManager,
    renderer: TextureRenderer<T>,
    commands: CommandBuffer,
    native: W,
}

impl<W: NativeWindow, T: TextureTarget> EditorWindow<W, T> {
    /// Allocate the surface and set up the renderer for a freshly created window
    pub fn new(native: W, target: T) -> Result<Self> {
        let surfaces = SurfaceManager::new(&native)?;
        let mut renderer = TextureRenderer::new(target);
        renderer.setup(surfaces.surface().surface.size())?;

        Ok(Self {
            surfaces,
            renderer,
            commands: CommandBuffer::new(),
            native,
        })
    }

    /// Replace the surface and texture unconditionally
    pub fn init_surface(&mut self) -> Result<()> {
        let size = self.surfaces.init(&self.native)?;
        self.renderer.setup(size)
    }

    /// Follow a change of window size or pixel density.
    /// Returns `true` if the surface and texture were rebuilt.
    pub fn resize_surface(&mut self) -> Result<bool> {
        match self.surfaces.resize(&self.native)? {
            Some(size) => {
                self.surfaces.clip_to_surface();
                self.renderer.setup(size)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn surface(&self) -> SurfaceView<'_> {
        self.surfaces.surface()
    }

    pub fn surface_mut(&mut self) -> &mut PixelSurface {
        self.surfaces.surface_mut()
    }

    pub fn scale(&self) -> u32 {
        self.surfaces.scale()
    }

    /// Logical size of the drawable area
    pub fn size(&self) -> Size {
        self.surfaces.surface().logical_size()
    }

    pub fn texture_size(&self) -> Option<Size> {
        self.renderer.texture_size()
    }

    pub fn set_clip_rect(&mut self, rect: Rect) {
        self.surfaces.set_clip_rect(rect);
    }

    pub fn clip_to_surface(&mut self) {
        self.surfaces.clip_to_surface();
    }

    /// Upload the given logical rects and present
    pub fn update_rects(&mut self, rects: &[Rect]) -> Result<Vec<Rect>> {
        presenter::update_rects(self.surfaces.surface(), &mut self.renderer, rects)
    }

    pub fn commands_mut(&mut self) -> &mut CommandBuffer {
        &mut self.commands
    }

    /// Replay queued commands onto the surface and empty the queue
    ///
    /// Returns the logical rects touched by fills, ready for `update_rects`.
    pub fn flush_commands(&mut self) -> Vec<Rect> {
        let scale = self.surfaces.scale();
        let mut dirty = Vec::new();

        for command in self.commands.commands() {
            match command {
                Command::SetClip(rect) => self.surfaces.set_clip_rect(rect),
                Command::FillRect(rect, color) => {
                    let touched = self.surfaces.surface_mut().fill_rect(rect.scaled(scale), color);
                    if touched.is_some() {
                        if let Some(clipped) = rect.intersect(&self.clip_in_points()) {
                            dirty.push(clipped);
                        }
                    }
                }
            }
        }

        self.commands.clear();
        self.surfaces.clip_to_surface();
        dirty
    }

    pub fn show(&self) {
        self.native.show();
    }

    pub fn native(&self) -> &W {
        &self.native
    }

    pub fn target(&self) -> &T {
        self.renderer.target()
    }

    /// Current clip rect converted back to logical units, rounded outward
    fn clip_in_points(&self) -> Rect {
        let scale = self.surfaces.scale() as i32;
        let clip = self.surfaces.surface().surface.clip_rect();
        let x = clip.x / scale;
        let y = clip.y / scale;
        let right = (clip.right() + scale - 1) / scale;
        let bottom = (clip.bottom() + scale - 1) / scale;
        Rect::new(x, y, right - x, bottom - y)
    }
}
