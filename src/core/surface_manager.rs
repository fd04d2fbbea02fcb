use crate::error::{Result, WindowError};
use crate::traits::NativeWindow;

use super::geometry::{Rect, Size};
use super::surface::PixelSurface;

/// Integer ratio of physical pixels to logical units
///
/// The ratio must divide evenly and be the same along both axes.
pub fn surface_scale(pixels: Size, points: Size) -> Result<u32> {
    let mismatch = || WindowError::ScaleMismatch { pixels, points };

    if points.is_empty() || pixels.is_empty() {
        return Err(mismatch());
    }
    if pixels.width % points.width != 0 || pixels.height % points.height != 0 {
        return Err(mismatch());
    }

    let scale = pixels.width / points.width;
    if scale == 0 || scale != pixels.height / points.height {
        return Err(mismatch());
    }
    Ok(scale)
}

/// Read-only snapshot of the current surface and its scale
#[derive(Clone, Copy)]
pub struct SurfaceView<'a> {
    pub surface: &'a PixelSurface,
    pub scale: u32,
}

impl SurfaceView<'_> {
    /// Surface size in logical units
    pub fn logical_size(&self) -> Size {
        let size = self.surface.size();
        Size::new(size.width / self.scale, size.height / self.scale)
    }
}

/// Owns the pixel surface of a window and its scale factor
pub struct SurfaceManager {
    surface: PixelSurface,
    scale: u32,
}

impl SurfaceManager {
    /// Allocate a surface for the window's current size
    pub fn new(window: &dyn NativeWindow) -> Result<Self> {
        let (size, scale) = Self::query(window)?;
        log::debug!("surface init: {}x{} pixels, scale {}", size.width, size.height, scale);

        Ok(Self {
            surface: PixelSurface::new(size),
            scale,
        })
    }

    /// Replace the surface with a fresh one sized for the window.
    /// Returns the new physical size for renderer setup.
    pub fn init(&mut self, window: &dyn NativeWindow) -> Result<Size> {
        let (size, scale) = Self::query(window)?;
        log::debug!("surface init: {}x{} pixels, scale {}", size.width, size.height, scale);

        self.surface = PixelSurface::new(size);
        self.scale = scale;
        Ok(size)
    }

    /// Re-initialize only if the physical size or scale changed.
    /// Returns the new physical size when the surface was replaced.
    ///
    /// A zero-sized window (minimized) keeps the current surface.
    pub fn resize(&mut self, window: &dyn NativeWindow) -> Result<Option<Size>> {
        let pixels = window.size_in_pixels()?;
        if pixels.is_empty() {
            return Ok(None);
        }

        let scale = surface_scale(pixels, window.size_in_points()?)?;
        if scale == self.scale && pixels == self.surface.size() {
            return Ok(None);
        }

        log::debug!(
            "surface resize: {:?} scale {} -> {:?} scale {}",
            self.surface.size(),
            self.scale,
            pixels,
            scale
        );
        self.surface = PixelSurface::new(pixels);
        self.scale = scale;
        Ok(Some(pixels))
    }

    pub fn surface(&self) -> SurfaceView<'_> {
        SurfaceView {
            surface: &self.surface,
            scale: self.scale,
        }
    }

    pub fn surface_mut(&mut self) -> &mut PixelSurface {
        &mut self.surface
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Restrict drawing to a logical rectangle
    pub fn set_clip_rect(&mut self, rect: Rect) {
        self.surface.set_clip_rect(Some(rect.scaled(self.scale)));
    }

    /// Remove any clip restriction
    pub fn clip_to_surface(&mut self) {
        self.surface.set_clip_rect(None);
    }

    fn query(window: &dyn NativeWindow) -> Result<(Size, u32)> {
        let pixels = window.size_in_pixels()?;
        let points = window.size_in_points()?;
        Ok((pixels, surface_scale(pixels, points)?))
    }
}
