use crate::error::{Result, WindowError};
use crate::traits::TextureTarget;

use super::geometry::Rect;
use super::surface_manager::SurfaceView;
use super::texture::TextureRenderer;

/// Upload dirty rectangles (logical units) from the surface into the texture,
/// then present the whole texture once.
///
/// Rects are scaled to physical pixels and clamped to the surface; rects that
/// end up empty are skipped. Returns the physical rects that were uploaded.
pub fn update_rects<T: TextureTarget>(
    view: SurfaceView<'_>,
    renderer: &mut TextureRenderer<T>,
    rects: &[Rect],
) -> Result<Vec<Rect>> {
    let surface = view.surface;
    if renderer.texture_size() != Some(surface.size()) {
        return Err(WindowError::TextureMismatch {
            texture: renderer.texture_size(),
            surface: surface.size(),
        });
    }

    let bounds = surface.size().bounds();
    let mut uploaded = Vec::with_capacity(rects.len());

    for rect in rects {
        let Some(physical) = rect.scaled(view.scale).intersect(&bounds) else {
            continue;
        };
        let Some(pixels) = surface.block_bytes(physical) else {
            continue;
        };

        renderer
            .target_mut()
            .update_texture(physical, pixels, surface.pitch())?;
        uploaded.push(physical);
    }

    renderer.target_mut().present()?;
    Ok(uploaded)
}
