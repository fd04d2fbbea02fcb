use std::path::Path;

use crate::error::{Result, WindowError};

const BUILTIN_SIZE: u32 = 64;

/// RGBA8 window icon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconData {
    pub rgba: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl IconData {
    pub fn new(rgba: Vec<u8>, width: u32, height: u32) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected || expected == 0 {
            return Err(WindowError::Icon(format!(
                "expected {} bytes for {}x{} icon, got {}",
                expected,
                width,
                height,
                rgba.len()
            )));
        }
        Ok(Self { rgba, width, height })
    }

    /// Decode an image file (PNG)
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let image = image::open(path.as_ref())?.into_rgba8();
        let (width, height) = image.dimensions();
        log::debug!("loaded icon {} ({}x{})", path.as_ref().display(), width, height);
        Self::new(image.into_raw(), width, height)
    }

    /// Generated 64x64 icon: dark rounded tile with three text-like bars
    pub fn builtin() -> Self {
        let n = BUILTIN_SIZE;
        let mut rgba = Vec::with_capacity((n * n * 4) as usize);
        let radius = 10i32;

        for y in 0..n as i32 {
            for x in 0..n as i32 {
                // Distance outside the rounded corner arc
                let cx = x.clamp(radius, n as i32 - 1 - radius);
                let cy = y.clamp(radius, n as i32 - 1 - radius);
                let inside = (x - cx).pow(2) + (y - cy).pow(2) <= radius * radius;

                let bar = (18..46).contains(&x)
                    && [(16, 22), (29, 35), (42, 48)]
                        .iter()
                        .any(|&(top, bottom)| (top..bottom).contains(&y))
                    && !(y >= 42 && x >= 36);

                let pixel = match (inside, bar) {
                    (false, _) => [0, 0, 0, 0],
                    (true, true) => [225, 225, 230, 255],
                    (true, false) => [46, 46, 50, 255],
                };
                rgba.extend_from_slice(&pixel);
            }
        }

        Self {
            rgba,
            width: n,
            height: n,
        }
    }
}
