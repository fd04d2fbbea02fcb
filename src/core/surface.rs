use super::geometry::{Rect, Size};

/// Bytes per pixel of the fixed BGRA32 surface format
pub const BYTES_PER_PIXEL: u32 = 4;

/// RGBA color, packed into the surface as BGRA32
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Pack as a BGRA32 pixel (B, G, R, A in memory order)
    pub fn to_pixel(self) -> u32 {
        u32::from_le_bytes([self.b, self.g, self.r, self.a])
    }

    /// Unpack a BGRA32 pixel
    pub fn from_pixel(pixel: u32) -> Self {
        let [b, g, r, a] = pixel.to_le_bytes();
        Self { r, g, b, a }
    }

    /// Source-over blend of `self` onto `dst`
    fn blend_over(self, dst: Color) -> Color {
        let a = self.a as u32;
        let inv = 255 - a;
        let mix = |s: u8, d: u8| ((s as u32 * a + d as u32 * inv) / 255) as u8;
        Color {
            r: mix(self.r, dst.r),
            g: mix(self.g, dst.g),
            b: mix(self.b, dst.b),
            a: dst.a.max(self.a),
        }
    }
}

/// Off-screen pixel buffer sized in physical pixels
///
/// Pixels are stored row-major as BGRA32 with a pitch of `width * 4` bytes.
/// All fill operations honor the current clip rectangle.
#[derive(Clone)]
pub struct PixelSurface {
    pixels: Vec<u32>,
    size: Size,
    clip: Rect,
}

impl PixelSurface {
    /// Allocate a surface filled with transparent black
    pub fn new(size: Size) -> Self {
        Self {
            pixels: vec![0; size.pixel_count()],
            size,
            clip: size.bounds(),
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Bytes per row
    pub fn pitch(&self) -> u32 {
        self.size.width * BYTES_PER_PIXEL
    }

    pub fn clip_rect(&self) -> Rect {
        self.clip
    }

    /// Restrict fills to `rect` (physical pixels), or the whole surface for `None`
    ///
    /// The clip is always kept inside the surface bounds; a rect that misses
    /// the surface leaves an empty clip.
    pub fn set_clip_rect(&mut self, rect: Option<Rect>) {
        let bounds = self.size.bounds();
        self.clip = match rect {
            None => bounds,
            Some(r) => r.intersect(&bounds).unwrap_or_default(),
        };
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Raw BGRA32 bytes of the whole surface
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Bytes starting at the top-left corner of `rect`, running to the end of
    /// the surface. Rows are `pitch()` bytes apart.
    ///
    /// Returns `None` if the rect is not fully inside the surface.
    pub fn block_bytes(&self, rect: Rect) -> Option<&[u8]> {
        if rect.is_empty() || rect.intersect(&self.size.bounds()) != Some(rect) {
            return None;
        }

        let start = (rect.y as usize * self.size.width as usize + rect.x as usize)
            * BYTES_PER_PIXEL as usize;
        Some(&self.as_bytes()[start..])
    }

    /// Read a single pixel
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        Some(Color::from_pixel(self.pixels[self.index(x, y)]))
    }

    /// Set single pixel, ignoring the clip
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x >= self.size.width || y >= self.size.height {
            return;
        }
        let idx = self.index(x, y);
        self.pixels[idx] = color.to_pixel();
    }

    /// Fill the clip rectangle with a color
    pub fn clear(&mut self, color: Color) {
        self.fill_rect(self.clip, color);
    }

    /// Fill a rectangle (physical pixels), clipped
    ///
    /// Opaque colors replace, translucent colors blend source-over.
    /// Returns the region actually touched.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) -> Option<Rect> {
        let area = rect.intersect(&self.clip)?;

        let packed = color.to_pixel();
        for y in area.y..area.bottom() {
            let row = self.index(area.x as u32, y as u32);
            let span = &mut self.pixels[row..row + area.width as usize];

            if color.a == 255 {
                span.fill(packed);
            } else if color.a > 0 {
                for px in span.iter_mut() {
                    *px = color.blend_over(Color::from_pixel(*px)).to_pixel();
                }
            }
        }

        Some(area)
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.size.width as usize + x as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_creation() {
        let surface = PixelSurface::new(Size::new(100, 50));
        assert_eq!(surface.size(), Size::new(100, 50));
        assert_eq!(surface.pixels().len(), 100 * 50);
        assert_eq!(surface.as_bytes().len(), 100 * 50 * 4);
        assert_eq!(surface.pitch(), 400);
        assert_eq!(surface.clip_rect(), Rect::new(0, 0, 100, 50));
    }

    #[test]
    fn color_packs_as_bgra() {
        let c = Color::rgba(1, 2, 3, 4);
        assert_eq!(c.to_pixel().to_le_bytes(), [3, 2, 1, 4]);
        assert_eq!(Color::from_pixel(c.to_pixel()), c);
    }

    #[test]
    fn clear_fills_everything() {
        let mut surface = PixelSurface::new(Size::new(10, 10));
        surface.clear(Color::rgb(255, 0, 0));

        assert_eq!(surface.pixel(0, 0), Some(Color::rgb(255, 0, 0)));
        assert_eq!(surface.pixel(9, 9), Some(Color::rgb(255, 0, 0)));
        assert_eq!(&surface.as_bytes()[0..4], &[0, 0, 255, 255]);
    }

    #[test]
    fn fill_rect_respects_clip() {
        let mut surface = PixelSurface::new(Size::new(10, 10));
        surface.set_clip_rect(Some(Rect::new(2, 2, 3, 3)));

        let touched = surface.fill_rect(Rect::new(0, 0, 10, 10), Color::WHITE);
        assert_eq!(touched, Some(Rect::new(2, 2, 3, 3)));

        assert_eq!(surface.pixel(1, 1), Some(Color::default()));
        assert_eq!(surface.pixel(2, 2), Some(Color::WHITE));
        assert_eq!(surface.pixel(4, 4), Some(Color::WHITE));
        assert_eq!(surface.pixel(5, 5), Some(Color::default()));
    }

    #[test]
    fn fill_rect_outside_clip_touches_nothing() {
        let mut surface = PixelSurface::new(Size::new(10, 10));
        assert_eq!(surface.fill_rect(Rect::new(20, 20, 5, 5), Color::WHITE), None);
        assert!(surface.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn clip_is_clamped_to_bounds() {
        let mut surface = PixelSurface::new(Size::new(10, 10));
        surface.set_clip_rect(Some(Rect::new(-5, 5, 100, 100)));
        assert_eq!(surface.clip_rect(), Rect::new(0, 5, 10, 5));

        surface.set_clip_rect(None);
        assert_eq!(surface.clip_rect(), Rect::new(0, 0, 10, 10));
    }

    #[test]
    fn translucent_fill_blends() {
        let mut surface = PixelSurface::new(Size::new(4, 4));
        surface.clear(Color::BLACK);
        surface.fill_rect(Rect::new(0, 0, 4, 4), Color::rgba(255, 255, 255, 128));

        let px = surface.pixel(1, 1).unwrap();
        assert_eq!(px.r, 128);
        assert_eq!(px.g, 128);
        assert_eq!(px.b, 128);
        assert_eq!(px.a, 255);
    }

    #[test]
    fn fully_transparent_fill_is_noop() {
        let mut surface = PixelSurface::new(Size::new(4, 4));
        surface.clear(Color::rgb(10, 20, 30));
        surface.fill_rect(Rect::new(0, 0, 4, 4), Color::rgba(255, 255, 255, 0));
        assert_eq!(surface.pixel(2, 2), Some(Color::rgb(10, 20, 30)));
    }

    #[test]
    fn block_bytes_starts_at_rect_origin() {
        let mut surface = PixelSurface::new(Size::new(8, 8));
        surface.set_pixel(3, 2, Color::rgb(9, 8, 7));

        let block = surface.block_bytes(Rect::new(3, 2, 2, 2)).unwrap();
        assert_eq!(&block[0..4], &[7, 8, 9, 255]);
        assert_eq!(block.len(), surface.as_bytes().len() - (2 * 8 + 3) * 4);
    }

    #[test]
    fn block_bytes_rejects_rects_outside_surface() {
        let surface = PixelSurface::new(Size::new(8, 8));
        assert!(surface.block_bytes(Rect::new(6, 6, 4, 4)).is_none());
        assert!(surface.block_bytes(Rect::new(0, 0, 0, 4)).is_none());
    }

    #[test]
    fn pixel_bounds_checking() {
        let mut surface = PixelSurface::new(Size::new(10, 10));
        surface.set_pixel(100, 100, Color::WHITE);
        assert_eq!(surface.pixel(100, 100), None);
        assert!(surface.pixels().iter().all(|&p| p == 0));
    }
}
