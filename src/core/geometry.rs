/// Width and height pair, in either physical pixels or logical units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero (e.g. a minimized window)
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Total number of pixels
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Full rectangle anchored at the origin
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }
}

/// Integer rectangle, in either physical pixels or logical units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Right edge, saturating at `i32::MAX`
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge, saturating at `i32::MAX`
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Multiply origin and extent by an integer scale factor, saturating
    pub fn scaled(&self, scale: u32) -> Rect {
        let s = i32::try_from(scale).unwrap_or(i32::MAX);
        Rect::new(
            self.x.saturating_mul(s),
            self.y.saturating_mul(s),
            self.width.saturating_mul(s),
            self.height.saturating_mul(s),
        )
    }

    /// Overlapping region of two rectangles, `None` if they don't overlap
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right <= x || bottom <= y {
            return None;
        }
        Some(Rect::new(x, y, right - x, bottom - y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_empty_when_either_dimension_zero() {
        assert!(Size::new(0, 600).is_empty());
        assert!(Size::new(800, 0).is_empty());
        assert!(!Size::new(1, 1).is_empty());
    }

    #[test]
    fn size_pixel_count() {
        assert_eq!(Size::new(1920, 1080).pixel_count(), 2_073_600);
    }

    #[test]
    fn rect_scaled_multiplies_everything() {
        let r = Rect::new(3, 4, 10, 20).scaled(2);
        assert_eq!(r, Rect::new(6, 8, 20, 40));
    }

    #[test]
    fn rect_scaled_by_one_is_identity() {
        let r = Rect::new(-5, 7, 11, 13);
        assert_eq!(r.scaled(1), r);
    }

    #[test]
    fn rect_intersect_overlapping() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert_eq!(a.intersect(&b), Some(Rect::new(5, 5, 5, 5)));
    }

    #[test]
    fn rect_intersect_disjoint_and_touching() {
        let a = Rect::new(0, 0, 10, 10);
        assert_eq!(a.intersect(&Rect::new(20, 20, 5, 5)), None);
        // Sharing only an edge is not an overlap
        assert_eq!(a.intersect(&Rect::new(10, 0, 5, 5)), None);
    }

    #[test]
    fn rect_intersect_clamps_negative_origin() {
        let bounds = Size::new(100, 50).bounds();
        let r = Rect::new(-10, -10, 30, 30);
        assert_eq!(r.intersect(&bounds), Some(Rect::new(0, 0, 20, 20)));
    }

    #[test]
    fn rect_edges_saturate() {
        let r = Rect::new(i32::MAX - 5, i32::MAX - 1, 10, 10);
        assert_eq!(r.right(), i32::MAX);
        assert_eq!(r.bottom(), i32::MAX);
    }

    #[test]
    fn rect_scaled_saturates() {
        let r = Rect::new(i32::MIN / 2 - 1, 0, i32::MAX / 2 + 1, 10).scaled(2);
        assert_eq!(r, Rect::new(i32::MIN, 0, i32::MAX, 20));
    }

    #[test]
    fn rect_intersect_far_off_surface() {
        let bounds = Size::new(100, 100).bounds();
        assert_eq!(Rect::new(i32::MAX - 5, 0, 10, 10).intersect(&bounds), None);
        assert_eq!(
            Rect::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX).intersect(&bounds),
            None
        );
    }

    #[test]
    fn rect_intersect_huge_rect_covering_bounds() {
        let bounds = Size::new(100, 50).bounds();
        let huge = Rect::new(-1_000_000, -1_000_000, i32::MAX, i32::MAX);
        assert_eq!(huge.intersect(&bounds), Some(bounds));
    }

    #[test]
    fn rect_intersect_near_i32_min() {
        let a = Rect::new(i32::MIN, 0, i32::MAX, 10);
        let b = Rect::new(-10, 0, i32::MAX, 10);
        // right edge of `a` is -1
        assert_eq!(a.intersect(&b), Some(Rect::new(-10, 0, 9, 10)));
        assert_eq!(a.intersect(&a), Some(a));
    }
}
