//! Axis-aligned bounding box collision

use glam::Vec2;

/// Axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Square of side `size` with its top-left corner at `pos`
    pub fn square(pos: Vec2, size: f32) -> Self {
        Self {
            min: pos,
            size: Vec2::splat(size),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Overlap test. Rectangles that only share an edge or a corner count as
    /// intersecting.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x <= b_max.x
            && other.min.x <= a_max.x
            && self.min.y <= b_max.y
            && other.min.y <= a_max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_rects_intersect() {
        let ship = Rect::new(100.0, 100.0, 35.0, 35.0);
        let rock = Rect::new(120.0, 110.0, 15.0, 15.0);
        assert!(ship.intersects(&rock));
        assert!(rock.intersects(&ship));
    }

    #[test]
    fn test_contained_rect_intersects() {
        let ship = Rect::new(0.0, 0.0, 35.0, 35.0);
        let rock = Rect::new(10.0, 10.0, 15.0, 15.0);
        assert!(ship.intersects(&rock));
        assert!(rock.intersects(&ship));
    }

    #[test]
    fn test_edge_touching_counts() {
        let ship = Rect::new(0.0, 0.0, 35.0, 35.0);
        // Shares the right edge
        assert!(ship.intersects(&Rect::new(35.0, 10.0, 15.0, 15.0)));
        // Shares the bottom edge
        assert!(ship.intersects(&Rect::new(10.0, 35.0, 15.0, 15.0)));
        // Shares only the bottom-right corner
        assert!(ship.intersects(&Rect::new(35.0, 35.0, 15.0, 15.0)));
        // Touches from the left
        assert!(ship.intersects(&Rect::new(-15.0, 0.0, 15.0, 15.0)));
    }

    #[test]
    fn test_separated_rects_miss() {
        let ship = Rect::new(0.0, 0.0, 35.0, 35.0);
        assert!(!ship.intersects(&Rect::new(35.5, 0.0, 15.0, 15.0)));
        assert!(!ship.intersects(&Rect::new(0.0, 35.01, 15.0, 15.0)));
        assert!(!ship.intersects(&Rect::new(-15.5, -15.5, 15.0, 15.0)));
        assert!(!ship.intersects(&Rect::new(0.0, 1000.0, 15.0, 15.0)));
    }

    #[test]
    fn test_square_matches_new() {
        let a = Rect::square(Vec2::new(3.0, 4.0), 15.0);
        assert_eq!(a, Rect::new(3.0, 4.0, 15.0, 15.0));
        assert_eq!(a.max(), Vec2::new(18.0, 19.0));
    }
}
