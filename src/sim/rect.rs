//! Axis-aligned integer rectangles
//!
//! Everything in the world is a pixel rectangle:
//! - x, y: top-left corner (y grows downward)
//! - w, h: extent, both expected to be positive

use glam::IVec2;

/// An axis-aligned rectangle in world pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// True if the rectangle covers no area
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Check whether two rectangles share a non-zero-area region.
    ///
    /// Rectangles that only touch along an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// The same rectangle shifted by an offset
    pub fn offset(&self, delta: IVec2) -> Rect {
        Rect::new(self.x + delta.x, self.y + delta.y, self.w, self.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_rects_intersect() {
        let a = Rect::new(0, 0, 30, 30);
        let b = Rect::new(20, 25, 70, 10);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_edge_contact_is_not_intersection() {
        let player = Rect::new(100, 760, 30, 30);
        // Platform top edge exactly at player bottom
        let platform = Rect::new(90, 790, 70, 10);
        assert!(!player.intersects(&platform));

        // Side by side
        let left = Rect::new(0, 0, 10, 10);
        let right = Rect::new(10, 0, 10, 10);
        assert!(!left.intersects(&right));
    }

    #[test]
    fn test_containment_intersects() {
        let outer = Rect::new(0, 0, 100, 100);
        let inner = Rect::new(40, 40, 5, 5);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_empty_rect_never_intersects() {
        let a = Rect::new(0, 0, 100, 100);
        let empty = Rect::new(10, 10, 0, 20);
        assert!(!a.intersects(&empty));
        assert!(!empty.intersects(&a));
    }

    #[test]
    fn test_offset() {
        let r = Rect::new(5, 100, 70, 10);
        let moved = r.offset(IVec2::new(0, -40));
        assert_eq!(moved, Rect::new(5, 60, 70, 10));
        assert_eq!(moved.bottom(), 70);
        assert_eq!(moved.right(), 75);
    }
}
