//! Axis-aligned rectangles for collision queries
//!
//! Screen coordinates: origin at top-left, y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle spanning `min` (x1, y1) to `max` (x2, y2)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Build from corner coordinates. Callers pass `x1 <= x2` and `y1 <= y2`.
    #[inline]
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        debug_assert!(x1 <= x2 && y1 <= y2, "degenerate rect");
        Self {
            min: Vec2::new(x1, y1),
            max: Vec2::new(x2, y2),
        }
    }

    /// Build from a top-left corner and a size
    #[inline]
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    /// Check overlap, counting shared edges and corners as touching
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        intersects(self, other)
    }
}

/// Two rectangles intersect unless one lies strictly left of, right of,
/// above, or below the other.
#[inline]
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    !(a.max.x < b.min.x || b.max.x < a.min.x || a.max.y < b.min.y || b.max.y < a.min.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlapping_rects_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 15.0, 15.0);
        assert!(intersects(&a, &b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_shared_edge_counts_as_hit() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 2.0, 20.0, 8.0);
        let below = Rect::new(3.0, 10.0, 6.0, 30.0);
        let corner = Rect::new(10.0, 10.0, 11.0, 11.0);
        assert!(intersects(&r, &right));
        assert!(intersects(&r, &below));
        assert!(intersects(&r, &corner));
    }

    #[test]
    fn test_separated_rects_miss() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!intersects(&r, &Rect::new(10.01, 0.0, 20.0, 10.0)));
        assert!(!intersects(&r, &Rect::new(-5.0, 0.0, -0.01, 10.0)));
        assert!(!intersects(&r, &Rect::new(0.0, 10.5, 10.0, 20.0)));
        assert!(!intersects(&r, &Rect::new(0.0, -20.0, 10.0, -1.0)));
    }

    #[test]
    fn test_containment_intersects() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 60.0, 60.0);
        assert!(intersects(&outer, &inner));
        assert!(intersects(&inner, &outer));
    }

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (-500.0f32..500.0, -500.0f32..500.0, 0.0f32..200.0, 0.0f32..200.0)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, x + w, y + h))
    }

    proptest! {
        #[test]
        fn prop_intersection_is_symmetric(a in rect_strategy(), b in rect_strategy()) {
            prop_assert_eq!(intersects(&a, &b), intersects(&b, &a));
        }

        #[test]
        fn prop_rect_intersects_itself(a in rect_strategy()) {
            prop_assert!(intersects(&a, &a));
        }

        #[test]
        fn prop_abutting_rect_touches(a in rect_strategy(), w in 0.0f32..50.0) {
            let neighbor = Rect::new(a.max.x, a.min.y, a.max.x + w, a.max.y);
            prop_assert!(intersects(&a, &neighbor));
        }
    }
}
