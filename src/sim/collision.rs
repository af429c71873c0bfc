//! Axis-aligned bounding boxes and overlap tests
//!
//! Everything in the runner is a box in screen space (y grows downward).
//! Touching edges do not count as a hit.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict overlap on both axes
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Index of the first box in `others` that overlaps `subject`
///
/// Only whether something was hit matters to the game; which one is returned
/// is just the first in iteration order.
pub fn first_overlap<'a>(subject: &Aabb, others: impl IntoIterator<Item = &'a Aabb>) -> Option<usize> {
    others.into_iter().position(|other| subject.overlaps(other))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        // Shares the right edge
        assert!(!a.overlaps(&boxed(10.0, 0.0, 5.0, 10.0)));
        // Shares the bottom edge (duck standing next to the ground line)
        assert!(!a.overlaps(&boxed(0.0, 10.0, 10.0, 5.0)));
    }

    #[test]
    fn test_separated_on_one_axis() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        // Overlaps horizontally, clear vertically (duck jumping over a post)
        assert!(!a.overlaps(&boxed(2.0, 20.0, 4.0, 30.0)));
        // Overlaps vertically, clear horizontally
        assert!(!a.overlaps(&boxed(50.0, 0.0, 4.0, 30.0)));
    }

    #[test]
    fn test_contained_box_overlaps() {
        let outer = boxed(0.0, 0.0, 100.0, 100.0);
        let inner = boxed(40.0, 40.0, 2.0, 2.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_first_overlap() {
        let duck = boxed(80.0, 326.0, 44.0, 34.0);
        let far = boxed(600.0, 300.0, 20.0, 60.0);
        let near = boxed(100.0, 320.0, 20.0, 40.0);
        assert_eq!(first_overlap(&duck, [&far, &near]), Some(1));
        assert_eq!(first_overlap(&duck, [&far]), None);
        assert_eq!(first_overlap(&duck, std::iter::empty()), None);
    }

    #[test]
    fn test_center() {
        let b = boxed(10.0, 20.0, 4.0, 6.0);
        assert_eq!(b.center(), Vec2::new(12.0, 23.0));
    }
}
