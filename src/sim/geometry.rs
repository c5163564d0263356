//! Axis-aligned rectangles and circles
//!
//! Screen convention: origin at the top-left, y grows downward, so a
//! rectangle's `top` is its smallest y.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Strict overlap on the x axis (touching edges do not count)
    #[inline]
    pub fn overlaps_x(&self, other: &Rect) -> bool {
        self.left() < other.right() && self.right() > other.left()
    }
}

/// Circle given by center and radius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// Euclidean distance between two points
#[inline]
pub fn distance(p: Vec2, q: Vec2) -> f32 {
    p.distance(q)
}

/// Strict rectangle overlap (shared edges are not an overlap)
pub fn rect_overlap(a: &Rect, b: &Rect) -> bool {
    a.overlaps_x(b) && a.top() < b.bottom() && a.bottom() > b.top()
}

/// Whether a point lies strictly inside a circle
#[inline]
pub fn circle_contains(point: Vec2, circle: &Circle) -> bool {
    distance(point, circle.center) < circle.radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center(), Vec2::new(25.0, 40.0));
    }

    #[test]
    fn test_rect_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect_overlap(&a, &Rect::new(5.0, 5.0, 10.0, 10.0)));
        // Touching edges
        assert!(!rect_overlap(&a, &Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!rect_overlap(&a, &Rect::new(0.0, 10.0, 10.0, 10.0)));
        assert!(!rect_overlap(&a, &Rect::new(50.0, 50.0, 1.0, 1.0)));
    }

    #[test]
    fn test_circle_contains() {
        let c = Circle::new(Vec2::new(100.0, 100.0), 10.0);
        assert!(circle_contains(Vec2::new(105.0, 105.0), &c));
        assert!(!circle_contains(Vec2::new(110.0, 100.0), &c));
        assert!(!circle_contains(Vec2::new(0.0, 0.0), &c));
    }

    #[test]
    fn test_distance() {
        assert!((distance(Vec2::ZERO, Vec2::new(3.0, 4.0)) - 5.0).abs() < 1e-6);
    }
}
