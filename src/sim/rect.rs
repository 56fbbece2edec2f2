//! Axis-aligned rectangle geometry for platforms, hitboxes and triggers
//!
//! Screen space: x grows right, y grows down. A rect is defined by its
//! top-left corner and a positive size.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rect of the given size centred on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::new(center.x - size.x / 2.0, center.y - size.y / 2.0, size.x, size.y)
    }

    /// Rect of the given size whose bottom edge midpoint is `midbottom`
    pub fn from_midbottom(midbottom: Vec2, size: Vec2) -> Self {
        Self::new(midbottom.x - size.x / 2.0, midbottom.y - size.y, size.x, size.y)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// True when the two rects share a region of non-zero area.
    /// Rects that only touch along an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Point containment, inclusive of the top/left edges
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }

    /// Finite position and strictly positive size
    pub fn is_valid(&self) -> bool {
        [self.x, self.y, self.w, self.h].iter().all(|v| v.is_finite()) && self.w > 0.0 && self.h > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(188.0, 450.0, 212.0, 15.0);
        assert_eq!(r.left(), 188.0);
        assert_eq!(r.right(), 400.0);
        assert_eq!(r.top(), 450.0);
        assert_eq!(r.bottom(), 465.0);
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let floor = Rect::new(0.0, 100.0, 100.0, 10.0);
        let resting = Rect::new(10.0, 40.0, 30.0, 60.0);
        assert!(!resting.intersects(&floor));

        let sunk = Rect::new(10.0, 40.5, 30.0, 60.0);
        assert!(sunk.intersects(&floor));
        assert!(floor.intersects(&sunk));
    }

    #[test]
    fn test_from_center_and_midbottom() {
        let r = Rect::from_center(Vec2::new(10.0, 439.0), Vec2::new(30.0, 60.0));
        assert_eq!(r, Rect::new(-5.0, 409.0, 30.0, 60.0));

        let feet = Rect::from_midbottom(Vec2::new(360.0, 450.0), Vec2::new(30.0, 20.0));
        assert_eq!(feet, Rect::new(345.0, 430.0, 30.0, 20.0));
    }

    #[test]
    fn test_contains_point() {
        let r = Rect::new(320.0, 280.0, 160.0, 40.0);
        assert!(r.contains_point(Vec2::new(400.0, 300.0)));
        assert!(r.contains_point(Vec2::new(320.0, 280.0)));
        assert!(!r.contains_point(Vec2::new(480.0, 300.0)));
    }

    #[test]
    fn test_validity() {
        assert!(Rect::new(0.0, 0.0, 1.0, 1.0).is_valid());
        assert!(!Rect::new(0.0, 0.0, 0.0, 1.0).is_valid());
        assert!(!Rect::new(0.0, 0.0, 5.0, -1.0).is_valid());
        assert!(!Rect::new(f32::NAN, 0.0, 5.0, 1.0).is_valid());
    }
}
