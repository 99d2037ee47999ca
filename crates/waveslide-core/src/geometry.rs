//! Geometric primitives handed to renderers.

use bytemuck::{Pod, Zeroable};
use glam::Vec2 as GlamVec2;

/// 2D point / vector in view pixels (y grows downwards).
pub type Vec2 = GlamVec2;

/// A straight line between two points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct LineSegment {
    pub start: Vec2,
    pub end: Vec2,
}

impl LineSegment {
    /// Create a new line segment.
    #[inline]
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Vertical segment at `x` spanning `y0..y1`.
    #[inline]
    pub fn vertical(x: f32, y0: f32, y1: f32) -> Self {
        Self::new(Vec2::new(x, y0), Vec2::new(x, y1))
    }
}

/// A circle, used for the progress indicator handle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    /// Create a new circle.
    #[inline]
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Check if a point lies strictly inside the circle.
    #[inline]
    pub fn contains(self, point: Vec2) -> bool {
        self.center.distance_squared(point) < self.radius * self.radius
    }

    /// Check if `x` falls within the circle's horizontal extent (edges inclusive).
    #[inline]
    pub fn spans_x(self, x: f32) -> bool {
        x >= self.center.x - self.radius && x <= self.center.x + self.radius
    }
}
