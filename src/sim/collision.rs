//! Axis-aligned bounding box collision
//!
//! Every entity that takes part in collision resolution exposes its hitbox as
//! a [`Rect`]; the overlap test itself is a pure function with no tolerance
//! fudging - touching edges do not count as contact.

use glam::Vec2;

/// An axis-aligned rectangle in arena coordinates (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq)]
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

    /// Build a rect from a top-left position and a size
    pub fn from_pos(pos: Vec2, width: f32, height: f32) -> Self {
        Self::new(pos.x, pos.y, width, height)
    }
}

/// Strict AABB overlap test
///
/// Returns true iff the interiors of `a` and `b` intersect. Symmetric, though
/// the engine only ever calls it as (moving entity, enemy).
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}
