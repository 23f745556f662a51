//! Axis-aligned bounding boxes
//!
//! Every collision and drop test in the game is a rectangle test: player vs
//! obstacle, player vs trash, spawn placement, token center vs bin. No swept
//! or continuous variant exists; overlap is evaluated once per tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle, top-left anchored, y growing downward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height, both strictly positive
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        debug_assert!(size.x > 0.0 && size.y > 0.0, "degenerate box {size:?}");
        Self { pos, size }
    }

    /// Geometric center of the rectangle
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Overlap test; shared edges do not count as overlap
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.pos.x < other.pos.x + other.size.x
            && other.pos.x < self.pos.x + self.size.x
            && self.pos.y < other.pos.y + other.size.y
            && other.pos.y < self.pos.y + self.size.y
    }

    /// Point containment; the top/left edges are inclusive, bottom/right exclusive
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.pos.x
            && point.x < self.pos.x + self.size.x
            && point.y >= self.pos.y
            && point.y < self.pos.y + self.size.y
    }
}
