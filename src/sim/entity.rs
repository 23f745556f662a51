//! Scrolling entities: obstacles and trash tokens
//!
//! One tagged-variant type covers every moving object in the runner phase.
//! Per-kind constants (size, vertical placement relative to the ground) live
//! in small tables on the kind enums, so update and collision logic stays in
//! one place instead of being spread over a class hierarchy.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use crate::consts::*;

/// Obstacle sub-kinds, each with a fixed size and vertical placement rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Ground hazard: wide, flat slick at ground level
    OilSlick,
    /// Overhead hazard: hangs above the ground, hit only while jumping
    SmogCloud,
}

impl ObstacleKind {
    pub fn size(&self) -> Vec2 {
        match self {
            ObstacleKind::OilSlick => Vec2::new(60.0, 20.0),
            ObstacleKind::SmogCloud => Vec2::new(80.0, 40.0),
        }
    }

    /// Top-edge y at spawn time
    pub fn spawn_y(&self) -> f32 {
        match self {
            ObstacleKind::OilSlick => GROUND_Y,
            ObstacleKind::SmogCloud => GROUND_Y - 80.0,
        }
    }
}

/// Trash classification; drives spawn visuals and correct-bin validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrashKind {
    Paper,
    Plastic,
    Glass,
}

impl TrashKind {
    pub const ALL: [TrashKind; 3] = [TrashKind::Paper, TrashKind::Plastic, TrashKind::Glass];

    pub fn as_str(&self) -> &'static str {
        match self {
            TrashKind::Paper => "paper",
            TrashKind::Plastic => "plastic",
            TrashKind::Glass => "glass",
        }
    }
}

/// Kind discriminator for a scrolling entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Obstacle(ObstacleKind),
    Trash(TrashKind),
}

impl EntityKind {
    pub fn size(&self) -> Vec2 {
        match self {
            EntityKind::Obstacle(kind) => kind.size(),
            EntityKind::Trash(_) => Vec2::splat(TOKEN_SIZE),
        }
    }

    /// Top-edge y at spawn time; trash hovers just above the grounded player
    pub fn spawn_y(&self) -> f32 {
        match self {
            EntityKind::Obstacle(kind) => kind.spawn_y(),
            EntityKind::Trash(_) => GROUND_Y - 30.0,
        }
    }
}

/// A moving, collidable object scrolling right-to-left
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    /// Horizontal scroll speed, px per tick (world speed for the level)
    pub speed: f32,
    pub kind: EntityKind,
}

impl Entity {
    /// Construct at the right edge of the field, at the kind's fixed height
    pub fn spawn(id: u32, kind: EntityKind, speed: f32) -> Self {
        Self {
            id,
            pos: Vec2::new(FIELD_WIDTH, kind.spawn_y()),
            speed,
            kind,
        }
    }

    /// Advance one tick of leftward scroll
    pub fn advance(&mut self) {
        self.pos.x -= self.speed;
    }

    /// True once the entity has fully scrolled past the left edge
    pub fn off_screen(&self) -> bool {
        self.pos.x + self.kind.size().x < 0.0
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.kind.size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_at_right_edge() {
        let e = Entity::spawn(1, EntityKind::Obstacle(ObstacleKind::OilSlick), 5.0);
        assert_eq!(e.pos.x, FIELD_WIDTH);
        assert_eq!(e.pos.y, GROUND_Y);
    }

    #[test]
    fn test_advance_and_off_screen() {
        let mut e = Entity::spawn(1, EntityKind::Trash(TrashKind::Paper), 5.0);
        assert!(!e.off_screen());
        // 800 + 20 width, 5 px per tick: gone after 164 ticks
        for _ in 0..164 {
            e.advance();
        }
        assert!(!e.off_screen());
        e.advance();
        assert!(e.off_screen());
    }

    #[test]
    fn test_kind_placement_table() {
        // Overhead hazard hangs above the ground hazard
        let cloud = EntityKind::Obstacle(ObstacleKind::SmogCloud);
        let slick = EntityKind::Obstacle(ObstacleKind::OilSlick);
        assert!(cloud.spawn_y() < slick.spawn_y());

        // Trash sits between the two, clear of the grounded player's box
        let trash = EntityKind::Trash(TrashKind::Glass);
        assert!(trash.spawn_y() + trash.size().y <= GROUND_Y);
    }
}
