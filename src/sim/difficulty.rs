//! Difficulty scaling
//!
//! Pure mapping from level number to the parameter set consumed by the run
//! simulation and the spawn scheduler. Recomputed at every level start;
//! nothing here is cached or mutated.

use serde::{Deserialize, Serialize};

/// Parameters for one level, immutable once computed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    pub level: u32,
    /// Trash collections required to clear the level
    pub trash_quota: u32,
    /// Horizontal scroll speed for every spawned entity, px per tick
    pub world_speed: f32,
    /// Percent chance of an obstacle spawn attempt per eligible tick
    pub obstacle_spawn_chance: u32,
    /// Percent chance of a trash spawn attempt per eligible tick
    pub trash_spawn_chance: u32,
    pub min_ticks_between_obstacles: u32,
    pub min_ticks_between_trash: u32,
    /// Player horizontal speed, px per tick
    pub player_move_speed: f32,
}

impl Difficulty {
    /// Compute the parameter set for a level (levels start at 1)
    pub fn for_level(level: u32) -> Self {
        let level = level.max(1);
        let chance = (3 + level).min(12);
        Self {
            level,
            trash_quota: (6 + 2 * level).min(15),
            world_speed: (5 + (level - 1)).min(12) as f32,
            obstacle_spawn_chance: chance,
            trash_spawn_chance: chance,
            min_ticks_between_obstacles: (50_u32.saturating_sub(2 * level)).max(26),
            min_ticks_between_trash: (40_u32.saturating_sub(2 * level)).max(20),
            player_move_speed: (5 + level / 2).min(10) as f32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_level_one_values() {
        let d = Difficulty::for_level(1);
        assert_eq!(d.trash_quota, 8);
        assert_eq!(d.world_speed, 5.0);
        assert_eq!(d.obstacle_spawn_chance, 4);
        assert_eq!(d.trash_spawn_chance, 4);
        assert_eq!(d.min_ticks_between_obstacles, 48);
        assert_eq!(d.min_ticks_between_trash, 38);
        assert_eq!(d.player_move_speed, 5.0);
    }

    #[test]
    fn test_caps_reached_at_high_levels() {
        let d = Difficulty::for_level(50);
        assert_eq!(d.trash_quota, 15);
        assert_eq!(d.world_speed, 12.0);
        assert_eq!(d.obstacle_spawn_chance, 12);
        assert_eq!(d.trash_spawn_chance, 12);
        assert_eq!(d.min_ticks_between_obstacles, 26);
        assert_eq!(d.min_ticks_between_trash, 20);
        assert_eq!(d.player_move_speed, 10.0);
    }

    proptest! {
        /// Spawn pressure never decreases from one level to the next, gaps
        /// never increase, and every field stays inside its stated bound.
        #[test]
        fn difficulty_scales_monotonically(level in 1u32..200) {
            let cur = Difficulty::for_level(level);
            let next = Difficulty::for_level(level + 1);

            prop_assert!(next.obstacle_spawn_chance >= cur.obstacle_spawn_chance);
            prop_assert!(next.trash_spawn_chance >= cur.trash_spawn_chance);
            prop_assert!(next.world_speed >= cur.world_speed);
            prop_assert!(next.trash_quota >= cur.trash_quota);
            prop_assert!(next.player_move_speed >= cur.player_move_speed);
            prop_assert!(next.min_ticks_between_obstacles <= cur.min_ticks_between_obstacles);
            prop_assert!(next.min_ticks_between_trash <= cur.min_ticks_between_trash);

            prop_assert!(cur.world_speed <= 12.0);
            prop_assert!(cur.obstacle_spawn_chance <= 12);
            prop_assert!(cur.trash_spawn_chance <= 12);
            prop_assert!(cur.trash_quota <= 15);
            prop_assert!(cur.player_move_speed <= 10.0);
            prop_assert!(cur.min_ticks_between_obstacles >= 26);
            prop_assert!(cur.min_ticks_between_trash >= 20);
        }
    }
}
