//! Player physics: horizontal movement, jump, gravity
//!
//! Input arrives as semantic intent flags set by the host; `tick` integrates
//! them. Horizontal position is clamped to the field, never wrapped. Vertical
//! motion is launch-velocity + per-tick gravity, clamped to the ground.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use crate::consts::*;

/// The player character, a single square box
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    /// Vertical velocity, px per tick (negative = rising)
    vertical_vel: f32,
    move_left: bool,
    move_right: bool,
    /// Horizontal speed, px per tick; set from the level difficulty
    move_speed: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, GROUND_Y),
            vertical_vel: 0.0,
            move_left: false,
            move_right: false,
            move_speed: 5.0,
        }
    }
}

impl Player {
    /// Restore canonical start state; called at every level (re)start
    pub fn reset(&mut self, move_speed: f32) {
        *self = Self {
            move_speed,
            ..Self::default()
        };
    }

    /// Set horizontal movement flags; position changes only on `tick`
    pub fn set_horizontal_intent(&mut self, left: bool, right: bool) {
        self.move_left = left;
        self.move_right = right;
    }

    /// Launch upward if grounded; no-op while airborne (no double jumps)
    pub fn jump(&mut self) {
        if self.grounded() {
            self.vertical_vel = JUMP_VELOCITY;
        }
    }

    pub fn grounded(&self) -> bool {
        self.pos.y >= GROUND_Y
    }

    /// Integrate one tick of movement
    pub fn tick(&mut self) {
        if self.move_left {
            self.pos.x -= self.move_speed;
        }
        if self.move_right {
            self.pos.x += self.move_speed;
        }
        self.pos.x = self.pos.x.clamp(0.0, FIELD_WIDTH - PLAYER_SIZE);

        self.vertical_vel += GRAVITY;
        self.pos.y += self.vertical_vel;
        if self.pos.y >= GROUND_Y {
            self.pos.y = GROUND_Y;
            self.vertical_vel = 0.0;
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(PLAYER_SIZE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_and_land() {
        let mut player = Player::default();
        assert!(player.grounded());

        player.jump();
        player.tick();
        assert!(!player.grounded());
        assert!(player.pos.y < GROUND_Y);

        // Gravity brings the player back down and clamps at the ground
        for _ in 0..100 {
            player.tick();
        }
        assert!(player.grounded());
        assert_eq!(player.pos.y, GROUND_Y);
        assert_eq!(player.vertical_vel, 0.0);
    }

    #[test]
    fn test_no_double_jump() {
        let mut player = Player::default();
        player.jump();
        player.tick();
        let rising_vel = player.vertical_vel;

        // Mid-air jump must not relaunch
        player.jump();
        assert_eq!(player.vertical_vel, rising_vel);
    }

    #[test]
    fn test_horizontal_clamped_to_field() {
        let mut player = Player::default();
        player.set_horizontal_intent(true, false);
        for _ in 0..1000 {
            player.tick();
        }
        assert_eq!(player.pos.x, 0.0);

        player.set_horizontal_intent(false, true);
        for _ in 0..1000 {
            player.tick();
        }
        assert_eq!(player.pos.x, FIELD_WIDTH - PLAYER_SIZE);
    }

    #[test]
    fn test_reset_restores_start_state() {
        let mut player = Player::default();
        player.set_horizontal_intent(false, true);
        player.jump();
        player.tick();
        player.tick();

        player.reset(7.0);
        assert_eq!(player.pos, Vec2::new(PLAYER_START_X, GROUND_Y));
        assert_eq!(player.vertical_vel, 0.0);

        // Flags cleared: ticking must not drift horizontally
        player.tick();
        assert_eq!(player.pos.x, PLAYER_START_X);
    }

    #[test]
    fn test_jump_apex_height() {
        let mut player = Player::default();
        player.jump();
        let mut min_y = player.pos.y;
        for _ in 0..60 {
            player.tick();
            min_y = min_y.min(player.pos.y);
        }
        // A -15 launch under gravity 1 rises 14 + 13 + ... + 1 = 105 px
        assert_eq!(min_y, GROUND_Y - 105.0);
        assert!(player.grounded());
    }
}
