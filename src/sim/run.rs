//! Runner-phase simulation
//!
//! Owns the player, the scrolling entity sets, and the per-level health and
//! score bookkeeping. The host drives `tick` at a fixed cadence; a tick in a
//! terminal phase is a no-op. Within a tick, obstacles are processed before
//! trash, and a terminal transition stops processing immediately - the
//! remaining entities are not updated that tick.
//!
//! Collision is plain per-tick rectangle overlap with no swept test; a small,
//! fast entity can in principle tunnel through the player at high world
//! speed. That is an accepted limitation of the design, kept as-is.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use super::entity::{Entity, TrashKind};
use super::player::Player;
use super::spawn::SpawnScheduler;
use crate::consts::*;

/// Current phase of the runner simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// Ticking normally
    Running,
    /// Quota reached; terminal until the next `start_level`
    LevelCleared,
    /// Health hit zero; terminal until the next `start_level`
    PlayerDefeated,
}

/// Semantic input events for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct RunInput {
    pub left: bool,
    pub right: bool,
    /// Edge-triggered jump request
    pub jump: bool,
}

/// Per-kind tally of collected trash
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectedCounts {
    pub paper: u32,
    pub plastic: u32,
    pub glass: u32,
}

impl CollectedCounts {
    pub fn add(&mut self, kind: TrashKind) {
        match kind {
            TrashKind::Paper => self.paper += 1,
            TrashKind::Plastic => self.plastic += 1,
            TrashKind::Glass => self.glass += 1,
        }
    }

    pub fn count(&self, kind: TrashKind) -> u32 {
        match kind {
            TrashKind::Paper => self.paper,
            TrashKind::Plastic => self.plastic,
            TrashKind::Glass => self.glass,
        }
    }

    pub fn total(&self) -> u32 {
        self.paper + self.plastic + self.glass
    }
}

/// The runner-phase state machine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSimulation {
    phase: RunPhase,
    difficulty: Difficulty,
    player: Player,
    obstacles: Vec<Entity>,
    trash: Vec<Entity>,
    scheduler: SpawnScheduler,
    health: u32,
    level_score: u32,
    collected: CollectedCounts,
    #[serde(skip, default = "default_rng")]
    rng: Pcg32,
    next_id: u32,
}

fn default_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

impl RunSimulation {
    pub fn new(seed: u64) -> Self {
        Self {
            phase: RunPhase::Running,
            difficulty: Difficulty::for_level(1),
            player: Player::default(),
            obstacles: Vec::new(),
            trash: Vec::new(),
            scheduler: SpawnScheduler::default(),
            health: MAX_HEALTH,
            level_score: 0,
            collected: CollectedCounts::default(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Reset all per-level state and enter `Running` with the given parameters
    pub fn start_level(&mut self, difficulty: Difficulty) {
        log::info!(
            "level {} start: quota={} speed={}",
            difficulty.level,
            difficulty.trash_quota,
            difficulty.world_speed
        );
        self.player.reset(difficulty.player_move_speed);
        self.obstacles.clear();
        self.trash.clear();
        self.scheduler.reset();
        self.health = MAX_HEALTH;
        self.level_score = 0;
        self.collected = CollectedCounts::default();
        self.difficulty = difficulty;
        self.phase = RunPhase::Running;
    }

    /// Advance one simulation tick; no-op outside `Running`
    pub fn tick(&mut self, input: &RunInput) {
        if self.phase != RunPhase::Running {
            return;
        }

        self.player.set_horizontal_intent(input.left, input.right);
        if input.jump {
            self.player.jump();
        }

        self.scheduler.tick(
            &mut self.rng,
            &self.difficulty,
            &mut self.next_id,
            &mut self.obstacles,
            &mut self.trash,
            self.collected.total(),
        );

        let player_box = self.player.bounds();

        // Obstacles first. Contact drains 1 health per tick per obstacle;
        // obstacles are not consumed by contact, only by scrolling off.
        let mut i = 0;
        while i < self.obstacles.len() {
            self.obstacles[i].advance();
            if self.obstacles[i].off_screen() {
                self.obstacles.remove(i);
                continue;
            }
            if self.obstacles[i].bounds().intersects(&player_box) {
                self.health -= 1;
                if self.health == 0 {
                    self.phase = RunPhase::PlayerDefeated;
                    log::info!("level {}: player defeated", self.difficulty.level);
                    return;
                }
            }
            i += 1;
        }

        // Trash second. Collection removes the token, scores it, and may end
        // the level with a health bonus.
        let mut i = 0;
        while i < self.trash.len() {
            self.trash[i].advance();
            if self.trash[i].off_screen() {
                self.trash.remove(i);
                continue;
            }
            if self.trash[i].bounds().intersects(&player_box) {
                let token = self.trash.remove(i);
                if let super::entity::EntityKind::Trash(kind) = token.kind {
                    self.collected.add(kind);
                    log::debug!(
                        "collected {} ({}/{})",
                        kind.as_str(),
                        self.collected.total(),
                        self.difficulty.trash_quota
                    );
                }
                self.level_score += TRASH_SCORE;
                if self.collected.total() >= self.difficulty.trash_quota {
                    self.level_score += self.health;
                    self.phase = RunPhase::LevelCleared;
                    log::info!(
                        "level {} cleared: score={} health={}",
                        self.difficulty.level,
                        self.level_score,
                        self.health
                    );
                    return;
                }
                continue;
            }
            i += 1;
        }

        self.player.tick();
    }

    // Read-only surface for the renderer and the session controller.

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn difficulty(&self) -> &Difficulty {
        &self.difficulty
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn obstacles(&self) -> &[Entity] {
        &self.obstacles
    }

    pub fn trash(&self) -> &[Entity] {
        &self.trash
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn level_score(&self) -> u32 {
        self.level_score
    }

    pub fn collected(&self) -> &CollectedCounts {
        &self.collected
    }
}

#[cfg(test)]
impl RunSimulation {
    /// Place a trash token overlapping the player so the next tick collects it
    pub(crate) fn plant_trash(&mut self, kind: TrashKind) {
        let mut e = Entity::spawn(self.next_id, super::entity::EntityKind::Trash(kind), 0.0);
        self.next_id += 1;
        e.pos = self.player.pos + glam::Vec2::new(0.0, 5.0);
        self.trash.push(e);
    }

    /// Place an obstacle overlapping the player so the next tick drains health
    pub(crate) fn plant_obstacle(&mut self, kind: super::entity::ObstacleKind) {
        let mut e = Entity::spawn(self.next_id, super::entity::EntityKind::Obstacle(kind), 0.0);
        self.next_id += 1;
        e.pos = self.player.pos + glam::Vec2::new(0.0, 5.0);
        self.obstacles.push(e);
    }

    pub(crate) fn set_health(&mut self, health: u32) {
        self.health = health;
    }
}
