//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Fixed per-tick units only (the host timer supplies the cadence)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod aabb;
pub mod difficulty;
pub mod entity;
pub mod player;
pub mod run;
pub mod sorting;
pub mod spawn;

pub use aabb::Aabb;
pub use difficulty::Difficulty;
pub use entity::{Entity, EntityKind, ObstacleKind, TrashKind};
pub use player::Player;
pub use run::{CollectedCounts, RunInput, RunPhase, RunSimulation};
pub use sorting::{Bin, DropOutcome, SortPhase, SortingPuzzle, SortingToken};
pub use spawn::SpawnScheduler;
