//! Sorting-phase puzzle
//!
//! The trash collected during the run reappears as draggable tokens that must
//! be dropped into the bin of the matching kind. The puzzle is event-driven
//! off pointer input; there is no periodic tick here.
//!
//! A wrong-bin release leaves the token where it was dropped, so releasing it
//! again in the same bin accrues the penalty again. That quirk is inherited
//! behavior and is kept deliberately.

use glam::Vec2;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::entity::TrashKind;
use super::run::CollectedCounts;
use crate::consts::*;

/// Current phase of the puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortPhase {
    AwaitingDrops,
    Completed,
}

/// Result of releasing a dragged token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Token landed in its matching bin and was removed
    Sorted { completed: bool },
    /// Token released inside a non-matching bin; penalty applied, token stays
    WrongBin,
    /// Released outside every bin; token stays, no penalty
    NoBin,
    /// Unknown token id or puzzle already completed; nothing happened
    Ignored,
}

/// A draggable trash token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortingToken {
    pub id: u32,
    pub kind: TrashKind,
    /// Top-left corner
    pub pos: Vec2,
    pub held: bool,
}

impl SortingToken {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(TOKEN_SIZE))
    }
}

/// A fixed drop region accepting exactly one trash kind
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bin {
    pub region: Aabb,
    pub accepts: TrashKind,
}

fn bins() -> [Bin; 3] {
    let size = Vec2::splat(BIN_SIZE);
    [
        Bin {
            region: Aabb::new(Vec2::new(BIN_PAPER_X, BIN_Y), size),
            accepts: TrashKind::Paper,
        },
        Bin {
            region: Aabb::new(Vec2::new(BIN_PLASTIC_X, BIN_Y), size),
            accepts: TrashKind::Plastic,
        },
        Bin {
            region: Aabb::new(Vec2::new(BIN_GLASS_X, BIN_Y), size),
            accepts: TrashKind::Glass,
        },
    ]
}

/// The drag-and-drop classification puzzle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortingPuzzle {
    phase: SortPhase,
    tokens: Vec<SortingToken>,
    bins: [Bin; 3],
    level_score: u32,
}

impl SortingPuzzle {
    /// Build the puzzle from the run's collected counts. Token order is a
    /// fair shuffle; layout is a fixed grid.
    pub fn new(counts: &CollectedCounts, level_score: u32, rng: &mut impl Rng) -> Self {
        let mut kinds = Vec::with_capacity(counts.total() as usize);
        for kind in TrashKind::ALL {
            for _ in 0..counts.count(kind) {
                kinds.push(kind);
            }
        }
        kinds.shuffle(rng);

        let tokens = kinds
            .into_iter()
            .enumerate()
            .map(|(i, kind)| {
                let col = i % TOKENS_PER_ROW;
                let row = i / TOKENS_PER_ROW;
                SortingToken {
                    id: i as u32 + 1,
                    kind,
                    pos: Vec2::new(
                        TOKEN_GRID_ORIGIN_X + col as f32 * TOKEN_COL_PITCH,
                        TOKEN_GRID_ORIGIN_Y + row as f32 * TOKEN_ROW_PITCH,
                    ),
                    held: false,
                }
            })
            .collect::<Vec<_>>();

        // An empty run (no trash collected) is already sorted
        let phase = if tokens.is_empty() {
            SortPhase::Completed
        } else {
            SortPhase::AwaitingDrops
        };

        Self {
            phase,
            tokens,
            bins: bins(),
            level_score,
        }
    }

    /// Pick up a token; no-op if completed or the id is unknown
    pub fn begin_drag(&mut self, token_id: u32) {
        if self.phase == SortPhase::Completed {
            return;
        }
        if let Some(token) = self.token_mut(token_id) {
            token.held = true;
        }
    }

    /// Move a held token so its center follows the pointer; purely visual
    pub fn drag_to(&mut self, token_id: u32, point: Vec2) {
        if self.phase == SortPhase::Completed {
            return;
        }
        if let Some(token) = self.token_mut(token_id) {
            if token.held {
                token.pos = point - Vec2::splat(TOKEN_SIZE) / 2.0;
            }
        }
    }

    /// Release a token and validate its drop target by center point
    pub fn end_drag(&mut self, token_id: u32) -> DropOutcome {
        if self.phase == SortPhase::Completed {
            return DropOutcome::Ignored;
        }
        let Some(index) = self.tokens.iter().position(|t| t.id == token_id) else {
            return DropOutcome::Ignored;
        };
        self.tokens[index].held = false;

        let center = self.tokens[index].bounds().center();
        let kind = self.tokens[index].kind;
        for bin in &self.bins {
            if !bin.region.contains(center) {
                continue;
            }
            if bin.accepts == kind {
                self.tokens.remove(index);
                log::debug!("sorted {} token ({} left)", kind.as_str(), self.tokens.len());
                if self.tokens.is_empty() {
                    self.phase = SortPhase::Completed;
                    log::info!("sorting completed: level score {}", self.level_score);
                    return DropOutcome::Sorted { completed: true };
                }
                return DropOutcome::Sorted { completed: false };
            }
            // Wrong bin: penalize and leave the token at the drop point
            self.level_score = self.level_score.saturating_sub(WRONG_BIN_PENALTY);
            log::debug!(
                "{} token dropped in {} bin: -{}",
                kind.as_str(),
                bin.accepts.as_str(),
                WRONG_BIN_PENALTY
            );
            return DropOutcome::WrongBin;
        }
        DropOutcome::NoBin
    }

    pub fn phase(&self) -> SortPhase {
        self.phase
    }

    pub fn tokens(&self) -> &[SortingToken] {
        &self.tokens
    }

    pub fn bins(&self) -> &[Bin; 3] {
        &self.bins
    }

    /// Level score after any wrong-bin penalties
    pub fn level_score(&self) -> u32 {
        self.level_score
    }

    fn token_mut(&mut self, id: u32) -> Option<&mut SortingToken> {
        self.tokens.iter_mut().find(|t| t.id == id)
    }
}
