//! Top-level session state machine
//!
//! Sequences Menu -> Run -> Sorting -> (next level | Menu), aggregates score
//! and time across levels, and owns the best-of-session records. Time is
//! supplied by the host clock as elapsed milliseconds; the core only
//! accumulates the values handed to it.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::records::SessionRecord;
use crate::sim::{
    Difficulty, DropOutcome, RunInput, RunPhase, RunSimulation, SortPhase, SortingPuzzle,
};

/// Which screen of the game is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    Menu,
    Run,
    Sorting,
}

/// End-of-level report shown after the sorting puzzle completes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSummary {
    pub level: u32,
    /// Level score after wrong-bin penalties
    pub level_score: u32,
    pub level_time_ms: u64,
    pub total_score: u32,
    pub total_time_ms: u64,
    pub is_last_level: bool,
}

/// The session controller owning both game phases
#[derive(Debug)]
pub struct Session {
    phase: SessionPhase,
    /// Current level, 1-based; 0 while in the menu
    level: u32,
    total_score: u32,
    total_time_ms: u64,
    /// Elapsed time of the most recently cleared level
    level_time_ms: u64,
    records: SessionRecord,
    run: RunSimulation,
    sorting: Option<SortingPuzzle>,
    rng: Pcg32,
}

impl Session {
    pub fn new(seed: u64) -> Self {
        Self::with_records(seed, SessionRecord::new())
    }

    /// Resume with records carried over from an earlier session
    pub fn with_records(seed: u64, records: SessionRecord) -> Self {
        Self {
            phase: SessionPhase::Menu,
            level: 0,
            total_score: 0,
            total_time_ms: 0,
            level_time_ms: 0,
            records,
            run: RunSimulation::new(seed),
            sorting: None,
            rng: Pcg32::seed_from_u64(seed.wrapping_add(1)),
        }
    }

    /// Menu -> Run: reset session accumulators and start level 1
    pub fn start(&mut self) {
        if self.phase != SessionPhase::Menu {
            return;
        }
        self.total_score = 0;
        self.total_time_ms = 0;
        self.begin_level(1);
    }

    fn begin_level(&mut self, level: u32) {
        self.level = level;
        self.sorting = None;
        self.run.start_level(Difficulty::for_level(level));
        self.phase = SessionPhase::Run;
    }

    /// Drive one runner tick. `level_elapsed_ms` is the host clock's elapsed
    /// time for the current level; it is folded into the session total only
    /// when the level ends.
    pub fn tick(&mut self, input: &RunInput, level_elapsed_ms: u64) {
        if self.phase != SessionPhase::Run {
            return;
        }
        self.run.tick(input);

        match self.run.phase() {
            RunPhase::Running => {}
            RunPhase::LevelCleared => {
                self.level_time_ms = level_elapsed_ms;
                self.total_time_ms += level_elapsed_ms;
                self.total_score += self.run.level_score();
                self.sorting = Some(SortingPuzzle::new(
                    self.run.collected(),
                    self.run.level_score(),
                    &mut self.rng,
                ));
                self.phase = SessionPhase::Sorting;
            }
            RunPhase::PlayerDefeated => {
                // Terminal: best score is the one record updated here
                let session_score = self.total_score.saturating_add(self.run.level_score());
                self.records.record_score(session_score);
                self.level = 0;
                self.phase = SessionPhase::Menu;
                log::info!("session over: score={}", session_score);
            }
        }
    }

    /// Pointer-down on a token (sorting phase only)
    pub fn begin_drag(&mut self, token_id: u32) {
        if let Some(puzzle) = self.sorting.as_mut() {
            puzzle.begin_drag(token_id);
        }
    }

    /// Pointer-move while holding a token
    pub fn drag_to(&mut self, token_id: u32, point: glam::Vec2) {
        if let Some(puzzle) = self.sorting.as_mut() {
            puzzle.drag_to(token_id, point);
        }
    }

    /// Pointer-up: validate the drop. A wrong bin costs the penalty on the
    /// session total as well as on the puzzle's level score.
    pub fn end_drag(&mut self, token_id: u32) -> DropOutcome {
        let Some(puzzle) = self.sorting.as_mut() else {
            return DropOutcome::Ignored;
        };
        let outcome = puzzle.end_drag(token_id);
        if outcome == DropOutcome::WrongBin {
            self.total_score = self.total_score.saturating_sub(WRONG_BIN_PENALTY);
        }
        outcome
    }

    /// The end-of-level report, available once the sorting puzzle completes
    pub fn summary(&self) -> Option<LevelSummary> {
        let puzzle = self.sorting.as_ref()?;
        if puzzle.phase() != SortPhase::Completed {
            return None;
        }
        Some(LevelSummary {
            level: self.level,
            level_score: puzzle.level_score(),
            level_time_ms: self.level_time_ms,
            total_score: self.total_score,
            total_time_ms: self.total_time_ms,
            is_last_level: self.level >= FINAL_LEVEL,
        })
    }

    /// Sorting -> Run: advance to the next level, keeping the accumulators.
    /// After the final level this routes to the menu instead.
    pub fn continue_run(&mut self) {
        let completed = self
            .sorting
            .as_ref()
            .is_some_and(|p| p.phase() == SortPhase::Completed);
        if self.phase != SessionPhase::Sorting || !completed {
            return;
        }
        if self.level >= FINAL_LEVEL {
            self.stop();
        } else {
            self.begin_level(self.level + 1);
        }
    }

    /// Sorting -> Menu: end the session. Best level is the one record
    /// updated here.
    pub fn stop(&mut self) {
        if self.phase != SessionPhase::Sorting {
            return;
        }
        self.records.record_level(self.level);
        log::info!(
            "session stopped at level {}: total score={} time={}ms",
            self.level,
            self.total_score,
            self.total_time_ms
        );
        self.level = 0;
        self.total_score = 0;
        self.total_time_ms = 0;
        self.sorting = None;
        self.phase = SessionPhase::Menu;
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn total_time_ms(&self) -> u64 {
        self.total_time_ms
    }

    /// Best-of-session records; copy out to carry across sessions
    pub fn records(&self) -> SessionRecord {
        self.records
    }

    pub fn run(&self) -> &RunSimulation {
        &self.run
    }

    pub fn sorting(&self) -> Option<&SortingPuzzle> {
        self.sorting.as_ref()
    }
}
