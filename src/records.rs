//! Best-of-session records
//!
//! Process-lifetime maxima, owned explicitly by the session controller and
//! passed around as a value rather than hidden in a global. Updates are
//! strict-greater comparisons, so records are never downgraded and a tie
//! never counts as an improvement.

use serde::{Deserialize, Serialize};

/// Highest level reached and highest session score achieved so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub best_level: u32,
    pub best_score: u32,
}

impl SessionRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed level; returns true if the record improved
    pub fn record_level(&mut self, level: u32) -> bool {
        if level > self.best_level {
            log::info!("new best level: {} (was {})", level, self.best_level);
            self.best_level = level;
            true
        } else {
            false
        }
    }

    /// Record a final session score; returns true if the record improved
    pub fn record_score(&mut self, score: u32) -> bool {
        if score > self.best_score {
            log::info!("new best score: {} (was {})", score, self.best_score);
            self.best_score = score;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_update_only_upward() {
        let mut records = SessionRecord::new();
        assert!(records.record_level(3));
        assert!(!records.record_level(2), "lower level must not downgrade");
        assert!(!records.record_level(3), "ties are not improvements");
        assert_eq!(records.best_level, 3);

        assert!(records.record_score(120));
        assert!(!records.record_score(120));
        assert!(!records.record_score(50));
        assert_eq!(records.best_score, 120);
        assert!(records.record_score(121));
    }
}
