//! Score ledger
//!
//! Score comes from two places:
//! - Direct awards (near misses) go straight into the total.
//! - The pending bonus ticks up by one per frame after a turret kill, saturating
//!   at the threshold. The next kill commits the whole pending amount and starts
//!   counting again from zero. Each full threshold reached is also worth one
//!   point the frame it is first reached.

use serde::{Deserialize, Serialize};

/// Total score plus the pending bonus accumulator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLedger {
    total: u64,
    /// Always within `[0, threshold]`
    pending: u32,
    accumulating: bool,
    /// Threshold units of `pending` already credited to `total`
    committed_units: u32,
    threshold: u32,
}

impl ScoreLedger {
    /// Fresh ledger: no score, nothing pending, not accumulating until the first kill
    pub fn new(threshold: u32) -> Self {
        Self {
            total: 0,
            pending: 0,
            accumulating: false,
            committed_units: 0,
            threshold: threshold.max(1),
        }
    }

    /// Ledger in an arbitrary state. `pending` is clamped to the threshold and
    /// any full units in it count as already committed.
    pub fn from_parts(total: u64, pending: u32, accumulating: bool, threshold: u32) -> Self {
        let threshold = threshold.max(1);
        let pending = pending.min(threshold);
        Self {
            total,
            pending,
            accumulating,
            committed_units: pending / threshold,
            threshold,
        }
    }

    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    #[inline]
    pub fn pending(&self) -> u32 {
        self.pending
    }

    #[inline]
    pub fn is_accumulating(&self) -> bool {
        self.accumulating
    }

    /// Add points straight to the total, bypassing the accumulator
    #[inline]
    pub fn award(&mut self, points: u64) {
        self.total += points;
    }

    /// A turret was destroyed: bank the pending bonus and restart accumulation.
    /// Returns the amount banked.
    pub fn commit_on_kill(&mut self) -> u64 {
        let banked = u64::from(self.pending);
        self.total += banked;
        self.pending = 0;
        self.committed_units = 0;
        self.accumulating = true;
        banked
    }

    /// Per-frame transition. Returns the points committed this frame (0 or 1).
    pub fn advance(&mut self) -> u64 {
        if self.accumulating {
            self.pending += 1;
            if self.pending >= self.threshold {
                self.pending = self.threshold;
                self.accumulating = false;
            }
        }

        let units = self.pending / self.threshold;
        let fresh = units.saturating_sub(self.committed_units);
        self.committed_units = units;
        self.total += u64::from(fresh);
        u64::from(fresh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_until_first_kill() {
        let mut ledger = ScoreLedger::new(500);
        for _ in 0..1000 {
            assert_eq!(ledger.advance(), 0);
        }
        assert_eq!(ledger.total(), 0);
        assert_eq!(ledger.pending(), 0);
    }

    #[test]
    fn test_kill_banks_pending_and_restarts() {
        let mut ledger = ScoreLedger::from_parts(10, 120, false, 500);
        assert_eq!(ledger.commit_on_kill(), 120);
        assert_eq!(ledger.total(), 130);
        assert_eq!(ledger.pending(), 0);
        assert!(ledger.is_accumulating());

        ledger.advance();
        assert_eq!(ledger.pending(), 1);
    }

    #[test]
    fn test_saturation_commits_once() {
        let mut ledger = ScoreLedger::from_parts(0, 499, true, 500);

        assert_eq!(ledger.advance(), 1);
        assert_eq!(ledger.pending(), 500);
        assert!(!ledger.is_accumulating());
        assert_eq!(ledger.total(), 1);

        for _ in 0..50 {
            assert_eq!(ledger.advance(), 0);
        }
        assert_eq!(ledger.total(), 1);
        assert_eq!(ledger.pending(), 500);

        // The kill still banks the full saturated amount
        assert_eq!(ledger.commit_on_kill(), 500);
        assert_eq!(ledger.total(), 501);
    }

    #[test]
    fn test_full_cycle_from_kill() {
        let mut ledger = ScoreLedger::new(500);
        ledger.commit_on_kill();
        let mut committed = 0;
        for frame in 1..=600 {
            committed += ledger.advance();
            assert!(ledger.pending() <= 500);
            if frame == 500 {
                assert_eq!(committed, 1);
            }
        }
        assert_eq!(committed, 1);
        assert_eq!(ledger.total(), 1);
    }

    #[test]
    fn test_direct_award_skips_accumulator() {
        let mut ledger = ScoreLedger::new(500);
        ledger.award(5);
        ledger.award(5);
        assert_eq!(ledger.total(), 10);
        assert_eq!(ledger.pending(), 0);
    }

    #[test]
    fn test_from_parts_clamps_pending() {
        let ledger = ScoreLedger::from_parts(0, 9000, true, 500);
        assert_eq!(ledger.pending(), 500);
    }
}
