//! Optimization run constraints.

use serde::{Deserialize, Serialize};

/// Default candidate-pool size at or below which hybrid mode runs.
///
/// Above this size the optimizer drops the critical-first double pass
/// and runs a single scarcity-sorted greedy pass. The cutoff is a
/// solution-quality heuristic, not a performance one — both modes have
/// the same asymptotic cost.
pub const DEFAULT_HYBRID_THRESHOLD: usize = 50;

/// Default option count at or below which a candidate counts as critical.
pub const DEFAULT_CRITICAL_SLOT_LIMIT: usize = 3;

/// Fixed scheduling constraints for one optimization run.
///
/// Set once at optimizer construction and reused across `optimize_schedule`
/// calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// Interview length in minutes. Metadata only: slot boundaries
    /// arrive pre-sized from the slot-generation layer (interview length
    /// and buffer already applied), so this value never enters capacity
    /// arithmetic here.
    pub interview_minutes: u32,
    /// Maximum simultaneous interviews per physical slot.
    pub simultaneous_count: usize,
    /// Candidate-pool size at or below which hybrid mode runs.
    pub hybrid_threshold: usize,
    /// Option count at or below which a candidate is treated as critical
    /// in hybrid mode.
    pub critical_slot_limit: usize,
}

impl OptimizerConfig {
    /// Creates a config with the default mode thresholds.
    pub fn new(interview_minutes: u32, simultaneous_count: usize) -> Self {
        Self {
            interview_minutes,
            simultaneous_count,
            hybrid_threshold: DEFAULT_HYBRID_THRESHOLD,
            critical_slot_limit: DEFAULT_CRITICAL_SLOT_LIMIT,
        }
    }

    /// Sets the hybrid/greedy mode cutoff.
    pub fn with_hybrid_threshold(mut self, threshold: usize) -> Self {
        self.hybrid_threshold = threshold;
        self
    }

    /// Sets the critical-candidate option limit.
    pub fn with_critical_slot_limit(mut self, limit: usize) -> Self {
        self.critical_slot_limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OptimizerConfig::new(45, 2);
        assert_eq!(config.interview_minutes, 45);
        assert_eq!(config.simultaneous_count, 2);
        assert_eq!(config.hybrid_threshold, DEFAULT_HYBRID_THRESHOLD);
        assert_eq!(config.critical_slot_limit, DEFAULT_CRITICAL_SLOT_LIMIT);
    }

    #[test]
    fn test_builder_overrides() {
        let config = OptimizerConfig::new(30, 1)
            .with_hybrid_threshold(10)
            .with_critical_slot_limit(2);
        assert_eq!(config.hybrid_threshold, 10);
        assert_eq!(config.critical_slot_limit, 2);
    }
}
