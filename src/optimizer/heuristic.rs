//! Scarcity-aware greedy schedule optimizer.
//!
//! # Algorithm
//!
//! 1. Pick an assignment order for the candidate pool:
//!    - **Hybrid mode** (pool ≤ `hybrid_threshold`): candidates with at
//!      most `critical_slot_limit` options go first, sorted ascending by
//!      option count; the rest follow in their original input order.
//!    - **Greedy mode** (larger pools): the whole pool in one pass,
//!      sorted ascending by option count.
//! 2. For each candidate, score every available slot with remaining
//!    capacity and take the strictly best one.
//!
//! The critical-first ordering is the minimum-remaining-values idea from
//! constraint satisfaction: candidates with fewer options are least
//! likely to be satisfiable later, so they claim slots first. Leaving
//! regular candidates unsorted in hybrid mode is an intentional
//! asymmetry of the original algorithm, kept for behavioral parity.
//!
//! # Complexity
//! O(n² · s) worst case, where n = candidates and s = slots per
//! candidate (each scoring call walks the full pool). Callers running
//! many large events should parallelize across events, one task per
//! event — the inner loop has sequential occupancy dependencies and is
//! not parallelizable.
//!
//! # Reference
//! Russell & Norvig (2020), "Artificial Intelligence", Ch. 6.3 (MRV heuristic)

use std::collections::HashMap;

use crate::models::{
    Assignment, Candidate, OptimizationResult, ScheduleWarning, SessionId, SlotKey, TimeSlot,
};
use crate::validation::{self, ValidationError};

use super::OptimizerConfig;

/// Empty-slot bonus: biases toward opening fresh slots.
const FRESH_SLOT_BONUS: i64 = 10;
/// Per-occupant penalty on partially filled slots.
const PILE_ON_PENALTY: i64 = 2;

/// Scarcity-aware greedy/hybrid schedule optimizer.
///
/// Pure and synchronous: one `optimize_schedule` call owns all of its
/// working state, so independent optimizations (one per event) can run
/// concurrently on the same optimizer without coordination.
///
/// Not an exact solver — see `MatchingOptimizer` for the
/// maximum-cardinality alternative.
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use interview_scheduler::models::{Candidate, TimeSlot};
/// use interview_scheduler::optimizer::{OptimizerConfig, ScheduleOptimizer};
///
/// let date = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
/// let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
/// let ten = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
/// let slots = vec![TimeSlot::new("T1", date, nine, ten)];
///
/// let optimizer = ScheduleOptimizer::new(OptimizerConfig::new(45, 2), slots).unwrap();
/// let candidates = vec![Candidate::new("C1").with_slot(optimizer.slots()[0].key())];
///
/// let result = optimizer.optimize_schedule(&candidates);
/// assert_eq!(result.assignment_count(), 1);
/// assert_eq!(result.utilization_rate, 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleOptimizer {
    config: OptimizerConfig,
    slots: Vec<TimeSlot>,
    slot_index: HashMap<SlotKey, usize>,
}

/// Working state of one optimization run. Never outlives the call.
#[derive(Debug, Default)]
struct RunState {
    assignments: Vec<Assignment>,
    occupancy: HashMap<SlotKey, usize>,
    session_seq: HashMap<SlotKey, usize>,
    warnings: Vec<ScheduleWarning>,
}

impl ScheduleOptimizer {
    /// Creates an optimizer for one event's slot list and constraints.
    ///
    /// Rejects duplicate slot IDs/keys and zero capacity — duplicate
    /// keys would silently merge the capacity of two physical slots.
    pub fn new(config: OptimizerConfig, slots: Vec<TimeSlot>) -> Result<Self, Vec<ValidationError>> {
        validation::validate_slots(&slots, config.simultaneous_count)?;
        let slot_index = slots
            .iter()
            .enumerate()
            .map(|(i, s)| (s.key(), i))
            .collect();
        Ok(Self {
            config,
            slots,
            slot_index,
        })
    }

    /// Run constraints.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Configured slot list.
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Assigns candidates to slots, maximizing placements while
    /// spreading load across slots.
    ///
    /// Never fails: unplaceable candidates land in
    /// `unscheduled_candidates`, stale slot references become warnings,
    /// and an empty pool yields an all-zero result.
    pub fn optimize_schedule(&self, candidates: &[Candidate]) -> OptimizationResult {
        let order = if candidates.len() <= self.config.hybrid_threshold {
            self.hybrid_order(candidates)
        } else {
            self.greedy_order(candidates)
        };

        let mut state = RunState::default();
        for &idx in &order {
            self.assign_candidate(&candidates[idx], candidates, &mut state);
        }

        OptimizationResult::aggregate(
            candidates,
            state.assignments,
            state.warnings,
            self.config.simultaneous_count,
        )
    }

    /// Hybrid order: critical candidates ascending by option count,
    /// then regular candidates in input order.
    ///
    /// The sort is stable, so equally-constrained critical candidates
    /// keep their input order.
    fn hybrid_order(&self, candidates: &[Candidate]) -> Vec<usize> {
        let limit = self.config.critical_slot_limit;
        let mut order: Vec<usize> = (0..candidates.len())
            .filter(|&i| candidates[i].option_count() <= limit)
            .collect();
        order.sort_by_key(|&i| candidates[i].option_count());
        // Regular candidates are deliberately left unsorted
        order.extend((0..candidates.len()).filter(|&i| candidates[i].option_count() > limit));
        order
    }

    /// Greedy order: the whole pool ascending by option count, stable.
    fn greedy_order(&self, candidates: &[Candidate]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..candidates.len()).collect();
        order.sort_by_key(|&i| candidates[i].option_count());
        order
    }

    /// Places one candidate on its best-scoring eligible slot, if any.
    fn assign_candidate(&self, candidate: &Candidate, pool: &[Candidate], state: &mut RunState) {
        let mut best: Option<(usize, i64)> = None;

        for key in &candidate.available_slots {
            let Some(&slot_idx) = self.slot_index.get(key) else {
                state
                    .warnings
                    .push(ScheduleWarning::stale_reference(&candidate.id, key));
                continue;
            };
            let occupancy = state.occupancy.get(key).copied().unwrap_or(0);
            if occupancy >= self.config.simultaneous_count {
                continue;
            }
            let score = self.slot_score(key, pool, occupancy);
            // Strictly-greater comparison: a tie keeps the slot the
            // candidate listed earlier.
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((slot_idx, score));
            }
        }

        if let Some((slot_idx, _)) = best {
            let slot = &self.slots[slot_idx];
            let key = slot.key();
            let seq = state.session_seq.entry(key.clone()).or_insert(0);
            *seq += 1;
            let session_id = SessionId::new(&key, *seq);
            *state.occupancy.entry(key).or_insert(0) += 1;
            state.assignments.push(Assignment::new(candidate, slot, session_id));
        }
    }

    /// Scores a slot for assignment.
    ///
    /// Popularity is counted over the entire original pool, not just
    /// candidates still unassigned — a static measure the original
    /// algorithm accepts as an approximation. The fresh-slot bonus and
    /// pile-on penalty together favor spreading candidates across many
    /// slots over densely packing a few, trading session count for
    /// balance.
    fn slot_score(&self, key: &SlotKey, pool: &[Candidate], occupancy: usize) -> i64 {
        let capacity = self.config.simultaneous_count;
        if occupancy >= capacity {
            return 0;
        }
        let popularity = pool.iter().filter(|c| c.can_attend(key)).count() as i64;
        let remaining = (capacity - occupancy) as i64;
        let mut score = popularity * remaining;
        if occupancy == 0 {
            score += FRESH_SLOT_BONUS;
        } else {
            score -= PILE_ON_PENALTY * occupancy as i64;
        }
        score
    }
}
