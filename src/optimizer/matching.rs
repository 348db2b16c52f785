//! Exact maximum-cardinality assignment via augmenting paths.
//!
//! Alternative strategy to the greedy/hybrid heuristic: finds a true
//! maximum bipartite matching between candidates and slot seats, so no
//! other assignment places more candidates. It ignores the heuristic's
//! spreading bias — the only objective is cardinality.
//!
//! # Algorithm
//!
//! Kuhn's augmenting-path algorithm, extended to capacitated right-hand
//! vertices: a slot absorbs candidates until full, after which placing
//! another candidate requires rerouting one of its occupants along an
//! augmenting path. Candidates are seeded in input order and paths are
//! explored in each candidate's preference order, so results are
//! deterministic.
//!
//! # Complexity
//! O(n · e) where n = candidates and e = total availability entries.
//!
//! # Reference
//! Kuhn (1955), "The Hungarian method for the assignment problem"

use std::collections::HashMap;

use crate::models::{
    Assignment, Candidate, OptimizationResult, ScheduleWarning, SessionId, SlotKey, TimeSlot,
};
use crate::validation::{self, ValidationError};

use super::OptimizerConfig;

/// Exact maximum-matching schedule optimizer.
///
/// Shares the construction contract, result shape, and warning
/// semantics of `ScheduleOptimizer`; only the assignment strategy
/// differs. Slower in the constant factors and indifferent to slot
/// balance, so the heuristic remains the default path.
#[derive(Debug, Clone)]
pub struct MatchingOptimizer {
    config: OptimizerConfig,
    slots: Vec<TimeSlot>,
    slot_index: HashMap<SlotKey, usize>,
}

impl MatchingOptimizer {
    /// Creates an optimizer for one event's slot list and constraints.
    ///
    /// Same rejection rules as the heuristic optimizer: duplicate slot
    /// IDs/keys and zero capacity fail construction.
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

    /// Computes a maximum-cardinality assignment of candidates to slots.
    ///
    /// The assignment count is provably maximal for the given
    /// availability data; everything else about the result contract
    /// (leftovers, warnings, metrics) matches `optimize_schedule` on
    /// the heuristic optimizer.
    pub fn optimize_schedule(&self, candidates: &[Candidate]) -> OptimizationResult {
        let mut warnings = Vec::new();

        // Resolved adjacency: candidate index → slot indices, in the
        // candidate's preference order.
        let adjacency: Vec<Vec<usize>> = candidates
            .iter()
            .map(|c| {
                c.available_slots
                    .iter()
                    .filter_map(|key| match self.slot_index.get(key) {
                        Some(&idx) => Some(idx),
                        None => {
                            warnings.push(ScheduleWarning::stale_reference(&c.id, key));
                            None
                        }
                    })
                    .collect()
            })
            .collect();

        let mut occupants: Vec<Vec<usize>> = vec![Vec::new(); self.slots.len()];
        let mut matched_slot: Vec<Option<usize>> = vec![None; candidates.len()];

        for c in 0..candidates.len() {
            let mut visited = vec![false; self.slots.len()];
            self.augment(c, &adjacency, &mut visited, &mut occupants, &mut matched_slot);
        }

        // Materialize assignments in input order with contiguous
        // per-slot session numbering.
        let mut session_seq: HashMap<SlotKey, usize> = HashMap::new();
        let mut assignments = Vec::new();
        for (c, slot_idx) in matched_slot.iter().enumerate() {
            if let Some(slot_idx) = *slot_idx {
                let slot = &self.slots[slot_idx];
                let key = slot.key();
                let seq = session_seq.entry(key.clone()).or_insert(0);
                *seq += 1;
                assignments.push(Assignment::new(
                    &candidates[c],
                    slot,
                    SessionId::new(&key, *seq),
                ));
            }
        }

        OptimizationResult::aggregate(
            candidates,
            assignments,
            warnings,
            self.config.simultaneous_count,
        )
    }

    /// Tries to place candidate `c`, rerouting occupants if needed.
    ///
    /// Returns `true` if an augmenting path was found. `visited` marks
    /// slots already explored on the current path.
    fn augment(
        &self,
        c: usize,
        adjacency: &[Vec<usize>],
        visited: &mut [bool],
        occupants: &mut [Vec<usize>],
        matched_slot: &mut [Option<usize>],
    ) -> bool {
        for &s in &adjacency[c] {
            if visited[s] {
                continue;
            }
            visited[s] = true;

            if occupants[s].len() < self.config.simultaneous_count {
                occupants[s].push(c);
                matched_slot[c] = Some(s);
                return true;
            }

            for i in 0..occupants[s].len() {
                let other = occupants[s][i];
                if self.augment(other, adjacency, visited, occupants, matched_slot) {
                    occupants[s][i] = c;
                    matched_slot[c] = Some(s);
                    return true;
                }
            }
        }
        false
    }
}
