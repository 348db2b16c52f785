//! Optimization result model.
//!
//! An optimization run produces assignments, the candidates left over,
//! data-quality warnings, and quality metrics. The result is a plain
//! value object: the persistence layer stores the assignments, the
//! notification layer groups them by session or date for emails — both
//! outside this crate.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

use chrono::{NaiveDate, NaiveTime};

use super::{Candidate, SlotKey, TimeSlot};

/// Weight of the candidate placement rate in the composite score.
pub const UTILIZATION_WEIGHT: f64 = 0.7;
/// Weight of the used-slot fill rate in the composite score.
pub const SLOT_FILL_WEIGHT: f64 = 0.3;

/// Identifier for one occupant seat of a physical slot.
///
/// Format `S<YYYYMMDD>_<HHMM>_<n>` where `n` is the 1-based occupant
/// index within that slot. Allocated by a per-slot counter local to one
/// optimization run, so a slot receiving k assignments uses suffixes
/// `1..=k` with no gaps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Builds the session id for the `seq`-th occupant (1-based) of a slot.
    pub fn new(key: &SlotKey, seq: usize) -> Self {
        Self(format!("S{}_{}", key.as_str(), seq))
    }

    /// Text form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A candidate placed on a slot.
///
/// Slot identity and times are denormalized so downstream grouping and
/// email composition work without a slot-list lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Assigned candidate ID.
    pub candidate_id: String,
    /// Assigned slot ID.
    pub slot_id: String,
    /// Slot identity key (date + start time).
    pub slot_key: SlotKey,
    /// Interview date.
    pub date: NaiveDate,
    /// Window start.
    pub start_time: NaiveTime,
    /// Window end.
    pub end_time: NaiveTime,
    /// Occupant seat within the slot.
    pub session_id: SessionId,
}

impl Assignment {
    /// Creates an assignment of `candidate` to `slot` under `session_id`.
    pub fn new(candidate: &Candidate, slot: &TimeSlot, session_id: SessionId) -> Self {
        Self {
            candidate_id: candidate.id.clone(),
            slot_id: slot.id.clone(),
            slot_key: slot.key(),
            date: slot.date,
            start_time: slot.start_time,
            end_time: slot.end_time,
            session_id,
        }
    }
}

/// A data-quality finding surfaced by an optimization run.
///
/// Warnings never fail the run; they make silently-skipped conditions
/// observable so the caller can repair its source data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleWarning {
    /// Warning category.
    pub kind: WarningKind,
    /// Candidate whose data triggered the warning.
    pub candidate_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Categories of schedule warnings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// An availability entry matched no configured slot and was skipped.
    StaleSlotReference,
}

impl ScheduleWarning {
    /// Creates a stale slot reference warning.
    pub fn stale_reference(candidate_id: impl Into<String>, key: &SlotKey) -> Self {
        let candidate_id = candidate_id.into();
        Self {
            message: format!(
                "Candidate '{candidate_id}' references slot '{key}' which is not in the slot list"
            ),
            kind: WarningKind::StaleSlotReference,
            candidate_id,
        }
    }
}

/// The outcome of one optimization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Candidate placements, in assignment order.
    pub assignments: Vec<Assignment>,
    /// Candidates that could not be placed, in input order.
    pub unscheduled_candidates: Vec<Candidate>,
    /// Data-quality findings (stale slot references).
    pub warnings: Vec<ScheduleWarning>,
    /// Fraction of *candidates* placed (not of slot capacity filled).
    /// 0.0 for an empty candidate pool.
    pub utilization_rate: f64,
    /// Number of distinct session ids used.
    pub total_sessions: usize,
    /// Composite quality score: `0.7 * utilization_rate + 0.3 * slot fill`,
    /// where slot fill averages occupancy/capacity over slots that
    /// received at least one assignment.
    pub score: f64,
}

impl OptimizationResult {
    /// Aggregates raw run output into a result.
    ///
    /// `candidates` is the full input pool; metrics are computed against
    /// it. The empty pool is an explicit degenerate case (all-zero
    /// metrics), never a division by zero.
    pub fn aggregate(
        candidates: &[Candidate],
        assignments: Vec<Assignment>,
        warnings: Vec<ScheduleWarning>,
        simultaneous_count: usize,
    ) -> Self {
        let assigned_ids: HashSet<&str> = assignments
            .iter()
            .map(|a| a.candidate_id.as_str())
            .collect();
        let unscheduled_candidates: Vec<Candidate> = candidates
            .iter()
            .filter(|c| !assigned_ids.contains(c.id.as_str()))
            .cloned()
            .collect();

        let utilization_rate = if candidates.is_empty() {
            0.0
        } else {
            assignments.len() as f64 / candidates.len() as f64
        };

        let total_sessions = assignments
            .iter()
            .map(|a| &a.session_id)
            .collect::<HashSet<_>>()
            .len();

        let fill = slot_fill_rate(&assignments, simultaneous_count);
        let score = UTILIZATION_WEIGHT * utilization_rate + SLOT_FILL_WEIGHT * fill;

        Self {
            assignments,
            unscheduled_candidates,
            warnings,
            utilization_rate,
            total_sessions,
            score,
        }
    }

    /// Number of assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Whether every input candidate was placed.
    pub fn is_fully_scheduled(&self) -> bool {
        self.unscheduled_candidates.is_empty()
    }

    /// Finds the assignment for a given candidate.
    pub fn assignment_for_candidate(&self, candidate_id: &str) -> Option<&Assignment> {
        self.assignments
            .iter()
            .find(|a| a.candidate_id == candidate_id)
    }

    /// Groups assignments by session id, in session-id order.
    pub fn by_session(&self) -> BTreeMap<&SessionId, Vec<&Assignment>> {
        let mut groups: BTreeMap<&SessionId, Vec<&Assignment>> = BTreeMap::new();
        for a in &self.assignments {
            groups.entry(&a.session_id).or_default().push(a);
        }
        groups
    }

    /// Groups assignments by interview date, in date order.
    pub fn by_date(&self) -> BTreeMap<NaiveDate, Vec<&Assignment>> {
        let mut groups: BTreeMap<NaiveDate, Vec<&Assignment>> = BTreeMap::new();
        for a in &self.assignments {
            groups.entry(a.date).or_default().push(a);
        }
        groups
    }
}

/// Average fill of the slots that were actually used.
///
/// Slots left completely empty do not count against the average.
fn slot_fill_rate(assignments: &[Assignment], simultaneous_count: usize) -> f64 {
    if assignments.is_empty() || simultaneous_count == 0 {
        return 0.0;
    }
    let mut per_slot: HashMap<&SlotKey, usize> = HashMap::new();
    for a in assignments {
        *per_slot.entry(&a.slot_key).or_insert(0) += 1;
    }
    let sum: f64 = per_slot
        .values()
        .map(|&n| n as f64 / simultaneous_count as f64)
        .sum();
    sum / per_slot.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn slot(id: &str, day: u32, hour: u32) -> TimeSlot {
        TimeSlot::new(
            id,
            NaiveDate::from_ymd_opt(2024, 12, day).unwrap(),
            NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(hour + 1, 0, 0).unwrap(),
        )
    }

    fn assignment(candidate: &str, slot: &TimeSlot, seq: usize) -> Assignment {
        Assignment::new(
            &Candidate::new(candidate).with_slot(slot.key()),
            slot,
            SessionId::new(&slot.key(), seq),
        )
    }

    #[test]
    fn test_session_id_format() {
        let key = slot("T1", 1, 9).key();
        assert_eq!(SessionId::new(&key, 1).as_str(), "S20241201_0900_1");
        assert_eq!(SessionId::new(&key, 2).as_str(), "S20241201_0900_2");
    }

    #[test]
    fn test_aggregate_empty_pool() {
        let r = OptimizationResult::aggregate(&[], Vec::new(), Vec::new(), 2);
        assert!(r.assignments.is_empty());
        assert!(r.unscheduled_candidates.is_empty());
        assert_eq!(r.utilization_rate, 0.0);
        assert_eq!(r.total_sessions, 0);
        assert_eq!(r.score, 0.0);
    }

    #[test]
    fn test_aggregate_metrics() {
        let t1 = slot("T1", 1, 9);
        let candidates = vec![
            Candidate::new("A").with_slot(t1.key()),
            Candidate::new("B").with_slot(t1.key()),
            Candidate::new("C"),
        ];
        let assignments = vec![assignment("A", &t1, 1), assignment("B", &t1, 2)];
        let r = OptimizationResult::aggregate(&candidates, assignments, Vec::new(), 2);

        assert_eq!(r.assignment_count(), 2);
        assert_eq!(r.unscheduled_candidates.len(), 1);
        assert_eq!(r.unscheduled_candidates[0].id, "C");
        assert!((r.utilization_rate - 2.0 / 3.0).abs() < 1e-10);
        assert_eq!(r.total_sessions, 2);
        // T1 fill: 2/2 = 1.0 → score = 0.7 * 2/3 + 0.3 * 1.0
        assert!((r.score - (0.7 * 2.0 / 3.0 + 0.3)).abs() < 1e-10);
    }

    #[test]
    fn test_fill_rate_ignores_unused_slots() {
        let t1 = slot("T1", 1, 9);
        let assignments = vec![assignment("A", &t1, 1)];
        // One used slot at 1/2 occupancy; unused slots play no part
        assert!((slot_fill_rate(&assignments, 2) - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_group_by_session_and_date() {
        let t1 = slot("T1", 1, 9);
        let t2 = slot("T2", 2, 10);
        let candidates = vec![
            Candidate::new("A").with_slot(t1.key()),
            Candidate::new("B").with_slot(t1.key()),
            Candidate::new("C").with_slot(t2.key()),
        ];
        let assignments = vec![
            assignment("A", &t1, 1),
            assignment("B", &t1, 2),
            assignment("C", &t2, 1),
        ];
        let r = OptimizationResult::aggregate(&candidates, assignments, Vec::new(), 2);

        let by_session = r.by_session();
        assert_eq!(by_session.len(), 3); // Each occupant seat is its own session
        let by_date = r.by_date();
        assert_eq!(by_date.len(), 2);
        assert_eq!(by_date[&t1.date].len(), 2);
        assert_eq!(by_date[&t2.date].len(), 1);
    }

    #[test]
    fn test_warning_message() {
        let key = slot("T1", 1, 9).key();
        let w = ScheduleWarning::stale_reference("C1", &key);
        assert_eq!(w.kind, WarningKind::StaleSlotReference);
        assert_eq!(w.candidate_id, "C1");
        assert!(w.message.contains("20241201_0900"));
    }

    #[test]
    fn test_result_serialization() {
        let t1 = slot("T1", 1, 9);
        let candidates = vec![Candidate::new("A").with_slot(t1.key())];
        let r = OptimizationResult::aggregate(
            &candidates,
            vec![assignment("A", &t1, 1)],
            Vec::new(),
            1,
        );
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["assignments"][0]["session_id"], "S20241201_0900_1");
        assert_eq!(json["utilization_rate"], 1.0);
    }
}
