//! Input validation for optimization runs.
//!
//! Checks structural integrity of candidates, slots, and constraints
//! before optimization. Detects:
//! - Duplicate IDs (candidates, slots)
//! - Duplicate slot keys (two physical slots collapsing into one
//!   logical slot and silently merging capacity)
//! - Stale slot references (availability entries matching no slot)
//! - Non-positive capacity
//!
//! The optimizers enforce the slot-side checks at construction; the full
//! check is offered for callers that want a strict pre-flight. At
//! optimize time stale references stay non-fatal and are surfaced as
//! result warnings instead.

use std::collections::HashSet;

use crate::models::{Candidate, TimeSlot};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two candidates share the same ID.
    DuplicateCandidateId,
    /// Two slots share the same ID.
    DuplicateSlotId,
    /// Two slots share the same date + start-time key.
    DuplicateSlotKey,
    /// A candidate references a slot that doesn't exist.
    UnknownSlotReference,
    /// Per-slot capacity is zero.
    InvalidCapacity,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the slot list and capacity for an optimization run.
///
/// Checks:
/// 1. Capacity is at least 1
/// 2. No duplicate slot IDs
/// 3. No duplicate slot keys
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_slots(slots: &[TimeSlot], simultaneous_count: usize) -> ValidationResult {
    let mut errors = Vec::new();

    if simultaneous_count == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidCapacity,
            "simultaneous_count must be at least 1",
        ));
    }

    let mut slot_ids = HashSet::new();
    let mut slot_keys = HashSet::new();
    for slot in slots {
        if !slot_ids.insert(slot.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateSlotId,
                format!("Duplicate slot ID: {}", slot.id),
            ));
        }
        if !slot_keys.insert(slot.key()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateSlotKey,
                format!("Slot '{}' duplicates key '{}'", slot.id, slot.key()),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates the full input of an optimization run.
///
/// Runs [`validate_slots`] plus:
/// 4. No duplicate candidate IDs
/// 5. All availability entries reference existing slot keys
///
/// Check 5 is stricter than the optimizer itself, which skips stale
/// references with a warning rather than failing.
pub fn validate_input(
    candidates: &[Candidate],
    slots: &[TimeSlot],
    simultaneous_count: usize,
) -> ValidationResult {
    let mut errors = match validate_slots(slots, simultaneous_count) {
        Ok(()) => Vec::new(),
        Err(errors) => errors,
    };

    let slot_keys: HashSet<_> = slots.iter().map(|s| s.key()).collect();

    let mut candidate_ids = HashSet::new();
    for candidate in candidates {
        if !candidate_ids.insert(candidate.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCandidateId,
                format!("Duplicate candidate ID: {}", candidate.id),
            ));
        }
        for key in &candidate.available_slots {
            if !slot_keys.contains(key) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownSlotReference,
                    format!(
                        "Candidate '{}' references unknown slot '{key}'",
                        candidate.id
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn slot(id: &str, hour: u32) -> TimeSlot {
        TimeSlot::new(
            id,
            NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
            NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(hour + 1, 0, 0).unwrap(),
        )
    }

    fn sample_slots() -> Vec<TimeSlot> {
        vec![slot("T1", 9), slot("T2", 10), slot("T3", 11)]
    }

    #[test]
    fn test_valid_input() {
        let slots = sample_slots();
        let candidates = vec![
            Candidate::new("C1").with_slot(slots[0].key()),
            Candidate::new("C2").with_slot(slots[1].key()),
        ];
        assert!(validate_input(&candidates, &slots, 2).is_ok());
    }

    #[test]
    fn test_zero_capacity() {
        let errors = validate_slots(&sample_slots(), 0).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidCapacity));
    }

    #[test]
    fn test_duplicate_slot_id() {
        let slots = vec![slot("T1", 9), slot("T1", 10)];
        let errors = validate_slots(&slots, 1).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateSlotId));
    }

    #[test]
    fn test_duplicate_slot_key() {
        // Distinct IDs, same date + start time
        let slots = vec![slot("T1", 9), slot("T2", 9)];
        let errors = validate_slots(&slots, 1).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateSlotKey));
    }

    #[test]
    fn test_duplicate_candidate_id() {
        let slots = sample_slots();
        let candidates = vec![Candidate::new("C1"), Candidate::new("C1")];
        let errors = validate_input(&candidates, &slots, 1).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateCandidateId));
    }

    #[test]
    fn test_unknown_slot_reference() {
        let slots = sample_slots();
        let candidates = vec![Candidate::new("C1").with_slot(slot("X", 22).key())];
        let errors = validate_input(&candidates, &slots, 1).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownSlotReference
                && e.message.contains("2200")));
    }

    #[test]
    fn test_multiple_errors() {
        // Zero capacity + duplicate candidate IDs
        let candidates = vec![Candidate::new("C1"), Candidate::new("C1")];
        let errors = validate_input(&candidates, &sample_slots(), 0).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
