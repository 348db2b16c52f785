//! Candidate model.
//!
//! A candidate is a person awaiting assignment, carrying the list of
//! slots they can attend. The list is built by the caller from the
//! candidate's persisted time selections and is never mutated here.

use serde::{Deserialize, Serialize};

use super::SlotKey;

/// A candidate to be placed on the interview schedule.
///
/// `available_slots` is ordered: it reflects the candidate's own
/// selection order, and the optimizer breaks scoring ties in favor of
/// earlier entries. A candidate with an empty list can never be
/// scheduled and always ends up in `unscheduled_candidates`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Unique, stable candidate identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email (carried through for the notification layer).
    pub email: String,
    /// Slots this candidate can attend, in selection order.
    pub available_slots: Vec<SlotKey>,
}

impl Candidate {
    /// Creates a new candidate with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            email: String::new(),
            available_slots: Vec::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the contact email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Appends one available slot.
    pub fn with_slot(mut self, key: SlotKey) -> Self {
        self.available_slots.push(key);
        self
    }

    /// Replaces the available-slot list.
    pub fn with_slots(mut self, keys: Vec<SlotKey>) -> Self {
        self.available_slots = keys;
        self
    }

    /// Number of slots this candidate selected.
    ///
    /// Counts raw references, including ones that may turn out stale
    /// against a given slot list. Criticality ordering works on this
    /// raw count.
    #[inline]
    pub fn option_count(&self) -> usize {
        self.available_slots.len()
    }

    /// Whether the candidate selected the given slot.
    pub fn can_attend(&self, key: &SlotKey) -> bool {
        self.available_slots.contains(key)
    }
}
