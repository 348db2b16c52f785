//! Interview scheduling domain models.
//!
//! Provides the value types flowing through an optimization run. All of
//! them are caller-owned plain data: the optimizer never mutates its
//! inputs and only ever returns fresh result objects.
//!
//! # Types
//!
//! | Type | Role |
//! |------|------|
//! | [`Candidate`] | Person awaiting assignment, with selected slots |
//! | [`TimeSlot`] / [`SlotKey`] | Fixed-capacity interview window and its identity |
//! | [`Assignment`] / [`SessionId`] | One candidate placed on one occupant seat |
//! | [`OptimizationResult`] | Assignments, leftovers, warnings, metrics |

mod candidate;
mod result;
mod slot;

pub use candidate::Candidate;
pub use result::{
    Assignment, OptimizationResult, ScheduleWarning, SessionId, WarningKind, SLOT_FILL_WEIGHT,
    UTILIZATION_WEIGHT,
};
pub use slot::{SlotKey, TimeSlot};
