//! Interview schedule optimization.
//!
//! Assigns a pool of candidates, each with a personal set of discrete
//! time slots, onto shared capacity-limited interview slots — maximizing
//! the number of candidates placed while balancing slot utilization.
//! The problem is a constrained bipartite assignment; the default solver
//! is a scarcity-aware greedy heuristic with session grouping and a
//! weighted quality score, with an exact maximum-matching alternative.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Candidate`, `TimeSlot`, `SlotKey`,
//!   `Assignment`, `SessionId`, `OptimizationResult`
//! - **`optimizer`**: `ScheduleOptimizer` (greedy/hybrid heuristic),
//!   `MatchingOptimizer` (exact alternative), `OptimizerConfig`
//! - **`validation`**: Input integrity checks (duplicate IDs, duplicate
//!   slot keys, stale references)
//!
//! # Scope
//!
//! Pure, synchronous, in-memory computation only. Persistence, slot
//! derivation from organizer date ranges, email dispatch, payment, and
//! UI live in the surrounding product and never in this crate. Slot
//! boundaries arrive pre-sized (interview length and buffer already
//! applied by the slot generator).
//!
//! # Example
//!
//! ```
//! use chrono::{NaiveDate, NaiveTime};
//! use interview_scheduler::models::{Candidate, TimeSlot};
//! use interview_scheduler::optimizer::{OptimizerConfig, ScheduleOptimizer};
//!
//! let date = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
//! let slots = vec![
//!     TimeSlot::new(
//!         "T1",
//!         date,
//!         NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
//!         NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
//!     ),
//! ];
//! let candidates = vec![
//!     Candidate::new("C1")
//!         .with_name("Ada")
//!         .with_slot(slots[0].key()),
//! ];
//!
//! let optimizer = ScheduleOptimizer::new(OptimizerConfig::new(45, 2), slots).unwrap();
//! let result = optimizer.optimize_schedule(&candidates);
//!
//! assert_eq!(result.assignment_count(), 1);
//! assert_eq!(result.assignments[0].session_id.as_str(), "S20241201_0900_1");
//! ```

pub mod models;
pub mod optimizer;
pub mod validation;
