//! Schedule optimizers.
//!
//! Two strategies behind the same result contract:
//!
//! - [`ScheduleOptimizer`]: scarcity-aware greedy/hybrid heuristic.
//!   Polynomial, deterministic, biased toward spreading candidates
//!   across slots. The production default.
//! - [`MatchingOptimizer`]: exact maximum-cardinality matching via
//!   augmenting paths. Guarantees no assignment places more candidates,
//!   at the cost of ignoring the spreading bias.
//!
//! Both are pure and synchronous: no I/O, no shared state, safe to run
//! per-event in parallel.
//!
//! On buffer time: some callers carry a buffer-time figure alongside
//! interview length. Neither optimizer consumes it — slot boundaries
//! arrive pre-sized from the slot-generation layer, buffers included.

mod config;
mod heuristic;
mod matching;

pub use config::{OptimizerConfig, DEFAULT_CRITICAL_SLOT_LIMIT, DEFAULT_HYBRID_THRESHOLD};
pub use heuristic::ScheduleOptimizer;
pub use matching::MatchingOptimizer;
