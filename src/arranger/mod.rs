//! Greedy seating arrangement and arrangement metrics.
//!
//! [`SeatingArranger`] runs the whole heuristic: ranking, band shuffle,
//! edge-biased and general placement, affinity repair. It is a cheap,
//! single-pass heuristic with no optimality guarantee.
//!
//! # Report
//!
//! [`ArrangementReport`] measures a finished grid: occupied and empty
//! seats, unplaced subjects, conflicting pairs sharing a desk, and the
//! share of preferred pairs seated together.

mod affinity;
mod index;
mod placer;
mod report;
mod seating;
mod work_grid;

pub use placer::{EdgeConflictPolicy, DEFAULT_EDGE_CAPACITY};
pub use report::{ArrangementReport, SeatingViolation};
pub use seating::{arrange, ArrangeOptions, ArrangementOutcome, SeatingArranger};
