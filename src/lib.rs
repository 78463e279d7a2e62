//! Seating arrangement for the U-Engine ecosystem.
//!
//! Assigns a roster of subjects to a grid of two-seat desks. Subjects who
//! need front placement are biased toward edge desks, conflicting
//! subjects are kept apart, preferred neighbors are seated together when
//! a safe swap exists, and fine-grained order is randomized per run.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Subject`, `Acuity`, `RelationRegistry`,
//!   `Roster`, `Desk`, `Seat`, `Grid`
//! - **`ranking`**: Priority keys, group partitioning, band shuffling
//! - **`arranger`**: Greedy placement, affinity repair, `SeatingArranger`,
//!   `ArrangementReport`
//! - **`validation`**: Roster integrity checks (names, relations, stature)
//!
//! # Architecture
//!
//! The arranger is a best-effort heuristic: one greedy placement pass per
//! priority group and one repair pass. No backtracking, no cost function.
//! Persistence, grid editing and presentation belong to the caller.

pub mod arranger;
pub mod models;
pub mod ranking;
pub mod validation;

pub use arranger::{arrange, SeatingArranger};
