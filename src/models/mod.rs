//! Seating domain models.
//!
//! Provides the data types exchanged with the arranger: who is seated
//! ([`Subject`], [`Roster`]), how they relate ([`RelationRegistry`]) and
//! where they sit ([`Desk`], [`Grid`]).
//!
//! All types are plain values. The arranger reads a roster and a grid
//! snapshot and returns a new grid; it never mutates caller data.

mod desk;
mod relations;
mod roster;
mod subject;

pub use desk::{Desk, Grid, Seat, DEFAULT_ROW_WIDTH};
pub(crate) use desk::{is_left_edge, is_right_edge};
pub use relations::{RelationError, RelationKind, RelationRegistry};
pub use roster::Roster;
pub use subject::{Acuity, Subject};
