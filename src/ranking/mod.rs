//! Subject ranking: priority classification and band shuffling.
//!
//! # Usage
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use u_seating::models::{Acuity, RelationRegistry, Subject};
//! use u_seating::ranking::{shuffle_within_bands, PriorityClassifier, DEFAULT_BAND_DIVISOR};
//!
//! let subjects = vec![
//!     Subject::new("A").with_acuity(Acuity::Good),
//!     Subject::new("B").with_acuity(Acuity::Poor).with_stature(180),
//! ];
//! let mut groups = PriorityClassifier::new().partition(&subjects, &RelationRegistry::new());
//! assert_eq!(groups.front, vec![1]);
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! shuffle_within_bands(&mut groups.general, DEFAULT_BAND_DIVISOR, &mut rng);
//! ```

mod bands;
mod priority;

pub use bands::{band_index, band_size, shuffle_within_bands, DEFAULT_BAND_DIVISOR};
pub use priority::{
    PriorityClassifier, PriorityKey, RankedGroups, StatureScheme, FRONT_PRIORITY_MIN_STATURE_CM,
};
