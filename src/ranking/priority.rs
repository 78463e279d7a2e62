//! Priority classification.
//!
//! # Sort Keys (most significant first)
//!
//! | Key | Values |
//! |-----|--------|
//! | Acuity | Poor=1, Average=2, Good=3, Unknown=4 |
//! | Stature | bucket (<160 → 1, 160–174 → 2, ≥175 → 3) or raw cm |
//! | Conflict load | number of conflicts, ascending |
//!
//! Lower tuples are seated earlier. Subjects with `Poor` acuity and a
//! stature at or above the front-priority threshold form the
//! front-priority group; everyone else is in the general group. Each
//! group is sorted independently and stably.

use serde::{Deserialize, Serialize};

use crate::models::{Acuity, RelationRegistry, Subject};

/// Default stature threshold (cm) for the front-priority group.
pub const FRONT_PRIORITY_MIN_STATURE_CM: i32 = 175;

/// How stature contributes to the priority key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatureScheme {
    /// Three height bands: <160, 160–174, ≥175.
    #[default]
    Bucketed,
    /// Raw height in centimeters, ascending.
    Raw,
}

impl StatureScheme {
    /// Stature component of the priority key.
    pub fn key(self, stature_cm: i32) -> i32 {
        match self {
            StatureScheme::Bucketed => match stature_cm {
                i32::MIN..=159 => 1,
                160..=174 => 2,
                _ => 3,
            },
            StatureScheme::Raw => stature_cm,
        }
    }
}

/// Sortable priority tuple. Derived ordering compares fields top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PriorityKey {
    /// Acuity rank.
    pub acuity: u8,
    /// Stature component.
    pub stature: i32,
    /// Number of current conflicts.
    pub conflicts: usize,
}

/// Subject indices split into the two priority groups, each sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedGroups {
    /// Front-priority group (edge-biased placement).
    pub front: Vec<usize>,
    /// Everyone else.
    pub general: Vec<usize>,
}

/// Maps subjects to priority keys and partitions them into groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityClassifier {
    stature_scheme: StatureScheme,
    front_min_stature_cm: i32,
}

impl PriorityClassifier {
    /// Creates a classifier with bucketed stature and a 175 cm threshold.
    pub fn new() -> Self {
        Self {
            stature_scheme: StatureScheme::Bucketed,
            front_min_stature_cm: FRONT_PRIORITY_MIN_STATURE_CM,
        }
    }

    /// Sets the stature scheme.
    pub fn with_stature_scheme(mut self, scheme: StatureScheme) -> Self {
        self.stature_scheme = scheme;
        self
    }

    /// Sets the front-priority stature threshold.
    pub fn with_front_min_stature(mut self, stature_cm: i32) -> Self {
        self.front_min_stature_cm = stature_cm;
        self
    }

    /// Computes the priority key of a subject.
    pub fn key(&self, subject: &Subject, relations: &RelationRegistry) -> PriorityKey {
        PriorityKey {
            acuity: subject.acuity.rank(),
            stature: self.stature_scheme.key(subject.stature_cm),
            conflicts: relations.conflict_count(&subject.name),
        }
    }

    /// Whether a subject belongs to the front-priority group.
    pub fn is_front_priority(&self, subject: &Subject) -> bool {
        subject.acuity == Acuity::Poor && subject.stature_cm >= self.front_min_stature_cm
    }

    /// Splits `subjects` into the two groups and sorts each by key.
    ///
    /// Returned values are indices into `subjects`. Ties keep roster order.
    pub fn partition(&self, subjects: &[Subject], relations: &RelationRegistry) -> RankedGroups {
        let keys: Vec<PriorityKey> = subjects.iter().map(|s| self.key(s, relations)).collect();

        let (mut front, mut general): (Vec<usize>, Vec<usize>) =
            (0..subjects.len()).partition(|&i| self.is_front_priority(&subjects[i]));

        front.sort_by_key(|&i| keys[i]);
        general.sort_by_key(|&i| keys[i]);

        RankedGroups { front, general }
    }
}

impl Default for PriorityClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject(name: &str, acuity: Acuity, stature: i32) -> Subject {
        Subject::new(name).with_acuity(acuity).with_stature(stature)
    }

    #[test]
    fn test_stature_buckets() {
        let s = StatureScheme::Bucketed;
        assert_eq!(s.key(140), 1);
        assert_eq!(s.key(159), 1);
        assert_eq!(s.key(160), 2);
        assert_eq!(s.key(174), 2);
        assert_eq!(s.key(175), 3);
        assert_eq!(s.key(200), 3);
        assert_eq!(StatureScheme::Raw.key(163), 163);
    }

    #[test]
    fn test_key_ordering() {
        let c = PriorityClassifier::new();
        let reg = RelationRegistry::new();

        let poor_tall = c.key(&subject("a", Acuity::Poor, 190), &reg);
        let avg_short = c.key(&subject("b", Acuity::Average, 145), &reg);
        let good_short = c.key(&subject("c", Acuity::Good, 145), &reg);
        let unknown = c.key(&subject("d", Acuity::Unknown, 140), &reg);

        assert!(poor_tall < avg_short);
        assert!(avg_short < good_short);
        assert!(good_short < unknown);
    }

    #[test]
    fn test_conflict_count_breaks_ties() {
        let c = PriorityClassifier::new();
        let mut reg = RelationRegistry::new();
        reg.add_conflict("busy", "x").unwrap();
        reg.add_conflict("busy", "y").unwrap();

        let calm = c.key(&subject("calm", Acuity::Good, 165), &reg);
        let busy = c.key(&subject("busy", Acuity::Good, 168), &reg);
        assert_eq!(calm.stature, busy.stature);
        assert!(calm < busy);
        assert_eq!(busy.conflicts, 2);
    }

    #[test]
    fn test_classification_is_repeatable() {
        let c = PriorityClassifier::new().with_stature_scheme(StatureScheme::Raw);
        let mut reg = RelationRegistry::new();
        reg.add_conflict("a", "b").unwrap();
        let s = subject("a", Acuity::Average, 171);

        assert_eq!(c.key(&s, &reg), c.key(&s, &reg));
    }

    #[test]
    fn test_front_priority_membership() {
        let c = PriorityClassifier::new();
        assert!(c.is_front_priority(&subject("a", Acuity::Poor, 175)));
        assert!(!c.is_front_priority(&subject("b", Acuity::Poor, 174)));
        assert!(!c.is_front_priority(&subject("c", Acuity::Average, 190)));

        let lowered = c.with_front_min_stature(170);
        assert!(lowered.is_front_priority(&subject("b", Acuity::Poor, 174)));
    }

    #[test]
    fn test_partition_sorts_each_group() {
        let subjects = vec![
            subject("g1", Acuity::Good, 150),
            subject("f1", Acuity::Poor, 190),
            subject("p1", Acuity::Poor, 150),
            subject("a1", Acuity::Average, 180),
            subject("f2", Acuity::Poor, 176),
        ];
        let groups = PriorityClassifier::new().partition(&subjects, &RelationRegistry::new());

        // f1 and f2 share the ≥175 bucket: roster order is kept.
        assert_eq!(groups.front, vec![1, 4]);
        assert_eq!(groups.general, vec![2, 3, 0]);
    }

    #[test]
    fn test_partition_raw_stature() {
        let subjects = vec![
            subject("f1", Acuity::Poor, 190),
            subject("f2", Acuity::Poor, 176),
        ];
        let groups = PriorityClassifier::new()
            .with_stature_scheme(StatureScheme::Raw)
            .partition(&subjects, &RelationRegistry::new());
        assert_eq!(groups.front, vec![1, 0]);
        assert!(groups.general.is_empty());
    }
}
