//! Symmetric subject relations.
//!
//! Conflicts forbid two subjects from sharing a desk; preferences
//! encourage it. Both relations are stored as name-keyed adjacency
//! lists and every insertion writes both directions, so the arranger
//! only ever reads from a registry that is already symmetric.
//!
//! Neighbor lists keep insertion order: the affinity repair pass tries
//! preferred neighbors in the order they were added.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Rejected relation insertion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelationError {
    /// A subject cannot be related to itself.
    #[error("subject '{0}' cannot be related to itself")]
    SelfRelation(String),
    /// The pair is already present in the opposite relation.
    #[error("'{a}' and '{b}' are already linked by the opposite relation")]
    ConflictingRelation { a: String, b: String },
}

/// Kind of relation between two subjects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationKind {
    /// Must not share a desk.
    Conflict,
    /// Should share a desk when possible.
    Preference,
}

/// Adjacency registry for conflict and preference relations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationRegistry {
    conflicts: HashMap<String, Vec<String>>,
    preferences: HashMap<String, Vec<String>>,
}

impl RelationRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `a` and `b` as mutually conflicting.
    pub fn add_conflict(&mut self, a: &str, b: &str) -> Result<(), RelationError> {
        self.add(RelationKind::Conflict, a, b)
    }

    /// Marks `a` and `b` as preferred neighbors of each other.
    pub fn add_preference(&mut self, a: &str, b: &str) -> Result<(), RelationError> {
        self.add(RelationKind::Preference, a, b)
    }

    /// Inserts a symmetric edge of the given kind.
    ///
    /// Duplicate insertions are ignored. Fails for self-relations and
    /// for pairs already linked by the other kind.
    pub fn add(&mut self, kind: RelationKind, a: &str, b: &str) -> Result<(), RelationError> {
        if a == b {
            return Err(RelationError::SelfRelation(a.to_string()));
        }
        let opposite = match kind {
            RelationKind::Conflict => &self.preferences,
            RelationKind::Preference => &self.conflicts,
        };
        if contains(opposite, a, b) {
            return Err(RelationError::ConflictingRelation {
                a: a.to_string(),
                b: b.to_string(),
            });
        }

        let map = self.map_mut(kind);
        push_unique(map, a, b);
        push_unique(map, b, a);
        Ok(())
    }

    /// Removes the symmetric edge between `a` and `b`, if any.
    pub fn remove(&mut self, kind: RelationKind, a: &str, b: &str) {
        let map = self.map_mut(kind);
        for (from, to) in [(a, b), (b, a)] {
            if let Some(list) = map.get_mut(from) {
                list.retain(|n| n != to);
                if list.is_empty() {
                    map.remove(from);
                }
            }
        }
    }

    /// Drops every edge that touches `name`.
    pub fn remove_subject(&mut self, name: &str) {
        for map in [&mut self.conflicts, &mut self.preferences] {
            map.remove(name);
            map.retain(|_, list| {
                list.retain(|n| n != name);
                !list.is_empty()
            });
        }
    }

    /// Subjects that conflict with `name`, in insertion order.
    pub fn conflicts_of(&self, name: &str) -> &[String] {
        self.conflicts.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Preferred neighbors of `name`, in insertion order.
    pub fn preferences_of(&self, name: &str) -> &[String] {
        self.preferences.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of conflicts recorded for `name`.
    pub fn conflict_count(&self, name: &str) -> usize {
        self.conflicts_of(name).len()
    }

    /// Whether `b` is in the conflict list of `a`.
    pub fn are_conflicting(&self, a: &str, b: &str) -> bool {
        contains(&self.conflicts, a, b)
    }

    /// Whether `b` is in the preference list of `a`.
    pub fn is_preferred(&self, a: &str, b: &str) -> bool {
        contains(&self.preferences, a, b)
    }

    /// Every stored directed edge of the given kind.
    pub fn edges(&self, kind: RelationKind) -> impl Iterator<Item = (&str, &str)> {
        let map = match kind {
            RelationKind::Conflict => &self.conflicts,
            RelationKind::Preference => &self.preferences,
        };
        map.iter()
            .flat_map(|(from, list)| list.iter().map(move |to| (from.as_str(), to.as_str())))
    }

    /// Whether no relation of either kind is stored.
    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty() && self.preferences.is_empty()
    }

    fn map_mut(&mut self, kind: RelationKind) -> &mut HashMap<String, Vec<String>> {
        match kind {
            RelationKind::Conflict => &mut self.conflicts,
            RelationKind::Preference => &mut self.preferences,
        }
    }
}

fn contains(map: &HashMap<String, Vec<String>>, a: &str, b: &str) -> bool {
    map.get(a).is_some_and(|list| list.iter().any(|n| n == b))
}

fn push_unique(map: &mut HashMap<String, Vec<String>>, from: &str, to: &str) {
    let list = map.entry(from.to_string()).or_default();
    if !list.iter().any(|n| n == to) {
        list.push(to.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_is_symmetric() {
        let mut reg = RelationRegistry::new();
        reg.add_conflict("A", "B").unwrap();

        assert!(reg.are_conflicting("A", "B"));
        assert!(reg.are_conflicting("B", "A"));
        assert_eq!(reg.conflict_count("A"), 1);
        assert_eq!(reg.conflict_count("C"), 0);
    }

    #[test]
    fn test_preferences_keep_insertion_order() {
        let mut reg = RelationRegistry::new();
        reg.add_preference("A", "C").unwrap();
        reg.add_preference("A", "B").unwrap();
        reg.add_preference("A", "C").unwrap(); // duplicate ignored

        assert_eq!(reg.preferences_of("A"), &["C".to_string(), "B".to_string()]);
        assert_eq!(reg.preferences_of("B"), &["A".to_string()]);
    }

    #[test]
    fn test_self_relation_rejected() {
        let mut reg = RelationRegistry::new();
        let err = reg.add_conflict("A", "A").unwrap_err();
        assert_eq!(err, RelationError::SelfRelation("A".into()));
        assert!(reg.is_empty());
    }

    #[test]
    fn test_opposite_relation_rejected() {
        let mut reg = RelationRegistry::new();
        reg.add_preference("A", "B").unwrap();

        let err = reg.add_conflict("B", "A").unwrap_err();
        assert!(matches!(err, RelationError::ConflictingRelation { .. }));
        assert!(!reg.are_conflicting("A", "B"));
    }

    #[test]
    fn test_remove_edge() {
        let mut reg = RelationRegistry::new();
        reg.add_conflict("A", "B").unwrap();
        reg.remove(RelationKind::Conflict, "B", "A");

        assert!(!reg.are_conflicting("A", "B"));
        assert!(reg.is_empty());
        // Now a preference is allowed.
        reg.add_preference("A", "B").unwrap();
    }

    #[test]
    fn test_remove_subject_cascades() {
        let mut reg = RelationRegistry::new();
        reg.add_conflict("A", "B").unwrap();
        reg.add_conflict("A", "C").unwrap();
        reg.add_preference("B", "C").unwrap();
        reg.remove_subject("A");

        assert_eq!(reg.conflict_count("B"), 0);
        assert_eq!(reg.conflict_count("C"), 0);
        assert!(reg.is_preferred("C", "B"));
        assert_eq!(reg.edges(RelationKind::Conflict).count(), 0);
        assert_eq!(reg.edges(RelationKind::Preference).count(), 2);
    }
}
