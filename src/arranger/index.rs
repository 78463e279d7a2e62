//! Index-based view of roster relations.
//!
//! Names are resolved once to roster positions so the placement passes
//! compare integers. The names themselves are kept for log events. A name resolves to the first roster entry that
//! carries it; relation targets missing from the roster are dropped.

use std::collections::{HashMap, HashSet};

use crate::models::Roster;

/// Conflict and preference adjacency by roster position.
#[derive(Debug, Clone, Default)]
pub(crate) struct RelationIndex {
    names: Vec<String>,
    conflicts: Vec<HashSet<usize>>,
    preferences: Vec<Vec<usize>>,
}

impl RelationIndex {
    pub(crate) fn build(roster: &Roster) -> Self {
        let mut by_name: HashMap<&str, usize> = HashMap::with_capacity(roster.len());
        for (i, subject) in roster.subjects.iter().enumerate() {
            by_name.entry(subject.name.as_str()).or_insert(i);
        }
        let resolve = |names: &[String]| -> Vec<usize> {
            names
                .iter()
                .filter_map(|n| by_name.get(n.as_str()).copied())
                .collect()
        };

        let mut conflicts = Vec::with_capacity(roster.len());
        let mut preferences = Vec::with_capacity(roster.len());
        for subject in &roster.subjects {
            conflicts.push(
                resolve(roster.relations.conflicts_of(&subject.name))
                    .into_iter()
                    .collect(),
            );
            preferences.push(resolve(roster.relations.preferences_of(&subject.name)));
        }

        Self {
            names: roster.subjects.iter().map(|s| s.name.clone()).collect(),
            conflicts,
            preferences,
        }
    }

    /// Whether `a` and `b` conflict, in either direction.
    pub(crate) fn conflicts(&self, a: usize, b: usize) -> bool {
        self.conflicts[a].contains(&b) || self.conflicts[b].contains(&a)
    }

    /// Preferred neighbors of `subject`, in insertion order.
    pub(crate) fn preferences(&self, subject: usize) -> &[usize] {
        &self.preferences[subject]
    }

    /// Name of the subject at roster position `subject`.
    pub(crate) fn name(&self, subject: usize) -> &str {
        &self.names[subject]
    }

    pub(crate) fn len(&self) -> usize {
        self.names.len()
    }
}
