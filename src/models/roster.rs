//! Roster: ordered subjects plus their relations.
//!
//! Roster order is the caller's display order. The arranger uses it as
//! the iteration order of the affinity repair pass.

use serde::{Deserialize, Serialize};

use super::{RelationError, RelationKind, RelationRegistry, Subject};

/// An ordered list of subjects with a symmetric relation registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    /// Subjects in display order.
    pub subjects: Vec<Subject>,
    /// Conflict and preference relations, keyed by subject name.
    pub relations: RelationRegistry,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a roster from subjects with no relations.
    pub fn from_subjects(subjects: Vec<Subject>) -> Self {
        Self {
            subjects,
            relations: RelationRegistry::new(),
        }
    }

    /// Appends a subject.
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subjects.push(subject);
        self
    }

    /// Adds a symmetric conflict.
    pub fn with_conflict(mut self, a: &str, b: &str) -> Result<Self, RelationError> {
        self.relations.add(RelationKind::Conflict, a, b)?;
        Ok(self)
    }

    /// Adds a symmetric preference.
    pub fn with_preference(mut self, a: &str, b: &str) -> Result<Self, RelationError> {
        self.relations.add(RelationKind::Preference, a, b)?;
        Ok(self)
    }

    /// Appends a subject in place.
    pub fn add_subject(&mut self, subject: Subject) {
        self.subjects.push(subject);
    }

    /// Removes every subject named `name` together with its relations.
    ///
    /// Returns `true` if anything was removed.
    pub fn remove_subject(&mut self, name: &str) -> bool {
        let before = self.subjects.len();
        self.subjects.retain(|s| s.name != name);
        self.relations.remove_subject(name);
        self.subjects.len() != before
    }

    /// Finds a subject by exact name.
    pub fn find(&self, name: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.name == name)
    }

    /// Finds a subject by name, ignoring case.
    pub fn find_ignore_case(&self, name: &str) -> Option<&Subject> {
        let needle = name.to_lowercase();
        self.subjects
            .iter()
            .find(|s| s.name.to_lowercase() == needle)
    }

    /// Number of subjects.
    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    /// Whether the roster has no subjects.
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}
