//! Roster pre-flight checks.
//!
//! The arranger never rejects input and its behavior is unspecified for
//! malformed relations. Callers can run [`validate_roster`] first to
//! detect:
//! - Duplicate or empty names
//! - Relations naming subjects that are not on the roster
//! - Self-relations and one-sided relations
//! - Pairs that are both conflicting and preferred
//! - Statures outside 140–200 cm

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{RelationKind, RelationRegistry, Roster};

/// Accepted stature range (cm), inclusive.
pub const STATURE_RANGE_CM: (i32, i32) = (140, 200);

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind:?}: {message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two subjects share the same name.
    DuplicateName,
    /// A subject has an empty name.
    EmptyName,
    /// A relation references a name not on the roster.
    UnknownRelationTarget,
    /// A subject is related to itself.
    SelfRelation,
    /// A relation is stored in one direction only.
    AsymmetricRelation,
    /// A pair is both conflicting and preferred.
    ConflictAndPreference,
    /// Stature outside the accepted range.
    StatureOutOfRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a roster before arranging.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster(roster: &Roster) -> ValidationResult {
    let mut errors = Vec::new();

    let mut names = HashSet::new();
    for s in &roster.subjects {
        if s.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                "Subject with empty name",
            ));
        }
        if !names.insert(s.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate subject name: {}", s.name),
            ));
        }

        let (min, max) = STATURE_RANGE_CM;
        if !(min..=max).contains(&s.stature_cm) {
            errors.push(ValidationError::new(
                ValidationErrorKind::StatureOutOfRange,
                format!(
                    "Subject '{}' has stature {} cm (expected {min}-{max})",
                    s.name, s.stature_cm
                ),
            ));
        }
    }

    for kind in [RelationKind::Conflict, RelationKind::Preference] {
        check_relation(&roster.relations, kind, &names, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_relation(
    relations: &RelationRegistry,
    kind: RelationKind,
    names: &HashSet<&str>,
    errors: &mut Vec<ValidationError>,
) {
    let holds = |a: &str, b: &str| match kind {
        RelationKind::Conflict => relations.are_conflicting(a, b),
        RelationKind::Preference => relations.is_preferred(a, b),
    };

    let mut seen_pairs = HashSet::new();
    for (a, b) in relations.edges(kind) {
        let pair = if a <= b { (a, b) } else { (b, a) };
        let first_sighting = seen_pairs.insert(pair);
        for name in [a, b] {
            if first_sighting && !names.contains(name) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownRelationTarget,
                    format!("{kind:?} '{a}' → '{b}' references unknown subject '{name}'"),
                ));
            }
        }
        if a == b {
            errors.push(ValidationError::new(
                ValidationErrorKind::SelfRelation,
                format!("Subject '{a}' has a {kind:?} with itself"),
            ));
        }
        if !holds(b, a) {
            errors.push(ValidationError::new(
                ValidationErrorKind::AsymmetricRelation,
                format!("{kind:?} '{a}' → '{b}' has no reverse edge"),
            ));
        }
        // Report each overlapping pair once, from the conflict side.
        if kind == RelationKind::Conflict && relations.is_preferred(a, b) {
            errors.push(ValidationError::new(
                ValidationErrorKind::ConflictAndPreference,
                format!("'{a}' and '{b}' are both conflicting and preferred"),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Subject;

    fn sample_roster() -> Roster {
        Roster::new()
            .with_subject(Subject::new("A").with_stature(150))
            .with_subject(Subject::new("B").with_stature(170))
            .with_subject(Subject::new("C").with_stature(190))
            .with_conflict("A", "B")
            .unwrap()
            .with_preference("B", "C")
            .unwrap()
    }

    fn has(errors: &[ValidationError], kind: ValidationErrorKind) -> bool {
        errors.iter().any(|e| e.kind == kind)
    }

    #[test]
    fn test_valid_roster() {
        assert!(validate_roster(&sample_roster()).is_ok());
        assert!(validate_roster(&Roster::new()).is_ok());
    }

    #[test]
    fn test_duplicate_and_empty_names() {
        let roster = sample_roster()
            .with_subject(Subject::new("A"))
            .with_subject(Subject::new(" "));

        let errors = validate_roster(&roster).unwrap_err();
        assert!(has(&errors, ValidationErrorKind::DuplicateName));
        assert!(has(&errors, ValidationErrorKind::EmptyName));
    }

    #[test]
    fn test_stature_out_of_range() {
        let roster = sample_roster().with_subject(Subject::new("D").with_stature(215));

        let errors = validate_roster(&roster).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::StatureOutOfRange);
        assert!(errors[0].to_string().contains("215"));
    }

    #[test]
    fn test_unknown_relation_target() {
        let roster = sample_roster().with_conflict("A", "Ghost").unwrap();

        let errors = validate_roster(&roster).unwrap_err();
        assert!(has(&errors, ValidationErrorKind::UnknownRelationTarget));
    }

    #[test]
    fn test_unknown_target_reported_once_per_pair() {
        let roster = sample_roster()
            .with_conflict("A", "Ghost")
            .unwrap()
            .with_preference("Ghost", "Phantom")
            .unwrap();

        let errors = validate_roster(&roster).unwrap_err();
        let unknown: Vec<_> = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::UnknownRelationTarget)
            .collect();
        // One for A-Ghost, two for Ghost-Phantom (both ends unknown).
        assert_eq!(unknown.len(), 3);
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_hand_built_registry_is_checked() {
        // A registry deserialized from foreign data can bypass the
        // symmetric insert helpers.
        let json = r#"{
            "subjects": [
                {"name": "A", "acuity": "Good", "stature_cm": 160},
                {"name": "B", "acuity": "Good", "stature_cm": 160}
            ],
            "relations": {
                "conflicts": {"A": ["B", "A"]},
                "preferences": {"A": ["B"], "B": ["A"]}
            }
        }"#;
        let roster: Roster = serde_json::from_str(json).unwrap();

        let errors = validate_roster(&roster).unwrap_err();
        assert!(has(&errors, ValidationErrorKind::AsymmetricRelation));
        assert!(has(&errors, ValidationErrorKind::SelfRelation));
        assert!(has(&errors, ValidationErrorKind::ConflictAndPreference));
    }
}
