//! Arrangement quality metrics.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Occupied seats | Seats holding a subject |
//! | Unplaced | Roster names absent from the grid |
//! | Conflict violations | Desks seating two conflicting subjects |
//! | Preference rate | Preferred pairs sharing a desk / all preferred pairs |

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::models::{Grid, RelationKind, Roster};

/// Two conflicting subjects seated at the same desk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatingViolation {
    /// Desk index.
    pub desk: usize,
    /// Occupant of seat A.
    pub seat_a: String,
    /// Occupant of seat B.
    pub seat_b: String,
}

/// Summary of a finished grid against its roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrangementReport {
    /// Number of desks in the grid.
    pub desk_count: usize,
    /// Seats holding a subject.
    pub occupied_seats: usize,
    /// Seats left empty.
    pub empty_seats: usize,
    /// Roster names not seated anywhere.
    pub unplaced: Vec<String>,
    /// Desks seating a conflicting pair.
    pub conflict_violations: Vec<SeatingViolation>,
    /// Unordered preferred pairs sharing a desk.
    pub satisfied_preferences: usize,
    /// Unordered preferred pairs with both members on the roster.
    pub total_preference_pairs: usize,
}

impl ArrangementReport {
    /// Evaluates `grid` against `roster`.
    pub fn evaluate(grid: &Grid, roster: &Roster) -> Self {
        let occupied_seats = grid.occupied_seats();
        let mut desk_of: HashMap<&str, usize> = HashMap::new();
        for (i, desk) in grid.desks.iter().enumerate() {
            for name in desk.occupants() {
                desk_of.entry(name).or_insert(i);
            }
        }

        let unplaced = roster
            .subjects
            .iter()
            .filter(|s| !desk_of.contains_key(s.name.as_str()))
            .map(|s| s.name.clone())
            .collect();

        let conflict_violations = grid
            .desks
            .iter()
            .enumerate()
            .filter_map(|(i, desk)| match (&desk.seat_a, &desk.seat_b) {
                (Some(a), Some(b))
                    if roster.relations.are_conflicting(a, b)
                        || roster.relations.are_conflicting(b, a) =>
                {
                    Some(SeatingViolation {
                        desk: i,
                        seat_a: a.clone(),
                        seat_b: b.clone(),
                    })
                }
                _ => None,
            })
            .collect();

        let on_roster: HashSet<&str> = roster.subjects.iter().map(|s| s.name.as_str()).collect();
        let mut total_preference_pairs = 0;
        let mut satisfied_preferences = 0;
        for (a, b) in roster.relations.edges(RelationKind::Preference) {
            if a >= b || !on_roster.contains(a) || !on_roster.contains(b) {
                continue;
            }
            total_preference_pairs += 1;
            if grid.share_desk(a, b) {
                satisfied_preferences += 1;
            }
        }

        Self {
            desk_count: grid.len(),
            occupied_seats,
            empty_seats: grid.len() * 2 - occupied_seats,
            unplaced,
            conflict_violations,
            satisfied_preferences,
            total_preference_pairs,
        }
    }

    /// Whether no desk seats a conflicting pair.
    pub fn is_conflict_free(&self) -> bool {
        self.conflict_violations.is_empty()
    }

    /// Fraction of preferred pairs sharing a desk (1.0 when there are none).
    pub fn preference_rate(&self) -> f64 {
        if self.total_preference_pairs == 0 {
            1.0
        } else {
            self.satisfied_preferences as f64 / self.total_preference_pairs as f64
        }
    }
}
