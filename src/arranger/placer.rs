//! Greedy two-pass desk placement.
//!
//! # Algorithm
//!
//! **Pass 1 (edge-biased).** Front-priority subjects walk a forward-only
//! cursor over the desks. A left-edge desk with seat A free takes the
//! subject while fewer than `edge_capacity` subjects sit on the left
//! edge; otherwise a right-edge desk with seat B free takes it under the
//! same cap for the right edge. Any other desk advances the cursor. A
//! subject reaching the end of the grid overflows into the general list.
//!
//! **Pass 2 (general).** A fresh cursor starts at 0. The subject takes
//! seat A, or seat B when A is occupied, unless the occupant of the other
//! seat conflicts with it; then it is routed to the first free seat after
//! the cursor and the cursor stays put. A direct seat-B placement
//! advances the cursor. A full desk advances the cursor and routes the
//! subject from the new cursor. Routing never checks conflicts and grows
//! the grid when it runs out of seats.
//!
//! # Complexity
//! O(s + d) for the cursor walks plus O(d) per routed subject, where
//! s = subjects and d = desks.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::index::RelationIndex;
use super::work_grid::WorkGrid;
use crate::models::Seat;

/// Default number of front-priority subjects per edge.
pub const DEFAULT_EDGE_CAPACITY: usize = 3;

/// Whether the edge-biased pass looks at conflicts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeConflictPolicy {
    /// Seat on an edge regardless of the deskmate. Two conflicting
    /// front-priority subjects can end up at the same desk.
    #[default]
    Ignore,
    /// Skip an edge seat whose deskmate conflicts with the subject.
    Avoid,
}

pub(crate) struct GreedyPlacer<'a> {
    grid: &'a mut WorkGrid,
    relations: &'a RelationIndex,
    edge_capacity: usize,
    edge_policy: EdgeConflictPolicy,
}

impl<'a> GreedyPlacer<'a> {
    pub(crate) fn new(grid: &'a mut WorkGrid, relations: &'a RelationIndex) -> Self {
        Self {
            grid,
            relations,
            edge_capacity: DEFAULT_EDGE_CAPACITY,
            edge_policy: EdgeConflictPolicy::Ignore,
        }
    }

    pub(crate) fn with_edge_capacity(mut self, capacity: usize) -> Self {
        self.edge_capacity = capacity;
        self
    }

    pub(crate) fn with_edge_policy(mut self, policy: EdgeConflictPolicy) -> Self {
        self.edge_policy = policy;
        self
    }

    /// Pass 1. Returns the subjects that found no edge seat, in order.
    pub(crate) fn place_front(&mut self, front: &[usize]) -> Vec<usize> {
        let mut overflow = Vec::new();
        let mut cursor = 0;
        let mut left_count = 0;
        let mut right_count = 0;

        for &subject in front {
            let mut placed = false;
            while cursor < self.grid.len() && !placed {
                if self.grid.is_left_edge(cursor)
                    && left_count < self.edge_capacity
                    && self.edge_seat_open(cursor, Seat::A, subject)
                {
                    self.grid.set(cursor, Seat::A, Some(subject));
                    left_count += 1;
                    placed = true;
                } else if self.grid.is_right_edge(cursor)
                    && right_count < self.edge_capacity
                    && self.edge_seat_open(cursor, Seat::B, subject)
                {
                    self.grid.set(cursor, Seat::B, Some(subject));
                    right_count += 1;
                    placed = true;
                } else {
                    cursor += 1;
                }
            }

            if placed {
                let name = self.relations.name(subject);
                trace!(subject = %name, desk = cursor, "edge placement");
            } else {
                overflow.push(subject);
            }
        }

        if !overflow.is_empty() {
            debug!(
                overflow = overflow.len(),
                "front-priority subjects moved to general placement"
            );
        }
        overflow
    }

    /// Pass 2. Seats every subject in `general`, growing the grid if needed.
    pub(crate) fn place_general(&mut self, general: &[usize]) {
        let mut cursor = 0;

        for &subject in general {
            if cursor >= self.grid.len() {
                self.grid.grow();
            }

            match (
                self.grid.seat(cursor, Seat::A),
                self.grid.seat(cursor, Seat::B),
            ) {
                (None, mate) => {
                    if self.clashes(mate, subject) {
                        self.route(subject, cursor + 1);
                    } else {
                        self.grid.set(cursor, Seat::A, Some(subject));
                        let name = self.relations.name(subject);
                        trace!(subject = %name, desk = cursor, "seat A");
                    }
                }
                (Some(mate), None) => {
                    if self.relations.conflicts(mate, subject) {
                        self.route(subject, cursor + 1);
                    } else {
                        self.grid.set(cursor, Seat::B, Some(subject));
                        let name = self.relations.name(subject);
                        trace!(subject = %name, desk = cursor, "seat B");
                        cursor += 1;
                    }
                }
                (Some(_), Some(_)) => {
                    cursor += 1;
                    self.route(subject, cursor);
                }
            }
        }
    }

    fn route(&mut self, subject: usize, from: usize) {
        let before = self.grid.len();
        let (desk, seat) = self.grid.place_in_first_free_seat(subject, from);
        let name = self.relations.name(subject);
        if self.grid.len() > before {
            debug!(subject = %name, desk, "grid grown for overflow");
        }
        trace!(subject = %name, desk, ?seat, from, "routed");
    }

    fn edge_seat_open(&self, desk: usize, seat: Seat, subject: usize) -> bool {
        if self.grid.seat(desk, seat).is_some() {
            return false;
        }
        match self.edge_policy {
            EdgeConflictPolicy::Ignore => true,
            EdgeConflictPolicy::Avoid => !self.clashes(self.grid.seat(desk, seat.other()), subject),
        }
    }

    fn clashes(&self, occupant: Option<usize>, subject: usize) -> bool {
        occupant.is_some_and(|other| self.relations.conflicts(other, subject))
    }
}
