//! Desk and grid models.
//!
//! A desk holds two ordered seats. The grid is a dense row-major
//! sequence of desks with a fixed row width; the row position of desk
//! `i` is `i % row_width`. Position `0` is the left edge and position
//! `row_width - 1` is the right edge. A row width of 0 reads as 1, so
//! every desk is then both a left and a right edge.

use serde::{Deserialize, Serialize};

/// Default number of desks per row.
pub const DEFAULT_ROW_WIDTH: usize = 3;

/// One of the two seats of a desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// First (left) seat.
    A,
    /// Second (right) seat.
    B,
}

impl Seat {
    /// The other seat at the same desk.
    #[inline]
    pub fn other(self) -> Seat {
        match self {
            Seat::A => Seat::B,
            Seat::B => Seat::A,
        }
    }
}

/// A two-seat desk. Seats hold subject names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Desk {
    /// Occupant of seat A.
    pub seat_a: Option<String>,
    /// Occupant of seat B.
    pub seat_b: Option<String>,
}

impl Desk {
    /// Creates an empty desk.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a desk with the given occupants.
    pub fn with_occupants(seat_a: Option<&str>, seat_b: Option<&str>) -> Self {
        Self {
            seat_a: seat_a.map(str::to_string),
            seat_b: seat_b.map(str::to_string),
        }
    }

    /// Occupant of `seat`.
    pub fn occupant(&self, seat: Seat) -> Option<&str> {
        match seat {
            Seat::A => self.seat_a.as_deref(),
            Seat::B => self.seat_b.as_deref(),
        }
    }

    /// Whether both seats are empty.
    pub fn is_empty(&self) -> bool {
        self.seat_a.is_none() && self.seat_b.is_none()
    }

    /// Whether both seats are taken.
    pub fn is_full(&self) -> bool {
        self.seat_a.is_some() && self.seat_b.is_some()
    }

    /// Whether at least one seat is free.
    pub fn has_space(&self) -> bool {
        !self.is_full()
    }

    /// Occupants in seat order.
    pub fn occupants(&self) -> impl Iterator<Item = &str> {
        self.seat_a.as_deref().into_iter().chain(self.seat_b.as_deref())
    }

    /// Empties both seats.
    pub fn clear(&mut self) {
        self.seat_a = None;
        self.seat_b = None;
    }
}

#[inline]
pub(crate) fn row_position(index: usize, row_width: usize) -> usize {
    index % row_width.max(1)
}

pub(crate) fn is_left_edge(index: usize, row_width: usize) -> bool {
    row_position(index, row_width) == 0
}

pub(crate) fn is_right_edge(index: usize, row_width: usize) -> bool {
    row_position(index, row_width) == row_width.max(1) - 1
}

/// Row-major grid of desks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    /// Desks in row-major order.
    pub desks: Vec<Desk>,
    /// Desks per row.
    pub row_width: usize,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            desks: Vec::new(),
            row_width: DEFAULT_ROW_WIDTH,
        }
    }
}

impl Grid {
    /// Creates a grid of `count` empty desks with the default row width.
    pub fn with_desks(count: usize) -> Self {
        Self {
            desks: vec![Desk::new(); count],
            row_width: DEFAULT_ROW_WIDTH,
        }
    }

    /// Creates a grid of `rows` full rows of `row_width` empty desks.
    ///
    /// A `row_width` of 0 is stored as 1.
    pub fn with_rows(rows: usize, row_width: usize) -> Self {
        let row_width = row_width.max(1);
        Self {
            desks: vec![Desk::new(); rows * row_width],
            row_width,
        }
    }

    /// Number of desks.
    pub fn len(&self) -> usize {
        self.desks.len()
    }

    /// Whether the grid has no desks.
    pub fn is_empty(&self) -> bool {
        self.desks.is_empty()
    }

    /// Same desk count and width, every seat empty.
    pub fn cleared(&self) -> Self {
        Self {
            desks: vec![Desk::new(); self.desks.len()],
            row_width: self.row_width,
        }
    }

    /// Position of desk `index` within its row.
    #[inline]
    pub fn row_position(&self, index: usize) -> usize {
        row_position(index, self.row_width)
    }

    /// Whether desk `index` sits at the left edge of its row.
    pub fn is_left_edge(&self, index: usize) -> bool {
        is_left_edge(index, self.row_width)
    }

    /// Whether desk `index` sits at the right edge of its row.
    pub fn is_right_edge(&self, index: usize) -> bool {
        is_right_edge(index, self.row_width)
    }

    /// Total number of occupied seats.
    pub fn occupied_seats(&self) -> usize {
        self.desks.iter().map(|d| d.occupants().count()).sum()
    }

    /// Desk index and seat of the first seat holding `name`.
    pub fn location_of(&self, name: &str) -> Option<(usize, Seat)> {
        self.desks.iter().enumerate().find_map(|(i, desk)| {
            [Seat::A, Seat::B]
                .into_iter()
                .find(|&seat| desk.occupant(seat) == Some(name))
                .map(|seat| (i, seat))
        })
    }

    /// Occupant of the other seat at `name`'s desk.
    pub fn deskmate_of(&self, name: &str) -> Option<&str> {
        let (index, seat) = self.location_of(name)?;
        self.desks[index].occupant(seat.other())
    }

    /// Whether `a` and `b` share a desk.
    pub fn share_desk(&self, a: &str, b: &str) -> bool {
        self.deskmate_of(a) == Some(b)
    }
}
