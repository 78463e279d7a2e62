//! Working grid used during a single arrangement run.
//!
//! Seats hold roster positions instead of names. The grid starts empty
//! with the caller's desk count and row width and only ever grows.

use crate::models::{is_left_edge, is_right_edge, Desk, Grid, Seat, Subject};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WorkGrid {
    desks: Vec<[Option<usize>; 2]>,
    row_width: usize,
}

impl WorkGrid {
    pub(crate) fn empty(desk_count: usize, row_width: usize) -> Self {
        Self {
            desks: vec![[None, None]; desk_count],
            row_width,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.desks.len()
    }

    pub(crate) fn is_left_edge(&self, desk: usize) -> bool {
        is_left_edge(desk, self.row_width)
    }

    pub(crate) fn is_right_edge(&self, desk: usize) -> bool {
        is_right_edge(desk, self.row_width)
    }

    pub(crate) fn seat(&self, desk: usize, seat: Seat) -> Option<usize> {
        self.desks[desk][slot(seat)]
    }

    pub(crate) fn set(&mut self, desk: usize, seat: Seat, subject: Option<usize>) {
        self.desks[desk][slot(seat)] = subject;
    }

    /// Appends an empty desk and returns its index.
    pub(crate) fn grow(&mut self) -> usize {
        self.desks.push([None, None]);
        self.desks.len() - 1
    }

    /// Seats `subject` in the first free seat at or after desk `from`.
    ///
    /// Seat A is tried before seat B. Appends a desk when no free seat
    /// remains. Occupants are never checked for conflicts.
    pub(crate) fn place_in_first_free_seat(&mut self, subject: usize, from: usize) -> (usize, Seat) {
        let free = (from..self.desks.len()).find_map(|desk| {
            [Seat::A, Seat::B]
                .into_iter()
                .find(|&seat| self.seat(desk, seat).is_none())
                .map(|seat| (desk, seat))
        });
        let (desk, seat) = match free {
            Some(found) => found,
            None => (self.grow(), Seat::A),
        };
        self.set(desk, seat, Some(subject));
        (desk, seat)
    }

    /// Every occupied seat as `(subject, desk, seat)`.
    pub(crate) fn occupants(&self) -> impl Iterator<Item = (usize, usize, Seat)> + '_ {
        self.desks.iter().enumerate().flat_map(|(desk, seats)| {
            [Seat::A, Seat::B]
                .into_iter()
                .filter_map(move |seat| seats[slot(seat)].map(|s| (s, desk, seat)))
        })
    }

    /// Converts positions back to names.
    pub(crate) fn into_grid(self, subjects: &[Subject]) -> Grid {
        let name = |s: Option<usize>| s.map(|i| subjects[i].name.clone());
        Grid {
            desks: self
                .desks
                .into_iter()
                .map(|[a, b]| Desk {
                    seat_a: name(a),
                    seat_b: name(b),
                })
                .collect(),
            row_width: self.row_width,
        }
    }
}

#[inline]
fn slot(seat: Seat) -> usize {
    match seat {
        Seat::A => 0,
        Seat::B => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_free_seat_scans_forward() {
        let mut g = WorkGrid::empty(3, 3);
        g.set(1, Seat::A, Some(10));
        g.set(1, Seat::B, Some(11));
        g.set(2, Seat::A, Some(12));

        // Desk 0 is free but the search starts at 1.
        assert_eq!(g.place_in_first_free_seat(0, 1), (2, Seat::B));
        assert_eq!(g.len(), 3);
    }

    #[test]
    fn test_first_free_seat_grows_grid() {
        let mut g = WorkGrid::empty(1, 3);
        g.set(0, Seat::A, Some(0));
        g.set(0, Seat::B, Some(1));

        assert_eq!(g.place_in_first_free_seat(2, 0), (1, Seat::A));
        assert_eq!(g.len(), 2);
        // Starting past the end also grows.
        assert_eq!(g.place_in_first_free_seat(3, 5), (2, Seat::A));
    }

    #[test]
    fn test_never_overwrites() {
        let mut g = WorkGrid::empty(1, 3);
        g.set(0, Seat::A, Some(0));
        g.set(0, Seat::B, Some(1));
        g.place_in_first_free_seat(2, 0);
        assert_eq!(g.seat(0, Seat::A), Some(0));
        assert_eq!(g.seat(0, Seat::B), Some(1));
        assert_eq!(g.occupants().count(), 3);
    }

    #[test]
    fn test_into_grid_uses_names() {
        let subjects = vec![Subject::new("A"), Subject::new("B")];
        let mut g = WorkGrid::empty(2, 3);
        g.set(1, Seat::B, Some(0));
        g.set(0, Seat::A, Some(1));

        let grid = g.into_grid(&subjects);
        assert_eq!(grid.desks[1].seat_b.as_deref(), Some("A"));
        assert_eq!(grid.desks[0].seat_a.as_deref(), Some("B"));
        assert_eq!(grid.row_width, 3);
    }

    #[test]
    fn test_row_width_is_kept() {
        let g = WorkGrid::empty(2, 0);
        assert!(g.is_left_edge(1));
        assert!(g.is_right_edge(1));
        assert_eq!(g.into_grid(&[]).row_width, 0);
    }
}
