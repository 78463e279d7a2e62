//! Single-pass affinity repair.
//!
//! Walks the roster in display order. A subject whose deskmate is not
//! one of its preferred neighbors tries its preferred neighbors in
//! insertion order and swaps the first eligible one into the deskmate's
//! seat; the displaced deskmate takes the neighbor's former seat.
//!
//! A neighbor is eligible when it is seated, does not conflict with the
//! subject, and its current deskmate does not conflict with the
//! subject's current deskmate. Swaps are applied immediately, so a later
//! swap may separate a pair an earlier swap joined.

use tracing::debug;

use super::index::RelationIndex;
use super::work_grid::WorkGrid;
use crate::models::Seat;

/// Runs the repair pass over `grid`. Returns the number of swaps made.
pub(crate) fn repair_affinities(grid: &mut WorkGrid, relations: &RelationIndex) -> usize {
    let mut location: Vec<Option<(usize, Seat)>> = vec![None; relations.len()];
    for (subject, desk, seat) in grid.occupants() {
        location[subject] = Some((desk, seat));
    }

    let mut swaps = 0;
    for subject in 0..relations.len() {
        let preferred = relations.preferences(subject);
        if preferred.is_empty() {
            continue;
        }
        let Some((desk, seat)) = location[subject] else {
            continue;
        };

        let mate_seat = seat.other();
        let mate = grid.seat(desk, mate_seat);
        if mate.is_some_and(|m| preferred.contains(&m)) {
            continue;
        }

        for &candidate in preferred {
            if candidate == subject {
                continue;
            }
            let Some((cand_desk, cand_seat)) = location[candidate] else {
                continue;
            };
            if relations.conflicts(subject, candidate) {
                continue;
            }
            let cand_mate = grid.seat(cand_desk, cand_seat.other());
            if let (Some(m), Some(cm)) = (mate, cand_mate) {
                if relations.conflicts(m, cm) {
                    continue;
                }
            }

            grid.set(desk, mate_seat, Some(candidate));
            grid.set(cand_desk, cand_seat, mate);
            if let Some(m) = mate {
                location[m] = Some((cand_desk, cand_seat));
            }
            location[candidate] = Some((desk, mate_seat));
            swaps += 1;

            debug!(
                subject = %relations.name(subject),
                candidate = %relations.name(candidate),
                desk,
                from_desk = cand_desk,
                "affinity swap"
            );
            break;
        }
    }
    swaps
}
