//! Seating arranger: the single entry point of the heuristic.
//!
//! # Algorithm
//!
//! 1. Clear the grid, keeping its desk count and row width.
//! 2. Partition the roster into front-priority and general groups and
//!    sort each by priority key.
//! 3. Shuffle each group within its bands.
//! 4. Pass 1: edge-biased placement of the front-priority group.
//!    Subjects without an edge seat join the end of the general group.
//! 5. Pass 2: greedy placement of the general group with conflict
//!    routing and grid growth.
//! 6. Affinity repair over the roster in display order.
//!
//! No step backtracks. The caller's roster and grid are never mutated.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::affinity::repair_affinities;
use super::index::RelationIndex;
use super::placer::{EdgeConflictPolicy, GreedyPlacer, DEFAULT_EDGE_CAPACITY};
use super::report::ArrangementReport;
use super::work_grid::WorkGrid;
use crate::models::{Grid, Roster};
use crate::ranking::{
    shuffle_within_bands, PriorityClassifier, StatureScheme, DEFAULT_BAND_DIVISOR,
    FRONT_PRIORITY_MIN_STATURE_CM,
};

/// Tunable parameters of an arrangement run.
///
/// Row width is taken from the grid, not from here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrangeOptions {
    /// Front-priority subjects per edge in pass 1.
    pub edge_capacity: usize,
    /// Number of bands a ranked group is split into.
    pub band_divisor: usize,
    /// Stature component of the priority key.
    pub stature_scheme: StatureScheme,
    /// Minimum stature (cm) for the front-priority group.
    pub front_min_stature_cm: i32,
    /// Conflict handling in pass 1.
    pub edge_conflict_policy: EdgeConflictPolicy,
}

impl Default for ArrangeOptions {
    fn default() -> Self {
        Self {
            edge_capacity: DEFAULT_EDGE_CAPACITY,
            band_divisor: DEFAULT_BAND_DIVISOR,
            stature_scheme: StatureScheme::Bucketed,
            front_min_stature_cm: FRONT_PRIORITY_MIN_STATURE_CM,
            edge_conflict_policy: EdgeConflictPolicy::Ignore,
        }
    }
}

/// Result of [`SeatingArranger::arrange_with_report`].
#[derive(Debug, Clone)]
pub struct ArrangementOutcome {
    /// The populated grid.
    pub grid: Grid,
    /// Quality metrics of `grid`.
    pub report: ArrangementReport,
    /// Desks appended beyond the input grid.
    pub desks_added: usize,
    /// Front-priority subjects that found no edge seat.
    pub edge_overflow: usize,
    /// Swaps made by the affinity repair pass.
    pub affinity_swaps: usize,
}

/// Seats a roster on a desk grid.
///
/// # Example
///
/// ```
/// use u_seating::arranger::SeatingArranger;
/// use u_seating::models::{Acuity, Grid, Roster, Subject};
///
/// let roster = Roster::new()
///     .with_subject(Subject::new("Anna").with_acuity(Acuity::Poor).with_stature(180))
///     .with_subject(Subject::new("Boris"))
///     .with_subject(Subject::new("Vera"))
///     .with_conflict("Boris", "Vera")
///     .unwrap();
///
/// let grid = SeatingArranger::new().arrange_seeded(&roster, &Grid::with_rows(1, 3), 42);
/// assert_eq!(grid.occupied_seats(), 3);
/// assert!(!grid.share_desk("Boris", "Vera"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SeatingArranger {
    options: ArrangeOptions,
}

impl SeatingArranger {
    /// Creates an arranger with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all options.
    pub fn with_options(mut self, options: ArrangeOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the per-edge capacity of pass 1.
    pub fn with_edge_capacity(mut self, capacity: usize) -> Self {
        self.options.edge_capacity = capacity;
        self
    }

    /// Sets the band divisor.
    pub fn with_band_divisor(mut self, divisor: usize) -> Self {
        self.options.band_divisor = divisor.max(1);
        self
    }

    /// Sets the stature scheme.
    pub fn with_stature_scheme(mut self, scheme: StatureScheme) -> Self {
        self.options.stature_scheme = scheme;
        self
    }

    /// Sets the front-priority stature threshold.
    pub fn with_front_min_stature(mut self, stature_cm: i32) -> Self {
        self.options.front_min_stature_cm = stature_cm;
        self
    }

    /// Sets the pass-1 conflict policy.
    pub fn with_edge_conflict_policy(mut self, policy: EdgeConflictPolicy) -> Self {
        self.options.edge_conflict_policy = policy;
        self
    }

    /// Current options.
    pub fn options(&self) -> &ArrangeOptions {
        &self.options
    }

    /// Arranges `roster` on a cleared copy of `grid`.
    ///
    /// The returned grid has at least as many desks as `grid` and seats
    /// every roster entry exactly once.
    pub fn arrange<R: Rng + ?Sized>(&self, roster: &Roster, grid: &Grid, rng: &mut R) -> Grid {
        self.run(roster, grid, rng).0
    }

    /// Arranges with a [`SmallRng`] seeded from `seed`.
    pub fn arrange_seeded(&self, roster: &Roster, grid: &Grid, seed: u64) -> Grid {
        let mut rng = SmallRng::seed_from_u64(seed);
        self.arrange(roster, grid, &mut rng)
    }

    /// Arranges and evaluates the result.
    pub fn arrange_with_report<R: Rng + ?Sized>(
        &self,
        roster: &Roster,
        grid: &Grid,
        rng: &mut R,
    ) -> ArrangementOutcome {
        let (arranged, stats) = self.run(roster, grid, rng);
        let report = ArrangementReport::evaluate(&arranged, roster);
        ArrangementOutcome {
            desks_added: arranged.len() - grid.len(),
            grid: arranged,
            report,
            edge_overflow: stats.edge_overflow,
            affinity_swaps: stats.affinity_swaps,
        }
    }

    fn run<R: Rng + ?Sized>(&self, roster: &Roster, grid: &Grid, rng: &mut R) -> (Grid, RunStats) {
        let opts = &self.options;
        let relations = RelationIndex::build(roster);
        let mut work = WorkGrid::empty(grid.len(), grid.row_width);

        let classifier = PriorityClassifier::new()
            .with_stature_scheme(opts.stature_scheme)
            .with_front_min_stature(opts.front_min_stature_cm);
        let mut groups = classifier.partition(&roster.subjects, &roster.relations);
        debug!(
            front = groups.front.len(),
            general = groups.general.len(),
            desks = grid.len(),
            "arranging roster"
        );

        shuffle_within_bands(&mut groups.front, opts.band_divisor, rng);
        shuffle_within_bands(&mut groups.general, opts.band_divisor, rng);

        let mut placer = GreedyPlacer::new(&mut work, &relations)
            .with_edge_capacity(opts.edge_capacity)
            .with_edge_policy(opts.edge_conflict_policy);
        let overflow = placer.place_front(&groups.front);
        let edge_overflow = overflow.len();
        groups.general.extend(overflow);
        placer.place_general(&groups.general);

        let affinity_swaps = repair_affinities(&mut work, &relations);

        if work.len() > grid.len() {
            debug!(added = work.len() - grid.len(), "grid grew during placement");
        }

        let stats = RunStats {
            edge_overflow,
            affinity_swaps,
        };
        (work.into_grid(&roster.subjects), stats)
    }
}

struct RunStats {
    edge_overflow: usize,
    affinity_swaps: usize,
}

/// Arranges `roster` on `grid` with default options.
pub fn arrange<R: Rng + ?Sized>(roster: &Roster, grid: &Grid, rng: &mut R) -> Grid {
    SeatingArranger::new().arrange(roster, grid, rng)
}
