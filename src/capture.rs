//! Capture engine.
//!
//! After a stone is placed, each orthogonal neighbour holding the opposite
//! colour is searched; groups left without liberties are captured. The same
//! routine runs in two modes: `Estimate` only reports what would be captured
//! (used for the suicide test and the ko shape), `Apply` also clears the
//! captured cells.

use std::collections::{BTreeSet, HashSet};

use tracing::debug;

use crate::board::{Color, Coord, Grid};
use crate::group::GroupSearch;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CaptureMode {
    /// Remove captured stones from the grid and the placed set.
    Apply,
    /// Report captures without touching any state.
    Estimate,
}

/// Stones of the opposite colour that a stone of `color` at `origin` leaves
/// without liberties.
///
/// The stone at `origin` must already be on the grid. Groups bordering
/// `origin` on several sides are only collected once.
pub fn find_captures(
    grid: &Grid,
    search: &mut GroupSearch,
    origin: Coord,
    color: Color,
) -> BTreeSet<Coord> {
    let enemy = color.opposite();
    let mut captured = BTreeSet::new();
    for n in grid.neighbors(origin) {
        if grid.get(n) != Some(enemy) || captured.contains(&n) {
            continue;
        }
        if search.count_liberties(grid, n) == Some(0) {
            captured.extend(search.members());
        }
    }
    captured
}

/// Run the capture engine from `origin` in the given mode.
///
/// Returns every captured coordinate, possibly spanning several groups;
/// empty if nothing was captured.
pub fn capture(
    grid: &mut Grid,
    placed: &mut HashSet<Coord>,
    search: &mut GroupSearch,
    origin: Coord,
    color: Color,
    mode: CaptureMode,
) -> BTreeSet<Coord> {
    let captured = find_captures(grid, search, origin, color);
    if mode == CaptureMode::Apply && !captured.is_empty() {
        for &c in &captured {
            grid.set(c, None);
            placed.remove(&c);
        }
        debug!(%origin, count = captured.len(), "captured stones");
    }
    captured
}
