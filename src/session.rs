//! Move sources that drive the position engine.
//!
//! Two kinds of session fill a [`Position`]:
//!
//! - [`random_opening`] samples coordinates inside the playable region,
//!   alternating Black and White, and resamples whenever a move is rejected.
//! - [`replay`] plays a fixed move list once, skipping rejected entries.
//!
//! Both stop early when the board is full.

use std::ops::RangeInclusive;

use tracing::{debug, info, warn};

use crate::board::{Color, Coord};
use crate::position::{Accepted, Position, Rejection};
use crate::sgf::ListedMove;

/// Source of candidate coordinates for random sessions.
pub trait CoordSource {
    /// A uniformly chosen value in `range`.
    fn sample(&mut self, range: RangeInclusive<usize>) -> usize;
}

impl CoordSource for fastrand::Rng {
    fn sample(&mut self, range: RangeInclusive<usize>) -> usize {
        self.usize(range)
    }
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stop {
    /// Every requested move was attempted.
    Completed,
    /// The playable region reached its capacity.
    BoardFull,
    /// `color` had no legal point left at move `index`.
    NoValidMoves { index: usize, color: Color },
    /// The retry budget ran out at move `index`.
    RetriesExhausted { index: usize, color: Color },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    pub accepted: usize,
    pub rejected: usize,
    pub stop: Stop,
}

impl SessionReport {
    fn new() -> Self {
        Self {
            accepted: 0,
            rejected: 0,
            stop: Stop::Completed,
        }
    }
}

fn log_accepted(accepted: &Accepted) {
    let mv = accepted.record;
    info!(
        "{}:{}{}, captured {}",
        mv.index + 1,
        mv.color,
        mv.coord,
        accepted.captured.len()
    );
}

/// Whether `color` has no legal point on this turn. The armed ko point
/// counts as unplayable; `play` has already expired any ko that does not
/// apply to the current index.
fn no_moves_left(pos: &Position, color: Color) -> bool {
    let valid = &pos.valid_moves()[&color];
    match pos.ko() {
        Some(ko) => valid.iter().all(|&c| c == ko.captured),
        None => valid.is_empty(),
    }
}

/// Play `stones` stones per colour at random points of the playable region.
///
/// Move indices continue after the last move already on `pos`, so an opening
/// can extend a replayed one. A rejected move is resampled at the same index,
/// at most `max_retries` times. After a suicide or ko rejection the session
/// also checks whether the colour has any legal point left, and stops if not.
pub fn random_opening<S: CoordSource>(
    pos: &mut Position,
    stones: usize,
    source: &mut S,
    max_retries: usize,
) -> SessionReport {
    let mut report = SessionReport::new();
    let region = pos.region();
    let first = pos.moves().last().map_or(0, |mv| mv.index + 1);

    for index in first..first.saturating_add(stones.saturating_mul(2)) {
        let color = Color::for_index(index);
        let mut attempts = 0;
        loop {
            let x = source.sample(region.min..=region.max);
            let y = source.sample(region.min..=region.max);
            match pos.play(index, color, x, y) {
                Ok(accepted) => {
                    log_accepted(&accepted);
                    report.accepted += 1;
                    break;
                }
                Err(Rejection::BoardFull) => {
                    info!("{}", Rejection::BoardFull);
                    report.stop = Stop::BoardFull;
                    return report;
                }
                Err(rejection) => {
                    debug!(index, %color, x, y, %rejection, "resampling");
                    report.rejected += 1;
                    attempts += 1;
                    if matches!(rejection, Rejection::ForbiddenMove | Rejection::Ko)
                        && no_moves_left(pos, color)
                    {
                        info!(index, %color, "no valid moves left");
                        report.stop = Stop::NoValidMoves { index, color };
                        return report;
                    }
                    if attempts >= max_retries {
                        warn!(index, %color, attempts, "giving up after too many rejected samples");
                        report.stop = Stop::RetriesExhausted { index, color };
                        return report;
                    }
                }
            }
        }
    }
    report
}

/// Play a fixed move list, using each entry's position in the list as its
/// move index. Rejected entries are skipped.
pub fn replay(pos: &mut Position, moves: &[ListedMove]) -> SessionReport {
    let mut report = SessionReport::new();
    let region = pos.region();
    for (index, mv) in moves.iter().enumerate() {
        let outside = Coord::from_one_based(mv.x, mv.y).is_some_and(|c| !region.contains(c));
        if outside {
            debug!(index = index + 1, x = mv.x, y = mv.y, "listed move is outside the playable region");
        }
        match pos.play(index, mv.color, mv.x, mv.y) {
            Ok(accepted) => {
                log_accepted(&accepted);
                report.accepted += 1;
            }
            Err(Rejection::BoardFull) => {
                info!("{}", Rejection::BoardFull);
                report.stop = Stop::BoardFull;
                break;
            }
            Err(rejection) => {
                warn!(index = index + 1, color = %mv.color, x = mv.x, y = mv.y, "skipping move: {rejection}");
                report.rejected += 1;
            }
        }
    }
    report
}
