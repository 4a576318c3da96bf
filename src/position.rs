//! Position engine: the single owner of the board state.
//!
//! This module provides the core game logic:
//! - Stone placement through [`Position::play`], the only mutating entry point
//! - Suicide detection and capture resolution
//! - Ko rule enforcement (single-stone-for-single-stone shape)
//! - Enumeration of legal moves inside the playable region
//!
//! The grid, the set of placed coordinates and the ko state are kept behind
//! one ownership boundary; the group search, capture engine and ko tracker
//! only ever see them through explicit parameters.

use std::collections::{BTreeSet, HashMap, HashSet};

use thiserror::Error;
use tracing::debug;

use crate::board::{Color, Coord, Grid};
use crate::capture::{CaptureMode, capture, find_captures};
use crate::config::ConfigError;
use crate::constants::MAX_BOARD_SIZE;
use crate::group::GroupSearch;
use crate::ko::{KoState, KoTracker};

/// Why a move was not placed. Checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("coordinate of the move is out of board!")]
    OutOfBounds,
    #[error("cannot play any more moves!")]
    BoardFull,
    #[error("new move is duplicated and won't be placed on the board.")]
    Duplicate,
    #[error("forbidden move: placement would be suicide")]
    ForbiddenMove,
    #[error("illegal move: retakes ko")]
    Ko,
}

/// An accepted move, as it appears in the game record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub index: usize,
    pub color: Color,
    pub coord: Coord,
}

/// Result of a successful [`Position::play`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    pub record: MoveRecord,
    /// Stones removed by this move, row by row.
    pub captured: Vec<Coord>,
}

/// Inner square of lines where stones may be sampled.
///
/// With margin line `min`, the playable lines are `min..=max` (1-based) where
/// `max = size - min + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayableRegion {
    pub min: usize,
    pub max: usize,
}

impl PlayableRegion {
    pub fn new(size: usize, min_line: usize) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge { size });
        }
        if min_line == 0 {
            return Err(ConfigError::MarginTooSmall);
        }
        let max = (size + 1).saturating_sub(min_line);
        if min_line > max {
            return Err(ConfigError::MarginTooLarge { min_line, size });
        }
        Ok(Self { min: min_line, max })
    }

    /// Number of points in the region.
    pub fn capacity(&self) -> usize {
        let lines = self.max - self.min + 1;
        lines * lines
    }

    pub fn contains(&self, c: Coord) -> bool {
        let (x, y) = c.to_one_based();
        (self.min..=self.max).contains(&x) && (self.min..=self.max).contains(&y)
    }

    /// Points of the region, row by row.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let lines = self.min - 1..self.max;
        lines
            .clone()
            .flat_map(move |y| lines.clone().map(move |x| Coord::new(x, y)))
    }
}

/// The board state of one generated game.
#[derive(Clone, Debug)]
pub struct Position {
    grid: Grid,
    /// Occupied points; non-empty cells and entries correspond one to one.
    placed: HashSet<Coord>,
    search: GroupSearch,
    ko: KoTracker,
    region: PlayableRegion,
    /// Placed minus captured stones.
    stones: usize,
    moves: Vec<MoveRecord>,
}

impl Position {
    /// Empty position on a `size`x`size` board with margin line `min_line`.
    pub fn new(size: usize, min_line: usize) -> Result<Self, ConfigError> {
        let region = PlayableRegion::new(size, min_line)?;
        Ok(Self {
            grid: Grid::new(size),
            placed: HashSet::new(),
            search: GroupSearch::new(size),
            ko: KoTracker::new(),
            region,
            stones: 0,
            moves: Vec::new(),
        })
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn region(&self) -> PlayableRegion {
        self.region
    }

    pub fn placed(&self) -> &HashSet<Coord> {
        &self.placed
    }

    pub fn stone_count(&self) -> usize {
        self.stones
    }

    /// Accepted moves in order, including stones that were later captured.
    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    pub fn ko(&self) -> Option<KoState> {
        self.ko.active()
    }

    /// Console snapshot of the board.
    pub fn render(&self) -> String {
        self.grid.to_string()
    }

    /// Liberties of the group at a 0-based coordinate, `None` if the point
    /// is empty or off the board.
    pub fn liberties(&mut self, c: Coord) -> Option<usize> {
        if !self.grid.contains(c) {
            return None;
        }
        self.search.count_liberties(&self.grid, c)
    }

    /// Play move number `index` for `color` at 1-based (`x`, `y`).
    ///
    /// # Errors
    /// - [`Rejection::OutOfBounds`] - the coordinate is off the board
    /// - [`Rejection::BoardFull`] - the playable region's capacity is used up
    /// - [`Rejection::Duplicate`] - the point is occupied
    /// - [`Rejection::ForbiddenMove`] - suicide without capturing anything
    /// - [`Rejection::Ko`] - immediate retake of a ko
    ///
    /// Rejected moves leave the position unchanged.
    pub fn play(
        &mut self,
        index: usize,
        color: Color,
        x: usize,
        y: usize,
    ) -> Result<Accepted, Rejection> {
        self.ko.expire(index);

        let c = Coord::from_one_based(x, y)
            .filter(|&c| self.grid.contains(c))
            .ok_or(Rejection::OutOfBounds)?;
        if self.stones >= self.region.capacity() {
            return Err(Rejection::BoardFull);
        }
        if self.placed.contains(&c) {
            return Err(Rejection::Duplicate);
        }

        // Tentative placement
        self.grid.set(c, Some(color));
        let liberties = self.search.count_liberties(&self.grid, c).unwrap_or(0);
        if liberties == 0 {
            let would_capture = find_captures(&self.grid, &mut self.search, c, color);
            let rejection = if would_capture.is_empty() {
                Some(Rejection::ForbiddenMove)
            } else if self.ko.is_violation(index, c) {
                Some(Rejection::Ko)
            } else {
                None
            };
            if let Some(rejection) = rejection {
                self.grid.set(c, None);
                debug!(index, %color, coord = %c, %rejection, "move rejected");
                return Err(rejection);
            }
        }

        let record = MoveRecord { index, color, coord: c };
        self.moves.push(record);
        self.placed.insert(c);
        self.stones += 1;

        let captured: Vec<Coord> = capture(
            &mut self.grid,
            &mut self.placed,
            &mut self.search,
            c,
            color,
            CaptureMode::Apply,
        )
        .into_iter()
        .collect();
        self.stones -= captured.len();

        let group_size = self.search.group_members(&self.grid, c).len();
        self.ko.record(index, c, &captured, group_size);

        Ok(Accepted { record, captured })
    }

    /// Legal points per colour inside the playable region.
    ///
    /// A point is legal unless the stone would have no liberties and capture
    /// nothing. Ko is not considered. The position is not modified; candidates
    /// are tried on a scratch copy of the grid.
    pub fn valid_moves(&self) -> HashMap<Color, BTreeSet<Coord>> {
        let mut scratch = self.grid.clone();
        let mut search = GroupSearch::new(self.size());
        let mut moves: HashMap<Color, BTreeSet<Coord>> = HashMap::new();
        moves.insert(Color::Black, BTreeSet::new());
        moves.insert(Color::White, BTreeSet::new());

        for c in self.region.coords() {
            if scratch.get(c).is_some() {
                continue;
            }
            for color in [Color::Black, Color::White] {
                scratch.set(c, Some(color));
                let legal = search.count_liberties(&scratch, c) != Some(0)
                    || !find_captures(&scratch, &mut search, c, color).is_empty();
                scratch.set(c, None);
                if legal {
                    moves.entry(color).or_default().insert(c);
                }
            }
        }
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(size: usize) -> Position {
        Position::new(size, 1).expect("valid board")
    }

    #[test]
    fn test_empty_position() {
        let pos = position(9);
        assert_eq!(pos.stone_count(), 0);
        assert!(pos.placed().is_empty());
        assert!(pos.moves().is_empty());
        assert!(pos.ko().is_none());
    }

    #[test]
    fn test_region_bounds() {
        let region = PlayableRegion::new(13, 2).unwrap();
        assert_eq!((region.min, region.max), (2, 12));
        assert_eq!(region.capacity(), 121);
        assert!(region.contains(Coord::new(1, 1)));
        assert!(!region.contains(Coord::new(0, 5)));
        assert!(!region.contains(Coord::new(12, 5)));
        assert_eq!(region.coords().count(), 121);
    }

    #[test]
    fn test_region_errors() {
        assert!(matches!(
            PlayableRegion::new(20, 2),
            Err(ConfigError::BoardTooLarge { size: 20 })
        ));
        assert!(matches!(
            PlayableRegion::new(5, 4),
            Err(ConfigError::MarginTooLarge { .. })
        ));
        assert!(matches!(PlayableRegion::new(5, 0), Err(ConfigError::MarginTooSmall)));
        assert!(matches!(PlayableRegion::new(0, 1), Err(ConfigError::EmptyBoard)));
        // The centre line alone is still a region.
        assert_eq!(PlayableRegion::new(5, 3).unwrap().capacity(), 1);
    }

    #[test]
    fn test_play_move_basic() {
        let mut pos = position(9);
        let accepted = pos.play(0, Color::Black, 4, 4).unwrap();
        assert_eq!(accepted.record.coord, Coord::new(3, 3));
        assert!(accepted.captured.is_empty());
        assert_eq!(pos.grid().get(Coord::new(3, 3)), Some(Color::Black));
        assert_eq!(pos.stone_count(), 1);
        assert_eq!(pos.liberties(Coord::new(3, 3)), Some(4));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut pos = position(9);
        assert_eq!(pos.play(0, Color::Black, 10, 1), Err(Rejection::OutOfBounds));
        assert_eq!(pos.play(0, Color::Black, 1, 0), Err(Rejection::OutOfBounds));
    }

    #[test]
    fn test_duplicate() {
        let mut pos = position(9);
        pos.play(0, Color::Black, 3, 3).unwrap();
        assert_eq!(pos.play(1, Color::White, 3, 3), Err(Rejection::Duplicate));
        assert_eq!(pos.moves().len(), 1);
    }

    #[test]
    fn test_board_full_checked_before_duplicate() {
        let mut pos = Position::new(3, 2).unwrap();
        pos.play(0, Color::Black, 2, 2).unwrap();
        assert_eq!(pos.play(1, Color::White, 2, 2), Err(Rejection::BoardFull));
        assert_eq!(pos.play(1, Color::White, 4, 4), Err(Rejection::OutOfBounds));
    }

    #[test]
    fn test_corner_suicide() {
        let mut pos = position(9);
        pos.play(0, Color::Black, 1, 2).unwrap();
        pos.play(1, Color::White, 9, 9).unwrap();
        pos.play(2, Color::Black, 2, 1).unwrap();
        let before = pos.grid().clone();
        assert_eq!(pos.play(3, Color::White, 1, 1), Err(Rejection::ForbiddenMove));
        assert_eq!(pos.grid(), &before);
        assert_eq!(pos.stone_count(), 3);
    }

    #[test]
    fn test_capture() {
        let mut pos = position(9);
        pos.play(0, Color::Black, 3, 4).unwrap();
        pos.play(1, Color::White, 4, 4).unwrap();
        pos.play(2, Color::Black, 5, 4).unwrap();
        pos.play(3, Color::White, 9, 9).unwrap();
        pos.play(4, Color::Black, 4, 3).unwrap();
        pos.play(5, Color::White, 9, 8).unwrap();
        let accepted = pos.play(6, Color::Black, 4, 5).unwrap();
        assert_eq!(accepted.captured, vec![Coord::new(3, 3)]);
        assert_eq!(pos.grid().get(Coord::new(3, 3)), None);
        assert!(!pos.placed().contains(&Coord::new(3, 3)));
        assert_eq!(pos.stone_count(), 6);
        assert_eq!(pos.moves().len(), 7);
    }

    #[test]
    fn test_valid_moves_excludes_suicide_and_occupied() {
        let mut pos = position(5);
        pos.play(0, Color::Black, 1, 2).unwrap();
        pos.play(1, Color::White, 5, 5).unwrap();
        pos.play(2, Color::Black, 2, 1).unwrap();
        let before = pos.grid().clone();

        let moves = pos.valid_moves();
        let corner = Coord::new(0, 0);
        assert!(moves[&Color::Black].contains(&corner));
        assert!(!moves[&Color::White].contains(&corner));
        assert!(!moves[&Color::Black].contains(&Coord::new(0, 1)));
        assert_eq!(moves[&Color::Black].len(), 25 - 3);
        assert_eq!(moves[&Color::White].len(), 25 - 3 - 1);
        assert_eq!(pos.grid(), &before);
    }

    #[test]
    fn test_valid_moves_respects_region() {
        let pos = Position::new(5, 2).unwrap();
        let moves = pos.valid_moves();
        assert_eq!(moves[&Color::Black].len(), 9);
        assert!(moves[&Color::Black].iter().all(|&c| pos.region().contains(c)));
    }

}
