//! Fixed-size 2D grid of cells.
//!
//! Cells are stored row-major as `Option<Color>` (`None` = empty). All
//! coordinates here are 0-based; the 1-based coordinates used by callers are
//! converted at the [`Position`](crate::position::Position) boundary.

use std::fmt;

use crate::constants::DELTA;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The other colour.
    pub fn opposite(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Property letter used in SGF move nodes and on the console.
    pub fn sgf_letter(self) -> char {
        match self {
            Color::Black => 'B',
            Color::White => 'W',
        }
    }

    /// Colour playing at a given move index, Black first.
    pub fn for_index(index: usize) -> Color {
        if index % 2 == 0 { Color::Black } else { Color::White }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sgf_letter())
    }
}

/// A 0-based board coordinate: `x` is the column, `y` the row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Convert 1-based external coordinates. Returns `None` for a zero component.
    pub fn from_one_based(x: usize, y: usize) -> Option<Self> {
        Some(Self::new(x.checked_sub(1)?, y.checked_sub(1)?))
    }

    pub fn to_one_based(self) -> (usize, usize) {
        (self.x + 1, self.y + 1)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x, y) = self.to_one_based();
        write!(f, "[{x}, {y}]")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<Color>>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn idx(&self, c: Coord) -> usize {
        debug_assert!(self.contains(c), "{c} is off a {0}x{0} board", self.size);
        c.y * self.size + c.x
    }

    /// Whether `c` lies on the board.
    pub fn contains(&self, c: Coord) -> bool {
        c.x < self.size && c.y < self.size
    }

    /// Cell contents. The coordinate must be in bounds.
    pub fn get(&self, c: Coord) -> Option<Color> {
        self.cells[self.idx(c)]
    }

    pub fn set(&mut self, c: Coord, state: Option<Color>) {
        let i = self.idx(c);
        self.cells[i] = state;
    }

    pub fn in_bounds(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size && (y as usize) < self.size
    }

    /// In-bounds orthogonal neighbours of `c`.
    pub fn neighbors(&self, c: Coord) -> impl Iterator<Item = Coord> + '_ {
        DELTA.iter().filter_map(move |&(dx, dy)| {
            let nx = c.x as isize + dx;
            let ny = c.y as isize + dy;
            self.in_bounds(nx, ny)
                .then(|| Coord::new(nx as usize, ny as usize))
        })
    }

    /// Every coordinate holding a stone, row by row.
    pub fn stones(&self) -> impl Iterator<Item = (Coord, Color)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, cell)| {
            cell.map(|color| (Coord::new(i % self.size, i / self.size), color))
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                let ch = match self.get(Coord::new(x, y)) {
                    Some(color) => color.sgf_letter(),
                    None => '.',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
