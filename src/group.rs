//! Group search: liberty counting by flood fill.
//!
//! A search starts from a stone and walks its 4-connected same-colour
//! neighbours with an explicit stack. Every cell it touches is classified in
//! a scratch buffer of [`Mark`]s:
//!
//! - empty cells count as one liberty each and stop the fill,
//! - same-colour stones join the group and continue the fill,
//! - opposing stones stop the fill and count nothing.
//!
//! Because each cell is visited at most once per search, a liberty shared by
//! several members of the group is only counted once. The buffer is reset at
//! the start of every top-level search, so no state leaks between calls; it
//! stays readable afterwards so callers can list the group's members.

use crate::board::{Color, Coord, Grid};

/// Classification of a cell during one search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mark {
    Unvisited,
    Liberty,
    Own,
    Enemy,
}

/// Reusable flood-fill state (the visited-marks grid).
#[derive(Clone, Debug)]
pub struct GroupSearch {
    size: usize,
    marks: Vec<Mark>,
    stack: Vec<Coord>,
    /// Seed and colour of the latest search, if any.
    seed: Option<(Coord, Color)>,
}

impl GroupSearch {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            marks: vec![Mark::Unvisited; size * size],
            stack: Vec::with_capacity(size * size),
            seed: None,
        }
    }

    fn idx(&self, c: Coord) -> usize {
        c.y * self.size + c.x
    }

    fn reset(&mut self) {
        self.marks.fill(Mark::Unvisited);
        self.stack.clear();
        self.seed = None;
    }

    /// Count the liberties of the group containing `start`.
    ///
    /// Returns `None` if `start` is empty. Leaves the marks of this search in
    /// place for [`members`](Self::members).
    pub fn count_liberties(&mut self, grid: &Grid, start: Coord) -> Option<usize> {
        debug_assert_eq!(grid.size(), self.size);
        self.reset();
        let color = grid.get(start)?;
        self.seed = Some((start, color));

        let i = self.idx(start);
        self.marks[i] = Mark::Own;
        self.stack.extend(grid.neighbors(start));

        let mut liberties = 0;
        while let Some(c) = self.stack.pop() {
            let i = self.idx(c);
            if self.marks[i] != Mark::Unvisited {
                continue;
            }
            match grid.get(c) {
                None => {
                    self.marks[i] = Mark::Liberty;
                    liberties += 1;
                }
                Some(stone) if stone == color => {
                    self.marks[i] = Mark::Own;
                    self.stack.extend(grid.neighbors(c));
                }
                Some(_) => self.marks[i] = Mark::Enemy,
            }
        }
        Some(liberties)
    }

    /// Mark recorded for `c` by the latest search.
    pub fn mark(&self, c: Coord) -> Mark {
        self.marks[self.idx(c)]
    }

    /// Colour of the group found by the latest search.
    pub fn color(&self) -> Option<Color> {
        self.seed.map(|(_, color)| color)
    }

    /// Members of the group found by the latest search, row by row.
    pub fn members(&self) -> Vec<Coord> {
        self.marks
            .iter()
            .enumerate()
            .filter(|&(_, &m)| m == Mark::Own)
            .map(|(i, _)| Coord::new(i % self.size, i / self.size))
            .collect()
    }

    /// Members of the group containing `c`.
    ///
    /// Reuses the latest search when `c` already belongs to it, otherwise
    /// searches again from `c`. Empty for an empty cell.
    pub fn group_members(&mut self, grid: &Grid, c: Coord) -> Vec<Coord> {
        let searched = self.color().is_some_and(|color| grid.get(c) == Some(color))
            && self.mark(c) == Mark::Own;
        if !searched && self.count_liberties(grid, c).is_none() {
            return Vec::new();
        }
        self.members()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from(rows: &[&str]) -> Grid {
        let mut grid = Grid::new(rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let cell = match ch {
                    'B' => Some(Color::Black),
                    'W' => Some(Color::White),
                    _ => None,
                };
                grid.set(Coord::new(x, y), cell);
            }
        }
        grid
    }

    #[test]
    fn test_empty_start_is_not_applicable() {
        let grid = Grid::new(5);
        let mut search = GroupSearch::new(5);
        assert_eq!(search.count_liberties(&grid, Coord::new(2, 2)), None);
        assert!(search.members().is_empty());
    }

    #[test]
    fn test_single_stone_liberties() {
        let grid = grid_from(&["B....", ".....", "..B..", ".....", "....B"]);
        let mut search = GroupSearch::new(5);
        assert_eq!(search.count_liberties(&grid, Coord::new(0, 0)), Some(2));
        assert_eq!(search.count_liberties(&grid, Coord::new(2, 2)), Some(4));
        assert_eq!(search.count_liberties(&grid, Coord::new(4, 4)), Some(2));
    }

    #[test]
    fn test_shared_liberties_counted_once() {
        // The L-shaped group touches (1, 1) from two members.
        let grid = grid_from(&["BB...", "B....", ".....", ".....", "....."]);
        let mut search = GroupSearch::new(5);
        assert_eq!(search.count_liberties(&grid, Coord::new(0, 0)), Some(3));
    }

    #[test]
    fn test_enemy_stones_block_liberties() {
        let grid = grid_from(&[".W...", "WBW..", ".W...", ".....", "....."]);
        let mut search = GroupSearch::new(5);
        assert_eq!(search.count_liberties(&grid, Coord::new(1, 1)), Some(0));
        assert_eq!(search.mark(Coord::new(0, 1)), Mark::Enemy);
        assert_eq!(search.mark(Coord::new(0, 0)), Mark::Unvisited);
    }

    #[test]
    fn test_members_of_chain() {
        let grid = grid_from(&["BBW..", "..B..", ".....", ".....", "....."]);
        let mut search = GroupSearch::new(5);
        search.count_liberties(&grid, Coord::new(0, 0));
        assert_eq!(search.members(), vec![Coord::new(0, 0), Coord::new(1, 0)]);
        assert_eq!(search.color(), Some(Color::Black));
    }

    #[test]
    fn test_marks_do_not_leak_between_searches() {
        let grid = grid_from(&["BB...", ".....", "...W.", ".....", "....."]);
        let mut search = GroupSearch::new(5);
        search.count_liberties(&grid, Coord::new(0, 0));
        search.count_liberties(&grid, Coord::new(3, 2));
        assert_eq!(search.members(), vec![Coord::new(3, 2)]);
        assert_eq!(search.mark(Coord::new(0, 0)), Mark::Unvisited);
    }

    #[test]
    fn test_group_members_searches_when_needed() {
        let grid = grid_from(&["BB...", ".....", "..WW.", ".....", "....."]);
        let mut search = GroupSearch::new(5);
        search.count_liberties(&grid, Coord::new(0, 0));
        // Different group: must search again.
        assert_eq!(
            search.group_members(&grid, Coord::new(3, 2)),
            vec![Coord::new(2, 2), Coord::new(3, 2)]
        );
        // Same group as the latest search.
        assert_eq!(
            search.group_members(&grid, Coord::new(2, 2)),
            vec![Coord::new(2, 2), Coord::new(3, 2)]
        );
        assert!(search.group_members(&grid, Coord::new(4, 4)).is_empty());
    }
}
