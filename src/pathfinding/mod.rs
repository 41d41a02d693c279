//! Shortest paths between grid cells.
//!
//! A* over the 4-connected neighbourhood with unit step cost. The Manhattan
//! distance heuristic is admissible and consistent here, so a cell is settled
//! the first time it leaves the frontier and the first settled goal carries a
//! shortest path.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use thiserror::Error;

use crate::grid::{Coord, GridMap, Move};

/// No move sequence connects the two cells.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("no path connects {start} to {goal}")]
pub struct PathNotFound {
    pub start: Coord,
    pub goal: Coord,
}

/// A shortest path between two cells, including both endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridPath {
    cells: Vec<Coord>,
}

impl GridPath {
    /// The visited cells in order, start first, goal last.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Number of edges traversed: one less than the number of cells.
    pub fn steps(&self) -> u32 {
        (self.cells.len() - 1) as u32
    }

    /// The path as unit moves. Empty when start and goal coincide.
    pub fn moves(&self) -> Vec<Move> {
        self.cells
            .windows(2)
            .map(|w| Move::between(w[0], w[1]).expect("path cells are 4-adjacent"))
            .collect()
    }
}

/// Frontier entry ordered for a min-heap on `f`, then a fixed tie-break so
/// pops are deterministic. `BinaryHeap` is a max-heap, hence the reversed
/// comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frontier {
    f: u32,
    g: u32,
    cell: Coord,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| self.cell.cmp(&other.cell))
            .then_with(|| other.g.cmp(&self.g))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Finds a shortest path from `start` to `goal` over walkable cells.
///
/// Search state (frontier, score and predecessor tables) lives on this call's
/// stack; nothing is shared between invocations.
///
/// # Errors
///
/// [`PathNotFound`] when either endpoint is a wall or out of bounds, or when
/// walls fully separate the two cells.
pub fn find_path(grid: &GridMap, start: Coord, goal: Coord) -> Result<GridPath, PathNotFound> {
    if !grid.is_walkable(start) || !grid.is_walkable(goal) {
        return Err(PathNotFound { start, goal });
    }

    let width = grid.width();
    let size = width * grid.height();
    let idx = |c: Coord| c.y * width + c.x;

    let mut g_score = vec![u32::MAX; size];
    let mut came_from: Vec<Option<Coord>> = vec![None; size];
    let mut frontier = BinaryHeap::new();

    g_score[idx(start)] = 0;
    frontier.push(Frontier {
        f: start.manhattan(goal),
        g: 0,
        cell: start,
    });

    while let Some(Frontier { g, cell, .. }) = frontier.pop() {
        if g > g_score[idx(cell)] {
            // stale entry, the cell was reached more cheaply since
            continue;
        }
        if cell == goal {
            let mut cells = vec![goal];
            let mut current = goal;
            while let Some(prev) = came_from[idx(current)] {
                cells.push(prev);
                current = prev;
            }
            cells.reverse();
            return Ok(GridPath { cells });
        }
        for mv in Move::CARDINALS {
            let Some(next) = grid.step(cell, mv) else {
                continue;
            };
            if !grid.is_walkable(next) {
                continue;
            }
            let tentative = g + 1;
            if tentative < g_score[idx(next)] {
                g_score[idx(next)] = tentative;
                came_from[idx(next)] = Some(cell);
                frontier.push(Frontier {
                    f: tentative + next.manhattan(goal),
                    g: tentative,
                    cell: next,
                });
            }
        }
    }

    Err(PathNotFound { start, goal })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridMap;

    fn grid(text: &str) -> GridMap {
        GridMap::from_ascii(text).unwrap()
    }

    /// Every hop must be a legal unit step between walkable cells.
    fn assert_contiguous(grid: &GridMap, path: &GridPath) {
        for pair in path.cells().windows(2) {
            assert_eq!(pair[0].manhattan(pair[1]), 1);
            assert!(grid.is_walkable(pair[1]));
        }
    }

    #[test]
    fn trivial_path_on_same_cell() {
        let g = grid("...");
        let path = find_path(&g, Coord::new(1, 0), Coord::new(1, 0)).unwrap();
        assert_eq!(path.cells(), &[Coord::new(1, 0)]);
        assert_eq!(path.steps(), 0);
        assert!(path.moves().is_empty());
    }

    #[test]
    fn open_grid_matches_manhattan_distance() {
        let g = grid(
            "
            .....
            .....
            .....
            .....
            .....
            ",
        );
        let start = Coord::new(0, 0);
        let goal = Coord::new(4, 3);
        let path = find_path(&g, start, goal).unwrap();
        assert_eq!(path.steps(), start.manhattan(goal));
        assert_eq!(path.cells().first(), Some(&start));
        assert_eq!(path.cells().last(), Some(&goal));
        assert_contiguous(&g, &path);
    }

    #[test]
    fn detours_around_walls() {
        let g = grid(
            "
            .....
            .###.
            ..#..
            ..#..
            .....
            ",
        );
        let start = Coord::new(0, 2);
        let goal = Coord::new(4, 2);
        let path = find_path(&g, start, goal).unwrap();
        assert!(path.steps() > start.manhattan(goal));
        assert_contiguous(&g, &path);
    }

    #[test]
    fn path_length_is_symmetric() {
        let g = grid(
            "
            ..#..
            ..#..
            .....
            ..#..
            ",
        );
        let a = Coord::new(0, 0);
        let b = Coord::new(4, 3);
        let forward = find_path(&g, a, b).unwrap();
        let backward = find_path(&g, b, a).unwrap();
        assert_eq!(forward.steps(), backward.steps());
    }

    #[test]
    fn separated_cells_report_path_not_found() {
        let g = grid(
            "
            ..#..
            ..#..
            ..#..
            ",
        );
        let start = Coord::new(0, 1);
        let goal = Coord::new(4, 1);
        let err = find_path(&g, start, goal).unwrap_err();
        assert_eq!(err, PathNotFound { start, goal });
        assert_eq!(err.to_string(), "no path connects (0, 1) to (4, 1)");
    }

    #[test]
    fn wall_endpoints_are_rejected() {
        let g = grid(".#.");
        assert!(find_path(&g, Coord::new(0, 0), Coord::new(1, 0)).is_err());
        assert!(find_path(&g, Coord::new(1, 0), Coord::new(2, 0)).is_err());
        assert!(find_path(&g, Coord::new(0, 0), Coord::new(0, 9)).is_err());
    }

    #[test]
    fn repeated_calls_return_the_same_path() {
        let g = grid(
            "
            .....
            .#.#.
            .....
            ",
        );
        let start = Coord::new(0, 2);
        let goal = Coord::new(4, 0);
        let first = find_path(&g, start, goal).unwrap();
        let second = find_path(&g, start, goal).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn moves_replay_to_the_goal() {
        let g = grid(
            "
            ...
            .#.
            ...
            ",
        );
        let start = Coord::new(0, 0);
        let goal = Coord::new(2, 2);
        let path = find_path(&g, start, goal).unwrap();
        let mut at = start;
        for mv in path.moves() {
            at = g.step(at, mv).unwrap();
            assert!(g.is_walkable(at));
        }
        assert_eq!(at, goal);
        assert_eq!(path.moves().len() as u32, path.steps());
    }
}
