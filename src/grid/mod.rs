//! Grid world representation: cell states, coordinates and unit moves.
//!
//! A [`GridMap`] is a rectangular field of [`Cell`] states stored row-major.
//! It is the immutable input of a solve: the planner queries walkability and
//! enumerates item cells, but never writes to the grid while solving.

mod coord;
mod error;

pub use coord::{Coord, Move};
pub use error::GridError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Cell {
    #[default]
    Floor,
    Wall,
    Chest,
    Key,
}

impl Cell {
    /// Whether this cell holds a collectible item (key or chest).
    pub const fn is_item(self) -> bool {
        matches!(self, Cell::Key | Cell::Chest)
    }
}

/// A rectangular grid of [`Cell`] states.
///
/// Cells are stored in a flat vector, row-major (`y * width + x`). The grid
/// is built up front, either programmatically with [`GridMap::set`] or from
/// an ASCII description with [`GridMap::from_ascii`], and then treated as
/// read-only by the planner.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridMap {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl GridMap {
    /// Creates an all-floor grid of the given dimensions.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Self {
        let size = width.checked_mul(height).expect("grid size overflow");
        Self {
            width,
            height,
            cells: vec![Cell::Floor; size],
        }
    }

    /// Parses a grid from its ASCII form.
    ///
    /// One row per line: `.` floor, `#` wall, `K` key, `C` chest. Rows are
    /// trimmed and blank lines skipped, so indented raw-string literals work
    /// as fixtures:
    ///
    /// ```
    /// use keyroute::grid::{Cell, Coord, GridMap};
    ///
    /// let grid = GridMap::from_ascii(
    ///     "
    ///     K..
    ///     .#.
    ///     ..C
    ///     ",
    /// )
    /// .unwrap();
    /// assert_eq!(grid.get(Coord::new(1, 1)), Some(Cell::Wall));
    /// assert_eq!(grid.get(Coord::new(2, 2)), Some(Cell::Chest));
    /// ```
    pub fn from_ascii(text: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let height = rows.len();
        if height == 0 {
            return Err(GridError::Empty);
        }
        let width = rows[0].chars().count();
        if width == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(GridError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let cell = match ch {
                    '.' => Cell::Floor,
                    '#' => Cell::Wall,
                    'K' => Cell::Key,
                    'C' => Cell::Chest,
                    _ => return Err(GridError::UnknownCell { ch, x, y }),
                };
                cells.push(cell);
            }
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, c: Coord) -> bool {
        c.x < self.width && c.y < self.height
    }

    /// The cell at `c`, or `None` if out of bounds.
    pub fn get(&self, c: Coord) -> Option<Cell> {
        if self.in_bounds(c) {
            Some(self.cells[c.y * self.width + c.x])
        } else {
            None
        }
    }

    /// Writes the cell at `c`. Used while assembling a grid; the planner
    /// itself never calls this.
    pub fn set(&mut self, c: Coord, cell: Cell) -> Result<(), GridError> {
        if !self.in_bounds(c) {
            return Err(GridError::OutOfBounds {
                x: c.x,
                y: c.y,
                width: self.width,
                height: self.height,
            });
        }
        self.cells[c.y * self.width + c.x] = cell;
        Ok(())
    }

    /// Whether an agent may occupy `c`: in bounds and not a wall. Item cells
    /// are walkable; stepping onto them is how items are collected.
    pub fn is_walkable(&self, c: Coord) -> bool {
        matches!(self.get(c), Some(cell) if cell != Cell::Wall)
    }

    /// Applies a move to `c`, returning the destination if it stays in
    /// bounds. Walls are not considered here; see [`GridMap::is_walkable`].
    pub fn step(&self, c: Coord, mv: Move) -> Option<Coord> {
        let (dx, dy) = mv.offset();
        let x = c.x.checked_add_signed(dx)?;
        let y = c.y.checked_add_signed(dy)?;
        let next = Coord::new(x, y);
        self.in_bounds(next).then_some(next)
    }

    /// Item cells (keys and chests) in row-major scan order. This order is
    /// what gives item nodes their stable indices.
    pub fn items(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, &cell)| {
            cell.is_item()
                .then(|| (Coord::new(i % self.width, i / self.width), cell))
        })
    }
}
