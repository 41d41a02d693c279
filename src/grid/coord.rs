//! Grid coordinates and the unit-move vocabulary.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Position of a cell on the grid.
///
/// `x` grows eastwards, `y` grows southwards, so `(0, 0)` is the
/// north-west corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to `other`, the minimum number of unit moves
    /// between the two cells on an unobstructed grid.
    pub fn manhattan(self, other: Coord) -> u32 {
        (self.x.abs_diff(other.x) + self.y.abs_diff(other.y)) as u32
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A single agent action: step to an adjacent cell, or stay put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Move {
    North,
    South,
    East,
    West,
    Stay,
}

impl Move {
    /// The four stepping moves in the fixed order used for neighbour
    /// expansion. `Stay` is excluded: it never advances a path.
    pub const CARDINALS: [Move; 4] = [Move::North, Move::East, Move::South, Move::West];

    /// The `(dx, dy)` offset this move applies to a coordinate.
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Move::North => (0, -1),
            Move::South => (0, 1),
            Move::East => (1, 0),
            Move::West => (-1, 0),
            Move::Stay => (0, 0),
        }
    }

    /// The move that takes `from` to `to`, if the two cells are equal or
    /// 4-adjacent. Returns `None` for any other pair.
    pub fn between(from: Coord, to: Coord) -> Option<Move> {
        let dx = to.x as isize - from.x as isize;
        let dy = to.y as isize - from.y as isize;
        match (dx, dy) {
            (0, -1) => Some(Move::North),
            (0, 1) => Some(Move::South),
            (1, 0) => Some(Move::East),
            (-1, 0) => Some(Move::West),
            (0, 0) => Some(Move::Stay),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::North => "North",
            Move::South => "South",
            Move::East => "East",
            Move::West => "West",
            Move::Stay => "Stay",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric_and_zero_on_self() {
        let a = Coord::new(1, 2);
        let b = Coord::new(4, 0);
        assert_eq!(a.manhattan(b), 5);
        assert_eq!(b.manhattan(a), 5);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn between_recovers_each_cardinal() {
        let c = Coord::new(3, 3);
        for mv in Move::CARDINALS {
            let (dx, dy) = mv.offset();
            let next = Coord::new(
                c.x.checked_add_signed(dx).unwrap(),
                c.y.checked_add_signed(dy).unwrap(),
            );
            assert_eq!(Move::between(c, next), Some(mv));
        }
        assert_eq!(Move::between(c, c), Some(Move::Stay));
    }

    #[test]
    fn between_rejects_non_adjacent_cells() {
        assert_eq!(Move::between(Coord::new(0, 0), Coord::new(1, 1)), None);
        assert_eq!(Move::between(Coord::new(0, 0), Coord::new(3, 0)), None);
    }

    #[test]
    fn coord_display() {
        assert_eq!(Coord::new(2, 7).to_string(), "(2, 7)");
    }
}
