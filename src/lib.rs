//! keyroute - precedence-constrained route planning on grids
//!
//! An agent on a rectangular grid must collect key cells before opening the
//! chest cells they unlock, walking as little as possible. The planner builds
//! an all-pairs distance graph over the item cells with A*, searches for a
//! cheap visiting order that never opens a chest without a key in hand
//! (greedy construction, 2-opt local search, simulated annealing), and
//! expands the winner into concrete unit moves.
//!
//! ```
//! use keyroute::grid::{Coord, GridMap};
//! use keyroute::RouteSolver;
//!
//! let grid = GridMap::from_ascii(
//!     "
//!     K....
//!     .....
//!     ....C
//!     ",
//! )
//! .unwrap();
//! let plan = RouteSolver::default().plan(&grid, Coord::new(0, 0)).unwrap();
//! assert_eq!(plan.moves.len(), 6);
//! ```

pub mod algorithms;
pub mod graph;
pub mod grid;
pub mod pathfinding;
pub mod route;
pub mod solver;

// Re-export the planning surface for ergonomic use
pub use solver::{RoutePlan, RouteSolver, SolveError, SolverConfig};

/// Index of an item node in the row-major enumeration of a grid's items.
pub type NodeId = usize;
