//! Errors raised while building the item graph.

use thiserror::Error;

use crate::pathfinding::PathNotFound;

/// Reasons an item graph cannot be built from a grid.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// More keys than chests. Every key must open a chest of its own, so no
    /// valid visiting order exists.
    #[error("infeasible item partition: {keys} keys but only {chests} chests")]
    InfeasiblePartition { keys: usize, chests: usize },

    /// Two item cells with no connecting path.
    #[error(transparent)]
    Unreachable(#[from] PathNotFound),
}
