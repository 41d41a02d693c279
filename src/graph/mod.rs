//! The item graph: distance structure the route optimizers work on.
//!
//! Building the graph scans a grid for key and chest cells, assigns each a
//! stable node index in row-major scan order, and fills a dense all-pairs
//! matrix of shortest grid distances. The matrix is symmetric (grid moves
//! are reversible), has a zero diagonal, and is computed once per solve.
//!
//! # Complexity
//!
//! O(n²) pathfinding calls for n item nodes. Item counts are small, so the
//! whole matrix is simply rebuilt whenever the grid changes.

mod error;

pub use error::GraphError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::grid::{Cell, Coord, GridMap};
use crate::pathfinding::find_path;
use crate::NodeId;

/// Role of an item node in the precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NodeKind {
    Key,
    Chest,
}

/// Distance matrix and key/chest partition over the item cells of one grid.
///
/// Node indices are dense (`0..node_count`) and stable for the lifetime of
/// the graph; they are the vocabulary every route is written in.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemGraph {
    coords: Vec<Coord>,
    kinds: Vec<NodeKind>,
    matrix: Vec<u32>,
    key_count: usize,
}

impl ItemGraph {
    /// Builds the graph for `grid`.
    ///
    /// The partition invariant is checked before any pathfinding runs, so an
    /// infeasible grid fails fast without touching the matrix.
    ///
    /// # Errors
    ///
    /// [`GraphError::InfeasiblePartition`] when keys outnumber chests,
    /// [`GraphError::Unreachable`] when two item cells are separated by
    /// walls.
    pub fn build(grid: &GridMap) -> Result<Self, GraphError> {
        let mut coords = Vec::new();
        let mut kinds = Vec::new();
        for (coord, cell) in grid.items() {
            coords.push(coord);
            kinds.push(match cell {
                Cell::Key => NodeKind::Key,
                _ => NodeKind::Chest,
            });
        }

        let key_count = kinds.iter().filter(|&&k| k == NodeKind::Key).count();
        let chest_count = kinds.len() - key_count;
        if chest_count < key_count {
            return Err(GraphError::InfeasiblePartition {
                keys: key_count,
                chests: chest_count,
            });
        }

        let n = coords.len();
        let mut matrix = vec![0u32; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let steps = find_path(grid, coords[i], coords[j])?.steps();
                matrix[i * n + j] = steps;
                matrix[j * n + i] = steps;
            }
        }

        Ok(Self {
            coords,
            kinds,
            matrix,
            key_count,
        })
    }

    /// Assembles a graph from already-known parts. Test seam for synthetic
    /// matrices that no grid produced.
    #[cfg(test)]
    pub(crate) fn from_parts(coords: Vec<Coord>, kinds: Vec<NodeKind>, matrix: Vec<u32>) -> Self {
        debug_assert_eq!(coords.len(), kinds.len());
        debug_assert_eq!(matrix.len(), kinds.len() * kinds.len());
        let key_count = kinds.iter().filter(|&&k| k == NodeKind::Key).count();
        Self {
            coords,
            kinds,
            matrix,
            key_count,
        }
    }

    /// Nodes strung along a west-east line at the given x positions, with
    /// distances equal to coordinate differences. Test seam.
    #[cfg(test)]
    pub(crate) fn line(kinds: &[NodeKind], xs: &[usize]) -> Self {
        let n = kinds.len();
        debug_assert_eq!(xs.len(), n);
        let mut matrix = vec![0u32; n * n];
        for i in 0..n {
            for j in 0..n {
                matrix[i * n + j] = xs[i].abs_diff(xs[j]) as u32;
            }
        }
        let coords = xs.iter().map(|&x| Coord::new(x, 0)).collect();
        Self::from_parts(coords, kinds.to_vec(), matrix)
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.kinds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    #[inline]
    pub fn key_count(&self) -> usize {
        self.key_count
    }

    #[inline]
    pub fn chest_count(&self) -> usize {
        self.kinds.len() - self.key_count
    }

    /// Length of the constrained prefix: all keys plus one chest per key.
    #[inline]
    pub fn prefix_len(&self) -> usize {
        2 * self.key_count
    }

    /// Shortest grid distance between two nodes, in steps.
    #[inline]
    pub fn distance(&self, a: NodeId, b: NodeId) -> u32 {
        self.matrix[a * self.kinds.len() + b]
    }

    pub fn kind(&self, node: NodeId) -> NodeKind {
        self.kinds[node]
    }

    pub fn coord(&self, node: NodeId) -> Coord {
        self.coords[node]
    }

    /// Key node indices in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.kinds
            .iter()
            .enumerate()
            .filter_map(|(i, &k)| (k == NodeKind::Key).then_some(i))
    }

    /// Chest node indices in ascending order.
    pub fn chests(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.kinds
            .iter()
            .enumerate()
            .filter_map(|(i, &k)| (k == NodeKind::Chest).then_some(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridMap;

    fn graph(text: &str) -> ItemGraph {
        ItemGraph::build(&GridMap::from_ascii(text).unwrap()).unwrap()
    }

    #[test]
    fn test_indices_follow_row_major_scan() {
        let g = graph(
            "
            .C.
            K.K
            ..C
            ",
        );
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.kind(0), NodeKind::Chest);
        assert_eq!(g.coord(0), Coord::new(1, 0));
        assert_eq!(g.kind(1), NodeKind::Key);
        assert_eq!(g.coord(1), Coord::new(0, 1));
        assert_eq!(g.kind(2), NodeKind::Key);
        assert_eq!(g.coord(2), Coord::new(2, 1));
        assert_eq!(g.kind(3), NodeKind::Chest);
        assert_eq!(g.coord(3), Coord::new(2, 2));
    }

    #[test]
    fn test_partition_counts_and_iterators() {
        let g = graph(
            "
            KC
            CK
            CC
            ",
        );
        assert_eq!(g.key_count(), 2);
        assert_eq!(g.chest_count(), 4);
        assert_eq!(g.prefix_len(), 4);
        assert_eq!(g.keys().collect::<Vec<_>>(), vec![0, 3]);
        assert_eq!(g.chests().collect::<Vec<_>>(), vec![1, 2, 4, 5]);
    }

    #[test]
    fn test_matrix_is_symmetric_with_zero_diagonal() {
        let g = graph(
            "
            K.#C
            ....
            C#.K
            ",
        );
        for a in 0..g.node_count() {
            assert_eq!(g.distance(a, a), 0);
            for b in 0..g.node_count() {
                assert_eq!(g.distance(a, b), g.distance(b, a));
            }
        }
    }

    #[test]
    fn test_matrix_records_true_walk_distances() {
        // Key at (0, 0), chest at (2, 0), full-height wall between them.
        let g = graph(
            "
            K#C
            .#.
            ...
            ",
        );
        assert_eq!(g.distance(0, 1), 6);
    }

    #[test]
    fn test_more_keys_than_chests_is_infeasible() {
        let err = ItemGraph::build(&GridMap::from_ascii("K.K\n..C").unwrap()).unwrap_err();
        assert_eq!(err, GraphError::InfeasiblePartition { keys: 2, chests: 1 });
    }

    #[test]
    fn test_partition_check_runs_before_pathfinding() {
        // The lone chest is sealed in, but the partition violation is what
        // gets reported: no pathfinding ran.
        let err = ItemGraph::build(
            &GridMap::from_ascii(
                "
                K.K..
                .###.
                .#C#.
                .###.
                ",
            )
            .unwrap(),
        )
        .unwrap_err();
        assert_eq!(err, GraphError::InfeasiblePartition { keys: 2, chests: 1 });
    }

    #[test]
    fn test_enclosed_item_is_unreachable() {
        let err = ItemGraph::build(
            &GridMap::from_ascii(
                "
                K....
                .###.
                .#C#.
                .###.
                ",
            )
            .unwrap(),
        )
        .unwrap_err();
        assert!(matches!(err, GraphError::Unreachable(_)));
    }

    #[test]
    fn test_itemless_grid_builds_an_empty_graph() {
        let g = graph("...\n...");
        assert!(g.is_empty());
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.prefix_len(), 0);
    }
}
