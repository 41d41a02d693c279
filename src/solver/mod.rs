//! End-to-end route planning.
//!
//! Wires the stages into one pipeline: build the item graph, construct
//! candidate routes greedily, polish them with 2-opt, refine by annealing,
//! keep the best, and expand the winner into concrete grid moves. Each stage
//! completes before the next begins and all state is owned by the running
//! call, so concurrent solves never interfere.

mod config;


pub use config::SolverConfig;

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::algorithms::{AnnealingRefiner, GreedyConstructor, RouteImprover, TwoOptImprover};
use crate::graph::{GraphError, ItemGraph};
use crate::grid::{Coord, GridMap, Move};
use crate::pathfinding::{find_path, PathNotFound};
use crate::route::Route;

/// Everything a solve produces: the chosen route and its move expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoutePlan {
    /// Winning visiting order together with its prefix distance.
    pub route: Route,
    /// Unit moves realizing the constrained prefix from the start position.
    pub moves: Vec<Move>,
}

/// A planning failure. Either the item graph could not be built, or a leg
/// of the final expansion had no path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    Path(#[from] PathNotFound),
}

/// Precedence-aware route planner.
///
/// Holds only configuration. A solve borrows the grid immutably for its
/// whole duration and keeps no state behind, so each call is a pure
/// function of `(grid, start, config)`.
#[derive(Debug, Clone, Default)]
pub struct RouteSolver {
    config: SolverConfig,
}

impl RouteSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Plans a traversal of `grid` from `start`: item graph, route search,
    /// move expansion.
    ///
    /// A grid without any items yields an empty plan; that is a trivial
    /// success, not an error. With zero keys the route lists the chests but
    /// the move expansion is empty, since no chest can be opened.
    ///
    /// # Errors
    ///
    /// [`SolveError::Graph`] when the partition is infeasible or two item
    /// cells are mutually unreachable; [`SolveError::Path`] when no path
    /// leads from `start` into the route.
    pub fn plan(&self, grid: &GridMap, start: Coord) -> Result<RoutePlan, SolveError> {
        let graph = ItemGraph::build(grid)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            nodes = graph.node_count(),
            keys = graph.key_count(),
            "item graph built"
        );

        if graph.is_empty() {
            return Ok(RoutePlan {
                route: Route {
                    order: Vec::new(),
                    distance: 0,
                },
                moves: Vec::new(),
            });
        }

        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let route = self.search(&graph, &mut rng);
        let moves = expand(grid, start, &route, &graph)?;
        Ok(RoutePlan { route, moves })
    }

    /// Plans and keeps only the moves.
    pub fn solve(&self, grid: &GridMap, start: Coord) -> Result<Vec<Move>, SolveError> {
        self.plan(grid, start).map(|plan| plan.moves)
    }

    /// The search stages: {greedy best-of → 2-opt} rounds keeping the best,
    /// then annealing, then the final comparison.
    fn search(&self, graph: &ItemGraph, rng: &mut StdRng) -> Route {
        let greedy = GreedyConstructor::new(self.config.greedy_restarts);
        let two_opt = TwoOptImprover;

        let mut best = two_opt.improve(&greedy.best_route(graph, rng), graph, rng);
        for _ in 1..self.config.construction_rounds {
            let candidate = two_opt.improve(&greedy.best_route(graph, rng), graph, rng);
            if candidate.distance < best.distance {
                best = candidate;
            }
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(distance = best.distance, "construction rounds finished");

        let annealer = AnnealingRefiner::new(
            self.config.annealing_steps,
            self.config.calibration_samples,
        );
        let annealed = annealer.improve(&best, graph, rng);
        // the annealed route wins ties; 2-opt is kept only when strictly better
        if annealed.distance <= best.distance {
            best = annealed;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(distance = best.distance, "route search finished");
        best
    }
}

/// Expands the route's constrained prefix into unit moves, one pathfinder
/// hop per consecutive node pair. Each hop contributes its moves rather than
/// its cells, so shared endpoints are not duplicated.
fn expand(
    grid: &GridMap,
    start: Coord,
    route: &Route,
    graph: &ItemGraph,
) -> Result<Vec<Move>, SolveError> {
    let mut moves = Vec::new();
    let mut at = start;
    for &node in route.prefix(graph) {
        let target = graph.coord(node);
        let hop = find_path(grid, at, target)?;
        moves.extend(hop.moves());
        at = target;
    }
    Ok(moves)
}
