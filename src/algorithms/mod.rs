pub mod annealing;
pub mod greedy;
pub mod two_opt;

pub use annealing::AnnealingRefiner;
pub use greedy::GreedyConstructor;
pub use two_opt::TwoOptImprover;

use rand::Rng;

use crate::graph::ItemGraph;
use crate::route::Route;

/// Algorithm for refining an already-feasible route.
///
/// # Type Parameters
///
/// * `R` - Random source driving any stochastic choices
pub trait RouteImprover<R: Rng> {
    /// Refine `seed` against the distances in `graph`.
    ///
    /// # Arguments
    ///
    /// * `seed` - A feasible route to start from
    /// * `graph` - Item graph the route is written over
    /// * `rng` - Random source; a fixed seed gives a fixed result
    ///
    /// # Returns
    ///
    /// A feasible route whose prefix distance is never above the seed's.
    /// When nothing better is found the seed comes back unchanged.
    fn improve(&self, seed: &Route, graph: &ItemGraph, rng: &mut R) -> Route;
}
