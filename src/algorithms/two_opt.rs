//! 2-opt local search over the constrained prefix.

use rand::Rng;

use super::RouteImprover;
use crate::graph::ItemGraph;
use crate::route::{is_valid_prefix, route_distance, Route};

/// First-improvement segment-reversal search.
///
/// Scans reversals of prefix segments `[i, k]` in order; the first one that
/// keeps the prefix feasible and strictly shortens it is applied and the
/// scan restarts from the top. Terminates at a local optimum, which the
/// annealing stage then takes further.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoOptImprover;

impl<R: Rng> RouteImprover<R> for TwoOptImprover {
    fn improve(&self, seed: &Route, graph: &ItemGraph, _rng: &mut R) -> Route {
        let prefix_len = graph.prefix_len();
        if prefix_len < 2 {
            return seed.clone();
        }

        let mut best = seed.clone();
        loop {
            let mut improved = false;
            'scan: for i in 0..prefix_len - 1 {
                for k in i + 1..prefix_len {
                    let mut candidate = best.order.clone();
                    candidate[i..=k].reverse();
                    if !is_valid_prefix(&candidate[..prefix_len], graph) {
                        continue;
                    }
                    let distance = route_distance(&candidate[..prefix_len], graph);
                    if distance < best.distance {
                        best = Route {
                            order: candidate,
                            distance,
                        };
                        improved = true;
                        break 'scan;
                    }
                }
            }
            if !improved {
                return best;
            }
        }
    }
}
