//! Simulated-annealing refinement of a feasible route.
//!
//! Proposals either swap two route positions or reverse a contiguous
//! segment. A proposal whose constrained prefix breaks the key balance is
//! discarded before it is ever scored; valid proposals are accepted by the
//! Metropolis rule under an exponentially cooling temperature. The best
//! route seen anywhere along the walk is what comes back, so exploration
//! may regress but the answer never does.

use rand::Rng;

use super::RouteImprover;
use crate::graph::ItemGraph;
use crate::route::{is_valid_prefix, route_distance, Route};
use crate::NodeId;

/// Accepting a mean-magnitude uphill move with this probability fixes the
/// starting temperature.
const START_ACCEPTANCE: f64 = 0.98;
/// Final temperature as a fraction of the mean move delta; low enough that
/// uphill moves are effectively always rejected at the end of the run.
const END_TEMPERATURE_RATIO: f64 = 1e-3;

/// Temperature bounds fitted to one seed's neighbourhood.
#[derive(Debug, Clone, Copy)]
struct Schedule {
    t_max: f64,
    t_min: f64,
}

/// Metropolis refiner with an auto-calibrated cooling schedule.
#[derive(Debug, Clone)]
pub struct AnnealingRefiner {
    /// Metropolis iterations per run. The budget is fixed up front; the
    /// refiner always terminates after this many steps.
    pub steps: usize,
    /// Valid proposals sampled to fit the temperature range.
    pub calibration_samples: usize,
}

impl AnnealingRefiner {
    pub fn new(steps: usize, calibration_samples: usize) -> Self {
        Self {
            steps,
            calibration_samples,
        }
    }

    /// One swap or reversal applied to a copy of `order`, or `None` when the
    /// mutated prefix breaks the key balance.
    ///
    /// Swaps may pick the same position twice (a no-op proposal); reversals
    /// need at least three nodes to differ from a swap, so shorter routes
    /// fall back to swaps only.
    fn propose<R: Rng>(
        order: &[NodeId],
        prefix_len: usize,
        graph: &ItemGraph,
        rng: &mut R,
    ) -> Option<Vec<NodeId>> {
        let n = order.len();
        let mut candidate = order.to_vec();
        if n >= 3 && rng.gen::<f64>() < 0.5 {
            let len = rng.gen_range(2..n);
            let i = rng.gen_range(0..=n - len);
            candidate[i..i + len].reverse();
        } else {
            let a = rng.gen_range(0..n);
            let b = rng.gen_range(0..n);
            candidate.swap(a, b);
        }
        is_valid_prefix(&candidate[..prefix_len], graph).then_some(candidate)
    }

    /// Fits the temperature range from the mean absolute cost delta of
    /// sampled valid proposals. Sampling never touches the seed itself.
    /// `None` when every sampled proposal leaves the cost unchanged; such a
    /// neighbourhood has nothing worth exploring.
    fn calibrate<R: Rng>(&self, seed: &Route, graph: &ItemGraph, rng: &mut R) -> Option<Schedule> {
        let prefix_len = graph.prefix_len();
        let mut total = 0.0_f64;
        let mut count = 0u32;
        for _ in 0..self.calibration_samples {
            if let Some(candidate) = Self::propose(&seed.order, prefix_len, graph, rng) {
                let distance = route_distance(&candidate[..prefix_len], graph);
                let delta = (f64::from(distance) - f64::from(seed.distance)).abs();
                if delta > 0.0 {
                    total += delta;
                    count += 1;
                }
            }
        }
        if count == 0 {
            return None;
        }
        let mean = total / f64::from(count);
        Some(Schedule {
            t_max: mean / -START_ACCEPTANCE.ln(),
            t_min: mean * END_TEMPERATURE_RATIO,
        })
    }
}

impl Default for AnnealingRefiner {
    fn default() -> Self {
        Self::new(10_000, 100)
    }
}

impl<R: Rng> RouteImprover<R> for AnnealingRefiner {
    fn improve(&self, seed: &Route, graph: &ItemGraph, rng: &mut R) -> Route {
        let prefix_len = graph.prefix_len();
        if prefix_len == 0 || seed.order.len() < 2 || self.steps == 0 {
            return seed.clone();
        }
        let Some(schedule) = self.calibrate(seed, graph, rng) else {
            return seed.clone();
        };
        // exponential interpolation from t_max down to t_min
        let cooling = (schedule.t_min / schedule.t_max).ln();

        let mut current = seed.clone();
        let mut best = seed.clone();
        for step in 0..self.steps {
            let temperature =
                schedule.t_max * (cooling * step as f64 / self.steps as f64).exp();
            let Some(candidate) = Self::propose(&current.order, prefix_len, graph, rng) else {
                continue;
            };
            let distance = route_distance(&candidate[..prefix_len], graph);
            let delta = f64::from(distance) - f64::from(current.distance);
            if delta <= 0.0 || rng.gen::<f64>() < (-delta / temperature).exp() {
                current = Route {
                    order: candidate,
                    distance,
                };
                if current.distance < best.distance {
                    best = current.clone();
                }
            }
        }
        best
    }
}
