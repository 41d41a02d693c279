//! Configuration for the route search pipeline.

/// Knobs for the route search pipeline.
///
/// A solve is a pure function of the grid, the start cell and this
/// configuration; in particular the `seed` field makes whole runs
/// reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    // --- Construction ---
    /// Greedy constructions per round; the cheapest seeds 2-opt. Zero is
    /// treated as one.
    pub greedy_restarts: usize,
    /// Independent {greedy → 2-opt} rounds; the best across rounds seeds
    /// annealing. Zero is treated as one.
    pub construction_rounds: usize,

    // --- Annealing ---
    /// Metropolis iterations in the annealing stage.
    pub annealing_steps: usize,
    /// Valid proposals sampled up front to calibrate the temperature range.
    pub calibration_samples: usize,

    // --- Reproducibility ---
    /// Seed for the pipeline's random source.
    pub seed: u64,
}

impl SolverConfig {
    /// Total greedy constructions a solve will run.
    pub fn total_constructions(&self) -> usize {
        self.greedy_restarts.max(1) * self.construction_rounds.max(1)
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            greedy_restarts: 100,
            construction_rounds: 10,
            annealing_steps: 10_000,
            calibration_samples: 100,
            seed: 0,
        }
    }
}
