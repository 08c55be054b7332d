//! Selects how a generation is computed.
//!
//! Every strategy produces the same next generation; they differ only in
//! whether rows are evaluated on one thread or spread over rayon's pool.

/// Grids at least this many cells large go parallel under `Auto`.
pub const PARALLEL_THRESHOLD: usize = 256 * 256;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EvolutionStrategy {
    /// Row by row on the calling thread
    Serial,
    /// Rows spread across rayon's thread pool
    Parallel,
    /// Serial for small grids, parallel from `PARALLEL_THRESHOLD` cells up
    #[default]
    Auto,
}

impl EvolutionStrategy {
    pub fn all() -> Vec<EvolutionStrategy> {
        vec![
            EvolutionStrategy::Serial,
            EvolutionStrategy::Parallel,
            EvolutionStrategy::Auto,
        ]
    }

    /// The strategy after this one in `all()`, wrapping around
    pub fn next(self) -> EvolutionStrategy {
        let all = Self::all();
        let pos = all.iter().position(|&s| s == self).unwrap_or(0);
        all[(pos + 1) % all.len()]
    }

    /// Display name for UI
    pub fn name(&self) -> &'static str {
        match self {
            EvolutionStrategy::Serial => "Serial",
            EvolutionStrategy::Parallel => "Parallel",
            EvolutionStrategy::Auto => "Auto",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EvolutionStrategy::Serial => "One thread, row-major sweep",
            EvolutionStrategy::Parallel => "One rayon task per row",
            EvolutionStrategy::Auto => "Parallel once the grid is large enough",
        }
    }

    /// Whether a grid of `cell_count` cells should be evolved in parallel
    pub fn is_parallel_for(&self, cell_count: usize) -> bool {
        match self {
            EvolutionStrategy::Serial => false,
            EvolutionStrategy::Parallel => true,
            EvolutionStrategy::Auto => cell_count >= PARALLEL_THRESHOLD,
        }
    }
}
