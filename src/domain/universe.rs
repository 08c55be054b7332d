//! The automaton engine: owns the grid and evolves it.

use super::{Cell, EvolutionStrategy, Grid, Snapshot};
use crate::config::{DEFAULT_DENSITY, MIN_SIDE, RESIZE_STEP, UniverseConfig};
use crate::error::{Result, UniverseError, check_density};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, trace, warn};

/// A toroidal Game of Life universe.
///
/// `step` computes the next generation into a scratch grid and swaps it in,
/// so the live grid is only ever observed between whole generations.
/// Every mutating call either succeeds or leaves the grid untouched.
pub struct Universe {
    grid: Grid,
    scratch: Grid,
    generation: u64,
    strategy: EvolutionStrategy,
    resize_step: usize,
    min_side: usize,
    rng: StdRng,
}

impl Universe {
    /// Create a `width` x `height` universe, each cell alive with probability `density`.
    pub fn new(width: usize, height: usize, density: f64) -> Result<Self> {
        Self::with_rng(width, height, density, StdRng::from_os_rng())
    }

    /// Same as `new` but reproducible for a given seed
    pub fn seeded(width: usize, height: usize, density: f64, seed: u64) -> Result<Self> {
        Self::with_rng(width, height, density, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(width: usize, height: usize, density: f64, mut rng: StdRng) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(UniverseError::InvalidDimension { width, height });
        }
        let density = check_density(density)?;

        debug!(width, height, density, "creating universe");
        Ok(Self {
            grid: Grid::seeded(width, height, density, &mut rng),
            scratch: Grid::new(width, height),
            generation: 0,
            strategy: EvolutionStrategy::default(),
            resize_step: RESIZE_STEP,
            min_side: MIN_SIDE,
            rng,
        })
    }

    pub fn from_config(config: &UniverseConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut universe = Self::with_rng(config.width, config.height, config.density, rng)?;
        universe.strategy = config.strategy;
        universe.resize_step = config.resize_step;
        universe.min_side = config.min_side;
        Ok(universe)
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Generations computed since creation or the last reseed/resize
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn strategy(&self) -> EvolutionStrategy {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: EvolutionStrategy) {
        self.strategy = strategy;
    }

    pub fn min_side(&self) -> usize {
        self.min_side
    }

    /// Borrowed view of the current generation
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(&self.grid, self.generation)
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Advance exactly one generation.
    pub fn step(&mut self) {
        let (width, height) = self.grid.dimensions();
        if self.strategy.is_parallel_for(width * height) {
            self.grid.evolve_parallel_into(&mut self.scratch);
        } else {
            self.grid.evolve_into(&mut self.scratch);
        }
        std::mem::swap(&mut self.grid, &mut self.scratch);
        self.generation += 1;
        trace!(generation = self.generation, "stepped");
    }

    /// Flip the cell at `(row, col)`. Signed coordinates let callers pass
    /// unclamped input; anything outside the grid is `OutOfBounds`.
    pub fn toggle(&mut self, row: i64, col: i64) -> Result<Cell> {
        let (width, height) = self.grid.dimensions();
        let out_of_bounds = || UniverseError::OutOfBounds { row, col, width, height };
        let r = usize::try_from(row).map_err(|_| out_of_bounds())?;
        let c = usize::try_from(col).map_err(|_| out_of_bounds())?;
        if !self.grid.toggle(r, c) {
            let err = out_of_bounds();
            warn!(%err, "toggle rejected");
            return Err(err);
        }
        self.grid.get(r, c).ok_or_else(out_of_bounds)
    }

    /// Re-randomize every cell at `density`, keeping the dimensions.
    pub fn reseed(&mut self, density: f64) -> Result<()> {
        let density = check_density(density)?;
        self.grid.randomize(density, &mut self.rng);
        self.generation = 0;
        info!(density, "reseeded universe");
        Ok(())
    }

    /// Grow both sides by the resize step and reseed at the default density.
    pub fn resize_grow(&mut self) {
        let width = self.width().saturating_add(self.resize_step);
        let height = self.height().saturating_add(self.resize_step);
        self.resize_to(width, height);
    }

    /// Shrink both sides by the resize step and reseed at the default density.
    /// At the floor this is a no-op and returns false.
    pub fn resize_shrink(&mut self) -> bool {
        match self.try_resize_shrink() {
            Ok(()) => true,
            Err(err) => {
                debug!(%err, "shrink ignored");
                false
            }
        }
    }

    /// Like `resize_shrink`, but reports the floor as `MinimumSizeReached`.
    pub fn try_resize_shrink(&mut self) -> Result<()> {
        let shrink = |side: usize| {
            side.checked_sub(self.resize_step)
                .filter(|&next| next >= self.min_side)
        };
        match (shrink(self.width()), shrink(self.height())) {
            (Some(width), Some(height)) => {
                self.resize_to(width, height);
                Ok(())
            }
            _ => Err(UniverseError::MinimumSizeReached { min: self.min_side }),
        }
    }

    fn resize_to(&mut self, width: usize, height: usize) {
        self.grid = Grid::seeded(width, height, DEFAULT_DENSITY, &mut self.rng);
        self.scratch = Grid::new(width, height);
        self.generation = 0;
        info!(width, height, "resized universe");
    }
}
