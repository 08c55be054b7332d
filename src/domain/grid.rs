use super::Cell;
use rand::Rng;
use rayon::prelude::*;

/// Grid manages the 2D cellular automaton grid.
///
/// Cells are stored row-major, so the cell at `(row, col)` lives at
/// `row * width + col` and `cells.len() == width * height` always holds.
/// The topology is a torus: the top edge neighbors the bottom edge and the
/// left edge neighbors the right edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Create a grid where each cell is alive with probability `density`.
    /// The caller is responsible for `density` lying in `[0, 1]`.
    pub fn seeded<R: Rng + ?Sized>(width: usize, height: usize, density: f64, rng: &mut R) -> Self {
        let mut grid = Self::new(width, height);
        grid.randomize(density, rng);
        grid
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get grid dimensions as `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Convert 2D coordinates to 1D index
    pub const fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.contains(row, col)
            .then(|| self.cells[self.index(row, col)])
    }

    /// Set cell at position, ignoring coordinates outside the grid
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if self.contains(row, col) {
            let idx = self.index(row, col);
            self.cells[idx] = cell;
        }
    }

    /// Flip a single cell. Returns false (and changes nothing) when the
    /// coordinate is outside the grid.
    pub fn toggle(&mut self, row: usize, col: usize) -> bool {
        if !self.contains(row, col) {
            return false;
        }
        let idx = self.index(row, col);
        self.cells[idx] = self.cells[idx].toggle();
        true
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Re-roll every cell independently, alive with probability `density`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, density: f64, rng: &mut R) {
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from_alive(rng.random_bool(density)));
    }

    /// Previous and next index along an axis of length `len`, wrapping at the ends.
    const fn wrap(i: usize, len: usize) -> (usize, usize) {
        let prev = if i == 0 { len - 1 } else { i - 1 };
        let next = if i + 1 == len { 0 } else { i + 1 };
        (prev, next)
    }

    /// Count live neighbors using toroidal wrapping (grid wraps like a torus).
    /// On a side of length 1 or 2 the same cell may be counted more than once.
    pub fn live_neighbor_count(&self, row: usize, col: usize) -> u8 {
        let (north, south) = Self::wrap(row, self.height);
        let (west, east) = Self::wrap(col, self.width);

        [
            (north, west), (north, col), (north, east),
            (row, west),                 (row, east),
            (south, west), (south, col), (south, east),
        ]
        .into_iter()
        .filter(|&(r, c)| self.cells[self.index(r, c)].is_alive())
        .count() as u8
    }

    /// Write the next state of one row into `out`, reading only `self`.
    fn evolve_row(&self, row: usize, out: &mut [Cell]) {
        for (col, next) in out.iter_mut().enumerate() {
            let current = self.cells[self.index(row, col)];
            *next = current.evolve(self.live_neighbor_count(row, col));
        }
    }

    /// Make `other` the same shape as `self` without touching `self`.
    fn shape_buffer(&self, other: &mut Grid) {
        other.width = self.width;
        other.height = self.height;
        other.cells.resize(self.cells.len(), Cell::Dead);
    }

    /// Compute the whole next generation into `next` (serial).
    /// `self` is never written, so no cell observes an updated neighbor.
    pub fn evolve_into(&self, next: &mut Grid) {
        self.shape_buffer(next);
        if self.cells.is_empty() {
            return;
        }
        next.cells
            .chunks_mut(self.width)
            .enumerate()
            .for_each(|(row, out)| self.evolve_row(row, out));
    }

    /// Parallel evolution using rayon, one task per row.
    /// Produces exactly the same grid as `evolve_into`.
    pub fn evolve_parallel_into(&self, next: &mut Grid) {
        self.shape_buffer(next);
        if self.cells.is_empty() {
            return;
        }
        next.cells
            .par_chunks_mut(self.width)
            .enumerate()
            .for_each(|(row, out)| self.evolve_row(row, out));
    }

    /// Pure functional evolution - returns a new grid
    pub fn evolve(&self) -> Self {
        let mut next = Self::new(self.width, self.height);
        self.evolve_into(&mut next);
        next
    }

    /// Iterate over all cells with their `(row, col)` positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (idx / width, idx % width, cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn with_alive(width: usize, height: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(width, height);
        for &(row, col) in alive {
            grid.set(row, col, Cell::Alive);
        }
        grid
    }

    #[test]
    fn test_index_is_row_major() {
        let grid = Grid::new(7, 3);
        assert_eq!(grid.index(0, 0), 0);
        assert_eq!(grid.index(0, 6), 6);
        assert_eq!(grid.index(1, 0), 7);
        assert_eq!(grid.index(2, 6), 20);
        assert_eq!(grid.cells().len(), 21);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::new(4, 4);
        assert_eq!(grid.get(3, 3), Some(Cell::Dead));
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(grid.get(0, 4), None);
    }

    #[test]
    fn test_neighbor_count_interior() {
        // Horizontal blinker on row 5
        let grid = with_alive(10, 10, &[(5, 4), (5, 5), (5, 6)]);
        assert_eq!(grid.live_neighbor_count(5, 5), 2);
        assert_eq!(grid.live_neighbor_count(4, 5), 3);
        assert_eq!(grid.live_neighbor_count(6, 5), 3);
        assert_eq!(grid.live_neighbor_count(0, 0), 0);
    }

    #[test]
    fn test_neighbor_count_wraps() {
        let (w, h) = (6, 5);
        let grid = with_alive(w, h, &[(0, 0)]);

        for (row, col) in [
            (h - 1, w - 1),
            (h - 1, 0),
            (h - 1, 1),
            (0, w - 1),
            (0, 1),
            (1, w - 1),
            (1, 0),
            (1, 1),
        ] {
            assert_eq!(grid.live_neighbor_count(row, col), 1, "at ({row}, {col})");
        }
        assert_eq!(grid.live_neighbor_count(2, 2), 0);
        assert_eq!(grid.live_neighbor_count(0, 0), 0);
    }

    #[test]
    fn test_toggle_only_touches_target() {
        let mut grid = with_alive(5, 5, &[(1, 1), (3, 3)]);
        let before = grid.clone();

        assert!(grid.toggle(2, 2));
        assert_eq!(grid.get(2, 2), Some(Cell::Alive));
        assert_eq!(grid.population(), 3);

        assert!(grid.toggle(2, 2));
        assert_eq!(grid, before);

        assert!(!grid.toggle(5, 0));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_all_dead_stays_dead() {
        let grid = Grid::new(12, 9);
        assert_eq!(grid.evolve().population(), 0);
    }

    #[test]
    fn test_block_still_life() {
        let grid = with_alive(8, 8, &[(3, 3), (3, 4), (4, 3), (4, 4)]);
        assert_eq!(grid.evolve(), grid);
    }

    #[test]
    fn test_blinker_period_two() {
        let horizontal = with_alive(9, 9, &[(4, 3), (4, 4), (4, 5)]);
        let vertical = with_alive(9, 9, &[(3, 4), (4, 4), (5, 4)]);

        let next = horizontal.evolve();
        assert_eq!(next, vertical);
        assert_eq!(next.evolve(), horizontal);
    }

    #[test]
    fn test_glider_crosses_edge() {
        // Glider heading south-east; after 4 generations it moves by (1, 1),
        // which pushes it across both edges of a 5x5 torus.
        let glider = [(2, 3), (3, 4), (4, 2), (4, 3), (4, 4)];
        let mut grid = with_alive(5, 5, &glider);
        for _ in 0..4 {
            grid = grid.evolve();
        }
        let shifted: Vec<_> = glider.iter().map(|&(r, c)| ((r + 1) % 5, (c + 1) % 5)).collect();
        assert_eq!(grid, with_alive(5, 5, &shifted));
    }

    #[test]
    fn test_evolve_into_reuses_buffer() {
        let grid = with_alive(6, 4, &[(1, 1), (1, 2), (1, 3)]);
        let mut next = Grid::new(2, 2);
        grid.evolve_into(&mut next);
        assert_eq!(next.dimensions(), (6, 4));
        assert_eq!(next, grid.evolve());
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = Grid::seeded(73, 41, 0.4, &mut rng);

        let mut serial = Grid::new(73, 41);
        let mut parallel = Grid::new(73, 41);
        grid.evolve_into(&mut serial);
        grid.evolve_parallel_into(&mut parallel);

        assert_eq!(serial, parallel);
    }

    #[test]
    fn test_seeded_density_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(Grid::seeded(10, 10, 0.0, &mut rng).population(), 0);
        assert_eq!(Grid::seeded(10, 10, 1.0, &mut rng).population(), 100);
    }

    #[test]
    fn test_iter_cells_positions() {
        let grid = with_alive(3, 2, &[(1, 2)]);
        let alive: Vec<_> = grid
            .iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(row, col, _)| (row, col))
            .collect();
        assert_eq!(alive, vec![(1, 2)]);
    }
}
