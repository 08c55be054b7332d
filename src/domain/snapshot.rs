//! Read-only view of the universe handed to renderers.

use super::{Cell, Grid};

/// Borrowed view of the current generation.
///
/// The lifetime ties the view to the universe, so it cannot outlive the
/// next mutating call.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    grid: &'a Grid,
    generation: u64,
}

impl<'a> Snapshot<'a> {
    pub(crate) fn new(grid: &'a Grid, generation: u64) -> Self {
        Self { grid, generation }
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Row-major cell sequence, `index = row * width + col`
    pub fn cells(&self) -> &'a [Cell] {
        self.grid.cells()
    }

    /// The same sequence as one byte per cell: 0 dead, 1 alive.
    pub fn as_bytes(&self) -> &'a [u8] {
        let cells = self.cells();
        // SAFETY: Cell is #[repr(u8)] with discriminants 0 and 1, so a
        // [Cell] has the same size, alignment and valid bit patterns as [u8].
        unsafe { std::slice::from_raw_parts(cells.as_ptr().cast::<u8>(), cells.len()) }
    }

    pub fn index(&self, row: usize, col: usize) -> usize {
        self.grid.index(row, col)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.grid.get(row, col)
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Cell::is_alive)
    }

    /// `(row, col)` of every alive cell, in row-major order
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + 'a {
        self.grid
            .iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(row, col, _)| (row, col))
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_mirror_cells() {
        let mut grid = Grid::new(4, 2);
        grid.set(0, 1, Cell::Alive);
        grid.set(1, 3, Cell::Alive);
        let snapshot = Snapshot::new(&grid, 0);

        assert_eq!(snapshot.as_bytes(), &[0, 1, 0, 0, 0, 0, 0, 1]);
        assert_eq!(snapshot.cells().len(), snapshot.width() * snapshot.height());
    }

    #[test]
    fn test_alive_cells_and_lookup() {
        let mut grid = Grid::new(3, 3);
        grid.set(2, 0, Cell::Alive);
        grid.set(0, 2, Cell::Alive);
        let snapshot = Snapshot::new(&grid, 9);

        assert_eq!(snapshot.alive_cells().collect::<Vec<_>>(), vec![(0, 2), (2, 0)]);
        assert!(snapshot.is_alive(2, 0));
        assert!(!snapshot.is_alive(1, 1));
        assert!(!snapshot.is_alive(3, 0));
        assert_eq!(snapshot.index(2, 0), 6);
        assert_eq!(snapshot.population(), 2);
        assert_eq!(snapshot.generation(), 9);
    }
}
