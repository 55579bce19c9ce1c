use crate::grid::{Cell, Grid};

/// Which cells a single run has reached. Cells are only ever added, so a
/// fresh set is allocated for every run.
#[derive(Clone, Debug)]
pub struct VisitedSet {
    visited: Vec<Vec<bool>>,
    count: usize,
}

impl VisitedSet {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            visited: vec![vec![false; cols]; rows],
            count: 0,
        }
    }

    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.rows(), grid.cols())
    }

    /// Returns `true` if the cell was not visited before.
    pub fn visit(&mut self, cell: Cell) -> bool {
        let Some(slot) = self
            .visited
            .get_mut(cell.row)
            .and_then(|row| row.get_mut(cell.col))
        else {
            return false;
        };

        if *slot {
            false
        } else {
            *slot = true;
            self.count += 1;
            true
        }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.visited
            .get(cell.row)
            .and_then(|row| row.get(cell.col))
            .copied()
            .unwrap_or(false)
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn first_unvisited(&self) -> Option<Cell> {
        self.visited.iter().enumerate().find_map(|(row, cells)| {
            cells
                .iter()
                .position(|&visited| !visited)
                .map(|col| Cell::new(row, col))
        })
    }
}
