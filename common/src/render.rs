use strum::Display;

use crate::grid::{Cell, Grid};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum CellRole {
    Start,
    Goal,
    Visited,
    Path,
}

/// Whatever turns the maze into pixels or characters. Calls are
/// fire-and-forget: the algorithms never look at the outcome.
pub trait Renderer {
    fn draw_grid(&mut self, grid: &Grid);
    fn mark_cell(&mut self, row: usize, col: usize, role: CellRole);

    fn mark(&mut self, cell: Cell, role: CellRole) {
        self.mark_cell(cell.row, cell.col, role);
    }

    /// Full redraw with the entrance and exit highlighted.
    fn draw_maze(&mut self, grid: &Grid) {
        self.draw_grid(grid);
        self.mark(grid.goal(), CellRole::Goal);
        self.mark(grid.start(), CellRole::Start);
    }
}

/// For headless runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw_grid(&mut self, _grid: &Grid) {}
    fn mark_cell(&mut self, _row: usize, _col: usize, _role: CellRole) {}
}
