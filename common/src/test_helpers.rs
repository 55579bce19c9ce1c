use crate::grid::{Cell, Grid};
use crate::render::{CellRole, Renderer};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderCall {
    DrawGrid { open_passages: usize },
    MarkCell { cell: Cell, role: CellRole },
}

/// Records every call the algorithms make, so tests can check what would
/// have been drawn.
#[derive(Default)]
pub struct RecordingRenderer {
    pub calls: Vec<RenderCall>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grid_draws(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, RenderCall::DrawGrid { .. }))
            .count()
    }

    pub fn marked(&self, role: CellRole) -> Vec<Cell> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                RenderCall::MarkCell { cell, role: r } if *r == role => Some(*cell),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn draw_grid(&mut self, grid: &Grid) {
        self.calls.push(RenderCall::DrawGrid {
            open_passages: grid.open_passage_count(),
        });
    }

    fn mark_cell(&mut self, row: usize, col: usize, role: CellRole) {
        self.calls.push(RenderCall::MarkCell {
            cell: Cell::new(row, col),
            role,
        });
    }
}
