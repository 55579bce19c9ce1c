use log::{trace, warn};

use super::MazeMaker;
use crate::error::MazeError;
use crate::grid::Grid;
use crate::render::Renderer;

pub trait Backtrack {
    fn backtrack_step(
        &mut self,
        grid: &mut Grid,
        renderer: &mut dyn Renderer,
    ) -> Result<(), MazeError>;
}

impl Backtrack for MazeMaker {
    fn backtrack_step(
        &mut self,
        grid: &mut Grid,
        renderer: &mut dyn Renderer,
    ) -> Result<(), MazeError> {
        let curr = self.current;

        if let Some(next) = self.pick_unvisited_neighbor(grid, curr) {
            grid.open_passage(curr, next)?;
            self.stack.push(curr);
            self.visit_cell(next);
            trace!("carved {} -> {}", curr, next);
            renderer.draw_grid(grid);
        } else if let Some(prev) = self.stack.pop() {
            // Backtracking changes nothing visible.
            self.current = prev;
        } else if let Some(orphan) = self.visited.first_unvisited() {
            // Unreachable on a rectangular grid, but guarantees progress.
            warn!(
                "no path back from {} with {} cells unvisited, jumping to {}",
                curr, self.unvisited, orphan
            );
            self.visit_cell(orphan);
            renderer.draw_grid(grid);
        }

        Ok(())
    }
}
