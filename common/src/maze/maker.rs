pub mod backtrack;

use log::debug;
use rand::prelude::{IndexedRandom, SeedableRng, StdRng};

use crate::error::MazeError;
use crate::grid::{Cell, Grid};
use crate::render::Renderer;
use crate::visited::VisitedSet;

pub use backtrack::Backtrack;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerationState {
    Running,
    Complete,
}

/// Per-run state of the randomized backtracker. The grid itself belongs to
/// the caller and is lent to every step.
pub struct MazeMaker {
    visited: VisitedSet,
    stack: Vec<Cell>,
    current: Cell,
    unvisited: usize,
    state: GenerationState,
    rng: StdRng,
}

impl MazeMaker {
    pub fn new(grid: &Grid) -> Self {
        Self::with_rng(grid, StdRng::from_rng(&mut rand::rng()))
    }

    /// Same seed and dimensions, same maze.
    pub fn seeded(grid: &Grid, seed: u64) -> Self {
        Self::with_rng(grid, StdRng::seed_from_u64(seed))
    }

    fn with_rng(grid: &Grid, rng: StdRng) -> Self {
        let start = grid.start();
        let mut visited = VisitedSet::for_grid(grid);
        visited.visit(start);

        debug!(
            "starting maze generation on a {} x {} grid",
            grid.rows(),
            grid.cols()
        );

        MazeMaker {
            visited,
            stack: Vec::new(),
            current: start,
            unvisited: grid.len() - 1,
            state: GenerationState::Running,
            rng,
        }
    }

    pub fn state(&self) -> GenerationState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == GenerationState::Complete
    }

    pub fn unvisited(&self) -> usize {
        self.unvisited
    }

    pub fn current(&self) -> Cell {
        self.current
    }

    /// Advances generation by one step. Once complete, further calls are
    /// no-ops.
    pub fn step(
        &mut self,
        grid: &mut Grid,
        renderer: &mut dyn Renderer,
    ) -> Result<GenerationState, MazeError> {
        if self.is_complete() {
            return Ok(GenerationState::Complete);
        }

        if self.unvisited == 0 {
            self.state = GenerationState::Complete;
            debug!(
                "maze generation complete: {} passages opened",
                grid.open_passage_count()
            );
            renderer.draw_maze(grid);
            return Ok(GenerationState::Complete);
        }

        self.backtrack_step(grid, renderer)?;

        Ok(GenerationState::Running)
    }

    /// Steps until the maze is complete. Any cadence gives the same grid as
    /// this.
    pub fn run_to_completion(
        &mut self,
        grid: &mut Grid,
        renderer: &mut dyn Renderer,
    ) -> Result<(), MazeError> {
        while self.step(grid, renderer)? == GenerationState::Running {}
        Ok(())
    }

    fn unvisited_neighbors(&self, grid: &Grid, cell: Cell) -> Vec<Cell> {
        grid.neighbors(cell)
            .into_iter()
            .filter(|&neighbor| !self.visited.contains(neighbor))
            .collect()
    }

    fn pick_unvisited_neighbor(&mut self, grid: &Grid, cell: Cell) -> Option<Cell> {
        let neighbors = self.unvisited_neighbors(grid, cell);
        neighbors.choose(&mut self.rng).copied()
    }

    fn visit_cell(&mut self, cell: Cell) {
        if self.visited.visit(cell) {
            self.unvisited -= 1;
        }
        self.current = cell;
    }
}
