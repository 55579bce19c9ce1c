use log::info;

use crate::config::{Config, Dimensions};
use crate::driver::{Run, Step, StepDriver};
use crate::error::MazeError;
use crate::grid::Grid;
use crate::maze::MazeMaker;
use crate::render::Renderer;
use crate::search::{GraphSearch, SearchMode};

/// Everything one maze window needs: the current grid, whether it has
/// finished generating, and the single run allowed against it.
pub struct Session {
    grid: Grid,
    size: Dimensions,
    canvas_width: u32,
    seed: Option<u64>,
    generated: bool,
    driver: StepDriver,
}

impl Session {
    /// A fully walled grid of the configured size. Nothing runs until
    /// `generate` is called.
    pub fn new(config: &Config) -> Result<Self, MazeError> {
        let size = config.size;
        Ok(Session {
            grid: Grid::new(size.rows, size.cols)?,
            size,
            canvas_width: config.canvas_width,
            seed: config.seed,
            generated: false,
            driver: StepDriver::new(),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> Dimensions {
        self.size
    }

    pub fn rows(&self) -> usize {
        self.size.rows
    }

    pub fn cols(&self) -> usize {
        self.size.cols
    }

    pub fn cell_size(&self) -> u32 {
        self.size.cell_size(self.canvas_width)
    }

    pub fn is_generated(&self) -> bool {
        self.generated
    }

    /// Cells the current generation run has yet to reach. Zero once the maze
    /// is complete.
    pub fn unvisited(&self) -> usize {
        match self.driver.generation() {
            Some(maker) => maker.unvisited(),
            None if self.generated => 0,
            None => self.grid.len(),
        }
    }

    pub fn driver(&self) -> &StepDriver {
        &self.driver
    }

    pub fn search(&self) -> Option<&GraphSearch> {
        self.driver.search()
    }

    /// Throws away the current grid and whatever was running on it, and
    /// starts generating a fresh maze.
    pub fn generate(&mut self, size: Dimensions) -> Result<(), MazeError> {
        let grid = Grid::new(size.rows, size.cols)?;
        let maker = match self.seed {
            Some(seed) => MazeMaker::seeded(&grid, seed),
            None => MazeMaker::new(&grid),
        };

        info!("generating a {} maze", size);

        self.driver.cancel();
        self.grid = grid;
        self.size = size;
        self.generated = false;
        self.driver.start(Run::Generation(maker));

        Ok(())
    }

    /// Starts a search from the entrance to the exit, replacing any search
    /// already running. Refused until the maze is complete.
    pub fn search_with(
        &mut self,
        mode: SearchMode,
        renderer: &mut dyn Renderer,
    ) -> Result<(), MazeError> {
        if !self.generated {
            return Err(MazeError::NotGenerated);
        }

        info!("searching the {} maze with {}", self.size, mode);

        self.driver.cancel();
        renderer.draw_maze(&self.grid);
        self.driver
            .start(Run::Search(GraphSearch::across(&self.grid, mode)));

        Ok(())
    }

    pub fn cancel(&mut self) {
        self.driver.cancel();
    }

    pub fn step(&mut self, renderer: &mut dyn Renderer) -> Step {
        let step = self.driver.step(&mut self.grid, renderer);

        if step == Step::Done
            && !self.generated
            && self
                .driver
                .generation()
                .is_some_and(MazeMaker::is_complete)
        {
            info!("{} maze generated", self.size);
            self.generated = true;
        }

        step
    }

    /// Steps until the current run finishes, with no delay in between.
    pub fn run_to_completion(&mut self, renderer: &mut dyn Renderer) -> Step {
        loop {
            let step = self.step(renderer);
            if step.is_finished() {
                return step;
            }
        }
    }
}
