use log::{error, info};

use crate::grid::Grid;
use crate::maze::{GenerationState, MazeMaker};
use crate::render::Renderer;
use crate::search::{GraphSearch, SearchState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Continue,
    Done,
    Failed,
}

impl Step {
    pub fn is_finished(self) -> bool {
        self != Step::Continue
    }
}

pub enum Run {
    Generation(MazeMaker),
    Search(GraphSearch),
}

/// Owns at most one run at a time and advances it one step per call. Whoever
/// calls `step` decides the cadence.
#[derive(Default)]
pub struct StepDriver {
    run: Option<Run>,
}

impl StepDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whatever run was in flight; its state is dropped.
    pub fn start(&mut self, run: Run) {
        if self.run.is_some() {
            info!("cancelling the previous run");
        }
        self.run = Some(run);
    }

    pub fn cancel(&mut self) {
        self.run = None;
    }

    pub fn run(&self) -> Option<&Run> {
        self.run.as_ref()
    }

    pub fn generation(&self) -> Option<&MazeMaker> {
        match &self.run {
            Some(Run::Generation(maker)) => Some(maker),
            _ => None,
        }
    }

    pub fn search(&self) -> Option<&GraphSearch> {
        match &self.run {
            Some(Run::Search(search)) => Some(search),
            _ => None,
        }
    }

    /// An idle driver has nothing left to do, so it reports `Done`.
    pub fn step(&mut self, grid: &mut Grid, renderer: &mut dyn Renderer) -> Step {
        match &mut self.run {
            None => Step::Done,
            Some(Run::Generation(maker)) => match maker.step(grid, renderer) {
                Ok(GenerationState::Running) => Step::Continue,
                Ok(GenerationState::Complete) => Step::Done,
                Err(e) => {
                    error!("maze generation failed: {}", e);
                    Step::Failed
                }
            },
            Some(Run::Search(search)) => match search.step(grid, renderer) {
                SearchState::Running => Step::Continue,
                SearchState::Found => Step::Done,
                SearchState::Exhausted => Step::Failed,
            },
        }
    }
}
