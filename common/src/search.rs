pub mod frontier;
pub mod path;

use log::{debug, info, warn};
use strum::{Display, EnumIter, EnumString};

use crate::error::MazeError;
use crate::grid::{Cell, Grid};
use crate::render::{CellRole, Renderer};
use crate::visited::VisitedSet;

use frontier::{Discipline, Frontier};
use path::{NodeId, PathTree};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SearchMode {
    Bfs,
    Dfs,
}

impl SearchMode {
    /// The only thing that tells BFS and DFS apart.
    pub fn discipline(self) -> Discipline {
        match self {
            SearchMode::Bfs => Discipline::Fifo,
            SearchMode::Dfs => Discipline::Lifo,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    Running,
    Found,
    Exhausted,
}

/// One BFS or DFS run over a finished maze. The grid is only read, and is
/// lent to every step.
pub struct GraphSearch {
    mode: SearchMode,
    start: Cell,
    goal: Cell,
    visited: VisitedSet,
    frontier: Frontier,
    tree: PathTree,
    state: SearchState,
    found: Option<NodeId>,
    expanded: usize,
}

impl GraphSearch {
    pub fn new(grid: &Grid, mode: SearchMode, start: Cell, goal: Cell) -> Result<Self, MazeError> {
        grid.check(start)?;
        grid.check(goal)?;
        Ok(Self::begin(grid, mode, start, goal))
    }

    /// Entrance to exit: top-left to bottom-right.
    pub fn across(grid: &Grid, mode: SearchMode) -> Self {
        Self::begin(grid, mode, grid.start(), grid.goal())
    }

    fn begin(grid: &Grid, mode: SearchMode, start: Cell, goal: Cell) -> Self {
        let mut tree = PathTree::new();
        let mut frontier = Frontier::new(mode.discipline());
        frontier.push(tree.insert(start, None));

        debug!("starting {} from {} to {}", mode, start, goal);

        GraphSearch {
            mode,
            start,
            goal,
            visited: VisitedSet::for_grid(grid),
            frontier,
            tree,
            state: SearchState::Running,
            found: None,
            expanded: 0,
        }
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Number of cells taken off the frontier and expanded so far.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn is_visited(&self, cell: Cell) -> bool {
        self.visited.contains(cell)
    }

    pub fn step(&mut self, grid: &Grid, renderer: &mut dyn Renderer) -> SearchState {
        if self.state != SearchState::Running {
            return self.state;
        }

        let Some(id) = self.frontier.pop() else {
            warn!(
                "{} exhausted after {} cells without reaching {}",
                self.mode, self.expanded, self.goal
            );
            self.state = SearchState::Exhausted;
            return self.state;
        };

        let node = *self.tree.get(id);
        let cell = node.cell;

        // Queued twice before its first expansion.
        if !self.visited.visit(cell) {
            return self.state;
        }
        self.expanded += 1;
        renderer.mark(cell, CellRole::Visited);

        if cell == self.goal {
            self.state = SearchState::Found;
            self.found = Some(id);
            self.frontier.clear();

            let path = self.tree.path_to(id);
            info!(
                "{} reached {} after {} cells, path has {} cells",
                self.mode,
                self.goal,
                self.expanded,
                path.len()
            );
            draw_path(grid, &path, renderer);

            return self.state;
        }

        for neighbor in grid.reachable_neighbors(cell) {
            if !self.visited.contains(neighbor) {
                self.frontier.push(self.tree.insert(neighbor, Some(id)));
            }
        }

        self.state
    }

    pub fn run_to_completion(&mut self, grid: &Grid, renderer: &mut dyn Renderer) -> SearchState {
        while self.step(grid, renderer) == SearchState::Running {}
        self.state
    }

    /// The solution from start to goal, both included.
    pub fn path(&self) -> Result<Vec<Cell>, MazeError> {
        match (self.state, self.found) {
            (SearchState::Found, Some(id)) => Ok(self.tree.path_to(id)),
            (SearchState::Exhausted, _) => Err(MazeError::NoPathFound {
                start: self.start,
                goal: self.goal,
            }),
            _ => Err(MazeError::SearchInProgress),
        }
    }
}

fn draw_path(grid: &Grid, path: &[Cell], renderer: &mut dyn Renderer) {
    renderer.draw_maze(grid);
    for &cell in path {
        renderer.mark(cell, CellRole::Path);
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::grid::Direction;
    use crate::render::NullRenderer;
    use crate::test_helpers::RecordingRenderer;

    fn open_grid(rows: usize, cols: usize) -> Grid {
        let mut grid = Grid::new(rows, cols).unwrap();
        let cells: Vec<Cell> = grid.cells().collect();
        for cell in cells {
            if let Some(right) = grid.neighbor(cell, Direction::Right) {
                grid.open_passage(cell, right).unwrap();
            }
            if let Some(down) = grid.neighbor(cell, Direction::Down) {
                grid.open_passage(cell, down).unwrap();
            }
        }
        grid
    }

    fn two_by_two_tree() -> Grid {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.open_passage(Cell::new(0, 0), Cell::new(0, 1)).unwrap();
        grid.open_passage(Cell::new(0, 1), Cell::new(1, 1)).unwrap();
        grid
    }

    #[test]
    fn test_mode_parses_case_insensitively() {
        assert_eq!(SearchMode::from_str("bfs").unwrap(), SearchMode::Bfs);
        assert_eq!(SearchMode::from_str("DFS").unwrap(), SearchMode::Dfs);
        assert!(SearchMode::from_str("astar").is_err());
        assert_eq!(SearchMode::Bfs.to_string(), "bfs");
    }

    #[test]
    fn test_two_by_two_tree_has_one_path_for_both_modes() {
        let grid = two_by_two_tree();
        let expected = vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)];

        for mode in [SearchMode::Bfs, SearchMode::Dfs] {
            let mut search = GraphSearch::across(&grid, mode);
            assert_eq!(
                search.run_to_completion(&grid, &mut NullRenderer),
                SearchState::Found
            );
            assert_eq!(search.path().unwrap(), expected, "{} path", mode);
        }
    }

    #[test]
    fn test_single_cell_is_found_immediately() {
        let grid = Grid::new(1, 1).unwrap();
        let mut search = GraphSearch::across(&grid, SearchMode::Dfs);

        assert_eq!(search.step(&grid, &mut NullRenderer), SearchState::Found);
        assert_eq!(search.path().unwrap(), vec![Cell::new(0, 0)]);
        assert_eq!(search.expanded(), 1);
    }

    #[test]
    fn test_bfs_skips_cells_queued_twice() {
        let grid = open_grid(2, 3);
        let mut search = GraphSearch::across(&grid, SearchMode::Bfs);
        let mut renderer = RecordingRenderer::new();

        let mut steps = 0;
        while search.step(&grid, &mut renderer) == SearchState::Running {
            steps += 1;
        }

        // Six expansions plus one discarded duplicate of (1, 1), and the
        // finding step is not counted in the loop.
        assert_eq!(steps, 6);
        assert_eq!(search.expanded(), 6);
        assert_eq!(
            renderer.marked(CellRole::Visited),
            vec![
                Cell::new(0, 0),
                Cell::new(1, 0),
                Cell::new(0, 1),
                Cell::new(1, 1),
                Cell::new(0, 2),
                Cell::new(1, 2),
            ]
        );
        assert_eq!(
            search.path().unwrap(),
            vec![
                Cell::new(0, 0),
                Cell::new(1, 0),
                Cell::new(1, 1),
                Cell::new(1, 2)
            ]
        );
    }

    #[test]
    fn test_dfs_dives_into_the_last_pushed_neighbor() {
        let grid = open_grid(2, 2);
        let mut search = GraphSearch::across(&grid, SearchMode::Dfs);
        let mut renderer = RecordingRenderer::new();

        search.run_to_completion(&grid, &mut renderer);

        assert_eq!(
            renderer.marked(CellRole::Visited),
            vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)]
        );
        assert_eq!(
            search.path().unwrap(),
            vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)]
        );
    }

    #[test]
    fn test_found_path_is_drawn_over_a_fresh_maze() {
        let grid = two_by_two_tree();
        let mut search = GraphSearch::across(&grid, SearchMode::Bfs);
        let mut renderer = RecordingRenderer::new();

        search.run_to_completion(&grid, &mut renderer);

        assert_eq!(renderer.grid_draws(), 1);
        assert_eq!(
            renderer.marked(CellRole::Path),
            vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)]
        );
        assert_eq!(renderer.marked(CellRole::Start), vec![Cell::new(0, 0)]);
        assert_eq!(renderer.marked(CellRole::Goal), vec![Cell::new(1, 1)]);
    }

    #[test]
    fn test_walled_off_goal_exhausts_the_frontier() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.open_passage(Cell::new(0, 0), Cell::new(0, 1)).unwrap();

        let mut search = GraphSearch::across(&grid, SearchMode::Bfs);
        assert_eq!(
            search.run_to_completion(&grid, &mut NullRenderer),
            SearchState::Exhausted
        );
        assert_eq!(
            search.path(),
            Err(MazeError::NoPathFound {
                start: Cell::new(0, 0),
                goal: Cell::new(1, 1)
            })
        );

        // Terminal states are sticky.
        assert_eq!(search.step(&grid, &mut NullRenderer), SearchState::Exhausted);
    }

    #[test]
    fn test_path_is_unavailable_while_running() {
        let grid = two_by_two_tree();
        let search = GraphSearch::across(&grid, SearchMode::Bfs);
        assert_eq!(search.path(), Err(MazeError::SearchInProgress));
    }

    #[test]
    fn test_new_rejects_cells_outside_the_grid() {
        let grid = Grid::new(2, 2).unwrap();
        assert!(matches!(
            GraphSearch::new(&grid, SearchMode::Bfs, Cell::new(0, 0), Cell::new(2, 0)),
            Err(MazeError::OutOfBounds { .. })
        ));
    }
}
