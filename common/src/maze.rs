pub mod maker;

use crate::error::MazeError;
use crate::grid::Grid;
use crate::render::NullRenderer;

pub use maker::{GenerationState, MazeMaker};

/// Generates a complete maze in one go, without rendering. With a seed the
/// result is reproducible.
pub fn generate(rows: usize, cols: usize, seed: Option<u64>) -> Result<Grid, MazeError> {
    let mut grid = Grid::new(rows, cols)?;
    let mut maker = match seed {
        Some(seed) => MazeMaker::seeded(&grid, seed),
        None => MazeMaker::new(&grid),
    };
    maker.run_to_completion(&mut grid, &mut NullRenderer)?;
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::grid::Direction;
    use crate::visited::VisitedSet;

    #[test]
    fn test_backtrack_all_cells_are_connected() {
        for _ in 0..64 {
            let grid = generate(12, 17, None).unwrap();
            assert_all_cells_are_connected(&grid);
        }
    }

    #[test]
    fn test_backtrack_opens_a_spanning_tree() {
        for (rows, cols) in [(1, 1), (1, 9), (9, 1), (2, 2), (5, 8), (20, 20)] {
            let grid = generate(rows, cols, None).unwrap();
            assert_eq!(
                grid.open_passage_count(),
                rows * cols - 1,
                "a {} x {} maze should open exactly {} walls:\n{}",
                rows,
                cols,
                rows * cols - 1,
                grid.log()
            );
        }
    }

    #[test]
    fn test_walls_are_reciprocal() {
        let grid = generate(9, 13, None).unwrap();

        for cell in grid.cells() {
            for direction in [
                Direction::Up,
                Direction::Down,
                Direction::Left,
                Direction::Right,
            ] {
                if let Some(neighbor) = grid.neighbor(cell, direction) {
                    assert_eq!(
                        grid.is_open(cell, direction),
                        grid.is_open(neighbor, direction.opposite()),
                        "wall between {} and {} is one-way",
                        cell,
                        neighbor
                    );
                }
            }
        }
    }

    #[test]
    fn test_same_seed_same_maze() {
        let a = generate(15, 10, Some(2024)).unwrap();
        let b = generate(15, 10, Some(2024)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_cell_completes_on_first_step() {
        let mut grid = Grid::new(1, 1).unwrap();
        let mut maker = MazeMaker::new(&grid);

        assert_eq!(maker.unvisited(), 0);
        assert_eq!(
            maker.step(&mut grid, &mut NullRenderer).unwrap(),
            GenerationState::Complete
        );
        assert_eq!(grid.open_passage_count(), 0);
    }

    #[test]
    fn test_generate_rejects_empty_dimensions() {
        assert_eq!(
            generate(0, 0, None).unwrap_err(),
            MazeError::InvalidDimensions { rows: 0, cols: 0 }
        );
    }

    fn assert_all_cells_are_connected(grid: &Grid) {
        let mut visited = VisitedSet::for_grid(grid);
        let mut queue = VecDeque::new();

        queue.push_back(grid.start());
        visited.visit(grid.start());

        while let Some(cell) = queue.pop_front() {
            for neighbor in grid.reachable_neighbors(cell) {
                if visited.visit(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        assert!(
            visited.count() == grid.len(),
            "all cells should be connected:\n{}",
            grid.log()
        );
    }
}
