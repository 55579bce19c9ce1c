use std::fmt;

use strum::{Display, EnumIter, IntoEnumIterator};

use crate::error::MazeError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }

    /// The cell one step away in `direction`, or `None` if that would leave
    /// the top or left edge. The bottom and right edges are the grid's job.
    pub fn step(self, direction: Direction) -> Option<Cell> {
        let Cell { row, col } = self;
        match direction {
            Direction::Up => row.checked_sub(1).map(|row| Cell { row, col }),
            Direction::Down => Some(Cell { row: row + 1, col }),
            Direction::Left => col.checked_sub(1).map(|col| Cell { row, col }),
            Direction::Right => Some(Cell { row, col: col + 1 }),
        }
    }

    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.direction_to(other).is_some()
    }

    pub fn direction_to(&self, other: &Cell) -> Option<Direction> {
        Direction::iter().find(|&direction| self.step(direction) == Some(*other))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// Declaration order is the expansion order used by the searches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Walls {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Walls {
    pub const CLOSED: Walls = Walls {
        up: true,
        down: true,
        left: true,
        right: true,
    };

    pub fn has(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    fn remove(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.up = false,
            Direction::Down => self.down = false,
            Direction::Left => self.left = false,
            Direction::Right => self.right = false,
        }
    }
}

impl Default for Walls {
    fn default() -> Self {
        Walls::CLOSED
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    walls: Vec<Vec<Walls>>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// A grid with every wall standing.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MazeError> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }

        Ok(Grid {
            walls: vec![vec![Walls::CLOSED; cols]; rows],
            rows,
            cols,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn start(&self) -> Cell {
        Cell::new(0, 0)
    }

    pub fn goal(&self) -> Cell {
        Cell::new(self.rows - 1, self.cols - 1)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    pub fn check(&self, cell: Cell) -> Result<(), MazeError> {
        if self.contains(cell) {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds {
                cell,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Row-major, so the first unvisited cell found is the lexicographically
    /// smallest one.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Cell::new(row, col)))
    }

    pub fn walls(&self, cell: Cell) -> Option<Walls> {
        self.walls.get(cell.row)?.get(cell.col).copied()
    }

    pub fn neighbor(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        cell.step(direction).filter(|&next| self.contains(next))
    }

    /// Grid-adjacent cells in up, down, left, right order, whatever the walls.
    pub fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        if !self.contains(cell) {
            return Vec::new();
        }

        Direction::iter()
            .filter_map(|direction| self.neighbor(cell, direction))
            .collect()
    }

    /// Grid-adjacent cells with no wall in between, in up, down, left, right
    /// order.
    pub fn reachable_neighbors(&self, cell: Cell) -> Vec<Cell> {
        Direction::iter()
            .filter(|&direction| self.is_open(cell, direction))
            .filter_map(|direction| self.neighbor(cell, direction))
            .collect()
    }

    pub fn is_open(&self, cell: Cell, direction: Direction) -> bool {
        self.neighbor(cell, direction).is_some()
            && self
                .walls(cell)
                .is_some_and(|walls| !walls.has(direction))
    }

    /// Knocks down the wall between two adjacent cells, on both sides.
    pub fn open_passage(&mut self, a: Cell, b: Cell) -> Result<(), MazeError> {
        self.check(a)?;
        self.check(b)?;

        let direction = a
            .direction_to(&b)
            .ok_or(MazeError::InvalidAdjacency { a, b })?;

        self.walls[a.row][a.col].remove(direction);
        self.walls[b.row][b.col].remove(direction.opposite());

        Ok(())
    }

    /// Each opened wall counted once.
    pub fn open_passage_count(&self) -> usize {
        self.cells()
            .map(|cell| {
                usize::from(self.is_open(cell, Direction::Down))
                    + usize::from(self.is_open(cell, Direction::Right))
            })
            .sum()
    }

    /// The maze as a `(2 * rows + 1) x (2 * cols + 1)` block map: rooms on odd
    /// coordinates, walls and pillars in between, 1 for solid and 0 for
    /// space.
    pub fn layout(&self) -> Vec<Vec<u8>> {
        let height = 2 * self.rows + 1;
        let width = 2 * self.cols + 1;
        let mut layout = vec![vec![1; width]; height];

        for cell in self.cells() {
            let (z, x) = (2 * cell.row + 1, 2 * cell.col + 1);
            layout[z][x] = 0;
            if self.is_open(cell, Direction::Down) {
                layout[z + 1][x] = 0;
            }
            if self.is_open(cell, Direction::Right) {
                layout[z][x + 1] = 0;
            }
        }

        layout
    }

    pub fn log(&self) -> String {
        self.layout()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&block| if block == 0 { "  " } else { "██" })
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.log())
    }
}
