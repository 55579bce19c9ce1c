use std::io::{self, Stdout, Write, stdout};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::warn;

use common::{
    grid::Grid,
    render::{CellRole, Renderer},
};

pub const WALL_SYMBOL: &str = "██";
pub const SPACE_SYMBOL: &str = "  ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Generate,
    Bfs,
    Dfs,
    NextSize,
    Quit,
}

pub fn command_for(event: &Event) -> Option<Command> {
    let Event::Key(KeyEvent {
        code,
        modifiers,
        kind,
        ..
    }) = event
    else {
        return None;
    };

    if *kind == KeyEventKind::Release {
        return None;
    }

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') | KeyCode::Char('d') => Some(Command::Quit),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('g') | KeyCode::Enter => Some(Command::Generate),
        KeyCode::Char('b') => Some(Command::Bfs),
        KeyCode::Char('d') => Some(Command::Dfs),
        KeyCode::Char('s') => Some(Command::NextSize),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

fn role_color(role: CellRole) -> Color {
    match role {
        CellRole::Start => Color::Green,
        CellRole::Goal => Color::Red,
        CellRole::Visited => Color::DarkGrey,
        CellRole::Path => Color::Red,
    }
}

/// Draws the maze as a block map, two characters per block, with each cell
/// on odd block coordinates.
pub struct TerminalRenderer<W: Write> {
    out: W,
    maze_height: u16,
    is_terminal_owner: bool, // True except in tests.
}

impl TerminalRenderer<Stdout> {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = stdout();
        execute!(out, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        Ok(Self {
            out,
            maze_height: 0,
            is_terminal_owner: true,
        })
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            maze_height: 0,
            is_terminal_owner: false,
        }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn show_status(&mut self, status: &str) {
        let row = self.maze_height + 1;
        let result = queue!(
            self.out,
            MoveTo(0, row),
            Clear(ClearType::CurrentLine),
            Print(status)
        )
        .and_then(|_| self.out.flush());
        report(result);
    }

    fn try_draw_grid(&mut self, grid: &Grid) -> io::Result<()> {
        let layout = grid.layout();
        self.maze_height = layout.len() as u16;

        queue!(self.out, ResetColor, Clear(ClearType::All))?;
        for (z, row) in layout.iter().enumerate() {
            let line: String = row
                .iter()
                .map(|&block| if block == 0 { SPACE_SYMBOL } else { WALL_SYMBOL })
                .collect();
            queue!(self.out, MoveTo(0, z as u16), Print(line))?;
        }
        self.out.flush()
    }

    fn try_mark_cell(&mut self, row: usize, col: usize, role: CellRole) -> io::Result<()> {
        let x = (2 * col + 1) * WALL_SYMBOL.chars().count();
        let z = 2 * row + 1;

        queue!(
            self.out,
            MoveTo(x as u16, z as u16),
            SetForegroundColor(role_color(role)),
            Print(WALL_SYMBOL),
            ResetColor
        )?;
        self.out.flush()
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn draw_grid(&mut self, grid: &Grid) {
        let result = self.try_draw_grid(grid);
        report(result);
    }

    fn mark_cell(&mut self, row: usize, col: usize, role: CellRole) {
        let result = self.try_mark_cell(row, col, role);
        report(result);
    }
}

impl<W: Write> Drop for TerminalRenderer<W> {
    fn drop(&mut self) {
        if self.is_terminal_owner {
            let _ = execute!(self.out, ResetColor, Show, LeaveAlternateScreen);
            let _ = terminal::disable_raw_mode();
        }
    }
}

// Drawing is fire-and-forget; a failed write only costs a frame.
fn report(result: io::Result<()>) {
    if let Err(e) = result {
        warn!("failed to draw to the terminal: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::grid::Cell;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_keys_map_to_commands() {
        assert_eq!(command_for(&key(KeyCode::Char('g'))), Some(Command::Generate));
        assert_eq!(command_for(&key(KeyCode::Enter)), Some(Command::Generate));
        assert_eq!(command_for(&key(KeyCode::Char('b'))), Some(Command::Bfs));
        assert_eq!(command_for(&key(KeyCode::Char('d'))), Some(Command::Dfs));
        assert_eq!(command_for(&key(KeyCode::Char('s'))), Some(Command::NextSize));
        assert_eq!(command_for(&key(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(command_for(&key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_ctrl_c_quits_and_ctrl_d_is_not_dfs() {
        let ctrl = |c| Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
        assert_eq!(command_for(&ctrl('c')), Some(Command::Quit));
        assert_eq!(command_for(&ctrl('d')), Some(Command::Quit));
        assert_eq!(command_for(&ctrl('b')), None);
    }

    #[test]
    fn test_draw_grid_writes_walls_and_spaces() {
        let mut grid = Grid::new(1, 2).unwrap();
        grid.open_passage(Cell::new(0, 0), Cell::new(0, 1)).unwrap();

        let mut renderer = TerminalRenderer::with_writer(Vec::new());
        renderer.draw_grid(&grid);

        let output = String::from_utf8_lossy(renderer.writer()).to_string();
        assert!(output.contains(&WALL_SYMBOL.repeat(5)));
        assert!(output.contains(&format!("{}{}", WALL_SYMBOL, SPACE_SYMBOL.repeat(3))));
        assert_eq!(renderer.maze_height, 3);
    }

    #[test]
    fn test_mark_cell_writes_a_block() {
        let mut renderer = TerminalRenderer::with_writer(Vec::new());
        renderer.mark_cell(0, 0, CellRole::Visited);
        assert!(String::from_utf8_lossy(renderer.writer()).contains(WALL_SYMBOL));
    }
}
