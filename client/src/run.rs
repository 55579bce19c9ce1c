use std::{
    io::{self, Stdout},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use crossterm::event;
use log::{debug, info};
use thiserror::Error;

use crate::ui::{Command, TerminalRenderer, command_for};
use common::{
    config::{Config, Dimensions},
    driver::Run,
    error::MazeError,
    search::{SearchMode, SearchState},
    session::Session,
};

const IDLE_POLL: Duration = Duration::from_millis(250);
const KEYS_HELP: &str = "[g]enerate  [b]fs  [d]fs  [s]ize  [q]uit";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error(transparent)]
    Maze(#[from] MazeError),
}

pub fn run_client(config: Config, shutdown: Arc<AtomicBool>) -> Result<(), ClientError> {
    let renderer = TerminalRenderer::new()?;
    let mut runner = ClientRunner::new(config, renderer)?;

    runner.handle(Command::Generate)?;
    runner.main_loop(&shutdown)?;

    info!("client shutting down");
    Ok(())
}

pub struct ClientRunner {
    session: Session,
    renderer: TerminalRenderer<Stdout>,
    config: Config,
    selected: Dimensions,
    active: bool,
}

impl ClientRunner {
    pub fn new(config: Config, renderer: TerminalRenderer<Stdout>) -> Result<Self, ClientError> {
        let session = Session::new(&config)?;
        Ok(Self {
            session,
            renderer,
            selected: config.size,
            config,
            active: false,
        })
    }

    fn main_loop(&mut self, shutdown: &AtomicBool) -> Result<(), ClientError> {
        while !shutdown.load(Ordering::SeqCst) {
            // Waiting for input doubles as the tick timer.
            if event::poll(self.interval())? {
                let event = event::read()?;
                match command_for(&event) {
                    Some(Command::Quit) => break,
                    Some(command) => self.handle(command)?,
                    None => {}
                }
            }

            if self.active {
                self.tick();
            }
        }

        Ok(())
    }

    fn interval(&self) -> Duration {
        if !self.active {
            return IDLE_POLL;
        }

        match self.session.driver().run() {
            Some(Run::Generation(_)) => self.config.generation_interval,
            Some(Run::Search(_)) => self.config.search_interval,
            None => IDLE_POLL,
        }
    }

    fn handle(&mut self, command: Command) -> Result<(), ClientError> {
        debug!("command: {:?}", command);

        match command {
            Command::Generate => {
                self.session.generate(self.selected)?;
                self.active = true;
            }
            Command::Bfs => self.start_search(SearchMode::Bfs),
            Command::Dfs => self.start_search(SearchMode::Dfs),
            Command::NextSize => {
                self.selected = self.selected.next_preset();
            }
            Command::Quit => {}
        }

        self.refresh_status();
        Ok(())
    }

    fn start_search(&mut self, mode: SearchMode) {
        // Like the buttons, searching does nothing until the maze is ready.
        match self.session.search_with(mode, &mut self.renderer) {
            Ok(()) => self.active = true,
            Err(e) => debug!("ignoring {} request: {}", mode, e),
        }
    }

    fn tick(&mut self) {
        let step = self.session.step(&mut self.renderer);
        if step.is_finished() {
            self.active = false;
            self.refresh_status();
        } else if self.session.driver().generation().is_some() {
            self.refresh_status();
        }
    }

    fn refresh_status(&mut self) {
        let status = status_line(&self.session, self.selected, self.active);
        self.renderer.show_status(&status);
    }
}

fn status_line(session: &Session, selected: Dimensions, active: bool) -> String {
    let progress = match (session.driver().run(), active) {
        (Some(Run::Generation(_)), true) => {
            format!("generating, {} cells left", session.unvisited())
        }
        (Some(Run::Search(search)), true) => {
            format!("{} running, {} cells explored", search.mode(), search.expanded())
        }
        (Some(Run::Search(search)), false) => match (search.state(), search.path()) {
            (SearchState::Found, Ok(path)) => format!(
                "{} found a path of {} cells after exploring {}",
                search.mode(),
                path.len(),
                search.expanded()
            ),
            (_, Err(e)) => format!("{}: {}", search.mode(), e),
            _ => String::new(),
        },
        _ if session.is_generated() => "maze ready".to_string(),
        _ => String::new(),
    };

    format!(
        "{} (cell {}px) | next: {} | {} | {}",
        session.size(),
        session.cell_size(),
        selected,
        progress,
        KEYS_HELP
    )
}
