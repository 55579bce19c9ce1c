use std::{env, fmt, str::FromStr, time::Duration};

use thiserror::Error;

use crate::error::MazeError;

pub const DEFAULT_SIZE: Dimensions = Dimensions { rows: 20, cols: 20 };
pub const SIZE_PRESETS: [Dimensions; 5] = [
    Dimensions { rows: 10, cols: 10 },
    Dimensions { rows: 20, cols: 20 },
    Dimensions { rows: 30, cols: 30 },
    Dimensions { rows: 40, cols: 40 },
    Dimensions { rows: 50, cols: 50 },
];
pub const DEFAULT_CANVAS_WIDTH: u32 = 600; // Pixels.
pub const GENERATION_INTERVAL: Duration = Duration::from_millis(10);
pub const SEARCH_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid maze size '{0}', expected something like '20 x 20'")]
    InvalidSize(String),

    #[error("invalid value '{value}' for {key}")]
    InvalidNumber { key: &'static str, value: String },

    #[error(transparent)]
    Maze(#[from] MazeError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Dimensions {
    pub fn new(rows: usize, cols: usize) -> Result<Self, MazeError> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        Ok(Dimensions { rows, cols })
    }

    /// Side of one cell in pixels when `cols` cells share `canvas_width`.
    pub fn cell_size(&self, canvas_width: u32) -> u32 {
        let size = (canvas_width as f64 / self.cols as f64).round() as u32;
        size.max(1)
    }

    /// The preset after this one, wrapping around. Sizes that aren't presets
    /// go back to the first.
    pub fn next_preset(&self) -> Dimensions {
        match SIZE_PRESETS.iter().position(|preset| preset == self) {
            Some(i) => SIZE_PRESETS[(i + 1) % SIZE_PRESETS.len()],
            None => SIZE_PRESETS[0],
        }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        DEFAULT_SIZE
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.rows, self.cols)
    }
}

/// Accepts the size selector's "rows x cols" format, with or without spaces.
impl FromStr for Dimensions {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidSize(s.to_string());

        let (rows, cols) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(invalid)?;
        let rows = rows.trim().parse().map_err(|_| invalid())?;
        let cols = cols.trim().parse().map_err(|_| invalid())?;

        Ok(Dimensions::new(rows, cols)?)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub size: Dimensions,
    pub canvas_width: u32,
    pub generation_interval: Duration,
    pub search_interval: Duration,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            size: DEFAULT_SIZE,
            canvas_width: DEFAULT_CANVAS_WIDTH,
            generation_interval: GENERATION_INTERVAL,
            search_interval: SEARCH_INTERVAL,
            seed: None,
        }
    }
}

impl Config {
    /// Reads `MAZE_SIZE`, `CANVAS_WIDTH`, `GENERATION_INTERVAL_MS`,
    /// `SEARCH_INTERVAL_MS` and `MAZE_SEED`, after loading a `.env` file if
    /// there is one. Anything unset keeps its default.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(size) = lookup("MAZE_SIZE") {
            config.size = size.parse()?;
        }
        if let Some(width) = lookup("CANVAS_WIDTH") {
            config.canvas_width = parse_number("CANVAS_WIDTH", &width)?;
        }
        if let Some(ms) = lookup("GENERATION_INTERVAL_MS") {
            config.generation_interval =
                Duration::from_millis(parse_number("GENERATION_INTERVAL_MS", &ms)?);
        }
        if let Some(ms) = lookup("SEARCH_INTERVAL_MS") {
            config.search_interval =
                Duration::from_millis(parse_number("SEARCH_INTERVAL_MS", &ms)?);
        }
        if let Some(seed) = lookup("MAZE_SEED") {
            config.seed = Some(parse_number("MAZE_SEED", &seed)?);
        }

        Ok(config)
    }

    pub fn cell_size(&self) -> u32 {
        self.size.cell_size(self.canvas_width)
    }
}

fn parse_number<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        key,
        value: value.to_string(),
    })
}
