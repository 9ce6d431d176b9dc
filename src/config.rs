use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const APP_DIR_NAME: &str = "grid-snake";
const CONFIG_FILE_NAME: &str = "config.json";

/// Default number of grid columns.
pub const DEFAULT_COLS: u16 = 40;

/// Default number of grid rows.
pub const DEFAULT_ROWS: u16 = 30;

/// Default step interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 130;

/// Default points awarded per food eaten.
pub const DEFAULT_SCORE_INCREMENT: u32 = 10;

/// Default edge length of one cell in presentation units.
pub const DEFAULT_TILE_SIZE: u16 = 20;

/// Length of the snake created by every start/restart.
pub const INITIAL_SNAKE_LEN: usize = 3;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct GridSize {
    pub cols: u16,
    pub rows: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.cols) * usize::from(self.rows)
    }
}

/// Construction-time constants for one engine instance.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub cols: u16,
    pub rows: u16,
    pub tick_interval_ms: u64,
    pub score_increment: u32,
    pub tile_size: u16,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            score_increment: DEFAULT_SCORE_INCREMENT,
            tile_size: DEFAULT_TILE_SIZE,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn grid(&self) -> GridSize {
        GridSize {
            cols: self.cols,
            rows: self.rows,
        }
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Checks that a fresh game fits on the grid and the timer can run.
    ///
    /// The start segment occupies `cols / 2 - 2 ..= cols / 2` on the middle
    /// row, so at least four columns are needed. That also leaves one free
    /// cell for the first food.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cols < 4 {
            return Err(ConfigError::Invalid(format!(
                "cols must be at least 4, got {}",
                self.cols
            )));
        }
        if self.rows == 0 {
            return Err(ConfigError::Invalid("rows must be at least 1".to_owned()));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "tick_interval_ms must be positive".to_owned(),
            ));
        }
        if self.tile_size == 0 {
            return Err(ConfigError::Invalid("tile_size must be positive".to_owned()));
        }
        Ok(())
    }

    /// Reads a config from a JSON file. Fields that are absent keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads the config from the platform config directory.
    ///
    /// Returns defaults when the file does not exist yet.
    pub fn load_default_location() -> Result<Self, ConfigError> {
        let path = default_config_path();
        match Self::load(&path) {
            Err(ConfigError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            other => other,
        }
    }

    fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// Returns the platform-correct config file path.
#[must_use]
pub fn default_config_path() -> PathBuf {
    let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(CONFIG_FILE_NAME);
    base
}
