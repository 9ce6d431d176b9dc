use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::grid::Cell;

/// Failures while loading or validating a [`GameConfig`](crate::config::GameConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Reasons an explicit engine layout is rejected.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("snake must have at least one segment")]
    EmptySnake,

    #[error("cell {0} lies outside the grid")]
    OutOfBounds(Cell),

    #[error("snake overlaps itself at {0}")]
    SelfOverlap(Cell),

    #[error("food at {0} is inside the snake")]
    FoodOnSnake(Cell),
}
