use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("cell width must be positive, got {0}")]
    CellWidth(i32),

    #[error("tick rate must be positive")]
    TickRate,

    #[error("surface {width}x{height} is not a positive multiple of cell width {cell_width}")]
    Geometry {
        width: i32,
        height: i32,
        cell_width: i32,
    },
}
