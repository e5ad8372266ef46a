use thiserror::Error;

/// Errors raised by the pixel buffer, stroke renderer and history store
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanvasError {
    /// Coordinate outside the buffer
    #[error("Pixel ({x}, {y}) is outside the {width}x{height} canvas")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    /// A stroke was extended or ended while no stroke was open
    #[error("No stroke is being drawn")]
    NotDrawing,

    /// Undo requested with no earlier state to return to
    #[error("Nothing to undo")]
    EmptyHistory,

    #[error("Brush width {0} is out of range")]
    InvalidWidth(u32),

    #[error("Canvas dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Snapshot taken from a buffer of a different size
    #[error("Snapshot is {snapshot_width}x{snapshot_height} but canvas is {width}x{height}")]
    SnapshotMismatch {
        snapshot_width: u32,
        snapshot_height: u32,
        width: u32,
        height: u32,
    },

    #[error("Snapshot codec failed: {0}")]
    SnapshotCodec(String),
}

/// Result type for canvas operations
pub type CanvasResult<T> = Result<T, CanvasError>;

/// Errors that can occur while loading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}
