#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod buffer;
pub mod canvas;
pub mod config;
pub mod error;
pub mod fill;
pub mod history;
pub mod input;
pub mod palette;
pub mod pixel;
pub mod stroke;
pub mod texture;
pub mod tool;

pub use app::DoodleApp;
pub use buffer::{PixelBuffer, Snapshot, SnapshotEncoding};
pub use canvas::DoodleCanvas;
pub use config::CanvasConfig;
pub use error::{CanvasError, CanvasResult, ConfigError};
pub use fill::flood_fill;
pub use history::HistoryStore;
pub use input::{CanvasEvent, InputHandler};
pub use pixel::{Pixel, Point, Rgb};
pub use stroke::{Stroke, StrokePaint, StrokeRenderer, MAX_BRUSH_WIDTH};
pub use tool::{ToolMode, ToolState};
