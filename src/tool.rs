use crate::error::{CanvasError, CanvasResult};
use crate::pixel::Rgb;
use crate::stroke::{MAX_BRUSH_WIDTH, StrokePaint};

/// Width the eraser always paints with
pub const ERASER_WIDTH: u32 = 15;

fn valid_width(width: u32) -> bool {
    (1..=MAX_BRUSH_WIDTH).contains(&width)
}

/// Which tool reacts to pointer input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToolMode {
    #[default]
    Brush,
    Eraser,
    Fill,
}

impl ToolMode {
    pub fn name(self) -> &'static str {
        match self {
            Self::Brush => "Brush",
            Self::Eraser => "Eraser",
            Self::Fill => "Fill",
        }
    }
}

/// Current tool, colour and brush size.
///
/// Each selection returns a whole new value, so combinations such as
/// "erasing while filling" cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolState {
    mode: ToolMode,
    color: Rgb,
    /// The brush size preference, kept while the eraser is active
    width: u32,
    eraser_width: u32,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            mode: ToolMode::Brush,
            color: Rgb::BLACK,
            width: 3,
            eraser_width: ERASER_WIDTH,
        }
    }
}

impl ToolState {
    pub fn new(color: Rgb, width: u32) -> CanvasResult<Self> {
        if !valid_width(width) {
            return Err(CanvasError::InvalidWidth(width));
        }
        Ok(Self {
            color,
            width,
            ..Self::default()
        })
    }

    /// Override the fixed eraser width
    pub fn with_eraser_width(self, eraser_width: u32) -> CanvasResult<Self> {
        if !valid_width(eraser_width) {
            return Err(CanvasError::InvalidWidth(eraser_width));
        }
        Ok(Self { eraser_width, ..self })
    }

    pub fn mode(&self) -> ToolMode {
        self.mode
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Stored brush size, regardless of mode
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Width strokes are drawn with in the current mode
    pub fn stroke_width(&self) -> u32 {
        match self.mode {
            ToolMode::Eraser => self.eraser_width,
            _ => self.width,
        }
    }

    /// What strokes lay down in the current mode
    pub fn stroke_paint(&self) -> StrokePaint {
        match self.mode {
            ToolMode::Eraser => StrokePaint::Erase,
            _ => StrokePaint::Color(self.color),
        }
    }

    /// Picking a swatch cancels the eraser but keeps an active fill tool
    pub fn select_color(self, color: Rgb) -> Self {
        let mode = match self.mode {
            ToolMode::Fill => ToolMode::Fill,
            ToolMode::Brush | ToolMode::Eraser => ToolMode::Brush,
        };
        Self { mode, color, ..self }
    }

    /// Picking a numbered size switches back to the brush
    pub fn select_brush_size(self, width: u32) -> CanvasResult<Self> {
        if !valid_width(width) {
            return Err(CanvasError::InvalidWidth(width));
        }
        Ok(Self {
            mode: ToolMode::Brush,
            width,
            ..self
        })
    }

    pub fn select_eraser(self) -> Self {
        Self {
            mode: ToolMode::Eraser,
            ..self
        }
    }

    pub fn select_fill(self) -> Self {
        Self {
            mode: ToolMode::Fill,
            ..self
        }
    }
}
