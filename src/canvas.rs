use log::{debug, info, warn};

use crate::buffer::PixelBuffer;
use crate::config::CanvasConfig;
use crate::error::{CanvasError, CanvasResult};
use crate::fill::flood_fill;
use crate::history::HistoryStore;
use crate::input::CanvasEvent;
use crate::pixel::{Point, Rgb};
use crate::stroke::{Stroke, StrokeRenderer};
use crate::tool::{ToolMode, ToolState};

/// Owns the raster, its history and the tool selection, and applies
/// [`CanvasEvent`]s to them one at a time.
///
/// A history snapshot is captured after every finished stroke, every fill on the
/// canvas, and every clear.
#[derive(Debug)]
pub struct DoodleCanvas {
    buffer: PixelBuffer,
    history: HistoryStore,
    tool: ToolState,
    renderer: StrokeRenderer,
}

impl DoodleCanvas {
    pub fn new(config: &CanvasConfig) -> CanvasResult<Self> {
        let buffer = PixelBuffer::new(config.width, config.height)?;
        let history =
            HistoryStore::with_options(&buffer, config.history_limit, config.snapshot_encoding)?;
        let tool = ToolState::new(config.initial_color(), config.default_brush_size)?
            .with_eraser_width(config.eraser_width)?;
        info!("Created {}x{} canvas", config.width, config.height);
        Ok(Self {
            buffer,
            history,
            tool,
            renderer: StrokeRenderer::new(),
        })
    }

    /// A canvas of the given size with every other setting at its default
    pub fn with_size(width: u32, height: u32) -> CanvasResult<Self> {
        Self::new(&CanvasConfig {
            width,
            height,
            ..CanvasConfig::default()
        })
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn tool(&self) -> &ToolState {
        &self.tool
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn is_drawing(&self) -> bool {
        self.renderer.is_drawing()
    }

    /// Apply one event
    pub fn handle(&mut self, event: CanvasEvent) -> CanvasResult<()> {
        match event {
            CanvasEvent::PointerDown(point) => self.pointer_down(point),
            CanvasEvent::PointerMove(point) => self.pointer_move(point),
            CanvasEvent::PointerUp => self.pointer_up(),
            CanvasEvent::PointerLeave => self.pointer_leave(),
            CanvasEvent::FillClick(point) => self.fill_click(point),
            CanvasEvent::SelectColor(rgb) => {
                self.select_color(rgb);
                Ok(())
            }
            CanvasEvent::SelectBrushSize(size) => self.select_brush_size(size),
            CanvasEvent::SelectEraser => {
                self.select_eraser();
                Ok(())
            }
            CanvasEvent::SelectFillTool => {
                self.select_fill_tool();
                Ok(())
            }
            CanvasEvent::ClearCanvas => self.clear_canvas(),
            CanvasEvent::UndoRequested => self.undo_requested(),
        }
    }

    /// Fill in fill mode, otherwise open a stroke. A stroke still open from a
    /// missed pointer-up is finished first so it keeps its own history entry.
    pub fn pointer_down(&mut self, point: Point) -> CanvasResult<()> {
        self.finish_stroke()?;
        if self.tool.mode() == ToolMode::Fill {
            return self.fill_click(point);
        }
        self.renderer
            .begin_stroke(point, self.tool.stroke_width(), self.tool.stroke_paint())
    }

    /// Extend the open stroke. Moves with no stroke open are hover and ignored.
    pub fn pointer_move(&mut self, point: Point) -> CanvasResult<()> {
        if !self.renderer.is_drawing() {
            return Ok(());
        }
        self.renderer.extend_stroke(&mut self.buffer, point)
    }

    pub fn pointer_up(&mut self) -> CanvasResult<()> {
        self.finish_stroke().map(|_| ())
    }

    pub fn pointer_leave(&mut self) -> CanvasResult<()> {
        self.finish_stroke().map(|_| ())
    }

    /// Close the open stroke, if any, and snapshot the result
    fn finish_stroke(&mut self) -> CanvasResult<Option<Stroke>> {
        let stroke = match self.renderer.end_stroke() {
            Ok(stroke) => stroke,
            Err(CanvasError::NotDrawing) => return Ok(None),
            Err(e) => return Err(e),
        };
        debug!(
            "Finished stroke of {} points at width {}",
            stroke.points().len(),
            stroke.width()
        );
        self.history.save_state(&self.buffer)?;
        Ok(Some(stroke))
    }

    /// Flood fill with the selected colour and snapshot the result, even when
    /// the region already had that colour. Seeds off the canvas do nothing.
    pub fn fill_click(&mut self, point: Point) -> CanvasResult<()> {
        if !self.buffer.contains(point.x, point.y) {
            debug!("Fill at {point:?} is off canvas");
            return Ok(());
        }
        self.finish_stroke()?;
        flood_fill(&mut self.buffer, point.x, point.y, self.tool.color().into());
        self.history.save_state(&self.buffer)
    }

    pub fn select_color(&mut self, rgb: Rgb) {
        self.tool = self.tool.select_color(rgb);
        debug!("Selected colour {rgb:?}, tool is {}", self.tool.mode().name());
    }

    pub fn select_brush_size(&mut self, size: u32) -> CanvasResult<()> {
        match self.tool.select_brush_size(size) {
            Ok(tool) => {
                self.tool = tool;
                info!("Brush size {size}");
                Ok(())
            }
            Err(e) => {
                warn!("Ignoring brush size: {e}");
                Err(e)
            }
        }
    }

    pub fn select_eraser(&mut self) {
        self.tool = self.tool.select_eraser();
        info!("Eraser selected");
    }

    pub fn select_fill_tool(&mut self) {
        self.tool = self.tool.select_fill();
        info!("Fill tool selected");
    }

    /// Wipe to background. The clear is itself an undoable step.
    pub fn clear_canvas(&mut self) -> CanvasResult<()> {
        self.finish_stroke()?;
        self.buffer.clear();
        self.history.save_state(&self.buffer)?;
        info!("Canvas cleared");
        Ok(())
    }

    /// Step back one state. A no-op when already at the oldest state.
    pub fn undo_requested(&mut self) -> CanvasResult<()> {
        self.finish_stroke()?;
        match self.history.undo(&mut self.buffer) {
            Ok(()) => {
                info!("Undo to state {}", self.history.cursor());
                Ok(())
            }
            Err(CanvasError::EmptyHistory) => {
                debug!("Nothing to undo");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
