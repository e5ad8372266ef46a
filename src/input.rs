use egui::{Context, Key, Pos2, Rect};

use crate::pixel::{Point, Rgb};

/// Everything the UI layer can ask of the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasEvent {
    /// Primary button pressed over the canvas
    PointerDown(Point),
    /// Pointer moved while the button is held
    PointerMove(Point),
    PointerUp,
    /// Pointer left the canvas, which ends any stroke
    PointerLeave,
    /// Explicit fill at a point, whatever the current tool
    FillClick(Point),
    SelectColor(Rgb),
    SelectBrushSize(u32),
    SelectEraser,
    SelectFillTool,
    ClearCanvas,
    UndoRequested,
}

/// Turns raw egui input over the canvas area into [`CanvasEvent`]s
#[derive(Debug)]
pub struct InputHandler {
    canvas_rect: Rect,
    last_point: Option<Point>,
    /// Primary button went down inside the canvas and has not been released
    pressed: bool,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            last_point: None,
            pressed: false,
        }
    }

    /// Update the canvas rectangle (e.g. if the window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    fn to_point(&self, pos: Pos2) -> Point {
        Point::from_pos(pos, self.canvas_rect.min)
    }

    /// Process this frame's egui input and produce canvas events in order
    pub fn process_input(&mut self, ctx: &Context) -> Vec<CanvasEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let hover = input.pointer.hover_pos();
            let inside = hover.filter(|pos| self.canvas_rect.contains(*pos));

            if input.pointer.primary_pressed() {
                if let Some(pos) = inside {
                    let point = self.to_point(pos);
                    events.push(CanvasEvent::PointerDown(point));
                    self.last_point = Some(point);
                    self.pressed = true;
                }
            } else if self.pressed {
                match inside {
                    Some(pos) => {
                        let point = self.to_point(pos);
                        if Some(point) != self.last_point {
                            events.push(CanvasEvent::PointerMove(point));
                            self.last_point = Some(point);
                        }
                    }
                    None => {
                        events.push(CanvasEvent::PointerLeave);
                        self.pressed = false;
                        self.last_point = None;
                    }
                }
            }

            if self.pressed && input.pointer.primary_released() {
                events.push(CanvasEvent::PointerUp);
                self.pressed = false;
                self.last_point = None;
            }

            if input.modifiers.command && input.key_pressed(Key::Z) {
                events.push(CanvasEvent::UndoRequested);
            }
        });

        events
    }
}
