use egui::{Color32, Rect, pos2, vec2};

use crate::canvas::DoodleCanvas;
use crate::config::CanvasConfig;
use crate::error::CanvasResult;
use crate::input::{CanvasEvent, InputHandler};
use crate::palette::SWATCHES;
use crate::texture::CanvasTexture;
use crate::tool::ToolMode;

/// The eframe shell: a tool panel plus the canvas area.
///
/// All drawing decisions live in [`DoodleCanvas`]; this type only turns clicks
/// into [`CanvasEvent`]s and shows the buffer.
#[derive(Debug)]
pub struct DoodleApp {
    canvas: DoodleCanvas,
    brush_sizes: Vec<u32>,
    texture: CanvasTexture,
    input: InputHandler,
}

impl DoodleApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: CanvasConfig) -> CanvasResult<Self> {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Ok(Self {
            canvas: DoodleCanvas::new(&config)?,
            brush_sizes: config.brush_sizes,
            texture: CanvasTexture::new(),
            input: InputHandler::new(Rect::NOTHING),
        })
    }

    pub fn canvas(&self) -> &DoodleCanvas {
        &self.canvas
    }

    fn apply(&mut self, event: CanvasEvent) {
        if let Err(e) = self.canvas.handle(event) {
            log::warn!("{event:?} rejected: {e}");
        }
    }

    fn tools_panel(&self, ui: &mut egui::Ui) -> Vec<CanvasEvent> {
        let mut events = Vec::new();
        let tool = *self.canvas.tool();

        ui.heading("Colours");
        ui.horizontal_wrapped(|ui| {
            for swatch in SWATCHES {
                let selected = tool.color() == swatch.rgb && tool.mode() != ToolMode::Eraser;
                let button = egui::Button::new("")
                    .fill(Color32::from(swatch.rgb))
                    .min_size(vec2(24.0, 24.0))
                    .selected(selected);
                if ui.add(button).on_hover_text(swatch.name).clicked() {
                    events.push(CanvasEvent::SelectColor(swatch.rgb));
                }
            }
        });
        ui.separator();

        ui.heading("Brush");
        ui.horizontal_wrapped(|ui| {
            for &size in &self.brush_sizes {
                let selected = tool.mode() == ToolMode::Brush && tool.width() == size;
                if ui.selectable_label(selected, format!("{size}px")).clicked() {
                    events.push(CanvasEvent::SelectBrushSize(size));
                }
            }
        });
        ui.horizontal(|ui| {
            if ui.selectable_label(tool.mode() == ToolMode::Eraser, "Eraser").clicked() {
                events.push(CanvasEvent::SelectEraser);
            }
            if ui.selectable_label(tool.mode() == ToolMode::Fill, "Fill").clicked() {
                events.push(CanvasEvent::SelectFillTool);
            }
        });
        ui.separator();

        ui.horizontal(|ui| {
            let can_undo = self.canvas.history().can_undo();
            if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                events.push(CanvasEvent::UndoRequested);
            }
            if ui.button("Clear").clicked() {
                events.push(CanvasEvent::ClearCanvas);
            }
        });
        ui.label(format!(
            "History: {}/{}",
            self.canvas.history().cursor() + 1,
            self.canvas.history().len()
        ));

        events
    }
}

impl eframe::App for DoodleApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events = Vec::new();
        egui::SidePanel::left("tools_panel")
            .resizable(false)
            .default_width(200.0)
            .show(ctx, |ui| {
                events = self.tools_panel(ui);
            });

        events.extend(self.input.process_input(ctx));
        for event in events {
            self.apply(event);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let buffer = self.canvas.buffer();
            let size = vec2(buffer.width() as f32, buffer.height() as f32);
            let (rect, _response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());
            self.input.set_canvas_rect(rect);

            let texture_id = self.texture.texture_id(ctx, buffer);
            let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
            ui.painter().image(texture_id, rect, uv, Color32::WHITE);
        });
    }
}
