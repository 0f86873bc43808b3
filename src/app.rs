use std::path::PathBuf;

use crate::config::CaptureConfig;
use crate::error::SessionResult;
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::state::CaptureContext;
use crate::stroke::Tool;

pub struct SketchApp {
    context: CaptureContext,
    renderer: Renderer,
    input: InputHandler,
    config: CaptureConfig,
    /// Last export result, shown in the tools panel
    status: Option<String>,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self::with_config(CaptureConfig::default())
    }
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, mut config: CaptureConfig) -> Self {
        // Tool and style carry over from the last run
        if let Some(storage) = cc.storage {
            if let Some(saved) = eframe::get_value::<CaptureConfig>(storage, eframe::APP_KEY) {
                config.default_tool = saved.default_tool;
                config.default_style = saved.default_style;
            }
        }
        Self::with_config(config)
    }

    pub fn with_config(config: CaptureConfig) -> Self {
        let input = InputHandler::new(egui::Rect::NOTHING)
            .with_default_pressure(config.default_pressure);
        Self {
            context: CaptureContext::new(&config),
            renderer: Renderer::default(),
            input,
            config,
            status: None,
        }
    }

    pub fn context(&self) -> &CaptureContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut CaptureContext {
        &mut self.context
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_tool(&mut self, tool: Tool) {
        log::info!("Tool selected: {}", tool.name());
        self.context.set_tool(tool);
    }

    pub fn undo(&mut self) {
        self.context.undo();
    }

    pub fn redo(&mut self) {
        self.context.redo();
    }

    pub fn clear(&mut self) {
        self.context.clear();
    }

    /// Track the canvas rect; the capture context only hears about real size changes
    pub fn set_canvas_rect(&mut self, rect: egui::Rect) {
        self.input.set_canvas_rect(rect);
        let size = self.input.canvas_size();
        if size.is_valid() && size != self.context.canvas_size() {
            log::debug!("Canvas resized to {}x{}", size.w, size.h);
            self.context.set_canvas_size(size);
        }
    }

    /// Feed this frame's pointer events into the capture lifecycle.
    ///
    /// Presses only count while the canvas itself is hovered, so clicks on
    /// popups floating over it do not start strokes.
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_hovered: bool) {
        if !canvas_hovered && !self.input.is_pointer_down() {
            return;
        }
        for event in self.input.process_input(ctx) {
            self.context.handle_event(event);
        }
    }

    /// Write the current session record next to the working directory
    pub fn export_session(&mut self) -> SessionResult<PathBuf> {
        let session = self.context.session_data();
        let path = PathBuf::from(format!("{}.json", session.session_id));
        session.save_to(&path)?;
        log::info!(
            "Exported session {} ({} strokes) to {}",
            session.session_id,
            session.strokes.len(),
            path.display()
        );
        Ok(path)
    }

    pub fn export_and_report(&mut self) {
        self.status = Some(match self.export_session() {
            Ok(path) => format!("Saved {}", path.display()),
            Err(err) => {
                log::error!("Export failed: {}", err);
                format!("Export failed: {}", err)
            }
        });
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let redo_shortcut = egui::Modifiers::COMMAND | egui::Modifiers::SHIFT;
        // Redo first: the undo shortcut would also match with shift held
        if ctx.input_mut(|i| i.consume_key(redo_shortcut, egui::Key::Z)) {
            self.redo();
        } else if ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::Z)) {
            self.undo();
        }
    }
}

impl eframe::App for SketchApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let mut config = self.config.clone();
        config.default_tool = self.context.tool();
        config.default_style = self.context.style().clone();
        eframe::set_value(storage, eframe::APP_KEY, &config);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
