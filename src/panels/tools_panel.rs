use crate::SketchApp;
use crate::components::ToolButton;
use crate::stroke::{StylePatch, Tool};
use crate::util::color;

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let active_tool = app.context().tool();
            ui.horizontal(|ui| {
                for tool in Tool::ALL {
                    if ToolButton::new(tool, tool == active_tool).show(ui).clicked() {
                        app.set_tool(tool);
                    }
                }
            });
            ui.separator();

            style_controls(app, ui);
            ui.separator();

            // Undo/Redo section
            ui.horizontal(|ui| {
                let can_undo = app.context().can_undo();
                let can_redo = app.context().can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.redo();
                }
                if ui.button("Clear").clicked() {
                    app.clear();
                }
            });

            ui.separator();

            let has_strokes = !app.context().strokes().is_empty();
            if ui.add_enabled(has_strokes, egui::Button::new("Export session")).clicked() {
                app.export_and_report();
            }
            if let Some(status) = app.status() {
                ui.label(status);
            }

            ui.separator();

            let context = app.context();
            egui::Grid::new("capture_stats_grid")
                .num_columns(2)
                .spacing([40.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.label("State");
                    ui.label(context.state().name());
                    ui.end_row();

                    ui.label("Strokes");
                    ui.label(context.strokes().len().to_string());
                    ui.end_row();

                    ui.label("Points");
                    let points: usize = context.strokes().iter().map(|s| s.len()).sum();
                    ui.label(points.to_string());
                    ui.end_row();

                    ui.label("Undo stack size");
                    ui.label(context.undo_depth().to_string());
                    ui.end_row();

                    ui.label("Redo stack size");
                    ui.label(context.redo_depth().to_string());
                    ui.end_row();

                    let size = context.canvas_size();
                    ui.label("Canvas");
                    ui.label(format!("{:.0} x {:.0}", size.w, size.h));
                    ui.end_row();
                });
        });
}

fn style_controls(app: &mut SketchApp, ui: &mut egui::Ui) {
    let style = app.context().style().clone();

    ui.horizontal(|ui| {
        ui.label("Color:");
        let mut picked = color::parse_hex(&style.color).unwrap_or(egui::Color32::BLACK);
        if egui::color_picker::color_edit_button_srgba(
            ui,
            &mut picked,
            egui::color_picker::Alpha::Opaque,
        )
        .changed()
        {
            app.context_mut()
                .set_style(StylePatch::color(color::to_hex(picked)));
        }
    });

    ui.horizontal(|ui| {
        ui.label("Width:");
        let mut width = style.width;
        if ui.add(egui::Slider::new(&mut width, 1.0..=50.0)).changed() {
            app.context_mut().set_style(StylePatch::width(width));
        }
    });

    ui.horizontal(|ui| {
        ui.label("Opacity:");
        let mut opacity = style.opacity;
        if ui.add(egui::Slider::new(&mut opacity, 0.0..=1.0)).changed() {
            app.context_mut().set_style(StylePatch::opacity(opacity));
        }
    });
}
