use crate::SketchApp;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::drag());
            let canvas_rect = response.rect;

            app.set_canvas_rect(canvas_rect);
            app.handle_input(ctx, response.hovered());

            let context = app.context();
            app.renderer().render(
                &painter,
                canvas_rect,
                context.strokes(),
                context.current_stroke(),
            );

            // Keep the preview live while a stroke is open
            if context.is_drawing() {
                ctx.request_repaint();
            }
        });
}
