// src/renderer.rs
use eframe::egui::{self, Color32, Painter, Pos2, Rect};

use crate::normalize::denormalize;
use crate::stroke::{Point, Stroke, StrokeRef};
use crate::util::color;

/// Line segments used to flatten each quadratic piece of a stroke
pub const DEFAULT_CURVE_SEGMENTS: usize = 6;

/// Draws committed and in-progress strokes onto an egui painter.
///
/// Strokes are stored normalized, so they are denormalized against whatever
/// rect they are drawn into.
#[derive(Debug, Clone)]
pub struct Renderer {
    background: Color32,
    curve_segments: usize,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Color32::WHITE)
    }
}

impl Renderer {
    pub fn new(background: Color32) -> Self {
        Self {
            background,
            curve_segments: DEFAULT_CURVE_SEGMENTS,
        }
    }

    /// Paint the canvas background, every committed stroke in z-order, then
    /// the preview of the open stroke on top
    pub fn render(
        &self,
        painter: &Painter,
        rect: Rect,
        strokes: &[StrokeRef],
        current: Option<&Stroke>,
    ) {
        painter.rect_filled(rect, 0.0, self.background);

        for stroke in strokes {
            self.paint_stroke(painter, rect, stroke);
        }
        if let Some(stroke) = current {
            self.paint_stroke(painter, rect, stroke);
        }
    }

    fn paint_stroke(&self, painter: &Painter, rect: Rect, stroke: &Stroke) {
        if stroke.is_empty() {
            return;
        }

        let color = self.stroke_color(stroke);
        let width = stroke.style.width as f32;
        let path = stroke_path(stroke.points(), rect, self.curve_segments);

        if path.len() == 1 {
            painter.circle_filled(path[0], width / 2.0, color);
        } else {
            painter.add(egui::Shape::line(path, egui::Stroke::new(width, color)));
        }
    }

    /// The color a stroke paints with.
    ///
    /// The canvas is opaque, so erasing is painting with the background.
    pub fn stroke_color(&self, stroke: &Stroke) -> Color32 {
        let base = if stroke.tool.erases() {
            self.background
        } else {
            color::parse_hex(&stroke.style.color).unwrap_or_else(|| {
                log::debug!("Unknown stroke color {:?}, using black", stroke.style.color);
                Color32::BLACK
            })
        };
        base.gamma_multiply(stroke.style.opacity.clamp(0.0, 1.0) as f32)
    }
}

/// Convert normalized points into a screen-space polyline inside `rect`.
///
/// The first two points are joined by a straight line. After that each point
/// acts as the control of a quadratic curve ending halfway to the next point,
/// flattened into `segments` line pieces.
pub fn stroke_path(points: &[Point], rect: Rect, segments: usize) -> Vec<Pos2> {
    let to_screen = |point: &Point| {
        let device = denormalize(
            point.x,
            point.y,
            f64::from(rect.width()),
            f64::from(rect.height()),
        );
        egui::pos2(rect.min.x + device.x as f32, rect.min.y + device.y as f32)
    };

    let mut path = Vec::new();
    let Some(first) = points.first() else {
        return path;
    };
    path.push(to_screen(first));
    if points.len() == 1 {
        return path;
    }

    let mut pen = to_screen(&points[1]);
    path.push(pen);

    let segments = segments.max(1);
    for pair in points[1..].windows(2) {
        let control = to_screen(&pair[0]);
        let next = to_screen(&pair[1]);
        let end = egui::pos2((control.x + next.x) / 2.0, (control.y + next.y) / 2.0);

        for step in 1..=segments {
            let t = step as f32 / segments as f32;
            let mt = 1.0 - t;
            path.push(egui::pos2(
                mt * mt * pen.x + 2.0 * mt * t * control.x + t * t * end.x,
                mt * mt * pen.y + 2.0 * mt * t * control.y + t * t * end.y,
            ));
        }
        pen = end;
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stroke::{StrokeStyle, Tool};

    fn canvas() -> Rect {
        Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(100.0, 200.0))
    }

    fn stroke(tool: Tool, color: &str, points: Vec<Point>) -> Stroke {
        let mut stroke = Stroke::begin(
            "test".into(),
            tool,
            StrokeStyle {
                color: color.into(),
                width: 4.0,
                opacity: 1.0,
            },
            points[0],
        );
        for point in &points[1..] {
            stroke.push(*point);
        }
        stroke
    }

    #[test]
    fn test_path_is_denormalized_into_rect() {
        let points = [Point::new(0.0, 0.0, 0.0), Point::new(1.0, 0.5, 1.0)];
        let path = stroke_path(&points, canvas(), 4);
        assert_eq!(path, vec![egui::pos2(10.0, 20.0), egui::pos2(110.0, 120.0)]);
    }

    #[test]
    fn test_curves_end_at_midpoints() {
        let points = [
            Point::new(0.0, 0.0, 0.0),
            Point::new(0.5, 0.0, 1.0),
            Point::new(0.5, 0.5, 2.0),
        ];
        let path = stroke_path(&points, canvas(), 4);
        assert_eq!(path.len(), 2 + 4);
        let last = path[path.len() - 1];
        assert!((last.x - 60.0).abs() < 1e-4);
        assert!((last.y - 70.0).abs() < 1e-4);
    }

    #[test]
    fn test_empty_and_single_point_paths() {
        assert!(stroke_path(&[], canvas(), 4).is_empty());
        let path = stroke_path(&[Point::new(0.5, 0.5, 0.0)], canvas(), 4);
        assert_eq!(path, vec![egui::pos2(60.0, 120.0)]);
    }

    #[test]
    fn test_eraser_paints_background() {
        let renderer = Renderer::new(Color32::WHITE);
        let eraser = stroke(Tool::Eraser, "#ff0000", vec![Point::new(0.1, 0.1, 0.0)]);
        assert_eq!(renderer.stroke_color(&eraser), Color32::WHITE);

        let pen = stroke(Tool::Pen, "#ff0000", vec![Point::new(0.1, 0.1, 0.0)]);
        assert_eq!(renderer.stroke_color(&pen), Color32::from_rgb(255, 0, 0));
    }

    #[test]
    fn test_unknown_color_falls_back_to_black() {
        let renderer = Renderer::default();
        let pen = stroke(Tool::Pen, "tomato", vec![Point::new(0.1, 0.1, 0.0)]);
        assert_eq!(renderer.stroke_color(&pen), Color32::BLACK);
    }

    #[test]
    fn test_render_basics() {
        let renderer = Renderer::default();
        let ctx = egui::Context::default();
        let layer_id = egui::LayerId::background();
        let rect = canvas();
        let painter = Painter::new(ctx.clone(), layer_id, rect);

        let committed = std::sync::Arc::new(stroke(
            Tool::Pen,
            "#000000",
            vec![
                Point::new(0.1, 0.1, 0.0),
                Point::new(0.2, 0.3, 1.0),
                Point::new(0.4, 0.2, 2.0),
            ],
        ));
        let open = stroke(Tool::Pen, "#0000ff", vec![Point::new(0.5, 0.5, 3.0)]);
        renderer.render(&painter, rect, &[committed], Some(&open));
    }
}
