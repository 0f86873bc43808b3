use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;

use crate::normalize::clamp_unit;

/// A single captured sample in normalized canvas space.
///
/// `x` and `y` lie in `[0, 1]`, `t` is the capture time in milliseconds and
/// `pressure`, when the device reports one, lies in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub t: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f64>,
}

impl Point {
    pub fn new(x: f64, y: f64, t: f64) -> Self {
        Self {
            x,
            y,
            t,
            pressure: None,
        }
    }

    pub fn with_pressure(mut self, pressure: f64) -> Self {
        self.pressure = Some(pressure);
        self
    }

    /// The same sample with `x` and `y` pulled into the unit square
    pub fn clamped(self) -> Self {
        Self {
            x: clamp_unit(self.x),
            y: clamp_unit(self.y),
            ..self
        }
    }
}

/// The drawing tool a stroke was made with.
///
/// Only compositing downstream depends on this; every tool goes through the
/// same geometry pipeline.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    #[default]
    Pen,
    Eraser,
    Shape,
    Text,
}

impl Tool {
    pub const ALL: [Tool; 4] = [Tool::Pen, Tool::Eraser, Tool::Shape, Tool::Text];

    pub fn name(&self) -> &'static str {
        match self {
            Tool::Pen => "Pen",
            Tool::Eraser => "Eraser",
            Tool::Shape => "Shape",
            Tool::Text => "Text",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tool::Pen => "🖊",
            Tool::Eraser => "⌫",
            Tool::Shape => "◻",
            Tool::Text => "T",
        }
    }

    /// True when strokes made with this tool remove paint instead of adding it
    pub fn erases(&self) -> bool {
        matches!(self, Tool::Eraser)
    }
}

/// Visual style copied into each stroke when it starts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Hex color, e.g. `#000000`
    pub color: String,
    /// Line width in device pixels
    pub width: f64,
    pub opacity: f64,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: "#000000".to_string(),
            width: 3.0,
            opacity: 1.0,
        }
    }
}

impl StrokeStyle {
    /// Merge a partial update into this style
    pub fn apply(&mut self, patch: StylePatch) {
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(width) = patch.width {
            self.width = width;
        }
        if let Some(opacity) = patch.opacity {
            self.opacity = opacity.clamp(0.0, 1.0);
        }
    }
}

/// Partial style update; `None` fields keep their current value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StylePatch {
    pub color: Option<String>,
    pub width: Option<f64>,
    pub opacity: Option<f64>,
}

impl StylePatch {
    pub fn color(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            ..Default::default()
        }
    }

    pub fn width(width: f64) -> Self {
        Self {
            width: Some(width),
            ..Default::default()
        }
    }

    pub fn opacity(opacity: f64) -> Self {
        Self {
            opacity: Some(opacity),
            ..Default::default()
        }
    }
}

/// One pointer-down to pointer-up gesture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stroke {
    #[serde(rename = "strokeId")]
    pub id: String,
    pub tool: Tool,
    #[serde(deserialize_with = "deserialize_points")]
    points: Vec<Point>,
    pub start_time: f64,
    pub end_time: f64,
    pub style: StrokeStyle,
}

/// Committed strokes are immutable and shared between the live collection
/// and history snapshots.
pub type StrokeRef = Arc<Stroke>;

/// Points read from a record are held to the same bounds as captured ones
fn deserialize_points<'de, D>(deserializer: D) -> Result<Vec<Point>, D::Error>
where
    D: Deserializer<'de>,
{
    let points = Vec::<Point>::deserialize(deserializer)?;
    let clamped: Vec<Point> = points.iter().map(|point| point.clamped()).collect();
    let changed = points.iter().zip(&clamped).filter(|(a, b)| a != b).count();
    if changed > 0 {
        log::warn!("Clamped {} stroke points outside the unit square", changed);
    }
    Ok(clamped)
}

impl Stroke {
    /// Open a stroke at its first point.
    ///
    /// Every point entering a stroke is clamped into the unit square.
    pub fn begin(id: String, tool: Tool, style: StrokeStyle, first: Point) -> Self {
        let first = first.clamped();
        Self {
            id,
            tool,
            points: vec![first],
            start_time: first.t,
            end_time: first.t,
            style,
        }
    }

    /// Append a sample to an open stroke
    pub fn push(&mut self, point: Point) {
        self.points.push(point.clamped());
        self.end_time = point.t;
    }

    /// A copy of this stroke holding `points` instead of its own
    pub fn with_points(&self, points: Vec<Point>) -> Self {
        Self {
            id: self.id.clone(),
            tool: self.tool,
            points: points.into_iter().map(Point::clamped).collect(),
            start_time: self.start_time,
            end_time: self.end_time,
            style: self.style.clone(),
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Time between the first and last sample, in milliseconds
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_sets_both_times_from_first_point() {
        let stroke = Stroke::begin(
            "s".into(),
            Tool::Pen,
            StrokeStyle::default(),
            Point::new(0.1, 0.2, 42.0),
        );
        assert_eq!(stroke.start_time, 42.0);
        assert_eq!(stroke.end_time, 42.0);
        assert_eq!(stroke.len(), 1);
    }

    #[test]
    fn test_push_updates_end_time() {
        let mut stroke = Stroke::begin(
            "s".into(),
            Tool::Pen,
            StrokeStyle::default(),
            Point::new(0.1, 0.2, 0.0),
        );
        stroke.push(Point::new(0.3, 0.4, 16.0));
        assert_eq!(stroke.end_time, 16.0);
        assert_eq!(stroke.duration(), 16.0);
    }

    #[test]
    fn test_points_are_clamped_on_entry() {
        let mut stroke = Stroke::begin(
            "s".into(),
            Tool::Pen,
            StrokeStyle::default(),
            Point::new(540.0, -20.0, 0.0),
        );
        stroke.push(Point::new(f64::NAN, 1.5, 8.0).with_pressure(0.3));

        assert_eq!(stroke.points()[0], Point::new(1.0, 0.0, 0.0));
        assert_eq!(stroke.points()[1], Point::new(0.0, 1.0, 8.0).with_pressure(0.3));
        assert_eq!(stroke.end_time, 8.0);
    }

    #[test]
    fn test_out_of_range_points_are_clamped_on_load() {
        let json = r##"{"strokeId":"s","tool":"pen","points":[{"x":5.0,"y":-3.0,"t":0.0}],
            "startTime":0.0,"endTime":0.0,"style":{"color":"#000000","width":3.0,"opacity":1.0}}"##;
        let stroke: Stroke = serde_json::from_str(json).unwrap();
        assert_eq!(stroke.points(), &[Point::new(1.0, 0.0, 0.0)]);
    }

    #[test]
    fn test_style_patch_only_touches_given_fields() {
        let mut style = StrokeStyle::default();
        style.apply(StylePatch::width(8.0));
        assert_eq!(style.width, 8.0);
        assert_eq!(style.color, "#000000");
        assert_eq!(style.opacity, 1.0);

        style.apply(StylePatch::opacity(4.0));
        assert_eq!(style.opacity, 1.0);
    }

    #[test]
    fn test_tool_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Tool::Eraser).unwrap(), "\"eraser\"");
        let tool: Tool = serde_json::from_str("\"shape\"").unwrap();
        assert_eq!(tool, Tool::Shape);
    }
}
