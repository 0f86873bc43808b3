use crate::stroke::Point;

/// Euclidean distance between two points, ignoring time and pressure
pub fn distance(a: &Point, b: &Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Distance from `point` to the segment `line_start..line_end`.
///
/// The projection is clamped onto the segment, so points beyond either end
/// measure to that endpoint. A zero-length segment falls back to plain
/// point-to-point distance.
pub fn distance_to_segment(point: &Point, line_start: &Point, line_end: &Point) -> f64 {
    let dx = line_end.x - line_start.x;
    let dy = line_end.y - line_start.y;

    let length_sq = dx * dx + dy * dy;
    if length_sq == 0.0 {
        return distance(point, line_start);
    }

    let t = (((point.x - line_start.x) * dx + (point.y - line_start.y) * dy) / length_sq)
        .clamp(0.0, 1.0);

    let proj_x = line_start.x + t * dx;
    let proj_y = line_start.y + t * dy;

    ((point.x - proj_x).powi(2) + (point.y - proj_y).powi(2)).sqrt()
}
