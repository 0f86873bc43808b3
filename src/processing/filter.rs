use crate::geometry::distance;
use crate::stroke::Point;

/// Default minimum spacing between kept points, in normalized units
pub const DEFAULT_MIN_DISTANCE: f64 = 0.002;

/// Drop micro-movements.
///
/// The first point is always kept. Every later point survives only if it is
/// at least `min_distance` away from the last point that survived, so the
/// output is a fixed point of the same filter.
pub fn filter_noise(points: &[Point], min_distance: f64) -> Vec<Point> {
    let Some(&first) = points.first() else {
        return Vec::new();
    };

    let mut filtered = Vec::with_capacity(points.len());
    filtered.push(first);
    let mut last_kept = first;

    for point in &points[1..] {
        if distance(&last_kept, point) >= min_distance {
            filtered.push(*point);
            last_kept = *point;
        }
    }

    filtered
}
