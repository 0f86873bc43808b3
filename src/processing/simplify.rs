use crate::geometry::distance_to_segment;
use crate::stroke::Point;

/// Default simplification tolerance, in normalized units
pub const DEFAULT_TOLERANCE: f64 = 0.001;

/// Douglas-Peucker path reduction.
///
/// Between a fixed start and end, the interior point farthest from the chord
/// is kept when its distance exceeds `tolerance`, and both halves are
/// processed on their own. Otherwise the whole span collapses to its two
/// endpoints. The endpoints of the input are always kept.
///
/// Spans are processed from an explicit work stack, so pathological inputs
/// cannot overflow the call stack.
pub fn simplify(points: &[Point], tolerance: f64) -> Vec<Point> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let last = points.len() - 1;
    let mut kept = vec![false; points.len()];
    kept[0] = true;
    kept[last] = true;

    let mut spans = vec![(0, last)];
    while let Some((start, end)) = spans.pop() {
        if end <= start + 1 {
            continue;
        }

        let mut max_dist = 0.0;
        let mut max_index = start;
        for i in (start + 1)..end {
            let dist = distance_to_segment(&points[i], &points[start], &points[end]);
            if dist > max_dist {
                max_dist = dist;
                max_index = i;
            }
        }

        // A span with no interior point off the chord never splits, even
        // when a negative tolerance would otherwise accept a zero distance
        if max_index > start && max_dist > tolerance {
            kept[max_index] = true;
            spans.push((start, max_index));
            spans.push((max_index, end));
        }
    }

    points
        .iter()
        .zip(&kept)
        .filter(|&(_, keep)| *keep)
        .map(|(point, _)| *point)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y, 0.0)
    }

    #[test]
    fn test_two_points_unchanged() {
        let points = vec![p(0.0, 0.0), p(1.0, 1.0)];
        assert_eq!(simplify(&points, DEFAULT_TOLERANCE), points);
    }

    #[test]
    fn test_negative_tolerance_terminates() {
        let points: Vec<Point> = (0..5).map(|i| p(i as f64 * 0.2, 0.5)).collect();
        assert_eq!(simplify(&points, -0.001), vec![points[0], points[4]]);

        let bent = vec![p(0.0, 0.0), p(0.5, 0.1), p(1.0, 0.0)];
        assert_eq!(simplify(&bent, -1.0), bent);
    }

    #[test]
    fn test_collinear_collapses_to_endpoints() {
        let points: Vec<Point> = (0..10).map(|i| p(i as f64 * 0.1, i as f64 * 0.05)).collect();
        let simplified = simplify(&points, DEFAULT_TOLERANCE);
        assert_eq!(simplified, vec![points[0], points[9]]);
    }

    #[test]
    fn test_peak_above_tolerance_is_kept() {
        let points = vec![p(0.0, 0.0), p(0.25, 0.1), p(0.5, 0.2), p(0.75, 0.1), p(1.0, 0.0)];
        let simplified = simplify(&points, 0.01);
        assert_eq!(simplified, vec![points[0], points[2], points[4]]);
    }

    #[test]
    fn test_output_keeps_input_order() {
        let points = vec![p(0.0, 0.0), p(0.2, 0.3), p(0.4, 0.0), p(0.6, 0.3), p(0.8, 0.0)];
        let simplified = simplify(&points, 0.01);
        assert_eq!(simplified, points);
    }

    #[test]
    fn test_closed_loop_uses_point_distance() {
        // Start and end coincide, so the chord is degenerate
        let points = vec![p(0.5, 0.5), p(0.6, 0.5), p(0.6, 0.6), p(0.5, 0.5)];
        let simplified = simplify(&points, 0.01);
        assert_eq!(simplified.first(), Some(&points[0]));
        assert_eq!(simplified.last(), Some(&points[3]));
        assert!(simplified.len() >= 3);
    }
}
