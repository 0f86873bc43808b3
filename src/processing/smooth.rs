use crate::stroke::Point;

/// Single-pass 1-2-1 neighborhood average.
///
/// Endpoints pass through unchanged. Interior points move toward their
/// neighbors; timestamps and pressure are left alone. Each interior point is
/// computed from the unsmoothed input, never from already-smoothed output.
pub fn smooth(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut smoothed = Vec::with_capacity(points.len());
    smoothed.push(points[0]);

    for window in points.windows(3) {
        let (prev, cur, next) = (&window[0], &window[1], &window[2]);
        smoothed.push(Point {
            x: 0.25 * prev.x + 0.5 * cur.x + 0.25 * next.x,
            y: 0.25 * prev.y + 0.5 * cur.y + 0.25 * next.y,
            t: cur.t,
            pressure: cur.pressure,
        });
    }

    smoothed.push(points[points.len() - 1]);
    smoothed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_sequences_unchanged() {
        let points = vec![Point::new(0.0, 0.0, 0.0), Point::new(1.0, 1.0, 1.0)];
        assert_eq!(smooth(&points), points);
    }

    #[test]
    fn test_interior_point_is_weighted_average() {
        let points = [
            Point::new(0.0, 0.0, 0.0),
            Point::new(0.4, 0.8, 10.0).with_pressure(0.3),
            Point::new(0.8, 0.0, 20.0),
        ];
        let smoothed = smooth(&points);
        assert_eq!(smoothed.len(), 3);
        assert!((smoothed[1].x - 0.4).abs() < 1e-12);
        assert!((smoothed[1].y - 0.4).abs() < 1e-12);
        assert_eq!(smoothed[1].t, 10.0);
        assert_eq!(smoothed[1].pressure, Some(0.3));
    }

    #[test]
    fn test_uses_original_neighbors() {
        let points = [
            Point::new(0.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 1.0),
            Point::new(0.0, 0.0, 2.0),
            Point::new(0.0, 1.0, 3.0),
        ];
        let smoothed = smooth(&points);
        // Point 2 averages (1.0, 0.0, 1.0) from the input, not the smoothed 0.5
        assert!((smoothed[2].y - 0.5).abs() < 1e-12);
        assert!((smoothed[1].y - 0.5).abs() < 1e-12);
    }
}
