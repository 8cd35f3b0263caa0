use crate::prelude::ScreenPoint;

/// Shortest distance from `point` to the segment `a`-`b`.
pub fn distance_to_segment(point: ScreenPoint, a: ScreenPoint, b: ScreenPoint) -> f32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let length_sq = dx * dx + dy * dy;
    if length_sq <= f32::EPSILON {
        return point.distance(a);
    }
    let t = (((point.x - a.x) * dx + (point.y - a.y) * dy) / length_sq).clamp(0.0, 1.0);
    point.distance(ScreenPoint::new(a.x + t * dx, a.y + t * dy))
}

/// Shortest distance from `point` to a polyline. A single-vertex line is
/// treated as a point; an empty one is infinitely far away.
pub fn distance_to_polyline(point: ScreenPoint, line: &[ScreenPoint]) -> f32 {
    match line {
        [] => f32::INFINITY,
        [only] => point.distance(*only),
        _ => line
            .windows(2)
            .map(|pair| distance_to_segment(point, pair[0], pair[1]))
            .fold(f32::INFINITY, f32::min),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perpendicular_distance_to_segment() {
        let d = distance_to_segment(
            ScreenPoint::new(5.0, 3.0),
            ScreenPoint::new(0.0, 0.0),
            ScreenPoint::new(10.0, 0.0),
        );
        assert_eq!(d, 3.0);
    }

    #[test]
    fn distance_past_segment_end_uses_endpoint() {
        let d = distance_to_segment(
            ScreenPoint::new(13.0, 4.0),
            ScreenPoint::new(0.0, 0.0),
            ScreenPoint::new(10.0, 0.0),
        );
        assert_eq!(d, 5.0);
    }

    #[test]
    fn polyline_takes_nearest_segment() {
        let line = [
            ScreenPoint::new(0.0, 0.0),
            ScreenPoint::new(10.0, 0.0),
            ScreenPoint::new(10.0, 10.0),
        ];
        assert_eq!(distance_to_polyline(ScreenPoint::new(12.0, 5.0), &line), 2.0);
        assert_eq!(distance_to_polyline(ScreenPoint::new(1.0, 1.0), &[]), f32::INFINITY);
    }
}
