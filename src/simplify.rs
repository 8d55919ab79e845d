//! Path simplification (Ramer-Douglas-Peucker).
//!
//! Strips sampling jitter from a raw pointer trace while preserving shape.
//! Only removes points; never synthesizes new ones, so every output point
//! keeps its original timestamp.

use crate::stroke::StrokePoint;

/// Simplify a polyline to its essential vertices.
///
/// Points within `tolerance` canvas pixels of the chord between their
/// neighbors are dropped. Polylines with two or fewer points are returned
/// unchanged. Deterministic; endpoints always survive.
pub fn simplify(points: &[StrokePoint], tolerance: f64) -> Vec<StrokePoint> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[points.len() - 1] = true;
    rdp(points, 0, points.len() - 1, tolerance, &mut keep);

    points
        .iter()
        .zip(&keep)
        .filter(|&(_, kept)| *kept)
        .map(|(&p, _)| p)
        .collect()
}

/// Recursive RDP step: mark the farthest point from the chord
/// `points[first]..points[last]` as kept and recurse into both halves,
/// but only when it exceeds the tolerance.
fn rdp(points: &[StrokePoint], first: usize, last: usize, tolerance: f64, keep: &mut [bool]) {
    if last <= first + 1 {
        return;
    }

    let mut max_distance = 0.0;
    let mut max_index = first;
    for i in first + 1..last {
        let distance = perpendicular_distance(points[i], points[first], points[last]);
        if distance > max_distance {
            max_distance = distance;
            max_index = i;
        }
    }

    if max_distance > tolerance {
        keep[max_index] = true;
        rdp(points, first, max_index, tolerance, keep);
        rdp(points, max_index, last, tolerance, keep);
    }
}

/// Distance from `p` to the chord `a..b`. A degenerate (zero-length)
/// chord degrades to the Euclidean distance to the shared endpoint.
fn perpendicular_distance(p: StrokePoint, a: StrokePoint, b: StrokePoint) -> f64 {
    let chord = b.pos() - a.pos();
    let len2 = chord.hypot2();
    if len2 == 0.0 {
        return a.pos().distance(p.pos());
    }
    let t = (p.pos() - a.pos()).dot(chord) / len2;
    let projected = a.pos() + chord * t;
    projected.distance(p.pos())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zigzag() -> Vec<StrokePoint> {
        vec![
            StrokePoint::new(0.0, 0.0, 0.0),
            StrokePoint::new(50.0, 100.0, 1.0),
            StrokePoint::new(100.0, 0.0, 2.0),
        ]
    }

    #[test]
    fn high_tolerance_collapses_to_endpoints() {
        let points = zigzag();
        let result = simplify(&points, 200.0);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0], points[0]);
        assert_eq!(result[1], points[2]);
    }

    #[test]
    fn endpoints_are_preserved() {
        let points: Vec<StrokePoint> = (0..20)
            .map(|i| {
                let x = i as f64 * 10.0;
                StrokePoint::new(x, (x * 0.1).sin() * 40.0, i as f64)
            })
            .collect();
        let result = simplify(&points, 5.0);
        assert_eq!(result.first(), points.first());
        assert_eq!(result.last(), points.last());
    }

    #[test]
    fn simplification_is_idempotent() {
        let points: Vec<StrokePoint> = (0..50)
            .map(|i| {
                let x = i as f64 * 4.0;
                StrokePoint::new(x, (x * 0.07).sin() * 60.0 + (i % 3) as f64, i as f64)
            })
            .collect();
        let once = simplify(&points, 2.0);
        let twice = simplify(&once, 2.0);
        assert_eq!(once, twice);
    }

    #[test]
    fn short_input_is_unchanged() {
        let points = vec![
            StrokePoint::new(3.0, 4.0, 0.0),
            StrokePoint::new(5.0, 6.0, 1.0),
        ];
        assert_eq!(simplify(&points, 10.0), points);
    }

    #[test]
    fn degenerate_chord_uses_endpoint_distance() {
        // First and last point coincide; the middle point survives when it
        // is farther from them than the tolerance.
        let points = vec![
            StrokePoint::new(10.0, 10.0, 0.0),
            StrokePoint::new(40.0, 10.0, 1.0),
            StrokePoint::new(10.0, 10.0, 2.0),
        ];
        let result = simplify(&points, 5.0);
        assert_eq!(result.len(), 3);
    }
}
