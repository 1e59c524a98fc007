//! 2D arc math for sagitta-encoded arcs.
//!
//! Sagitta ("arc height") convention:
//! - `height = 0`: straight line
//! - `height > 0`: clockwise arc
//! - `height < 0`: counter-clockwise arc
//! - `|height| = radius`: semicircle; `|height| > radius` selects the major arc

use std::f64::consts::PI;

use super::{Point2, ARC_EPSILON};

/// Converts a sagitta-defined arc segment to center-radius-angle form.
///
/// Returns `(center, radius, start_angle, sweep)` where `sweep` is signed
/// (negative for clockwise, i.e. positive `height`). Returns `None` for
/// degenerate input: near-zero height or near-zero chord.
#[must_use]
pub fn arc_from_sagitta(start: &Point2, end: &Point2, height: f64) -> Option<(Point2, f64, f64, f64)> {
    if height.abs() < ARC_EPSILON {
        return None;
    }

    let chord_dx = end.x - start.x;
    let chord_dy = end.y - start.y;
    let chord_length = (chord_dx * chord_dx + chord_dy * chord_dy).sqrt();
    if chord_length < ARC_EPSILON {
        return None;
    }

    // r = (h² + (c/2)²) / (2h), the sagitta relation.
    let h = height.abs();
    let radius = (h * h + (chord_length / 2.0) * (chord_length / 2.0)) / (2.0 * h);

    let mid_x = (start.x + end.x) / 2.0;
    let mid_y = (start.y + end.y) / 2.0;

    // Unit perpendicular to the chord, pointing right of start→end travel.
    let perp_x = chord_dy / chord_length;
    let perp_y = -chord_dx / chord_length;

    // Positive height places the center right of the chord, negative left.
    let (center_x, center_y) = if height < 0.0 {
        (
            mid_x - perp_x * (radius + height),
            mid_y - perp_y * (radius + height),
        )
    } else {
        (
            mid_x + perp_x * (radius - height),
            mid_y + perp_y * (radius - height),
        )
    };
    let center = Point2::new(center_x, center_y);

    let dot = (start.x - center_x) * (end.x - center_x) + (start.y - center_y) * (end.y - center_y);
    let mut span = (dot / (radius * radius)).clamp(-1.0, 1.0).acos();

    // Sagitta exceeding the radius means the major arc was encoded.
    if radius <= h {
        span = 2.0 * PI - span;
    }

    let sweep = if height < 0.0 { span } else { -span };
    let start_angle = (start.y - center_y).atan2(start.x - center_x);

    Some((center, radius, start_angle, sweep))
}

/// Tessellates a sagitta-defined arc into line segments.
///
/// Returns the points from just past `start` through `end` inclusive; the
/// start point itself is never emitted. Degenerate arcs (near-zero height or
/// chord) resolve to the single point `[end]`.
///
/// Segment count satisfies both `max_arc_angle` (radians per segment) and
/// `max_chord_error` (sagitta of each emitted segment, `0` disables), but is
/// always capped at `max_points` — undersampling a highly curved arc degrades
/// the approximation rather than erroring.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn tessellate_arc(
    start: &Point2,
    end: &Point2,
    height: f64,
    max_chord_error: f64,
    max_arc_angle: f64,
    max_points: usize,
) -> Vec<Point2> {
    let Some((center, radius, start_angle, sweep)) = arc_from_sagitta(start, end, height) else {
        return vec![*end];
    };

    let total_angle = sweep.abs();

    let num_segments_angle = ((total_angle / max_arc_angle).ceil() as usize).max(1);

    let num_segments_error = if max_chord_error > 0.0 {
        // Per-segment sagitta e = r·(1 − cos(θ/2)), solved for θ.
        // Clamp below at 0 so an error bound beyond the radius caps the
        // segment angle at pi instead of letting acos reach it.
        let max_segment_angle = 2.0 * (1.0 - max_chord_error / radius).clamp(0.0, 1.0).acos();
        if max_segment_angle > 0.0 {
            ((total_angle / max_segment_angle).ceil() as usize).max(1)
        } else {
            max_points
        }
    } else {
        1
    };

    // max_points caps unconditionally; zero yields no points at all.
    let num_segments = num_segments_angle.max(num_segments_error).min(max_points);

    let angle_step = sweep / num_segments as f64;
    let mut points = Vec::with_capacity(num_segments);
    for i in 1..=num_segments {
        let angle = start_angle + angle_step * i as f64;
        points.push(Point2::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        ));
    }

    points
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn semicircle_cw_center_and_sweep() {
        // Clockwise semicircle from (0,0) to (2,0), height = radius = 1.
        let (c, r, sa, sw) =
            arc_from_sagitta(&Point2::new(0.0, 0.0), &Point2::new(2.0, 0.0), 1.0).unwrap();
        assert!((c.x - 1.0).abs() < TOL, "cx={}", c.x);
        assert!(c.y.abs() < TOL, "cy={}", c.y);
        assert!((r - 1.0).abs() < TOL, "r={r}");
        assert!((sa - PI).abs() < TOL, "start_angle={sa}");
        assert!((sw + PI).abs() < TOL, "sweep={sw}");
    }

    #[test]
    fn semicircle_ccw_sweep_positive() {
        let (_, _, _, sw) =
            arc_from_sagitta(&Point2::new(0.0, 0.0), &Point2::new(2.0, 0.0), -1.0).unwrap();
        assert!((sw - PI).abs() < TOL, "sweep={sw}");
    }

    #[test]
    fn degenerate_height_is_none() {
        assert!(arc_from_sagitta(&Point2::new(0.0, 0.0), &Point2::new(2.0, 0.0), 1e-13).is_none());
    }

    #[test]
    fn degenerate_chord_is_none() {
        assert!(arc_from_sagitta(&Point2::new(1.0, 1.0), &Point2::new(1.0, 1.0), 0.5).is_none());
    }

    #[test]
    fn major_arc_sweep_exceeds_pi() {
        // Height beyond the semicircle: 3/4 circle, radius from the sagitta relation.
        let (_, r, _, sw) =
            arc_from_sagitta(&Point2::new(0.0, 0.0), &Point2::new(2.0, 0.0), 2.0).unwrap();
        assert!(r < 2.0, "r={r}");
        assert!(sw.abs() > PI, "sweep={sw}");
    }

    #[test]
    fn tessellate_degenerate_returns_end_only() {
        let end = Point2::new(2.0, 0.0);
        let pts = tessellate_arc(&Point2::new(0.0, 0.0), &end, 0.0, 0.0, PI / 6.0, 8);
        assert_eq!(pts.len(), 1);
        assert!((pts[0] - end).norm() < TOL);

        let same = Point2::new(1.0, 1.0);
        let pts = tessellate_arc(&same, &same, 0.5, 0.0, PI / 6.0, 8);
        assert_eq!(pts.len(), 1);
        assert!((pts[0] - same).norm() < TOL);
    }

    #[test]
    fn tessellate_ends_at_end_point() {
        let end = Point2::new(2.0, 0.0);
        let pts = tessellate_arc(&Point2::new(0.0, 0.0), &end, 1.0, 0.0, PI / 6.0, 8);
        let last = pts.last().unwrap();
        assert!((last - end).norm() < 1e-9, "last={last:?}");
    }

    #[test]
    fn tessellate_points_lie_on_circle() {
        let start = Point2::new(0.0, 0.0);
        let end = Point2::new(2.0, 0.0);
        let (center, radius, _, _) = arc_from_sagitta(&start, &end, 1.0).unwrap();
        let pts = tessellate_arc(&start, &end, 1.0, 0.0, PI / 6.0, 8);
        for p in &pts {
            assert!(((p - center).norm() - radius).abs() < 1e-9, "off-circle point {p:?}");
        }
    }

    #[test]
    fn max_points_is_a_hard_ceiling() {
        // Very fine chord error and angle bounds would demand far more segments.
        let pts = tessellate_arc(
            &Point2::new(0.0, 0.0),
            &Point2::new(2.0, 0.0),
            1.0,
            1e-9,
            1e-4,
            8,
        );
        assert!(pts.len() <= 8, "len={}", pts.len());
    }

    #[test]
    fn chord_error_bound_matches_closed_form() {
        // Semicircle of radius 1 with e = r·(1 − cos(π/8)) ⇒ segment angle π/4,
        // so the error bound alone demands ceil(π / (π/4)) = 4 segments.
        let e = 1.0 - (PI / 8.0).cos();
        let pts = tessellate_arc(
            &Point2::new(0.0, 0.0),
            &Point2::new(2.0, 0.0),
            1.0,
            e,
            1e6,
            1000,
        );
        let expected = (PI / (2.0 * (1.0 - e).acos())).ceil() as usize;
        assert_eq!(pts.len(), expected);
        assert_eq!(pts.len(), 4);
    }

    #[test]
    fn oversized_chord_error_still_caps_segment_angle_at_pi() {
        // e = 3 on a radius-1.25 major arc: 1 − e/r < 0 clamps to 0, so the
        // segment angle is π and the 4.429 rad sweep still needs 2 segments.
        let pts = tessellate_arc(
            &Point2::new(0.0, 0.0),
            &Point2::new(2.0, 0.0),
            2.0,
            3.0,
            1e9,
            1000,
        );
        assert_eq!(pts.len(), 2);
    }

    #[test]
    fn zero_max_points_emits_nothing() {
        let pts = tessellate_arc(
            &Point2::new(0.0, 0.0),
            &Point2::new(2.0, 0.0),
            1.0,
            0.0,
            PI / 6.0,
            0,
        );
        assert!(pts.is_empty());
    }

    #[test]
    fn clockwise_semicircle_passes_through_top() {
        let pts = tessellate_arc(
            &Point2::new(0.0, 0.0),
            &Point2::new(2.0, 0.0),
            1.0,
            0.0,
            PI / 2.0,
            8,
        );
        // Midpoint of a positive-height (clockwise) semicircle bulges to (1, 1).
        assert!(
            pts.iter().any(|p| (p.x - 1.0).abs() < 1e-9 && (p.y - 1.0).abs() < 1e-9),
            "pts={pts:?}"
        );
    }
}
