//! Arc tessellation and coordinate extraction for arc-marked contours.

use std::f64::consts::FRAC_PI_6;

use crate::geometry::Vertex;
use crate::math::arc_2d::tessellate_arc;
use crate::math::{points_close, Point2};

/// Tolerance used when merging duplicate coordinates during extraction.
const DEDUP_TOLERANCE: f64 = 1e-9;

/// Controls for replacing circular arcs with chord fans.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TessellationParams {
    /// Maximum allowed sagitta of any emitted chord. Zero disables the
    /// chord-error criterion entirely.
    pub max_chord_error: f64,
    /// Maximum angle subtended by any emitted chord, in radians.
    pub max_arc_angle: f64,
    /// Hard ceiling on the number of points generated per arc.
    pub max_points: usize,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            max_chord_error: 0.0,
            max_arc_angle: FRAC_PI_6,
            max_points: 8,
        }
    }
}

/// Flattens an arc-marked vertex sequence into bare coordinates.
///
/// Each `Point, Arc, Point` triple is replaced by the first point followed
/// by the tessellation of the arc; the arc's end point then starts the next
/// edge. Consecutive duplicate coordinates are merged. Markers that are not
/// framed by two ordinary vertices carry no geometry and are dropped with a
/// warning. The output is left open even when the input describes a ring.
#[must_use]
pub fn extract_coordinates(vertices: &[Vertex], params: &TessellationParams) -> Vec<Point2> {
    let mut out: Vec<Point2> = Vec::with_capacity(vertices.len());
    let mut i = 0;
    while i < vertices.len() {
        match vertices[i] {
            Vertex::Point(start) => {
                if let (Some(&Vertex::Arc { height }), Some(&Vertex::Point(end))) =
                    (vertices.get(i + 1), vertices.get(i + 2))
                {
                    push_merged(&mut out, start);
                    let fan = tessellate_arc(
                        &start,
                        &end,
                        height,
                        params.max_chord_error,
                        params.max_arc_angle,
                        params.max_points,
                    );
                    // The last fan point is the arc end, emitted when the
                    // walk reaches it as the next edge's start.
                    for p in fan.iter().take(fan.len().saturating_sub(1)) {
                        push_merged(&mut out, *p);
                    }
                    i += 2;
                } else {
                    push_merged(&mut out, start);
                    i += 1;
                }
            }
            Vertex::Arc { .. } => {
                tracing::warn!(index = i, "dropping arc marker without framing vertices");
                i += 1;
            }
        }
    }
    out
}

fn push_merged(out: &mut Vec<Point2>, p: Point2) {
    if out
        .last()
        .is_none_or(|last| !points_close(last, &p, DEDUP_TOLERANCE))
    {
        out.push(p);
    }
}

/// Repairs a raw vertex list into a well-formed closed contour.
///
/// Arc markers need an ordinary vertex on both sides. A marker at the head
/// of the list gets the contour's last ordinary point inserted before it,
/// one at the tail gets the first ordinary point appended after it, since
/// the contour wraps. Near-duplicate consecutive points are then merged and
/// the ring is closed by repeating the first point when needed.
#[must_use]
pub fn sanitize_vertices(vertices: &[Vertex]) -> Vec<Vertex> {
    if vertices.is_empty() {
        return Vec::new();
    }
    let mut work: Vec<Vertex> = vertices.to_vec();

    if work[0].is_arc() {
        let prev = if work.len() > 1 && work[work.len() - 1].is_arc() {
            work[work.len() - 2]
        } else {
            work[work.len() - 1]
        };
        if let Some(p) = prev.as_point() {
            work.insert(0, Vertex::Point(p));
        }
    }
    if work[work.len() - 1].is_arc() {
        let next = if work[0].is_arc() {
            work.get(1).copied()
        } else {
            Some(work[0])
        };
        if let Some(p) = next.and_then(|v| v.as_point()) {
            work.push(Vertex::Point(p));
        }
    }

    let mut out: Vec<Vertex> = Vec::with_capacity(work.len() + 1);
    for v in &work {
        match (out.last(), v) {
            (Some(Vertex::Point(last)), Vertex::Point(p))
                if points_close(last, p, DEDUP_TOLERANCE) => {}
            _ => out.push(*v),
        }
    }

    if let (Some(Vertex::Point(first)), Some(Vertex::Point(last))) = (out.first(), out.last()) {
        if out.len() > 1 && !points_close(first, last, DEDUP_TOLERANCE) {
            out.push(Vertex::Point(*first));
        }
    }
    out
}
