use crate::math::Point2;

/// A single entry in a polygon contour.
///
/// An `Arc` entry is not a coordinate: it carries the signed sagitta of the
/// circular arc joining the ordinary vertices on either side of it, and
/// contributes nothing to direct coordinate iteration. Positive height bends
/// the arc clockwise, negative counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Vertex {
    /// An ordinary coordinate vertex.
    Point(Point2),
    /// Sagitta marker for the arc between the neighboring ordinary vertices.
    Arc { height: f64 },
}

impl Vertex {
    /// Creates an ordinary coordinate vertex.
    #[must_use]
    pub fn point(x: f64, y: f64) -> Self {
        Self::Point(Point2::new(x, y))
    }

    /// Creates an arc marker with the given signed sagitta.
    #[must_use]
    pub fn arc(height: f64) -> Self {
        Self::Arc { height }
    }

    /// Whether this entry is an arc marker.
    #[must_use]
    pub fn is_arc(&self) -> bool {
        matches!(self, Self::Arc { .. })
    }

    /// The coordinate of an ordinary vertex, `None` for an arc marker.
    #[must_use]
    pub fn as_point(&self) -> Option<Point2> {
        match self {
            Self::Point(p) => Some(*p),
            Self::Arc { .. } => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn arc_marker_has_no_coordinate() {
        let v = Vertex::arc(0.5);
        assert!(v.is_arc());
        assert!(v.as_point().is_none());
    }

    #[test]
    fn point_vertex_roundtrip() {
        let v = Vertex::point(1.5, -2.0);
        assert!(!v.is_arc());
        let p = v.as_point().unwrap();
        assert!((p.x - 1.5).abs() < 1e-12);
        assert!((p.y + 2.0).abs() < 1e-12);
    }
}
