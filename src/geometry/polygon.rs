use crate::geometry::Vertex;
use crate::math::{points_close, values_close, Point2, TOLERANCE};
use crate::tessellation::{extract_coordinates, TessellationParams};

/// Winding sense of a polygon contour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonSense {
    Ccw,
    Cw,
    Unknown,
}

/// A polygon contour whose vertex list may interleave arc markers.
///
/// The outer contour and each hole are sequences of [`Vertex`] values; an
/// `Arc` marker between two points bends the edge joining them. Conversion
/// to a linear-ring representation goes through [`PolygonData::without_arcs`].
#[derive(Debug)]
pub struct PolygonData {
    vertices: Vec<Vertex>,
    holes: Vec<PolygonData>,
    closed: bool,
    sense: PolygonSense,
    #[cfg(feature = "planar")]
    pub(crate) planar_cache: std::sync::OnceLock<geo::Polygon<f64>>,
}

impl PolygonData {
    #[must_use]
    pub fn new(vertices: Vec<Vertex>, closed: bool) -> Self {
        Self {
            vertices,
            holes: Vec::new(),
            closed,
            sense: PolygonSense::Ccw,
            #[cfg(feature = "planar")]
            planar_cache: std::sync::OnceLock::new(),
        }
    }

    /// Closed contour from bare coordinates, no arcs.
    #[must_use]
    pub fn from_coords(coords: &[(f64, f64)]) -> Self {
        let vertices = coords.iter().map(|&(x, y)| Vertex::point(x, y)).collect();
        Self::new(vertices, true)
    }

    #[must_use]
    pub fn with_holes(mut self, holes: Vec<PolygonData>) -> Self {
        self.holes = holes;
        self
    }

    #[must_use]
    pub fn with_sense(mut self, sense: PolygonSense) -> Self {
        self.sense = sense;
        self
    }

    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[must_use]
    pub fn holes(&self) -> &[PolygonData] {
        &self.holes
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[must_use]
    pub fn sense(&self) -> PolygonSense {
        self.sense
    }

    /// Whether any contour (outer or hole) carries an arc marker.
    #[must_use]
    pub fn has_arcs(&self) -> bool {
        self.vertices.iter().any(Vertex::is_arc) || self.holes.iter().any(PolygonData::has_arcs)
    }

    /// The point vertices of the outer contour, markers skipped.
    pub fn points(&self) -> impl Iterator<Item = Point2> + '_ {
        self.vertices.iter().filter_map(Vertex::as_point)
    }

    /// A copy with every arc replaced by its tessellation.
    ///
    /// Holes are converted recursively with the same parameters. The result
    /// never contains arc markers.
    #[must_use]
    pub fn without_arcs(&self, params: &TessellationParams) -> Self {
        let vertices = extract_coordinates(&self.vertices, params)
            .into_iter()
            .map(Vertex::Point)
            .collect();
        let holes = self
            .holes
            .iter()
            .map(|h| h.without_arcs(params))
            .collect();
        Self {
            vertices,
            holes,
            closed: self.closed,
            sense: self.sense,
            #[cfg(feature = "planar")]
            planar_cache: std::sync::OnceLock::new(),
        }
    }

    /// Whether the outer contour is a rectangle, in any orientation.
    ///
    /// Deduplicates the closed ring, drops collinear midpoints, and requires
    /// exactly four remaining corners with a perpendicular turn at each.
    /// Arcs and holes disqualify the contour outright.
    #[must_use]
    pub fn is_box(&self) -> bool {
        if self.has_arcs() || !self.closed || !self.holes.is_empty() {
            return false;
        }
        let mut ring: Vec<Point2> = Vec::new();
        for p in self.points() {
            if ring.last().is_none_or(|last| !points_close(last, &p, TOLERANCE)) {
                ring.push(p);
            }
        }
        if ring.len() > 1 {
            if let (Some(first), Some(last)) = (ring.first().copied(), ring.last().copied()) {
                if points_close(&first, &last, TOLERANCE) {
                    ring.pop();
                }
            }
        }
        if ring.len() < 4 {
            return false;
        }
        // Drop vertices where the contour does not turn.
        let corners: Vec<Point2> = (0..ring.len())
            .filter(|&i| {
                let a = ring[(i + ring.len() - 1) % ring.len()];
                let b = ring[i];
                let c = ring[(i + 1) % ring.len()];
                let e1 = b - a;
                let e2 = c - b;
                if e1.norm() < TOLERANCE || e2.norm() < TOLERANCE {
                    return true;
                }
                let dot = e1.normalize().dot(&e2.normalize());
                !values_close(dot, 1.0, TOLERANCE)
            })
            .map(|i| ring[i])
            .collect();
        if corners.len() != 4 {
            return false;
        }
        for i in 0..4 {
            let a = corners[i];
            let b = corners[(i + 1) % 4];
            let c = corners[(i + 2) % 4];
            let e1 = b - a;
            let e2 = c - b;
            if e1.norm() < TOLERANCE || e2.norm() < TOLERANCE {
                return false;
            }
            let dot = e1.normalize().dot(&e2.normalize());
            if !values_close(dot, 0.0, TOLERANCE) {
                return false;
            }
        }
        true
    }
}

impl Clone for PolygonData {
    fn clone(&self) -> Self {
        Self {
            vertices: self.vertices.clone(),
            holes: self.holes.clone(),
            closed: self.closed,
            sense: self.sense,
            #[cfg(feature = "planar")]
            planar_cache: std::sync::OnceLock::new(),
        }
    }
}

impl PartialEq for PolygonData {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
            && self.holes == other.holes
            && self.closed == other.closed
            && self.sense == other.sense
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn unit_square() -> PolygonData {
        PolygonData::from_coords(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)])
    }

    #[test]
    fn square_is_box() {
        assert!(unit_square().is_box());
    }

    #[test]
    fn closing_duplicate_vertex_still_a_box() {
        let p = PolygonData::from_coords(&[
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 10.0),
            (0.0, 10.0),
            (0.0, 0.0),
        ]);
        assert!(p.is_box());
    }

    #[test]
    fn rotated_square_is_still_a_box() {
        let p = PolygonData::from_coords(&[(5.0, 0.0), (10.0, 5.0), (5.0, 10.0), (0.0, 5.0)]);
        assert!(p.is_box());
    }

    #[test]
    fn collinear_edge_subdivision_is_still_a_box() {
        let p = PolygonData::from_coords(&[
            (0.0, 0.0),
            (5.0, 0.0),
            (10.0, 0.0),
            (10.0, 10.0),
            (0.0, 10.0),
        ]);
        assert!(p.is_box());
    }

    #[test]
    fn l_shape_is_not_a_box() {
        let p = PolygonData::from_coords(&[
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 5.0),
            (5.0, 5.0),
            (5.0, 10.0),
            (0.0, 10.0),
        ]);
        assert!(!p.is_box());
    }

    #[test]
    fn triangle_is_not_a_box() {
        let p = PolygonData::from_coords(&[(0.0, 0.0), (5.0, 0.0), (2.5, 5.0)]);
        assert!(!p.is_box());
    }

    #[test]
    fn contour_with_arc_is_not_a_box() {
        let mut p = unit_square();
        p.vertices.insert(1, Vertex::arc(2.0));
        assert!(p.has_arcs());
        assert!(!p.is_box());
    }

    #[test]
    fn without_arcs_removes_markers() {
        let verts = vec![
            Vertex::point(0.0, 0.0),
            Vertex::arc(1.0),
            Vertex::point(2.0, 0.0),
            Vertex::point(2.0, 2.0),
        ];
        let p = PolygonData::new(verts, true);
        let flat = p.without_arcs(&TessellationParams::default());
        assert!(!flat.has_arcs());
        assert!(flat.points().count() > 3);
    }

    #[test]
    fn clone_and_eq_ignore_conversion_state() {
        let p = unit_square();
        let q = p.clone();
        assert_eq!(p, q);
    }
}
