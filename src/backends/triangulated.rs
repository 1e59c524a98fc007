//! Local backend built on a constrained Delaunay triangulation.
//!
//! Covers `area` by triangulating the contour and summing the triangles
//! that fall inside the polygon, plus `alpha_shape` by delegating to the
//! remote service when one is available. Everything else is unsupported.

use std::sync::Arc;

use spade::{
    ConstrainedDelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation,
};

use crate::config::BackendKind;
use crate::error::{BackendError, GeometryError, Result};
use crate::geometry::PolygonData;
use crate::math::polygon_2d::point_in_ring;
use crate::math::{points_close, Point2};
use crate::tessellation::{extract_coordinates, sanitize_vertices, TessellationParams};

use super::{PolygonBackend, PolygonService};

type Cdt = ConstrainedDelaunayTriangulation<SpadePoint2<f64>>;

#[derive(Default)]
pub struct TriangulatedBackend {
    service: Option<Arc<dyn PolygonService>>,
}

impl TriangulatedBackend {
    #[must_use]
    pub fn new() -> Self {
        Self { service: None }
    }

    /// Attaches a service handle used only for `alpha_shape` delegation.
    #[must_use]
    pub fn with_service(service: Arc<dyn PolygonService>) -> Self {
        Self {
            service: Some(service),
        }
    }

    fn ring(contour: &PolygonData) -> Vec<Point2> {
        let mut points = extract_coordinates(
            &sanitize_vertices(contour.vertices()),
            &TessellationParams::default(),
        );
        // The sanitizer closes the ring; the triangulation wants each
        // vertex once.
        if points.len() > 1 {
            let first = points[0];
            if let Some(last) = points.last() {
                if points_close(&first, last, crate::math::TOLERANCE) {
                    points.pop();
                }
            }
        }
        points
    }
}

impl PolygonBackend for TriangulatedBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Triangulated
    }

    fn area(&self, polygon: &PolygonData) -> Result<f64> {
        let outer = Self::ring(polygon);
        let holes: Vec<Vec<Point2>> = polygon.holes().iter().map(Self::ring).collect();

        let mut cdt = Cdt::new();
        constrain_ring(&mut cdt, &outer)?;
        for hole in &holes {
            constrain_ring(&mut cdt, hole)?;
        }

        // Every ring edge is a constraint, so no triangle straddles a
        // boundary and each triangle's centroid decides which side it is on:
        // inside the outer ring and outside every hole means it counts.
        let mut area = 0.0;
        for face in cdt.inner_faces() {
            let [a, b, c] = face.positions();
            let centroid = Point2::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0);
            if point_in_ring(&centroid, &outer)
                && !holes.iter().any(|hole| point_in_ring(&centroid, hole))
            {
                area += ((b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)).abs() / 2.0;
            }
        }
        Ok(area)
    }

    fn alpha_shape(&self, points: &[Point2], alpha: f64) -> Result<Vec<PolygonData>> {
        match &self.service {
            Some(service) => Ok(service.alpha_shape(points, alpha)?),
            None => {
                tracing::warn!("alpha_shape needs the remote engine; no service handle attached");
                Err(BackendError::NoService {
                    operation: "alpha_shape",
                }
                .into())
            }
        }
    }
}

/// Pins a ring into the triangulation as a closed constraint loop.
fn constrain_ring(cdt: &mut Cdt, ring: &[Point2]) -> Result<()> {
    if ring.len() < 3 {
        return Err(GeometryError::InvalidContour(
            "a contour needs at least 3 distinct points".into(),
        )
        .into());
    }
    cdt.add_constraint_edges(ring.iter().map(|p| SpadePoint2::new(p.x, p.y)), true)
        .map_err(|e: InsertionError| GeometryError::Degenerate(format!("ring insertion: {e}")))?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::super::testing::LocalService;
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> PolygonData {
        PolygonData::from_coords(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)])
    }

    #[test]
    fn triangle_area_matches_shoelace() {
        let p = PolygonData::from_coords(&[(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]);
        let area = TriangulatedBackend::new().area(&p).unwrap();
        assert_relative_eq!(area, 50.0, epsilon = 1e-9);
    }

    #[test]
    fn concave_contour_area() {
        let l_shape = PolygonData::from_coords(&[
            (0.0, 0.0),
            (4.0, 0.0),
            (4.0, 2.0),
            (2.0, 2.0),
            (2.0, 4.0),
            (0.0, 4.0),
        ]);
        let area = TriangulatedBackend::new().area(&l_shape).unwrap();
        assert_relative_eq!(area, 12.0, epsilon = 1e-9);
    }

    #[test]
    fn explicitly_closed_contour_area() {
        let p = PolygonData::from_coords(&[
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 10.0),
            (0.0, 10.0),
            (0.0, 0.0),
        ]);
        let area = TriangulatedBackend::new().area(&p).unwrap();
        assert_relative_eq!(area, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn hole_area_is_excluded() {
        let hole = PolygonData::from_coords(&[(3.0, 3.0), (7.0, 3.0), (7.0, 7.0), (3.0, 7.0)]);
        let p = square().with_holes(vec![hole]);
        let area = TriangulatedBackend::new().area(&p).unwrap();
        assert_relative_eq!(area, 84.0, epsilon = 1e-9);
    }

    #[test]
    fn degenerate_contour_is_an_error() {
        let p = PolygonData::from_coords(&[(0.0, 0.0)]);
        assert!(TriangulatedBackend::new().area(&p).is_err());
    }

    #[test]
    fn non_area_operations_are_unsupported() {
        let b = TriangulatedBackend::new();
        let p = square();
        assert!(b.is_convex(&p).is_err());
        assert!(b.is_inside(&p, &Point2::new(5.0, 5.0)).is_err());
        assert!(b.bbox(&p).is_err());
        assert!(b.unite(&[p]).is_err());
    }

    #[test]
    fn alpha_shape_without_service_is_a_typed_error() {
        let err = TriangulatedBackend::new()
            .alpha_shape(&[Point2::new(0.0, 0.0)], 1.0)
            .unwrap_err();
        assert!(err.to_string().contains("alpha_shape"));
    }

    #[test]
    fn alpha_shape_delegates_when_a_service_is_attached() {
        let b = TriangulatedBackend::with_service(Arc::new(LocalService));
        let cloud = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
        ];
        let shapes = b.alpha_shape(&cloud, 1.0).unwrap();
        assert_eq!(shapes.len(), 1);
    }
}
