//! Pluggable computation backends for polygon queries.
//!
//! A [`PolygonBackend`] answers geometric questions about [`PolygonData`]
//! values. The server backend forwards everything to the remote engine;
//! the local backends trade coverage for the RPC round trip they save.
//! Every operation a backend does not cover reports a typed
//! [`BackendError::Unsupported`](crate::error::BackendError::Unsupported)
//! so callers can branch on capability.

pub mod factory;
#[cfg(feature = "planar")]
pub mod planar;
pub mod server;
pub mod service;
#[cfg(feature = "triangulated")]
pub mod triangulated;

pub use factory::BackendSelector;
pub use server::ServerBackend;
pub use service::PolygonService;

use crate::config::BackendKind;
use crate::error::{BackendError, Result};
use crate::geometry::{BBox, PolygonData};
use crate::math::{Point2, Vector2};
use crate::tessellation::TessellationParams;

/// How two polygons overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntersectionType {
    NoIntersection,
    ThisInsideOther,
    OtherInsideThis,
    Common,
    Undefined,
}

fn unsupported<T>(backend: BackendKind, operation: &'static str) -> Result<T> {
    Err(BackendError::Unsupported { backend, operation }.into())
}

/// The polygon operation set a computation backend may answer.
///
/// Every method is provided with a default that reports the operation as
/// unsupported, so an implementation overrides exactly what it covers.
/// `without_arcs` and `is_box` carry shared implementations used by all
/// backends so their answers cannot drift apart.
#[allow(unused_variables)]
pub trait PolygonBackend: Send + Sync {
    /// Which backend this is, used in error reporting and selection.
    fn kind(&self) -> BackendKind;

    /// Area of the polygon, holes subtracted.
    ///
    /// # Errors
    /// Unsupported when the backend does not cover this operation.
    fn area(&self, polygon: &PolygonData) -> Result<f64> {
        unsupported(self.kind(), "area")
    }

    /// # Errors
    /// Unsupported when the backend does not cover this operation.
    fn is_convex(&self, polygon: &PolygonData) -> Result<bool> {
        unsupported(self.kind(), "is_convex")
    }

    /// # Errors
    /// Unsupported when the backend does not cover this operation.
    fn is_circle(&self, polygon: &PolygonData) -> Result<bool> {
        unsupported(self.kind(), "is_circle")
    }

    /// Whether the outer contour is a rectangle. Shared implementation.
    ///
    /// # Errors
    /// Infallible in the provided implementation.
    fn is_box(&self, polygon: &PolygonData) -> Result<bool> {
        Ok(polygon.is_box())
    }

    /// Whether the point lies inside the polygon, boundary included.
    ///
    /// # Errors
    /// Unsupported when the backend does not cover this operation.
    fn is_inside(&self, polygon: &PolygonData, point: &Point2) -> Result<bool> {
        unsupported(self.kind(), "is_inside")
    }

    /// # Errors
    /// Unsupported when the backend does not cover this operation.
    fn bbox(&self, polygon: &PolygonData) -> Result<BBox> {
        unsupported(self.kind(), "bbox")
    }

    /// Bounds of several polygons; an empty list yields the zero box.
    ///
    /// # Errors
    /// Unsupported when the backend does not cover this operation.
    fn bbox_of_polygons(&self, polygons: &[PolygonData]) -> Result<BBox> {
        unsupported(self.kind(), "bbox_of_polygons")
    }

    /// Arc-free copy of the polygon. Shared implementation.
    ///
    /// # Errors
    /// Infallible in the provided implementation.
    fn without_arcs(
        &self,
        polygon: &PolygonData,
        params: &TessellationParams,
    ) -> Result<PolygonData> {
        Ok(polygon.without_arcs(params))
    }

    /// # Errors
    /// Unsupported when the backend does not cover this operation.
    fn has_self_intersections(&self, polygon: &PolygonData, tol: f64) -> Result<bool> {
        unsupported(self.kind(), "has_self_intersections")
    }

    /// Splits a self-intersecting polygon into simple parts.
    ///
    /// # Errors
    /// Unsupported when the backend does not cover this operation.
    fn remove_self_intersections(
        &self,
        polygon: &PolygonData,
        tol: f64,
    ) -> Result<Vec<PolygonData>> {
        unsupported(self.kind(), "remove_self_intersections")
    }

    /// The outer-contour points normalized as vectors from the origin.
    ///
    /// # Errors
    /// Unsupported when the backend does not cover this operation.
    fn normalized(&self, polygon: &PolygonData) -> Result<Vec<Point2>> {
        unsupported(self.kind(), "normalized")
    }

    /// # Errors
    /// Unsupported when the backend does not cover this operation.
    fn translate(&self, polygon: &PolygonData, vector: &Vector2) -> Result<PolygonData> {
        unsupported(self.kind(), "translate")
    }

    /// Rotation about a center, angle in radians.
    ///
    /// # Errors
    /// Unsupported when the backend does not cover this operation.
    fn rotate(&self, polygon: &PolygonData, angle: f64, center: &Point2) -> Result<PolygonData> {
        unsupported(self.kind(), "rotate")
    }

    /// # Errors
    /// Unsupported when the backend does not cover this operation.
    fn scale(&self, polygon: &PolygonData, factor: f64, center: &Point2) -> Result<PolygonData> {
        unsupported(self.kind(), "scale")
    }

    /// Mirror across the vertical line at `x`.
    ///
    /// # Errors
    /// Unsupported when the backend does not cover this operation.
    fn mirror_x(&self, polygon: &PolygonData, x: f64) -> Result<PolygonData> {
        unsupported(self.kind(), "mirror_x")
    }

    /// # Errors
    /// Unsupported when the backend does not cover this operation.
    fn bounding_circle(&self, polygon: &PolygonData) -> Result<(Point2, f64)> {
        unsupported(self.kind(), "bounding_circle")
    }

    /// Convex hull of the union of the given polygons.
    ///
    /// # Errors
    /// Unsupported when the backend does not cover this operation.
    fn convex_hull(&self, polygons: &[PolygonData]) -> Result<PolygonData> {
        unsupported(self.kind(), "convex_hull")
    }

    /// # Errors
    /// Unsupported when the backend does not cover this operation.
    fn defeature(&self, polygon: &PolygonData, tol: f64) -> Result<PolygonData> {
        unsupported(self.kind(), "defeature")
    }

    /// # Errors
    /// Unsupported when the backend does not cover this operation.
    fn intersection_type(
        &self,
        polygon: &PolygonData,
        other: &PolygonData,
        tol: f64,
    ) -> Result<IntersectionType> {
        unsupported(self.kind(), "intersection_type")
    }

    /// # Errors
    /// Unsupported when the backend does not cover this operation.
    fn circle_intersect(
        &self,
        polygon: &PolygonData,
        center: &Point2,
        radius: f64,
    ) -> Result<bool> {
        unsupported(self.kind(), "circle_intersect")
    }

    /// # Errors
    /// Unsupported when the backend does not cover this operation.
    fn closest_point(&self, polygon: &PolygonData, point: &Point2) -> Result<Point2> {
        unsupported(self.kind(), "closest_point")
    }

    /// Mutually closest points, first on `a`, second on `b`.
    ///
    /// # Errors
    /// Unsupported when the backend does not cover this operation.
    fn closest_points(&self, a: &PolygonData, b: &PolygonData) -> Result<(Point2, Point2)> {
        unsupported(self.kind(), "closest_points")
    }

    /// # Errors
    /// Unsupported when the backend does not cover this operation.
    fn unite(&self, polygons: &[PolygonData]) -> Result<Vec<PolygonData>> {
        unsupported(self.kind(), "unite")
    }

    /// # Errors
    /// Unsupported when the backend does not cover this operation.
    fn intersect(&self, lhs: &[PolygonData], rhs: &[PolygonData]) -> Result<Vec<PolygonData>> {
        unsupported(self.kind(), "intersect")
    }

    /// # Errors
    /// Unsupported when the backend does not cover this operation.
    fn subtract(&self, lhs: &[PolygonData], rhs: &[PolygonData]) -> Result<Vec<PolygonData>> {
        unsupported(self.kind(), "subtract")
    }

    /// # Errors
    /// Unsupported when the backend does not cover this operation.
    fn xor(&self, lhs: &[PolygonData], rhs: &[PolygonData]) -> Result<Vec<PolygonData>> {
        unsupported(self.kind(), "xor")
    }

    /// Offsets the polygon outward (or inward for negative offsets).
    ///
    /// # Errors
    /// Unsupported when the backend does not cover this operation.
    fn expand(
        &self,
        polygon: &PolygonData,
        offset: f64,
        round_corner: bool,
        max_corner_ext: f64,
        tol: f64,
    ) -> Result<Vec<PolygonData>> {
        unsupported(self.kind(), "expand")
    }

    /// Outline of a point cloud via alpha shapes.
    ///
    /// # Errors
    /// Unsupported when the backend does not cover this operation.
    fn alpha_shape(&self, points: &[Point2], alpha: f64) -> Result<Vec<PolygonData>> {
        unsupported(self.kind(), "alpha_shape")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod testing {
    use super::*;
    use crate::error::ServiceError;
    use crate::math::polygon_2d::{bounds_of, point_in_ring, signed_area_2d};
    use crate::tessellation::extract_coordinates;

    /// In-process stand-in for the remote engine, used by delegation and
    /// parity tests. Implements the handful of procedures those tests need
    /// with straightforward scalar math.
    #[derive(Debug, Default)]
    pub(crate) struct LocalService;

    impl LocalService {
        fn ring(polygon: &PolygonData) -> Vec<Point2> {
            extract_coordinates(polygon.vertices(), &TessellationParams::default())
        }
    }

    impl PolygonService for LocalService {
        fn area(&self, polygon: &PolygonData) -> std::result::Result<f64, ServiceError> {
            let outer = signed_area_2d(&Self::ring(polygon)).abs();
            let holes: f64 = polygon
                .holes()
                .iter()
                .map(|h| signed_area_2d(&Self::ring(h)).abs())
                .sum();
            Ok(outer - holes)
        }

        fn is_convex(&self, polygon: &PolygonData) -> std::result::Result<bool, ServiceError> {
            // All cyclic edge-pair cross products share a sign on a convex ring.
            let ring = Self::ring(polygon);
            let n = ring.len();
            let mut sign = 0.0_f64;
            for i in 0..n {
                let a = ring[i];
                let b = ring[(i + 1) % n];
                let c = ring[(i + 2) % n];
                let cross = (b.x - a.x) * (c.y - b.y) - (b.y - a.y) * (c.x - b.x);
                if cross.abs() < crate::math::TOLERANCE {
                    continue;
                }
                if sign == 0.0 {
                    sign = cross.signum();
                } else if sign != cross.signum() {
                    return Ok(false);
                }
            }
            Ok(true)
        }

        fn is_inside(
            &self,
            polygon: &PolygonData,
            point: &Point2,
        ) -> std::result::Result<bool, ServiceError> {
            Ok(point_in_ring(point, &Self::ring(polygon)))
        }

        fn bbox(&self, polygon: &PolygonData) -> std::result::Result<BBox, ServiceError> {
            bounds_of(&Self::ring(polygon))
                .map(|(min, max)| BBox::new(min, max))
                .ok_or(ServiceError::Unavailable { operation: "bbox" })
        }

        fn bbox_of_polygons(
            &self,
            polygons: &[PolygonData],
        ) -> std::result::Result<BBox, ServiceError> {
            let mut bounds: Option<BBox> = None;
            for polygon in polygons {
                let b = self.bbox(polygon)?;
                bounds = Some(match bounds {
                    Some(acc) => acc.union(&b),
                    None => b,
                });
            }
            Ok(bounds.unwrap_or_else(BBox::zero))
        }

        fn alpha_shape(
            &self,
            points: &[Point2],
            _alpha: f64,
        ) -> std::result::Result<Vec<PolygonData>, ServiceError> {
            // Good enough for delegation tests: one polygon over the cloud.
            let vertices = points.iter().map(|p| crate::geometry::Vertex::Point(*p));
            Ok(vec![PolygonData::new(vertices.collect(), true)])
        }
    }

    #[test]
    fn defaults_report_unsupported() {
        struct Bare;
        impl PolygonBackend for Bare {
            fn kind(&self) -> BackendKind {
                BackendKind::Auto
            }
        }
        let polygon = PolygonData::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        let err = Bare.area(&polygon).unwrap_err();
        assert!(err.to_string().contains("not yet implemented"));
    }

    #[test]
    fn shared_is_box_answers_without_override() {
        struct Bare;
        impl PolygonBackend for Bare {
            fn kind(&self) -> BackendKind {
                BackendKind::Auto
            }
        }
        let square =
            PolygonData::from_coords(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
        assert!(Bare.is_box(&square).unwrap());
    }
}
