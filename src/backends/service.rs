//! Seam to the remote polygon engine.
//!
//! The gRPC plumbing lives outside this crate; whatever owns the channel
//! implements [`PolygonService`] and hands it to the selector. Procedures
//! the implementation does not wire up fall through to defaults reporting
//! them unavailable, so a partial service still composes.

use crate::error::ServiceError;
use crate::geometry::{BBox, PolygonData};
use crate::math::{Point2, Vector2};
use crate::tessellation::TessellationParams;

use super::IntersectionType;

type ServiceResult<T> = std::result::Result<T, ServiceError>;

fn unavailable<T>(operation: &'static str) -> ServiceResult<T> {
    Err(ServiceError::Unavailable { operation })
}

/// Remote procedures the server backend can delegate to, one per polygon
/// operation. All methods default to unavailable.
#[allow(unused_variables)]
pub trait PolygonService: Send + Sync {
    fn area(&self, polygon: &PolygonData) -> ServiceResult<f64> {
        unavailable("area")
    }

    fn is_convex(&self, polygon: &PolygonData) -> ServiceResult<bool> {
        unavailable("is_convex")
    }

    fn is_circle(&self, polygon: &PolygonData) -> ServiceResult<bool> {
        unavailable("is_circle")
    }

    fn is_box(&self, polygon: &PolygonData) -> ServiceResult<bool> {
        unavailable("is_box")
    }

    fn is_inside(&self, polygon: &PolygonData, point: &Point2) -> ServiceResult<bool> {
        unavailable("is_inside")
    }

    fn bbox(&self, polygon: &PolygonData) -> ServiceResult<BBox> {
        unavailable("bbox")
    }

    fn bbox_of_polygons(&self, polygons: &[PolygonData]) -> ServiceResult<BBox> {
        unavailable("bbox_of_polygons")
    }

    fn without_arcs(
        &self,
        polygon: &PolygonData,
        params: &TessellationParams,
    ) -> ServiceResult<PolygonData> {
        unavailable("without_arcs")
    }

    fn has_self_intersections(&self, polygon: &PolygonData, tol: f64) -> ServiceResult<bool> {
        unavailable("has_self_intersections")
    }

    fn remove_self_intersections(
        &self,
        polygon: &PolygonData,
        tol: f64,
    ) -> ServiceResult<Vec<PolygonData>> {
        unavailable("remove_self_intersections")
    }

    fn normalized(&self, polygon: &PolygonData) -> ServiceResult<Vec<Point2>> {
        unavailable("normalized")
    }

    fn translate(&self, polygon: &PolygonData, vector: &Vector2) -> ServiceResult<PolygonData> {
        unavailable("translate")
    }

    fn rotate(
        &self,
        polygon: &PolygonData,
        angle: f64,
        center: &Point2,
    ) -> ServiceResult<PolygonData> {
        unavailable("rotate")
    }

    fn scale(
        &self,
        polygon: &PolygonData,
        factor: f64,
        center: &Point2,
    ) -> ServiceResult<PolygonData> {
        unavailable("scale")
    }

    fn mirror_x(&self, polygon: &PolygonData, x: f64) -> ServiceResult<PolygonData> {
        unavailable("mirror_x")
    }

    fn bounding_circle(&self, polygon: &PolygonData) -> ServiceResult<(Point2, f64)> {
        unavailable("bounding_circle")
    }

    fn convex_hull(&self, polygons: &[PolygonData]) -> ServiceResult<PolygonData> {
        unavailable("convex_hull")
    }

    fn defeature(&self, polygon: &PolygonData, tol: f64) -> ServiceResult<PolygonData> {
        unavailable("defeature")
    }

    fn intersection_type(
        &self,
        polygon: &PolygonData,
        other: &PolygonData,
        tol: f64,
    ) -> ServiceResult<IntersectionType> {
        unavailable("intersection_type")
    }

    fn circle_intersect(
        &self,
        polygon: &PolygonData,
        center: &Point2,
        radius: f64,
    ) -> ServiceResult<bool> {
        unavailable("circle_intersect")
    }

    fn closest_point(&self, polygon: &PolygonData, point: &Point2) -> ServiceResult<Point2> {
        unavailable("closest_point")
    }

    fn closest_points(
        &self,
        a: &PolygonData,
        b: &PolygonData,
    ) -> ServiceResult<(Point2, Point2)> {
        unavailable("closest_points")
    }

    fn unite(&self, polygons: &[PolygonData]) -> ServiceResult<Vec<PolygonData>> {
        unavailable("unite")
    }

    fn intersect(
        &self,
        lhs: &[PolygonData],
        rhs: &[PolygonData],
    ) -> ServiceResult<Vec<PolygonData>> {
        unavailable("intersect")
    }

    fn subtract(
        &self,
        lhs: &[PolygonData],
        rhs: &[PolygonData],
    ) -> ServiceResult<Vec<PolygonData>> {
        unavailable("subtract")
    }

    fn xor(&self, lhs: &[PolygonData], rhs: &[PolygonData]) -> ServiceResult<Vec<PolygonData>> {
        unavailable("xor")
    }

    fn expand(
        &self,
        polygon: &PolygonData,
        offset: f64,
        round_corner: bool,
        max_corner_ext: f64,
        tol: f64,
    ) -> ServiceResult<Vec<PolygonData>> {
        unavailable("expand")
    }

    fn alpha_shape(&self, points: &[Point2], alpha: f64) -> ServiceResult<Vec<PolygonData>> {
        unavailable("alpha_shape")
    }
}
