//! Backend that forwards every operation to the remote engine.

use std::sync::Arc;

use crate::config::BackendKind;
use crate::error::Result;
use crate::geometry::{BBox, PolygonData};
use crate::math::{Point2, Vector2};
use crate::tessellation::TessellationParams;

use super::{IntersectionType, PolygonBackend, PolygonService};

/// Delegates the whole operation set 1:1 to an injected [`PolygonService`].
///
/// The remote engine is authoritative; this backend adds nothing but the
/// mapping of service failures into the crate error type.
pub struct ServerBackend {
    service: Arc<dyn PolygonService>,
}

impl ServerBackend {
    #[must_use]
    pub fn new(service: Arc<dyn PolygonService>) -> Self {
        Self { service }
    }
}

impl PolygonBackend for ServerBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Server
    }

    fn area(&self, polygon: &PolygonData) -> Result<f64> {
        Ok(self.service.area(polygon)?)
    }

    fn is_convex(&self, polygon: &PolygonData) -> Result<bool> {
        Ok(self.service.is_convex(polygon)?)
    }

    fn is_circle(&self, polygon: &PolygonData) -> Result<bool> {
        Ok(self.service.is_circle(polygon)?)
    }

    fn is_box(&self, polygon: &PolygonData) -> Result<bool> {
        Ok(self.service.is_box(polygon)?)
    }

    fn is_inside(&self, polygon: &PolygonData, point: &Point2) -> Result<bool> {
        Ok(self.service.is_inside(polygon, point)?)
    }

    fn bbox(&self, polygon: &PolygonData) -> Result<BBox> {
        Ok(self.service.bbox(polygon)?)
    }

    fn bbox_of_polygons(&self, polygons: &[PolygonData]) -> Result<BBox> {
        Ok(self.service.bbox_of_polygons(polygons)?)
    }

    fn without_arcs(
        &self,
        polygon: &PolygonData,
        params: &TessellationParams,
    ) -> Result<PolygonData> {
        Ok(self.service.without_arcs(polygon, params)?)
    }

    fn has_self_intersections(&self, polygon: &PolygonData, tol: f64) -> Result<bool> {
        Ok(self.service.has_self_intersections(polygon, tol)?)
    }

    fn remove_self_intersections(
        &self,
        polygon: &PolygonData,
        tol: f64,
    ) -> Result<Vec<PolygonData>> {
        Ok(self.service.remove_self_intersections(polygon, tol)?)
    }

    fn normalized(&self, polygon: &PolygonData) -> Result<Vec<Point2>> {
        Ok(self.service.normalized(polygon)?)
    }

    fn translate(&self, polygon: &PolygonData, vector: &Vector2) -> Result<PolygonData> {
        Ok(self.service.translate(polygon, vector)?)
    }

    fn rotate(&self, polygon: &PolygonData, angle: f64, center: &Point2) -> Result<PolygonData> {
        Ok(self.service.rotate(polygon, angle, center)?)
    }

    fn scale(&self, polygon: &PolygonData, factor: f64, center: &Point2) -> Result<PolygonData> {
        Ok(self.service.scale(polygon, factor, center)?)
    }

    fn mirror_x(&self, polygon: &PolygonData, x: f64) -> Result<PolygonData> {
        Ok(self.service.mirror_x(polygon, x)?)
    }

    fn bounding_circle(&self, polygon: &PolygonData) -> Result<(Point2, f64)> {
        Ok(self.service.bounding_circle(polygon)?)
    }

    fn convex_hull(&self, polygons: &[PolygonData]) -> Result<PolygonData> {
        Ok(self.service.convex_hull(polygons)?)
    }

    fn defeature(&self, polygon: &PolygonData, tol: f64) -> Result<PolygonData> {
        Ok(self.service.defeature(polygon, tol)?)
    }

    fn intersection_type(
        &self,
        polygon: &PolygonData,
        other: &PolygonData,
        tol: f64,
    ) -> Result<IntersectionType> {
        Ok(self.service.intersection_type(polygon, other, tol)?)
    }

    fn circle_intersect(
        &self,
        polygon: &PolygonData,
        center: &Point2,
        radius: f64,
    ) -> Result<bool> {
        Ok(self.service.circle_intersect(polygon, center, radius)?)
    }

    fn closest_point(&self, polygon: &PolygonData, point: &Point2) -> Result<Point2> {
        Ok(self.service.closest_point(polygon, point)?)
    }

    fn closest_points(&self, a: &PolygonData, b: &PolygonData) -> Result<(Point2, Point2)> {
        Ok(self.service.closest_points(a, b)?)
    }

    fn unite(&self, polygons: &[PolygonData]) -> Result<Vec<PolygonData>> {
        Ok(self.service.unite(polygons)?)
    }

    fn intersect(&self, lhs: &[PolygonData], rhs: &[PolygonData]) -> Result<Vec<PolygonData>> {
        Ok(self.service.intersect(lhs, rhs)?)
    }

    fn subtract(&self, lhs: &[PolygonData], rhs: &[PolygonData]) -> Result<Vec<PolygonData>> {
        Ok(self.service.subtract(lhs, rhs)?)
    }

    fn xor(&self, lhs: &[PolygonData], rhs: &[PolygonData]) -> Result<Vec<PolygonData>> {
        Ok(self.service.xor(lhs, rhs)?)
    }

    fn expand(
        &self,
        polygon: &PolygonData,
        offset: f64,
        round_corner: bool,
        max_corner_ext: f64,
        tol: f64,
    ) -> Result<Vec<PolygonData>> {
        Ok(self
            .service
            .expand(polygon, offset, round_corner, max_corner_ext, tol)?)
    }

    fn alpha_shape(&self, points: &[Point2], alpha: f64) -> Result<Vec<PolygonData>> {
        Ok(self.service.alpha_shape(points, alpha)?)
    }
}
