//! Local backend built on planar predicates from the `geo` crate.
//!
//! Conversion to the `geo` representation tessellates arcs locally and is
//! cached on the [`PolygonData`] instance, so repeated queries against the
//! same polygon pay for the conversion once.

use geo::{Area, BooleanOps, BoundingRect, ConvexHull, Intersects, Validation};
use geo::{Coord, LineString};

use crate::config::BackendKind;
use crate::error::Result;
use crate::geometry::{BBox, PolygonData, Vertex};
use crate::math::{values_close, Point2};
use crate::tessellation::{extract_coordinates, sanitize_vertices, TessellationParams};

use super::PolygonBackend;

/// Relative tolerance for the convex-hull area comparison.
const HULL_AREA_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Default)]
pub struct PlanarBackend;

impl PlanarBackend {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn ring(contour: &PolygonData) -> LineString<f64> {
        let coords: Vec<Coord<f64>> =
            extract_coordinates(&sanitize_vertices(contour.vertices()), &TessellationParams::default())
                .into_iter()
                .map(|p| Coord { x: p.x, y: p.y })
                .collect();
        LineString::new(coords)
    }

    /// The geo-native polygon for a [`PolygonData`], computed at most once
    /// per instance.
    pub(crate) fn to_geo(polygon: &PolygonData) -> &geo::Polygon<f64> {
        polygon.planar_cache.get_or_init(|| {
            let exterior = Self::ring(polygon);
            let interiors = polygon.holes().iter().map(Self::ring).collect();
            geo::Polygon::new(exterior, interiors)
        })
    }

    fn from_geo(polygon: &geo::Polygon<f64>) -> PolygonData {
        let mut coords = polygon.exterior().0.clone();
        // Drop the closing coordinate geo keeps on every ring.
        if coords.len() > 1 && coords.first() == coords.last() {
            coords.pop();
        }
        let vertices = coords
            .into_iter()
            .map(|c| Vertex::point(c.x, c.y))
            .collect();
        let holes = polygon
            .interiors()
            .iter()
            .map(|ring| {
                let mut hole = ring.0.clone();
                if hole.len() > 1 && hole.first() == hole.last() {
                    hole.pop();
                }
                PolygonData::new(hole.into_iter().map(|c| Vertex::point(c.x, c.y)).collect(), true)
            })
            .collect::<Vec<_>>();
        PolygonData::new(vertices, true).with_holes(holes)
    }
}

impl PolygonBackend for PlanarBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Planar
    }

    fn area(&self, polygon: &PolygonData) -> Result<f64> {
        Ok(Self::to_geo(polygon).unsigned_area())
    }

    fn is_convex(&self, polygon: &PolygonData) -> Result<bool> {
        let poly = Self::to_geo(polygon);
        let hull = poly.convex_hull();
        Ok(values_close(
            poly.unsigned_area(),
            hull.unsigned_area(),
            HULL_AREA_TOLERANCE,
        ))
    }

    fn is_inside(&self, polygon: &PolygonData, point: &Point2) -> Result<bool> {
        // Boundary points count as inside, so containment alone is not enough.
        let p = geo::Point::new(point.x, point.y);
        Ok(Self::to_geo(polygon).intersects(&p))
    }

    fn bbox(&self, polygon: &PolygonData) -> Result<BBox> {
        Ok(Self::to_geo(polygon).bounding_rect().map_or_else(BBox::zero, |r| {
            BBox::new(
                Point2::new(r.min().x, r.min().y),
                Point2::new(r.max().x, r.max().y),
            )
        }))
    }

    fn bbox_of_polygons(&self, polygons: &[PolygonData]) -> Result<BBox> {
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

    fn has_self_intersections(&self, polygon: &PolygonData, _tol: f64) -> Result<bool> {
        Ok(!Self::to_geo(polygon).is_valid())
    }

    fn remove_self_intersections(
        &self,
        polygon: &PolygonData,
        _tol: f64,
    ) -> Result<Vec<PolygonData>> {
        let poly = Self::to_geo(polygon);
        // Self-union resolves crossings into a set of simple polygons.
        let repaired = poly.union(poly);
        Ok(repaired.0.iter().map(Self::from_geo).collect())
    }

    fn normalized(&self, polygon: &PolygonData) -> Result<Vec<Point2>> {
        Ok(polygon
            .points()
            .map(|p| {
                let mag = (p.x * p.x + p.y * p.y).sqrt();
                if mag == 0.0 {
                    Point2::origin()
                } else {
                    Point2::new(p.x / mag, p.y / mag)
                }
            })
            .collect())
    }
}
