pub mod arc_2d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Hard degeneracy threshold for arc heights and chord lengths.
///
/// Not configurable: arcs flatter or shorter than this are straight segments.
pub const ARC_EPSILON: f64 = 1e-12;

/// Relative + absolute closeness test used for coordinate deduplication.
#[must_use]
pub fn values_close(a: f64, b: f64, tol: f64) -> bool {
    let diff = (a - b).abs();
    diff <= tol || diff <= tol * a.abs().max(b.abs())
}

/// Coordinate-wise closeness of two points at the given tolerance.
#[must_use]
pub fn points_close(a: &Point2, b: &Point2, tol: f64) -> bool {
    values_close(a.x, b.x, tol) && values_close(a.y, b.y, tol)
}
