use crate::math::Point2;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    pub min: Point2,
    pub max: Point2,
}

impl BBox {
    #[must_use]
    pub fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    /// The degenerate zero-size box at the origin.
    ///
    /// Used as the bound of an empty polygon list.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(Point2::origin(), Point2::origin())
    }

    /// Bounds of a point set, `None` when empty.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Option<Self> {
        crate::math::polygon_2d::bounds_of(points).map(|(min, max)| Self { min, max })
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// The smallest box containing both operands.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: Point2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_expands_both_corners() {
        let a = BBox::new(Point2::new(0.0, 0.0), Point2::new(2.0, 2.0));
        let b = BBox::new(Point2::new(-1.0, 1.0), Point2::new(1.0, 3.0));
        let u = a.union(&b);
        assert!((u.min.x + 1.0).abs() < 1e-12);
        assert!(u.min.y.abs() < 1e-12);
        assert!((u.max.x - 2.0).abs() < 1e-12);
        assert!((u.max.y - 3.0).abs() < 1e-12);
    }

    #[test]
    fn zero_box_is_degenerate() {
        let z = BBox::zero();
        assert!(z.width().abs() < 1e-12);
        assert!(z.height().abs() < 1e-12);
    }
}
