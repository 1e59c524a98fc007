use crate::math::arc_2d::arc_from_sagitta;
use crate::math::{Point2, ARC_EPSILON};

/// A circular arc encoded by its endpoints and sagitta height.
///
/// The height is the signed perpendicular distance from the chord midpoint
/// to the arc midpoint. Positive height means the arc bows to the right of
/// travel (clockwise), negative to the left (counter-clockwise). A height
/// within [`ARC_EPSILON`] of zero is a straight segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcData {
    pub start: Point2,
    pub end: Point2,
    pub height: f64,
}

impl ArcData {
    #[must_use]
    pub fn new(start: Point2, end: Point2, height: f64) -> Self {
        Self { start, end, height }
    }

    /// Whether the height is too small for this to be a true arc.
    #[must_use]
    pub fn is_segment(&self) -> bool {
        self.height.abs() < ARC_EPSILON
    }

    /// Circle center, `None` for degenerate arcs.
    #[must_use]
    pub fn center(&self) -> Option<Point2> {
        arc_from_sagitta(&self.start, &self.end, self.height).map(|(c, _, _, _)| c)
    }

    /// Circle radius, `None` for degenerate arcs.
    #[must_use]
    pub fn radius(&self) -> Option<f64> {
        arc_from_sagitta(&self.start, &self.end, self.height).map(|(_, r, _, _)| r)
    }

    /// Signed sweep angle from start to end, `None` for degenerate arcs.
    ///
    /// Negative for clockwise (positive height) arcs.
    #[must_use]
    pub fn sweep_angle(&self) -> Option<f64> {
        arc_from_sagitta(&self.start, &self.end, self.height).map(|(_, _, _, s)| s)
    }
}
