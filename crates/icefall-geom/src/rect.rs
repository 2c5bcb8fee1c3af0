use super::{Point, Span};

/// An axis-aligned rectangle stored as corner extents. `x0/x1` is the
/// horizontal (value-axis) extent, `y0/y1` the vertical (depth-axis) extent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x0: f64,
    /// Top edge.
    pub y0: f64,
    /// Right edge.
    pub x1: f64,
    /// Bottom edge.
    pub y1: f64,
}

impl Rect {
    /// A rectangle with the given corner extents.
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Construct from a horizontal and a vertical span.
    pub fn from_spans(x: Span, y: Span) -> Self {
        Self {
            x0: x.lo,
            y0: y.lo,
            x1: x.hi,
            y1: y.hi,
        }
    }

    /// The horizontal extent of this rectangle.
    pub fn xspan(&self) -> Span {
        Span::new(self.x0, self.x1)
    }

    /// The vertical extent of this rectangle.
    pub fn yspan(&self) -> Span {
        Span::new(self.y0, self.y1)
    }

    /// The width of this rectangle.
    pub fn width(&self) -> f64 {
        self.xspan().len()
    }

    /// The height of this rectangle.
    pub fn height(&self) -> f64 {
        self.yspan().len()
    }

    /// True if this rectangle has no area.
    pub fn is_empty(&self) -> bool {
        self.xspan().is_empty() || self.yspan().is_empty()
    }

    /// True if all four extents are finite.
    pub fn is_finite(&self) -> bool {
        self.x0.is_finite() && self.y0.is_finite() && self.x1.is_finite() && self.y1.is_finite()
    }

    /// Half-open containment check on both axes.
    pub fn contains_point(&self, p: impl Into<Point>) -> bool {
        let p = p.into();
        self.xspan().contains(p.x) && self.yspan().contains(p.y)
    }

    /// True if this rectangle lies entirely outside `other` on either axis.
    /// Rectangles that merely touch a boundary are not disjoint.
    pub fn is_disjoint(&self, other: &Rect) -> bool {
        self.x1 < other.x0 || self.x0 > other.x1 || self.y1 < other.y0 || self.y0 > other.y1
    }
}
