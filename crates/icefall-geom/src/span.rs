/// A `Span` is a one-dimensional extent `[lo, hi]`. Spans are the building
/// block for partition layout: a parent's span is subdivided among its
/// children, and zoom re-maps spans from one co-ordinate system to another.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Span {
    /// The lower bound.
    pub lo: f64,
    /// The upper bound.
    pub hi: f64,
}

impl Span {
    /// A span with the given bounds.
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// A zero-length span at the given position.
    pub fn point(at: f64) -> Self {
        Self { lo: at, hi: at }
    }

    /// The length of this span. Degenerate (inverted) spans have length 0.
    pub fn len(&self) -> f64 {
        (self.hi - self.lo).max(0.0)
    }

    /// True if this span has no extent.
    pub fn is_empty(&self) -> bool {
        self.hi <= self.lo
    }

    /// Half-open containment check: `lo <= v < hi`.
    pub fn contains(&self, v: f64) -> bool {
        self.lo <= v && v < self.hi
    }

    /// Shift the span by an offset.
    pub fn shift(&self, d: f64) -> Self {
        Self {
            lo: self.lo + d,
            hi: self.hi + d,
        }
    }

    /// Re-map this span from the co-ordinate system of `from` onto `[0, to]`.
    /// This is the zoom normalization: a span equal to `from` maps to the full
    /// `[0, to]` extent. If `from` has no extent the result is a degenerate
    /// span at 0 rather than a non-finite one.
    pub fn rescale(&self, from: Span, to: f64) -> Self {
        let d = from.len();
        if d <= 0.0 {
            return Span::point(0.0);
        }
        Self {
            lo: (self.lo - from.lo) / d * to,
            hi: (self.hi - from.lo) / d * to,
        }
    }
}

impl From<(f64, f64)> for Span {
    #[inline]
    fn from(v: (f64, f64)) -> Self {
        Self { lo: v.0, hi: v.1 }
    }
}
