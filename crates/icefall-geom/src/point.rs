/// A point in two-dimensional space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// The x co-ordinate.
    pub x: f64,
    /// The y co-ordinate.
    pub y: f64,
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from(v: (f64, f64)) -> Self {
        Self { x: v.0, y: v.1 }
    }
}
