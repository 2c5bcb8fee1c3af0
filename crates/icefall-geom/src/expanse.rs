use super::{Error, Rect, Result};

/// An `Expanse` is a rectangle that has a width and height but no location,
/// used for viewport dimensions. Construction validates that both dimensions
/// are finite and non-negative, so layout code downstream never has to worry
/// about non-finite pixel sizes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Expanse {
    w: f64,
    h: f64,
}

impl Expanse {
    /// Construct an expanse, validating the dimensions.
    pub fn new(w: f64, h: f64) -> Result<Self> {
        if !w.is_finite() || !h.is_finite() || w < 0.0 || h < 0.0 {
            return Err(Error::Geometry(format!(
                "invalid expanse dimensions {w} x {h}"
            )));
        }
        Ok(Self { w, h })
    }

    /// The width.
    pub fn w(&self) -> f64 {
        self.w
    }

    /// The height.
    pub fn h(&self) -> f64 {
        self.h
    }

    /// Return a `Rect` with the same dimensions as the `Expanse`, located at
    /// (0, 0).
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.w, self.h)
    }
}
