//! Geometry primitives used across icefall.

/// Error types for geometry operations.
mod error;
/// Width/height extent type with validation.
mod expanse;
/// Point helpers.
mod point;
/// Rectangle operations.
mod rect;
/// One-dimensional extent operations.
mod span;

pub use error::{Error, Result};
pub use expanse::Expanse;
pub use point::Point;
pub use rect::Rect;
pub use span::Span;
