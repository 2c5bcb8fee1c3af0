//! Icefall computes hierarchical partition ("icicle") layouts with zoomable
//! focus.
//!
//! A [`Node`] tree with leaf values is built into an arena [`Tree`], laid out
//! by [`Partition`] (each node's horizontal extent proportional to its
//! subtree sum, depth mapped to a vertical band), and viewed through a
//! [`Zoom`] that re-projects the whole tree relative to a focused node. The
//! outputs are plain rectangles; drawing them is the caller's concern.

/// Error types for icefall operations.
pub mod error;
/// The input tree description.
mod node;
/// The icicle partition layout.
mod partition;
/// Node paths, breadcrumbs and path expressions.
pub mod path;
/// The arena-allocated layout tree.
mod tree;
/// Tree traversal and hit testing.
pub mod walk;
/// Focus state and projection.
mod zoom;

pub use error::{Error, Result};
pub use node::Node;
pub use partition::Partition;
pub use path::{Path, PathMatcher};
pub use tree::{Ancestors, LayoutNode, NodeId, Tree};
pub use walk::{Walk, node_at, preorder};
pub use zoom::{TargetRect, Zoom};

pub use icefall_geom as geom;
pub use icefall_geom::{Expanse, Point, Rect, Span};
