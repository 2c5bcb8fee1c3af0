//! Rectangular partition ("icicle") layout.

use icefall_geom::{Expanse, Rect, Span};

use crate::tree::{NodeId, Tree};

/// Computes the icicle partition for a built [`Tree`], annotating every node
/// with its absolute rectangle.
///
/// Axis convention: the depth axis is vertical and is driven by the
/// viewport's height - the tree's levels split it into equal bands, so a node
/// at depth `d` occupies `y = [d * band, (d + 1) * band]`. The value axis is
/// horizontal and is driven by the viewport's width - the root spans
/// `[0, width]` and each node's children subdivide its span contiguously, in
/// declared order, proportionally to their values. (The source this layout
/// descends from swapped the meaning of its width/height parameters; here the
/// naming is fixed rather than preserved.)
#[derive(Debug, Clone, Default)]
pub struct Partition {}

impl Partition {
    /// A partition layout with the default configuration.
    pub fn new() -> Self {
        Self {}
    }

    /// Lay the tree out into the given viewport. Rectangles are assigned in
    /// place; a previous layout is fully replaced.
    ///
    /// A tree whose total value is zero gets zero-width value spans for every
    /// node rather than dividing by zero; depth bands are still assigned, so
    /// the structure remains inspectable.
    pub fn layout(&self, tree: &mut Tree, vp: Expanse) {
        let root = tree.root();
        let levels = tree.node(root).height + 1;
        let band = vp.h() / levels as f64;
        tracing::debug!(
            nodes = tree.len(),
            levels,
            w = vp.w(),
            h = vp.h(),
            "partition layout"
        );

        let total = tree.node(root).value;
        let span = if total > 0.0 {
            Span::new(0.0, vp.w())
        } else {
            Span::point(0.0)
        };
        assign(tree, root, span, band);
    }
}

/// Assign `span` to `id` on the value axis and its depth band on the depth
/// axis, then subdivide the span among its children.
fn assign(tree: &mut Tree, id: NodeId, span: Span, band: f64) {
    let depth = tree.node(id).depth as f64;
    tree.node_mut(id).rect =
        Rect::from_spans(span, Span::new(depth * band, (depth + 1.0) * band));

    let value = tree.node(id).value;
    let children: Vec<NodeId> = tree.node(id).children.clone();
    if children.is_empty() {
        return;
    }

    if value <= 0.0 {
        // Zero-total subtree: every child collapses to a point at the span's
        // start. Still recurse so depth bands are assigned.
        for c in children {
            assign(tree, c, Span::point(span.lo), band);
        }
        return;
    }

    // Children tile the parent span in declared order. The running total is
    // accumulated in the same order the build pass summed it, so the final
    // child lands exactly on the parent's upper bound and zero-valued
    // children keep exactly-empty spans.
    let len = span.len();
    let mut cum = 0.0;
    let mut lo = span.lo;
    for c in children {
        cum += tree.node(c).value;
        let hi = if cum >= value {
            span.hi
        } else {
            span.lo + len * (cum / value)
        };
        assign(tree, c, Span::new(lo, hi), band);
        lo = hi;
    }
}
