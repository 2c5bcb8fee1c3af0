//! Utilities for working with an icefall tree.

use icefall_geom::Point;

use crate::{
    Error, Result,
    tree::{LayoutNode, NodeId, Tree},
};

/// Control value returned by traversal closures.
pub enum Walk<R> {
    /// Continue traversal into this node's children.
    Continue,
    /// Skip this node's children and continue with its siblings.
    Skip,
    /// Stop the traversal and return a value.
    Handle(R),
}

impl<R> Walk<R> {
    /// The handled value, if any.
    pub fn value(self) -> Option<R> {
        match self {
            Walk::Handle(r) => Some(r),
            _ => None,
        }
    }
}

/// A preorder traversal of the subtree under `id`. The closure controls the
/// walk: `Skip` prunes the current node's children, `Handle` stops the whole
/// traversal and returns its value. An id minted by another tree is an
/// [`Error::UnknownNode`].
pub fn preorder<R>(
    tree: &Tree,
    id: NodeId,
    f: &mut dyn FnMut(NodeId, &LayoutNode) -> Result<Walk<R>>,
) -> Result<Option<R>> {
    let node = tree
        .get(id)
        .ok_or_else(|| Error::UnknownNode(format!("{id:?}")))?;
    match f(id, node)? {
        Walk::Handle(r) => return Ok(Some(r)),
        Walk::Skip => return Ok(None),
        Walk::Continue => {}
    }
    for i in 0..tree.node(id).children.len() {
        let child = tree.node(id).children[i];
        if let Some(r) = preorder(tree, child, f)? {
            return Ok(Some(r));
        }
    }
    Ok(None)
}

/// Find the deepest laid-out node containing a point, resolving a pointer
/// event to a node. Returns `None` before layout has run, or when the point
/// falls outside the tree's extent.
///
/// The walk descends one depth band at a time: at each level the unique child
/// whose value span contains the point's x co-ordinate is followed, until the
/// point's depth band is reached.
pub fn node_at(tree: &Tree, p: impl Into<Point>) -> Option<NodeId> {
    let p = p.into();
    let mut cur = tree.root();
    if !tree.node(cur).rect.xspan().contains(p.x) || p.y < tree.node(cur).rect.y0 {
        return None;
    }
    loop {
        let node = tree.node(cur);
        if node.rect.yspan().contains(p.y) {
            return Some(cur);
        }
        let next = node
            .children
            .iter()
            .copied()
            .find(|&c| tree.node(c).rect.xspan().contains(p.x))?;
        cur = next;
    }
}
