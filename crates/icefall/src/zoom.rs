//! Focus state and viewport projection.

use icefall_geom::{Expanse, Rect};

use crate::{
    Error, Result,
    tree::{NodeId, Tree},
};

/// A node's projected rectangle, relative to the current focus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetRect {
    /// The node this rectangle belongs to.
    pub id: NodeId,
    /// Viewport co-ordinates: the value axis renormalized so the focused
    /// node's span fills `[0, width]`, the depth axis shifted so the focused
    /// band sits at the top.
    pub rect: Rect,
}

/// The zoom state machine. `Zoom` owns the current focus exclusively; it is
/// updated only through [`activate`](Zoom::activate), and everything derived
/// from it is recomputed on demand through [`project`](Zoom::project) rather
/// than stored.
#[derive(Debug, Clone)]
pub struct Zoom {
    focus: NodeId,
}

impl Zoom {
    /// A zoom state focused on the tree's root.
    pub fn new(tree: &Tree) -> Self {
        Zoom { focus: tree.root() }
    }

    /// The currently focused node.
    pub fn focus(&self) -> NodeId {
        self.focus
    }

    /// Respond to an activation of `id` (e.g. a pointer click). Activating a
    /// node focuses it; activating the focused node again zooms back out to
    /// its parent. Activating the root while it is focused is a no-op.
    pub fn activate(&mut self, tree: &Tree, id: NodeId) -> Result<()> {
        let node = tree
            .get(id)
            .ok_or_else(|| Error::UnknownNode(format!("{id:?}")))?;
        if id == self.focus {
            if let Some(parent) = node.parent {
                tracing::debug!(from = ?self.focus, to = ?parent, "zoom out");
                self.focus = parent;
            }
        } else {
            tracing::debug!(from = ?self.focus, to = ?id, "zoom in");
            self.focus = id;
        }
        Ok(())
    }

    /// Project every node's rectangle into viewport co-ordinates relative to
    /// the current focus. This is a pure function of the tree, the focus and
    /// the viewport; nothing is cached between calls.
    ///
    /// Nodes whose target rectangle falls entirely outside the viewport are
    /// culled; rectangles that merely touch a viewport edge are kept. A
    /// zero-width focus yields degenerate but finite rectangles rather than
    /// propagating a division by zero.
    ///
    /// The tree is rebuilt wholesale when input data changes, and a rebuilt
    /// tree mints fresh ids; a focus id the tree no longer contains degrades
    /// to projecting from the root.
    pub fn project(&self, tree: &Tree, vp: Expanse) -> Vec<TargetRect> {
        let focus = match tree.get(self.focus) {
            Some(n) => n.rect,
            None => {
                tracing::debug!(focus = ?self.focus, "stale focus, projecting from root");
                tree.node(tree.root()).rect
            }
        };
        let viewport = vp.rect();
        let mut out = Vec::with_capacity(tree.len());
        for id in tree.ids() {
            let m = tree.node(id).rect;
            let rect = Rect::from_spans(
                m.xspan().rescale(focus.xspan(), vp.w()),
                m.yspan().shift(-focus.y0),
            );
            if rect.is_disjoint(&viewport) {
                continue;
            }
            out.push(TargetRect { id, rect });
        }
        tracing::trace!(focus = ?self.focus, visible = out.len(), "projection");
        out
    }

    /// The focused node's ancestor chain, root first - the breadcrumb trail.
    pub fn trail(&self, tree: &Tree) -> crate::Path {
        crate::path::node_path(tree, self.focus)
    }
}
