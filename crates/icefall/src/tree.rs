//! The arena-allocated layout tree derived from a [`Node`] description.

use icefall_geom::Rect;

use crate::node::Node;

/// Identifies a node in a [`Tree`]. Ids are indices into the tree's arena and
/// are only meaningful for the tree that minted them. A rebuilt tree mints
/// fresh ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node in the built tree, annotated with derived values and, after
/// [`Partition::layout`](crate::Partition::layout) has run, with its absolute
/// rectangle.
#[derive(Debug, Clone)]
pub struct LayoutNode {
    /// The display name, copied from the input node.
    pub name: String,
    /// The computed value: the declared leaf value for leaves (clamped to be
    /// finite and non-negative), the sum of child values for internal nodes.
    pub value: f64,
    /// Distance from the root. The root has depth 0.
    pub depth: usize,
    /// The maximum depth of the subtree below this node. Leaves have height 0.
    pub height: usize,
    /// Non-owning link to the parent, used for ancestor walks and zoom-out.
    pub parent: Option<NodeId>,
    /// Children in declared order.
    pub children: Vec<NodeId>,
    /// Absolute extents assigned by partition layout. Zero until layout runs.
    pub rect: Rect,
}

impl LayoutNode {
    /// True if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// The built hierarchy: an arena of [`LayoutNode`]s in preorder, with the
/// root at index 0. The tree is purely derived from its input - it is
/// rebuilt from scratch whenever the input data changes, never mutated
/// incrementally.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<LayoutNode>,
}

impl Tree {
    /// Build the layout tree for an input hierarchy. Values roll up bottom-up:
    /// a leaf contributes its declared value (missing, negative, or non-finite
    /// values count as 0), an internal node the sum of its children.
    pub fn build(spec: &Node) -> Tree {
        let mut nodes = Vec::new();
        build_into(&mut nodes, spec, None, 0);
        Tree { nodes }
    }

    /// The root id. Always valid.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// The number of nodes in the tree. Always at least 1.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a built tree contains at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node, returning `None` for ids from another tree.
    pub fn get(&self, id: NodeId) -> Option<&LayoutNode> {
        self.nodes.get(id.index())
    }

    /// True if `id` refers to a node in this tree.
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// All ids in preorder (parents before children, siblings in declared
    /// order).
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len() as u32).map(NodeId)
    }

    /// Walk from `id` to the root, inclusive of both.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: if self.contains(id) { Some(id) } else { None },
        }
    }

    pub(crate) fn node(&self, id: NodeId) -> &LayoutNode {
        &self.nodes[id.index()]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut LayoutNode {
        &mut self.nodes[id.index()]
    }
}

/// Iterator over a node and its ancestors up to the root.
pub struct Ancestors<'a> {
    tree: &'a Tree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next?;
        self.next = self.tree.node(id).parent;
        Some(id)
    }
}

fn build_into(
    nodes: &mut Vec<LayoutNode>,
    spec: &Node,
    parent: Option<NodeId>,
    depth: usize,
) -> NodeId {
    let id = NodeId(nodes.len() as u32);
    nodes.push(LayoutNode {
        name: spec.name.clone(),
        value: 0.0,
        depth,
        height: 0,
        parent,
        children: Vec::new(),
        rect: Rect::default(),
    });
    if spec.children.is_empty() {
        nodes[id.index()].value = clamp_value(spec.value);
        return id;
    }
    let mut sum = 0.0;
    let mut height = 0;
    let mut children = Vec::with_capacity(spec.children.len());
    for child in &spec.children {
        let cid = build_into(nodes, child, Some(id), depth + 1);
        sum += nodes[cid.index()].value;
        height = height.max(nodes[cid.index()].height);
        children.push(cid);
    }
    let node = &mut nodes[id.index()];
    node.value = sum;
    node.height = height + 1;
    node.children = children;
    id
}

fn clamp_value(v: Option<f64>) -> f64 {
    match v {
        Some(x) if x.is_finite() && x > 0.0 => x,
        _ => 0.0,
    }
}
