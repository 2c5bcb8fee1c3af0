use serde::{Deserialize, Serialize};

/// The input description of a hierarchy. Leaves carry a `value`; internal
/// nodes derive their value as the sum of their descendants' leaf values when
/// the tree is built. `Node` is plain data, usually declared inline or
/// deserialized from JSON configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// The display name of this node.
    pub name: String,
    /// The declared leaf value. Ignored for nodes with children.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Child nodes, in declared order. Order is preserved by layout.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// A leaf node with a declared value.
    pub fn leaf(name: impl Into<String>, value: f64) -> Self {
        Node {
            name: name.into(),
            value: Some(value),
            children: vec![],
        }
    }

    /// An internal node whose value is derived from its children.
    pub fn branch(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node {
            name: name.into(),
            value: None,
            children,
        }
    }
}
