//! Node paths and path expressions, used for breadcrumb trails and for
//! activating nodes by name.

use std::fmt;

use crate::{
    Result, error,
    tree::{NodeId, Tree},
    walk::{Walk, preorder},
};

/// The name chain from the root to a node, displayed as `/root/a/b`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    path: Vec<String>,
}

impl Path {
    pub fn empty() -> Self {
        Path { path: vec![] }
    }

    pub fn new<T: AsRef<str>>(v: &[T]) -> Self {
        Path {
            path: v.iter().map(|x| x.as_ref().to_string()).collect(),
        }
    }

    /// The path components, root first.
    pub fn components(&self) -> &[String] {
        &self.path
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.path.join("/"))
    }
}

impl From<Vec<String>> for Path {
    fn from(path: Vec<String>) -> Self {
        Path { path }
    }
}

impl From<&str> for Path {
    fn from(v: &str) -> Self {
        Path {
            path: v
                .split('/')
                .filter_map(|x| {
                    if x.is_empty() {
                        None
                    } else {
                        Some(x.to_string())
                    }
                })
                .collect(),
        }
    }
}

/// A match expression that can be applied to node paths.
///
/// Examples:
///
///  - "foo" any path containing "foo"
///  - "foo/*/bar" any path containing "foo" followed by "bar"
///  - "foo/*/bar/" any path containing "foo" followed by "bar" as a final component
///  - "/foo/*/bar/" any path starting with "foo" followed by "bar" as a final component
#[derive(Debug, Clone)]
pub struct PathMatcher {
    expr: regex::Regex,
}

impl PathMatcher {
    pub fn new(path: &str) -> Result<Self> {
        let parts = path.split('/');
        let mut pattern = parts
            .filter_map(|x| {
                if x == "*" {
                    Some(String::from(r"[^\n]*"))
                } else if !x.is_empty() {
                    Some(format!("{}/", regex::escape(x)))
                } else {
                    None
                }
            })
            .collect::<Vec<_>>()
            .join("");
        if path.starts_with('/') {
            pattern = format!("^/{}", pattern)
        }
        pattern = pattern.trim_end_matches('/').to_string();
        if path.ends_with('/') {
            pattern += "$";
        }
        let expr = regex::Regex::new(&pattern).map_err(|e| error::Error::Invalid(e.to_string()))?;
        Ok(PathMatcher { expr })
    }

    /// Check whether the expression matches a given path. Returns the
    /// position of the final match character in the path string.
    pub fn check(&self, path: &Path) -> Option<usize> {
        Some(self.expr.find(&path.to_string())?.end())
    }
}

/// Return the node path for a node id: the name chain from the tree's root.
pub fn node_path(tree: &Tree, id: NodeId) -> Path {
    let mut path: Vec<String> = tree
        .ancestors(id)
        .map(|a| tree.get(a).map(|n| n.name.clone()).unwrap_or_default())
        .collect();
    path.reverse();
    path.into()
}

/// Find the first node (in preorder) whose path matches the expression.
pub fn find(tree: &Tree, matcher: &PathMatcher) -> Option<NodeId> {
    preorder(tree, tree.root(), &mut |id, _| {
        Ok(if matcher.check(&node_path(tree, id)).is_some() {
            Walk::Handle(id)
        } else {
            Walk::Continue
        })
    })
    .ok()
    .flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Node;

    #[test]
    fn display() {
        assert_eq!(Path::new(&["r", "a"]).to_string(), "/r/a");
        assert_eq!(Path::empty().to_string(), "/");
    }

    #[test]
    fn pathfilter() -> Result<()> {
        let v = PathMatcher::new("bar")?;
        assert_eq!(v.check(&"/foo/bar".into()), Some(8));
        assert_eq!(v.check(&"/bar/foo".into()), Some(4));
        assert!(v.check(&"/foo/foo".into()).is_none());

        let v = PathMatcher::new("foo/*/bar")?;
        assert_eq!(v.check(&"/foo/oink/oink/bar".into()), Some(18));
        assert_eq!(v.check(&"/foo/bar".into()), Some(8));

        let v = PathMatcher::new("/foo")?;
        assert_eq!(v.check(&"/foo".into()), Some(4));
        assert!(v.check(&"/bar/foo/bar".into()).is_none());

        let v = PathMatcher::new("foo/")?;
        assert_eq!(v.check(&"/foo".into()), Some(4));
        assert_eq!(v.check(&"/bar/foo".into()), Some(8));
        assert!(v.check(&"/foo/bar".into()).is_none());

        Ok(())
    }

    #[test]
    fn node_paths_and_find() -> Result<()> {
        let t = Tree::build(&Node::branch(
            "r",
            vec![
                Node::branch("a", vec![Node::leaf("aa", 10.0)]),
                Node::leaf("b", 70.0),
            ],
        ));
        let a = t.get(t.root()).unwrap().children[0];
        let aa = t.get(a).unwrap().children[0];
        assert_eq!(node_path(&t, aa), Path::new(&["r", "a", "aa"]));

        assert_eq!(find(&t, &PathMatcher::new("aa/")?), Some(aa));
        assert_eq!(find(&t, &PathMatcher::new("/r/a/")?), Some(a));
        assert_eq!(find(&t, &PathMatcher::new("nope")?), None);
        // First preorder match wins: "a" is a prefix of "aa", so a bare "a"
        // expression finds the branch before the leaf.
        assert_eq!(find(&t, &PathMatcher::new("a")?), Some(a));
        Ok(())
    }
}
