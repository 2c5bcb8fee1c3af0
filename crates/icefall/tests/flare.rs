//! End-to-end test: a JSON-configured hierarchy driven through build, layout,
//! activation and projection, the way a rendering layer would use the crate.

use icefall::{Expanse, Node, Partition, PathMatcher, Tree, Zoom, node_at, path};

const FLARE: &str = r#"
{
  "name": "flare",
  "children": [
    {
      "name": "analytics",
      "children": [
        {
          "name": "cluster",
          "children": [
            {"name": "AgglomerativeCluster", "value": 3938},
            {"name": "CommunityStructure", "value": 3812},
            {"name": "MergeEdge", "value": 743}
          ]
        },
        {
          "name": "graph",
          "children": [
            {"name": "BetweennessCentrality", "value": 3534},
            {"name": "SpanningTree", "value": 3416}
          ]
        }
      ]
    },
    {
      "name": "animate",
      "children": [
        {"name": "Easing", "value": 17010},
        {"name": "Transitioner", "value": 19975}
      ]
    },
    {"name": "util", "value": 1000}
  ]
}
"#;

fn setup() -> (Tree, Zoom) {
    let spec: Node = serde_json::from_str(FLARE).unwrap();
    let mut tree = Tree::build(&spec);
    Partition::new().layout(&mut tree, Expanse::new(800.0, 400.0).unwrap());
    let zoom = Zoom::new(&tree);
    (tree, zoom)
}

#[test]
fn build_rolls_up_values() {
    let (tree, _) = setup();
    let root = tree.get(tree.root()).unwrap();
    let expected = 3938.0 + 3812.0 + 743.0 + 3534.0 + 3416.0 + 17010.0 + 19975.0 + 1000.0;
    assert!((root.value - expected).abs() < 1e-9);
    assert_eq!(root.height, 3);
}

#[test]
fn layout_tiles_the_viewport() {
    let (tree, _) = setup();
    let root = tree.get(tree.root()).unwrap();
    assert_eq!(root.rect.x0, 0.0);
    assert_eq!(root.rect.x1, 800.0);
    // Four levels in a 400px-tall viewport.
    assert_eq!(root.rect.height(), 100.0);
    let spans: f64 = root
        .children
        .iter()
        .map(|&c| tree.get(c).unwrap().rect.width())
        .sum();
    assert!((spans - 800.0).abs() < 1e-9);
}

#[test]
fn activate_by_path_and_project() {
    let (tree, mut zoom) = setup();
    let animate = path::find(&tree, &PathMatcher::new("/flare/animate/").unwrap()).unwrap();
    zoom.activate(&tree, animate).unwrap();
    assert_eq!(zoom.trail(&tree).to_string(), "/flare/animate");

    let rects = zoom.project(&tree, Expanse::new(800.0, 400.0).unwrap());
    let target = rects.iter().find(|t| t.id == animate).unwrap();
    assert!((target.rect.x0 - 0.0).abs() < 1e-9);
    assert!((target.rect.x1 - 800.0).abs() < 1e-9);
    assert_eq!(target.rect.y0, 0.0);

    // Easing and Transitioner share the full width proportionally.
    let easing = path::find(&tree, &PathMatcher::new("Easing/").unwrap()).unwrap();
    let te = rects.iter().find(|t| t.id == easing).unwrap();
    let frac = 17010.0 / (17010.0 + 19975.0);
    assert!((te.rect.x1 - 800.0 * frac).abs() < 1e-6);
}

#[test]
fn click_roundtrip() {
    let (tree, mut zoom) = setup();
    // A click in the second band lands on a top-level branch; activating the
    // same node twice returns focus to the root.
    let hit = node_at(&tree, (1.0, 150.0)).unwrap();
    assert_eq!(tree.get(hit).unwrap().name, "analytics");
    zoom.activate(&tree, hit).unwrap();
    assert_eq!(zoom.focus(), hit);
    zoom.activate(&tree, hit).unwrap();
    assert_eq!(zoom.focus(), tree.root());
}

#[test]
fn relayout_after_resize() {
    let (mut tree, mut zoom) = setup();
    let animate = path::find(&tree, &PathMatcher::new("/flare/animate/").unwrap()).unwrap();
    zoom.activate(&tree, animate).unwrap();

    // The layout tree is purely derived: a resize recomputes it wholesale and
    // the projection follows.
    Partition::new().layout(&mut tree, Expanse::new(400.0, 200.0).unwrap());
    let rects = zoom.project(&tree, Expanse::new(400.0, 200.0).unwrap());
    let target = rects.iter().find(|t| t.id == animate).unwrap();
    assert!((target.rect.x1 - 400.0).abs() < 1e-9);
}
