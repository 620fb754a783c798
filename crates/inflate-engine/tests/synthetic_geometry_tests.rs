//! The algorithms against a hand-rolled [`Geometry`] implementation.
//!
//! The resizing passes are written against the capability trait, not
//! against `MeasuredDocument`; this backs that up by running them on a
//! bare struct-of-arrays tree with no DOM machinery behind it.

use inflate_dom::NodeId;
use inflate_engine::{
    Display, FloatSide, Geometry, NoopSink, Position, expand_height, fit_height,
};

/// A minimal synthetic tree: parallel arrays indexed by node id.
struct ArrayTree {
    parent: Vec<Option<usize>>,
    height: Vec<f64>,
    /// Vertical padding + border per node.
    overhead: Vec<f64>,
    /// Vertical margin per node.
    margin: Vec<f64>,
    position: Vec<Position>,
}

impl ArrayTree {
    fn children_of(&self, idx: usize) -> Vec<NodeId> {
        (0..self.parent.len())
            .filter(|&i| self.parent[i] == Some(idx))
            .map(NodeId)
            .collect()
    }
}

impl Geometry for ArrayTree {
    fn content_height(&self, el: NodeId) -> f64 {
        self.height[el.0]
    }

    fn outer_height(&self, el: NodeId, include_margins: bool) -> f64 {
        let mut outer = self.height[el.0] + self.overhead[el.0];
        if include_margins {
            outer += self.margin[el.0];
        }
        outer
    }

    fn parent(&self, el: NodeId) -> Option<NodeId> {
        self.parent[el.0].map(NodeId)
    }

    fn children(&self, el: NodeId) -> Vec<NodeId> {
        self.children_of(el.0)
    }

    fn position(&self, el: NodeId) -> Position {
        self.position[el.0]
    }

    fn display(&self, _el: NodeId) -> Display {
        Display::Block
    }

    fn float(&self, _el: NodeId) -> Option<FloatSide> {
        None
    }

    fn set_height(&mut self, el: NodeId, px: f64) {
        self.height[el.0] = px;
    }
}

#[test]
fn test_expand_runs_on_a_synthetic_tree() {
    // 0 is the outermost element; 1 its child; 2 the target.
    let mut tree = ArrayTree {
        parent: vec![None, Some(0), Some(1)],
        height: vec![260.0, 250.0, 200.0],
        overhead: vec![0.0; 3],
        margin: vec![0.0, 0.0, 20.0],
        position: vec![Position::Static; 3],
    };

    expand_height(&mut tree, NodeId(2), Some(300.0), &mut NoopSink);

    // target outer with margins = 320 > 250, parent grows; 350 > 260,
    // so the outermost element grows too.
    assert_eq!(tree.height, vec![360.0, 350.0, 300.0]);
}

#[test]
fn test_fit_runs_on_a_synthetic_tree() {
    // 0 is the container; 1 and 2 its children (2 is the chain); 3 the
    // target inside 2. Node 1 is absolutely positioned, so it consumes
    // nothing.
    let mut tree = ArrayTree {
        parent: vec![None, Some(0), Some(0), Some(2)],
        height: vec![500.0, 900.0, 50.0, 10.0],
        overhead: vec![0.0, 0.0, 0.0, 20.0],
        margin: vec![0.0; 4],
        position: vec![
            Position::Static,
            Position::Absolute,
            Position::Static,
            Position::Static,
        ],
    };

    fit_height(&mut tree, NodeId(3), NodeId(0), &mut NoopSink).unwrap();

    assert_eq!(tree.height[2], 500.0);
    assert_eq!(tree.height[3], 480.0);
}
