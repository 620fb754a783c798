//! Scene descriptions: a serde-friendly encoding of a measured tree.
//!
//! A scene is the engine's stand-in for a live, rendered document: nested
//! element nodes with their measured box geometry spelled out as data.
//! The CLI and test fixtures describe trees this way (JSON via
//! `serde_json`) instead of parsing markup, because the inputs that matter
//! to a resize pass are measurements, not text.

use serde::{Deserialize, Serialize};

use inflate_dom::{AttributesMap, ElementData, NodeId};

use crate::document::{BoxMetrics, MeasuredDocument};
use crate::style::{Display, EdgeSizes, FloatSide, Position};

/// One element of a scene description, with its subtree.
///
/// Everything except `tag` is optional; defaults are a zero-sized,
/// edge-less, `static` `block` box with no float.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    /// Element tag name, e.g. `div`.
    pub tag: String,
    /// Optional `id` attribute.
    #[serde(default)]
    pub id: Option<String>,
    /// Optional `class` attribute (space-separated class names).
    #[serde(default)]
    pub class: Option<String>,
    /// Content width in px.
    #[serde(default)]
    pub width: f64,
    /// Content height in px.
    #[serde(default)]
    pub height: f64,
    /// Padding band.
    #[serde(default)]
    pub padding: EdgeSizes,
    /// Border band.
    #[serde(default)]
    pub border: EdgeSizes,
    /// Margin band.
    #[serde(default)]
    pub margin: EdgeSizes,
    /// Computed `position` keyword.
    #[serde(default)]
    pub position: Position,
    /// Computed `display` keyword.
    #[serde(default)]
    pub display: Display,
    /// Computed `float` keyword; absent means not floated.
    #[serde(default)]
    pub float: Option<FloatSide>,
    /// Child elements, in order.
    #[serde(default)]
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    /// A bare element with a tag and a content height, defaults elsewhere.
    #[must_use]
    pub fn sized(tag: &str, height: f64) -> Self {
        SceneNode {
            tag: tag.to_string(),
            id: None,
            class: None,
            width: 0.0,
            height,
            padding: EdgeSizes::default(),
            border: EdgeSizes::default(),
            margin: EdgeSizes::default(),
            position: Position::default(),
            display: Display::default(),
            float: None,
            children: Vec::new(),
        }
    }
}

impl MeasuredDocument {
    /// Build a measured document from a scene, rooted directly under the
    /// document node.
    #[must_use]
    pub fn from_scene(scene: &SceneNode) -> Self {
        let mut doc = MeasuredDocument::new();
        let root = doc.tree().root();
        append_scene(&mut doc, root, scene);
        doc
    }
}

fn append_scene(doc: &mut MeasuredDocument, parent: NodeId, scene: &SceneNode) {
    let mut attrs = AttributesMap::new();
    if let Some(id) = &scene.id {
        let _ = attrs.insert("id".to_string(), id.clone());
    }
    if let Some(class) = &scene.class {
        let _ = attrs.insert("class".to_string(), class.clone());
    }

    let data = ElementData {
        tag_name: scene.tag.clone(),
        attrs,
    };
    let metrics = BoxMetrics {
        width: scene.width,
        height: scene.height,
        padding: scene.padding,
        border: scene.border,
        margin: scene.margin,
        position: scene.position,
        display: scene.display,
        float: scene.float,
    };

    let el = doc.add_element(parent, data, metrics);
    for child in &scene.children {
        append_scene(doc, el, child);
    }
}
