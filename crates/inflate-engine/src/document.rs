//! A measured containment tree: the concrete [`Geometry`] implementation
//! and the selector-driven entry points.
//!
//! [`MeasuredDocument`] pairs an element tree with per-element box metrics,
//! the way a DOM-binding layer pairs a live tree with computed style. All
//! resize state lives in the metrics map; a pass is a plain read-modify-
//! write over it with no retained scratch state between calls.

use std::collections::HashMap;
use std::fmt::{self, Write as _};

use inflate_common::warning::warn_once;
use inflate_dom::{DomTree, ElementData, NodeId};

use crate::error::InflateError;
use crate::expand::expand_height;
use crate::fit::fit_height;
use crate::geometry::Geometry;
use crate::options::{FitOptions, InflateOptions};
use crate::selector::{Selection, Selector};
use crate::style::{Display, EdgeSizes, FloatSide, Position};
use crate::trace::{NoopSink, StderrSink, TraceSink};

/// The box geometry of one element.
///
/// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
/// Content dimensions plus the three surrounding bands, and the style
/// flags that decide flow participation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoxMetrics {
    /// Content width in px. Carried for box completeness; width inflation
    /// is unimplemented and nothing mutates it.
    pub width: f64,
    /// Content height in px: the value the resize passes read and write.
    pub height: f64,
    /// Padding band.
    pub padding: EdgeSizes,
    /// Border band.
    pub border: EdgeSizes,
    /// Margin band.
    pub margin: EdgeSizes,
    /// Computed `position`.
    pub position: Position,
    /// Computed `display`.
    pub display: Display,
    /// Computed `float`, `None` when not floated.
    pub float: Option<FloatSide>,
}

impl BoxMetrics {
    /// Metrics with the given content height and everything else default:
    /// no edges, `static`, `block`, unfloated.
    #[must_use]
    pub fn with_height(height: f64) -> Self {
        BoxMetrics {
            height,
            ..BoxMetrics::default()
        }
    }
}

/// An element tree with per-element box metrics.
///
/// This is the object the public surface operates on: build one (usually
/// from a scene description), `select` elements, then `inflate` or
/// `inflate_to` them. It implements [`Geometry`], so the algorithms see it
/// the same way they see a synthetic test tree.
#[derive(Debug, Clone, Default)]
pub struct MeasuredDocument {
    tree: DomTree,
    metrics: HashMap<NodeId, BoxMetrics>,
}

impl MeasuredDocument {
    /// Create an empty document (just the root).
    #[must_use]
    pub fn new() -> Self {
        MeasuredDocument::default()
    }

    /// The underlying element tree.
    #[must_use]
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Append a measured element under `parent` and return its id.
    pub fn add_element(
        &mut self,
        parent: NodeId,
        data: ElementData,
        metrics: BoxMetrics,
    ) -> NodeId {
        let id = self.tree.alloc_element(data);
        self.tree.append_child(parent, id);
        let _ = self.metrics.insert(id, metrics);
        id
    }

    /// The metrics for `el`, or `None` for the document root.
    #[must_use]
    pub fn metrics(&self, el: NodeId) -> Option<&BoxMetrics> {
        self.metrics.get(&el)
    }

    /// All elements matching `selector`, in tree order.
    ///
    /// An empty result is not an error; entry points no-op over it.
    ///
    /// # Errors
    ///
    /// Returns [`InflateError::InvalidSelector`] when the selector fails
    /// to parse.
    pub fn select(&self, selector: &str) -> Result<Selection, InflateError> {
        let parsed = Selector::parse(selector)?;
        let ids = self
            .tree
            .elements()
            .filter(|&id| {
                self.tree
                    .element(id)
                    .is_some_and(|data| parsed.matches(data))
            })
            .collect();
        Ok(Selection::new(ids))
    }

    /// The nearest ancestor of `el` matching `selector`, if any.
    #[must_use]
    pub fn closest_ancestor(&self, el: NodeId, selector: &Selector) -> Option<NodeId> {
        self.tree
            .ancestors(el)
            .find(|&a| self.tree.element(a).is_some_and(|data| selector.matches(data)))
    }

    /// Unconstrained expansion: resize every selected element to the
    /// options' absolute height target and grow ancestors as required.
    ///
    /// Returns the selection for chaining. An absent or non-finite height
    /// is a silent no-op; a width request warns once and does nothing.
    pub fn inflate(&mut self, selection: Selection, options: &InflateOptions) -> Selection {
        if options.debug {
            let mut sink = StderrSink;
            self.inflate_with_sink(selection, options, &mut sink)
        } else {
            let mut sink = NoopSink;
            self.inflate_with_sink(selection, options, &mut sink)
        }
    }

    /// [`MeasuredDocument::inflate`] with a caller-supplied trace sink.
    pub fn inflate_with_sink(
        &mut self,
        selection: Selection,
        options: &InflateOptions,
        sink: &mut dyn TraceSink,
    ) -> Selection {
        if options.width.is_some() {
            warn_once(
                "inflate",
                "width inflation is not implemented; ignoring width option",
            );
        }

        let height = options.target_height();
        for &el in &selection {
            expand_height(self, el, height, sink);
        }
        selection
    }

    /// Constrained fitting: resize every selected element (and the chain
    /// of ancestors between it and its container) to fill the nearest
    /// ancestor matching `container_selector`.
    ///
    /// Returns the selection for chaining.
    ///
    /// # Errors
    ///
    /// [`InflateError::InvalidSelector`] when `container_selector` fails
    /// to parse; [`InflateError::ContainerNotAncestor`] when a selected
    /// element has no matching ancestor. Heights already written for
    /// earlier elements of the selection stay written; the failing
    /// element itself is untouched.
    pub fn inflate_to(
        &mut self,
        selection: Selection,
        container_selector: &str,
        options: &FitOptions,
    ) -> Result<Selection, InflateError> {
        if options.debug {
            let mut sink = StderrSink;
            self.inflate_to_with_sink(selection, container_selector, options, &mut sink)
        } else {
            let mut sink = NoopSink;
            self.inflate_to_with_sink(selection, container_selector, options, &mut sink)
        }
    }

    /// [`MeasuredDocument::inflate_to`] with a caller-supplied trace sink.
    ///
    /// # Errors
    ///
    /// As [`MeasuredDocument::inflate_to`].
    pub fn inflate_to_with_sink(
        &mut self,
        selection: Selection,
        container_selector: &str,
        options: &FitOptions,
        sink: &mut dyn TraceSink,
    ) -> Result<Selection, InflateError> {
        let selector = Selector::parse(container_selector)?;

        if options.width {
            warn_once(
                "inflate",
                "width fitting is not implemented; ignoring width option",
            );
        }
        if !options.height {
            return Ok(selection);
        }

        for &el in &selection {
            let container = self.closest_ancestor(el, &selector).ok_or_else(|| {
                InflateError::ContainerNotAncestor {
                    container: container_selector.to_string(),
                    target: self.describe(el),
                }
            })?;
            fit_height(self, el, container, sink)?;
        }
        Ok(selection)
    }

    /// Write an indented dump of the measured tree, one element per line.
    ///
    /// # Errors
    ///
    /// Propagates formatter errors from `out`.
    pub fn write_tree(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out, "document")?;
        for &child in self.tree.children(self.tree.root()) {
            self.write_subtree(out, child, 1)?;
        }
        Ok(())
    }

    fn write_subtree(&self, out: &mut dyn fmt::Write, el: NodeId, depth: usize) -> fmt::Result {
        for _ in 0..depth {
            write!(out, "  ")?;
        }
        write!(out, "{}", self.describe(el))?;
        if let Some(metrics) = self.metrics(el) {
            write!(
                out,
                " content={} outer={}",
                metrics.height,
                self.outer_height(el, true)
            )?;
            if metrics.position != Position::Static {
                write!(out, " position={}", metrics.position)?;
            }
            if metrics.display != Display::Block {
                write!(out, " display={}", metrics.display)?;
            }
            if let Some(side) = metrics.float {
                write!(out, " float={side}")?;
            }
        }
        writeln!(out)?;
        for &child in self.tree.children(el) {
            self.write_subtree(out, child, depth + 1)?;
        }
        Ok(())
    }
}

impl Geometry for MeasuredDocument {
    fn content_height(&self, el: NodeId) -> f64 {
        self.metrics.get(&el).map_or(0.0, |m| m.height)
    }

    fn outer_height(&self, el: NodeId, include_margins: bool) -> f64 {
        self.metrics.get(&el).map_or(0.0, |m| {
            let mut outer = m.height + m.padding.vertical() + m.border.vertical();
            if include_margins {
                outer += m.margin.vertical();
            }
            outer
        })
    }

    fn parent(&self, el: NodeId) -> Option<NodeId> {
        self.tree.parent(el).filter(|&p| self.tree.is_element(p))
    }

    fn children(&self, el: NodeId) -> Vec<NodeId> {
        self.tree
            .children(el)
            .iter()
            .copied()
            .filter(|&c| self.tree.is_element(c))
            .collect()
    }

    fn position(&self, el: NodeId) -> Position {
        self.metrics.get(&el).map_or_else(Position::default, |m| m.position)
    }

    fn display(&self, el: NodeId) -> Display {
        self.metrics.get(&el).map_or_else(Display::default, |m| m.display)
    }

    fn float(&self, el: NodeId) -> Option<FloatSide> {
        self.metrics.get(&el).and_then(|m| m.float)
    }

    fn set_height(&mut self, el: NodeId, px: f64) {
        if let Some(metrics) = self.metrics.get_mut(&el) {
            metrics.height = px;
        }
    }

    /// `tag#id.class` labels, e.g. `div#main.panel.wide`.
    fn describe(&self, el: NodeId) -> String {
        let Some(data) = self.tree.element(el) else {
            return format!("node{}", el.0);
        };
        let mut label = data.tag_name.clone();
        if let Some(id) = data.id() {
            let _ = write!(label, "#{id}");
        }
        if let Some(classes) = data.attrs.get("class") {
            for class in classes.split_whitespace() {
                let _ = write!(label, ".{class}");
            }
        }
        label
    }
}
