//! The geometry capability the resizing algorithms are written against.
//!
//! The expander and fitter never touch a tree directly; they read and
//! mutate element geometry through [`Geometry`]. Anything that can answer
//! these questions about a containment tree can be resized, which keeps the
//! algorithms unit-testable against a synthetic tree with no rendering
//! environment behind it.

use inflate_dom::NodeId;
use strum_macros::Display;

use crate::style::{Display as DisplayMode, FloatSide, Position};

/// Per-element measurement and mutation, the seam between the resizing
/// algorithms and whatever owns the actual tree.
///
/// Heights are content-box pixel values. There are no error conditions: a
/// handle that no longer resolves reads as zero-sized and mutations on it
/// are dropped, which is the collaborator's responsibility, not ours.
pub trait Geometry {
    /// The element's content height: height excluding padding, border,
    /// and margin.
    fn content_height(&self, el: NodeId) -> f64;

    /// The element's outer height: content plus vertical padding and
    /// border, plus vertical margins when `include_margins` is set.
    fn outer_height(&self, el: NodeId, include_margins: bool) -> f64;

    /// The element's parent element, or `None` once the document root is
    /// reached. The root itself is never yielded: ancestor walks stop
    /// just below it.
    fn parent(&self, el: NodeId) -> Option<NodeId>;

    /// The element's child elements in tree order.
    fn children(&self, el: NodeId) -> Vec<NodeId>;

    /// The element's computed `position`.
    fn position(&self, el: NodeId) -> Position;

    /// The element's computed `display`.
    fn display(&self, el: NodeId) -> DisplayMode;

    /// The element's computed `float`, `None` when not floated.
    fn float(&self, el: NodeId) -> Option<FloatSide>;

    /// Set the element's content height. Padding, border, and margin are
    /// untouched.
    fn set_height(&mut self, el: NodeId, px: f64);

    /// A short human-readable label for trace lines and error messages.
    fn describe(&self, el: NodeId) -> String {
        format!("node{}", el.0)
    }
}

/// Why an element is excluded from normal flow.
///
/// [§ 9.3 Positioning schemes](https://www.w3.org/TR/CSS2/visuren.html#positioning-scheme)
/// Out-of-flow boxes (absolutely positioned or floated) and unrendered
/// boxes (`display: none`) do not compete for vertical space, so the
/// constrained fitter never subtracts their outer height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum OutOfFlowReason {
    /// `position: absolute` or `position: fixed` — laid out by the
    /// absolute model, removed from normal flow.
    #[strum(serialize = "absolutely positioned")]
    AbsolutelyPositioned,
    /// `display: none` — generates no box at all.
    #[strum(serialize = "hidden")]
    Hidden,
    /// A floated box, shifted out of the normal flow.
    #[strum(serialize = "floated")]
    Floated,
}

/// Why `el` does not participate in normal flow, or `None` if it does.
///
/// Checks run in property order: position, then display, then float; the
/// first hit names the reason.
#[must_use]
pub fn out_of_flow_reason<G: Geometry + ?Sized>(geom: &G, el: NodeId) -> Option<OutOfFlowReason> {
    if geom.position(el).is_absolutely_positioned() {
        Some(OutOfFlowReason::AbsolutelyPositioned)
    } else if geom.display(el) == DisplayMode::None {
        Some(OutOfFlowReason::Hidden)
    } else if geom.float(el).is_some() {
        Some(OutOfFlowReason::Floated)
    } else {
        None
    }
}
