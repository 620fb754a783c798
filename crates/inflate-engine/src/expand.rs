//! Unconstrained expansion: grow an element and, as required, its
//! ancestors.
//!
//! The target is resized to an absolute height; each ancestor is then
//! grown by the same delta, but only when its content height no longer
//! contains the outer height of the element below it. Ancestors that
//! already have room are left alone.

use inflate_dom::NodeId;

use crate::geometry::Geometry;
use crate::trace::{TraceEvent, TraceSink};

/// Resize `target` to `height` pixels of content height and grow any
/// ancestor that no longer contains the element below it.
///
/// `height` is an absolute target, not an increment: the applied delta is
/// `height - content_height(target)` and may be negative, shrinking the
/// target. `None` and non-finite values are silent no-ops (see
/// [`crate::InflateOptions::target_height`]).
///
/// The walk visits every ancestor from the target's parent up to, but not
/// including, the document root. A single synchronous pass; O(depth).
pub fn expand_height<G: Geometry>(
    geom: &mut G,
    target: NodeId,
    height: Option<f64>,
    sink: &mut dyn TraceSink,
) {
    let Some(goal) = height else {
        return;
    };
    if !goal.is_finite() {
        return;
    }

    let delta = goal - geom.content_height(target);
    let resized = geom.content_height(target) + delta;
    geom.set_height(target, resized);
    sink.record(TraceEvent::TargetResized {
        element: geom.describe(target),
        delta,
        height: resized,
    });

    let mut previous = target;
    let mut cursor = geom.parent(target);
    while let Some(ancestor) = cursor {
        // Only adjust the height if the ancestor's content height is less
        // than the outer height of the element it must contain.
        if geom.content_height(ancestor) < geom.outer_height(previous, true) {
            let grown = geom.content_height(ancestor) + delta;
            geom.set_height(ancestor, grown);
            sink.record(TraceEvent::AncestorGrown {
                element: geom.describe(ancestor),
                height: grown,
            });
        } else {
            sink.record(TraceEvent::AncestorUnchanged {
                element: geom.describe(ancestor),
            });
        }

        previous = ancestor;
        cursor = geom.parent(ancestor);
    }
}
