//! Constrained fitting: resize an element and its intermediate ancestors
//! to exactly fill a designated container's content height.
//!
//! The pass works from the outside in. At each level the space on offer is
//! the parent's content height minus the outer height of every sibling
//! still in normal flow; the element is then set to that remainder minus
//! its own box-model overhead, so its final outer height matches the
//! intended box. Resizing must proceed outermost-to-innermost because each
//! level's available space depends on the already-resized height of its
//! parent.

use inflate_dom::NodeId;

use crate::error::InflateError;
use crate::geometry::{Geometry, out_of_flow_reason};
use crate::trace::{TraceEvent, TraceSink};

/// Resize `target` and every element between it and `container` so the
/// chain fills the container's content height.
///
/// # Errors
///
/// Returns [`InflateError::ContainerNotAncestor`] when the walk from
/// `target` reaches the document root without meeting `container`. The
/// chain is validated before any height is written, so a failed call
/// mutates nothing.
pub fn fit_height<G: Geometry>(
    geom: &mut G,
    target: NodeId,
    container: NodeId,
    sink: &mut dyn TraceSink,
) -> Result<(), InflateError> {
    let chain = containment_chain(geom, target, container)?;

    let mut previous = container;
    for current in chain {
        // The max height the current element can reach.
        let mut available = geom.content_height(previous);
        sink.record(TraceEvent::LevelEntered {
            element: geom.describe(current),
            available,
        });

        // Adjust the available height for siblings that occupy space in
        // the normal flow. Absolutely positioned, hidden, and floated
        // siblings don't compete for it.
        for sibling in geom.children(previous) {
            if sibling == current {
                continue;
            }
            match out_of_flow_reason(geom, sibling) {
                None => {
                    let outer = geom.outer_height(sibling, true);
                    available -= outer;
                    sink.record(TraceEvent::SiblingConsumed {
                        sibling: geom.describe(sibling),
                        outer,
                    });
                }
                Some(reason) => {
                    sink.record(TraceEvent::SiblingSkipped {
                        sibling: geom.describe(sibling),
                        reason,
                    });
                }
            }
        }

        // One final adjustment for the element's own padding, borders and
        // margins: set_height writes content height, so the overhead must
        // be netted out for the outer height to land on `available`.
        let overhead = geom.outer_height(current, true) - geom.content_height(current);
        let fitted = available - overhead;
        geom.set_height(current, fitted);
        sink.record(TraceEvent::HeightSet {
            element: geom.describe(current),
            height: fitted,
        });

        // Give the next element access to its parent.
        previous = current;
    }

    Ok(())
}

/// The ordered chain from just inside `container` down to `target`
/// (inclusive), outermost first.
///
/// Never contains the container; the last element is always the target.
fn containment_chain<G: Geometry>(
    geom: &G,
    target: NodeId,
    container: NodeId,
) -> Result<Vec<NodeId>, InflateError> {
    let mut chain = Vec::new();
    let mut cursor = target;
    loop {
        chain.push(cursor);
        match geom.parent(cursor) {
            Some(parent) if parent == container => break,
            Some(parent) => cursor = parent,
            None => {
                return Err(InflateError::ContainerNotAncestor {
                    container: geom.describe(container),
                    target: geom.describe(target),
                });
            }
        }
    }
    chain.reverse();
    Ok(chain)
}
