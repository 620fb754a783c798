//! Structured trace events for resize passes.
//!
//! Debug output is modeled as an event sink rather than direct console
//! writes, so a pass can be observed in tests (or silenced entirely)
//! without coupling the algorithms to a display environment. Each event
//! renders as one human-readable line via `Display`; [`StderrSink`] is the
//! implementation behind the `debug: true` option.

use std::fmt;

use crate::geometry::OutOfFlowReason;

/// One measurement or mutation decision taken during a resize pass.
///
/// Events carry element labels (see [`crate::Geometry::describe`]) rather
/// than raw ids so a trace reads like the tree it walked.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceEvent {
    /// The expansion target was set to its absolute target height.
    TargetResized {
        /// Label of the target element.
        element: String,
        /// Signed difference applied to the content height.
        delta: f64,
        /// Content height after the resize.
        height: f64,
    },
    /// An ancestor no longer contained the previous element and was grown.
    AncestorGrown {
        /// Label of the ancestor.
        element: String,
        /// Content height after growing.
        height: f64,
    },
    /// An ancestor already contained the previous element; left unchanged.
    AncestorUnchanged {
        /// Label of the ancestor.
        element: String,
    },
    /// The fitter moved down one chain level and read the space on offer.
    LevelEntered {
        /// Label of the element being fitted at this level.
        element: String,
        /// The parent's content height before sibling subtraction.
        available: f64,
    },
    /// An in-flow sibling consumed part of the available height.
    SiblingConsumed {
        /// Label of the sibling.
        sibling: String,
        /// Outer height (margins included) subtracted from the available
        /// space.
        outer: f64,
    },
    /// An out-of-flow sibling was skipped without consuming space.
    SiblingSkipped {
        /// Label of the sibling.
        sibling: String,
        /// Why it takes no space in normal flow.
        reason: OutOfFlowReason,
    },
    /// A chain element's content height was written.
    HeightSet {
        /// Label of the element.
        element: String,
        /// The new content height, overhead already netted out.
        height: f64,
    },
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::TargetResized {
                element,
                delta,
                height,
            } => {
                write!(f, "added {delta} and resized {element} to {height}")
            }
            TraceEvent::AncestorGrown { element, height } => {
                write!(f, "  => resized {element} to {height}")
            }
            TraceEvent::AncestorUnchanged { element } => {
                write!(f, "  => no forced resize required for {element}")
            }
            TraceEvent::LevelEntered { element, available } => {
                write!(f, "  => fitting {element} into {available}px")
            }
            TraceEvent::SiblingConsumed { sibling, outer } => {
                write!(f, "    => -{outer} ({sibling})")
            }
            TraceEvent::SiblingSkipped { sibling, reason } => {
                write!(f, "    => -0 ({sibling} is {reason})")
            }
            TraceEvent::HeightSet { element, height } => {
                write!(f, "  => set height of {element} to {height}")
            }
        }
    }
}

/// Receiver for trace events emitted during a resize pass.
pub trait TraceSink {
    /// Record one event. Ordering follows the pass exactly.
    fn record(&mut self, event: TraceEvent);
}

/// Drops every event. The default when `debug` is off.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {
    fn record(&mut self, _event: TraceEvent) {}
}

/// Prints each event to stderr as one line. Backs the `debug: true` option.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl TraceSink for StderrSink {
    fn record(&mut self, event: TraceEvent) {
        eprintln!("{event}");
    }
}

/// Buffers events in memory so tests can assert on a pass's decisions.
#[derive(Debug, Clone, Default)]
pub struct CollectSink {
    /// Recorded events, in emission order.
    pub events: Vec<TraceEvent>,
}

impl TraceSink for CollectSink {
    fn record(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_render_as_single_lines() {
        let resized = TraceEvent::TargetResized {
            element: "div#content".to_string(),
            delta: 100.0,
            height: 300.0,
        };
        assert_eq!(resized.to_string(), "added 100 and resized div#content to 300");

        let skipped = TraceEvent::SiblingSkipped {
            sibling: "aside.nav".to_string(),
            reason: OutOfFlowReason::Floated,
        };
        assert_eq!(skipped.to_string(), "    => -0 (aside.nav is floated)");

        let unchanged = TraceEvent::AncestorUnchanged {
            element: "body".to_string(),
        };
        assert_eq!(
            unchanged.to_string(),
            "  => no forced resize required for body"
        );
    }

    #[test]
    fn collect_sink_preserves_order() {
        let mut sink = CollectSink::default();
        sink.record(TraceEvent::LevelEntered {
            element: "div".to_string(),
            available: 500.0,
        });
        sink.record(TraceEvent::HeightSet {
            element: "div".to_string(),
            height: 480.0,
        });
        assert_eq!(sink.events.len(), 2);
        assert!(matches!(sink.events[0], TraceEvent::LevelEntered { .. }));
    }
}
