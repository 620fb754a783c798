//! Constrained and unconstrained element height resizing.
//!
//! # Scope
//!
//! This crate implements the two resizing passes of the inflate engine:
//!
//! - **Unconstrained expansion** ([`expand`]) — resize an element to an
//!   absolute height, then walk its ancestors upward and grow each one
//!   only if its content height no longer contains the element below it.
//!
//! - **Constrained fitting** ([`fit`]) — walk the chain of elements from a
//!   designated ancestor container down to a target, outermost first, and
//!   at each level hand the element the container space left over after
//!   flow-participating siblings are accounted for, net of the element's
//!   own box-model overhead
//!   ([§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)).
//!
//! Both passes read and mutate geometry exclusively through the
//! [`Geometry`] trait, so they run identically against a live DOM binding
//! or a synthetic test tree. [`MeasuredDocument`] is the batteries-included
//! implementation: an element tree plus per-element [`BoxMetrics`], with a
//! selector-driven surface ([`MeasuredDocument::select`],
//! [`MeasuredDocument::inflate`], [`MeasuredDocument::inflate_to`])
//! mirroring the plugin interface this engine descends from.
//!
//! # Not Implemented
//!
//! - Width inflation (a declared no-op: the width options are accepted,
//!   warn once, and change nothing)
//! - Combinator/attribute/pseudo-class selectors
//! - Any live DOM binding; scenes are built from data (see [`scene`])

/// The measured document: tree + metrics + entry points.
pub mod document;
/// Error type for selector parsing and constrained fitting.
pub mod error;
/// Unconstrained expansion pass.
pub mod expand;
/// Constrained fitting pass.
pub mod fit;
/// The geometry capability trait and flow-participation rules.
pub mod geometry;
/// Per-call option structs.
pub mod options;
/// Scene descriptions (serde) for building measured documents from data.
pub mod scene;
/// Selector parsing and matching per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;
/// Style keywords and edge sizes.
pub mod style;
/// Structured trace events and sinks.
pub mod trace;

// Re-exports for convenience
pub use document::{BoxMetrics, MeasuredDocument};
pub use error::InflateError;
pub use expand::expand_height;
pub use fit::fit_height;
pub use geometry::{Geometry, OutOfFlowReason, out_of_flow_reason};
pub use options::{FitOptions, InflateOptions};
pub use scene::SceneNode;
pub use selector::{Selection, Selector, SimpleSelector};
pub use style::{Display, EdgeSizes, FloatSide, Position};
pub use trace::{CollectSink, NoopSink, StderrSink, TraceEvent, TraceSink};
