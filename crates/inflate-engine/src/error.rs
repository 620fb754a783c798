//! Error type for the resizing entry points.

use thiserror::Error;

/// Errors reported by selector parsing and constrained fitting.
///
/// Everything else in the engine degrades silently by design: an absent or
/// non-finite height value no-ops that axis, and width options warn once
/// and do nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InflateError {
    /// The designated container is not on the target's ancestor path.
    ///
    /// A non-ancestor container is a programmer-contract violation, not a
    /// meaningful silent-skip case, so it is reported instead of producing
    /// an undefined traversal. Detected before any height is mutated.
    #[error("container '{container}' is not an ancestor of target '{target}'")]
    ContainerNotAncestor {
        /// Description of the container argument (selector or element label).
        container: String,
        /// Description of the target element.
        target: String,
    },

    /// The selector string could not be parsed.
    #[error("invalid selector '{0}'")]
    InvalidSelector(String),
}
