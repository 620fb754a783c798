//! Per-call option structs for the two resizing entry points.
//!
//! Options are plain per-call values; no settings live at module scope, so
//! the entry points are reentrant and leak nothing between invocations.

/// Options for unconstrained expansion ([`crate::MeasuredDocument::inflate`]).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InflateOptions {
    /// Target width in px. Accepted but unimplemented: width inflation is
    /// a declared no-op, and setting this only triggers a one-shot warning.
    pub width: Option<f64>,
    /// Target content height in px. This is an absolute target, not an
    /// increment: a value below the current height shrinks the element.
    /// `None` (or a non-finite number) skips the height axis entirely.
    pub height: Option<f64>,
    /// Emit a human-readable trace of every measurement and mutation
    /// decision to stderr.
    pub debug: bool,
}

impl InflateOptions {
    /// The effective height target: `None` when unset or non-finite.
    ///
    /// Non-numeric input is a silent per-axis no-op, never an error.
    #[must_use]
    pub fn target_height(&self) -> Option<f64> {
        self.height.filter(|h| h.is_finite())
    }
}

/// Options for constrained fitting ([`crate::MeasuredDocument::inflate_to`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FitOptions {
    /// Fit the width axis. Accepted but unimplemented, as above.
    pub width: bool,
    /// Fit the height axis. Defaults to `true`; `false` makes the whole
    /// call a no-op for that axis.
    pub height: bool,
    /// Emit a human-readable trace of every measurement and mutation
    /// decision to stderr.
    pub debug: bool,
}

impl Default for FitOptions {
    fn default() -> Self {
        FitOptions {
            width: false,
            height: true,
            debug: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_defaults_off_and_fit_defaults_on() {
        assert_eq!(InflateOptions::default().height, None);
        assert!(FitOptions::default().height);
        assert!(!FitOptions::default().width);
    }

    #[test]
    fn non_finite_heights_are_dropped() {
        let nan = InflateOptions {
            height: Some(f64::NAN),
            ..InflateOptions::default()
        };
        assert_eq!(nan.target_height(), None);

        let inf = InflateOptions {
            height: Some(f64::INFINITY),
            ..InflateOptions::default()
        };
        assert_eq!(inf.target_height(), None);

        let ok = InflateOptions {
            height: Some(320.0),
            ..InflateOptions::default()
        };
        assert_eq!(ok.target_height(), Some(320.0));
    }
}
