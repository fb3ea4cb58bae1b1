#![forbid(unsafe_code)]

//! Diagnostics for the page core.
//!
//! Call sites write `crate::debug!(target: targets::CAROUSEL, ...)` and never
//! guard it. Built with `--features tracing` those names are `tracing`'s own
//! macros; built without, they swallow their arguments and cost nothing.

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, info, trace, warn};

/// `target:` values, one per page area.
pub mod targets {
    pub const CAROUSEL: &str = "xingu::carousel";
    pub const CONTACT: &str = "xingu::contact";
    pub const CONFIG: &str = "xingu::config";
    pub const PAGE: &str = "xingu::page";
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    #[macro_export]
    macro_rules! info {
        ($($arg:tt)*) => {};
    }

    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }

    /// Expands to a [`NoopSpan`](crate::logging::NoopSpan) so `.enter()`
    /// still type-checks.
    #[macro_export]
    macro_rules! debug_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }
}

/// Span placeholder for builds without `tracing`.
#[cfg(not(feature = "tracing"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    pub fn enter(&self) -> NoopGuard {
        NoopGuard
    }
}

#[cfg(not(feature = "tracing"))]
#[derive(Debug)]
pub struct NoopGuard;
