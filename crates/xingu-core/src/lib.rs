#![forbid(unsafe_code)]

//! Core: deterministic behavior for the Xingu Argamassas landing page.
//!
//! Everything here is host-independent. The embedding environment (the
//! `xingu-web` crate in the browser, plain tests elsewhere) pushes pointer
//! events, viewport sizes, and monotonic timestamps in, and reads frames and
//! decisions back out. Nothing in this crate touches the DOM or a wall clock.

pub mod animation;
pub mod carousel;
pub mod clock;
pub mod config;
pub mod contact;
pub mod error;
pub mod header;
pub mod loader;
pub mod logging;
pub mod menu;
pub mod reveal;
pub mod schedule;
pub mod scroll;
pub mod styles;
pub mod swipe;
pub mod viewport;

pub use carousel::{Carousel, CarouselFrame, Indicator, LayoutInput, Navigation};
pub use config::PageConfig;
pub use error::{ConfigError, InitError};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, info, trace, warn};
