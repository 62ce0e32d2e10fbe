//! Shared types for Kinda-Lang: error taxonomy, diagnostics, environment
//! configuration. No other `kinda-*` crate depends on anything but this one
//! and `std`/third-party crates — it sits at the bottom of the dependency
//! graph the way `agenticlaw-core` does for its sibling crates.

pub mod config;
pub mod error;
pub mod span;

pub use config::Config;
pub use error::{Error, Result};
pub use span::{SourceLocation, Span};
