//! # Observability
//!
//! Structured logging for the analysis engine via the `tracing` ecosystem.
//! The library itself only *emits* events (the sweep and the crossover scan
//! log at debug level); installing a subscriber is left to binaries and
//! examples so embedders keep control of their own logging setup.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gibbs_core::observe::{init_logging, LogConfig};
//!
//! init_logging(&LogConfig::default());
//! tracing::info!("starting verification run");
//! ```

pub mod logging;

pub use logging::{init_logging, LogConfig, LogFormat, LogLevel};
