// src/errors.rs

//! Crate-wide error types.
//!
//! Configuration problems get a structured [`ConfigError`] so callers (and
//! tests) can match on the failure kind; everything else flows through
//! `anyhow` at the orchestration seams.

use std::path::PathBuf;

pub use anyhow::{Error, Result};

/// Hard validation failures while resolving the configuration.
///
/// Any of these prevents a command from being built or executed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The resolved working directory does not exist or is not a directory.
    #[error("{} is not a directory", .0.display())]
    InvalidWorkdir(PathBuf),

    /// `mode` is outside {auto, manual}.
    #[error("invalid mode '{0}' (expected 'auto' or 'manual')")]
    InvalidMode(String),

    /// `im_version` is outside {light, extra, full}.
    #[error("invalid im_version '{0}' (expected 'light', 'extra' or 'full')")]
    InvalidImageVersion(String),
}
