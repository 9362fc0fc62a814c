// src/config/mod.rs

//! Configuration resolution for latex_offline.
//!
//! Responsibilities:
//! - Define the resolved settings object and image constants (`model.rs`).
//! - Load the `[latex_offline]` section from a TOML file (`loader.rs`).
//! - Merge CLI > file > default and validate (`resolve.rs`).

pub mod loader;
pub mod model;
pub mod resolve;

pub use loader::{load_section, FileSection};
pub use model::{Config, ImageVersion, Mode};
pub use resolve::{resolve, resolve_config_file_path, PartialSettings};
