// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

/// Settings read from the `[latex_offline]` section of a config file.
///
/// Every field is optional: only keys explicitly present in the file are
/// carried, so the resolver can tell "set by the file" from "absent".
/// Defaulting is the resolver's job, never the loader's. `mode` and
/// `im_version` stay raw strings here; enum validation also belongs to the
/// resolver, so a bad value fails resolution instead of being swallowed as a
/// parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileSection {
    pub workdir: Option<PathBuf>,
    pub cmd: Option<String>,
    pub mode: Option<String>,
    pub dry_run: Option<bool>,
    pub im_version: Option<String>,
    pub verbose: Option<bool>,
    /// Recognized for symmetry with the CLI surface, but a file cannot
    /// relocate itself; see [`load_section`].
    pub config_file: Option<PathBuf>,
}

/// Top-level shape of the config file: one section keyed by the program name.
/// Unknown top-level tables and unknown keys inside the section are ignored.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    latex_offline: FileSection,
}

/// Read the `[latex_offline]` section from `path`.
///
/// This never fails the run: a missing or unreadable file, unparseable TOML,
/// or a section of the wrong shape (e.g. a string where a boolean belongs)
/// all degrade to an empty section, so a half-written config file leaves the
/// tool usable with CLI flags and defaults.
pub fn load_section(path: &Path) -> FileSection {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            debug!(path = %path.display(), %err, "no config file loaded");
            return FileSection::default();
        }
    };

    let parsed: FileConfig = match toml::from_str(&contents) {
        Ok(parsed) => parsed,
        Err(err) => {
            warn!(
                path = %path.display(),
                %err,
                "ignoring malformed config file"
            );
            return FileSection::default();
        }
    };

    let section = parsed.latex_offline;
    if section.config_file.is_some() {
        debug!(
            path = %path.display(),
            "config_file key inside the config file has no effect"
        );
    }
    section
}
