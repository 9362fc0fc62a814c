// src/config/model.rs

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::ValueEnum;

/// Container image the tool launches. The tag is derived from
/// [`IMAGE_VERSION_BASE`] plus the selected [`ImageVersion`].
pub const IMAGE_NAME: &str = "dimitrivinet/latex_offline";

/// Base version of the target image; also the version string printed by
/// `--version`. Versioned together with the image tag scheme.
pub const IMAGE_VERSION_BASE: &str = "v1.2.0";

/// Fixed name given to the launched container.
pub const CONTAINER_NAME: &str = "latex_offline";

/// In-container mount point for the host working directory.
pub const DATA_DIR: &str = "/data";

/// File name looked up when `--config_file` is not passed.
pub const DEFAULT_CONFIG_FILE: &str = "latex_offline.toml";

/// Default build command run inside the container.
pub const DEFAULT_CMD: &str = "make";

/// Watcher mode.
///
/// - `auto`: rebuild on every file change under the data dir.
/// - `manual`: rebuild only on an explicit user trigger (typing `rs`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Auto,
    Manual,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Auto => "auto",
            Mode::Manual => "manual",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Mode::Auto),
            "manual" => Ok(Mode::Manual),
            other => Err(format!("unknown mode '{other}'")),
        }
    }
}

/// Image variant; selects the `-light` / `-extra` / `-full` tag suffix.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ImageVersion {
    /// Minimal TeX Live install.
    Light,
    /// Light plus commonly needed extra packages.
    Extra,
    /// Complete TeX Live install.
    Full,
}

impl ImageVersion {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageVersion::Light => "light",
            ImageVersion::Extra => "extra",
            ImageVersion::Full => "full",
        }
    }

    /// Full image tag, e.g. `v1.2.0-light`.
    pub fn image_tag(self) -> String {
        format!("{IMAGE_VERSION_BASE}-{}", self.as_str())
    }
}

impl fmt::Display for ImageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ImageVersion::Light),
            "extra" => Ok(ImageVersion::Extra),
            "full" => Ok(ImageVersion::Full),
            other => Err(format!("unknown image version '{other}'")),
        }
    }
}

/// The fully resolved configuration.
///
/// Built once per invocation by [`crate::config::resolve`], validated on
/// construction, and treated as immutable afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host directory containing the LaTeX sources; absolute and
    /// canonicalized, guaranteed to be an existing directory.
    pub workdir: PathBuf,

    /// Build command executed inside the container on each trigger.
    pub cmd: String,

    /// Watcher mode.
    pub mode: Mode,

    /// Print the composed command without executing it.
    pub dry_run: bool,

    /// Image variant to launch.
    pub im_version: ImageVersion,

    /// Keep the build command's stdout visible instead of discarding it.
    pub verbose: bool,

    /// Path that was consulted for file-sourced settings.
    pub config_file: PathBuf,
}
