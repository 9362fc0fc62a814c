// src/config/resolve.rs

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::cli::CliArgs;
use crate::config::loader::FileSection;
use crate::config::model::{Config, ImageVersion, Mode, DEFAULT_CMD, DEFAULT_CONFIG_FILE};
use crate::errors::ConfigError;

/// One layer of settings, carrying only the keys that layer explicitly sets.
///
/// The set of fields is the closed list of recognized settings: merging
/// happens field by field, so nothing a config file invents can leak into
/// the resolved [`Config`].
#[derive(Debug, Clone, Default)]
pub struct PartialSettings {
    pub workdir: Option<PathBuf>,
    pub cmd: Option<String>,
    pub mode: Option<String>,
    pub dry_run: Option<bool>,
    pub im_version: Option<String>,
    pub verbose: Option<bool>,
}

impl PartialSettings {
    /// Settings the user actually passed on the command line.
    ///
    /// Presence-only flags (`--dry-run`, `--verbose`) map absence to `None`
    /// rather than `false`: an unset flag must not shadow a file value.
    pub fn from_cli(args: &CliArgs) -> Self {
        Self {
            workdir: args.workdir.clone(),
            cmd: args.cmd.clone(),
            mode: args.mode.map(|m| m.as_str().to_string()),
            dry_run: args.dry_run.then_some(true),
            im_version: args.im_version.map(|v| v.as_str().to_string()),
            verbose: args.verbose.then_some(true),
        }
    }

    /// Settings explicitly present in the config file.
    pub fn from_file(section: &FileSection) -> Self {
        Self {
            workdir: section.workdir.clone(),
            cmd: section.cmd.clone(),
            mode: section.mode.clone(),
            dry_run: section.dry_run,
            im_version: section.im_version.clone(),
            verbose: section.verbose,
        }
    }
}

/// Built-in defaults, complete by construction.
#[derive(Debug, Clone)]
struct Defaults {
    workdir: PathBuf,
    cmd: String,
    mode: Mode,
    dry_run: bool,
    im_version: ImageVersion,
    verbose: bool,
}

impl Defaults {
    fn for_cwd(cwd: &Path) -> Self {
        Self {
            workdir: cwd.to_path_buf(),
            cmd: DEFAULT_CMD.to_string(),
            mode: Mode::Auto,
            dry_run: false,
            im_version: ImageVersion::Light,
            verbose: false,
        }
    }
}

/// Where to look for the config file.
///
/// Resolved *before* the file is loaded, from CLI-explicit values and
/// defaults only: the file cannot determine its own location. The default
/// lives next to the LaTeX sources, so an explicit `--workdir` moves the
/// default lookup there instead of the ambient current directory.
pub fn resolve_config_file_path(args: &CliArgs, cwd: &Path) -> PathBuf {
    if let Some(path) = &args.config_file {
        return path.clone();
    }
    let base = args.workdir.as_deref().unwrap_or(cwd);
    base.join(DEFAULT_CONFIG_FILE)
}

/// Merge CLI, file and default settings into one validated [`Config`].
///
/// Precedence per setting, highest first: CLI-explicit, then file, then
/// built-in default. `cwd` is the ambient current directory captured at
/// startup; `config_file` is the already-resolved file location and is
/// recorded on the `Config` as-is.
pub fn resolve(
    args: &CliArgs,
    file: &FileSection,
    cwd: &Path,
    config_file: PathBuf,
) -> Result<Config, ConfigError> {
    let cli = PartialSettings::from_cli(args);
    let file = PartialSettings::from_file(file);
    let defaults = Defaults::for_cwd(cwd);

    let mode = match cli.mode.or(file.mode) {
        Some(s) => Mode::from_str(&s).map_err(|_| ConfigError::InvalidMode(s))?,
        None => defaults.mode,
    };
    let im_version = match cli.im_version.or(file.im_version) {
        Some(s) => {
            ImageVersion::from_str(&s).map_err(|_| ConfigError::InvalidImageVersion(s))?
        }
        None => defaults.im_version,
    };
    let workdir = canonical_dir(
        &cli.workdir.or(file.workdir).unwrap_or(defaults.workdir),
    )?;

    Ok(Config {
        workdir,
        cmd: cli.cmd.or(file.cmd).unwrap_or(defaults.cmd),
        mode,
        dry_run: cli.dry_run.or(file.dry_run).unwrap_or(defaults.dry_run),
        im_version,
        verbose: cli.verbose.or(file.verbose).unwrap_or(defaults.verbose),
        config_file,
    })
}

/// Canonicalize `path` and require it to be an existing directory.
fn canonical_dir(path: &Path) -> Result<PathBuf, ConfigError> {
    match fs::canonicalize(path) {
        Ok(abs) if abs.is_dir() => Ok(abs),
        _ => Err(ConfigError::InvalidWorkdir(path.to_path_buf())),
    }
}
