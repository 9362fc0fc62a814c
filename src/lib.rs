// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod handoff;
pub mod invoke;
pub mod logging;

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::CliArgs;
use crate::config::model::IMAGE_VERSION_BASE;
use crate::config::{load_section, resolve, resolve_config_file_path, Config};
use crate::invoke::{docker_invocation, nodemon_invocation};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config-file path resolution (before the file is read)
/// - file config loading
/// - CLI > file > default resolution + validation
/// - the two command builders
/// - printing, and the final hand-off unless `--dry-run`
pub fn run(args: CliArgs) -> Result<()> {
    // Ambient inputs, captured once and never re-read.
    let cwd = std::env::current_dir().context("determining current directory")?;
    let uid = local_user_id();

    let config_path = resolve_config_file_path(&args, &cwd);
    let file = load_section(&config_path);
    let cfg = resolve(&args, &file, &cwd, config_path)?;
    debug!(?cfg, "resolved configuration");

    let nodemon = nodemon_invocation(cfg.mode, &cfg.cmd, cfg.verbose);
    let docker = docker_invocation(&cfg.workdir, cfg.im_version, uid, &nodemon);

    print_config(&cfg);
    println!("{}", docker.join(" "));

    if cfg.dry_run {
        debug!("dry-run: skipping hand-off");
        return Ok(());
    }

    // On success this never returns; the process becomes the container
    // runtime.
    handoff::handoff(&docker)
}

/// Numeric identity of the invoking user, passed into the container so
/// in-container builds create files owned by the host user.
#[cfg(unix)]
fn local_user_id() -> u32 {
    nix::unistd::getuid().as_raw()
}

#[cfg(not(unix))]
fn local_user_id() -> u32 {
    0
}

/// Human-readable dump of the resolved configuration, printed before the
/// composed command for transparency.
fn print_config(cfg: &Config) {
    println!("latex_offline {IMAGE_VERSION_BASE}");
    println!("  workdir     = {}", cfg.workdir.display());
    println!("  cmd         = {}", cfg.cmd);
    println!("  mode        = {}", cfg.mode);
    println!("  im_version  = {}", cfg.im_version);
    println!("  dry_run     = {}", cfg.dry_run);
    println!("  verbose     = {}", cfg.verbose);
    println!("  config_file = {}", cfg.config_file.display());
    println!();
}
