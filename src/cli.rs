// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! Value flags deliberately have no parser-baked defaults: the resolver must
//! be able to tell "user passed this flag" from "user left it out", otherwise
//! the CLI > file > default precedence cannot work. Defaults live in
//! `config::resolve`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::model::{ImageVersion, Mode, IMAGE_VERSION_BASE};

/// Command-line arguments for `latex_offline`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "latex_offline",
    version = IMAGE_VERSION_BASE,
    about = "Offline LaTeX compiler with auto reload",
    long_about = None
)]
pub struct CliArgs {
    /// Directory containing the LaTeX source files.
    ///
    /// Default: the current working directory.
    #[arg(short = 'w', long, value_name = "PATH")]
    pub workdir: Option<PathBuf>,

    /// Command run inside the container to compile the document.
    #[arg(short = 'c', long, value_name = "CMD")]
    pub cmd: Option<String>,

    /// Watcher mode. auto: compile on file change, manual: compile by typing
    /// `rs` then enter.
    #[arg(short = 'm', long, value_enum, value_name = "MODE")]
    pub mode: Option<Mode>,

    /// Print the composed command without executing it.
    #[arg(short = 'd', long)]
    pub dry_run: bool,

    /// LaTeX Offline image version to launch.
    #[arg(short = 'v', long, value_enum, value_name = "VERSION")]
    pub im_version: Option<ImageVersion>,

    /// Path to the config file (TOML).
    ///
    /// Default: `latex_offline.toml` in the working directory.
    #[arg(short = 'f', long = "config_file", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// Keep the build command's output visible instead of discarding it.
    #[arg(long)]
    pub verbose: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `LATEX_OFFLINE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
