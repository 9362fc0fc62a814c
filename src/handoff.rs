// src/handoff.rs

//! Final hand-off to the container runtime.

use anyhow::{anyhow, Result};
use tracing::debug;

/// Hand the process over to `argv`.
///
/// On unix this replaces the current process image (`execvp` semantics): on
/// success it never returns, and no code after the call site runs. On other
/// platforms the command is spawned and waited on, and the process exits
/// with the child's status, which also never returns. An `Err` therefore
/// always means the hand-off itself failed (e.g. the runtime binary is not
/// on `PATH`).
pub fn handoff(argv: &[String]) -> Result<()> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| anyhow!("empty invocation"))?;
    debug!(%program, "handing off to container runtime");
    exec(program, args)
}

#[cfg(unix)]
fn exec(program: &str, args: &[String]) -> Result<()> {
    use std::os::unix::process::CommandExt;

    // exec() only ever returns on failure.
    let err = std::process::Command::new(program).args(args).exec();
    Err(anyhow::Error::new(err).context(format!("executing {program}")))
}

#[cfg(not(unix))]
fn exec(program: &str, args: &[String]) -> Result<()> {
    use anyhow::Context;

    let status = std::process::Command::new(program)
        .args(args)
        .status()
        .with_context(|| format!("executing {program}"))?;
    std::process::exit(status.code().unwrap_or(1));
}
