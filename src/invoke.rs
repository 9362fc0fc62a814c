// src/invoke.rs

//! Pure builders for the two nested argument vectors: the nodemon invocation
//! run inside the container, and the docker invocation wrapping it.
//!
//! Neither function touches the file system or the environment; both are
//! deterministic over their inputs so they can be printed, tested and
//! composed freely before anything is executed.

use std::path::Path;

use crate::config::model::{ImageVersion, Mode, CONTAINER_NAME, DATA_DIR, IMAGE_NAME};

/// Build the nodemon invocation used as the container command.
///
/// Selects the mode-specific nodemon profile baked into the image, watches
/// the data dir, and reruns the build command on each trigger. Unless
/// `verbose` is set, the build command's stdout goes to `/dev/null` so
/// nodemon's own prompt stays readable.
pub fn nodemon_invocation(mode: Mode, cmd: &str, verbose: bool) -> Vec<String> {
    let exec = if verbose {
        format!("cd {DATA_DIR} && {cmd}")
    } else {
        format!("cd {DATA_DIR} && {cmd} > /dev/null")
    };

    vec![
        "nodemon".to_string(),
        "--config".to_string(),
        format!("/nodemon_config/{mode}.json"),
        "--watch".to_string(),
        format!("{DATA_DIR}/"),
        "--exec".to_string(),
        exec,
    ]
}

/// Build the docker invocation embedding `nodemon` as its trailing tokens.
///
/// The container is interactive, auto-removed and runs under a fixed name.
/// `uid` is the invoking user's numeric identity, injected as
/// `LOCAL_USER_ID` so files created inside the container end up owned by the
/// host user.
pub fn docker_invocation(
    workdir: &Path,
    im_version: ImageVersion,
    uid: u32,
    nodemon: &[String],
) -> Vec<String> {
    let mut argv = vec![
        "docker".to_string(),
        "run".to_string(),
        "-it".to_string(),
        "--rm".to_string(),
        "--name".to_string(),
        CONTAINER_NAME.to_string(),
        "-e".to_string(),
        format!("LOCAL_USER_ID={uid}"),
        "-v".to_string(),
        format!("{}:{DATA_DIR}", workdir.display()),
        format!("{IMAGE_NAME}:{}", im_version.image_tag()),
    ];
    argv.extend_from_slice(nodemon);
    argv
}
