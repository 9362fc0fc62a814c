use std::error::Error;
use std::fs;

use clap::Parser;
use tempfile::tempdir;

use latex_offline::cli::CliArgs;
use latex_offline::config::{
    load_section, resolve, resolve_config_file_path, FileSection, ImageVersion, Mode,
};
use latex_offline::errors::ConfigError;

type TestResult = Result<(), Box<dyn Error>>;

fn args(argv: &[&str]) -> CliArgs {
    let full: Vec<&str> = std::iter::once("latex_offline")
        .chain(argv.iter().copied())
        .collect();
    CliArgs::try_parse_from(full).expect("CLI args should parse")
}

#[test]
fn defaults_apply_when_nothing_is_set() -> TestResult {
    let cwd = tempdir()?;
    let cli = args(&[]);
    let config_path = resolve_config_file_path(&cli, cwd.path());

    let cfg = resolve(&cli, &FileSection::default(), cwd.path(), config_path)?;

    assert_eq!(cfg.workdir, fs::canonicalize(cwd.path())?);
    assert_eq!(cfg.cmd, "make");
    assert_eq!(cfg.mode, Mode::Auto);
    assert_eq!(cfg.im_version, ImageVersion::Light);
    assert!(!cfg.dry_run);
    assert!(!cfg.verbose);

    Ok(())
}

#[test]
fn file_values_override_defaults() -> TestResult {
    let cwd = tempdir()?;
    let config_path = cwd.path().join("latex_offline.toml");
    fs::write(
        &config_path,
        r#"
[latex_offline]
cmd = "latexmk -pdf"
mode = "manual"
im_version = "full"
verbose = true
"#,
    )?;

    let cli = args(&[]);
    let file = load_section(&config_path);
    let cfg = resolve(&cli, &file, cwd.path(), config_path)?;

    assert_eq!(cfg.cmd, "latexmk -pdf");
    assert_eq!(cfg.mode, Mode::Manual);
    assert_eq!(cfg.im_version, ImageVersion::Full);
    assert!(cfg.verbose);
    // Untouched settings still come from defaults.
    assert!(!cfg.dry_run);
    assert_eq!(cfg.workdir, fs::canonicalize(cwd.path())?);

    Ok(())
}

#[test]
fn cli_beats_file_per_setting_independently() -> TestResult {
    let cwd = tempdir()?;
    let config_path = cwd.path().join("latex_offline.toml");
    fs::write(
        &config_path,
        r#"
[latex_offline]
cmd = "file-cmd"
mode = "manual"
im_version = "full"
"#,
    )?;

    // Override cmd and mode on the CLI; leave im_version to the file.
    let cli = args(&["--cmd", "cli-cmd", "--mode", "auto"]);
    let file = load_section(&config_path);
    let cfg = resolve(&cli, &file, cwd.path(), config_path)?;

    assert_eq!(cfg.cmd, "cli-cmd");
    assert_eq!(cfg.mode, Mode::Auto);
    assert_eq!(cfg.im_version, ImageVersion::Full);

    Ok(())
}

#[test]
fn presence_flags_do_not_shadow_file_values_when_absent() -> TestResult {
    let cwd = tempdir()?;
    let config_path = cwd.path().join("latex_offline.toml");
    fs::write(
        &config_path,
        r#"
[latex_offline]
dry_run = true
verbose = true
"#,
    )?;

    let cli = args(&[]);
    let file = load_section(&config_path);
    let cfg = resolve(&cli, &file, cwd.path(), config_path)?;

    assert!(cfg.dry_run);
    assert!(cfg.verbose);

    Ok(())
}

#[test]
fn every_enum_value_resolves_exactly() -> TestResult {
    let cwd = tempdir()?;

    for (s, want) in [("auto", Mode::Auto), ("manual", Mode::Manual)] {
        let file = FileSection {
            mode: Some(s.to_string()),
            ..FileSection::default()
        };
        let cli = args(&[]);
        let path = resolve_config_file_path(&cli, cwd.path());
        let cfg = resolve(&cli, &file, cwd.path(), path)?;
        assert_eq!(cfg.mode, want);
    }

    for (s, want) in [
        ("light", ImageVersion::Light),
        ("extra", ImageVersion::Extra),
        ("full", ImageVersion::Full),
    ] {
        let file = FileSection {
            im_version: Some(s.to_string()),
            ..FileSection::default()
        };
        let cli = args(&[]);
        let path = resolve_config_file_path(&cli, cwd.path());
        let cfg = resolve(&cli, &file, cwd.path(), path)?;
        assert_eq!(cfg.im_version, want);
    }

    Ok(())
}

#[test]
fn out_of_set_enum_values_fail_resolution() -> TestResult {
    let cwd = tempdir()?;
    let cli = args(&[]);

    let file = FileSection {
        mode: Some("turbo".to_string()),
        ..FileSection::default()
    };
    let path = resolve_config_file_path(&cli, cwd.path());
    let err = resolve(&cli, &file, cwd.path(), path).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidMode(ref s) if s == "turbo"));

    let file = FileSection {
        im_version: Some("huge".to_string()),
        ..FileSection::default()
    };
    let path = resolve_config_file_path(&cli, cwd.path());
    let err = resolve(&cli, &file, cwd.path(), path).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidImageVersion(ref s) if s == "huge"));

    Ok(())
}

#[test]
fn workdir_pointing_at_a_file_is_rejected() -> TestResult {
    let cwd = tempdir()?;
    let not_a_dir = cwd.path().join("thesis.tex");
    fs::write(&not_a_dir, "\\documentclass{article}")?;

    let workdir_arg = not_a_dir.to_str().ok_or("tempdir path is not UTF-8")?;
    let cli = args(&["--workdir", workdir_arg]);
    let path = resolve_config_file_path(&cli, cwd.path());

    let err = resolve(&cli, &FileSection::default(), cwd.path(), path).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidWorkdir(_)));
    assert!(err.to_string().ends_with("is not a directory"));

    Ok(())
}

#[test]
fn missing_workdir_is_rejected() -> TestResult {
    let cwd = tempdir()?;
    let gone = cwd.path().join("does-not-exist");

    let cli = args(&["--workdir", gone.to_str().ok_or("non-UTF-8 path")?]);
    let path = resolve_config_file_path(&cli, cwd.path());

    let err = resolve(&cli, &FileSection::default(), cwd.path(), path).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidWorkdir(_)));

    Ok(())
}

#[test]
fn config_file_path_follows_explicit_workdir() -> TestResult {
    let cwd = tempdir()?;
    let project = tempdir()?;

    // Neither -f nor -w: default next to the ambient current directory.
    let cli = args(&[]);
    assert_eq!(
        resolve_config_file_path(&cli, cwd.path()),
        cwd.path().join("latex_offline.toml")
    );

    // -w but no -f: default moves next to the chosen workdir.
    let cli = args(&["--workdir", project.path().to_str().ok_or("non-UTF-8")?]);
    assert_eq!(
        resolve_config_file_path(&cli, cwd.path()),
        project.path().join("latex_offline.toml")
    );

    // -f always wins.
    let explicit = project.path().join("other.toml");
    let cli = args(&[
        "--workdir",
        project.path().to_str().ok_or("non-UTF-8")?,
        "--config_file",
        explicit.to_str().ok_or("non-UTF-8")?,
    ]);
    assert_eq!(resolve_config_file_path(&cli, cwd.path()), explicit);

    Ok(())
}

#[test]
fn loader_is_lenient_about_missing_and_malformed_files() -> TestResult {
    let dir = tempdir()?;

    // Missing file: empty section.
    let section = load_section(&dir.path().join("nope.toml"));
    assert!(section.cmd.is_none());
    assert!(section.mode.is_none());
    assert!(section.dry_run.is_none());

    // Unparseable TOML: empty section.
    let broken = dir.path().join("broken.toml");
    fs::write(&broken, "[latex_offline\ncmd = ")?;
    let section = load_section(&broken);
    assert!(section.cmd.is_none());

    // Boolean keys must use TOML booleans; a string is a shape error and
    // degrades to an empty section rather than a crash.
    let stringly = dir.path().join("stringly.toml");
    fs::write(&stringly, "[latex_offline]\ndry_run = \"yes\"\n")?;
    let section = load_section(&stringly);
    assert!(section.dry_run.is_none());

    Ok(())
}

#[test]
fn loader_returns_only_keys_present_in_the_file() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("latex_offline.toml");
    fs::write(
        &path,
        r#"
[latex_offline]
cmd = "make pdf"
unknown_key = "ignored"

[some_other_tool]
cmd = "irrelevant"
"#,
    )?;

    let section = load_section(&path);
    assert_eq!(section.cmd.as_deref(), Some("make pdf"));
    assert!(section.mode.is_none());
    assert!(section.im_version.is_none());
    assert!(section.dry_run.is_none());
    assert!(section.verbose.is_none());
    assert!(section.workdir.is_none());

    Ok(())
}

#[test]
fn file_without_recognized_section_yields_empty_mapping() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("latex_offline.toml");
    fs::write(&path, "[some_other_tool]\ncmd = \"irrelevant\"\n")?;

    let section = load_section(&path);
    assert!(section.cmd.is_none());
    assert!(section.workdir.is_none());

    Ok(())
}
