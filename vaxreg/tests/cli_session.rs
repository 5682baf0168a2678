//! CLI tests for the `vaxreg` binary.
//!
//! Spawns the binary with scripted stdin and checks stdout and exit codes
//! for both message sets and for config-driven startup.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use vaxreg::exit_codes;
use vaxreg::io::config::{RegistryConfig, load_config, write_config};
use vaxreg::messages::Locale;

fn run_vaxreg(dir: &Path, args: &[&str], input: impl AsRef<[u8]>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_vaxreg"))
        .current_dir(dir)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn vaxreg");
    // The binary may exit before reading everything (e.g. on a bad config).
    let _ = child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input.as_ref());
    child.wait_with_output().expect("vaxreg output")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn single_batch_walkthrough() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = run_vaxreg(
        temp.path(),
        &[],
        "c 1A2B 31-12-2025 5 VacX\na Ana VacX\na Ana VacX\nl\nr 1A2B\nq\n",
    );

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        stdout_lines(&output),
        vec![
            "1A2B",
            "1A2B",
            "already vaccinated",
            "VacX 1A2B 31-12-2025 4 1",
            "1",
        ]
    );
}

#[test]
fn portuguese_argument_switches_messages() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = run_vaxreg(
        temp.path(),
        &["pt"],
        "a Ana VacX\nu Rui\nl Flu\nt 32-01-2025\nq\n",
    );

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        stdout_lines(&output),
        vec![
            "esgotado",
            "Rui: utente inexistente",
            "Flu: vacina inexistente",
            "data inválida",
        ]
    );
}

#[test]
fn unknown_commands_are_ignored_and_eof_exits_cleanly() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = run_vaxreg(temp.path(), &[], "x\nhello\n\nt\n");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout_lines(&output), vec!["01-01-2025"]);
}

#[test]
fn config_sets_start_date_locale_and_limits() {
    let temp = tempfile::tempdir().expect("tempdir");
    let mut cfg = RegistryConfig {
        locale: Locale::Pt,
        start_date: "01-06-2026".to_string(),
        ..RegistryConfig::default()
    };
    cfg.limits.max_batches = 1;
    write_config(&temp.path().join("vaxreg.toml"), &cfg).expect("write config");

    let output = run_vaxreg(
        temp.path(),
        &[],
        "t\nc AA 01-06-2026 1 Flu\nc BB 01-06-2026 1 Flu\nq\n",
    );

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        stdout_lines(&output),
        vec!["01-06-2026", "AA", "demasiadas vacinas"]
    );
}

#[test]
fn english_argument_overrides_configured_locale() {
    let temp = tempfile::tempdir().expect("tempdir");
    let cfg = RegistryConfig {
        locale: Locale::Pt,
        ..RegistryConfig::default()
    };
    let path = temp.path().join("custom.toml");
    write_config(&path, &cfg).expect("write config");

    let output = run_vaxreg(
        temp.path(),
        &["en", "--config", path.to_str().expect("utf8 path")],
        "a Ana Flu\n",
    );

    assert_eq!(stdout_lines(&output), vec!["no stock"]);
}

#[test]
fn invalid_config_exits_with_invalid_code() {
    let temp = tempfile::tempdir().expect("tempdir");
    std::fs::write(temp.path().join("vaxreg.toml"), "start_date = \"nope\"\n")
        .expect("write config");

    let output = run_vaxreg(temp.path(), &[], "q\n");

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(output.stdout.is_empty());
}

#[test]
fn write_default_config_creates_file_and_skips_session() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = run_vaxreg(temp.path(), &["--write-default-config"], "t\n");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(output.stdout.is_empty());
    let cfg = load_config(&temp.path().join("vaxreg.toml")).expect("load written config");
    assert_eq!(cfg, RegistryConfig::default());
}

#[test]
fn non_utf8_input_line_does_not_stop_the_session() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = run_vaxreg(temp.path(), &[], &b"a Jo\xe3o VacX\nt\nq\n"[..]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout_lines(&output), vec!["no stock", "01-01-2025"]);
}
