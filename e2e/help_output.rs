// e2e/help_output.rs — help and version output of the `paramkit-demo` binary.

use std::path::PathBuf;
use std::process::Command;

fn demo_bin() -> PathBuf {
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_paramkit-demo") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop();
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("paramkit-demo");
    p
}

/// Runs the demo and returns (exit code, stdout).
fn demo(args: &[&str]) -> (Option<i32>, String) {
    let out = Command::new(demo_bin())
        .args(args)
        .env_remove("PARAMKIT_COLOR")
        .env_remove("PARAMKIT_DISPLAY_LEVEL")
        .output()
        .expect("failed to run paramkit-demo");
    (out.status.code(), String::from_utf8_lossy(&out.stdout).into_owned())
}

#[test]
fn test_short_help_lists_groups() {
    let (code, text) = demo(&["/?"]);
    assert_eq!(code, Some(0));
    let banner = format!("paramkit demo v{}\n---\n", env!("CARGO_PKG_VERSION"));
    assert!(text.starts_with(&banner));
    assert!(text.contains("\nRequired:\n"));
    assert!(text.contains("\n---numbers---\n/pdec <integer: dec>\n\t : Sample decimal Integer param\n"));
    assert!(text.contains("\n---strings---\n/pastr <string>\n"));
    assert!(text.contains("/version\n\t : Print version info.\n"));
    assert!(text.ends_with("---\n"));
}

#[test]
fn test_long_help_shows_enum_options() {
    let (code, text) = demo(&["-help"]);
    assert_eq!(code, Some(0));
    assert!(text.contains("*mode_id:\n\t0 (fast) - skip the consistency checks\n"));
    assert!(text.contains("\t   Example: /pastr ?\n"));
}

#[test]
fn test_help_keyword() {
    let (code, text) = demo(&["/help", "wide"]);
    assert_eq!(code, Some(0));
    assert!(text.contains("/pwstr <wstring>"));
    assert!(!text.contains("/pdec"));
}

#[test]
fn test_help_about_version() {
    let (code, text) = demo(&["/help", "version"]);
    assert_eq!(code, Some(0));
    assert_eq!(text, "/version\n\t : Print version info.\n");
}

#[test]
fn test_version() {
    let (code, text) = demo(&["/version"]);
    assert_eq!(code, Some(0));
    assert_eq!(text, format!("{}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_param_details() {
    let (code, text) = demo(&["/pmode", "?"]);
    assert_eq!(code, Some(0));
    assert!(text.starts_with("/pmode <*mode_id>\n\t : Sample enum param\nSelects how the demo runs.\n*mode_id:\n"));
}

#[test]
fn test_no_arguments_reports_missing() {
    let (code, text) = demo(&[]);
    assert_eq!(code, Some(1));
    assert!(text.contains("/pdec"));
    assert!(text.contains("/phex"));
}
