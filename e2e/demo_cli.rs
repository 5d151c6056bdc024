// e2e/demo_cli.rs — black-box tests of the `paramkit-demo` binary.
//
// Runs the demo with std::process::Command and checks exit codes, the
// printed values and the diagnostics. Stdout is a pipe, so colors are off.

use std::path::PathBuf;
use std::process::{Command, Output};

/// Locate the `paramkit-demo` binary produced by Cargo.
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

fn demo(args: &[&str]) -> Output {
    Command::new(demo_bin())
        .args(args)
        .env_remove("PARAMKIT_COLOR")
        .env_remove("PARAMKIT_DISPLAY_LEVEL")
        .output()
        .expect("failed to run paramkit-demo")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

// ── 1. Successful runs ───────────────────────────────────────────────────────

#[test]
fn test_demo_fills_the_struct() {
    let out = demo(&[
        "/pdec", "10", "/phex", "1f", "/pbool", "/pastr", "hello", "/pwstr", "wide", "/pmode",
        "safe", "/pids", "3,0x1",
    ]);
    assert!(out.status.success(), "demo should exit 0");
    let text = stdout(&out);
    assert!(text.contains("\nPrinting the filled params:\n"));
    assert!(text.contains("/pdec: 10\n"));
    assert!(text.contains("/phex: 0x1f\n"));
    assert!(text.contains("myDec:  10 = 0xa\n"));
    assert!(text.contains("myHex:  0x1f = 31\n"));
    assert!(text.contains("myBool: true\n"));
    assert!(text.contains("myMode: 1\n"));
    assert!(text.contains("myIds:  [1, 3]\n"));
    assert!(text.contains("myABuf:  hello\n"));
    assert!(text.contains("myWBuf:  wide\n"));
    assert!(text.ends_with("[+] All the required parameters filled!\n"));
}

#[test]
fn test_demo_accepts_dash_switches() {
    let out = demo(&["-pdec", "1", "--phex", "0x2"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("myHex:  0x2 = 2\n"));
    assert!(text.contains("myMode: (undefined)\n"));
}

#[test]
fn test_demo_long_string_is_truncated() {
    let long = "x".repeat(80);
    let out = demo(&["/pdec", "1", "/phex", "1", "/pastr", &long]);
    assert!(out.status.success());
    let expected = format!("myABuf:  {}\n", "x".repeat(49));
    assert!(stdout(&out).contains(&expected));
}

#[test]
fn test_demo_redundant_argument_is_a_warning() {
    let out = demo(&["extra", "/pdec", "1", "/phex", "1"]);
    assert!(out.status.success());
    assert!(stdout(&out).starts_with("Redundant argument: extra\n"));
}

// ── 2. Usage errors ──────────────────────────────────────────────────────────

#[test]
fn test_demo_missing_required_exits_1() {
    let out = demo(&["/pdec", "1"]);
    assert_eq!(out.status.code(), Some(1));
    let text = stdout(&out);
    assert!(text.starts_with("Missing required parameters:\n"));
    assert!(text.contains("/phex <integer: hex>"));
    assert!(!text.contains("Printing the filled params"));
}

#[test]
fn test_demo_unknown_switch_exits_1() {
    let out = demo(&["/phx", "1"]);
    assert_eq!(out.status.code(), Some(1));
    let text = stdout(&out);
    assert!(text.starts_with("Invalid parameter: phx\nSimilar parameters:\n"));
    assert!(text.contains("/phex"));
}

#[test]
fn test_demo_bad_value_exits_1() {
    let out = demo(&["/pdec", "0x10", "/phex", "1"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).starts_with("Parsing the parameter failed. Correct options:\n/pdec"));
}

#[test]
fn test_demo_value_too_wide_for_struct() {
    let out = demo(&["/pdec", "5000000000", "/phex", "1"]);
    assert_eq!(out.status.code(), Some(1));
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("/pdec = 0x12a05f200 does not fit in 32 bits"), "stderr: {err}");
}

// ── 3. Display level ─────────────────────────────────────────────────────────

#[test]
fn test_demo_silent_level_hides_diagnostics() {
    let out = Command::new(demo_bin())
        .args(["/nope"])
        .env_remove("PARAMKIT_COLOR")
        .env("PARAMKIT_DISPLAY_LEVEL", "0")
        .output()
        .expect("failed to run paramkit-demo");
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}

#[test]
fn test_demo_verbose_level_traces_values() {
    let out = Command::new(demo_bin())
        .args(["/pdec", "7", "/phex", "a"])
        .env_remove("PARAMKIT_COLOR")
        .env("PARAMKIT_DISPLAY_LEVEL", "4")
        .output()
        .expect("failed to run paramkit-demo");
    assert!(out.status.success());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("/pdec : 7\n"));
    assert!(err.contains("/phex : 0xa\n"));
}
