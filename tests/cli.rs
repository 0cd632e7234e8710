//! Integration tests for the constsum CLI.

#![allow(deprecated)]

use assert_cmd::Command;
use constsum::toolchain::CCompiler;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn constsum() -> Command {
    let mut cmd = Command::cargo_bin("constsum").unwrap();
    cmd.env_remove("CONSTSUM_TERMS").env_remove("RUST_LOG");
    cmd
}

fn have_cc() -> bool {
    let available = CCompiler::from_env().is_available();
    if !available {
        eprintln!("no C compiler available, skipping");
    }
    available
}

/// With no arguments the 10000-term program goes to stdout.
#[test]
fn test_default_program() {
    let out = constsum().assert().success().get_output().stdout.clone();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("\n#include <stdio.h>\nint main() {\n"));
    assert!(text.contains("  for(int i = 0; i < 10000; i++){\n"));
    assert!(text.contains(r#"printf("%3d: 1/1*2/2*3/3* ... 10000/10000 = %d\n","#));
    assert!(text.ends_with("10000/10000);\n  }\n  return 0;\n}\n"));
    assert_eq!(text.matches("*\n").count(), 9999);

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5 + 10000 + 3);
    assert_eq!(lines[5], "    i, 1/1*");
    for k in 1..9999 {
        assert_eq!(lines[5 + k], format!("{}/{}*", k + 1, k + 1));
    }
    assert_eq!(lines[5 + 9999], "10000/10000);");
    assert_eq!(lines[5 + 10000..], ["  }", "  return 0;", "}"]);
}

/// Three terms render exactly.
#[test]
fn test_three_terms() {
    constsum().args(["-n", "3"]).assert().success().stdout(
        "\n#include <stdio.h>\nint main() {\n  for(int i = 0; i < 3; i++){\n    \
         printf(\"%3d: 1/1*2/2*3/3* ... 3/3 = %d\\n\",\n    i, 1/1*\n2/2*\n3/3);\n  }\n  \
         return 0;\n}\n",
    );
}

/// The term count can come from the environment.
#[test]
fn test_terms_from_env() {
    constsum()
        .env("CONSTSUM_TERMS", "5")
        .assert()
        .success()
        .stdout(predicate::str::contains("... 5/5 = %d"));
}

/// Two runs produce identical bytes.
#[test]
fn test_deterministic() {
    let a = constsum().args(["-n", "200"]).output().unwrap().stdout;
    let b = constsum().args(["-n", "200"]).output().unwrap().stdout;
    assert_eq!(a, b);
}

/// Zero terms is rejected.
#[test]
fn test_zero_terms() {
    constsum()
        .args(["-n", "0"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("at least one term"));
}

/// Negative counts do not parse.
#[test]
fn test_negative_terms() {
    constsum().args(["--terms=-4"]).assert().failure();
}

/// Logging never leaks into the generated program.
#[test]
fn test_logs_go_to_stderr() {
    constsum()
        .args(["-n", "2", "-vv", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("\n#include"))
        .stdout(predicate::str::contains("INFO").not())
        .stderr(predicate::str::contains("product evaluates to 1"));
}

/// `-o` writes the source to a file.
#[test]
fn test_output_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.c");

    constsum()
        .args(["-n", "4", "-o"])
        .arg(&path)
        .assert()
        .success()
        .stdout("");

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("i, 1/1*\n2/2*\n3/3*\n4/4);"));
    assert!(written.ends_with("}\n"));
}

/// Unknown targets point at `-tlist`.
#[test]
fn test_unknown_target() {
    constsum()
        .arg("-tnope")
        .assert()
        .failure()
        .stderr(predicate::str::contains("-tlist"));
}

/// `-tlist` lists targets and exits.
#[test]
fn test_list_targets() {
    constsum()
        .arg("-tlist")
        .assert()
        .failure()
        .stderr(predicate::str::contains("-trun"));
}

/// The generated program compiles, and every row it prints is 1.
#[test]
fn test_run_target() {
    if !have_cc() {
        return;
    }

    constsum()
        .args(["-n", "50", "-r", "120", "-trun", "-O1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("120 rows checked"));
}

/// The default program compiles and prints rows 0 through 9999, each equal to 1.
#[test]
fn test_run_default_program() {
    if !have_cc() {
        return;
    }

    constsum()
        .arg("-trun")
        .assert()
        .success()
        .stdout("10000 rows checked, every product is 1\n");
}

/// `-trun -o` keeps the checked executable.
#[test]
fn test_run_target_keeps_executable() {
    if !have_cc() {
        return;
    }

    let dir = TempDir::new().unwrap();
    let exe = dir.path().join("kept");

    constsum()
        .args(["-n", "3", "-trun", "-o"])
        .arg(&exe)
        .assert()
        .success();

    assert!(exe.exists());
    let out = std::process::Command::new(&exe).output().unwrap();
    assert_eq!(String::from_utf8(out.stdout).unwrap().lines().count(), 3);
}

/// `-texe` leaves an executable behind that prints the rows.
#[test]
fn test_exe_target() {
    if !have_cc() {
        return;
    }

    let dir = TempDir::new().unwrap();
    let exe = dir.path().join("constsum-out");

    constsum()
        .args(["-n", "10", "-texe", "-o"])
        .arg(&exe)
        .assert()
        .success();

    let out = std::process::Command::new(&exe).output().unwrap();
    let text = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "  0: 1/1*2/2*3/3* ... 10/10 = 1");
    assert_eq!(lines[9], "  9: 1/1*2/2*3/3* ... 10/10 = 1");
}

/// A broken compiler is a fatal error, not a panic.
#[test]
fn test_missing_compiler() {
    constsum()
        .env("CC", "constsum-no-such-compiler")
        .args(["-n", "2", "-trun"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("constsum fatal error"));
}
