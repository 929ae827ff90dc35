//! Integration tests for CLI behavior
//!
//! These tests verify the external behavior of the lintconv binary.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to create a command for the lintconv CLI
fn lintconv_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_lintconv"))
}

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

mod help_command {
    use super::*;

    #[test]
    fn shows_help_with_flag() {
        lintconv_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage:"))
            .stdout(predicate::str::contains("--efm"));
    }

    #[test]
    fn shows_version_with_flag() {
        lintconv_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn lists_supported_formats() {
        lintconv_cmd()
            .arg("--list")
            .assert()
            .success()
            .stdout(predicate::str::contains("checkstyle"))
            .stdout(predicate::str::contains("rdjsonl"))
            .stdout(predicate::str::contains("golint"));
    }
}

mod convert_command {
    use super::*;

    #[test]
    fn converts_stdin_with_catalog_format() {
        lintconv_cmd()
            .args(["--format", "golint"])
            .write_stdin("main.go:10:2: exported function Foo should have comment\n")
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""path":"main.go""#))
            .stdout(predicate::str::contains(r#""line":10"#));
    }

    #[test]
    fn converts_file_with_explicit_rules() {
        let output = lintconv_cmd()
            .args(["--efm", "%f:%l:%c: %m"])
            .arg(fixtures_dir().join("golint.txt"))
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let stdout = String::from_utf8(output).unwrap();
        assert_eq!(stdout.lines().count(), 3);
    }

    #[test]
    fn converts_checkstyle_to_json() {
        let output = lintconv_cmd()
            .args(["--format", "checkstyle", "--output", "json"])
            .arg(fixtures_dir().join("checkstyle.xml"))
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        let results = value.as_array().unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0]["diagnostic"]["location"]["path"], "src/app.js");
        assert_eq!(results[2]["diagnostic"]["location"]["path"], "src/util.js");
        assert_eq!(
            results[0]["lines"][0],
            "src/app.js:3:7: error: 'x' is not defined. (eslint.rules.no-undef)"
        );
    }

    #[test]
    fn passes_rdjsonl_through_in_text_form() {
        lintconv_cmd()
            .args(["-f", "rdjsonl", "-o", "text"])
            .arg(fixtures_dir().join("sample.rdjsonl"))
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "src/lib.rs:4:9: warning: unused variable 'x'",
            ))
            .stdout(predicate::str::contains(
                "src/main.rs:12:5: error: mismatched types",
            ))
            .stdout(predicate::str::contains("Found 2 diagnostics in 2 files"));
    }

    #[test]
    fn reads_stdin_for_dash() {
        lintconv_cmd()
            .args(["-f", "golint", "-o", "text", "-"])
            .write_stdin("a.go:1:1: first\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("a.go:1:1: first"));
    }

    #[test]
    fn no_matches_is_success_with_empty_output() {
        lintconv_cmd()
            .args(["--format", "golint"])
            .write_stdin("ok\tgithub.com/foo/bar\t0.012s\n")
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }
}

mod failures {
    use super::*;

    #[test]
    fn rejects_format_and_rules_together() {
        lintconv_cmd()
            .args(["--format", "golint", "--efm", "%f:%l: %m"])
            .write_stdin("")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("both format name and errorformat"));
    }

    #[test]
    fn rejects_unknown_format() {
        lintconv_cmd()
            .args(["--format", "no-such-tool"])
            .write_stdin("")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("no-such-tool"));
    }

    #[test]
    fn rejects_invalid_rule() {
        lintconv_cmd()
            .args(["--efm", "%f:%l:%Y"])
            .write_stdin("")
            .assert()
            .failure()
            .code(1);
    }

    #[test]
    fn fails_on_malformed_rdjsonl() {
        lintconv_cmd()
            .args(["--format", "rdjsonl"])
            .arg(fixtures_dir().join("broken.rdjsonl"))
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("line 2"));
    }

    #[test]
    fn fails_on_missing_file() {
        lintconv_cmd()
            .args(["--format", "golint", "does-not-exist.txt"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("does-not-exist.txt"));
    }

    #[test]
    fn fails_without_format_selection() {
        let dir = tempfile::tempdir().unwrap();

        lintconv_cmd()
            .current_dir(dir.path())
            .write_stdin("a.go:1:1: x\n")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("No input format selected"));
    }
}

mod config_file {
    use super::*;
    use std::fs;

    #[test]
    fn discovers_config_in_current_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(".lintconv.jsonc"),
            "{\n  // go tooling\n  \"format\": \"golint\",\n}\n",
        )
        .unwrap();

        lintconv_cmd()
            .current_dir(dir.path())
            .args(["-o", "text"])
            .write_stdin("main.go:3:4: from config\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("main.go:3:4: from config"));
    }

    #[test]
    fn explicit_config_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("custom.json");
        fs::write(&config, r#"{ "errorformat": ["%f|%l| %m"] }"#).unwrap();

        lintconv_cmd()
            .arg("--config")
            .arg(&config)
            .args(["-o", "text"])
            .write_stdin("x.py|7| bad\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("x.py:7:0: bad"));
    }

    #[test]
    fn flags_take_precedence_over_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(".lintconv.json"),
            r#"{ "format": "checkstyle" }"#,
        )
        .unwrap();

        lintconv_cmd()
            .current_dir(dir.path())
            .args(["--efm", "%f:%l:%c: %m", "-o", "text"])
            .write_stdin("main.go:1:2: flag wins\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("main.go:1:2: flag wins"));
    }

    #[test]
    fn rejects_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(".lintconv.json"),
            r#"{ "formats": "golint" }"#,
        )
        .unwrap();

        lintconv_cmd()
            .current_dir(dir.path())
            .write_stdin("")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Config validation failed"));
    }
}
