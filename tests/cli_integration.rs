//! Integration tests for the PassVault CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! Interactive password prompts are hard to automate, so every vault
//! flow supplies the master password via `PASSVAULT_PASSWORD` and the
//! entry password via piped stdin.

use assert_cmd::Command;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Helper: get a Command pointing at the passvault binary.
fn passvault() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("passvault").expect("binary should exist")
}

#[test]
fn help_flag_shows_usage() {
    passvault()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Client-side encrypted password manager",
        ))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("remove"))
        .stdout(predicate::str::contains("generate"));
}

#[test]
fn version_flag_shows_version() {
    passvault()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("passvault"));
}

#[test]
fn no_args_shows_help() {
    // Running with no subcommand should show an error or help.
    passvault()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn invalid_owner_rejected() {
    passvault()
        .args(["--owner", "not a valid owner!", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid"));
}

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

#[test]
fn generate_outputs_password_of_requested_length() {
    let tmp = TempDir::new().unwrap();

    let output = passvault()
        .args(["generate", "--length", "12"])
        .current_dir(tmp.path())
        .output()
        .expect("run generate");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    let password = stdout.lines().next().expect("password line");
    assert_eq!(password.chars().count(), 12);
}

#[test]
fn generate_prints_strength_line() {
    let tmp = TempDir::new().unwrap();

    passvault()
        .args(["generate", "--length", "20"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Strength:"));
}

#[test]
fn generate_rejects_out_of_bounds_length() {
    let tmp = TempDir::new().unwrap();

    passvault()
        .args(["generate", "--length", "4"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid generator options"));
}

#[test]
fn generate_help_shows_class_flags() {
    passvault()
        .args(["generate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no-uppercase"))
        .stdout(predicate::str::contains("exclude-similar"));
}

// ---------------------------------------------------------------------------
// Vault flows (non-interactive via PASSVAULT_PASSWORD)
// ---------------------------------------------------------------------------

#[test]
fn add_list_show_remove_flow() {
    let tmp = TempDir::new().unwrap();

    // Add an entry, password piped on stdin.
    passvault()
        .args(["add", "GitHub", "--username", "octocat"])
        .current_dir(tmp.path())
        .env("PASSVAULT_PASSWORD", "master-pw")
        .write_stdin("s3cret-value\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 'GitHub'"));

    // List shows the decrypted title and username.
    passvault()
        .arg("list")
        .current_dir(tmp.path())
        .env("PASSVAULT_PASSWORD", "master-pw")
        .assert()
        .success()
        .stdout(predicate::str::contains("GitHub"))
        .stdout(predicate::str::contains("octocat"));

    // Show prints the decrypted password.
    passvault()
        .args(["show", "GitHub"])
        .current_dir(tmp.path())
        .env("PASSVAULT_PASSWORD", "master-pw")
        .assert()
        .success()
        .stdout(predicate::str::contains("octocat"))
        .stdout(predicate::str::contains("s3cret-value"));

    // Remove it; a later show must fail.
    passvault()
        .args(["remove", "GitHub", "--force"])
        .current_dir(tmp.path())
        .env("PASSVAULT_PASSWORD", "master-pw")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 'GitHub'"));

    passvault()
        .args(["show", "GitHub"])
        .current_dir(tmp.path())
        .env("PASSVAULT_PASSWORD", "master-pw")
        .assert()
        .failure();
}

#[test]
fn show_with_wrong_master_password_fails_closed() {
    let tmp = TempDir::new().unwrap();

    passvault()
        .args(["add", "Mail"])
        .current_dir(tmp.path())
        .env("PASSVAULT_PASSWORD", "right-pw")
        .write_stdin("mail-password\n")
        .assert()
        .success();

    passvault()
        .args(["show", "Mail"])
        .current_dir(tmp.path())
        .env("PASSVAULT_PASSWORD", "wrong-pw")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Decryption failed"));
}

#[test]
fn vault_file_never_contains_plaintext() {
    let tmp = TempDir::new().unwrap();

    passvault()
        .args(["add", "Bank", "--username", "alice"])
        .current_dir(tmp.path())
        .env("PASSVAULT_PASSWORD", "master-pw")
        .write_stdin("super-secret-pin\n")
        .assert()
        .success();

    let on_disk =
        std::fs::read_to_string(tmp.path().join(".passvault/vault.json")).expect("vault file");
    assert!(!on_disk.contains("super-secret-pin"));
    assert!(!on_disk.contains("master-pw"));
    assert!(!on_disk.contains("Bank"));
    assert!(!on_disk.contains("alice"));
}

#[test]
fn owners_see_only_their_own_entries() {
    let tmp = TempDir::new().unwrap();

    passvault()
        .args(["--owner", "alice", "add", "Shared"])
        .current_dir(tmp.path())
        .env("PASSVAULT_PASSWORD", "pw")
        .write_stdin("alice-secret\n")
        .assert()
        .success();

    // Bob's listing is empty even though the store holds a record.
    passvault()
        .args(["--owner", "bob", "list"])
        .current_dir(tmp.path())
        .env("PASSVAULT_PASSWORD", "pw")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries"));
}
