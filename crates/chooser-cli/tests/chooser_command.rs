use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

#[allow(deprecated)]
fn get_chooser_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("chooser")
}

/// Command with the chooser's own environment overrides cleared
fn chooser() -> Command {
    let mut cmd = Command::new(get_chooser_bin());
    cmd.env_remove("CHOOSER_BROWSER")
        .env_remove("CHOOSER_PROFILES_INI")
        .env_remove("CHOOSER_LOG");
    cmd
}

fn write_profiles_ini(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("profiles.ini");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_help() {
    chooser()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Firefox profile"))
        .stdout(predicate::str::contains("--browser"))
        .stdout(predicate::str::contains("--profiles-ini"))
        .stdout(predicate::str::contains("--list"));
}

#[test]
fn test_version() {
    chooser()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_url_is_usage_error() {
    chooser()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"))
        .stderr(predicate::str::contains("<URL>"));
}

#[test]
fn test_unknown_flag_exits_with_one() {
    chooser()
        .arg("--no-such-flag")
        .arg("https://example.com")
        .assert()
        .code(1);
}

#[test]
fn test_unreadable_config() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("profiles.ini");

    chooser()
        .arg("--profiles-ini")
        .arg(&missing)
        .arg("https://example.com")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Could not open"));
}

#[test]
fn test_config_without_profiles() {
    let dir = tempfile::tempdir().unwrap();
    let ini = write_profiles_ini(dir.path(), "[General]\nStartWithLastProfile=1\nVersion=2\n");

    chooser()
        .arg("--profiles-ini")
        .arg(&ini)
        .arg("https://example.com")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No profiles found"));
}

#[test]
fn test_list_prints_profiles_in_file_order() {
    let dir = tempfile::tempdir().unwrap();
    let ini = write_profiles_ini(dir.path(), "Name=Default\nPath=abc\nName=Work\n");

    chooser()
        .arg("--profiles-ini")
        .arg(&ini)
        .arg("--list")
        .assert()
        .success()
        .stdout("Default\nWork\n");
}

#[test]
fn test_profiles_ini_from_environment() {
    let dir = tempfile::tempdir().unwrap();
    let ini = write_profiles_ini(dir.path(), "Name=Default\n");

    chooser()
        .env("CHOOSER_PROFILES_INI", &ini)
        .arg("--list")
        .assert()
        .success()
        .stdout("Default\n");
}

#[cfg(all(unix, not(target_os = "macos")))]
#[test]
fn test_list_reads_default_location_under_home() {
    let home = tempfile::tempdir().unwrap();
    let firefox_dir = home.path().join(".mozilla").join("firefox");
    fs::create_dir_all(&firefox_dir).unwrap();
    write_profiles_ini(&firefox_dir, "[Profile0]\nName=Personal\n\n[Profile1]\nName=Work\n");

    chooser()
        .env("HOME", home.path())
        .arg("--list")
        .assert()
        .success()
        .stdout("Personal\nWork\n");
}

#[cfg(all(unix, not(target_os = "macos")))]
#[test]
fn test_missing_default_config_under_home() {
    let home = tempfile::tempdir().unwrap();

    chooser()
        .env("HOME", home.path())
        .arg("https://example.com")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Could not open"))
        .stderr(predicate::str::contains(".mozilla"));
}

#[cfg(unix)]
#[test]
fn test_unset_home_is_unresolved() {
    chooser()
        .env_remove("HOME")
        .arg("https://example.com")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("HOME"));
}

#[cfg(all(unix, not(target_os = "macos")))]
#[test]
fn test_empty_profiles_ini_env_falls_back_to_home() {
    let home = tempfile::tempdir().unwrap();
    let firefox_dir = home.path().join(".mozilla").join("firefox");
    fs::create_dir_all(&firefox_dir).unwrap();
    write_profiles_ini(&firefox_dir, "Name=Default\n");

    chooser()
        .env("HOME", home.path())
        .env("CHOOSER_PROFILES_INI", "")
        .arg("--list")
        .assert()
        .success()
        .stdout("Default\n");
}

#[cfg(all(unix, not(target_os = "macos")))]
#[test]
fn test_empty_browser_env_is_ignored() {
    let home = tempfile::tempdir().unwrap();
    let firefox_dir = home.path().join(".mozilla").join("firefox");
    fs::create_dir_all(&firefox_dir).unwrap();
    write_profiles_ini(&firefox_dir, "Name=Default\n");

    chooser()
        .env("HOME", home.path())
        .env("CHOOSER_BROWSER", "")
        .arg("--list")
        .assert()
        .success()
        .stdout("Default\n");
}

#[test]
fn test_help_mentions_environment_overrides() {
    chooser()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("CHOOSER_BROWSER"))
        .stdout(predicate::str::contains("CHOOSER_PROFILES_INI"));
}
