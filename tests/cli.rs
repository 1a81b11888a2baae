//! End-to-end tests of the `kodegen_maker_nsis` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn maker() -> Command {
    let mut cmd = Command::cargo_bin("kodegen_maker_nsis").unwrap();
    for var in [
        "WINDOWS_CERTIFICATE_FILE",
        "WINDOWS_CERTIFICATE_PASSWORD",
        "WINDOWS_TIMESTAMP_SERVER",
        "WINDOWS_SIGN_WITH_PARAMS",
        "MAKER_APP_VERSION",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn check_accepts_valid_config() {
    maker()
        .args(["--check", "--config"])
        .arg(fixture("maker.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("is a valid NSIS maker config"));
}

#[test]
fn check_rejects_app_directory_in_codesign() {
    maker()
        .args(["--check", "--config"])
        .arg(fixture("invalid.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("appDirectory"));
}

#[test]
fn app_dir_is_required_without_check() {
    maker()
        .arg("--config")
        .arg(fixture("maker.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--app-dir is required"));
}

#[test]
fn resolves_cargo_manifest_metadata() {
    let tmp = tempfile::tempdir().unwrap();

    maker()
        .arg("--config")
        .arg(fixture("Cargo.toml"))
        .args(["--app-dir", "out/example-app-win32-arm64", "--arch", "arm64"])
        .arg("--make-dir")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("app-builder.json"))
        .stdout(predicate::str::contains("app-update.yml"))
        .stdout(predicate::str::contains("sign-options.json").not());

    let out_dir = tmp.path().join("nsis").join("arm64");
    let builder: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(out_dir.join("app-builder.json")).unwrap(),
    )
    .unwrap();

    assert_eq!(builder["productName"], "example-app");
    assert_eq!(builder["buildVersion"], "2.3.1.0");
    assert_eq!(builder["appId"], "com.example.app");
    assert_eq!(builder["win"]["target"][0]["arch"][0], "arm64");
    assert_eq!(builder["publish"][0]["url"], "https://example.com/updates");
}

#[test]
fn command_line_overrides_manifest_identity() {
    let tmp = tempfile::tempdir().unwrap();

    maker()
        .arg("--config")
        .arg(fixture("Cargo.toml"))
        .args([
            "--app-dir",
            "out/app",
            "--product-name",
            "Example App",
            "--app-version",
            "9.0.1",
        ])
        .arg("--make-dir")
        .arg(tmp.path())
        .assert()
        .success();

    let builder: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(tmp.path().join("nsis/x64/app-builder.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(builder["productName"], "Example App");
    assert_eq!(builder["buildVersion"], "9.0.1.0");
}
