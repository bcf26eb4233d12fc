//! Exit status and stdout of the `packcheck` binary.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

const VALID_MANIFEST: &str = r#"{
    "format_version": 2,
    "header": {
        "name": "Pack A",
        "description": "Resources",
        "uuid": "3f1c2b4a-5d6e-4f70-8a9b-0c1d2e3f4a5b",
        "version": [1, 0, 0],
        "min_engine_version": [1, 20, 0]
    },
    "modules": [
        {
            "type": "resources",
            "uuid": "9e8d7c6b-5a4f-4e3d-8c2b-1a0f9e8d7c6b",
            "version": [1, 0, 0]
        }
    ]
}"#;

const NO_MODULES_MANIFEST: &str = r#"{
    "format_version": 2,
    "header": {
        "name": "Pack B",
        "description": "Behaviors",
        "uuid": "c0ffee00-1234-4abc-9def-0123456789ab",
        "version": [1, 0, 0],
        "min_engine_version": [1, 20, 0]
    }
}"#;

fn packcheck() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_packcheck"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[cfg(feature = "icon-dimensions")]
fn write_icon(root: &TempDir, pack: &str) {
    let icon = root.child(format!("{}/pack_icon.png", pack));
    image::RgbaImage::new(256, 256).save(icon.path()).unwrap();
}

#[cfg(feature = "icon-dimensions")]
#[test]
fn validate_with_failing_pack_exits_one() {
    let root = TempDir::new().unwrap();
    root.child("packA/manifest.json").write_str(VALID_MANIFEST).unwrap();
    write_icon(&root, "packA");
    root.child("packB/manifest.json").write_str(NO_MODULES_MANIFEST).unwrap();
    write_icon(&root, "packB");

    packcheck()
        .arg("validate")
        .arg("--root")
        .arg(root.path())
        .assert()
        .code(1)
        .stdout(
            predicate::str::contains("Validating pack: packA")
                .and(predicate::str::contains("No issues found"))
                .and(predicate::str::contains("1 Error(s):"))
                .and(predicate::str::contains("ERROR: Missing modules section")),
        );
}

#[test]
fn validate_empty_root_exits_zero() {
    let root = TempDir::new().unwrap();
    root.child("notes/readme.txt").write_str("no manifest here").unwrap();

    packcheck()
        .arg("validate")
        .arg("--root")
        .arg(root.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("No packs found"));
}

#[test]
fn pack_without_errors_exits_zero() {
    let pack = TempDir::new().unwrap();
    pack.child("manifest.json").write_str(VALID_MANIFEST).unwrap();

    packcheck()
        .arg("pack")
        .arg(pack.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Validating pack:"));
}

#[test]
fn pack_with_invalid_manifest_exits_one() {
    let pack = TempDir::new().unwrap();
    pack.child("manifest.json").write_str("{ \"header\": [").unwrap();

    packcheck()
        .arg("pack")
        .arg(pack.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("ERROR: Invalid JSON in manifest.json"));
}

#[test]
fn report_ends_with_single_newline() {
    let root = TempDir::new().unwrap();

    let output = packcheck()
        .arg("validate")
        .arg("--root")
        .arg(root.path())
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.ends_with('\n'));
    assert!(!stdout.ends_with("\n\n"), "{stdout:?}");
}

#[test]
fn json_format_reports_pass_state() {
    let root = TempDir::new().unwrap();
    root.child("packB/manifest.json").write_str(NO_MODULES_MANIFEST).unwrap();

    let output = packcheck()
        .args(["--format", "json", "validate", "--root"])
        .arg(root.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["passed"], false);
}
