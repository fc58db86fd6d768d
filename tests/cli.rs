use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_unified-license"))
        .args(args)
        .output()
        .expect("Failed to run unified-license")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_text_report_for_fixture() {
    let manifest = fixture("licenses.xml");
    let output = run(&[manifest.to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "========= APPROVED LICENSES        ==========\n\
         name: testProject , version: 1.0.0 , licenses: MIT\n\
         ========= APPROVED LICENSES        ==========\n\
         ========= NOT APPROVED LICENSES    ==========\n\
         name: notApproved , version: 2.0.0 , licenses: 9wm License (Original)\n\
         ========= NOT APPROVED LICENSES    ==========\n"
    );
}

#[test]
fn test_strict_fails_on_not_approved() {
    let manifest = fixture("licenses.xml");
    let output = run(&[manifest.to_str().unwrap(), "--strict"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_json_report_resolves_and_deduplicates() {
    let manifest = fixture("mixed.json");
    let output = run(&[manifest.to_str().unwrap(), "--report", "json"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let approved = json["approved"].as_array().unwrap();
    let not_approved = json["notApproved"].as_array().unwrap();

    assert_eq!(approved.len(), 2);
    assert_eq!(approved[0]["packageName"], "left-pad");
    assert_eq!(approved[0]["license"], "MIT");
    assert_eq!(approved[1]["license"], "Apache License 2.0");

    assert_eq!(not_approved.len(), 2);
    assert_eq!(not_approved[0]["license"], "UNKNOWN");
    assert_eq!(not_approved[1]["license"], "MIT, ISC License");
}

#[test]
fn test_quiet_table_summary() {
    let manifest = fixture("mixed.json");
    let output = run(&[manifest.to_str().unwrap(), "--report", "table", "--quiet"]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.starts_with("Total: 4"));
    assert!(out.contains("Not approved"));
    assert!(output.stderr.is_empty());
}

#[test]
fn test_quiet_keeps_json_report() {
    let manifest = fixture("mixed.json");
    let output = run(&[manifest.to_str().unwrap(), "--report", "json", "--quiet"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["approved"].as_array().unwrap().len(), 2);
    assert!(output.stderr.is_empty());
}

#[test]
fn test_table_report_urls() {
    let dir = TempDir::new().unwrap();
    let catalog = dir.path().join("catalog.json");
    let aliases = dir.path().join("aliases.json");
    let manifest = dir.path().join("licenses.json");
    fs::write(
        &catalog,
        r#"{
  "MIT": {"approved": "yes", "url": "https://opensource.org/licenses/MIT"},
  "Public Domain": {"approved": "yes", "url": ""}
}"#,
    )
    .unwrap();
    fs::write(
        &aliases,
        r#"{
  "MIT": ["MIT"],
  "Public Domain": ["Public Domain"],
  "Zope Public License": ["ZPL"]
}"#,
    )
    .unwrap();
    fs::write(
        &manifest,
        r#"{"dependencies": {"dependency": [
  {"packageName": "mit-pkg", "version": "1.0.0", "licenses": {"license": [{"name": "MIT"}]}},
  {"packageName": "pd-pkg", "version": "1.0.0", "licenses": {"license": [{"name": "Public Domain"}]}},
  {"packageName": "zope-pkg", "version": "1.0.0", "licenses": {"license": [{"name": "ZPL"}]}},
  {"packageName": "dual-pkg", "version": "1.0.0", "licenses": {"license": [{"name": "MIT"}, {"name": "Public Domain"}]}}
]}}"#,
    )
    .unwrap();

    let output = run(&[
        manifest.to_str().unwrap(),
        "--catalog",
        catalog.to_str().unwrap(),
        "--aliases",
        aliases.to_str().unwrap(),
        "--report",
        "table",
        "--verbose",
    ]);
    assert!(output.status.success());

    let out = stdout(&output);
    let row = |package: &str| {
        out.lines()
            .find(|line| line.contains(package))
            .unwrap_or_else(|| panic!("no row for {package}"))
            .to_string()
    };
    assert!(row("mit-pkg").contains("https://opensource.org/licenses/MIT"));
    assert!(row("pd-pkg").contains("│ - "));
    assert!(row("zope-pkg").contains("unregistered"));
    assert!(row("dual-pkg").contains("https://opensource.org/licenses/MIT"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No URL was found for [Zope Public License]"));
    assert!(!stderr.contains("No URL was found for [MIT, Public Domain]"));
}

#[test]
fn test_url_for() {
    let output = run(&["--url-for", "3dfx Glide License"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "http://www.users.on.net/~triforce/glidexp/COPYING.txt\n"
    );

    let output = run(&["--url-for", "UNKNOWN"]);
    assert_eq!(stdout(&output), "UNKNOWN\n");
}

#[test]
fn test_url_for_unregistered_name_fails() {
    let output = run(&["--url-for", "bogus"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No URL was found for [bogus]"));
}

#[test]
fn test_custom_catalog_and_aliases() {
    let dir = TempDir::new().unwrap();
    let catalog = dir.path().join("catalog.json");
    let aliases = dir.path().join("aliases.json");
    fs::write(
        &catalog,
        r#"{"9wm License (Original)": {"approved": "yes", "url": ""}}"#,
    )
    .unwrap();
    fs::write(&aliases, r#"{"9wm License (Original)": ["9wm License (Original)"]}"#).unwrap();

    let manifest = fixture("licenses.xml");
    let output = run(&[
        manifest.to_str().unwrap(),
        "--catalog",
        catalog.to_str().unwrap(),
        "--aliases",
        aliases.to_str().unwrap(),
    ]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("========= APPROVED LICENSES        ==========\nname: notApproved"));
    assert!(out.contains("name: testProject , version: 1.0.0 , licenses: UNKNOWN"));
}

#[test]
fn test_no_aliases_uses_raw_names() {
    let manifest = fixture("mixed.json");
    let output = run(&[manifest.to_str().unwrap(), "--no-aliases", "--report", "json"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let approved = json["approved"].as_array().unwrap();
    assert_eq!(approved.len(), 0);
    assert_eq!(json["notApproved"][0]["license"], "The MIT License");
}

#[test]
fn test_config_file_enables_strict_policy() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[policy]\nfail_on_not_approved = true\n").unwrap();

    let manifest = fixture("licenses.xml");
    let output = run(&[
        manifest.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_malformed_manifest() {
    let dir = TempDir::new().unwrap();
    let manifest = dir.path().join("broken.xml");
    fs::write(
        &manifest,
        "<licenseSummary><dependencies><dependency><version>1</version></dependency></dependencies></licenseSummary>",
    )
    .unwrap();

    let output = run(&[manifest.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to parse manifest"));
}
