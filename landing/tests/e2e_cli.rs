use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const ASSETS: [&str; 3] = [
    "img/undraw_docusaurus_mountain.svg",
    "img/undraw_docusaurus_tree.svg",
    "img/undraw_docusaurus_react.svg",
];

fn b2b() -> assert_cmd::Command {
    cargo_bin_cmd!("b2b-landing")
}

/// Config plus a static dir holding every illustration.
fn site_fixture() -> TempDir {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(
        dir.path().join("site.toml"),
        r#"title = "Bits2Bytes Labs"
tagline = "From bits to bytes, one lab at a time"
url = "https://bits2bytes.example.org"
"#,
    )
    .expect("write config");
    for asset in ASSETS {
        let path = dir.path().join("static").join(asset);
        std::fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        std::fs::write(&path, "<svg/>").expect("write svg");
    }
    dir
}

fn arg(path: &Path) -> &str {
    path.to_str().expect("utf-8 temp path")
}

#[test]
fn build_writes_homepage() {
    let site = site_fixture();
    let out = site.path().join("build");

    b2b()
        .args(["build", "--config"])
        .arg(arg(&site.path().join("site.toml")))
        .arg("--static-dir")
        .arg(arg(&site.path().join("static")))
        .arg("--out-dir")
        .arg(arg(&out))
        .assert()
        .success();

    let html = std::fs::read_to_string(out.join("index.html")).expect("index.html written");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("From bits to bytes, one lab at a time"));
    for asset in ASSETS {
        assert!(out.join(asset).is_file(), "{asset} copied");
    }
}

#[test]
fn build_fails_on_missing_asset() {
    let site = site_fixture();
    std::fs::remove_file(site.path().join("static/img/undraw_docusaurus_react.svg"))
        .expect("remove asset");

    b2b()
        .current_dir(site.path())
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("img/undraw_docusaurus_react.svg"));

    assert!(!site.path().join("build").exists());
}

#[test]
fn render_prints_document() {
    let site = site_fixture();

    b2b()
        .current_dir(site.path())
        .arg("render")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("Hands-On First"))
        .stdout(predicate::str::contains("href=\"/blog\""));
}

#[test]
fn check_rejects_config_without_tagline() {
    let site = site_fixture();
    std::fs::write(
        site.path().join("site.toml"),
        "title = \"Bits2Bytes Labs\"\nurl = \"https://example.org\"\n",
    )
    .expect("overwrite config");

    b2b()
        .current_dir(site.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("tagline"));
}

#[test]
fn check_accepts_valid_tree() {
    let site = site_fixture();

    b2b()
        .current_dir(site.path())
        .arg("check")
        .assert()
        .success();
}
