#![allow(missing_docs, clippy::expect_used)]

mod common;

use anyhow::Result;
use common::Workspace;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;

fn seeded() -> Workspace {
    let ws = Workspace::new();
    ws.write(
        "11.x/documentation.md",
        "# Docs\n\n- [Installation](/docs/{{version}}/installation)\n- [Routing](/docs/{{version}}/routing)\n",
    );
    ws.write("11.x/installation.md", "# Installation\n\nRun it on {{version}}.\n");
    ws.write("10.x/documentation.md", "# Docs\n");
    ws
}

#[test]
fn empty_content_root_exits_with_guidance() {
    let ws = Workspace::new();

    ws.cmd()
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Run the documentation ingestion step first",
        ));
}

#[test]
fn versions_on_empty_store_reports_missing_content() {
    let ws = Workspace::new();

    ws.cmd()
        .arg("--versions")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Available versions:").not());
}

#[test]
fn versions_flag_lists_and_exits_cleanly() -> Result<()> {
    let ws = seeded();

    let output = ws.cmd().arg("--versions").assert().success().get_output().stdout.clone();

    assert_eq!(String::from_utf8(output)?, "Available versions:\n10.x\n11.x\n");
    assert!(fs::read_dir(ws.cache.path())?.next().is_none());
    Ok(())
}

#[test]
fn unknown_version_is_rejected() {
    let ws = seeded();

    ws.cmd()
        .arg("9.x")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Invalid version specified - '9.x'"))
        .stdout(predicate::str::contains("Available versions:\n10.x\n11.x\n"));
}

#[test]
fn warming_one_version_writes_artifacts() -> Result<()> {
    let ws = seeded();

    let output = ws.cmd().arg("11.x").assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output)?;

    assert!(stdout.starts_with("11.x... 2 pages\n"), "{stdout}");
    assert!(stdout.contains(" 1 - documentation "));
    assert!(stdout.contains(" 2 - installation "));
    assert!(!stdout.contains("10.x"));

    let page: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(ws.cache.path().join("11.x/installation.json"))?)?;
    assert_eq!(page["title"], "Installation");
    assert!(page["markdown"].as_str().unwrap_or_default().contains("Run it on 11.x."));

    let index: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(ws.cache.path().join("11.x/.index.json"))?)?;
    assert_eq!(index["links"][0]["target"], "/docs/11.x/installation");
    assert!(!ws.cache.path().join("10.x").exists());
    Ok(())
}

#[test]
fn warming_all_versions_processes_each_in_order() -> Result<()> {
    let ws = seeded();

    let output = ws.cmd().assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output)?;

    let older = stdout.find("10.x... 1 pages").expect("10.x warmed");
    let newer = stdout.find("11.x... 2 pages").expect("11.x warmed");
    assert!(older < newer);
    assert!(ws.cache.path().join("10.x/documentation.json").exists());
    Ok(())
}

#[test]
fn second_run_is_idempotent() -> Result<()> {
    let ws = seeded();
    let artifact = ws.cache.path().join("11.x/installation.json");

    ws.cmd().arg("11.x").assert().success();
    let first = fs::read_to_string(&artifact)?;
    ws.cmd().arg("11.x").assert().success();

    assert_eq!(fs::read_to_string(&artifact)?, first);
    Ok(())
}

#[test]
fn invalid_config_is_a_usage_error() -> Result<()> {
    let ws = seeded();
    let config = ws.cache.path().join("bad.toml");
    fs::write(&config, "paths = [not toml")?;

    ws.cmd()
        .env("DOCS_CACHE_CONFIG", &config)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("error:"));
    Ok(())
}
