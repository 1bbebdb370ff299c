mod common;

use common::{apisites_cmd, write_profile};
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

const MIRROR: &str = r#"
[yinghua]
api = "https://mirror.example/api.php/provide/vod"
name = "樱花资源"

[qiqi]
api = "https://qiqi.mirror.example/api.php/provide/vod"
name = "七七资源"
"#;

#[test]
fn profiles_lists_builtin_and_files() -> anyhow::Result<()> {
    let tmp = tempdir()?;
    write_profile(tmp.path(), "mirror.toml", MIRROR);

    let out = apisites_cmd(tmp.path())
        .args(["profiles", "-f", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let v: Value = serde_json::from_slice(&out)?;
    assert_eq!(v[0]["name"], "customer");
    assert_eq!(v[0]["builtin"], true);
    assert_eq!(v[0]["default"], true);
    assert_eq!(v[1]["name"], "mirror");
    assert_eq!(v[1]["builtin"], false);
    Ok(())
}

#[test]
fn profile_flag_selects_file_profile() -> anyhow::Result<()> {
    let tmp = tempdir()?;
    write_profile(tmp.path(), "mirror.toml", MIRROR);

    let out = apisites_cmd(tmp.path())
        .args(["--profile", "mirror", "export"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let v: Value = serde_json::from_slice(&out)?;
    let obj = v.as_object().cloned().unwrap_or_default();
    assert_eq!(obj.len(), 2);
    assert_eq!(v["yinghua"]["api"], "https://mirror.example/api.php/provide/vod");
    Ok(())
}

#[test]
fn unknown_profile_fails() -> anyhow::Result<()> {
    let tmp = tempdir()?;
    apisites_cmd(tmp.path())
        .args(["--profile", "staging", "list", "-f", "json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown profile: staging"));
    Ok(())
}

#[test]
fn use_persists_default_profile() -> anyhow::Result<()> {
    let tmp = tempdir()?;
    write_profile(tmp.path(), "mirror.toml", MIRROR);

    apisites_cmd(tmp.path())
        .args(["use", "mirror"])
        .assert()
        .success();

    let config = std::fs::read_to_string(tmp.path().join("config.toml"))?;
    assert!(config.contains("profile = \"mirror\""));

    let out = apisites_cmd(tmp.path())
        .args(["list", "-f", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: Value = serde_json::from_slice(&out)?;
    assert_eq!(v.as_array().map(Vec::len), Some(2));
    Ok(())
}

#[test]
fn validate_builtin_profile_passes() -> anyhow::Result<()> {
    let tmp = tempdir()?;
    let out = apisites_cmd(tmp.path())
        .args(["validate", "-f", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let v: Value = serde_json::from_slice(&out)?;
    assert_eq!(v["valid"], true);
    assert_eq!(v["sites"], 13);
    Ok(())
}

#[test]
fn validate_reports_relative_url() -> anyhow::Result<()> {
    let tmp = tempdir()?;
    write_profile(
        tmp.path(),
        "broken.json",
        r#"{"rel": {"api": "/api.php/provide/vod", "name": "Relative"}}"#,
    );

    apisites_cmd(tmp.path())
        .args(["--profile", "broken", "validate", "-f", "text"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("rel [api]"))
        .stderr(predicate::str::contains("1 validation issue"));
    Ok(())
}

#[test]
fn duplicate_ids_in_profile_file_are_rejected() -> anyhow::Result<()> {
    let tmp = tempdir()?;
    write_profile(
        tmp.path(),
        "dupes.json",
        r#"{"a": {"api": "https://a.example/api", "name": "A"}, "a": {"api": "https://b.example/api", "name": "B"}}"#,
    );

    apisites_cmd(tmp.path())
        .args(["--profile", "dupes", "list", "-f", "json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate site id"));
    Ok(())
}
