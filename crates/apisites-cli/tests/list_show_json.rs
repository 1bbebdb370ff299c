mod common;

use common::apisites_cmd;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

#[test]
fn list_json_preserves_table_order() -> anyhow::Result<()> {
    let tmp = tempdir()?;
    let out = apisites_cmd(tmp.path())
        .args(["list", "-f", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let v: Value = serde_json::from_slice(&out)?;
    let ids: Vec<&str> = v
        .as_array()
        .map(|arr| arr.iter().filter_map(|s| s["id"].as_str()).collect())
        .unwrap_or_default();
    assert_eq!(
        ids,
        vec![
            "yinghua", "iqiyi", "tyyszy", "bfzy", "dyttzy", "souni", "qiqi", "ffzy", "lzzy",
            "xiaoji", "lb", "douban", "maoyan",
        ]
    );
    Ok(())
}

#[test]
fn list_jsonl_emits_one_site_per_line() -> anyhow::Result<()> {
    let tmp = tempdir()?;
    let out = apisites_cmd(tmp.path())
        .args(["list", "-f", "jsonl"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(out)?;
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 13);
    for line in lines {
        let site: Value = serde_json::from_str(line)?;
        assert!(site.get("apiUrl").is_some());
    }
    Ok(())
}

#[test]
fn list_text_shows_names() -> anyhow::Result<()> {
    let tmp = tempdir()?;
    apisites_cmd(tmp.path())
        .args(["list", "-f", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("非凡资源 (ffzy)"))
        .stdout(predicate::str::contains("detail: https://www.ffzy.tv"));
    Ok(())
}

#[test]
fn show_ffzy_json() -> anyhow::Result<()> {
    let tmp = tempdir()?;
    let out = apisites_cmd(tmp.path())
        .args(["show", "ffzy", "-f", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let v: Value = serde_json::from_slice(&out)?;
    assert_eq!(
        v,
        serde_json::json!({
            "id": "ffzy",
            "apiUrl": "https://api.ffzyapi.com/api.php/provide/vod",
            "name": "非凡资源",
            "detailUrl": "https://www.ffzy.tv",
        })
    );
    Ok(())
}

#[test]
fn show_site_without_detail_omits_field() -> anyhow::Result<()> {
    let tmp = tempdir()?;
    let out = apisites_cmd(tmp.path())
        .args(["show", "lzzy", "-f", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let v: Value = serde_json::from_slice(&out)?;
    assert_eq!(v["apiUrl"], "https://cj.lziapi.com/api.php/provide/vod");
    assert!(v.get("detailUrl").is_none());
    Ok(())
}

#[test]
fn show_unknown_site_fails() -> anyhow::Result<()> {
    let tmp = tempdir()?;
    apisites_cmd(tmp.path())
        .args(["show", "nope", "-f", "text"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not found"));
    Ok(())
}

#[test]
fn lookup_finds_site_by_id() -> anyhow::Result<()> {
    let tmp = tempdir()?;
    let out = apisites_cmd(tmp.path())
        .args(["lookup", "douban", "-f", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let v: Value = serde_json::from_slice(&out)?;
    let first = &v[0];
    assert_eq!(first["id"], "douban");
    for key in ["name", "apiUrl", "score", "matchField"] {
        assert!(first.get(key).is_some(), "missing key: {key}");
    }
    Ok(())
}
