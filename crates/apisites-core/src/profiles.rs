//! Named site tables.
//!
//! A profile is one complete, self-contained snapshot of the site table. The
//! crate ships a single built-in snapshot ([`CUSTOMER_PROFILE`]); further
//! snapshots live as `<name>.toml` or `<name>.json` files in the profiles
//! directory and use the host wire shape. Profiles are never merged with one
//! another: resolving a name yields exactly one table.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result, SiteRecord, SiteRegistry};

/// Name of the built-in profile.
pub const CUSTOMER_PROFILE: &str = "customer";

/// Names of every profile compiled into the crate, in display order.
pub const BUILTIN_PROFILES: &[&str] = &[CUSTOMER_PROFILE];

/// The built-in site table, in definition order.
pub fn customer_sites() -> SiteRegistry {
    let sites = vec![
        // Sites selected by default in the host
        SiteRecord::new(
            "yinghua",
            "https://m3u8.apiyhzy.com/api.php/provide/vod",
            "樱花资源",
        ),
        SiteRecord::new(
            "iqiyi",
            "https://iqiyizyapi.com/api.php/provide/vod",
            "iqiyi资源",
        ),
        SiteRecord::new(
            "tyyszy",
            "https://tyyszy.com/api.php/provide/vod",
            "天翼云资源",
        ),
        SiteRecord::new(
            "bfzy",
            "https://bfzyapi.com/api.php/provide/vod",
            "暴风资源",
        ),
        SiteRecord::new(
            "dyttzy",
            "https://api.dytt8.net/api.php/provide/vod",
            "电影天堂资源",
        ),
        SiteRecord::new(
            "souni",
            "https://suoniapi.com/api.php/provide/vod",
            "索尼资源",
        ),
        SiteRecord::new(
            "qiqi",
            "https://qiqidys.com/api.php/provide/vod",
            "七七资源",
        ),
        SiteRecord::new(
            "ffzy",
            "https://api.ffzyapi.com/api.php/provide/vod",
            "非凡资源",
        )
        .with_detail("https://www.ffzy.tv"),
        SiteRecord::new(
            "lzzy",
            "https://cj.lziapi.com/api.php/provide/vod",
            "量子资源",
        ),
        SiteRecord::new(
            "xiaoji",
            "https://api.xiaojizy.live/provide/vod",
            "小鸡资源",
        ),
        SiteRecord::new("lb", "https://lbapi9.com/api.php/provide/vod", "乐播资源"),
        SiteRecord::new(
            "douban",
            "https://caiji.dbzy5.com/api.php/provide/vod",
            "豆瓣资源",
        ),
        SiteRecord::new(
            "maoyan",
            "https://api.maoyanapi.top/api.php/provide/vod",
            "猫眼资源",
        ),
    ];

    SiteRegistry { sites }
}

/// Resolve a profile name to its site table.
///
/// Built-in names win over files of the same stem. Otherwise
/// `<profiles_dir>/<name>.toml` is tried before `<name>.json`.
pub fn resolve(name: &str, profiles_dir: Option<&Path>) -> Result<SiteRegistry> {
    if name == CUSTOMER_PROFILE {
        return Ok(customer_sites());
    }

    let Some(dir) = profiles_dir else {
        return Err(Error::UnknownProfile(name.to_string()));
    };

    if !is_valid_profile_name(name) {
        return Err(Error::UnknownProfile(name.to_string()));
    }

    let toml_path = dir.join(format!("{name}.toml"));
    if toml_path.is_file() {
        tracing::debug!("Loading profile '{}' from {}", name, toml_path.display());
        return load_profile_file(&toml_path);
    }

    let json_path = dir.join(format!("{name}.json"));
    if json_path.is_file() {
        tracing::debug!("Loading profile '{}' from {}", name, json_path.display());
        return load_profile_file(&json_path);
    }

    Err(Error::UnknownProfile(name.to_string()))
}

/// Read a single profile file, choosing the format by extension.
pub fn load_profile_file(path: &Path) -> Result<SiteRegistry> {
    let content = fs::read_to_string(path)?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => SiteRegistry::from_json_str(&content),
        Some("toml") => SiteRegistry::from_toml_str(&content),
        _ => Err(Error::Config(format!(
            "Unsupported profile file: {}",
            path.display()
        ))),
    }
}

/// Built-in profile names followed by the sorted stems of profile files.
///
/// Only stems that [`resolve`] accepts are listed. A missing directory yields
/// only the built-ins.
pub fn available_profiles(profiles_dir: Option<&Path>) -> Result<Vec<String>> {
    let mut names: Vec<String> = BUILTIN_PROFILES.iter().map(|s| (*s).to_string()).collect();

    let Some(dir) = profiles_dir else {
        return Ok(names);
    };
    if !dir.is_dir() {
        return Ok(names);
    }

    let mut found: Vec<String> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path: PathBuf = entry?.path();
        let is_profile = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("toml" | "json")
        );
        if !is_profile {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if !is_valid_profile_name(stem) {
            tracing::debug!("Skipping {}: not a usable profile name", path.display());
            continue;
        }
        if !names.iter().any(|n| n == stem) && !found.iter().any(|n| n == stem) {
            found.push(stem.to_string());
        }
    }
    found.sort();
    names.extend(found);
    Ok(names)
}

fn is_valid_profile_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
