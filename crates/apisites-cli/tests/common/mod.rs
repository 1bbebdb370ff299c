#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::path::Path;
use std::time::Duration;

#[allow(dead_code)]
pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

/// Create a configured `apisites` command isolated in `config_dir`.
#[allow(dead_code)]
pub fn apisites_cmd(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("apisites").expect("apisites binary should build");
    cmd.timeout(CMD_TIMEOUT);
    cmd.env("APISITES_CONFIG_DIR", config_dir);
    cmd.env_remove("APISITES_PROFILE");
    cmd.env_remove("APISITES_OUTPUT_FORMAT");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Write a profile file into the default profiles directory under `config_dir`.
#[allow(dead_code)]
pub fn write_profile(config_dir: &Path, file_name: &str, content: &str) {
    let dir = config_dir.join("profiles");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(file_name), content).unwrap();
}
