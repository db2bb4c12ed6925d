use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Command for the arcadekit binary, isolated from any user config
pub fn arcadekit(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("arcadekit");
    cmd.env("ARCADEKIT_CONFIG_DIR", config_dir)
        .env_remove("ARCADEKIT_CONFIG")
        .env_remove("ARCADEKIT_CATALOG")
        .env_remove("ARCADEKIT_LOG")
        .env_remove("RUST_LOG");
    cmd
}

#[allow(dead_code)]
pub const CATALOG: &str = r#"
[[game]]
id = 1
title = "Space <em>Invaders</em> Deluxe"
content = "[caption id=\"a\"]<img/> A caption[/caption] <p>Classic   shooter.</p> <p>Shoot every alien before they land.</p>"

[game.meta]
mabp_thumbnail_url = "http://cdn.example/invaders.png"
mabp_screen1_url = "http://cdn.example/s1.png"
mabp_screen3_url = "https://cdn.example/s3.png"
mabp_screen4_url = "uploads/s4.png"
mabp_description = "Defend the planet from waves of aliens."
mabp_video_url = "https://video.example/embed/invaders"

[[game]]
id = 2
title = "Tom & Jerry"
"#;

/// Write the sample catalog into `dir` and return its path
#[allow(dead_code)]
pub fn write_catalog(dir: &Path) -> PathBuf {
    let path = dir.join("games.toml");
    fs::write(&path, CATALOG).expect("write catalog");
    path
}

/// Write a theme config into `dir` and return its path
#[allow(dead_code)]
pub fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("theme.toml");
    fs::write(&path, content).expect("write config");
    path
}
