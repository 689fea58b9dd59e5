//! Integration tests for player configuration files.

use super::helpers::temp_file;
use scrubkit::config::PlayerConfig;

#[test]
fn loads_config_from_file() {
    let (dir, path) = temp_file(
        "player.toml",
        "sprite_map = \"previews/thumbnails.vtt\"\n\
         poster = \"previews/poster.jpg\"\n\
         initial_volume = 0.5\n",
    );

    let config = PlayerConfig::load(&path).expect("load config");

    assert_eq!(config.sprite_map, "previews/thumbnails.vtt");
    assert_eq!(config.poster.as_deref(), Some("previews/poster.jpg"));
    assert_eq!(config.initial_volume, 0.5);

    drop(dir);
}

#[test]
fn load_fails_for_missing_file() {
    assert!(PlayerConfig::load("/nonexistent/player.toml").is_err());
}

#[test]
fn partial_config_uses_defaults() {
    let (dir, path) = temp_file("player.toml", "sprite_map = \"map.vtt\"\n");

    let config = PlayerConfig::load(&path).expect("load config");

    assert_eq!(config.sprite_map, "map.vtt");
    assert!(config.poster.is_none());
    assert_eq!(config.initial_volume, 1.0);

    drop(dir);
}
