//! Config commands run through dispatch.

use crate::common::{TestHarness, args};
use rosterline_cli::commands::dispatch;
use rosterline_cli::config::RosterlineConfig;

#[tokio::test]
async fn test_init_then_get() {
    let harness = TestHarness::new();
    let path = harness.dir.path().join("nested").join("config.toml");
    let path = path.to_str().unwrap();
    let config = RosterlineConfig::default();

    let out = dispatch(&args(&["config", "init", "--file", path]), &config)
        .await
        .unwrap();
    assert!(out.contains(path));

    let out = dispatch(&args(&["--config", path, "config", "get", "output.pretty"]), &config)
        .await
        .unwrap();
    assert_eq!(out, "true");
}

#[tokio::test]
async fn test_show_reflects_file() {
    let harness = TestHarness::new();
    let path = harness.write("config.toml", "[logging]\nlevel = \"warn\"\n");
    let path = path.to_str().unwrap();

    let loaded = RosterlineConfig::load(Some(path)).unwrap();
    assert_eq!(loaded.logging.level, "warn");

    let out = dispatch(&args(&["-c", path, "config", "show"]), &loaded)
        .await
        .unwrap();
    assert!(out.contains("level = \"warn\""));
}

#[tokio::test]
async fn test_invalid_level_rejected_on_load() {
    let harness = TestHarness::new();
    let path = harness.write("config.toml", "[logging]\nlevel = \"loud\"\n");

    let err = RosterlineConfig::load(Some(path.to_str().unwrap())).unwrap_err();
    assert!(err.to_string().contains("logging.level"));
}
