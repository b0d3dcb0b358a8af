// tests/unit_config.rs
use std::fs;
use seoscore_core::config::{Config, RuleConfig};
use seoscore_core::error::SeoError;

#[test]
fn test_load_toml() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("seoscore.toml");
    fs::write(&path, "[rules]\nmin_title_chars = 40\nmax_density = 3.0").unwrap();
    let c = Config::load_from(&path).unwrap();
    assert_eq!(c.rules.min_title_chars, 40);
    assert!((c.rules.max_density - 3.0).abs() < f64::EPSILON);
    assert_eq!(c.rules.max_title_chars, 60);
}

#[test]
fn test_missing_file_uses_defaults() {
    let d = tempfile::tempdir().unwrap();
    let c = Config::load_from(&d.path().join("seoscore.toml")).unwrap();
    assert_eq!(c.rules, RuleConfig::default());
    assert_eq!(c.preferences.store_path, "posts.toml");
    assert!(c.preferences.color);
}

#[test]
fn test_preferences() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("seoscore.toml");
    fs::write(&path, "[preferences]\nstore_path = \"drafts.toml\"\ncolor = false").unwrap();
    let c = Config::load_from(&path).unwrap();
    assert_eq!(c.store_path(), std::path::PathBuf::from("drafts.toml"));
    assert!(!c.preferences.color);
}

#[test]
fn test_save_then_load() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("seoscore.toml");
    let mut c = Config::new();
    c.rules.heading_marker = "## ".to_string();
    c.rules.intro_words = 50;
    c.save(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.rules, c.rules);
}

#[test]
fn test_invalid_band_fails_validation() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("seoscore.toml");
    fs::write(&path, "[rules]\nmin_density = 5.0\nmax_density = 1.0").unwrap();
    let c = Config::load_from(&path).unwrap();
    assert!(matches!(c.validate(), Err(SeoError::InvalidConfig(_))));
}

#[test]
fn test_bad_toml_reports_path() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("seoscore.toml");
    fs::write(&path, "[rules]\nmax_title_chars = \"sixty\"").unwrap();
    let err = Config::load_from(&path).err();
    assert!(err.is_some_and(|e| e.to_string().contains("seoscore.toml")));
}
