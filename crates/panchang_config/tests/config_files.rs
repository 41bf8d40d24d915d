//! Loading configs and festival data from disk.

use std::path::{Path, PathBuf};

use panchang_base::Tradition;
use panchang_config::{ConfigError, load_config, load_or_default};
use panchang_festival::ReferencePolicy;

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

#[test]
fn sample_config_loads_with_festivals() {
    let cfg = load_config(workspace_root().join("configs/panchang.toml")).unwrap();
    assert_eq!(cfg.tradition, Tradition::NorthIndian);
    assert_eq!(cfg.tithi_policy, ReferencePolicy::Sunrise);
    let festivals = cfg.load_festivals().unwrap();
    assert!(festivals.iter().any(|f| f.id == "diwali"));
}

#[test]
fn missing_file_reports_path() {
    let err = load_config("/nonexistent/panchang.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/panchang.toml"));
}

#[test]
fn explicit_path_overrides_search() {
    let err = load_or_default(Some(Path::new("/nonexistent/panchang.toml"))).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
