//! Panchang configuration loaded from TOML.
//!
//! ```toml
//! tradition = "north_indian"
//! tithi_policy = "sunrise"     # or "any_in_day"
//! language = "en"
//!
//! [festivals]
//! data = "data/festivals.json" # relative to the config file
//! ```
//!
//! Every key is optional; [`PanchangConfig::default`] is usable as is.

use std::fs;
use std::path::{Path, PathBuf};

use panchang_base::{MonthSystem, Tradition};
use panchang_festival::{Festival, FestivalError, ReferencePolicy, load_festivals_from_path};
use serde::Deserialize;
use thiserror::Error;

/// Paths tried by [`find_config`], in order.
pub const CONFIG_SEARCH_PATHS: [&str; 3] = [
    "panchang.toml",
    "configs/panchang.toml",
    "../../configs/panchang.toml",
];

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid panchang config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("no config file found (tried {0:?})")]
    NotFound(Vec<PathBuf>),
    #[error(transparent)]
    Festival(#[from] FestivalError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanchangConfig {
    pub tradition: Tradition,
    pub tithi_policy: ReferencePolicy,
    /// Language code for festival names.
    pub language: String,
    /// Festival definitions; relative paths are already resolved against
    /// the config file's directory.
    pub festival_data: Option<PathBuf>,
}

impl Default for PanchangConfig {
    fn default() -> Self {
        Self {
            tradition: Tradition::NorthIndian,
            tithi_policy: ReferencePolicy::Sunrise,
            language: default_language(),
            festival_data: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigToml {
    #[serde(default)]
    tradition: Option<Tradition>,
    #[serde(default)]
    tithi_policy: Option<ReferencePolicy>,
    #[serde(default = "default_language")]
    language: String,
    #[serde(default)]
    festivals: Option<FestivalsToml>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct FestivalsToml {
    data: PathBuf,
}

fn default_language() -> String {
    "en".to_string()
}

impl PanchangConfig {
    /// Parse TOML text. Relative festival paths are resolved against `base_dir`
    /// when given.
    pub fn from_toml_str(text: &str, base_dir: Option<&Path>) -> Result<Self, ConfigError> {
        let ConfigToml {
            tradition,
            tithi_policy,
            language,
            festivals,
        } = toml::from_str(text)?;
        let festival_data = festivals.map(|f| match base_dir {
            Some(dir) if f.data.is_relative() => dir.join(f.data),
            _ => f.data,
        });
        Ok(Self {
            tradition: tradition.unwrap_or(Tradition::NorthIndian),
            tithi_policy: tithi_policy.unwrap_or_default(),
            language,
            festival_data,
        })
    }

    pub fn month_system(&self) -> MonthSystem {
        self.tradition.month_system()
    }

    /// Festival definitions from `festival_data`, or none when unset.
    pub fn load_festivals(&self) -> Result<Vec<Festival>, ConfigError> {
        match &self.festival_data {
            Some(path) => Ok(load_festivals_from_path(path)?),
            None => Ok(Vec::new()),
        }
    }
}

pub fn load_config(path: impl AsRef<Path>) -> Result<PanchangConfig, ConfigError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    PanchangConfig::from_toml_str(&text, path.parent())
}

/// First existing file among [`CONFIG_SEARCH_PATHS`].
pub fn find_config() -> Result<PathBuf, ConfigError> {
    let candidates: Vec<PathBuf> = CONFIG_SEARCH_PATHS.iter().map(PathBuf::from).collect();
    match candidates.iter().position(|p| p.is_file()) {
        Some(i) => Ok(candidates[i].clone()),
        None => Err(ConfigError::NotFound(candidates)),
    }
}

/// Config from `path`, else the first config found on the search path,
/// else the defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<PanchangConfig, ConfigError> {
    match path {
        Some(p) => load_config(p),
        None => match find_config() {
            Ok(p) => load_config(p),
            Err(ConfigError::NotFound(_)) => Ok(PanchangConfig::default()),
            Err(e) => Err(e),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_gives_defaults() {
        let cfg = PanchangConfig::from_toml_str("", None).unwrap();
        assert_eq!(cfg, PanchangConfig::default());
        assert_eq!(cfg.month_system(), MonthSystem::Purnimanta);
    }

    #[test]
    fn parses_all_keys() {
        let cfg = PanchangConfig::from_toml_str(
            r#"
tradition = "tamil"
tithi_policy = "any_in_day"
language = "ta"

[festivals]
data = "festivals.json"
"#,
            Some(Path::new("/etc/panchang")),
        )
        .unwrap();
        assert_eq!(cfg.tradition, Tradition::Tamil);
        assert_eq!(cfg.tithi_policy, ReferencePolicy::AnyInDay);
        assert_eq!(cfg.language, "ta");
        assert_eq!(
            cfg.festival_data,
            Some(PathBuf::from("/etc/panchang/festivals.json"))
        );
        assert_eq!(cfg.month_system(), MonthSystem::Amanta);
    }

    #[test]
    fn unknown_tradition_is_kept() {
        let cfg = PanchangConfig::from_toml_str("tradition = \"assamese\"", None).unwrap();
        assert_eq!(cfg.tradition, Tradition::Other("assamese".into()));
    }

    #[test]
    fn rejects_bad_policy_and_unknown_keys() {
        assert!(matches!(
            PanchangConfig::from_toml_str("tithi_policy = \"noon\"", None),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(
            PanchangConfig::from_toml_str("timezone = \"IST\"", None),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn no_festival_data_loads_nothing() {
        assert!(PanchangConfig::default().load_festivals().unwrap().is_empty());
    }
}
