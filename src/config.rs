//! Config file loading and resolution
//!
//! A missing or malformed config file never blocks the report: every failure
//! collapses into `Config::default()`, and every unset field resolves to a
//! built-in default when asked for.

use crate::colorize::Thresholds;
use crate::error::{LogindashError, Result};
use dirs::config_dir;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_LABEL_WIDTH: usize = 15;
pub const MAX_LABEL_WIDTH: usize = 256;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub colors: ColorsConfig,
    pub disks: DisksConfig,
    pub services: ServicesConfig,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub label_width: i64,
    pub green_until: i64,
    pub orange_until: i64,
}

/// Per-role color overrides; `None` or empty falls back to the palette default
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct ColorsConfig {
    pub header: Option<String>,
    pub title: Option<String>,
    pub label: Option<String>,
    pub user: Option<String>,
    pub fqdn: Option<String>,
    pub dim: Option<String>,
    pub active: Option<String>,
    pub inactive: Option<String>,
    pub failed: Option<String>,
    pub green: Option<String>,
    pub orange: Option<String>,
    pub red: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct DisksConfig {
    pub paths: Vec<String>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct ServicesConfig {
    pub monitored: Vec<String>,
}

impl Config {
    /// Parse config text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = crate::utils::file::read_file_safe(path)?;
        Self::from_toml_str(&content)
    }

    /// Label column width, 15 unless a width in 1..=256 is configured
    pub fn label_width(&self) -> usize {
        match usize::try_from(self.display.label_width) {
            Ok(width) if (1..=MAX_LABEL_WIDTH).contains(&width) => width,
            _ => {
                if self.display.label_width != 0 {
                    debug!(label_width = self.display.label_width, "label width out of range");
                }
                DEFAULT_LABEL_WIDTH
            }
        }
    }

    /// Severity cutoffs; each overrides its default on its own when it is a
    /// valid percentage in 1..=100. Cutoffs are not reordered: with
    /// low above high the caution band is simply empty.
    pub fn thresholds(&self) -> Thresholds {
        let defaults = Thresholds::default();
        let pick = |configured: i64, default: f64| {
            if (1..=100).contains(&configured) {
                configured as f64
            } else {
                default
            }
        };

        Thresholds {
            low: pick(self.display.green_until, defaults.low),
            high: pick(self.display.orange_until, defaults.high),
        }
    }
}

/// Default config location: `<config dir>/logindash/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("logindash/config.toml"))
}

/// Pick the explicit path when given (with `~` expanded), else the default
pub fn resolve_config_path(custom: Option<&str>) -> Result<PathBuf> {
    match custom.map(str::trim).filter(|p| !p.is_empty()) {
        Some(path) => Ok(PathBuf::from(shellexpand::tilde(path).into_owned())),
        None => default_config_path()
            .ok_or_else(|| LogindashError::Config("could not determine config dir".to_string())),
    }
}

/// Load the effective config, silently falling back to an empty config when
/// the file is absent, unreadable or malformed
pub fn load_config(custom: Option<&str>) -> Config {
    let loaded = resolve_config_path(custom).and_then(|path| {
        debug!(path = %path.display(), "loading config");
        Config::from_file(&path)
    });

    match loaded {
        Ok(config) => config,
        Err(err) => {
            debug!(error = %err, "config unavailable, using defaults");
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colorize::Severity;

    const FULL: &str = r##"
[display]
label_width = 20
green_until = 50
orange_until = 90

[colors]
header = "#ff0000"
dim = "gray"

[disks]
paths = ["/data", "/mnt/backup"]

[services]
monitored = ["sshd", "docker"]
"##;

    #[test]
    fn parses_all_groups() {
        let config = Config::from_toml_str(FULL).unwrap();
        assert_eq!(config.label_width(), 20);
        assert_eq!(config.thresholds(), Thresholds { low: 50.0, high: 90.0 });
        assert_eq!(config.colors.header.as_deref(), Some("#ff0000"));
        assert_eq!(config.colors.dim.as_deref(), Some("gray"));
        assert_eq!(config.colors.title, None);
        assert_eq!(config.disks.paths, vec!["/data", "/mnt/backup"]);
        assert_eq!(config.services.monitored, vec!["sshd", "docker"]);
    }

    #[test]
    fn missing_groups_default() {
        let config = Config::from_toml_str("[services]\nmonitored = [\"nginx\"]\n").unwrap();
        assert_eq!(config.label_width(), DEFAULT_LABEL_WIDTH);
        assert_eq!(config.thresholds(), Thresholds::default());
        assert!(config.disks.paths.is_empty());
        assert_eq!(config.services.monitored, vec!["nginx"]);
    }

    #[test]
    fn malformed_text_is_an_error() {
        assert!(matches!(
            Config::from_toml_str("[display\nlabel_width = "),
            Err(LogindashError::Toml(_))
        ));
    }

    #[test]
    fn non_positive_values_fall_back() {
        let config = Config::from_toml_str(
            "[display]\nlabel_width = -3\ngreen_until = 0\norange_until = 1\n",
        )
        .unwrap();
        assert_eq!(config.label_width(), DEFAULT_LABEL_WIDTH);
        assert_eq!(config.thresholds(), Thresholds { low: 65.0, high: 1.0 });
    }

    #[test]
    fn single_cutoff_applies_even_above_the_other_default() {
        let config = Config::from_toml_str("[display]\ngreen_until = 90\n").unwrap();
        let thresholds = config.thresholds();
        assert_eq!(thresholds, Thresholds { low: 90.0, high: 85.0 });
        assert_eq!(thresholds.severity(88.0), Severity::Normal);
        assert_eq!(thresholds.severity(91.0), Severity::Critical);

        let config = Config::from_toml_str("[display]\norange_until = 2\n").unwrap();
        assert_eq!(config.thresholds().severity(70.0), Severity::Critical);
        assert_eq!(config.thresholds().severity(65.0), Severity::Normal);
    }

    #[test]
    fn oversized_label_width_falls_back() {
        for width in [i64::MAX, 1_000_000_000, 257] {
            let config =
                Config::from_toml_str(&format!("[display]\nlabel_width = {}\n", width)).unwrap();
            assert_eq!(config.label_width(), DEFAULT_LABEL_WIDTH);
        }

        let config = Config::from_toml_str("[display]\nlabel_width = 256\n").unwrap();
        assert_eq!(config.label_width(), MAX_LABEL_WIDTH);
    }

    #[test]
    fn thresholds_override_symmetrically() {
        let config =
            Config::from_toml_str("[display]\ngreen_until = 1\norange_until = 2\n").unwrap();
        assert_eq!(config.thresholds(), Thresholds { low: 1.0, high: 2.0 });

        let config = Config::from_toml_str("[display]\ngreen_until = 101\n").unwrap();
        assert_eq!(config.thresholds().low, 65.0);
    }

    #[test]
    fn explicit_path_wins_and_expands_tilde() {
        let path = resolve_config_path(Some("/etc/logindash.toml")).unwrap();
        assert_eq!(path, PathBuf::from("/etc/logindash.toml"));

        if let Some(home) = dirs::home_dir() {
            let path = resolve_config_path(Some("~/dash.toml")).unwrap();
            assert_eq!(path, home.join("dash.toml"));
        }
    }

    #[test]
    fn blank_path_means_default_location() {
        if let Some(default) = default_config_path() {
            assert_eq!(resolve_config_path(Some("  ")).unwrap(), default);
            assert_eq!(resolve_config_path(None).unwrap(), default);
        }
    }

    #[test]
    fn unreadable_path_loads_empty_config() {
        let config = load_config(Some("/definitely/not/here/config.toml"));
        assert_eq!(config, Config::default());
    }
}
