use crate::types::DateSource;
use anyhow::{Context, Result, bail};
use gitln_engine::{RefOptions, RenderOptions};
use gitln_types::Separator;
use gitln_types::separator::DEFAULT_SEPARATOR;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the config file path based on priority:
/// 1. Explicit path (`--config`, or `GITLN_CONFIG` through clap)
/// 2. Platform config directory (`~/.config/gitln/config.toml` on Linux)
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(expand_tilde(path));
    }
    dirs::config_dir().map(|dir| dir.join("gitln").join("config.toml"))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    path.to_path_buf()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub separator: String,
    pub remote: String,
    pub marker: String,
    pub date: DateSource,
    pub arrows: bool,
    /// Share of the terminal height used by `--bound`.
    pub bound_ratio: f32,
    /// Program and arguments of the pager.
    pub pager: Vec<String>,
    pub refs: RefsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RefsConfig {
    pub min_len_plain: usize,
    pub min_len_color: usize,
    pub emphasis: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        let refs = RefOptions::default();
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            remote: refs.remote,
            marker: refs.marker,
            date: DateSource::default(),
            arrows: refs.arrows,
            bound_ratio: 0.7,
            pager: vec!["less".to_string(), "-RF".to_string()],
            refs: RefsConfig::default(),
        }
    }
}

impl Default for RefsConfig {
    fn default() -> Self {
        let refs = RefOptions::default();
        Self {
            min_len_plain: refs.min_len_plain,
            min_len_color: refs.min_len_color,
            emphasis: refs.emphasis,
        }
    }
}

impl Config {
    /// Load from the resolved path. Returns the path that was read, if any.
    pub fn load(explicit_path: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        let Some(path) = resolve_config_path(explicit_path) else {
            return Ok((Self::default(), None));
        };
        if explicit_path.is_none() && !path.exists() {
            return Ok((Self::default(), None));
        }
        let config = Self::load_from(&path)?;
        Ok((config, Some(path)))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.separator.contains('%') {
            bail!("separator must not contain '%', git would read it as a placeholder");
        }
        if self.remote.is_empty() {
            bail!("remote must not be empty");
        }
        if self.pager.first().is_none_or(|program| program.is_empty()) {
            bail!("pager must name a program");
        }
        if !(self.bound_ratio > 0.0 && self.bound_ratio <= 1.0) {
            bail!("bound_ratio must be in (0, 1], got {}", self.bound_ratio);
        }
        Separator::new(self.separator.as_str())?;
        Ok(())
    }

    pub fn render_options(&self) -> Result<RenderOptions> {
        Ok(RenderOptions {
            separator: Separator::new(self.separator.as_str())?,
            refs: RefOptions {
                remote: self.remote.clone(),
                marker: self.marker.clone(),
                min_len_plain: self.refs.min_len_plain,
                min_len_color: self.refs.min_len_color,
                emphasis: self.refs.emphasis.clone(),
                arrows: self.arrows,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_round_trip_through_render_options() {
        let options = Config::default().render_options().unwrap();
        assert_eq!(options, RenderOptions::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "marker = \"^\"\n\n[refs]\nmin_len_color = 8\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.marker, "^");
        assert_eq!(config.refs.min_len_color, 8);
        assert_eq!(config.remote, "origin");
        assert_eq!(config.pager, vec!["less", "-RF"]);
    }

    #[test]
    fn test_empty_separator_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "separator = \"\"\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let bad = [
            Config { separator: "%x".to_string(), ..Config::default() },
            Config { pager: vec![], ..Config::default() },
            Config { bound_ratio: 0.0, ..Config::default() },
            Config { remote: String::new(), ..Config::default() },
        ];
        for config in bad {
            assert!(config.validate().is_err(), "{:?}", config);
        }
    }

    #[test]
    fn test_unknown_key_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "colour = true\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(Config::load(Some(path.as_path())).is_err());
    }

    #[test]
    fn test_date_source_parses() {
        let config: Config = toml::from_str("date = \"timestamp\"\n").unwrap();
        assert_eq!(config.date, DateSource::Timestamp);
    }
}
