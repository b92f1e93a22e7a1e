//! Configuration for pvq.
//!
//! Config file resolution order:
//! 1. Explicit path passed with `--config`
//! 2. PVQ_CONFIG environment variable
//! 3. Default: <user config dir>/pvq/config.toml (optional)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use pvsel::{ResourceKind, Selector};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// pvq configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Output format used when `-o` is not given.
    #[serde(default = "default_output")]
    pub output: String,

    /// Selectors always applied before the command-line ones.
    #[serde(default)]
    pub selectors: DefaultSelectors,
}

/// Per-kind default selectors, ANDed with the command line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultSelectors {
    #[serde(default)]
    pub vm: Vec<String>,
    #[serde(default)]
    pub ct: Vec<String>,
    #[serde(default)]
    pub disk: Vec<String>,
    #[serde(default)]
    pub volume: Vec<String>,
}

fn default_output() -> String {
    "table".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: default_output(),
            selectors: DefaultSelectors::default(),
        }
    }
}

impl Config {
    /// Load config using the standard resolution order.
    ///
    /// An explicitly named file must exist; the default location is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        if let Ok(path) = std::env::var("PVQ_CONFIG") {
            return Self::load_from(Path::new(&path));
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load config from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Default selector for a resource kind, parsed.
    pub fn default_selector(&self, kind: ResourceKind) -> Result<Selector> {
        let selectors = match kind {
            ResourceKind::VirtualMachine => &self.selectors.vm,
            ResourceKind::Container => &self.selectors.ct,
            ResourceKind::Disk => &self.selectors.disk,
            ResourceKind::Volume => &self.selectors.volume,
        };
        Ok(Selector::parse_all(selectors)?)
    }
}

fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "pvq").map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.output, "table");
        assert!(config
            .default_selector(ResourceKind::VirtualMachine)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_config_load_from() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(
            &path,
            "output = \"json\"\n\n[selectors]\nvm = [\"template=no\", \"status in (running,paused)\"]\n",
        )
        .unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.output, "json");

        let vm = config.default_selector(ResourceKind::VirtualMachine).unwrap();
        assert_eq!(vm.len(), 2);
        assert!(config.default_selector(ResourceKind::Disk).unwrap().is_empty());
    }

    #[test]
    fn test_config_partial_file_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[selectors]\nct = [\"pool=edge\"]\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.output, "table");
        assert_eq!(config.selectors.ct, vec!["pool=edge".to_string()]);
    }

    #[test]
    fn test_config_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "output = [").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_config_explicit_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = Config::load(Some(tmp.path().join("nope.toml").as_path())).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_config_bad_default_selector() {
        let config = Config {
            selectors: DefaultSelectors {
                disk: vec!["health".to_string()],
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.default_selector(ResourceKind::Disk).is_err());
    }
}
