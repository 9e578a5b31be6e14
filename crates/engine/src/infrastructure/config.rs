//! Application configuration

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Registry snapshot JSON file
    pub registry_path: PathBuf,
    /// Settings JSON file; built-in defaults apply when unset
    pub settings_path: Option<PathBuf>,
    /// Pretty-print the JSON report
    pub pretty: bool,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            registry_path: lookup("TOWNY_STATS_REGISTRY_PATH")
                .map(PathBuf::from)
                .context("TOWNY_STATS_REGISTRY_PATH environment variable is required")?,
            settings_path: lookup("TOWNY_STATS_SETTINGS_PATH")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            pretty: lookup("TOWNY_STATS_PRETTY")
                .unwrap_or_else(|| "true".to_string())
                .parse()
                .context("TOWNY_STATS_PRETTY must be true or false")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn registry_path_is_required() {
        let err = config(&[]).expect_err("missing registry path");
        assert!(err.to_string().contains("TOWNY_STATS_REGISTRY_PATH"));
    }

    #[test]
    fn defaults_apply() {
        let cfg = config(&[("TOWNY_STATS_REGISTRY_PATH", "registry.json")]).expect("config");
        assert_eq!(cfg.registry_path, PathBuf::from("registry.json"));
        assert_eq!(cfg.settings_path, None);
        assert!(cfg.pretty);
    }

    #[test]
    fn reads_all_variables() {
        let cfg = config(&[
            ("TOWNY_STATS_REGISTRY_PATH", "registry.json"),
            ("TOWNY_STATS_SETTINGS_PATH", "settings.json"),
            ("TOWNY_STATS_PRETTY", "false"),
        ])
        .expect("config");
        assert_eq!(cfg.settings_path, Some(PathBuf::from("settings.json")));
        assert!(!cfg.pretty);
    }

    #[test]
    fn invalid_pretty_flag_is_rejected() {
        let result = config(&[
            ("TOWNY_STATS_REGISTRY_PATH", "registry.json"),
            ("TOWNY_STATS_PRETTY", "sometimes"),
        ]);
        assert!(result.is_err());
    }
}
