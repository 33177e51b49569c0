use std::path::Path;

use anyhow::{Context, Result};
use qkit_core::TimezoneSpec;
use serde::Deserialize;

/// Top-level QKit configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct QkitConfig {
    /// Defaults applied when a flag is not given.
    #[serde(default)]
    pub defaults: DefaultsToml,
}

/// The `[defaults]` table.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsToml {
    /// Timezone for `today`, `add` and `clock`: `local`, `UTC`, or `UTC±H`.
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for DefaultsToml {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
        }
    }
}

fn default_timezone() -> String {
    "local".to_string()
}

impl QkitConfig {
    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }

    /// The configured default timezone.
    pub fn timezone(&self) -> Result<TimezoneSpec> {
        self.defaults
            .timezone
            .parse()
            .context("invalid [defaults] timezone in config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: QkitConfig = toml::from_str("").unwrap();
        assert_eq!(config.timezone().unwrap(), TimezoneSpec::Local);
    }

    #[test]
    fn test_defaults_table_accepts_each_timezone_form() {
        let config: QkitConfig = toml::from_str("[defaults]\n").unwrap();
        assert_eq!(config.timezone().unwrap(), TimezoneSpec::Local);
        for (value, expected) in [
            ("local", TimezoneSpec::Local),
            ("UTC", TimezoneSpec::Utc),
            ("UTC-5", TimezoneSpec::fixed(-5).unwrap()),
        ] {
            let config: QkitConfig =
                toml::from_str(&format!("[defaults]\ntimezone = \"{value}\"\n")).unwrap();
            assert_eq!(config.timezone().unwrap(), expected, "{value}");
        }
    }

    #[test]
    fn test_timezone_from_config() {
        let config: QkitConfig = toml::from_str("[defaults]\ntimezone = \"UTC+9\"\n").unwrap();
        assert_eq!(config.timezone().unwrap(), TimezoneSpec::fixed(9).unwrap());
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result: Result<QkitConfig, _> = toml::from_str("[defaults]\ntz = \"UTC\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_timezone_reported() {
        let config: QkitConfig = toml::from_str("[defaults]\ntimezone = \"Asia/Seoul\"\n").unwrap();
        let err = format!("{:#}", config.timezone().unwrap_err());
        assert!(err.contains("Invalid timezone"), "got: {err}");
    }
}
