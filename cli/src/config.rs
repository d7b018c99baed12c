// SPDX-FileCopyrightText: 2026 postcal contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use postcal_core::{APP_NAME, Config as CoreConfig};

const POSTCAL_CONFIG_ENV: &str = "POSTCAL_CONFIG";

/// Resolve and parse the configuration file.
///
/// Resolution order: explicit `--config` path, then the `POSTCAL_CONFIG`
/// environment variable, then the platform config directory. Only an
/// explicitly named file is required to exist; without one the app runs on
/// defaults so that a first start needs no setup.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<CoreConfig, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(POSTCAL_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config file, using defaults");
            let mut config = CoreConfig::default();
            config.normalize()?;
            return Ok(config);
        }
        config
    };

    let mut config = fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()?
        .core;
    config.normalize()?;
    Ok(config)
}

#[derive(Debug, Default, serde::Deserialize)]
struct ConfigRaw {
    #[serde(default)]
    core: CoreConfig,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(not(unix))]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn explicit_path_is_parsed() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let toml_content = r#"
[core]
data_path = "/tmp/postcal-test/content.json"
export_dir = "/tmp/postcal-test/exports"
"#;
        fs::write(&config_path, toml_content).unwrap();

        let config = parse_config(Some(config_path)).await.unwrap();
        assert_eq!(
            config.data_path,
            Some(PathBuf::from("/tmp/postcal-test/content.json"))
        );
        assert_eq!(
            config.export_dir,
            Some(PathBuf::from("/tmp/postcal-test/exports"))
        );
    }

    #[tokio::test]
    async fn explicit_missing_path_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.toml");
        assert!(parse_config(Some(missing)).await.is_err());
    }

    #[tokio::test]
    async fn empty_config_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "").unwrap();

        let config = parse_config(Some(config_path)).await.unwrap();
        // normalize fills a default snapshot path on any platform with a data dir
        if let Some(path) = config.data_path {
            assert!(path.ends_with("postcal/content.json"));
        }
    }
}
