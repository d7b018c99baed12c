// SPDX-FileCopyrightText: 2026 postcal contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};

/// The name of the postcal application.
pub const APP_NAME: &str = "postcal";

/// File name of the single snapshot slot inside the data directory.
const SNAPSHOT_FILE: &str = "content.json";

/// Configuration for the postcal application.
#[derive(Debug, Default, Clone, serde::Deserialize)]
pub struct Config {
    /// Path to the snapshot file. Defaults to the platform data directory.
    #[serde(default)]
    pub data_path: Option<PathBuf>,

    /// Directory CSV exports are written to. Defaults to the working directory.
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

impl Config {
    /// Normalize the configuration, expanding `~` and filling defaults.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        match &self.data_path {
            Some(path) => self.data_path = Some(expand_path(path)?),
            None => match get_data_dir() {
                Ok(dir) => self.data_path = Some(dir.join(APP_NAME).join(SNAPSHOT_FILE)),
                Err(e) => tracing::warn!("failed to get data directory: {e}"),
            },
        }

        if let Some(dir) = &self.export_dir {
            self.export_dir = Some(expand_path(dir)?);
        }

        Ok(())
    }

    /// The snapshot path. Requires [`Config::normalize`] to have run unless
    /// `data_path` was set explicitly.
    pub fn snapshot_path(&self) -> Result<PathBuf, Box<dyn Error>> {
        self.data_path
            .clone()
            .ok_or_else(|| "No data path configured".into())
    }

    /// The directory CSV exports go to.
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Handle tilde (~) prefixes in the path
fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let s = path.to_str().ok_or("Invalid path")?;
    for prefix in ["~/", "$HOME/", "${HOME}/"] {
        if let Some(stripped) = s.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }
    Ok(path.to_owned())
}

fn get_home_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::home_dir().ok_or_else(|| "User-specific home directory not found".into())
}

fn get_data_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let data_dir = xdg::BaseDirectories::new().get_data_home();
    #[cfg(not(unix))]
    let data_dir = dirs::data_dir();
    data_dir.ok_or_else(|| "User-specific data directory not found".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_data_path_is_kept() {
        let mut config = Config {
            data_path: Some(PathBuf::from("/tmp/postcal/content.json")),
            export_dir: None,
        };
        config.normalize().unwrap();
        assert_eq!(
            config.snapshot_path().unwrap(),
            PathBuf::from("/tmp/postcal/content.json")
        );
    }

    #[test]
    fn tilde_paths_expand_to_home() {
        let expanded = expand_path(Path::new("~/postcal/content.json")).unwrap();
        assert!(expanded.is_absolute());
        assert!(expanded.ends_with("postcal/content.json"));
    }

    #[test]
    fn normalized_default_ends_with_snapshot_file() {
        let mut config = Config::default();
        config.normalize().unwrap();
        if let Some(path) = config.data_path {
            assert!(path.ends_with("postcal/content.json"));
        }
    }

    #[test]
    fn export_dir_defaults_to_cwd() {
        let config = Config::default();
        assert_eq!(config.export_dir(), PathBuf::from("."));
    }

    #[test]
    fn config_parses_from_toml() {
        let config: Config = toml::from_str(
            r#"
data_path = "/data/content.json"
export_dir = "/exports"
"#,
        )
        .unwrap();
        assert_eq!(config.data_path, Some(PathBuf::from("/data/content.json")));
        assert_eq!(config.export_dir, Some(PathBuf::from("/exports")));
    }
}
