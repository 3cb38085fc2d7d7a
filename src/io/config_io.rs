use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::model::config::AppConfig;

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Read the config file at `path`. A missing file is not an error; the
/// defaults apply.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(AppConfig::default());
    }
    let text = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(toml::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("docket.toml")).unwrap();
        assert_eq!(config.list.page_size, 10);
        assert!(config.list.infinite);
        assert_eq!(config.list.load_threshold, 0.9);
    }

    #[test]
    fn test_full_config_parses() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("docket.toml");
        fs::write(
            &path,
            r##"[list]
page_size = 25
infinite = false
load_threshold = 0.5

[ui.colors]
selection = "#3a3a3a"
"##,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.list.page_size, 25);
        assert!(!config.list.infinite);
        assert_eq!(config.list.load_threshold, 0.5);
        assert_eq!(
            config.ui.colors.get("selection").map(String::as_str),
            Some("#3a3a3a")
        );
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("docket.toml");
        fs::write(&path, "[list]\npage_size = 5\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.list.page_size, 5);
        assert!(config.list.infinite);
        assert_eq!(config.list.load_threshold, 0.9);
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("docket.toml");
        fs::write(&path, "[list\npage_size = ").unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::Parse(_))));
    }
}
