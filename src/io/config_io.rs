use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::config::AppConfig;

/// Default config filename, looked up in the working directory
pub const CONFIG_FILE: &str = "taskgrid.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Load configuration.
///
/// With an explicit `path`, the file must exist and parse. With none, the
/// default `taskgrid.toml` is read if present, and built-in defaults are
/// used otherwise.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    match path {
        Some(p) => read_config(p),
        None => {
            let default = Path::new(CONFIG_FILE);
            if default.exists() {
                read_config(default)
            } else {
                Ok(AppConfig::default())
            }
        }
    }
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::selection::SelectionMode;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample_config() -> &'static str {
        r##"[table]
rows = 6
selection = "single"

[seed]
projects = ["Orion", "Vega"]

[ui]
show_key_hints = false

[ui.colors]
background = "#000000"
"##
    }

    #[test]
    fn test_load_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("taskgrid.toml");
        fs::write(&path, sample_config()).unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.table.rows, 6);
        assert_eq!(config.table.selection, SelectionMode::Single);
        assert_eq!(config.seed.projects, vec!["Orion", "Vega"]);
        assert!(!config.ui.show_key_hints);
        assert_eq!(config.ui.colors.get("background").unwrap(), "#000000");
        // Unspecified sections keep defaults
        assert_eq!(config.seed.created_month, (2025, 1));
    }

    #[test]
    fn test_missing_explicit_path_errors() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope.toml");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_invalid_toml_errors() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("taskgrid.toml");
        fs::write(&path, "[table]\nrows = \"many\"\n").unwrap();
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
