//! Process configuration and JSON config-file loading.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

/// Errors loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config document is not valid JSON for the expected shape
    #[error("invalid JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// A fixed-width column range is empty or reversed
    #[error("invalid column range for {field}: {start}..{end}")]
    InvalidRange {
        field: &'static str,
        start: usize,
        end: usize,
    },

    /// An environment variable has an unusable value
    #[error("invalid value for {name}: {value:?}")]
    InvalidEnv { name: &'static str, value: String },
}

/// Deserialize a JSON config document.
///
/// `origin` names the document in error messages.
pub fn parse_json<T: DeserializeOwned>(text: &str, origin: &str) -> Result<T, ConfigError> {
    serde_json::from_str(text).map_err(|source| ConfigError::Json {
        origin: origin.to_string(),
        source,
    })
}

/// Read and deserialize a JSON config file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_json(&text, &path.display().to_string())
}

/// Environment-driven settings for the server binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Port to listen on.
    pub port: u16,

    /// Decoder layout JSON; the built-in layout is used when absent.
    pub layout_path: Option<PathBuf>,

    /// Airline/airport name directory JSON; names are omitted when absent.
    pub names_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Read `PORT`, `SSIM_LAYOUT` and `SSIM_NAMES` from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(value) => match value.trim().parse() {
                Ok(port) => port,
                Err(_) => return Err(ConfigError::InvalidEnv { name: "PORT", value }),
            },
            None => defaults.port,
        };

        let path = |name: &str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
        };

        Ok(Self {
            port,
            layout_path: path("SSIM_LAYOUT"),
            names_path: path("SSIM_NAMES"),
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            layout_path: None,
            names_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn default_config() {
        let config = ServerConfig::default();

        assert_eq!(config.port, 3000);
        assert!(config.layout_path.is_none());
        assert!(config.names_path.is_none());
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn reads_all_variables() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("SSIM_LAYOUT", "/etc/ssim/layout.json"),
            ("SSIM_NAMES", "/etc/ssim/names.json"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(
            config.layout_path,
            Some(PathBuf::from("/etc/ssim/layout.json"))
        );
        assert_eq!(config.names_path, Some(PathBuf::from("/etc/ssim/names.json")));
    }

    #[test]
    fn blank_paths_are_ignored() {
        let config = ServerConfig::from_lookup(lookup(&[("SSIM_LAYOUT", "  ")])).unwrap();
        assert!(config.layout_path.is_none());
    }

    #[test]
    fn invalid_port_is_an_error() {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { name: "PORT", .. }));
        assert_eq!(err.to_string(), "invalid value for PORT: \"http\"");
    }

    #[test]
    fn parse_json_reports_origin() {
        let err = parse_json::<HashMap<String, String>>("{not json", "layout.json").unwrap_err();
        assert!(err.to_string().starts_with("invalid JSON in layout.json"));
    }

    #[test]
    fn read_json_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = read_json::<HashMap<String, String>>(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }
}
