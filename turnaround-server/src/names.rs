//! Airport and airline display names.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::config::{ConfigError, parse_json, read_json};
use crate::domain::AirportCode;

/// On-disk shape of a name directory.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct NamesFile {
    airports: HashMap<String, String>,
    airlines: HashMap<String, String>,
}

/// Read-only code → name lookup.
///
/// Built once at startup and handed to whatever needs it.
#[derive(Debug, Clone, Default)]
pub struct NameDirectory {
    airports: HashMap<AirportCode, String>,
    airlines: HashMap<String, String>,
}

impl NameDirectory {
    /// A directory that knows no names.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a `{ "airports": {..}, "airlines": {..} }` document.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        parse_json::<NamesFile>(text, "name directory").map(Self::from_file)
    }

    /// Load a name directory from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        read_json::<NamesFile>(path).map(Self::from_file)
    }

    fn from_file(file: NamesFile) -> Self {
        // Codes may arrive lowercase; entries with blank codes are dropped
        let airports = file
            .airports
            .into_iter()
            .filter_map(|(code, name)| AirportCode::parse(&code.to_uppercase()).map(|c| (c, name)))
            .collect();

        let airlines = file
            .airlines
            .into_iter()
            .map(|(code, name)| (code.trim().to_uppercase(), name))
            .filter(|(code, _)| !code.is_empty())
            .collect();

        Self { airports, airlines }
    }

    pub fn airport(&self, code: &AirportCode) -> Option<&str> {
        self.airports.get(code).map(String::as_str)
    }

    pub fn airline(&self, code: &str) -> Option<&str> {
        self.airlines.get(code.trim()).map(String::as_str)
    }

    /// Total number of known names.
    pub fn len(&self) -> usize {
        self.airports.len() + self.airlines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
