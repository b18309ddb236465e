//! Configuration for the filter and processor subsystem.
//!
//! These are the schema-level switches a deployment tunes: which keys the
//! interceptors bind, where the quick-select key stays literal, and which
//! optional features are on. Values come from opaque external
//! configuration; TOML round-tripping is provided for hosts that keep
//! their settings in files.

use crate::error::SetupError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Key that picks the best second choice (and acts as a literal input
    /// character inside the excluded prefixes)
    pub quick_select_key: char,

    /// Code prefixes in which the quick-select key is ordinary input
    pub quick_select_literal_prefixes: Vec<String>,

    /// Ctrl+this forces a re-split of the active syllable run
    pub resegment_key: char,

    /// Ctrl+either of these toggles the auxiliary-code steal/return
    /// (two keys, one handler)
    pub steal_keys: String,

    /// Append the shorthand-expansion interceptor to the chain
    pub enable_shorthand: bool,

    /// Segment tag marking English lookups
    pub english_tag: String,

    /// Candidates per menu page
    pub page_size: usize,

    /// Schema debug switch; subscribers decide what to do with it
    pub debug_trace: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quick_select_key: '/',
            // "o" prefixes take "/" as a literal stroke code
            quick_select_literal_prefixes: vec!["o".to_string()],
            resegment_key: 'r',
            steal_keys: "jk".to_string(),
            enable_shorthand: false,
            english_tag: "english".to_string(),
            page_size: 5,
            debug_trace: false,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self, SetupError> {
        let content = std::fs::read_to_string(path).map_err(|e| SetupError::Config(e.to_string()))?;
        toml::from_str(&content).map_err(|e| SetupError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), SetupError> {
        let content = toml::to_string_pretty(self).map_err(|e| SetupError::Config(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SetupError::Config(e.to_string()))
    }

    /// Load configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.quick_select_key, '/');
        assert_eq!(config.steal_keys, "jk");
        assert!(!config.enable_shorthand);
        assert_eq!(config.page_size, 5);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = Config::default();
        config.enable_shorthand = true;
        config.quick_select_literal_prefixes = vec!["o".into(), "u".into()];

        let text = config.to_toml_string().unwrap();
        let back = Config::from_toml_str(&text).unwrap();
        assert!(back.enable_shorthand);
        assert_eq!(back.quick_select_literal_prefixes.len(), 2);
        assert_eq!(back.resegment_key, 'r');
    }

    #[test]
    fn test_partial_toml_rejected() {
        // Missing fields are an error, not silently defaulted
        assert!(Config::from_toml_str("page_size = 9").is_err());
    }
}
