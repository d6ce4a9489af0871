//! Configuration for the Extractor

use serde::{Deserialize, Serialize};

/// What to do when a field's address resolves to no node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingFieldPolicy {
    /// Abort the whole extraction with `NodeNotFound`
    Fail,
    /// Leave the field (or an object's whole subtree) out of the result; a
    /// list with no repetitions becomes an empty array
    Skip,
}

impl Default for MissingFieldPolicy {
    fn default() -> Self {
        MissingFieldPolicy::Fail
    }
}

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Maximum input document length (bytes)
    pub max_document_length: usize,

    /// Maximum repetitions collected for a single list
    pub max_list_items: usize,

    /// End a list at the first sibling whose tag differs from the first item's
    pub match_sibling_tag: bool,

    /// Trim surrounding whitespace from extracted values
    pub trim_values: bool,

    /// Policy for fields whose node cannot be found
    pub missing_field: MissingFieldPolicy,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_document_length == 0 {
            return Err("max_document_length must be greater than 0".to_string());
        }
        if self.max_list_items == 0 {
            return Err("max_list_items must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    /// Strict configuration: any missing field fails the extraction
    fn default() -> Self {
        Self {
            max_document_length: 10 * 1024 * 1024,
            max_list_items: 10_000,
            match_sibling_tag: true,
            trim_values: true,
            missing_field: MissingFieldPolicy::Fail,
        }
    }
}

impl ExtractorConfig {
    /// Lenient preset: missing fields are skipped instead of failing
    pub fn lenient() -> Self {
        Self {
            missing_field: MissingFieldPolicy::Skip,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExtractorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.missing_field, MissingFieldPolicy::Fail);
    }

    #[test]
    fn test_lenient_config_is_valid() {
        let config = ExtractorConfig::lenient();
        assert!(config.validate().is_ok());
        assert_eq!(config.missing_field, MissingFieldPolicy::Skip);
    }

    #[test]
    fn test_invalid_max_list_items() {
        let mut config = ExtractorConfig::default();
        config.max_list_items = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_max_document_length() {
        let mut config = ExtractorConfig::default();
        config.max_document_length = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ExtractorConfig::from_toml("missing_field = \"skip\"\nmax_list_items = 5\n").unwrap();

        assert_eq!(config.missing_field, MissingFieldPolicy::Skip);
        assert_eq!(config.max_list_items, 5);
        assert!(config.trim_values);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ExtractorConfig::lenient();
        let toml_str = config.to_toml().unwrap();
        let parsed = ExtractorConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config, parsed);
    }

    #[test]
    fn test_invalid_policy_is_rejected() {
        assert!(ExtractorConfig::from_toml("missing_field = \"guess\"").is_err());
    }
}
