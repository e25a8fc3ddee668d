//! Shopfront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SHOPFRONT_CATALOG_FILE` - YAML catalog to sell instead of the built-in items
//! - `SHOPFRONT_OUTPUT` - `text` or `json` (default: text)
//! - `SHOPFRONT_CURRENCY_SYMBOL` - Prefix for displayed prices (default: $)
//! - `RUST_LOG` - Log filter (default: `shopfront_cli=info,shopfront_core=info`)
//!
//! Command-line flags take precedence over the environment.

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// How the screen writes updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable cards.
    #[default]
    Text,
    /// One JSON object per notification.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("expected `text` or `json`, got `{s}`")),
        }
    }
}

/// Terminal storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Catalog file to load; the built-in catalog is used when unset
    pub catalog_file: Option<PathBuf>,
    /// Output mode
    pub output: OutputFormat,
    /// Symbol printed before prices
    pub currency_symbol: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            catalog_file: None,
            output: OutputFormat::Text,
            currency_symbol: "$".to_string(),
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let catalog_file = get_optional_env(&lookup, "SHOPFRONT_CATALOG_FILE").map(PathBuf::from);
        let output = get_env_or_default(&lookup, "SHOPFRONT_OUTPUT", "text")
            .parse::<OutputFormat>()
            .map_err(|e| ConfigError::InvalidEnvVar("SHOPFRONT_OUTPUT".to_string(), e))?;
        let currency_symbol = get_env_or_default(&lookup, "SHOPFRONT_CURRENCY_SYMBOL", "$");

        Ok(Self {
            catalog_file,
            output,
            currency_symbol,
        })
    }

    /// Apply command-line overrides on top of the environment.
    #[must_use]
    pub fn with_overrides(
        mut self,
        catalog_file: Option<PathBuf>,
        output: Option<OutputFormat>,
        currency_symbol: Option<String>,
    ) -> Self {
        if let Some(path) = catalog_file {
            self.catalog_file = Some(path);
        }
        if let Some(output) = output {
            self.output = output;
        }
        if let Some(symbol) = currency_symbol {
            self.currency_symbol = symbol;
        }
        self
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional variable; empty values count as unset.
fn get_optional_env(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).filter(|value| !value.is_empty())
}

/// Get a variable with a default value.
fn get_env_or_default(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> String {
    get_optional_env(lookup, key).unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_reads_all_variables() {
        let config = CliConfig::from_lookup(lookup(&[
            ("SHOPFRONT_CATALOG_FILE", "catalog.yaml"),
            ("SHOPFRONT_OUTPUT", "JSON"),
            ("SHOPFRONT_CURRENCY_SYMBOL", "€"),
        ]))
        .unwrap();

        assert_eq!(config.catalog_file, Some(PathBuf::from("catalog.yaml")));
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.currency_symbol, "€");
    }

    #[test]
    fn test_empty_values_use_defaults() {
        let config = CliConfig::from_lookup(lookup(&[
            ("SHOPFRONT_CATALOG_FILE", ""),
            ("SHOPFRONT_CURRENCY_SYMBOL", ""),
        ]))
        .unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_invalid_output() {
        let result = CliConfig::from_lookup(lookup(&[("SHOPFRONT_OUTPUT", "xml")]));
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(key, _)) if key == "SHOPFRONT_OUTPUT"));
    }

    #[test]
    fn test_overrides_win() {
        let config = CliConfig::default().with_overrides(
            Some(PathBuf::from("other.yaml")),
            Some(OutputFormat::Json),
            None,
        );
        assert_eq!(config.catalog_file, Some(PathBuf::from("other.yaml")));
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.currency_symbol, "$");
    }
}
