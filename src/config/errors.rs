//! Error types for generator configuration
//!
//! Every failure in this module family is a decoding or loading failure:
//! building a [`GenerationConfig`](crate::config::GenerationConfig) from typed
//! values cannot fail.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while decoding or loading generator configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unrecognized naming strategy: '{0}'. Expected one of: defensive, idiomatic")]
    UnrecognizedNamingStrategy(String),

    #[error("Unrecognized generator mode: '{0}'. Expected one of: types, client, server")]
    UnrecognizedGeneratorMode(String),

    #[error("Unrecognized access modifier: '{0}'. Expected one of: public, package, internal")]
    UnrecognizedAccessModifier(String),

    #[error("Unrecognized feature flag: '{0}'")]
    UnrecognizedFeatureFlag(String),

    #[error("No generator modes specified. Pass --mode or list modes under 'generate'")]
    NoModes,

    #[error("Unsupported config file format: {}", .0.display())]
    UnsupportedConfigFormat(PathBuf),

    #[error("Multiple config files found: {}", display_paths(.0))]
    MultipleConfigFiles(Vec<PathBuf>),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_naming_strategy_display() {
        let error = ConfigError::UnrecognizedNamingStrategy("camel".to_string());
        let message = error.to_string();
        assert!(message.contains("Unrecognized naming strategy: 'camel'"));
        assert!(message.contains("defensive, idiomatic"));
    }

    #[test]
    fn test_multiple_config_files_display() {
        let error = ConfigError::MultipleConfigFiles(vec![
            PathBuf::from("a/openapi-generator-config.yaml"),
            PathBuf::from("a/openapi-generator-config.json"),
        ]);
        assert_eq!(
            error.to_string(),
            "Multiple config files found: a/openapi-generator-config.yaml, a/openapi-generator-config.json"
        );
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error as _;

        let error = ConfigError::Io {
            path: PathBuf::from("missing.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(error.to_string().starts_with("Failed to read missing.yaml"));
        assert!(error.source().is_some());
    }
}
