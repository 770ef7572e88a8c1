//! Project configuration file (`openapi-generator-config.yaml` and friends).
//!
//! The file mirrors the fields of a
//! [`GenerationConfig`](crate::config::GenerationConfig), plus the list of
//! modes to generate. Every key is optional; missing keys are filled in when
//! the file is merged with caller options in [`crate::config::options`].
//!
//! ```yaml
//! generate:
//!   - types
//!   - client
//! accessModifier: public
//! namingStrategy: idiomatic
//! additionalImports:
//!   - Foundation
//! nameOverrides:
//!   pet_id: petID
//! typeOverrides:
//!   schemas:
//!     UUID: Foundation.UUID
//! featureFlags:
//!   - strictOpenAPIValidation
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{
    AccessModifier, ConfigError, DocumentFilter, FeatureFlag, GeneratorMode, NamingStrategy,
    Result, TypeOverrides,
};

/// Base name searched for by [`UserConfig::discover`]
pub const CONFIG_FILE_STEM: &str = "openapi-generator-config";

/// On-disk encodings of a [`UserConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

impl ConfigFormat {
    /// Extensions probed during discovery, in lookup order
    pub const EXTENSIONS: &'static [&'static str] = &["yaml", "yml", "json", "toml"];

    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
            Some("json") => Ok(ConfigFormat::Json),
            Some("toml") => Ok(ConfigFormat::Toml),
            _ => Err(ConfigError::UnsupportedConfigFormat(path.to_path_buf())),
        }
    }
}

/// Contents of a project configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserConfig {
    /// Modes to generate, one run each
    #[serde(default)]
    pub generate: Vec<GeneratorMode>,

    pub access_modifier: Option<AccessModifier>,

    pub additional_imports: Option<Vec<String>>,

    pub additional_file_comments: Option<Vec<String>>,

    pub filter: Option<DocumentFilter>,

    pub naming_strategy: Option<NamingStrategy>,

    pub name_overrides: Option<BTreeMap<String, String>>,

    pub type_overrides: Option<TypeOverrides>,

    pub feature_flags: Option<Vec<FeatureFlag>>,
}

impl UserConfig {
    /// Load a configuration file, choosing the decoder from its extension
    pub fn from_file(path: &Path) -> Result<Self> {
        let format = ConfigFormat::from_path(path)?;
        debug!("Loading generator config from {} as {:?}", path.display(), format);

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str_with_format(&content, format)
    }

    pub fn from_str_with_format(content: &str, format: ConfigFormat) -> Result<Self> {
        let config = match format {
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
            ConfigFormat::Json => serde_json::from_str(content)?,
            ConfigFormat::Toml => toml::from_str(content)?,
        };
        Ok(config)
    }

    /// Find the project configuration file in `dir`.
    ///
    /// Returns `Ok(None)` when no candidate exists. Finding more than one
    /// candidate is an error since it is ambiguous which one applies.
    pub fn discover(dir: &Path) -> Result<Option<PathBuf>> {
        let found: Vec<PathBuf> = ConfigFormat::EXTENSIONS
            .iter()
            .map(|ext| dir.join(format!("{CONFIG_FILE_STEM}.{ext}")))
            .filter(|candidate| candidate.is_file())
            .collect();

        debug!("Config discovery in {} found {:?}", dir.display(), found);

        match found.len() {
            0 => Ok(None),
            1 => Ok(found.into_iter().next()),
            _ => Err(ConfigError::MultipleConfigFiles(found)),
        }
    }
}
