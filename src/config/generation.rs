//! Configuration for a single run of the generator pipeline.
//!
//! A run produces exactly one artifact, so generating types, a client and a
//! server takes three [`GenerationConfig`] values, each with its own
//! [`GeneratorMode`].
//!
//! The mode, access modifier and naming strategy must always be chosen by
//! the caller. Everything else defaults to "nothing extra":
//!
//! ```
//! use openapi_gen::config::{AccessModifier, GenerationConfig, GeneratorMode};
//!
//! let config = GenerationConfig::builder(
//!     GeneratorMode::Client,
//!     AccessModifier::Public,
//!     GenerationConfig::DEFAULT_NAMING_STRATEGY,
//! )
//! .additional_imports(["Foundation", "HTTPTypes"])
//! .name_overrides([("pet_id", "petID")])
//! .build();
//!
//! assert_eq!(config.additional_imports(), ["Foundation", "HTTPTypes"]);
//! assert_eq!(config.name_override("pet_id"), Some("petID"));
//! assert!(config.filter().is_none());
//! ```

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::{
    AccessModifier, DocumentFilter, FeatureFlags, GeneratorMode, IdentifierNamer, NamingStrategy,
    TypeOverrides,
};

/// Immutable set of options for one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    mode: GeneratorMode,
    access: AccessModifier,
    additional_imports: Vec<String>,
    additional_file_comments: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<DocumentFilter>,
    naming_strategy: NamingStrategy,
    name_overrides: BTreeMap<String, String>,
    type_overrides: TypeOverrides,
    feature_flags: FeatureFlags,
}

impl GenerationConfig {
    /// The access modifier callers may opt into when they have no preference
    pub const DEFAULT_ACCESS_MODIFIER: AccessModifier = AccessModifier::Internal;

    /// The naming strategy callers may opt into when they have no preference
    pub const DEFAULT_NAMING_STRATEGY: NamingStrategy = NamingStrategy::Defensive;

    /// Configuration with every optional field at its default
    pub fn new(
        mode: GeneratorMode,
        access: AccessModifier,
        naming_strategy: NamingStrategy,
    ) -> Self {
        Self::builder(mode, access, naming_strategy).build()
    }

    pub fn builder(
        mode: GeneratorMode,
        access: AccessModifier,
        naming_strategy: NamingStrategy,
    ) -> GenerationConfigBuilder {
        GenerationConfigBuilder::new(mode, access, naming_strategy)
    }

    pub fn mode(&self) -> GeneratorMode {
        self.mode
    }

    pub fn access(&self) -> AccessModifier {
        self.access
    }

    /// Imports emitted verbatim, in order, into the generated file
    pub fn additional_imports(&self) -> &[String] {
        &self.additional_imports
    }

    /// Comments emitted verbatim, in order, at the top of the generated file
    pub fn additional_file_comments(&self) -> &[String] {
        &self.additional_file_comments
    }

    /// `None` means the whole document is considered
    pub fn filter(&self) -> Option<&DocumentFilter> {
        self.filter.as_ref()
    }

    pub fn naming_strategy(&self) -> NamingStrategy {
        self.naming_strategy
    }

    pub fn name_overrides(&self) -> &BTreeMap<String, String> {
        &self.name_overrides
    }

    pub fn name_override(&self, identifier: &str) -> Option<&str> {
        self.name_overrides.get(identifier).map(String::as_str)
    }

    pub fn type_overrides(&self) -> &TypeOverrides {
        &self.type_overrides
    }

    pub fn feature_flags(&self) -> &FeatureFlags {
        &self.feature_flags
    }

    /// Derive the output identifier for an OpenAPI identifier.
    ///
    /// A name override is substituted exactly and the namer is not consulted.
    /// Identifiers without an override go through `namer` under the
    /// configured naming strategy.
    pub fn resolve_identifier<N>(&self, identifier: &str, namer: &N) -> String
    where
        N: IdentifierNamer + ?Sized,
    {
        match self.name_override(identifier) {
            Some(name) => name.to_string(),
            None => namer.name(identifier, self.naming_strategy),
        }
    }
}

/// Builder for GenerationConfig (Value Object Builder Pattern)
///
/// The three values every run must decide are taken up front. Optional
/// fields may be set in any order; setting one twice keeps the last value.
#[derive(Debug, Clone)]
pub struct GenerationConfigBuilder {
    mode: GeneratorMode,
    access: AccessModifier,
    naming_strategy: NamingStrategy,
    additional_imports: Vec<String>,
    additional_file_comments: Vec<String>,
    filter: Option<DocumentFilter>,
    name_overrides: BTreeMap<String, String>,
    type_overrides: TypeOverrides,
    feature_flags: FeatureFlags,
}

impl GenerationConfigBuilder {
    pub fn new(
        mode: GeneratorMode,
        access: AccessModifier,
        naming_strategy: NamingStrategy,
    ) -> Self {
        Self {
            mode,
            access,
            naming_strategy,
            additional_imports: Vec::new(),
            additional_file_comments: Vec::new(),
            filter: None,
            name_overrides: BTreeMap::new(),
            type_overrides: TypeOverrides::default(),
            feature_flags: FeatureFlags::default(),
        }
    }

    pub fn additional_imports<I, S>(mut self, imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.additional_imports = imports.into_iter().map(Into::into).collect();
        self
    }

    pub fn additional_file_comments<I, S>(mut self, comments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.additional_file_comments = comments.into_iter().map(Into::into).collect();
        self
    }

    pub fn filter(mut self, filter: DocumentFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Exact identifier substitutions. A repeated key keeps its last value.
    pub fn name_overrides<I, K, V>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.name_overrides = overrides
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    pub fn type_overrides(mut self, type_overrides: TypeOverrides) -> Self {
        self.type_overrides = type_overrides;
        self
    }

    pub fn feature_flags(mut self, feature_flags: FeatureFlags) -> Self {
        self.feature_flags = feature_flags;
        self
    }

    pub fn build(self) -> GenerationConfig {
        GenerationConfig {
            mode: self.mode,
            access: self.access,
            additional_imports: self.additional_imports,
            additional_file_comments: self.additional_file_comments,
            filter: self.filter,
            naming_strategy: self.naming_strategy,
            name_overrides: self.name_overrides,
            type_overrides: self.type_overrides,
            feature_flags: self.feature_flags,
        }
    }
}
