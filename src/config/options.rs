//! Merging caller options with a project configuration file.
//!
//! Options passed directly by the caller (usually CLI flags) win over the
//! file, and the file wins over the defaults. The result is one
//! [`GenerationConfig`] per requested mode.

use tracing::{debug, info, warn};

use crate::config::{
    AccessModifier, ConfigError, FeatureFlag, FeatureFlags, GenerationConfig, GeneratorMode,
    NamingStrategy, Result, UserConfig,
};

/// Options supplied directly by the caller
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Modes to generate; empty defers to the config file
    pub modes: Vec<GeneratorMode>,

    pub access_modifier: Option<AccessModifier>,

    pub naming_strategy: Option<NamingStrategy>,

    /// Replaces the file's list when non-empty
    pub additional_imports: Vec<String>,

    /// Replaces the file's list when non-empty
    pub additional_file_comments: Vec<String>,

    /// Replaces the file's set when non-empty
    pub feature_flags: Vec<FeatureFlag>,
}

impl GenerateOptions {
    /// Build one configuration per mode from these options and an optional file
    pub fn resolve(&self, user_config: Option<&UserConfig>) -> Result<Vec<GenerationConfig>> {
        let modes = self.resolved_modes(user_config)?;
        let access = self.resolved_access_modifier(user_config);
        let naming_strategy = self.resolved_naming_strategy(user_config);
        let additional_imports = self.resolved_additional_imports(user_config);
        let additional_file_comments = self.resolved_additional_file_comments(user_config);
        let feature_flags = self.resolved_feature_flags(user_config);

        debug!(
            "Resolved access modifier {}, naming strategy {}",
            access, naming_strategy
        );

        let configs: Vec<GenerationConfig> = modes
            .into_iter()
            .map(|mode| {
                let mut builder = GenerationConfig::builder(mode, access, naming_strategy)
                    .additional_imports(additional_imports.iter().cloned())
                    .additional_file_comments(additional_file_comments.iter().cloned())
                    .feature_flags(feature_flags.clone());

                if let Some(user) = user_config {
                    if let Some(filter) = &user.filter {
                        builder = builder.filter(filter.clone());
                    }
                    if let Some(overrides) = &user.name_overrides {
                        builder = builder.name_overrides(overrides.clone());
                    }
                    if let Some(type_overrides) = &user.type_overrides {
                        builder = builder.type_overrides(type_overrides.clone());
                    }
                }

                builder.build()
            })
            .collect();

        info!("Resolved {} generation config(s)", configs.len());
        Ok(configs)
    }

    fn resolved_modes(&self, user_config: Option<&UserConfig>) -> Result<Vec<GeneratorMode>> {
        let requested: &[GeneratorMode] = if !self.modes.is_empty() {
            &self.modes
        } else {
            user_config.map(|c| c.generate.as_slice()).unwrap_or(&[])
        };

        let mut modes = Vec::with_capacity(requested.len());
        for &mode in requested {
            if modes.contains(&mode) {
                warn!("Ignoring duplicate generator mode '{}'", mode);
            } else {
                modes.push(mode);
            }
        }

        if modes.is_empty() {
            return Err(ConfigError::NoModes);
        }
        Ok(modes)
    }

    fn resolved_access_modifier(&self, user_config: Option<&UserConfig>) -> AccessModifier {
        self.access_modifier
            .or_else(|| user_config.and_then(|c| c.access_modifier))
            .unwrap_or(GenerationConfig::DEFAULT_ACCESS_MODIFIER)
    }

    fn resolved_naming_strategy(&self, user_config: Option<&UserConfig>) -> NamingStrategy {
        self.naming_strategy
            .or_else(|| user_config.and_then(|c| c.naming_strategy))
            .unwrap_or(GenerationConfig::DEFAULT_NAMING_STRATEGY)
    }

    fn resolved_additional_imports(&self, user_config: Option<&UserConfig>) -> Vec<String> {
        if !self.additional_imports.is_empty() {
            return self.additional_imports.clone();
        }
        user_config
            .and_then(|c| c.additional_imports.clone())
            .unwrap_or_default()
    }

    fn resolved_additional_file_comments(&self, user_config: Option<&UserConfig>) -> Vec<String> {
        if !self.additional_file_comments.is_empty() {
            return self.additional_file_comments.clone();
        }
        user_config
            .and_then(|c| c.additional_file_comments.clone())
            .unwrap_or_default()
    }

    fn resolved_feature_flags(&self, user_config: Option<&UserConfig>) -> FeatureFlags {
        if !self.feature_flags.is_empty() {
            return self.feature_flags.iter().copied().collect();
        }
        user_config
            .and_then(|c| c.feature_flags.as_ref())
            .map(|flags| flags.iter().copied().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DocumentFilter, TypeOverrides};
    use std::collections::BTreeMap;

    fn file_config() -> UserConfig {
        UserConfig {
            generate: vec![GeneratorMode::Types, GeneratorMode::Client],
            access_modifier: Some(AccessModifier::Package),
            additional_imports: Some(vec!["FromFile".to_string()]),
            additional_file_comments: Some(vec!["file comment".to_string()]),
            filter: Some(DocumentFilter {
                operations: vec!["listPets".to_string()],
                ..Default::default()
            }),
            naming_strategy: Some(NamingStrategy::Idiomatic),
            name_overrides: Some(BTreeMap::from([("Foo".to_string(), "Bar".to_string())])),
            type_overrides: Some(TypeOverrides::new([("UUID", "Foundation.UUID")])),
            feature_flags: Some(vec![FeatureFlag::StrictOpenApiValidation]),
        }
    }

    #[test]
    fn test_no_modes_anywhere_is_an_error() {
        let options = GenerateOptions::default();
        assert!(matches!(options.resolve(None), Err(ConfigError::NoModes)));
        assert!(matches!(
            options.resolve(Some(&UserConfig::default())),
            Err(ConfigError::NoModes)
        ));
    }

    #[test]
    fn test_defaults_without_file() {
        let options = GenerateOptions {
            modes: vec![GeneratorMode::Server],
            ..Default::default()
        };
        let configs = options.resolve(None).unwrap();

        assert_eq!(configs.len(), 1);
        assert_eq!(
            configs[0],
            GenerationConfig::new(
                GeneratorMode::Server,
                GenerationConfig::DEFAULT_ACCESS_MODIFIER,
                GenerationConfig::DEFAULT_NAMING_STRATEGY,
            )
        );
    }

    #[test]
    fn test_file_values_used_when_options_empty() {
        let user = file_config();
        let configs = GenerateOptions::default().resolve(Some(&user)).unwrap();

        assert_eq!(configs.len(), 2);
        assert_eq!(configs[0].mode(), GeneratorMode::Types);
        assert_eq!(configs[1].mode(), GeneratorMode::Client);
        for config in &configs {
            assert_eq!(config.access(), AccessModifier::Package);
            assert_eq!(config.naming_strategy(), NamingStrategy::Idiomatic);
            assert_eq!(config.additional_imports(), ["FromFile"]);
            assert_eq!(config.additional_file_comments(), ["file comment"]);
            assert_eq!(config.filter(), user.filter.as_ref());
            assert_eq!(config.name_override("Foo"), Some("Bar"));
            assert_eq!(
                config.type_overrides().type_name("UUID"),
                Some("Foundation.UUID")
            );
            assert!(config
                .feature_flags()
                .contains(FeatureFlag::StrictOpenApiValidation));
        }
    }

    #[test]
    fn test_options_override_file() {
        let user = file_config();
        let options = GenerateOptions {
            modes: vec![GeneratorMode::Server],
            access_modifier: Some(AccessModifier::Public),
            naming_strategy: Some(NamingStrategy::Defensive),
            additional_imports: vec!["B".to_string(), "A".to_string()],
            additional_file_comments: vec!["cli comment".to_string()],
            feature_flags: vec![FeatureFlag::ClosedEnumsAndOneOfs],
        };
        let configs = options.resolve(Some(&user)).unwrap();

        assert_eq!(configs.len(), 1);
        let config = &configs[0];
        assert_eq!(config.mode(), GeneratorMode::Server);
        assert_eq!(config.access(), AccessModifier::Public);
        assert_eq!(config.naming_strategy(), NamingStrategy::Defensive);
        assert_eq!(config.additional_imports(), ["B", "A"]);
        assert_eq!(config.additional_file_comments(), ["cli comment"]);
        assert!(config.feature_flags().contains(FeatureFlag::ClosedEnumsAndOneOfs));
        assert!(!config
            .feature_flags()
            .contains(FeatureFlag::StrictOpenApiValidation));
        // File-only settings still apply
        assert_eq!(config.name_override("Foo"), Some("Bar"));
    }

    #[test]
    fn test_duplicate_modes_keep_first_occurrence() {
        let options = GenerateOptions {
            modes: vec![
                GeneratorMode::Client,
                GeneratorMode::Types,
                GeneratorMode::Client,
            ],
            ..Default::default()
        };
        let modes: Vec<GeneratorMode> = options
            .resolve(None)
            .unwrap()
            .iter()
            .map(GenerationConfig::mode)
            .collect();
        assert_eq!(modes, vec![GeneratorMode::Client, GeneratorMode::Types]);
    }
}
