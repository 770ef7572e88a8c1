//! Opt-in experimental generator behaviors

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// A pre-release behavior that is off unless explicitly enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum FeatureFlag {
    /// Treat recoverable OpenAPI document issues as errors
    #[serde(rename = "strictOpenAPIValidation")]
    StrictOpenApiValidation,

    /// Generate closed enums and oneOf types without an undocumented case
    #[serde(rename = "closedEnumsAndOneOfs")]
    ClosedEnumsAndOneOfs,
}

impl FeatureFlag {
    pub fn as_str(self) -> &'static str {
        match self {
            FeatureFlag::StrictOpenApiValidation => "strictOpenAPIValidation",
            FeatureFlag::ClosedEnumsAndOneOfs => "closedEnumsAndOneOfs",
        }
    }

    pub fn all() -> &'static [FeatureFlag] {
        &[
            FeatureFlag::StrictOpenApiValidation,
            FeatureFlag::ClosedEnumsAndOneOfs,
        ]
    }
}

impl fmt::Display for FeatureFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureFlag {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeatureFlag::all()
            .iter()
            .copied()
            .find(|flag| flag.as_str() == s)
            .ok_or_else(|| ConfigError::UnrecognizedFeatureFlag(s.to_string()))
    }
}

impl TryFrom<String> for FeatureFlag {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Set of enabled feature flags. Empty by default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureFlags(BTreeSet<FeatureFlag>);

impl FeatureFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, flag: FeatureFlag) -> bool {
        self.0.contains(&flag)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = FeatureFlag> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<FeatureFlag> for FeatureFlags {
    fn from_iter<I: IntoIterator<Item = FeatureFlag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_flag_tokens() {
        for flag in FeatureFlag::all() {
            assert_eq!(flag.as_str().parse::<FeatureFlag>().unwrap(), *flag);
        }
        assert!(matches!(
            "proposal0001".parse::<FeatureFlag>(),
            Err(ConfigError::UnrecognizedFeatureFlag(_))
        ));
    }

    #[test]
    fn test_feature_flags_set() {
        let flags: FeatureFlags = [
            FeatureFlag::ClosedEnumsAndOneOfs,
            FeatureFlag::ClosedEnumsAndOneOfs,
        ]
        .into_iter()
        .collect();
        assert_eq!(flags.len(), 1);
        assert!(flags.contains(FeatureFlag::ClosedEnumsAndOneOfs));
        assert!(!flags.contains(FeatureFlag::StrictOpenApiValidation));
        assert!(FeatureFlags::new().is_empty());
    }

    #[test]
    fn test_feature_flags_serde() {
        let flags: FeatureFlags =
            serde_json::from_str(r#"["strictOpenAPIValidation"]"#).unwrap();
        assert!(flags.contains(FeatureFlag::StrictOpenApiValidation));
        assert_eq!(
            serde_json::to_string(&flags).unwrap(),
            r#"["strictOpenAPIValidation"]"#
        );
        assert!(serde_json::from_str::<FeatureFlags>(r#"["bogus"]"#).is_err());
    }
}
