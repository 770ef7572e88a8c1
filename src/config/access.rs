//! Access modifiers stamped on generated declarations

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Visibility level of generated declarations.
///
/// There is deliberately no `Default` implementation. Callers that want the
/// usual visibility pick
/// [`GenerationConfig::DEFAULT_ACCESS_MODIFIER`](crate::config::GenerationConfig::DEFAULT_ACCESS_MODIFIER).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum AccessModifier {
    /// Visible to any consumer of the generated module
    Public,
    /// Visible within the enclosing package
    Package,
    /// Visible within the generated module only
    Internal,
}

impl AccessModifier {
    /// Returns the keyword and persisted token for this modifier
    pub fn as_str(self) -> &'static str {
        match self {
            AccessModifier::Public => "public",
            AccessModifier::Package => "package",
            AccessModifier::Internal => "internal",
        }
    }

    pub fn all() -> &'static [AccessModifier] {
        &[
            AccessModifier::Public,
            AccessModifier::Package,
            AccessModifier::Internal,
        ]
    }
}

impl fmt::Display for AccessModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessModifier {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(AccessModifier::Public),
            "package" => Ok(AccessModifier::Package),
            "internal" => Ok(AccessModifier::Internal),
            _ => Err(ConfigError::UnrecognizedAccessModifier(s.to_string())),
        }
    }
}

impl TryFrom<String> for AccessModifier {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_modifier_tokens() {
        for modifier in AccessModifier::all() {
            assert_eq!(modifier.as_str().parse::<AccessModifier>().unwrap(), *modifier);
        }
        assert_eq!(AccessModifier::Package.to_string(), "package");
    }

    #[test]
    fn test_access_modifier_rejects_unknown() {
        let result = "private".parse::<AccessModifier>();
        assert!(matches!(
            result,
            Err(ConfigError::UnrecognizedAccessModifier(ref value)) if value == "private"
        ));
    }

    #[test]
    fn test_access_modifier_deserialize() {
        let modifier: AccessModifier = serde_json::from_str("\"public\"").unwrap();
        assert_eq!(modifier, AccessModifier::Public);
        assert!(serde_json::from_str::<AccessModifier>("\"open\"").is_err());
    }
}
