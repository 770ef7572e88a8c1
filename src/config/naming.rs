//! Naming strategies for deriving output identifiers from OpenAPI identifiers.
//!
//! A [`NamingStrategy`] carries no behavior of its own. It selects which
//! algorithm the identifier-naming stage applies to names that are not
//! covered by an explicit name override.
//!
//! # Examples
//!
//! ```
//! use openapi_gen::config::NamingStrategy;
//! use std::str::FromStr;
//!
//! let strategy = NamingStrategy::from_str("idiomatic").unwrap();
//! assert_eq!(strategy, NamingStrategy::Idiomatic);
//! assert_eq!(strategy.as_str(), "idiomatic");
//!
//! assert!(NamingStrategy::from_str("camelCase").is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// A strategy for turning OpenAPI identifiers into output-language identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum NamingStrategy {
    /// Handles any OpenAPI identifier and always produces a valid,
    /// non-conflicting identifier, at the cost of idiomatic names.
    Defensive,

    /// Produces identifiers that follow output-language conventions, with a
    /// narrower collision-freedom guarantee.
    Idiomatic,
}

impl NamingStrategy {
    /// Returns the persisted token for this strategy
    pub fn as_str(self) -> &'static str {
        match self {
            NamingStrategy::Defensive => "defensive",
            NamingStrategy::Idiomatic => "idiomatic",
        }
    }

    /// Get all available strategies
    pub fn all() -> &'static [NamingStrategy] {
        &[NamingStrategy::Defensive, NamingStrategy::Idiomatic]
    }
}

impl fmt::Display for NamingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NamingStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "defensive" => Ok(NamingStrategy::Defensive),
            "idiomatic" => Ok(NamingStrategy::Idiomatic),
            _ => Err(ConfigError::UnrecognizedNamingStrategy(s.to_string())),
        }
    }
}

impl TryFrom<String> for NamingStrategy {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
