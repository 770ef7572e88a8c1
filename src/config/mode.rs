//! Generator modes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// The kind of artifact a single generation run produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum GeneratorMode {
    /// Shared types for requests, responses and component schemas
    Types,
    /// Client that performs the documented operations
    Client,
    /// Server stubs that dispatch the documented operations
    Server,
}

impl GeneratorMode {
    pub fn as_str(self) -> &'static str {
        match self {
            GeneratorMode::Types => "types",
            GeneratorMode::Client => "client",
            GeneratorMode::Server => "server",
        }
    }

    /// All modes in canonical generation order
    pub fn all() -> &'static [GeneratorMode] {
        &[
            GeneratorMode::Types,
            GeneratorMode::Client,
            GeneratorMode::Server,
        ]
    }
}

impl fmt::Display for GeneratorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeneratorMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "types" => Ok(GeneratorMode::Types),
            "client" => Ok(GeneratorMode::Client),
            "server" => Ok(GeneratorMode::Server),
            _ => Err(ConfigError::UnrecognizedGeneratorMode(s.to_string())),
        }
    }
}

impl TryFrom<String> for GeneratorMode {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
