//! Type overrides mapping OpenAPI schema names to caller-chosen type names

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Caller-supplied replacements for generated schema types
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeOverrides {
    /// Schema name to replacement type name
    #[serde(default)]
    pub schemas: BTreeMap<String, String>,
}

impl TypeOverrides {
    pub fn new<I, K, V>(schemas: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            schemas: schemas
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Look up the replacement type name for a schema
    pub fn type_name(&self, schema: &str) -> Option<&str> {
        self.schemas.get(schema).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_overrides_lookup() {
        let overrides = TypeOverrides::new([("UUID", "Foundation.UUID")]);
        assert_eq!(overrides.type_name("UUID"), Some("Foundation.UUID"));
        assert_eq!(overrides.type_name("Pet"), None);
        assert!(!overrides.is_empty());
        assert!(TypeOverrides::default().is_empty());
    }
}
