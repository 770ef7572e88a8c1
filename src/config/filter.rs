//! Document filter selecting which parts of an OpenAPI document to generate.
//!
//! The filter is carried opaquely: the document-loading stage decides how
//! the selections are applied. An absent filter on a
//! [`GenerationConfig`](crate::config::GenerationConfig) means the whole
//! document is considered.

use serde::{Deserialize, Serialize};

/// Selection of operations, tags, paths and schemas to keep
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFilter {
    /// Operation ids to include
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub operations: Vec<String>,

    /// Tags whose operations are included
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Path templates whose operations are included
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<String>,

    /// Component schema names to include
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schemas: Vec<String>,
}

impl DocumentFilter {
    /// Returns true when no selection list has any entry
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
            && self.tags.is_empty()
            && self.paths.is_empty()
            && self.schemas.is_empty()
    }
}
