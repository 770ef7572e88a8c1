//! Port interface for the identifier-naming stage

use crate::config::NamingStrategy;

/// Derives an output-language identifier from an OpenAPI identifier.
///
/// Implemented by the naming stage of the pipeline. Name overrides are
/// applied before a namer is consulted; see
/// [`GenerationConfig::resolve_identifier`](crate::config::GenerationConfig::resolve_identifier).
pub trait IdentifierNamer {
    fn name(&self, identifier: &str, strategy: NamingStrategy) -> String;
}

impl<F> IdentifierNamer for F
where
    F: Fn(&str, NamingStrategy) -> String,
{
    fn name(&self, identifier: &str, strategy: NamingStrategy) -> String {
        self(identifier, strategy)
    }
}
