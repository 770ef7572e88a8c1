//! Generator configuration
//!
//! This module defines [`GenerationConfig`], the value that controls a single
//! generation run, together with the leaf types it carries and the loading
//! and merging of project configuration files.

pub mod access;
pub mod errors;
pub mod features;
pub mod filter;
pub mod generation;
pub mod mode;
pub mod naming;
pub mod options;
pub mod overrides;
pub mod resolve;
pub mod user;

pub use access::AccessModifier;
pub use errors::{ConfigError, Result};
pub use features::{FeatureFlag, FeatureFlags};
pub use filter::DocumentFilter;
pub use generation::{GenerationConfig, GenerationConfigBuilder};
pub use mode::GeneratorMode;
pub use naming::NamingStrategy;
pub use options::GenerateOptions;
pub use overrides::TypeOverrides;
pub use resolve::IdentifierNamer;
pub use user::{ConfigFormat, UserConfig};
