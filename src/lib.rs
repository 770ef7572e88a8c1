//! OpenAPI Generator Configuration
//!
//! This library defines the configuration contract for one run of an
//! OpenAPI-to-source generation pipeline: which artifact to produce, with
//! what visibility, extra imports and comments, document filter, naming
//! rules and experimental features.
#![deny(unsafe_code)]

pub mod config;

pub use config::{ConfigError, GenerationConfig, NamingStrategy};
