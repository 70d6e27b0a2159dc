//! KDL configuration parsing for the Cloud Build config generator.
//!
//! This crate handles:
//! - The embedded default configuration
//! - Loading a replacement configuration file
//! - Validation of skip-list and extra-config entries

pub mod error;
pub mod generator;

pub use error::{ConfigError, ConfigResult};
pub use generator::{DEFAULT_CONFIG, GeneratorConfig, parse_generator_config};
