//! Validation configuration for vetted.
//!
//! This module defines the `ValidationConfig` value passed into every
//! validation call. It can be built in code or loaded from a YAML file
//! (unknown fields are ignored), has defaults for every field, and is
//! validated before an engine accepts it.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::ValidationConfig;
