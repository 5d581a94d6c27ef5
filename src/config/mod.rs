//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML) or defaults
//!     → loader.rs (parse & deserialize)
//!     → environment overrides (APP_URL, TAG, LOG_API_BASE, LOG_API_PATH)
//!     → validation.rs (semantic checks)
//!     → RequestLogConfig (validated, immutable)
//!     → owned by RequestLogger, shared via Arc across requests
//! ```
//!
//! # Design Decisions
//! - Config is read once, at construction; no lookups per request
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{LoggingConfig, RequestLogConfig};
pub use validation::ValidationError;
