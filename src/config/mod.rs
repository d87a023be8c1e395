//! Client configuration subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML) or process environment
//!     → loader.rs (parse & deserialize)
//!     → validate_config (semantic checks)
//!     → ClientConfig (validated, immutable)
//!     → consumed by Client::new
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; a new Client is built for new settings
//! - All fields except the API token have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::ClientConfig;
