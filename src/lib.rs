//! Typed async client for the edge service configuration API.
//!
//! Each resource family maps to a versioned sub-resource path; operations
//! validate required identifiers client-side, then delegate to the HTTP
//! transport in [`client`].

pub mod client;
pub mod config;
pub mod error;
pub mod logging;

pub use client::Client;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use logging::loggly::{
    CreateLoggly, DeleteLogglyParams, GetLogglyParams, ListLogglyParams, Loggly, UpdateLoggly,
};
