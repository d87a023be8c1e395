//! Shared helpers for integration tests.

use edge_config_sdk::{Client, ClientConfig};
use wiremock::MockServer;

pub const TEST_SERVICE_ID: &str = "SU1Z0isxPaozGVKXdv0eY";
pub const TEST_TOKEN: &str = "abcd1234";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Client pointed at a mock server.
pub fn client_for(server: &MockServer) -> Client {
    init_tracing();
    let config = ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::with_token(TEST_TOKEN)
    };
    Client::new(config).expect("client construction")
}

/// Client whose endpoint accepts no connections.
///
/// Used by validation tests: a required-field error must surface before any
/// request is attempted, so these calls never observe a transport error.
pub fn offline_client() -> Client {
    init_tracing();
    let config = ClientConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        ..ClientConfig::with_token(TEST_TOKEN)
    };
    Client::new(config).expect("client construction")
}
