//! Common test utilities and helpers

#![allow(dead_code)]

pub mod mock_transport;

use std::path::Path;
use std::sync::Arc;

use ramaris::Client;

/// Load a response fixture
pub fn load_response_fixture(name: &str) -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let path = Path::new(manifest_dir)
        .join("tests")
        .join("fixtures")
        .join("responses")
        .join(format!("{}.json", name));

    std::fs::read_to_string(&path).unwrap_or_else(|e| {
        panic!(
            "Failed to load response fixture '{}' from {:?}: {}",
            name, path, e
        )
    })
}

/// Route SDK logs to the test harness output (`RUST_LOG` to filter)
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ramaris=debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Create a test API key
pub fn test_api_key() -> String {
    "rms_test_0123456789abcdef".to_string()
}

/// Base URL used with the mock transport
pub const MOCK_BASE_URL: &str = "https://mock.ramaris.test/api/v1";

/// Client wired to a mock transport
pub fn client_with(transport: &mock_transport::MockTransport) -> Client {
    Client::builder()
        .api_key(test_api_key())
        .base_url(MOCK_BASE_URL)
        .transport(Arc::new(transport.clone()))
        .build()
        .expect("Failed to build client with mock transport")
}

/// Client pointed at a wiremock server
pub fn client_for_server(uri: &str) -> Client {
    Client::builder()
        .api_key(test_api_key())
        .base_url(uri)
        .build()
        .expect("Failed to build client for mock server")
}
