use std::sync::Once;

use solid_web::SolidClient;

static TRACING_INIT: Once = Once::new();

/// Initializes the tracing subscriber for tests.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(std::env::var("TRACING").unwrap_or_else(|_| "info".to_string()))
            // Use with_test_writer to ensure logs are captured correctly by the test runner.
            .with_test_writer()
            .init();
    });
}

/// A client with default settings and tracing enabled.
pub fn client() -> SolidClient {
    init_tracing();
    SolidClient::new().unwrap()
}
