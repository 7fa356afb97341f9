//! Shared test setup and fixtures for the panel integration tests.

pub mod fixtures;

/// Common test setup helper
#[allow(dead_code)]
pub fn setup_test_logging() {
	// Optional: initialize a tracing subscriber for test debugging
	let _ = tracing_subscriber::fmt()
		.with_test_writer()
		.with_max_level(tracing::Level::DEBUG)
		.try_init();
}
