// crates/test-utils/src/lib.rs

//! Shared fixtures for the integration tests: a tracing bootstrap, a
//! timeout guard for async tests, config builders and fake collaborators.

pub mod builders;
pub mod fake_executor;

use std::sync::Once;
use std::time::Duration;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING: Once = Once::new();

/// Set up tracing once for the whole test binary.
///
/// Respects `RUST_LOG` when set, defaulting to `info`. Uses the test writer
/// so output only surfaces for failing tests.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .init();
    });
}

/// Bound an async test so a stuck executor fails fast instead of hanging
/// the suite.
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: std::future::Future<Output = T>,
{
    tokio::time::timeout(Duration::from_secs(5), f)
        .await
        .expect("test future did not finish within 5s")
}
