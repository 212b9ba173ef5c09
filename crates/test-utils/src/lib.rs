//! Shared helpers for the `cssdts` integration tests.

pub mod builders;
pub mod fake_generator;

use std::future::Future;
use std::sync::Once;
use std::time::Duration;

use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// How long [`with_timeout`] waits. Live watcher tests poll inside it, so
/// it has to cover notify's delivery latency on a loaded machine.
pub const TEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Install a test-writer subscriber once per test binary.
///
/// Filters with `CSSDTS_LOG` (same variable the binary reads), defaulting
/// to `cssdts=debug` so failing tests show skipped and swallowed events.
/// Output only appears for failing tests unless run with `--nocapture`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("CSSDTS_LOG")
            .unwrap_or_else(|_| EnvFilter::new("warn,cssdts=debug"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

/// Fail the test if `f` does not finish within [`TEST_TIMEOUT`].
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: Future<Output = T>,
{
    tokio::time::timeout(TEST_TIMEOUT, f)
        .await
        .unwrap_or_else(|_| panic!("test timed out after {TEST_TIMEOUT:?}"))
}
