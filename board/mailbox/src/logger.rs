use std::sync::Once;

use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Route move logs into the test output.
///
/// Set the `RUST_LOG` environment variable to `debug` to see why moves get rejected.
pub fn setup_logger() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt::Subscriber::builder()
            .without_time()
            .compact()
            .with_test_writer()
            .with_env_filter(EnvFilter::from_default_env())
            .finish()
            .try_init();
    });
}
