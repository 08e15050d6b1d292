//! Diagnostic tracing for the registry and the interactive shell.
//!
//! Reads `RUST_LOG`, defaults to `warn`. Output goes to stderr so it can be
//! redirected away from the full-screen UI:
//!
//! ```bash
//! RUST_LOG=student_registry=debug student-registry 2>session.log
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second init (e.g. from tests) is not an error worth surfacing.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
