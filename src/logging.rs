use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "CONSPECTUS_LOG";

pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout carries command results, so logs stay on stderr
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}
