use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging to stderr so stdout carries only the report.
///
/// `RUST_LOG` wins when set; otherwise `level` applies to this crate and
/// everything else stays at `warn`.
pub fn init_logging(level: &str) {
    let default_filter = format!("warn,quarterly_report={level}");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false),
        )
        .init();
}
