use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Levels accepted in configuration, lowest to highest severity.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Directives used when `RUST_LOG` is unset. Other crates stay at `info`
/// unless the crate level is quieter than that.
pub fn filter_directives(level: &str) -> String {
    match level {
        "trace" | "debug" => format!("trivia_core={},info", level),
        _ => format!("trivia_core={}", level),
    }
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directives(level)))
}

pub fn init_cli_logger(level: &str) {
    tracing_subscriber::registry()
        .with(env_filter(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// JSON lines for log shippers; `level` is used when `RUST_LOG` is unset.
pub fn init_json_logger(level: &str) {
    tracing_subscriber::registry()
        .with(env_filter(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}
