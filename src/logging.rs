use tracing_subscriber::fmt::time::LocalTime;

/// Default filter when `RUST_LOG` is not set
const DEFAULT_FILTER: &str = "info";

/// Initialize tracing to stderr.
///
/// `RUST_LOG` takes precedence over `default_filter`; pass `None` to use
/// `info`. Calling this more than once is harmless, later calls are ignored.
pub fn init_tracing(default_filter: Option<&str>) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter.unwrap_or(DEFAULT_FILTER)));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_timer(LocalTime::rfc_3339())
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .compact();

    if tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .is_ok()
    {
        tracing::debug!(target: "system", "Tracing initialized");
    }
}

/// Convenience macros for common operations
#[macro_export]
macro_rules! trace_request {
    ($method:expr, $url:expr) => {
        tracing::debug!(target: "api", "{} {}", $method, $url);
    };
}

#[macro_export]
macro_rules! trace_response {
    ($status:expr, $url:expr) => {
        tracing::debug!(target: "api", "{} <- {}", $status, $url);
    };
}
