//! Logging infrastructure for docquest.
//!
//! Initializes the tracing subscriber for structured logging. All logs go to
//! stderr so stdout carries nothing but answers.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{AppError, AppResult};

/// Initialize the tracing subscriber with stderr output.
///
/// # Arguments
/// * `log_level` - Optional filter override (e.g., "debug", "docquest_engine=trace")
/// * `no_color` - Disable colored output
///
/// # Example
/// ```no_run
/// use docquest_core::logging::init_logging;
///
/// init_logging(None, false).expect("Failed to initialize logging");
/// ```
pub fn init_logging(log_level: Option<&str>, no_color: bool) -> AppResult<()> {
    let default_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    let filter_str = build_filter(log_level.unwrap_or(&default_level));

    let env_filter = EnvFilter::try_new(&filter_str)
        .map_err(|e| AppError::Config(format!("Invalid log filter: {}", e)))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_ansi(!no_color && supports_color());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| AppError::Config(format!("Failed to init logging: {}", e)))?;

    Ok(())
}

/// Crates whose logs a bare level applies to.
const DOCQUEST_TARGETS: &[&str] = &["docquest", "docquest_core", "docquest_engine"];

/// Expand a bare level into per-crate directives.
///
/// `debug` becomes `warn,docquest=debug,docquest_core=debug,docquest_engine=debug`
/// so dependencies stay at `warn`. Full directive strings (containing `=` or
/// `,`) pass through unchanged, as does `warn` or anything quieter.
fn build_filter(level: &str) -> String {
    let level = level.trim();
    if level.contains('=') || level.contains(',') {
        return level.to_string();
    }

    match level.to_ascii_lowercase().as_str() {
        "info" | "debug" | "trace" => {
            let mut directives = vec!["warn".to_string()];
            directives.extend(DOCQUEST_TARGETS.iter().map(|t| format!("{}={}", t, level)));
            directives.join(",")
        }
        _ => level.to_string(),
    }
}

/// Check if the terminal supports color output.
fn supports_color() -> bool {
    std::env::var("NO_COLOR").is_err()
}
