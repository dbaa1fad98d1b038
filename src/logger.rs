//! Logging setup shared by the calculator binary and the benches.

use tracing::Level;

/// Initialize the tracing subscriber at INFO, overridable via `RUST_LOG`
///
/// Lines carry a timestamp, the level and the target.
///
/// ```bash
/// RUST_LOG=quaternion_algebra=debug cargo run --bin quaternion_calc -- div -a 1,2,3,4 -b 0
/// ```
pub fn init_logger() {
    init_logger_with_level(Level::INFO)
}

/// Initialize the tracing subscriber with `default_level` unless `RUST_LOG` is set
///
/// Later calls leave the first subscriber in place.
pub fn init_logger_with_level(default_level: Level) {
    use tracing_subscriber::fmt::time::SystemTime;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with_timer(SystemTime)
        .with_target(true)
        .with_level(true)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_initialization_is_harmless() {
        init_logger_with_level(Level::DEBUG);
        init_logger();
        tracing::debug!("logger initialised twice");
    }
}
