use tracing_subscriber::EnvFilter;

use super::SystemConfig;

/// Installs the global subscriber. Call once at startup.
///
/// `RUST_LOG` takes precedence over `config.log_filter`:
///
/// ```bash
/// RUST_LOG=debug cargo run
/// RUST_LOG=vending_machine::machine_actor=debug,info cargo run
/// ```
pub fn setup_tracing(config: &SystemConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new(super::DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}
