//! Tracing bootstrap for processes embedding the registry.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::UserServiceConfig;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `config.log_level`. Returns `false` when a
/// global subscriber was already installed.
pub fn init_tracing(config: &UserServiceConfig) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(service = %config.service_name, "Tracing initialized");
    }
    installed
}
