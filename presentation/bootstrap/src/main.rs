use dotenvy::dotenv;

mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{bootstrap::Bootstrap, dependency_injection::DependencyContainer};

/// Backend Bootstrap Entry Point
///
/// Loads the backend config, wires the SDK adapters, and runs the one-time
/// client initialization.
///
/// Layout:
/// - config/: Backend config sourced from the environment
/// - setup/: Dependency injection and the process-wide bootstrap
fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Wire dependencies
    let container = DependencyContainer::new();

    // 5. Run bootstrap; a missing SDK is reported, not fatal
    Bootstrap::run(config, container);

    Ok(())
}
