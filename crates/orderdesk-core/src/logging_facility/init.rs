//! Logging initialization module

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

static INIT_ONCE: Once = Once::new();

const TARGETS: [&str; 3] = ["orderdesk", "orderdesk_core", "orderdesk_store"];

fn default_filter(level: &str) -> EnvFilter {
    let directives: Vec<String> = TARGETS.iter().map(|t| format!("{}={}", t, level)).collect();
    EnvFilter::new(directives.join(","))
}

/// Initialize the logging facility
///
/// Only the first call has any effect. Logs go to stderr so that table
/// output on stdout stays clean.
///
/// # Profiles
///
/// - **Development**: Human-readable logs at debug level
/// - **Production**: JSON structured logs at info level
/// - **Test**: Bare registry; pair with `init_test_capture()`
///
/// `RUST_LOG` overrides the default filter of either profile.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter("debug")),
                )
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter("info")),
                )
                .init();
        }
        Profile::Test => {
            // Capture layer may already own the global default
            let _ = tracing_subscriber::registry().try_init();
        }
    });
}
