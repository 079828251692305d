//! Bridge Aggregator Config
//!
//! Settings structures, file/environment loading, and tracing
//! initialisation.

pub mod loader;
pub mod settings;

pub use loader::load_config;
pub use settings::{AggregationSettings, CacheSettings, LogFormat, LoggingSettings, Settings};

use tracing::info;

/// Initialize tracing from the logging settings
///
/// `RUST_LOG` takes precedence over the configured level. Safe to call
/// once per process; later calls are ignored.
pub fn init_tracing(logging: &LoggingSettings) {
	let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(logging.level.clone()));

	let result = match logging.format {
		LogFormat::Json => tracing_subscriber::fmt()
			.json()
			.with_env_filter(env_filter)
			.try_init(),
		LogFormat::Pretty => tracing_subscriber::fmt()
			.pretty()
			.with_env_filter(env_filter)
			.try_init(),
		LogFormat::Compact => tracing_subscriber::fmt()
			.compact()
			.with_env_filter(env_filter)
			.try_init(),
	};

	if result.is_ok() {
		info!(
			level = %logging.level,
			format = ?logging.format,
			"logging configuration applied"
		);
	}
}
