//! Configuration settings structures

use serde::{Deserialize, Serialize};

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Settings {
	#[serde(default)]
	pub aggregation: AggregationSettings,
	#[serde(default)]
	pub cache: CacheSettings,
	#[serde(default)]
	pub logging: LoggingSettings,
}

/// Timeouts for the multi/best quote fan-out
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AggregationSettings {
	/// Total time budget for one fan-out in milliseconds
	pub total_timeout_ms: u64,
	/// Time budget per provider in milliseconds
	pub provider_timeout_ms: u64,
}

impl Default for AggregationSettings {
	fn default() -> Self {
		Self {
			total_timeout_ms: 40_000,
			provider_timeout_ms: 20_000,
		}
	}
}

/// Intermediate-token cache configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CacheSettings {
	pub enabled: bool,
	pub ttl_ms: u64,
	pub namespace: String,
}

impl Default for CacheSettings {
	fn default() -> Self {
		Self {
			enabled: true,
			ttl_ms: 2 * 60 * 1000,
			namespace: "intermediate-tokens".to_string(),
		}
	}
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingSettings {
	/// Tracing filter directive, e.g. "info" or "bridge_service=debug"
	pub level: String,
	pub format: LogFormat,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Compact,
		}
	}
}
