//! Error types for quote operations

use thiserror::Error;

/// Validation errors raised synchronously, before any provider call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuoteValidationError {
	#[error("get_multi_quotes() and get_best_quote() are only for cross-chain bridging (both tokens are on chain {chain_id}); for single-chain swaps use get_quote() instead")]
	SameChainNotSupported { chain_id: u64 },

	#[error("provider with dappId '{dapp_id}' not found. Available providers: {available}")]
	UnknownProvider { dapp_id: String, available: String },

	#[error("no provider found for cross-chain swap")]
	NoProviderFound,

	#[error("invalid amount: {reason}")]
	InvalidAmount { reason: String },

	#[error("missing required field: {field}")]
	MissingRequiredField { field: String },
}

/// Errors produced while quoting through a single provider
///
/// Each category carries a fixed priority so that, when every provider
/// fails, the orchestrator can surface the most informative error
/// instead of an arbitrary one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderQuoteError {
	#[error("upstream API error: {0}")]
	ApiError(String),

	#[error("malformed API response: {0}")]
	InvalidApiResponse(String),

	#[error("sell amount is too small to bridge")]
	SellAmountTooSmall,

	#[error("no routes available for the requested pair")]
	NoRoutes,

	#[error("no intermediate tokens available for the requested pair")]
	NoIntermediateTokens,

	#[error("invalid bridge: {0}")]
	InvalidBridge(String),

	#[error("failed to build bridging transaction: {0}")]
	TxBuildFailed(String),

	#[error("bridging only supports sell orders")]
	OnlySellOrdersSupported,

	#[error("{0}")]
	Timeout(String),

	#[error("{0}")]
	Other(String),
}

impl ProviderQuoteError {
	/// Fixed ranking used when picking one representative error out of
	/// many failures. Higher is more informative; unknown errors rank
	/// lowest.
	pub fn priority(&self) -> u8 {
		match self {
			Self::ApiError(_) => 90,
			Self::InvalidApiResponse(_) => 80,
			Self::SellAmountTooSmall => 70,
			Self::NoRoutes => 60,
			Self::NoIntermediateTokens => 50,
			Self::InvalidBridge(_) => 40,
			Self::TxBuildFailed(_) => 30,
			Self::OnlySellOrdersSupported => 20,
			Self::Timeout(_) => 10,
			Self::Other(_) => 0,
		}
	}

	/// Synthetic timeout produced when racing a single provider call
	pub fn timeout_after(label: &str, timeout_ms: u64) -> Self {
		Self::Timeout(format!("{} timeout after {}ms", label, timeout_ms))
	}

	/// Synthetic timeout filled into result slots the batch never reached
	pub fn batch_timeout() -> Self {
		Self::Timeout("Provider request timed out".to_string())
	}

	pub fn is_timeout(&self) -> bool {
		matches!(self, Self::Timeout(_))
	}
}

/// Errors from the provider management surface (non-quote operations)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
	#[error("operation '{operation}' is not supported by provider '{dapp_id}'")]
	UnsupportedOperation { operation: String, dapp_id: String },

	#[error("provider request failed: {0}")]
	Upstream(String),

	#[error("{0}")]
	Other(String),
}

impl From<ProviderError> for ProviderQuoteError {
	fn from(err: ProviderError) -> Self {
		match err {
			ProviderError::Upstream(msg) => Self::ApiError(msg),
			other => Self::Other(other.to_string()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_api_errors_rank_highest() {
		let api = ProviderQuoteError::ApiError("503".to_string());
		let routes = ProviderQuoteError::NoRoutes;
		let unknown = ProviderQuoteError::Other("boom".to_string());

		assert!(api.priority() > routes.priority());
		assert!(routes.priority() > unknown.priority());
		assert_eq!(unknown.priority(), 0);
	}

	#[test]
	fn test_timeout_messages() {
		let single = ProviderQuoteError::timeout_after("Provider acme", 20_000);
		assert_eq!(single.to_string(), "Provider acme timeout after 20000ms");
		assert!(single.is_timeout());

		let batch = ProviderQuoteError::batch_timeout();
		assert_eq!(batch.to_string(), "Provider request timed out");
		assert!(batch.is_timeout());
	}

	#[test]
	fn test_unknown_provider_error_lists_available() {
		let err = QuoteValidationError::UnknownProvider {
			dapp_id: "missing".to_string(),
			available: "p1, p2".to_string(),
		};
		let message = err.to_string();
		assert!(message.contains("missing"));
		assert!(message.contains("p1, p2"));
	}
}
