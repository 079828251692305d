//! Shared building blocks for the quote strategies
//!
//! Everything the multi/best fan-out needs around the per-provider
//! pipeline: request validation, provider resolution, timeout racing,
//! guarded progress callbacks, and result comparison.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tokio::task::JoinHandle;
use tracing::warn;

use bridge_types::{
	BridgeProvider, ProviderQuoteError, ProviderQuoteResult, QuoteValidationError,
};

/// Caller-supplied progress callback, invoked as provider outcomes land
pub type ProgressCallback = Arc<dyn Fn(&ProviderQuoteResult) + Send + Sync>;

/// Multi/best-quote flows are cross-chain only
pub fn validate_cross_chain(
	source_chain_id: u64,
	dest_chain_id: u64,
) -> Result<(), QuoteValidationError> {
	if source_chain_id == dest_chain_id {
		return Err(QuoteValidationError::SameChainNotSupported {
			chain_id: source_chain_id,
		});
	}
	Ok(())
}

/// Map requested dapp IDs onto provider instances, failing fast before
/// any network call when an ID is unknown. No IDs selects every
/// provider.
pub fn resolve_providers(
	requested_dapp_ids: Option<&[String]>,
	providers: &[Arc<dyn BridgeProvider>],
) -> Result<Vec<Arc<dyn BridgeProvider>>, QuoteValidationError> {
	let Some(requested) = requested_dapp_ids else {
		return Ok(providers.to_vec());
	};

	requested
		.iter()
		.map(|dapp_id| {
			providers
				.iter()
				.find(|provider| provider.info().dapp_id == *dapp_id)
				.cloned()
				.ok_or_else(|| QuoteValidationError::UnknownProvider {
					dapp_id: dapp_id.clone(),
					available: providers
						.iter()
						.map(|provider| provider.info().dapp_id.clone())
						.collect::<Vec<_>>()
						.join(", "),
				})
		})
		.collect()
}

/// Future resolving to a timeout error once the duration elapses
///
/// Used purely for racing against a provider call; it never cancels the
/// other side of the race.
pub async fn timeout_error_after(timeout_ms: u64, label: &str) -> ProviderQuoteError {
	tokio::time::sleep(Duration::from_millis(timeout_ms)).await;
	ProviderQuoteError::timeout_after(label, timeout_ms)
}

/// Wait for every spawned provider task to settle, or for the global
/// timeout, whichever comes first
///
/// A timeout does not propagate an error: the orchestrator stops
/// waiting and works with whatever partial results the tasks already
/// wrote. The abandoned tasks keep running detached; their late writes
/// land in shared state nobody reads again. Task panics are contained
/// in the join results and ignored.
pub async fn run_with_global_timeout(
	handles: Vec<JoinHandle<()>>,
	total_timeout_ms: u64,
	label: &str,
) {
	let all_settled = join_all(handles);

	if tokio::time::timeout(Duration::from_millis(total_timeout_ms), all_settled)
		.await
		.is_err()
	{
		warn!(
			total_timeout_ms,
			"{} timeout occurred, returning partial results", label
		);
	}
}

/// Invoke the progress callback inside a guarded call
///
/// A misbehaving observer must not abort the quote process: panics are
/// caught, logged, and discarded.
pub fn safe_invoke_callback(callback: Option<&ProgressCallback>, result: &ProviderQuoteResult) {
	let Some(callback) = callback else {
		return;
	};

	if let Err(panic) = catch_unwind(AssertUnwindSafe(|| callback(result))) {
		let reason = panic
			.downcast_ref::<&str>()
			.map(|s| s.to_string())
			.or_else(|| panic.downcast_ref::<String>().cloned())
			.unwrap_or_else(|| "unknown panic".to_string());
		warn!(
			provider = %result.provider_dapp_id,
			%reason,
			"error in progress callback, ignoring"
		);
	}
}

/// Whether `candidate` beats `current`
///
/// No current best (or a failed one) loses to any successful candidate;
/// a failed candidate never wins; otherwise the strictly greater
/// post-slippage buy amount wins, so ties keep the current best.
pub fn is_better_quote(
	candidate: &ProviderQuoteResult,
	current: Option<&ProviderQuoteResult>,
) -> bool {
	let Some(current_quote) = current.and_then(|result| result.quote()) else {
		return candidate.is_success();
	};

	let Some(candidate_quote) = candidate.quote() else {
		return false;
	};

	candidate_quote.buy_amount_after_slippage() > current_quote.buy_amount_after_slippage()
}

/// Pick the most informative error out of a set of failures, using the
/// fixed per-category priorities; earlier entries win ties
pub fn most_informative_error<'a, I>(errors: I) -> Option<&'a ProviderQuoteError>
where
	I: IntoIterator<Item = &'a ProviderQuoteError>,
{
	errors.into_iter().reduce(|best, candidate| {
		if candidate.priority() > best.priority() {
			candidate
		} else {
			best
		}
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::support::{quote_result, test_provider};
	use std::sync::atomic::{AtomicUsize, Ordering};

	#[test]
	fn test_validate_cross_chain() {
		assert!(validate_cross_chain(1, 8453).is_ok());
		assert_eq!(
			validate_cross_chain(1, 1),
			Err(QuoteValidationError::SameChainNotSupported { chain_id: 1 })
		);
	}

	#[test]
	fn test_resolve_providers_defaults_to_all() {
		let providers: Vec<Arc<dyn BridgeProvider>> =
			vec![test_provider("p1"), test_provider("p2")];

		let resolved = resolve_providers(None, &providers).unwrap();
		assert_eq!(resolved.len(), 2);
	}

	#[test]
	fn test_resolve_providers_maps_requested_ids() {
		let providers: Vec<Arc<dyn BridgeProvider>> =
			vec![test_provider("p1"), test_provider("p2")];

		let requested = vec!["p2".to_string()];
		let resolved = resolve_providers(Some(&requested), &providers).unwrap();
		assert_eq!(resolved.len(), 1);
		assert_eq!(resolved[0].info().dapp_id, "p2");
	}

	#[test]
	fn test_resolve_providers_unknown_id_lists_available() {
		let providers: Vec<Arc<dyn BridgeProvider>> =
			vec![test_provider("p1"), test_provider("p2")];

		let requested = vec!["unknown-id".to_string()];
		let error = resolve_providers(Some(&requested), &providers).unwrap_err();
		assert_eq!(
			error,
			QuoteValidationError::UnknownProvider {
				dapp_id: "unknown-id".to_string(),
				available: "p1, p2".to_string(),
			}
		);
	}

	#[tokio::test]
	async fn test_timeout_error_message() {
		let error = timeout_error_after(1, "Provider acme").await;
		assert_eq!(error.to_string(), "Provider acme timeout after 1ms");
	}

	#[tokio::test]
	async fn test_global_timeout_leaves_tasks_running() {
		use std::sync::atomic::AtomicBool;

		let finished = Arc::new(AtomicBool::new(false));
		let flag = Arc::clone(&finished);
		let handle = tokio::spawn(async move {
			tokio::time::sleep(Duration::from_millis(80)).await;
			flag.store(true, Ordering::SeqCst);
		});

		run_with_global_timeout(vec![handle], 10, "Multi-quote").await;
		assert!(!finished.load(Ordering::SeqCst), "returned before the task");

		// The abandoned task still completes in the background
		tokio::time::sleep(Duration::from_millis(120)).await;
		assert!(finished.load(Ordering::SeqCst));
	}

	#[test]
	fn test_safe_invoke_callback_swallows_panics() {
		let calls = Arc::new(AtomicUsize::new(0));
		let counter = Arc::clone(&calls);
		let callback: ProgressCallback = Arc::new(move |_| {
			counter.fetch_add(1, Ordering::SeqCst);
			panic!("observer bug");
		});

		let result = quote_result("p1", "100");
		safe_invoke_callback(Some(&callback), &result);
		safe_invoke_callback(Some(&callback), &result);

		assert_eq!(calls.load(Ordering::SeqCst), 2);
	}

	#[test]
	fn test_is_better_quote_rules() {
		let fifty = quote_result("p1", "50");
		let sixty = quote_result("p2", "60");
		let failed = ProviderQuoteResult::err("p3", ProviderQuoteError::NoRoutes);

		// Any success beats no current best or a failed one
		assert!(is_better_quote(&fifty, None));
		assert!(is_better_quote(&fifty, Some(&failed)));

		// A failure never wins
		assert!(!is_better_quote(&failed, None));
		assert!(!is_better_quote(&failed, Some(&fifty)));

		// Strictly greater wins; ties keep the current best
		assert!(is_better_quote(&sixty, Some(&fifty)));
		assert!(!is_better_quote(&fifty, Some(&sixty)));
		assert!(!is_better_quote(&fifty, Some(&quote_result("p4", "50"))));
	}

	#[test]
	fn test_most_informative_error_prefers_api_errors() {
		let errors = [
			ProviderQuoteError::Timeout("Provider p1 timeout after 20000ms".to_string()),
			ProviderQuoteError::ApiError("502".to_string()),
			ProviderQuoteError::NoRoutes,
		];
		let best = most_informative_error(errors.iter()).unwrap();
		assert_eq!(best, &ProviderQuoteError::ApiError("502".to_string()));

		assert!(most_informative_error(std::iter::empty::<&ProviderQuoteError>()).is_none());
	}
}
