//! Multi-quote strategy: one ranked result per provider

use std::cmp::Ordering;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::info;

use bridge_types::{ProviderQuoteError, ProviderQuoteResult, QuoteValidationError};

use crate::orchestration::{
	resolve_providers, run_with_global_timeout, safe_invoke_callback, timeout_error_after,
	validate_cross_chain,
};
use crate::pipeline::get_quote_with_bridge;
use crate::strategies::{lock_or_recover, AggregationContext, MultiQuoteRequest, QuoteStrategy};

/// Fan the request out to every resolved provider and return one result
/// per provider, best quotes first
///
/// The returned collection always has exactly one entry per resolved
/// provider, even when the global timeout fires before a provider
/// responds; unreached slots are filled with a synthetic timeout error.
#[derive(Debug, Default)]
pub struct MultiQuoteStrategy;

#[async_trait]
impl QuoteStrategy for MultiQuoteStrategy {
	type Request = MultiQuoteRequest;
	type Output = Result<Vec<ProviderQuoteResult>, QuoteValidationError>;

	fn name(&self) -> &'static str {
		"MultiQuoteStrategy"
	}

	async fn execute(&self, request: Self::Request, ctx: &AggregationContext) -> Self::Output {
		let MultiQuoteRequest {
			quote_request,
			provider_dapp_ids,
			options,
		} = request;

		quote_request.validate()?;
		validate_cross_chain(quote_request.source_chain_id, quote_request.dest_chain_id)?;

		let providers = resolve_providers(provider_dapp_ids.as_deref(), &ctx.providers)?;
		let total_timeout_ms = options.total_timeout_ms.unwrap_or(ctx.total_timeout_ms);
		let provider_timeout_ms = options.provider_timeout_ms.unwrap_or(ctx.provider_timeout_ms);

		info!(
			request_id = %quote_request.request_id,
			providers = providers.len(),
			"fetching multi-quotes"
		);

		// One write-once slot per provider; indices are disjoint, so
		// concurrent tasks never contend on the same entry
		let slots: Arc<Mutex<Vec<Option<ProviderQuoteResult>>>> =
			Arc::new(Mutex::new(vec![None; providers.len()]));

		let mut handles = Vec::with_capacity(providers.len());
		for (index, provider) in providers.iter().enumerate() {
			let provider = Arc::clone(provider);
			let quote_request = quote_request.clone();
			let pipeline = ctx.pipeline.clone();
			let slots = Arc::clone(&slots);
			let callback = options.on_quote_result.clone();

			handles.push(tokio::spawn(async move {
				let dapp_id = provider.info().dapp_id.clone();
				let label = format!("Provider {dapp_id}");

				// Race the pipeline against the per-provider timeout;
				// losing the race does not cancel the pipeline future
				// beyond dropping it here
				let outcome = tokio::select! {
					outcome = get_quote_with_bridge(&provider, &quote_request, &pipeline) => outcome,
					timeout = timeout_error_after(provider_timeout_ms, &label) => Err(timeout),
				};

				let result = ProviderQuoteResult {
					provider_dapp_id: dapp_id,
					outcome,
				};

				lock_or_recover(&slots)[index] = Some(result.clone());
				safe_invoke_callback(callback.as_ref(), &result);
			}));
		}

		run_with_global_timeout(handles, total_timeout_ms, "Multi-quote").await;

		// Every provider gets a result; slots the batch never reached
		// become synthetic timeouts
		let mut results: Vec<ProviderQuoteResult> = {
			let slots = lock_or_recover(&slots);
			providers
				.iter()
				.zip(slots.iter())
				.map(|(provider, slot)| {
					slot.clone().unwrap_or_else(|| {
						ProviderQuoteResult::err(
							provider.info().dapp_id.clone(),
							ProviderQuoteError::batch_timeout(),
						)
					})
				})
				.collect()
		};

		sort_results(&mut results);

		info!(
			request_id = %quote_request.request_id,
			successes = results.iter().filter(|r| r.is_success()).count(),
			total = results.len(),
			"multi-quote aggregation completed"
		);

		Ok(results)
	}
}

/// Successes first, by descending post-slippage buy amount; failures
/// after, by descending error priority so the most informative failure
/// leads
fn sort_results(results: &mut [ProviderQuoteResult]) {
	results.sort_by(|a, b| match (a.quote(), b.quote()) {
		(Some(quote_a), Some(quote_b)) => quote_b
			.buy_amount_after_slippage()
			.cmp(quote_a.buy_amount_after_slippage()),
		(Some(_), None) => Ordering::Less,
		(None, Some(_)) => Ordering::Greater,
		(None, None) => {
			let priority_a = a.error().map(|e| e.priority()).unwrap_or(0);
			let priority_b = b.error().map(|e| e.priority()).unwrap_or(0);
			priority_b.cmp(&priority_a)
		},
	});
}
