//! Best-quote strategy: same fan-out as multi, keeping only the
//! running best

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::info;

use bridge_types::{ProviderQuoteResult, QuoteValidationError};

use crate::orchestration::{
	is_better_quote, resolve_providers, run_with_global_timeout, safe_invoke_callback,
	timeout_error_after, validate_cross_chain,
};
use crate::pipeline::get_quote_with_bridge;
use crate::strategies::{lock_or_recover, AggregationContext, MultiQuoteRequest, QuoteStrategy};

/// Running state shared by the provider tasks
///
/// Tasks race to update both cells, so they live behind one mutex; the
/// progress callback is invoked under the lock, which keeps the
/// delivered sequence strictly improving.
#[derive(Default)]
struct BestQuoteState {
	best: Option<ProviderQuoteResult>,
	first_error: Option<ProviderQuoteResult>,
}

/// Fan the request out to every resolved provider and return only the
/// best successful result
///
/// The progress callback fires only when the running best improves,
/// not on every completion. When no provider succeeds the first error
/// seen is returned; with no providers selected the result is `None`.
#[derive(Debug, Default)]
pub struct BestQuoteStrategy;

#[async_trait]
impl QuoteStrategy for BestQuoteStrategy {
	type Request = MultiQuoteRequest;
	type Output = Result<Option<ProviderQuoteResult>, QuoteValidationError>;

	fn name(&self) -> &'static str {
		"BestQuoteStrategy"
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
			"fetching best quote"
		);

		let state = Arc::new(Mutex::new(BestQuoteState::default()));

		let mut handles = Vec::with_capacity(providers.len());
		for provider in &providers {
			let provider = Arc::clone(provider);
			let quote_request = quote_request.clone();
			let pipeline = ctx.pipeline.clone();
			let state = Arc::clone(&state);
			let callback = options.on_quote_result.clone();

			handles.push(tokio::spawn(async move {
				let dapp_id = provider.info().dapp_id.clone();
				let label = format!("Provider {dapp_id}");

				let outcome = tokio::select! {
					outcome = get_quote_with_bridge(&provider, &quote_request, &pipeline) => outcome,
					timeout = timeout_error_after(provider_timeout_ms, &label) => Err(timeout),
				};

				let result = ProviderQuoteResult {
					provider_dapp_id: dapp_id,
					outcome,
				};

				let mut state = lock_or_recover(&state);
				if result.is_success() {
					if is_better_quote(&result, state.best.as_ref()) {
						state.best = Some(result.clone());
						// Only improvements are reported
						safe_invoke_callback(callback.as_ref(), &result);
					}
				} else if state.first_error.is_none() {
					// First error wins; later errors are dropped
					state.first_error = Some(result);
				}
			}));
		}

		run_with_global_timeout(handles, total_timeout_ms, "Best-quote").await;

		let state = lock_or_recover(&state);
		Ok(state.best.clone().or_else(|| state.first_error.clone()))
	}
}
