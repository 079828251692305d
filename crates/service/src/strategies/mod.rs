//! Quote strategies
//!
//! Three ways to resolve a quote request against the configured
//! providers: exactly one provider (single), every provider with one
//! ranked result each (multi), or every provider keeping only the
//! running best (best).

pub mod best;
pub mod multi;
pub mod single;

pub use best::BestQuoteStrategy;
pub use multi::MultiQuoteStrategy;
pub use single::SingleQuoteStrategy;

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use thiserror::Error;

use bridge_types::{
	BridgeProvider, ProviderQuoteError, QuoteRequest, QuoteValidationError, SwapQuoter,
};

use crate::orchestration::ProgressCallback;
use crate::pipeline::QuotePipelineContext;

/// Total time budget for one multi/best fan-out
pub const DEFAULT_TOTAL_TIMEOUT_MS: u64 = 40_000;

/// Time budget for each individual provider inside the fan-out
pub const DEFAULT_PROVIDER_TIMEOUT_MS: u64 = 20_000;

/// Providers, collaborators and timeout defaults shared by all
/// strategies
#[derive(Clone)]
pub struct AggregationContext {
	pub providers: Vec<Arc<dyn BridgeProvider>>,
	pub pipeline: QuotePipelineContext,
	pub total_timeout_ms: u64,
	pub provider_timeout_ms: u64,
}

impl AggregationContext {
	pub fn new(providers: Vec<Arc<dyn BridgeProvider>>, swap_quoter: Arc<dyn SwapQuoter>) -> Self {
		Self {
			providers,
			pipeline: QuotePipelineContext::new(swap_quoter),
			total_timeout_ms: DEFAULT_TOTAL_TIMEOUT_MS,
			provider_timeout_ms: DEFAULT_PROVIDER_TIMEOUT_MS,
		}
	}

	pub fn with_pipeline(mut self, pipeline: QuotePipelineContext) -> Self {
		self.pipeline = pipeline;
		self
	}

	pub fn with_timeouts(mut self, total_timeout_ms: u64, provider_timeout_ms: u64) -> Self {
		self.total_timeout_ms = total_timeout_ms;
		self.provider_timeout_ms = provider_timeout_ms;
		self
	}
}

/// Per-call knobs for the multi/best fan-out
#[derive(Clone, Default)]
pub struct MultiQuoteOptions {
	/// Progress callback; multi fires it on every provider outcome,
	/// best only when the running best improves
	pub on_quote_result: Option<ProgressCallback>,
	/// Overrides `AggregationContext::total_timeout_ms`
	pub total_timeout_ms: Option<u64>,
	/// Overrides `AggregationContext::provider_timeout_ms`
	pub provider_timeout_ms: Option<u64>,
}

/// Request for the multi/best strategies
#[derive(Clone)]
pub struct MultiQuoteRequest {
	pub quote_request: QuoteRequest,
	/// Subset of providers to query; `None` queries all of them
	pub provider_dapp_ids: Option<Vec<String>>,
	pub options: MultiQuoteOptions,
}

impl MultiQuoteRequest {
	pub fn new(quote_request: QuoteRequest) -> Self {
		Self {
			quote_request,
			provider_dapp_ids: None,
			options: MultiQuoteOptions::default(),
		}
	}

	pub fn with_providers(mut self, provider_dapp_ids: Vec<String>) -> Self {
		self.provider_dapp_ids = Some(provider_dapp_ids);
		self
	}

	pub fn with_options(mut self, options: MultiQuoteOptions) -> Self {
		self.options = options;
		self
	}
}

/// Errors from the single-quote strategy, which can fail either before
/// (validation) or during (provider) quoting
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrategyError {
	#[error(transparent)]
	Validation(#[from] QuoteValidationError),

	#[error(transparent)]
	Quote(#[from] ProviderQuoteError),
}

/// Common shape of all quote strategies
#[async_trait]
pub trait QuoteStrategy: Send + Sync {
	type Request;
	type Output;

	fn name(&self) -> &'static str;

	async fn execute(&self, request: Self::Request, ctx: &AggregationContext) -> Self::Output;
}

/// Lock a mutex, recovering the guard if a provider task panicked while
/// holding it; shared result state must stay usable regardless
pub(crate) fn lock_or_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
	mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
