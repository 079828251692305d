//! Bridge Aggregator
//!
//! An SDK for pricing cross-chain swaps across independent bridge
//! providers: fan a request out to every configured provider, bound
//! each call and the whole batch in time, rank the results, and report
//! partial progress while the batch is still running.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::info;

use bridge_cache::TtlCache;
use bridge_config::Settings;
use bridge_service::{
	AggregationContext, BestQuoteStrategy, MultiQuoteStrategy, QuotePipelineContext,
	QuoteStrategy, SingleQuoteStrategy,
};
// Core domain types - the most commonly used types
pub use bridge_types::{
	chains,
	// External dependencies for convenience
	chrono,
	serde_json,
	AmountsAfterSlippage,
	BridgeFees,
	BridgeLegQuote,
	BridgeLegRequest,
	// Gateway and collaborator traits
	BridgeProvider,
	BridgeStatus,
	BridgeStatusResult,
	ChainInfo,
	CorrelatedTokens,
	CrossChainQuote,
	OrderKind,
	// Error types
	ProviderError,
	ProviderInfo,
	ProviderKind,
	ProviderQuote,
	ProviderQuoteError,
	ProviderQuoteResult,
	QuoteAmounts,
	QuoteRequest,
	QuoteValidationError,
	SettlementPlan,
	SignedHook,
	SwapLegQuote,
	SwapQuoteRequest,
	SwapQuoter,
	TokenInfo,
	UnsignedBridgeCall,
	U256,
};

// Service layer
pub use bridge_service::{
	is_better_quote, select_intermediate_token, MultiQuoteOptions, MultiQuoteRequest,
	ProgressCallback, StrategyError, TokenPriority, DEFAULT_PROVIDER_TIMEOUT_MS,
	DEFAULT_TOTAL_TIMEOUT_MS,
};

// Config layer
pub use bridge_config::{init_tracing, load_config, LoggingSettings};

// Re-export the remaining members for advanced usage
pub mod cache {
	pub use bridge_cache::*;
}

pub mod config {
	pub use bridge_config::*;
}

pub mod service {
	pub use bridge_service::*;
}

pub mod types {
	pub use bridge_types::*;
}

pub mod mocks;

// Re-export external dependencies for integrators
pub use async_trait;

/// Errors raised while assembling an aggregator
#[derive(Error, Debug)]
pub enum AggregatorError {
	#[error("at least one bridge provider is required")]
	NoProviders,

	#[error("a swap quoter is required")]
	MissingSwapQuoter,
}

/// Builder pattern for configuring the aggregator
pub struct AggregatorBuilder {
	providers: Vec<Arc<dyn BridgeProvider>>,
	swap_quoter: Option<Arc<dyn SwapQuoter>>,
	correlated_tokens: Option<Arc<dyn CorrelatedTokens>>,
	allow_intermediate_equals_source: bool,
	settings: Settings,
}

impl AggregatorBuilder {
	pub fn new() -> Self {
		Self {
			providers: Vec::new(),
			swap_quoter: None,
			correlated_tokens: None,
			allow_intermediate_equals_source: false,
			settings: Settings::default(),
		}
	}

	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = settings;
		self
	}

	pub fn with_provider(mut self, provider: Arc<dyn BridgeProvider>) -> Self {
		self.providers.push(provider);
		self
	}

	pub fn with_providers(mut self, providers: Vec<Arc<dyn BridgeProvider>>) -> Self {
		self.providers.extend(providers);
		self
	}

	pub fn with_swap_quoter(mut self, swap_quoter: Arc<dyn SwapQuoter>) -> Self {
		self.swap_quoter = Some(swap_quoter);
		self
	}

	pub fn with_correlated_tokens(mut self, correlated: Arc<dyn CorrelatedTokens>) -> Self {
		self.correlated_tokens = Some(correlated);
		self
	}

	/// Allow selecting the sell token itself as the intermediate token
	pub fn allow_intermediate_equals_source(mut self, allow: bool) -> Self {
		self.allow_intermediate_equals_source = allow;
		self
	}

	pub fn build(self) -> Result<BridgeAggregator, AggregatorError> {
		if self.providers.is_empty() {
			return Err(AggregatorError::NoProviders);
		}
		let swap_quoter = self.swap_quoter.ok_or(AggregatorError::MissingSwapQuoter)?;

		let cache = Arc::new(TtlCache::<Vec<TokenInfo>>::new(
			self.settings.cache.namespace.clone(),
			self.settings.cache.enabled,
			Duration::from_millis(self.settings.cache.ttl_ms),
		));

		let mut pipeline = QuotePipelineContext::new(swap_quoter).with_cache(cache);
		pipeline.allow_intermediate_equals_source = self.allow_intermediate_equals_source;
		if let Some(correlated) = self.correlated_tokens {
			pipeline = pipeline.with_correlated_tokens(correlated);
		}

		let context = AggregationContext::new(self.providers, Arc::clone(&pipeline.swap_quoter))
			.with_pipeline(pipeline)
			.with_timeouts(
				self.settings.aggregation.total_timeout_ms,
				self.settings.aggregation.provider_timeout_ms,
			);

		info!(
			providers = context.providers.len(),
			cache_enabled = self.settings.cache.enabled,
			"bridge aggregator ready"
		);

		Ok(BridgeAggregator::from_context(context))
	}
}

impl Default for AggregatorBuilder {
	fn default() -> Self {
		Self::new()
	}
}

/// Entry point for cross-chain quoting
///
/// Construct through [`AggregatorBuilder`]; cheap to clone and safe to
/// share across tasks.
#[derive(Clone)]
pub struct BridgeAggregator {
	context: AggregationContext,
}

impl BridgeAggregator {
	pub fn builder() -> AggregatorBuilder {
		AggregatorBuilder::new()
	}

	fn from_context(context: AggregationContext) -> Self {
		Self { context }
	}

	/// The configured providers
	pub fn providers(&self) -> &[Arc<dyn BridgeProvider>] {
		&self.context.providers
	}

	pub fn provider_by_dapp_id(&self, dapp_id: &str) -> Option<&Arc<dyn BridgeProvider>> {
		self.context
			.providers
			.iter()
			.find(|provider| provider.info().dapp_id == dapp_id)
	}

	/// Networks the primary provider can bridge to
	pub async fn target_networks(&self) -> Result<Vec<ChainInfo>, ProviderError> {
		let provider = self
			.context
			.providers
			.first()
			.ok_or_else(|| ProviderError::Other("no provider configured".to_string()))?;
		provider.get_networks().await
	}

	/// One quote through one provider; same-chain requests skip
	/// bridging entirely
	pub async fn get_quote(&self, request: QuoteRequest) -> Result<CrossChainQuote, StrategyError> {
		SingleQuoteStrategy.execute(request, &self.context).await
	}

	/// One ranked result per provider, with progressive callbacks on
	/// every outcome
	pub async fn get_multi_quotes(
		&self,
		request: MultiQuoteRequest,
	) -> Result<Vec<ProviderQuoteResult>, QuoteValidationError> {
		MultiQuoteStrategy.execute(request, &self.context).await
	}

	/// Only the best result, with progressive callbacks on every
	/// improvement
	pub async fn get_best_quote(
		&self,
		request: MultiQuoteRequest,
	) -> Result<Option<ProviderQuoteResult>, QuoteValidationError> {
		BestQuoteStrategy.execute(request, &self.context).await
	}

	/// Status of an in-flight bridging operation, through the provider
	/// that produced it
	pub async fn bridging_status(
		&self,
		dapp_id: &str,
		bridging_id: &str,
		origin_chain_id: u64,
	) -> Result<BridgeStatusResult, ProviderError> {
		let provider = self.provider_by_dapp_id(dapp_id).ok_or_else(|| {
			ProviderError::Other(format!("provider '{dapp_id}' is not configured"))
		})?;
		provider.get_status(bridging_id, origin_chain_id).await
	}
}
