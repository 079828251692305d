//! Bridge Aggregator Service
//!
//! Core logic for cross-chain quote aggregation: the per-provider
//! bridge-quote pipeline, intermediate token selection, and the
//! single/multi/best quote strategies.

pub mod orchestration;
pub mod pipeline;
pub mod selector;
pub mod strategies;
pub mod token_priority;

#[cfg(test)]
pub(crate) mod support;

pub use orchestration::{
	is_better_quote, most_informative_error, resolve_providers, run_with_global_timeout,
	safe_invoke_callback, timeout_error_after, validate_cross_chain, ProgressCallback,
};
pub use pipeline::{get_quote_with_bridge, intermediate_tokens_cache_key, QuotePipelineContext};
pub use selector::select_intermediate_token;
pub use strategies::{
	AggregationContext, BestQuoteStrategy, MultiQuoteOptions, MultiQuoteRequest,
	MultiQuoteStrategy, QuoteStrategy, SingleQuoteStrategy, StrategyError,
	DEFAULT_PROVIDER_TIMEOUT_MS, DEFAULT_TOTAL_TIMEOUT_MS,
};
pub use token_priority::{
	is_native_or_wrapped_native, is_native_token, is_stablecoin_priority_token,
	is_wrapped_native_token, TokenPriority, NATIVE_TOKEN_ADDRESS,
};
