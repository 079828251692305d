//! Single-quote strategy: one request, one provider, one quote

use async_trait::async_trait;
use tracing::info;

use bridge_types::{CrossChainQuote, QuoteRequest, QuoteValidationError};

use crate::pipeline::get_quote_with_bridge;
use crate::strategies::{AggregationContext, QuoteStrategy, StrategyError};

/// Resolve a request through exactly one provider, or none for
/// same-chain swaps
///
/// Same-chain requests bypass bridging entirely and delegate to the
/// order-book collaborator's plain quote path. Cross-chain requests run
/// the full pipeline against the first configured provider;
/// multi-provider selection belongs to the multi/best strategies.
#[derive(Debug, Default)]
pub struct SingleQuoteStrategy;

#[async_trait]
impl QuoteStrategy for SingleQuoteStrategy {
	type Request = QuoteRequest;
	type Output = Result<CrossChainQuote, StrategyError>;

	fn name(&self) -> &'static str {
		"SingleQuoteStrategy"
	}

	async fn execute(&self, request: Self::Request, ctx: &AggregationContext) -> Self::Output {
		request.validate().map_err(StrategyError::Validation)?;

		if !request.is_cross_chain() {
			info!(
				request_id = %request.request_id,
				chain_id = request.source_chain_id,
				"single-chain quote"
			);
			let swap = ctx.pipeline.swap_quoter.get_single_chain_quote(&request).await?;
			return Ok(CrossChainQuote::SingleChain(swap));
		}

		let provider = ctx
			.providers
			.first()
			.ok_or(StrategyError::Validation(QuoteValidationError::NoProviderFound))?;

		let quote = get_quote_with_bridge(provider, &request, &ctx.pipeline).await?;
		Ok(CrossChainQuote::Bridged(quote))
	}
}
