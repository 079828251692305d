//! The per-provider bridge-quote pipeline
//!
//! One provider, one request, one composed quote: resolve the
//! intermediate token (memoized through the TTL cache), price the swap
//! leg through the order-book collaborator, price the bridge leg
//! through the provider, then assemble the settlement plan for the
//! provider's kind.

use std::sync::Arc;

use tracing::{debug, info};

use bridge_cache::TtlCache;
use bridge_types::{
	BridgeLegRequest, BridgeProvider, CorrelatedTokens, OrderKind, ProviderKind, ProviderQuote,
	ProviderQuoteError, QuoteRequest, SettlementPlan, SwapQuoteRequest, SwapQuoter, TokenInfo,
};

use crate::selector::select_intermediate_token;

/// Shared collaborators the pipeline runs against; cheap to clone into
/// spawned provider tasks
#[derive(Clone)]
pub struct QuotePipelineContext {
	pub swap_quoter: Arc<dyn SwapQuoter>,
	pub intermediate_tokens_cache: Option<Arc<TtlCache<Vec<TokenInfo>>>>,
	pub correlated_tokens: Option<Arc<dyn CorrelatedTokens>>,
	/// Allow settling in the sell token itself (skips the swap leg's
	/// conversion value, but some providers prefer it)
	pub allow_intermediate_equals_source: bool,
}

impl QuotePipelineContext {
	pub fn new(swap_quoter: Arc<dyn SwapQuoter>) -> Self {
		Self {
			swap_quoter,
			intermediate_tokens_cache: None,
			correlated_tokens: None,
			allow_intermediate_equals_source: false,
		}
	}

	pub fn with_cache(mut self, cache: Arc<TtlCache<Vec<TokenInfo>>>) -> Self {
		self.intermediate_tokens_cache = Some(cache);
		self
	}

	pub fn with_correlated_tokens(mut self, correlated: Arc<dyn CorrelatedTokens>) -> Self {
		self.correlated_tokens = Some(correlated);
		self
	}
}

/// Deterministic cache key for a (provider, pair) combination
///
/// Absent parts use the `any` sentinel so distinct combinations never
/// collide; token addresses are lower-cased so EIP-55 casing does not
/// split cache entries.
pub fn intermediate_tokens_cache_key(
	dapp_id: &str,
	dest_chain_id: u64,
	source_chain_id: Option<u64>,
	token_address: Option<&str>,
) -> String {
	format!(
		"{}:{}:{}:{}",
		dapp_id,
		dest_chain_id,
		source_chain_id
			.map(|id| id.to_string())
			.unwrap_or_else(|| "any".to_string()),
		token_address
			.map(|address| address.to_lowercase())
			.unwrap_or_else(|| "any".to_string()),
	)
}

/// Run the full bridge-quote pipeline against one provider
pub async fn get_quote_with_bridge(
	provider: &Arc<dyn BridgeProvider>,
	request: &QuoteRequest,
	ctx: &QuotePipelineContext,
) -> Result<ProviderQuote, ProviderQuoteError> {
	if request.kind != OrderKind::Sell {
		return Err(ProviderQuoteError::OnlySellOrdersSupported);
	}

	let dapp_id = &provider.info().dapp_id;
	info!(
		request_id = %request.request_id,
		provider = %dapp_id,
		source_chain = request.source_chain_id,
		dest_chain = request.dest_chain_id,
		amount = %request.amount,
		"cross-chain quote"
	);

	// Skip providers that cannot reach the destination network at all
	let networks = provider.get_networks().await?;
	if !networks
		.iter()
		.any(|network| network.id == request.dest_chain_id)
	{
		debug!(
			provider = %dapp_id,
			dest_chain = request.dest_chain_id,
			"provider does not support the destination network"
		);
		return Err(ProviderQuoteError::NoRoutes);
	}

	let intermediate_tokens = fetch_intermediate_tokens(provider, request, ctx).await?;

	let intermediate_token = select_intermediate_token(
		request.source_chain_id,
		&request.source_token,
		&intermediate_tokens,
		ctx.correlated_tokens.as_deref(),
		ctx.allow_intermediate_equals_source,
	)
	.await?;

	debug!(
		provider = %dapp_id,
		token = intermediate_token.label(),
		"using intermediate token"
	);

	// Swap leg: sell token into the intermediate token
	let swap_request = SwapQuoteRequest {
		chain_id: request.source_chain_id,
		sell_token: request.source_token.clone(),
		sell_token_decimals: request.source_token_decimals,
		buy_token: intermediate_token.address.clone(),
		buy_token_decimals: intermediate_token.decimals,
		amount: request.amount.clone(),
		kind: request.kind,
		account: request.account.clone(),
		receiver: None,
		slippage_bps: request.slippage_bps,
		valid_to: request.valid_to,
	};
	let swap = ctx.swap_quoter.get_swap_quote(&swap_request).await?;

	// Bridge leg: the swap's post-slippage proceeds are what actually
	// gets bridged (estimated; settlement will likely carry surplus)
	let intermediate_amount = swap.amounts.after_slippage.buy_amount.clone();
	debug!(
		provider = %dapp_id,
		amount = %intermediate_amount,
		"expected intermediate token amount"
	);

	let bridge_request = BridgeLegRequest {
		source_chain_id: request.source_chain_id,
		sell_token: intermediate_token.address.clone(),
		sell_token_decimals: intermediate_token.decimals,
		dest_chain_id: request.dest_chain_id,
		buy_token: request.dest_token.clone(),
		buy_token_decimals: request.dest_token_decimals,
		amount: intermediate_amount,
		account: request.account.clone(),
		receiver: request.effective_receiver().to_string(),
		slippage_bps: request.slippage_bps,
	};
	let bridge = provider.get_quote(&bridge_request).await?;

	let settlement = match provider.info().kind {
		ProviderKind::Hook => {
			let call = provider
				.get_unsigned_bridge_call(&bridge_request, &bridge)
				.await?;
			let hook = provider
				.get_signed_hook(request.source_chain_id, &call)
				.await?;
			SettlementPlan::HookCall { call, hook }
		},
		ProviderKind::ReceiverAccount => {
			let receiver = provider.get_bridge_receiver(&bridge_request, &bridge).await?;
			SettlementPlan::ReceiverAccount { receiver }
		},
	};

	Ok(ProviderQuote {
		provider: provider.info().clone(),
		swap,
		bridge,
		settlement,
	})
}

/// Intermediate tokens for the request's pair, memoized through the
/// cache when one is attached; only non-empty responses are cached
async fn fetch_intermediate_tokens(
	provider: &Arc<dyn BridgeProvider>,
	request: &QuoteRequest,
	ctx: &QuotePipelineContext,
) -> Result<Vec<TokenInfo>, ProviderQuoteError> {
	let cache_key = intermediate_tokens_cache_key(
		&provider.info().dapp_id,
		request.dest_chain_id,
		Some(request.source_chain_id),
		Some(&request.dest_token),
	);

	let cache = ctx.intermediate_tokens_cache.as_deref();

	let intermediate_tokens = match cache.and_then(|cache| cache.get(&cache_key)) {
		Some(cached) => cached,
		None => {
			let fetched = provider.get_intermediate_tokens(request).await?;
			if !fetched.is_empty() {
				if let Some(cache) = cache {
					cache.set(&cache_key, fetched.clone());
				}
			}
			fetched
		},
	};

	if intermediate_tokens.is_empty() {
		return Err(ProviderQuoteError::NoIntermediateTokens);
	}

	Ok(intermediate_tokens)
}
