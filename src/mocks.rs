//! Mock providers and collaborators for examples and tests
//!
//! Scriptable stand-ins for the external gateways: a bridge provider
//! with configurable networks, tokens, latency and failure mode, and a
//! 1:1 swap quoter. Call counters make caching and fan-out behavior
//! observable from tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use bridge_types::{
	chains, AmountsAfterSlippage, BridgeFees, BridgeLegQuote, BridgeLegRequest, BridgeProvider,
	BridgeStatus, BridgeStatusResult, ChainInfo, ProviderInfo, ProviderKind, ProviderQuoteError,
	ProviderResult, QuoteAmounts, QuoteOpResult, QuoteRequest, SignedHook, SwapLegQuote,
	SwapQuoteRequest, SwapQuoter, TokenInfo, U256, UnsignedBridgeCall,
};

/// USDC on Ethereum mainnet, the default intermediate token
pub const MOCK_INTERMEDIATE_TOKEN: &str = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48";

/// Configurable mock bridge provider
#[derive(Debug)]
pub struct MockBridgeProvider {
	info: ProviderInfo,
	networks: Vec<ChainInfo>,
	intermediate_tokens: Vec<TokenInfo>,
	buy_amount: U256,
	quote_delay: Option<Duration>,
	quote_error: Option<ProviderQuoteError>,
	networks_calls: AtomicUsize,
	intermediate_tokens_calls: AtomicUsize,
	quote_calls: AtomicUsize,
}

impl MockBridgeProvider {
	pub fn new(dapp_id: &str) -> Self {
		Self {
			info: ProviderInfo::new(dapp_id, format!("Mock Bridge {dapp_id}"), ProviderKind::Hook),
			networks: vec![
				ChainInfo::new(chains::MAINNET, "Ethereum", false),
				ChainInfo::new(chains::BASE, "Base", false),
				ChainInfo::new(chains::ARBITRUM_ONE, "Arbitrum One", false),
			],
			intermediate_tokens: vec![TokenInfo::new(chains::MAINNET, MOCK_INTERMEDIATE_TOKEN, 6)
				.with_symbol("USDC")
				.with_name("USD Coin")],
			buy_amount: U256::from("1000000"),
			quote_delay: None,
			quote_error: None,
			networks_calls: AtomicUsize::new(0),
			intermediate_tokens_calls: AtomicUsize::new(0),
			quote_calls: AtomicUsize::new(0),
		}
	}

	/// Wrap into the trait object the aggregator expects
	pub fn into_provider(self) -> Arc<dyn BridgeProvider> {
		Arc::new(self)
	}

	pub fn with_kind(mut self, kind: ProviderKind) -> Self {
		self.info.kind = kind;
		self
	}

	pub fn with_networks(mut self, networks: Vec<ChainInfo>) -> Self {
		self.networks = networks;
		self
	}

	pub fn with_intermediate_tokens(mut self, tokens: Vec<TokenInfo>) -> Self {
		self.intermediate_tokens = tokens;
		self
	}

	/// Post-slippage destination amount every quote reports
	pub fn with_buy_amount(mut self, buy_amount: impl Into<U256>) -> Self {
		self.buy_amount = buy_amount.into();
		self
	}

	pub fn with_quote_delay(mut self, delay: Duration) -> Self {
		self.quote_delay = Some(delay);
		self
	}

	/// Make every quote attempt fail with the given error
	pub fn with_quote_error(mut self, error: ProviderQuoteError) -> Self {
		self.quote_error = Some(error);
		self
	}

	pub fn networks_calls(&self) -> usize {
		self.networks_calls.load(Ordering::SeqCst)
	}

	pub fn intermediate_tokens_calls(&self) -> usize {
		self.intermediate_tokens_calls.load(Ordering::SeqCst)
	}

	pub fn quote_calls(&self) -> usize {
		self.quote_calls.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl BridgeProvider for MockBridgeProvider {
	fn info(&self) -> &ProviderInfo {
		&self.info
	}

	async fn get_networks(&self) -> ProviderResult<Vec<ChainInfo>> {
		self.networks_calls.fetch_add(1, Ordering::SeqCst);
		Ok(self.networks.clone())
	}

	async fn get_intermediate_tokens(
		&self,
		_request: &QuoteRequest,
	) -> QuoteOpResult<Vec<TokenInfo>> {
		self.intermediate_tokens_calls.fetch_add(1, Ordering::SeqCst);
		Ok(self.intermediate_tokens.clone())
	}

	async fn get_quote(&self, request: &BridgeLegRequest) -> QuoteOpResult<BridgeLegQuote> {
		self.quote_calls.fetch_add(1, Ordering::SeqCst);

		if let Some(delay) = self.quote_delay {
			tokio::time::sleep(delay).await;
		}

		if let Some(error) = &self.quote_error {
			return Err(error.clone());
		}

		Ok(BridgeLegQuote {
			source_chain_id: request.source_chain_id,
			dest_chain_id: request.dest_chain_id,
			sell_token: request.sell_token.clone(),
			buy_token: request.buy_token.clone(),
			amounts: QuoteAmounts {
				sell_amount: request.amount.clone(),
				buy_amount: self.buy_amount.clone(),
				after_slippage: AmountsAfterSlippage {
					sell_amount: request.amount.clone(),
					buy_amount: self.buy_amount.clone(),
				},
			},
			fees: BridgeFees::default(),
			expected_fill_time_seconds: Some(30),
			quote_timestamp: Utc::now(),
		})
	}

	async fn get_unsigned_bridge_call(
		&self,
		request: &BridgeLegRequest,
		_quote: &BridgeLegQuote,
	) -> QuoteOpResult<UnsignedBridgeCall> {
		Ok(UnsignedBridgeCall {
			chain_id: request.source_chain_id,
			to: "0x9008d19f58aabd9ed0d60971565aa8510560ab41".to_string(),
			value: U256::from("0"),
			calldata: "0xdeadbeef".to_string(),
		})
	}

	async fn get_signed_hook(
		&self,
		_chain_id: u64,
		call: &UnsignedBridgeCall,
	) -> QuoteOpResult<SignedHook> {
		Ok(SignedHook {
			target: call.to.clone(),
			calldata: call.calldata.clone(),
			gas_limit: 500_000,
			recipient: "0x40a50cf069e992aa4536211b23f286ef88752187".to_string(),
		})
	}

	async fn get_bridge_receiver(
		&self,
		_request: &BridgeLegRequest,
		_quote: &BridgeLegQuote,
	) -> QuoteOpResult<String> {
		Ok("0x2b8a2dd2a2d7da1f0d0a9f7db87e5b3a5e9e1a01".to_string())
	}

	async fn get_status(
		&self,
		bridging_id: &str,
		_origin_chain_id: u64,
	) -> ProviderResult<BridgeStatusResult> {
		let _ = bridging_id;
		Ok(BridgeStatusResult {
			status: BridgeStatus::Executed,
			fill_tx_hash: Some("0xf111".to_string()),
		})
	}

	async fn get_explorer_url(&self, bridging_id: &str) -> ProviderResult<String> {
		Ok(format!("https://bridge.example/tx/{bridging_id}"))
	}
}

/// Swap quoter mock pricing 1:1, with an optional fixed output override
#[derive(Debug, Default)]
pub struct MockSwapQuoter {
	buy_amount: Option<U256>,
	swap_quote_calls: AtomicUsize,
}

impl MockSwapQuoter {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn into_quoter(self) -> Arc<dyn SwapQuoter> {
		Arc::new(self)
	}

	/// Fixed intermediate amount instead of 1:1 pricing
	pub fn with_buy_amount(mut self, buy_amount: impl Into<U256>) -> Self {
		self.buy_amount = Some(buy_amount.into());
		self
	}

	pub fn swap_quote_calls(&self) -> usize {
		self.swap_quote_calls.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl SwapQuoter for MockSwapQuoter {
	async fn get_swap_quote(&self, request: &SwapQuoteRequest) -> QuoteOpResult<SwapLegQuote> {
		self.swap_quote_calls.fetch_add(1, Ordering::SeqCst);

		let buy_amount = self
			.buy_amount
			.clone()
			.unwrap_or_else(|| request.amount.clone());

		Ok(SwapLegQuote {
			chain_id: request.chain_id,
			sell_token: request.sell_token.clone(),
			buy_token: request.buy_token.clone(),
			amounts: QuoteAmounts::exact(request.amount.clone(), buy_amount),
			fee: None,
		})
	}

	async fn get_single_chain_quote(&self, request: &QuoteRequest) -> QuoteOpResult<SwapLegQuote> {
		let buy_amount = self
			.buy_amount
			.clone()
			.unwrap_or_else(|| request.amount.clone());

		Ok(SwapLegQuote {
			chain_id: request.source_chain_id,
			sell_token: request.source_token.clone(),
			buy_token: request.dest_token.clone(),
			amounts: QuoteAmounts::exact(request.amount.clone(), buy_amount),
			fee: None,
		})
	}
}
