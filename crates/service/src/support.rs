//! Configurable stub providers and fixtures for the service tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use bridge_types::{
	chains, AmountsAfterSlippage, BridgeFees, BridgeLegQuote, BridgeLegRequest, BridgeProvider,
	ChainInfo, OrderKind, ProviderInfo, ProviderKind, ProviderQuote, ProviderQuoteError,
	ProviderQuoteResult, ProviderResult, QuoteAmounts, QuoteOpResult, QuoteRequest,
	SettlementPlan, SignedHook, SwapLegQuote, SwapQuoteRequest, SwapQuoter, TokenInfo, U256,
	UnsignedBridgeCall,
};

pub const SOURCE_TOKEN: &str = "0x6b175474e89094c44da98b954eedeac495271d0f"; // DAI
pub const DEST_TOKEN: &str = "0x833589fcd6edb6e08f4c7c32d4f71b54bda02913"; // USDC on Base
pub const USDC_MAINNET: &str = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48";
pub const ACCOUNT: &str = "0x742d35cc6675c88b1c6e3c0c61b2e9a3d0c3f123";

/// Bridge provider stub with scriptable networks, tokens, quote
/// outcome, and latency
#[derive(Debug)]
pub struct StubBridgeProvider {
	info: ProviderInfo,
	networks: Vec<ChainInfo>,
	intermediate_tokens: Vec<TokenInfo>,
	buy_amount: U256,
	quote_delay: Option<Duration>,
	quote_error: Option<ProviderQuoteError>,
	intermediate_tokens_calls: AtomicUsize,
	quote_calls: AtomicUsize,
}

impl StubBridgeProvider {
	pub fn new(dapp_id: &str) -> Self {
		Self {
			info: ProviderInfo::new(dapp_id, format!("Stub {dapp_id}"), ProviderKind::Hook),
			networks: vec![
				ChainInfo::new(chains::MAINNET, "Ethereum", false),
				ChainInfo::new(chains::BASE, "Base", false),
			],
			intermediate_tokens: vec![TokenInfo::new(chains::MAINNET, USDC_MAINNET, 6)
				.with_symbol("USDC")],
			buy_amount: U256::from("1000000"),
			quote_delay: None,
			quote_error: None,
			intermediate_tokens_calls: AtomicUsize::new(0),
			quote_calls: AtomicUsize::new(0),
		}
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

	pub fn with_buy_amount(mut self, buy_amount: impl Into<U256>) -> Self {
		self.buy_amount = buy_amount.into();
		self
	}

	pub fn with_quote_delay(mut self, delay: Duration) -> Self {
		self.quote_delay = Some(delay);
		self
	}

	pub fn with_quote_error(mut self, error: ProviderQuoteError) -> Self {
		self.quote_error = Some(error);
		self
	}

	pub fn intermediate_tokens_calls(&self) -> usize {
		self.intermediate_tokens_calls.load(Ordering::SeqCst)
	}

	pub fn quote_calls(&self) -> usize {
		self.quote_calls.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl BridgeProvider for StubBridgeProvider {
	fn info(&self) -> &ProviderInfo {
		&self.info
	}

	async fn get_networks(&self) -> ProviderResult<Vec<ChainInfo>> {
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

		Ok(bridge_leg_quote(request, self.buy_amount.clone()))
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
}

/// Swap quoter stub: prices 1:1, minus nothing
#[derive(Debug, Default)]
pub struct StubSwapQuoter;

#[async_trait]
impl SwapQuoter for StubSwapQuoter {
	async fn get_swap_quote(&self, request: &SwapQuoteRequest) -> QuoteOpResult<SwapLegQuote> {
		Ok(SwapLegQuote {
			chain_id: request.chain_id,
			sell_token: request.sell_token.clone(),
			buy_token: request.buy_token.clone(),
			amounts: QuoteAmounts::exact(request.amount.clone(), request.amount.clone()),
			fee: None,
		})
	}

	async fn get_single_chain_quote(&self, request: &QuoteRequest) -> QuoteOpResult<SwapLegQuote> {
		Ok(SwapLegQuote {
			chain_id: request.source_chain_id,
			sell_token: request.source_token.clone(),
			buy_token: request.dest_token.clone(),
			amounts: QuoteAmounts::exact(request.amount.clone(), request.amount.clone()),
			fee: None,
		})
	}
}

/// Minimal provider for tests that only touch identity
pub fn test_provider(dapp_id: &str) -> Arc<dyn BridgeProvider> {
	Arc::new(StubBridgeProvider::new(dapp_id))
}

/// Cross-chain request: DAI on mainnet into USDC on Base
pub fn cross_chain_request() -> QuoteRequest {
	QuoteRequest::new(
		chains::MAINNET,
		SOURCE_TOKEN,
		18,
		chains::BASE,
		DEST_TOKEN,
		6,
		U256::from("1000000000000000000"),
		ACCOUNT,
	)
}

/// Same-chain request: DAI into USDC, both on mainnet
pub fn same_chain_request() -> QuoteRequest {
	let mut request = cross_chain_request();
	request.dest_chain_id = chains::MAINNET;
	request.dest_token = USDC_MAINNET.to_string();
	request
}

fn bridge_leg_quote(request: &BridgeLegRequest, buy_amount: U256) -> BridgeLegQuote {
	BridgeLegQuote {
		source_chain_id: request.source_chain_id,
		dest_chain_id: request.dest_chain_id,
		sell_token: request.sell_token.clone(),
		buy_token: request.buy_token.clone(),
		amounts: QuoteAmounts {
			sell_amount: request.amount.clone(),
			buy_amount: buy_amount.clone(),
			after_slippage: AmountsAfterSlippage {
				sell_amount: request.amount.clone(),
				buy_amount,
			},
		},
		fees: BridgeFees::default(),
		expected_fill_time_seconds: Some(30),
		quote_timestamp: Utc::now(),
	}
}

/// Successful result with the given post-slippage buy amount
pub fn quote_result(dapp_id: &str, buy_amount: &str) -> ProviderQuoteResult {
	let request = BridgeLegRequest {
		source_chain_id: chains::MAINNET,
		sell_token: USDC_MAINNET.to_string(),
		sell_token_decimals: 6,
		dest_chain_id: chains::BASE,
		buy_token: DEST_TOKEN.to_string(),
		buy_token_decimals: 6,
		amount: U256::from("1000000"),
		account: ACCOUNT.to_string(),
		receiver: ACCOUNT.to_string(),
		slippage_bps: None,
	};

	let quote = ProviderQuote {
		provider: ProviderInfo::new(dapp_id, format!("Stub {dapp_id}"), ProviderKind::Hook),
		swap: SwapLegQuote {
			chain_id: chains::MAINNET,
			sell_token: SOURCE_TOKEN.to_string(),
			buy_token: USDC_MAINNET.to_string(),
			amounts: QuoteAmounts::exact(U256::from("1000000"), U256::from("1000000")),
			fee: None,
		},
		bridge: bridge_leg_quote(&request, U256::from(buy_amount.to_string())),
		settlement: SettlementPlan::ReceiverAccount {
			receiver: ACCOUNT.to_string(),
		},
	};

	ProviderQuoteResult::ok(dapp_id, quote)
}

/// Request variant used to assert that buy orders are rejected
pub fn buy_order_request() -> QuoteRequest {
	cross_chain_request().with_kind(OrderKind::Buy)
}
