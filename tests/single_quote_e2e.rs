//! End-to-end tests for the single-quote flow

use std::sync::Arc;

use bridge_aggregator::mocks::{MockBridgeProvider, MockSwapQuoter, MOCK_INTERMEDIATE_TOKEN};
use bridge_aggregator::{
	chains, BridgeAggregator, ProviderKind, QuoteRequest, SettlementPlan, StrategyError, U256,
};

const SOURCE_TOKEN: &str = "0x6b175474e89094c44da98b954eedeac495271d0f";
const DEST_TOKEN: &str = "0x833589fcd6edb6e08f4c7c32d4f71b54bda02913";
const USDC_MAINNET: &str = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48";
const ACCOUNT: &str = "0x742d35cc6675c88b1c6e3c0c61b2e9a3d0c3f123";

fn cross_chain_request() -> QuoteRequest {
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

fn same_chain_request() -> QuoteRequest {
	QuoteRequest::new(
		chains::MAINNET,
		SOURCE_TOKEN,
		18,
		chains::MAINNET,
		USDC_MAINNET,
		6,
		U256::from("1000000000000000000"),
		ACCOUNT,
	)
}

#[tokio::test]
async fn test_same_chain_swap_skips_bridging() {
	let provider = Arc::new(MockBridgeProvider::new("acme"));
	let aggregator = BridgeAggregator::builder()
		.with_provider(provider.clone())
		.with_swap_quoter(MockSwapQuoter::new().into_quoter())
		.build()
		.unwrap();

	let quote = aggregator.get_quote(same_chain_request()).await.unwrap();

	assert!(!quote.is_bridged());
	assert_eq!(provider.quote_calls(), 0, "no provider involvement");
}

#[tokio::test]
async fn test_cross_chain_swap_composes_swap_and_bridge_legs() {
	let aggregator = BridgeAggregator::builder()
		.with_provider(MockBridgeProvider::new("acme").with_buy_amount("995000").into_provider())
		.with_swap_quoter(MockSwapQuoter::new().with_buy_amount("990000").into_quoter())
		.build()
		.unwrap();

	let quote = aggregator.get_quote(cross_chain_request()).await.unwrap();

	let bridged = quote.as_bridged().expect("a bridged quote");
	assert_eq!(bridged.provider.dapp_id, "acme");
	// The swap leg buys the intermediate token, the bridge leg sells it
	assert!(bridged.swap.buy_token.eq_ignore_ascii_case(MOCK_INTERMEDIATE_TOKEN));
	assert_eq!(bridged.bridge.amounts.sell_amount, U256::from("990000"));
	assert_eq!(
		bridged.buy_amount_after_slippage(),
		&U256::from("995000")
	);
	assert!(matches!(bridged.settlement, SettlementPlan::HookCall { .. }));
}

#[tokio::test]
async fn test_receiver_account_provider_resolves_receiver() {
	let aggregator = BridgeAggregator::builder()
		.with_provider(
			MockBridgeProvider::new("acct")
				.with_kind(ProviderKind::ReceiverAccount)
				.into_provider(),
		)
		.with_swap_quoter(MockSwapQuoter::new().into_quoter())
		.build()
		.unwrap();

	let quote = aggregator.get_quote(cross_chain_request()).await.unwrap();

	let bridged = quote.as_bridged().unwrap();
	assert!(matches!(
		bridged.settlement,
		SettlementPlan::ReceiverAccount { .. }
	));
}

#[tokio::test]
async fn test_invalid_amount_is_a_validation_error() {
	let aggregator = BridgeAggregator::builder()
		.with_provider(MockBridgeProvider::new("acme").into_provider())
		.with_swap_quoter(MockSwapQuoter::new().into_quoter())
		.build()
		.unwrap();

	let mut request = cross_chain_request();
	request.amount = U256::from("0");

	let result = aggregator.get_quote(request).await;
	assert!(matches!(result, Err(StrategyError::Validation(_))));
}
