//! Builder and facade surface tests

use bridge_aggregator::mocks::{MockBridgeProvider, MockSwapQuoter};
use bridge_aggregator::{chains, AggregatorError, BridgeAggregator, BridgeStatus};

#[tokio::test]
async fn test_builder_requires_a_provider() {
	let result = BridgeAggregator::builder()
		.with_swap_quoter(MockSwapQuoter::new().into_quoter())
		.build();

	assert!(matches!(result, Err(AggregatorError::NoProviders)));
}

#[tokio::test]
async fn test_builder_requires_a_swap_quoter() {
	let result = BridgeAggregator::builder()
		.with_provider(MockBridgeProvider::new("acme").into_provider())
		.build();

	assert!(matches!(result, Err(AggregatorError::MissingSwapQuoter)));
}

#[tokio::test]
async fn test_providers_are_exposed_by_dapp_id() {
	let aggregator = BridgeAggregator::builder()
		.with_provider(MockBridgeProvider::new("acme").into_provider())
		.with_provider(MockBridgeProvider::new("zorro").into_provider())
		.with_swap_quoter(MockSwapQuoter::new().into_quoter())
		.build()
		.unwrap();

	assert_eq!(aggregator.providers().len(), 2);
	assert!(aggregator.provider_by_dapp_id("zorro").is_some());
	assert!(aggregator.provider_by_dapp_id("nope").is_none());
}

#[tokio::test]
async fn test_target_networks_come_from_primary_provider() {
	let aggregator = BridgeAggregator::builder()
		.with_provider(MockBridgeProvider::new("acme").into_provider())
		.with_swap_quoter(MockSwapQuoter::new().into_quoter())
		.build()
		.unwrap();

	let networks = aggregator.target_networks().await.unwrap();
	assert!(networks.iter().any(|n| n.id == chains::BASE));
}

#[tokio::test]
async fn test_bridging_status_routes_to_named_provider() {
	let aggregator = BridgeAggregator::builder()
		.with_provider(MockBridgeProvider::new("acme").into_provider())
		.with_swap_quoter(MockSwapQuoter::new().into_quoter())
		.build()
		.unwrap();

	let status = aggregator
		.bridging_status("acme", "bridging-1", chains::MAINNET)
		.await
		.unwrap();
	assert_eq!(status.status, BridgeStatus::Executed);

	let missing = aggregator
		.bridging_status("unknown", "bridging-1", chains::MAINNET)
		.await;
	assert!(missing.is_err());
}
