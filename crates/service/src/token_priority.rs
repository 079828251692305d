//! Token classification for intermediate token selection
//!
//! Per-chain registries of the tokens that make good settlement
//! intermediaries: deep-liquidity stablecoins first, then caller-hinted
//! correlated tokens, then the chain's native asset.

use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

use bridge_types::chains;

/// Sentinel address providers use for the chain's native currency
pub const NATIVE_TOKEN_ADDRESS: &str = "0xeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee";

lazy_static! {
	/// High-priority stablecoins (USDC/USDT) per chain, lower-cased
	static ref STABLECOIN_REGISTRY: HashMap<u64, HashSet<&'static str>> = {
		let mut registry = HashMap::new();
		registry.insert(
			chains::MAINNET,
			HashSet::from([
				"0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48", // USDC
				"0xdac17f958d2ee523a2206206994597c13d831ec7", // USDT
			]),
		);
		registry.insert(
			chains::BNB,
			HashSet::from([
				"0x8ac76a51cc950d9822d68b83fe1ad97b32cd580d", // USDC
				"0x55d398326f99059ff775485246999027b3197955", // USDT
			]),
		);
		registry.insert(
			chains::GNOSIS,
			HashSet::from([
				"0xddafbb505ad214d7b80b1f830fccc89b60fb7a83", // USDC
				"0x4ecaba5870353805a9f068101a40e0f32ed605c6", // USDT
			]),
		);
		registry.insert(
			chains::POLYGON,
			HashSet::from([
				"0x3c499c542cef5e3811e1192ce70d8cc03d5c3359", // USDC
				"0xc2132d05d31c914a87c6611c10748aeb04b58e8f", // USDT
			]),
		);
		registry.insert(
			chains::BASE,
			HashSet::from([
				"0x833589fcd6edb6e08f4c7c32d4f71b54bda02913", // USDC
			]),
		);
		registry.insert(
			chains::ARBITRUM_ONE,
			HashSet::from([
				"0xaf88d065e77c8cc2239327c5edb3a432268e5831", // USDC
				"0xfd086bc7cd5c481dcc9c85ebe478a1c0b69fcbb9", // USDT
			]),
		);
		registry.insert(
			chains::AVALANCHE,
			HashSet::from([
				"0xb97ef9ef8734c71904d8002f8b6bc66dd9c48a6e", // USDC
				"0x9702230a8ea53601f5cd2dc00fdbc13d4df4a8c7", // USDT
			]),
		);
		registry.insert(
			chains::LINEA,
			HashSet::from([
				"0x176211869ca2b568f2a7d4ee941e073a821ee1ff", // USDC
			]),
		);
		registry.insert(
			chains::SEPOLIA,
			HashSet::from([
				"0x1c7d4b196cb0c7b01d743fbc6116a902379c7238", // USDC
			]),
		);
		registry
	};

	/// Canonical wrapped-native token per chain, lower-cased
	static ref WRAPPED_NATIVE_REGISTRY: HashMap<u64, &'static str> = {
		let mut registry = HashMap::new();
		registry.insert(chains::MAINNET, "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"); // WETH
		registry.insert(chains::BNB, "0xbb4cdb9cbd36b01bd1cbaebf2de08d9173bc095c"); // WBNB
		registry.insert(chains::GNOSIS, "0xe91d153e0b41518a2ce8dd3d7944fa863463a97d"); // WXDAI
		registry.insert(chains::POLYGON, "0x0d500b1d8e8ef31e21c99d1db9a6444d3adf1270"); // WPOL
		registry.insert(chains::BASE, "0x4200000000000000000000000000000000000006"); // WETH
		registry.insert(
			chains::ARBITRUM_ONE,
			"0x82af49447d8a07e3bd95bd0d56f35241523fbab1", // WETH
		);
		registry.insert(
			chains::AVALANCHE,
			"0xb31f66aa3c1e785363f0875a1b74e27b85fd66c7", // WAVAX
		);
		registry.insert(chains::LINEA, "0xe5d7c2a44ffddf6b295a15c148167daaaf5cf34f"); // WETH
		registry.insert(chains::SEPOLIA, "0xfff9976782d46cc05630d1f6ebab18b2324d6b14"); // WETH
		registry
	};
}

/// Priority tiers for intermediate token selection, highest to lowest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TokenPriority {
	Other = 0,
	NativeAsset = 1,
	Correlated = 2,
	StablecoinRegistry = 3,
	SameAsSource = 4,
}

/// Whether the token is in the USDC/USDT registry for its chain
pub fn is_stablecoin_priority_token(chain_id: u64, address: &str) -> bool {
	STABLECOIN_REGISTRY
		.get(&chain_id)
		.map(|tokens| tokens.contains(address.to_lowercase().as_str()))
		.unwrap_or(false)
}

/// Whether the token is in the caller-supplied correlated set
/// (addresses in the set are lower-cased)
pub fn is_correlated_token(address: &str, correlated: &HashSet<String>) -> bool {
	correlated.contains(&address.to_lowercase())
}

/// Whether the address is the native-currency sentinel
pub fn is_native_token(address: &str) -> bool {
	address.eq_ignore_ascii_case(NATIVE_TOKEN_ADDRESS)
}

/// Whether the token is the chain's canonical wrapped-native asset
pub fn is_wrapped_native_token(chain_id: u64, address: &str) -> bool {
	WRAPPED_NATIVE_REGISTRY
		.get(&chain_id)
		.map(|wrapped| address.eq_ignore_ascii_case(wrapped))
		.unwrap_or(false)
}

/// Native or wrapped-native: the pairing the bridging pipeline cannot
/// settle through when it appears on both sides
pub fn is_native_or_wrapped_native(chain_id: u64, address: &str) -> bool {
	is_native_token(address) || is_wrapped_native_token(chain_id, address)
}
