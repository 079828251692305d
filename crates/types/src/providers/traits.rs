//! Core traits implemented by bridge providers and their collaborators
//!
//! Provider gateways (HTTP clients, calldata encoders, signers) live
//! outside this workspace; the aggregation core only depends on the
//! contracts defined here.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::models::{ChainInfo, TokenInfo, U256};
use crate::providers::models::{
	BridgeStatusResult, BridgingParams, ProviderInfo, SignedHook, UnsignedBridgeCall,
};
use crate::quotes::errors::{ProviderError, ProviderQuoteError};
use crate::quotes::request::{OrderKind, QuoteRequest};
use crate::quotes::result::{BridgeLegQuote, SwapLegQuote};

/// Result type for provider quote-path operations
pub type QuoteOpResult<T> = Result<T, ProviderQuoteError>;

/// Result type for provider management operations
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Request for the bridge leg: sell the intermediate token on the
/// source chain for the destination token on the destination chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeLegRequest {
	pub source_chain_id: u64,
	/// The intermediate token the swap leg settles into
	pub sell_token: String,
	pub sell_token_decimals: u8,
	pub dest_chain_id: u64,
	pub buy_token: String,
	pub buy_token_decimals: u8,
	/// Estimated intermediate amount (the swap leg's post-slippage buy)
	pub amount: U256,
	pub account: String,
	pub receiver: String,
	pub slippage_bps: Option<u16>,
}

/// A bridge provider gateway
///
/// `get_networks`, `get_intermediate_tokens` and `get_quote` participate
/// in aggregation; the remaining operations are opaque to the core and
/// default to `UnsupportedOperation`, so gateways only implement what
/// their bridge actually offers.
#[async_trait]
pub trait BridgeProvider: Send + Sync + Debug {
	fn info(&self) -> &ProviderInfo;

	/// Networks this provider can bridge to
	async fn get_networks(&self) -> ProviderResult<Vec<ChainInfo>>;

	/// Candidate settlement tokens for the requested pair, in the
	/// provider's own preference order
	async fn get_intermediate_tokens(&self, request: &QuoteRequest)
		-> QuoteOpResult<Vec<TokenInfo>>;

	/// Price the bridge leg
	async fn get_quote(&self, request: &BridgeLegRequest) -> QuoteOpResult<BridgeLegQuote>;

	/// Build the unsigned call that executes the bridging
	async fn get_unsigned_bridge_call(
		&self,
		request: &BridgeLegRequest,
		quote: &BridgeLegQuote,
	) -> QuoteOpResult<UnsignedBridgeCall>;

	/// Pre-authorize the bridge call as a post-swap hook
	/// (`ProviderKind::Hook` providers)
	async fn get_signed_hook(
		&self,
		chain_id: u64,
		call: &UnsignedBridgeCall,
	) -> QuoteOpResult<SignedHook> {
		let _ = (chain_id, call);
		Err(ProviderError::UnsupportedOperation {
			operation: "get_signed_hook".to_string(),
			dapp_id: self.info().dapp_id.clone(),
		}
		.into())
	}

	/// Resolve the receiver account the swap proceeds must be sent to
	/// (`ProviderKind::ReceiverAccount` providers)
	async fn get_bridge_receiver(
		&self,
		request: &BridgeLegRequest,
		quote: &BridgeLegQuote,
	) -> QuoteOpResult<String> {
		let _ = (request, quote);
		Err(ProviderError::UnsupportedOperation {
			operation: "get_bridge_receiver".to_string(),
			dapp_id: self.info().dapp_id.clone(),
		}
		.into())
	}

	/// Limits and defaults for a bridging pair
	async fn get_bridging_params(&self, request: &BridgeLegRequest)
		-> ProviderResult<BridgingParams> {
		let _ = request;
		Err(self.unsupported("get_bridging_params"))
	}

	/// Status of an in-flight bridging operation
	async fn get_status(
		&self,
		bridging_id: &str,
		origin_chain_id: u64,
	) -> ProviderResult<BridgeStatusResult> {
		let _ = (bridging_id, origin_chain_id);
		Err(self.unsupported("get_status"))
	}

	/// Explorer link for an in-flight bridging operation
	async fn get_explorer_url(&self, bridging_id: &str) -> ProviderResult<String> {
		let _ = bridging_id;
		Err(self.unsupported("get_explorer_url"))
	}

	/// Transaction cancelling a pending bridging operation
	async fn get_cancel_bridging_tx(&self, bridging_id: &str)
		-> ProviderResult<UnsignedBridgeCall> {
		let _ = bridging_id;
		Err(self.unsupported("get_cancel_bridging_tx"))
	}

	/// Transaction refunding an expired bridging operation
	async fn get_refund_bridging_tx(&self, bridging_id: &str)
		-> ProviderResult<UnsignedBridgeCall> {
		let _ = bridging_id;
		Err(self.unsupported("get_refund_bridging_tx"))
	}

	#[doc(hidden)]
	fn unsupported(&self, operation: &str) -> ProviderError {
		ProviderError::UnsupportedOperation {
			operation: operation.to_string(),
			dapp_id: self.info().dapp_id.clone(),
		}
	}
}

/// Request for the swap leg: sell the source token for the intermediate
/// token on the source chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapQuoteRequest {
	pub chain_id: u64,
	pub sell_token: String,
	pub sell_token_decimals: u8,
	pub buy_token: String,
	pub buy_token_decimals: u8,
	pub amount: U256,
	pub kind: OrderKind,
	pub account: String,
	/// Receiver of the swap proceeds; overridden by the settlement plan
	/// for bridged quotes
	pub receiver: Option<String>,
	pub slippage_bps: Option<u16>,
	pub valid_to: Option<u64>,
}

/// The order-book quoting collaborator
///
/// Prices the leg that converts the source token into the intermediate
/// token, and serves plain single-chain quotes for same-chain requests.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait SwapQuoter: Send + Sync {
	async fn get_swap_quote(&self, request: &SwapQuoteRequest) -> QuoteOpResult<SwapLegQuote>;

	/// The non-bridging path used for same-chain requests
	async fn get_single_chain_quote(&self, request: &QuoteRequest) -> QuoteOpResult<SwapLegQuote>;
}

/// Optional caller-supplied source of correlated-token hints
///
/// Failures are swallowed by the intermediate token selector; a broken
/// hint service must never abort quoting.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait CorrelatedTokens: Send + Sync {
	async fn correlated_tokens(&self, chain_id: u64) -> ProviderResult<Vec<String>>;
}
