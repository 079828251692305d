//! Bridge provider domain: identity, capabilities, and gateway traits

pub mod models;
pub mod traits;

pub use models::{
	BridgeStatus, BridgeStatusResult, BridgingParams, ProviderInfo, ProviderKind, SignedHook,
	UnsignedBridgeCall,
};
pub use traits::{
	BridgeLegRequest, BridgeProvider, CorrelatedTokens, ProviderResult, QuoteOpResult,
	SwapQuoteRequest, SwapQuoter,
};

#[cfg(any(test, feature = "mocks"))]
pub use traits::{MockCorrelatedTokens, MockSwapQuoter};
