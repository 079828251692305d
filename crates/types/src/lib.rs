//! Bridge Aggregator Types
//!
//! Shared models and traits for the cross-chain bridge quote
//! aggregator. This crate contains all domain models organized by
//! business entity.

pub mod models;
pub mod providers;
pub mod quotes;

// Re-export chrono and serde_json for convenience
pub use chrono;
pub use serde_json;

// Re-export commonly used types for convenience
pub use models::{chains, same_address, ChainInfo, TokenInfo, U256};

pub use quotes::{
	AmountsAfterSlippage, BridgeFees, BridgeLegQuote, CrossChainQuote, OrderKind, ProviderError,
	ProviderQuote, ProviderQuoteError, ProviderQuoteResult, QuoteAmounts, QuoteRequest,
	QuoteValidationError, SettlementPlan, SwapLegQuote,
};

pub use providers::{
	BridgeLegRequest, BridgeProvider, BridgeStatus, BridgeStatusResult, BridgingParams,
	CorrelatedTokens, ProviderInfo, ProviderKind, ProviderResult, QuoteOpResult, SignedHook,
	SwapQuoteRequest, SwapQuoter, UnsignedBridgeCall,
};

#[cfg(any(test, feature = "mocks"))]
pub use providers::{MockCorrelatedTokens, MockSwapQuoter};
