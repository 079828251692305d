//! Quote domain: requests, per-provider results, and errors

pub mod errors;
pub mod request;
pub mod result;

pub use errors::{ProviderError, ProviderQuoteError, QuoteValidationError};
pub use request::{OrderKind, QuoteRequest};
pub use result::{
	AmountsAfterSlippage, BridgeFees, BridgeLegQuote, CrossChainQuote, ProviderQuote,
	ProviderQuoteResult, QuoteAmounts, SettlementPlan, SwapLegQuote,
};
