//! Quote result models
//!
//! A cross-chain quote is composed of two legs: the swap leg (source
//! token into the intermediate token, priced by the order-book
//! collaborator) and the bridge leg (intermediate token into the
//! destination token, priced by the provider).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::U256;
use crate::providers::{ProviderInfo, SignedHook, UnsignedBridgeCall};
use crate::quotes::errors::ProviderQuoteError;

/// Amounts remaining after the slippage tolerance is applied
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AmountsAfterSlippage {
	pub sell_amount: U256,
	pub buy_amount: U256,
}

/// Sell/buy amounts of one quote leg, before and after slippage
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuoteAmounts {
	pub sell_amount: U256,
	pub buy_amount: U256,
	pub after_slippage: AmountsAfterSlippage,
}

impl QuoteAmounts {
	/// Amounts with no slippage applied
	pub fn exact(sell_amount: U256, buy_amount: U256) -> Self {
		Self {
			after_slippage: AmountsAfterSlippage {
				sell_amount: sell_amount.clone(),
				buy_amount: buy_amount.clone(),
			},
			sell_amount,
			buy_amount,
		}
	}
}

/// Fees charged by the bridge provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct BridgeFees {
	/// Fee taken on the bridged amount, in intermediate token atoms
	pub bridge_fee: Option<U256>,
	/// Gas cost of the destination-side fill, in destination native atoms
	pub destination_gas_fee: Option<U256>,
}

/// The swap leg: source token priced into the intermediate token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SwapLegQuote {
	pub chain_id: u64,
	pub sell_token: String,
	pub buy_token: String,
	pub amounts: QuoteAmounts,
	/// Protocol fee in sell token atoms
	pub fee: Option<U256>,
}

/// The bridge leg: intermediate token priced into the destination token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BridgeLegQuote {
	pub source_chain_id: u64,
	pub dest_chain_id: u64,
	pub sell_token: String,
	pub buy_token: String,
	pub amounts: QuoteAmounts,
	pub fees: BridgeFees,
	pub expected_fill_time_seconds: Option<u64>,
	pub quote_timestamp: DateTime<Utc>,
}

/// How the bridging step is settled after the swap executes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum SettlementPlan {
	/// The provider bridges through a signed post-swap hook
	HookCall {
		call: UnsignedBridgeCall,
		hook: SignedHook,
	},
	/// The provider bridges from a dedicated receiver account
	ReceiverAccount { receiver: String },
}

/// A complete cross-chain quote from one provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderQuote {
	pub provider: ProviderInfo,
	pub swap: SwapLegQuote,
	pub bridge: BridgeLegQuote,
	pub settlement: SettlementPlan,
}

impl ProviderQuote {
	/// The post-slippage destination amount this quote guarantees;
	/// the ranking key for multi/best aggregation
	pub fn buy_amount_after_slippage(&self) -> &U256 {
		&self.bridge.amounts.after_slippage.buy_amount
	}
}

/// Per-provider outcome of a multi/best quote call
///
/// `outcome` is a `Result`, so a result is never both a quote and an
/// error by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderQuoteResult {
	pub provider_dapp_id: String,
	pub outcome: Result<ProviderQuote, ProviderQuoteError>,
}

impl ProviderQuoteResult {
	pub fn ok(provider_dapp_id: impl Into<String>, quote: ProviderQuote) -> Self {
		Self {
			provider_dapp_id: provider_dapp_id.into(),
			outcome: Ok(quote),
		}
	}

	pub fn err(provider_dapp_id: impl Into<String>, error: ProviderQuoteError) -> Self {
		Self {
			provider_dapp_id: provider_dapp_id.into(),
			outcome: Err(error),
		}
	}

	pub fn quote(&self) -> Option<&ProviderQuote> {
		self.outcome.as_ref().ok()
	}

	pub fn error(&self) -> Option<&ProviderQuoteError> {
		self.outcome.as_ref().err()
	}

	pub fn is_success(&self) -> bool {
		self.outcome.is_ok()
	}
}

/// Result of a single-quote call: either a plain same-chain swap or a
/// full cross-chain quote
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum CrossChainQuote {
	SingleChain(SwapLegQuote),
	Bridged(ProviderQuote),
}

impl CrossChainQuote {
	pub fn is_bridged(&self) -> bool {
		matches!(self, Self::Bridged(_))
	}

	pub fn as_bridged(&self) -> Option<&ProviderQuote> {
		match self {
			Self::Bridged(quote) => Some(quote),
			Self::SingleChain(_) => None,
		}
	}

	pub fn as_single_chain(&self) -> Option<&SwapLegQuote> {
		match self {
			Self::SingleChain(swap) => Some(swap),
			Self::Bridged(_) => None,
		}
	}
}
