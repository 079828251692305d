//! Quote request model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::U256;
use crate::quotes::errors::QuoteValidationError;

/// Order kind for the swap leg
///
/// The bridging pipeline only accepts sell orders; buy orders are
/// rejected with `ProviderQuoteError::OnlySellOrdersSupported`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderKind {
	Sell,
	Buy,
}

/// Request to move `amount` of a token on the source chain into a token
/// on the destination chain
///
/// Immutable once handed to a strategy; per-call knobs (timeouts,
/// provider filter, progress callback) travel separately in
/// `MultiQuoteOptions`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuoteRequest {
	/// Correlation ID for logs and progress reporting
	pub request_id: String,

	pub source_chain_id: u64,
	pub source_token: String,
	pub source_token_decimals: u8,

	pub dest_chain_id: u64,
	pub dest_token: String,
	pub dest_token_decimals: u8,

	/// Sell amount in source token atoms
	pub amount: U256,

	pub kind: OrderKind,

	/// Account the order is placed from
	pub account: String,

	/// Recipient on the destination chain; defaults to `account`
	pub receiver: Option<String>,

	/// Slippage tolerance in basis points
	pub slippage_bps: Option<u16>,

	/// Unix deadline for the quoted order
	pub valid_to: Option<u64>,
}

impl QuoteRequest {
	#[allow(clippy::too_many_arguments)]
	pub fn new(
		source_chain_id: u64,
		source_token: impl Into<String>,
		source_token_decimals: u8,
		dest_chain_id: u64,
		dest_token: impl Into<String>,
		dest_token_decimals: u8,
		amount: U256,
		account: impl Into<String>,
	) -> Self {
		Self {
			request_id: Uuid::new_v4().to_string(),
			source_chain_id,
			source_token: source_token.into(),
			source_token_decimals,
			dest_chain_id,
			dest_token: dest_token.into(),
			dest_token_decimals,
			amount,
			kind: OrderKind::Sell,
			account: account.into(),
			receiver: None,
			slippage_bps: None,
			valid_to: None,
		}
	}

	pub fn with_receiver(mut self, receiver: impl Into<String>) -> Self {
		self.receiver = Some(receiver.into());
		self
	}

	pub fn with_slippage_bps(mut self, slippage_bps: u16) -> Self {
		self.slippage_bps = Some(slippage_bps);
		self
	}

	pub fn with_valid_to(mut self, valid_to: u64) -> Self {
		self.valid_to = Some(valid_to);
		self
	}

	pub fn with_kind(mut self, kind: OrderKind) -> Self {
		self.kind = kind;
		self
	}

	pub fn is_cross_chain(&self) -> bool {
		self.source_chain_id != self.dest_chain_id
	}

	/// The effective recipient on the destination chain
	pub fn effective_receiver(&self) -> &str {
		self.receiver.as_deref().unwrap_or(&self.account)
	}

	pub fn validate(&self) -> Result<(), QuoteValidationError> {
		self.amount
			.validate()
			.map_err(|reason| QuoteValidationError::InvalidAmount { reason })?;

		if self.amount.is_zero() {
			return Err(QuoteValidationError::InvalidAmount {
				reason: "amount must be greater than zero".to_string(),
			});
		}

		for (field, value) in [
			("source_token", &self.source_token),
			("dest_token", &self.dest_token),
			("account", &self.account),
		] {
			if value.is_empty() {
				return Err(QuoteValidationError::MissingRequiredField {
					field: field.to_string(),
				});
			}
		}

		Ok(())
	}
}
