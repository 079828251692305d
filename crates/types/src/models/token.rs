//! Token models

use serde::{Deserialize, Serialize};

/// A token on a specific chain
///
/// Addresses are compared case-insensitively; EVM addresses are
/// frequently mixed-case (EIP-55) and must not be treated as distinct.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenInfo {
	/// Chain ID where this token exists
	pub chain_id: u64,
	/// Contract address
	pub address: String,
	/// Number of decimal places
	pub decimals: u8,
	/// Token symbol (e.g. "USDC")
	pub symbol: Option<String>,
	/// Human-readable name
	pub name: Option<String>,
}

impl TokenInfo {
	pub fn new(chain_id: u64, address: impl Into<String>, decimals: u8) -> Self {
		Self {
			chain_id,
			address: address.into(),
			decimals,
			symbol: None,
			name: None,
		}
	}

	pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
		self.symbol = Some(symbol.into());
		self
	}

	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Case-insensitive address comparison
	pub fn same_address(&self, other: &str) -> bool {
		self.address.eq_ignore_ascii_case(other)
	}

	/// Display label for logging: symbol if known, address otherwise
	pub fn label(&self) -> &str {
		self.symbol.as_deref().unwrap_or(&self.address)
	}
}

/// Case-insensitive comparison of two token addresses
pub fn same_address(a: &str, b: &str) -> bool {
	a.eq_ignore_ascii_case(b)
}
