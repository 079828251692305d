//! Blockchain network models

use serde::{Deserialize, Serialize};

/// A blockchain network supported by a bridge provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChainInfo {
	/// Chain ID (e.g. 1 for Ethereum mainnet)
	pub id: u64,
	/// Human-readable name (e.g. "Ethereum", "Base")
	pub label: String,
	/// Whether this is a test network
	pub is_testnet: bool,
}

impl ChainInfo {
	pub fn new(id: u64, label: impl Into<String>, is_testnet: bool) -> Self {
		Self {
			id,
			label: label.into(),
			is_testnet,
		}
	}
}

/// Well-known chain IDs used across the workspace
pub mod chains {
	pub const MAINNET: u64 = 1;
	pub const BNB: u64 = 56;
	pub const GNOSIS: u64 = 100;
	pub const POLYGON: u64 = 137;
	pub const BASE: u64 = 8453;
	pub const ARBITRUM_ONE: u64 = 42161;
	pub const AVALANCHE: u64 = 43114;
	pub const LINEA: u64 = 59144;
	pub const SEPOLIA: u64 = 11155111;
}
