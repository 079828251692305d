//! Bridge provider models

use serde::{Deserialize, Serialize};

use crate::models::U256;

/// How a provider settles the bridging step after the swap executes
///
/// A closed set instead of probing providers for optional methods: the
/// pipeline type-switches on the kind to decide which settlement
/// operations to call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderKind {
	/// Bridges through a signed post-swap hook bundled into the order
	Hook,
	/// Bridges from a provider-controlled receiver account
	ReceiverAccount,
}

/// Identity and capabilities of a bridge provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderInfo {
	/// Stable identifier; the join key between request filters and
	/// gateway instances
	pub dapp_id: String,
	/// Display name
	pub name: String,
	pub kind: ProviderKind,
}

impl ProviderInfo {
	pub fn new(dapp_id: impl Into<String>, name: impl Into<String>, kind: ProviderKind) -> Self {
		Self {
			dapp_id: dapp_id.into(),
			name: name.into(),
			kind,
		}
	}
}

/// An unsigned call against the provider's bridge contract
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnsignedBridgeCall {
	pub chain_id: u64,
	pub to: String,
	pub value: U256,
	pub calldata: String,
}

/// A pre-authorized post-swap hook, ready to embed into order app data
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignedHook {
	pub target: String,
	pub calldata: String,
	pub gas_limit: u64,
	/// Account the swap proceeds must be sent to for the hook to fire
	pub recipient: String,
}

/// Provider limits and defaults for a bridging pair
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct BridgingParams {
	pub min_sell_amount: Option<U256>,
	pub max_sell_amount: Option<U256>,
	pub fill_deadline_seconds: Option<u64>,
}

/// Lifecycle state of an in-flight bridging operation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BridgeStatus {
	InProgress,
	Executed,
	Expired,
	Refunded,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BridgeStatusResult {
	pub status: BridgeStatus,
	pub fill_tx_hash: Option<String>,
}
