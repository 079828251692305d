//! Shared domain models used across providers, strategies, and the facade

pub mod chain;
pub mod token;
pub mod u256;

pub use chain::{chains, ChainInfo};
pub use token::{same_address, TokenInfo};
pub use u256::U256;
