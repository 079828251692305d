//! U256 model for handling large integers as strings

use serde;

/// U256 value represented as a string to preserve precision
///
/// Used for token amounts that might overflow native integer types.
/// Comparison is numeric: `"0100"` equals `"100"` and `"9"` is less
/// than `"10"`, regardless of string length.
#[derive(Debug, Clone)]
pub struct U256(pub String);

impl U256 {
	/// Create a new U256 from a string
	pub fn new(value: String) -> Self {
		Self(value)
	}

	/// Get the raw string value
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Try to parse as u128 (for smaller values)
	pub fn as_u128(&self) -> Result<u128, std::num::ParseIntError> {
		self.0.parse()
	}

	/// Check if the value is zero
	pub fn is_zero(&self) -> bool {
		!self.0.is_empty() && self.0.chars().all(|c| c == '0')
	}

	/// Validate that the string contains only digits
	pub fn validate(&self) -> Result<(), String> {
		if self.0.is_empty() {
			return Err("U256 value cannot be empty".to_string());
		}

		if !self.0.chars().all(|c| c.is_ascii_digit()) {
			return Err("U256 value must contain only digits".to_string());
		}

		Ok(())
	}

	/// Digits with leading zeros stripped; "0" for zero
	fn significant_digits(&self) -> &str {
		let trimmed = self.0.trim_start_matches('0');
		if trimmed.is_empty() {
			"0"
		} else {
			trimmed
		}
	}
}

impl PartialEq for U256 {
	fn eq(&self, other: &Self) -> bool {
		self.significant_digits() == other.significant_digits()
	}
}

impl Eq for U256 {}

impl PartialOrd for U256 {
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for U256 {
	fn cmp(&self, other: &Self) -> std::cmp::Ordering {
		let a = self.significant_digits();
		let b = other.significant_digits();

		// More significant digits means a larger number; equal lengths
		// compare lexicographically (digits are ASCII-ordered)
		a.len().cmp(&b.len()).then_with(|| a.cmp(b))
	}
}

impl std::fmt::Display for U256 {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<String> for U256 {
	fn from(value: String) -> Self {
		Self(value)
	}
}

impl From<&str> for U256 {
	fn from(value: &str) -> Self {
		Self(value.to_string())
	}
}

impl From<u128> for U256 {
	fn from(value: u128) -> Self {
		Self(value.to_string())
	}
}

impl From<u64> for U256 {
	fn from(value: u64) -> Self {
		Self(value.to_string())
	}
}

// Custom Serde implementation to serialize/deserialize as string
impl serde::Serialize for U256 {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_str(&self.0)
	}
}

impl<'de> serde::Deserialize<'de> for U256 {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		use serde::Deserialize;

		let value = String::deserialize(deserializer)?;
		let u256 = Self(value);
		u256.validate().map_err(serde::de::Error::custom)?;
		Ok(u256)
	}
}
