//! The unit of on-chain execution handed to the wallet layer.

use alloy_primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

/// A single low-level contract call.
///
/// Gas and nonce are deliberately absent; they belong to the execution
/// layer that signs and submits the sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Call {
	/// Destination contract or account.
	pub to: Address,
	/// Native value attached to the call.
	#[serde(default)]
	pub value: U256,
	/// ABI-encoded payload; empty for plain value transfers.
	#[serde(default)]
	pub data: Bytes,
}

impl Call {
	/// A call with no value and no payload.
	pub fn new(to: Address) -> Self {
		Self {
			to,
			value: U256::ZERO,
			data: Bytes::new(),
		}
	}

	pub fn with_value(mut self, value: U256) -> Self {
		self.value = value;
		self
	}

	pub fn with_data(mut self, data: impl Into<Bytes>) -> Self {
		self.data = data.into();
		self
	}
}
