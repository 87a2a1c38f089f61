//! Fungible asset catalog entries.

use crate::{ChainId, RegistryError};
use alloy_primitives::Address;
use std::collections::HashMap;

/// A fungible asset known to the platform.
///
/// Non-native tokens carry a contract address for every chain they are used
/// on; native assets are identified purely by `is_native` and never have an
/// address entry.
#[derive(Debug, Clone)]
pub struct Token {
	/// Canonical, unique display name (e.g. "USDC").
	pub name: &'static str,
	/// Icon asset reference for the consuming frontend.
	pub icon: &'static str,
	/// Decimal precision of the smallest unit.
	pub decimals: u8,
	/// Whether this is a chain's intrinsic currency.
	pub is_native: bool,
	/// Whether a strategy listing this token treats it as optional input.
	pub optional: bool,
	/// Per-chain deployed contract addresses.
	pub addresses: HashMap<ChainId, Address>,
}

impl Token {
	/// Resolves the token's contract address on the given chain.
	///
	/// Native assets have no contract address by invariant, so resolving one
	/// fails the same way as a missing chain entry.
	pub fn address_on(&self, chain_id: ChainId) -> Result<Address, RegistryError> {
		self.addresses
			.get(&chain_id)
			.copied()
			.ok_or(RegistryError::UnsupportedChainAsset {
				token: self.name,
				chain_id,
			})
	}
}
