//! External DeFi protocol catalog entries.

use crate::{ChainId, RegistryError};
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The named slot a deployed contract fills within a protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractRole {
	Pool,
	Router,
	PositionManager,
	Manager,
	Adapter,
	Vault,
	Farm,
	NativeGateway,
	Wrapper,
}

impl fmt::Display for ContractRole {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			ContractRole::Pool => "pool",
			ContractRole::Router => "router",
			ContractRole::PositionManager => "position_manager",
			ContractRole::Manager => "manager",
			ContractRole::Adapter => "adapter",
			ContractRole::Vault => "vault",
			ContractRole::Farm => "farm",
			ContractRole::NativeGateway => "native_gateway",
			ContractRole::Wrapper => "wrapper",
		};
		f.write_str(name)
	}
}

/// An external smart-contract system with per-chain deployments.
#[derive(Debug, Clone)]
pub struct Protocol {
	/// Unique display name.
	pub name: &'static str,
	pub description: &'static str,
	pub icon: &'static str,
	pub external_link: &'static str,
	/// chain id -> role -> deployed address.
	pub contracts: HashMap<ChainId, HashMap<ContractRole, Address>>,
}

impl Protocol {
	/// Whether the protocol has a deployment on the chain.
	///
	/// A chain is supported iff its role table exists and is non-empty; this
	/// is the sole membership test used anywhere in the system.
	pub fn is_chain_supported(&self, chain_id: ChainId) -> bool {
		self.contracts
			.get(&chain_id)
			.is_some_and(|roles| !roles.is_empty())
	}

	/// Looks up the deployed address for a role on a chain.
	pub fn contract_address(
		&self,
		chain_id: ChainId,
		role: ContractRole,
	) -> Result<Address, RegistryError> {
		self.try_contract_address(chain_id, role)
			.ok_or(RegistryError::MissingContractRole {
				protocol: self.name,
				role,
				chain_id,
			})
	}

	/// Non-failing lookup for roles a strategy treats as optional.
	pub fn try_contract_address(&self, chain_id: ChainId, role: ContractRole) -> Option<Address> {
		self.contracts
			.get(&chain_id)
			.and_then(|roles| roles.get(&role))
			.copied()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy_primitives::address;

	fn protocol() -> Protocol {
		Protocol {
			name: "Test",
			description: "",
			icon: "",
			external_link: "",
			contracts: HashMap::from([
				(
					1,
					HashMap::from([(
						ContractRole::Pool,
						address!("0000000000000000000000000000000000000010"),
					)]),
				),
				(2, HashMap::new()),
			]),
		}
	}

	#[test]
	fn empty_role_table_is_unsupported() {
		let p = protocol();
		assert!(p.is_chain_supported(1));
		assert!(!p.is_chain_supported(2));
		assert!(!p.is_chain_supported(3));
	}

	#[test]
	fn missing_role_is_an_error() {
		let p = protocol();
		assert!(p.contract_address(1, ContractRole::Pool).is_ok());
		assert_eq!(
			p.contract_address(1, ContractRole::Router),
			Err(RegistryError::MissingContractRole {
				protocol: "Test",
				role: ContractRole::Router,
				chain_id: 1,
			})
		);
		assert_eq!(p.try_contract_address(1, ContractRole::Router), None);
	}
}
