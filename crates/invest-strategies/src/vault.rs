//! Vault deposit through a swap adapter.

use crate::encoding::IVaultAdapter;
use alloy_primitives::{Address, U256};
use alloy_sol_types::SolCall;
use invest_types::{Call, ChainId, ContractRole, Protocol, StrategyError, StrategyId};

/// Zaps the native deposit into a vault: one payable adapter call.
///
/// The adapter swaps the attached value into the vault's want token and
/// deposits on the user's behalf; both addresses come from the registry.
#[derive(Debug, Clone)]
pub struct VaultDeposit {
	chain_id: ChainId,
	protocol: &'static Protocol,
}

impl VaultDeposit {
	pub fn new(chain_id: ChainId) -> Result<Self, StrategyError> {
		Ok(Self {
			chain_id,
			protocol: invest_registry::beefy(),
		})
	}

	pub async fn build_calls(
		&self,
		amount: U256,
		_user: Address,
		asset: Option<Address>,
	) -> Result<Vec<Call>, StrategyError> {
		if asset.is_some() {
			return Err(StrategyError::unsupported_asset(
				StrategyId::BeefyVaultDeposit,
				"the adapter only takes the native asset",
			));
		}

		let adapter = self
			.protocol
			.contract_address(self.chain_id, ContractRole::Adapter)?;
		let vault = self
			.protocol
			.contract_address(self.chain_id, ContractRole::Vault)?;
		let zap = IVaultAdapter::zapInCall { vault }.abi_encode();
		Ok(vec![Call::new(adapter).with_value(amount).with_data(zap)])
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy_primitives::address;
	use invest_types::CELO;

	const USER: Address = address!("00000000000000000000000000000000000000be");

	#[tokio::test]
	async fn zap_is_a_single_payable_adapter_call() {
		let strategy = VaultDeposit::new(CELO).unwrap();
		let calls = strategy
			.build_calls(U256::from(42u64), USER, None)
			.await
			.unwrap();

		assert_eq!(calls.len(), 1);
		let adapter = invest_registry::beefy()
			.contract_address(CELO, ContractRole::Adapter)
			.unwrap();
		assert_eq!(calls[0].to, adapter);
		assert_eq!(calls[0].value, U256::from(42u64));
		assert_eq!(calls[0].data[..4], IVaultAdapter::zapInCall::SELECTOR);
	}

	#[tokio::test]
	async fn erc20_input_is_rejected() {
		let strategy = VaultDeposit::new(CELO).unwrap();
		let err = strategy
			.build_calls(U256::from(1u64), USER, Some(USER))
			.await
			.unwrap_err();
		assert!(matches!(
			err,
			StrategyError::UnsupportedAssetForStrategy { .. }
		));
	}
}
