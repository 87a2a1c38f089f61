//! Native staking through the stCELO manager.

use crate::encoding::IStakingManager;
use alloy_primitives::{Address, U256};
use alloy_sol_types::SolCall;
use invest_types::{Call, ChainId, ContractRole, Protocol, StrategyError, StrategyId};

/// Stakes the native asset: one payable `deposit()` carrying the amount.
#[derive(Debug, Clone)]
pub struct NativeStaking {
	chain_id: ChainId,
	protocol: &'static Protocol,
}

impl NativeStaking {
	pub fn new(chain_id: ChainId) -> Result<Self, StrategyError> {
		Ok(Self {
			chain_id,
			protocol: invest_registry::stcelo_protocol(),
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
				StrategyId::StCeloStaking,
				"staking only takes the native asset",
			));
		}

		let manager = self
			.protocol
			.contract_address(self.chain_id, ContractRole::Manager)?;
		let deposit = IStakingManager::depositCall {}.abi_encode();
		Ok(vec![Call::new(manager).with_value(amount).with_data(deposit)])
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy_primitives::address;
	use invest_types::CELO;

	const USER: Address = address!("00000000000000000000000000000000000000de");

	#[tokio::test]
	async fn stake_is_a_single_payable_call() {
		let strategy = NativeStaking::new(CELO).unwrap();
		let amount = U256::from(10_000_000_000_000_000_000u128);
		let calls = strategy.build_calls(amount, USER, None).await.unwrap();

		assert_eq!(calls.len(), 1);
		let manager = invest_registry::stcelo_protocol()
			.contract_address(CELO, ContractRole::Manager)
			.unwrap();
		assert_eq!(calls[0].to, manager);
		assert_eq!(calls[0].value, amount);
		assert_eq!(calls[0].data[..4], IStakingManager::depositCall::SELECTOR);
	}

	#[tokio::test]
	async fn any_asset_is_rejected() {
		let strategy = NativeStaking::new(CELO).unwrap();
		let err = strategy
			.build_calls(U256::from(1u64), USER, Some(USER))
			.await
			.unwrap_err();
		assert!(matches!(
			err,
			StrategyError::UnsupportedAssetForStrategy { .. }
		));
	}

	#[tokio::test]
	async fn wrong_chain_is_a_registry_error() {
		let strategy = NativeStaking::new(8453).unwrap();
		let err = strategy
			.build_calls(U256::from(1u64), USER, None)
			.await
			.unwrap_err();
		assert!(matches!(err, StrategyError::Registry(_)));
	}
}
