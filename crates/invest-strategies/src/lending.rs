//! Lending-market supply (Morpho on Base).

use crate::encoding::{self, ILendingPool, INativeGateway};
use alloy_primitives::{Address, U256};
use alloy_sol_types::SolCall;
use invest_types::{Call, ChainId, ContractRole, Protocol, StrategyError, StrategyId};

/// Supplies an asset into a lending market: approve, then supply.
///
/// Native deposits are only possible on markets that register a
/// [`ContractRole::NativeGateway`]; everywhere else an ERC-20 asset is
/// required.
#[derive(Debug, Clone)]
pub struct LendingSupply {
	chain_id: ChainId,
	protocol: &'static Protocol,
}

impl LendingSupply {
	pub fn new(chain_id: ChainId) -> Result<Self, StrategyError> {
		Ok(Self {
			chain_id,
			protocol: invest_registry::morpho(),
		})
	}

	#[cfg(test)]
	fn with_protocol(chain_id: ChainId, protocol: &'static Protocol) -> Self {
		Self { chain_id, protocol }
	}

	pub async fn build_calls(
		&self,
		amount: U256,
		user: Address,
		asset: Option<Address>,
	) -> Result<Vec<Call>, StrategyError> {
		match asset {
			Some(token) => {
				let pool = self
					.protocol
					.contract_address(self.chain_id, ContractRole::Pool)?;
				let supply = ILendingPool::supplyCall {
					asset: token,
					amount,
					onBehalfOf: user,
					referralCode: 0,
				}
				.abi_encode();
				Ok(vec![
					encoding::erc20_approve(token, pool, amount),
					Call::new(pool).with_data(supply),
				])
			}
			None => {
				let Some(gateway) = self
					.protocol
					.try_contract_address(self.chain_id, ContractRole::NativeGateway)
				else {
					return Err(StrategyError::unsupported_asset(
						StrategyId::MorphoSupply,
						"this market takes no native deposits",
					));
				};
				let pool = self
					.protocol
					.contract_address(self.chain_id, ContractRole::Pool)?;
				let deposit = INativeGateway::depositNativeCall {
					pool,
					onBehalfOf: user,
					referralCode: 0,
				}
				.abi_encode();
				Ok(vec![Call::new(gateway).with_value(amount).with_data(deposit)])
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::encoding::IERC20;
	use alloy_primitives::address;
	use invest_types::BASE;
	use std::collections::HashMap;

	const USER: Address = address!("00000000000000000000000000000000000000ab");

	#[tokio::test]
	async fn erc20_supply_is_approve_then_supply() {
		let strategy = LendingSupply::new(BASE).unwrap();
		let usdc = address!("833589fcd6edb6e08f4c7c32d4f71b54bda02913");
		let calls = strategy
			.build_calls(U256::from(995_000u64), USER, Some(usdc))
			.await
			.unwrap();

		assert_eq!(calls.len(), 2);
		assert_eq!(calls[0].to, usdc);
		assert_eq!(calls[0].data[..4], IERC20::approveCall::SELECTOR);
		let pool = invest_registry::morpho()
			.contract_address(BASE, ContractRole::Pool)
			.unwrap();
		assert_eq!(calls[1].to, pool);
		assert_eq!(calls[1].data[..4], ILendingPool::supplyCall::SELECTOR);
		assert_eq!(calls[1].value, U256::ZERO);
	}

	#[tokio::test]
	async fn native_deposit_needs_a_gateway() {
		let strategy = LendingSupply::new(BASE).unwrap();
		let err = strategy
			.build_calls(U256::from(1u64), USER, None)
			.await
			.unwrap_err();
		assert!(matches!(
			err,
			StrategyError::UnsupportedAssetForStrategy { .. }
		));
	}

	#[tokio::test]
	async fn native_deposit_goes_through_the_gateway() {
		let protocol: &'static Protocol = Box::leak(Box::new(Protocol {
			name: "TestMarket",
			description: "",
			icon: "",
			external_link: "",
			contracts: HashMap::from([(
				BASE,
				HashMap::from([
					(
						ContractRole::Pool,
						address!("0000000000000000000000000000000000000100"),
					),
					(
						ContractRole::NativeGateway,
						address!("0000000000000000000000000000000000000200"),
					),
				]),
			)]),
		}));
		let strategy = LendingSupply::with_protocol(BASE, protocol);
		let calls = strategy
			.build_calls(U256::from(7u64), USER, None)
			.await
			.unwrap();
		assert_eq!(calls.len(), 1);
		assert_eq!(
			calls[0].to,
			address!("0000000000000000000000000000000000000200")
		);
		assert_eq!(calls[0].value, U256::from(7u64));
	}

	#[tokio::test]
	async fn missing_pool_role_propagates() {
		let protocol: &'static Protocol = Box::leak(Box::new(Protocol {
			name: "Roleless",
			description: "",
			icon: "",
			external_link: "",
			contracts: HashMap::new(),
		}));
		let strategy = LendingSupply::with_protocol(BASE, protocol);
		let err = strategy
			.build_calls(U256::from(1u64), USER, Some(USER))
			.await
			.unwrap_err();
		assert!(matches!(
			err,
			StrategyError::Registry(invest_types::RegistryError::MissingContractRole { .. })
		));
	}
}
