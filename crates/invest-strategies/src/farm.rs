//! Multi-step farm staking: swap into the farm token, then allocate.

use crate::encoding::{self, ExactInputSingleParams, IFarm, ISwapRouter};
use alloy_primitives::aliases::U160;
use alloy_primitives::{Address, U256};
use alloy_sol_types::SolCall;
use invest_types::{Call, ChainId, ContractRole, Protocol, StrategyError};

/// Routes a native deposit into an incentive farm.
///
/// Three steps: swap the value into the farm's staking token, approve the
/// farm for it, allocate. ERC-20 input is not wired up yet.
#[derive(Debug, Clone)]
pub struct LiquidityTokenStaking {
	chain_id: ChainId,
	protocol: &'static Protocol,
}

impl LiquidityTokenStaking {
	pub fn new(chain_id: ChainId) -> Result<Self, StrategyError> {
		Ok(Self {
			chain_id,
			protocol: invest_registry::ubeswap(),
		})
	}

	pub async fn build_calls(
		&self,
		amount: U256,
		user: Address,
		asset: Option<Address>,
	) -> Result<Vec<Call>, StrategyError> {
		// Placeholder path, not an asset-policy decision: the ERC-20 leg of
		// this integration simply has not been built.
		if asset.is_some() {
			return Err(StrategyError::NotImplemented(
				"ERC-20 deposits are not supported yet".to_string(),
			));
		}

		let router = self
			.protocol
			.contract_address(self.chain_id, ContractRole::Router)?;
		let farm = self
			.protocol
			.contract_address(self.chain_id, ContractRole::Farm)?;
		let token_in = invest_registry::wcelo().address_on(self.chain_id)?;
		let staking_token = invest_registry::ube().address_on(self.chain_id)?;

		let swap = ISwapRouter::exactInputSingleCall {
			params: ExactInputSingleParams {
				tokenIn: token_in,
				tokenOut: staking_token,
				fee: encoding::medium_pool_fee(),
				recipient: user,
				amountIn: amount,
				amountOutMinimum: U256::ZERO,
				sqrtPriceLimitX96: U160::ZERO,
			},
		}
		.abi_encode();
		let allocate = IFarm::allocateCall { amount }.abi_encode();

		Ok(vec![
			Call::new(router).with_value(amount).with_data(swap),
			encoding::erc20_approve(staking_token, farm, amount),
			Call::new(farm).with_data(allocate),
		])
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::encoding::IERC20;
	use alloy_primitives::address;
	use invest_types::CELO;

	const USER: Address = address!("00000000000000000000000000000000000000fa");

	#[tokio::test]
	async fn native_deposit_is_swap_approve_allocate() {
		let strategy = LiquidityTokenStaking::new(CELO).unwrap();
		let calls = strategy
			.build_calls(U256::from(100u64), USER, None)
			.await
			.unwrap();

		assert_eq!(calls.len(), 3);
		assert_eq!(calls[0].value, U256::from(100u64));
		assert_eq!(
			calls[0].data[..4],
			ISwapRouter::exactInputSingleCall::SELECTOR
		);
		let ube = invest_registry::ube().address_on(CELO).unwrap();
		assert_eq!(calls[1].to, ube);
		assert_eq!(calls[1].data[..4], IERC20::approveCall::SELECTOR);
		let farm = invest_registry::ubeswap()
			.contract_address(CELO, ContractRole::Farm)
			.unwrap();
		assert_eq!(calls[2].to, farm);
		assert_eq!(calls[2].data[..4], IFarm::allocateCall::SELECTOR);
	}

	#[tokio::test]
	async fn erc20_deposits_are_not_implemented() {
		let strategy = LiquidityTokenStaking::new(CELO).unwrap();
		let err = strategy
			.build_calls(U256::from(1u64), USER, Some(USER))
			.await
			.unwrap_err();
		match err {
			StrategyError::NotImplemented(detail) => {
				assert_eq!(detail, "ERC-20 deposits are not supported yet");
			}
			other => panic!("unexpected error: {other}"),
		}
	}
}
