//! Full-range liquidity provision on a Uniswap-V3-style pool.

use crate::encoding::{self, IPositionManager, MintParams};
use alloy_primitives::{Address, U256};
use alloy_sol_types::SolCall;
use invest_types::{Call, ChainId, ContractRole, Protocol, StrategyError, StrategyId, Token};

/// Mints a full-range position in the descriptor's pair.
///
/// ERC-20 only; the supplied asset must be one side of the pair. Both sides
/// are approved for `amount` before the mint, and the pair is passed to the
/// position manager in sorted order.
#[derive(Debug, Clone)]
pub struct AddLiquidity {
	chain_id: ChainId,
	protocol: &'static Protocol,
	pair: [&'static Token; 2],
}

impl AddLiquidity {
	pub fn new(chain_id: ChainId) -> Result<Self, StrategyError> {
		Ok(Self {
			chain_id,
			protocol: invest_registry::uniswap(),
			pair: [invest_registry::cusd(), invest_registry::usdc()],
		})
	}

	pub async fn build_calls(
		&self,
		amount: U256,
		user: Address,
		asset: Option<Address>,
	) -> Result<Vec<Call>, StrategyError> {
		let Some(asset) = asset else {
			return Err(StrategyError::unsupported_asset(
				StrategyId::UniswapV3Liquidity,
				"an ERC-20 pair asset is required",
			));
		};

		let manager = self
			.protocol
			.contract_address(self.chain_id, ContractRole::PositionManager)?;
		let first = self.pair[0].address_on(self.chain_id)?;
		let second = self.pair[1].address_on(self.chain_id)?;
		if asset != first && asset != second {
			return Err(StrategyError::unsupported_asset(
				StrategyId::UniswapV3Liquidity,
				format!(
					"asset {asset} is not part of the {}/{} pair",
					self.pair[0].name, self.pair[1].name
				),
			));
		}

		// The pool derives token0/token1 from address order; encode the same
		// order or the mint reverts.
		let (token0, token1) = encoding::sort_addresses(first, second);
		let (tick_lower, tick_upper) = encoding::full_range_ticks();
		let mint = IPositionManager::mintCall {
			params: MintParams {
				token0,
				token1,
				fee: encoding::medium_pool_fee(),
				tickLower: tick_lower,
				tickUpper: tick_upper,
				amount0Desired: amount,
				amount1Desired: amount,
				amount0Min: U256::ZERO,
				amount1Min: U256::ZERO,
				recipient: user,
				deadline: encoding::deadline_after(1200),
			},
		}
		.abi_encode();

		Ok(vec![
			encoding::erc20_approve(token0, manager, amount),
			encoding::erc20_approve(token1, manager, amount),
			Call::new(manager).with_data(mint),
		])
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::encoding::IERC20;
	use alloy_primitives::address;
	use invest_types::CELO;

	const USER: Address = address!("00000000000000000000000000000000000000ef");

	#[tokio::test]
	async fn missing_asset_is_rejected() {
		let strategy = AddLiquidity::new(CELO).unwrap();
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
	async fn foreign_asset_is_rejected() {
		let strategy = AddLiquidity::new(CELO).unwrap();
		let err = strategy
			.build_calls(
				U256::from(1u64),
				USER,
				Some(address!("00000000000000000000000000000000000000aa")),
			)
			.await
			.unwrap_err();
		assert!(matches!(
			err,
			StrategyError::UnsupportedAssetForStrategy { .. }
		));
	}

	#[tokio::test]
	async fn mint_follows_two_sorted_approvals() {
		let strategy = AddLiquidity::new(CELO).unwrap();
		let cusd = invest_registry::cusd().address_on(CELO).unwrap();
		let usdc = invest_registry::usdc().address_on(CELO).unwrap();
		let calls = strategy
			.build_calls(U256::from(500u64), USER, Some(cusd))
			.await
			.unwrap();

		assert_eq!(calls.len(), 3);
		let (token0, token1) = encoding::sort_addresses(cusd, usdc);
		assert_eq!(calls[0].to, token0);
		assert_eq!(calls[1].to, token1);
		assert_eq!(calls[0].data[..4], IERC20::approveCall::SELECTOR);
		assert_eq!(calls[1].data[..4], IERC20::approveCall::SELECTOR);
		let manager = invest_registry::uniswap()
			.contract_address(CELO, ContractRole::PositionManager)
			.unwrap();
		assert_eq!(calls[2].to, manager);
		assert_eq!(calls[2].data[..4], IPositionManager::mintCall::SELECTOR);
	}
}
