//! Swap into a liquid-staking token through a DEX pool.

use crate::encoding::{self, ExactInputSingleParams, ISwapRouter, IWrapper};
use alloy_primitives::aliases::U160;
use alloy_primitives::{Address, U256};
use alloy_sol_types::SolCall;
use invest_types::{Call, ChainId, ContractRole, Protocol, StrategyError};

/// Swaps the deposit into stCELO on a V3 pool.
///
/// Accepts both native and ERC-20 input. When the protocol registers a
/// [`ContractRole::Wrapper`] on the chain, a wrap call is appended after the
/// swap.
#[derive(Debug, Clone)]
pub struct SwapToLst {
	chain_id: ChainId,
	protocol: &'static Protocol,
}

impl SwapToLst {
	pub fn new(chain_id: ChainId) -> Result<Self, StrategyError> {
		Ok(Self {
			chain_id,
			protocol: invest_registry::uniswap(),
		})
	}

	#[cfg(test)]
	fn with_protocol(chain_id: ChainId, protocol: &'static Protocol) -> Self {
		Self { chain_id, protocol }
	}

	fn swap_params(
		&self,
		token_in: Address,
		token_out: Address,
		amount: U256,
		user: Address,
	) -> ExactInputSingleParams {
		ExactInputSingleParams {
			tokenIn: token_in,
			tokenOut: token_out,
			fee: encoding::medium_pool_fee(),
			recipient: user,
			amountIn: amount,
			amountOutMinimum: U256::ZERO,
			sqrtPriceLimitX96: U160::ZERO,
		}
	}

	pub async fn build_calls(
		&self,
		amount: U256,
		user: Address,
		asset: Option<Address>,
	) -> Result<Vec<Call>, StrategyError> {
		let router = self
			.protocol
			.contract_address(self.chain_id, ContractRole::Router)?;
		let lst = invest_registry::stcelo().address_on(self.chain_id)?;

		let mut calls = match asset {
			// Native input rides on the wrapped-native route with the value
			// attached; the router wraps internally.
			None => {
				let token_in = invest_registry::wcelo().address_on(self.chain_id)?;
				let swap = ISwapRouter::exactInputSingleCall {
					params: self.swap_params(token_in, lst, amount, user),
				}
				.abi_encode();
				vec![Call::new(router).with_value(amount).with_data(swap)]
			}
			Some(token) => {
				let swap = ISwapRouter::exactInputSingleCall {
					params: self.swap_params(token, lst, amount, user),
				}
				.abi_encode();
				vec![
					encoding::erc20_approve(token, router, amount),
					Call::new(router).with_data(swap),
				]
			}
		};

		if let Some(wrapper) = self
			.protocol
			.try_contract_address(self.chain_id, ContractRole::Wrapper)
		{
			calls.push(Call::new(wrapper).with_data(IWrapper::wrapCall { amount }.abi_encode()));
		}

		Ok(calls)
	}
}
