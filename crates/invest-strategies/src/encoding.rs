//! Solidity interface definitions and shared encoding helpers.
//!
//! Every external contract a strategy touches is declared here once, so the
//! argument shapes live next to each other and the variants only assemble
//! parameter structs.

use alloy_primitives::aliases::{I24, U24};
use alloy_primitives::{Address, U256};
use alloy_sol_types::{sol, SolCall};
use invest_types::Call;

sol! {
	/// Minimal ERC-20 surface: approvals for spenders and the fee transfer.
	interface IERC20 {
		function approve(address spender, uint256 amount) external returns (bool);
		function transfer(address to, uint256 amount) external returns (bool);
	}

	/// Aave-style lending pool.
	interface ILendingPool {
		function supply(address asset, uint256 amount, address onBehalfOf, uint16 referralCode) external;
	}

	/// Gateway for native deposits into a lending market.
	interface INativeGateway {
		function depositNative(address pool, address onBehalfOf, uint16 referralCode) external payable;
	}

	/// Uniswap-V3-style swap router (router02 shape, deadline-free).
	struct ExactInputSingleParams {
		address tokenIn;
		address tokenOut;
		uint24 fee;
		address recipient;
		uint256 amountIn;
		uint256 amountOutMinimum;
		uint160 sqrtPriceLimitX96;
	}

	interface ISwapRouter {
		function exactInputSingle(ExactInputSingleParams params) external payable returns (uint256 amountOut);
	}

	/// Uniswap-V3-style position manager.
	struct MintParams {
		address token0;
		address token1;
		uint24 fee;
		int24 tickLower;
		int24 tickUpper;
		uint256 amount0Desired;
		uint256 amount1Desired;
		uint256 amount0Min;
		uint256 amount1Min;
		address recipient;
		uint256 deadline;
	}

	interface IPositionManager {
		function mint(MintParams params) external payable returns (uint256 tokenId, uint128 liquidity, uint256 amount0, uint256 amount1);
	}

	/// Liquid-staking manager taking native deposits.
	interface IStakingManager {
		function deposit() external payable;
	}

	/// Vault zap adapter: swaps the attached native value into the vault's
	/// want token and deposits, all in one payable call.
	interface IVaultAdapter {
		function zapIn(address vault) external payable;
	}

	/// Incentive farm taking an allocation of its staking token.
	interface IFarm {
		function allocate(uint256 amount) external;
	}

	/// Optional post-swap wrapper for rebasing LSTs.
	interface IWrapper {
		function wrap(uint256 amount) external returns (uint256);
	}
}

/// The 0.30% fee tier; the only one the builtin pools use.
pub fn medium_pool_fee() -> U24 {
	U24::from(3000u32)
}

/// Full-range tick bounds for the 0.30% tier (spacing 60).
pub fn full_range_ticks() -> (I24, I24) {
	// 887220 fits in int24, so the conversions cannot fail.
	let upper = I24::try_from(887220).unwrap_or(I24::MAX);
	(-upper, upper)
}

/// Unix deadline `secs` seconds from now.
pub fn deadline_after(secs: u64) -> U256 {
	let now = std::time::SystemTime::now()
		.duration_since(std::time::UNIX_EPOCH)
		.unwrap_or_default()
		.as_secs();
	U256::from(now + secs)
}

/// `approve(spender, amount)` on `token`.
pub fn erc20_approve(token: Address, spender: Address, amount: U256) -> Call {
	Call::new(token).with_data(IERC20::approveCall { spender, amount }.abi_encode())
}

/// `transfer(to, amount)` on `token`.
pub fn erc20_transfer(token: Address, to: Address, amount: U256) -> Call {
	Call::new(token).with_data(IERC20::transferCall { to, amount }.abi_encode())
}

/// Orders a pair of addresses by raw byte comparison, which is identical to
/// case-insensitive lexicographic order over their hex form.
///
/// Pool contracts derive `token0`/`token1` from this order, so callers must
/// apply it before encoding any pair-creation call.
pub fn sort_addresses(a: Address, b: Address) -> (Address, Address) {
	if a <= b {
		(a, b)
	} else {
		(b, a)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy_primitives::address;

	#[test]
	fn sort_is_min_max_and_idempotent() {
		let a = address!("00000000000000000000000000000000000000aa");
		let b = address!("00000000000000000000000000000000000000ff");
		assert_eq!(sort_addresses(a, b), (a, b));
		assert_eq!(sort_addresses(b, a), (a, b));
		let (lo, hi) = sort_addresses(b, a);
		assert_eq!(sort_addresses(lo, hi), (lo, hi));
	}

	#[test]
	fn sort_matches_lowercase_hex_order() {
		let a = address!("833589fcd6edb6e08f4c7c32d4f71b54bda02913");
		let b = address!("4200000000000000000000000000000000000006");
		let (lo, hi) = sort_addresses(a, b);
		assert!(format!("{lo:x}") < format!("{hi:x}"));
	}

	#[test]
	fn approve_uses_the_canonical_selector() {
		let call = erc20_approve(
			address!("0000000000000000000000000000000000000001"),
			address!("0000000000000000000000000000000000000002"),
			U256::from(1u64),
		);
		assert_eq!(hex::encode(&call.data[..4]), "095ea7b3");
		assert_eq!(call.data[..4], IERC20::approveCall::SELECTOR);
	}

	#[test]
	fn transfer_uses_the_canonical_selector() {
		let call = erc20_transfer(
			address!("0000000000000000000000000000000000000001"),
			address!("0000000000000000000000000000000000000002"),
			U256::from(1u64),
		);
		assert_eq!(hex::encode(&call.data[..4]), "a9059cbb");
	}

	#[test]
	fn full_range_is_symmetric() {
		let (lower, upper) = full_range_ticks();
		assert_eq!(lower, -upper);
		assert!(upper > I24::ZERO);
	}
}
