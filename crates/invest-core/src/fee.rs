//! Platform fee computation and the fee transfer call.

use alloy_primitives::{Address, U256};
use invest_strategies::encoding;
use invest_types::Call;

/// Default platform fee rate, in thousandths of the gross amount.
pub const DEFAULT_FEE_RATE_BPS: u64 = 5;

const FEE_DIVISOR: u64 = 1000;

/// A gross amount split into the platform fee and the investable remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeBreakdown {
	pub fee: U256,
	pub net: U256,
}

/// Splits `amount` by the fee rate.
///
/// Integer floor division; `fee + net == amount` holds exactly, with no
/// rounding loss distributed elsewhere. `floor(amount * rate / 1000)` is
/// computed without intermediate overflow, so the split stays correct over
/// the whole uint256 domain.
pub fn compute_fee(amount: U256, rate_bps: u64) -> FeeBreakdown {
	let rate = U256::from(rate_bps);
	let divisor = U256::from(FEE_DIVISOR);
	let fee = match amount.checked_mul(rate) {
		Some(product) => product / divisor,
		// amount = q * 1000 + r, so amount * rate / 1000 splits into
		// q * rate + r * rate / 1000 with no term overflowing.
		None => (amount / divisor) * rate + (amount % divisor) * rate / divisor,
	};
	FeeBreakdown {
		fee,
		net: amount - fee,
	}
}

/// Process-wide fee configuration, fixed at startup.
#[derive(Debug, Clone)]
pub struct FeeCollector {
	receiver: Address,
	rate_bps: u64,
}

impl FeeCollector {
	pub fn new(receiver: Address, rate_bps: u64) -> Self {
		Self { receiver, rate_bps }
	}

	pub fn receiver(&self) -> Address {
		self.receiver
	}

	pub fn rate_bps(&self) -> u64 {
		self.rate_bps
	}

	pub fn split(&self, amount: U256) -> FeeBreakdown {
		compute_fee(amount, self.rate_bps)
	}

	/// The call moving the fee to the receiver: a plain value transfer for
	/// native deposits, an ERC-20 `transfer` otherwise.
	pub fn build_fee_call(&self, asset: Option<Address>, fee: U256) -> Call {
		match asset {
			None => Call::new(self.receiver).with_value(fee),
			Some(token) => encoding::erc20_transfer(token, self.receiver, fee),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy_primitives::address;
	use alloy_sol_types::SolCall;
	use invest_strategies::encoding::IERC20;

	const RECEIVER: Address = address!("00000000000000000000000000000000000000fe");

	#[test]
	fn default_rate_examples() {
		let split = compute_fee(U256::from(1000u64), DEFAULT_FEE_RATE_BPS);
		assert_eq!(split.fee, U256::from(5u64));
		assert_eq!(split.net, U256::from(995u64));

		// Floors to zero below the divisor.
		let split = compute_fee(U256::from(3u64), DEFAULT_FEE_RATE_BPS);
		assert_eq!(split.fee, U256::ZERO);
		assert_eq!(split.net, U256::from(3u64));
	}

	#[test]
	fn fee_plus_net_is_exact() {
		for amount in [0u64, 1, 3, 199, 1000, 1001, 999_999, 1_000_000] {
			let amount = U256::from(amount);
			let split = compute_fee(amount, DEFAULT_FEE_RATE_BPS);
			assert_eq!(split.fee + split.net, amount);
		}
	}

	#[test]
	fn huge_amounts_do_not_wrap() {
		let split = compute_fee(U256::MAX, DEFAULT_FEE_RATE_BPS);
		// The fee must be at least rate thousandths of the amount; a wrapped
		// multiplication would undershoot by orders of magnitude.
		let floor_estimate = U256::MAX / U256::from(1000u64) * U256::from(DEFAULT_FEE_RATE_BPS);
		assert!(split.fee >= floor_estimate);
		assert_eq!(split.fee + split.net, U256::MAX);

		// The overflow path agrees with plain arithmetic where both apply.
		let amount = U256::from(123_456_789u64);
		let split = compute_fee(amount, DEFAULT_FEE_RATE_BPS);
		assert_eq!(
			split.fee,
			amount * U256::from(DEFAULT_FEE_RATE_BPS) / U256::from(1000u64)
		);
	}

	#[test]
	fn native_fee_is_a_value_transfer() {
		let collector = FeeCollector::new(RECEIVER, DEFAULT_FEE_RATE_BPS);
		let call = collector.build_fee_call(None, U256::from(50u64));
		assert_eq!(call.to, RECEIVER);
		assert_eq!(call.value, U256::from(50u64));
		assert!(call.data.is_empty());
	}

	#[test]
	fn token_fee_is_an_erc20_transfer() {
		let collector = FeeCollector::new(RECEIVER, DEFAULT_FEE_RATE_BPS);
		let token = address!("0000000000000000000000000000000000000011");
		let call = collector.build_fee_call(Some(token), U256::from(50u64));
		assert_eq!(call.to, token);
		assert_eq!(call.value, U256::ZERO);
		assert_eq!(call.data[..4], IERC20::transferCall::SELECTOR);
	}
}
