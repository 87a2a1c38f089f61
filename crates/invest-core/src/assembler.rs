//! The call assembler external callers use.

use crate::fee::FeeCollector;
use crate::{resolver, InvestError};
use alloy_primitives::{Address, U256};
use invest_types::{Call, ChainId, StrategyId};
use tracing::debug;

/// Assembles the complete call sequence for one deposit.
pub struct Investor {
	fees: FeeCollector,
}

impl Investor {
	pub fn new(fees: FeeCollector) -> Self {
		Self { fees }
	}

	pub fn fees(&self) -> &FeeCollector {
		&self.fees
	}

	/// Resolves the strategy, splits the gross amount, builds the variant's
	/// calls over the net amount and appends the fee transfer last.
	///
	/// Only a complete sequence is ever returned; callers never observe a
	/// partial list. Errors from the variant's build propagate unchanged,
	/// without resolver-style normalization.
	pub async fn invest(
		&self,
		id: StrategyId,
		chain_id: ChainId,
		amount: U256,
		user: Address,
		asset: Option<Address>,
	) -> Result<Vec<Call>, InvestError> {
		let strategy = resolver::resolve(id, chain_id)?;

		// Fee comes off the gross amount; only the net is deployed.
		let split = self.fees.split(amount);
		debug!(%id, chain_id, fee = %split.fee, net = %split.net, "assembling investment calls");

		let mut calls = strategy.build_calls(split.net, user, asset).await?;
		calls.push(self.fees.build_fee_call(asset, split.fee));
		Ok(calls)
	}
}
