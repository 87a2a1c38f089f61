//! Strategy resolution with uniform error normalization.

use crate::InvestError;
use invest_registry::strategies;
use invest_strategies::StrategyKind;
use invest_types::{ChainId, StrategyError, StrategyId};
use thiserror::Error;
use tracing::warn;

/// The underlying reason a strategy could not be resolved.
///
/// Callers only ever observe [`InvestError::StrategyUnavailableOnChain`];
/// this sits behind it as the source so the reasons stay distinguishable in
/// logs and tests.
#[derive(Debug, Error)]
pub enum ResolveFailure {
	#[error("no catalog entry for {id} on chain {chain_id}")]
	Unregistered { id: StrategyId, chain_id: ChainId },

	#[error("protocol {protocol} does not support chain {chain_id}")]
	ChainNotSupported {
		protocol: &'static str,
		chain_id: ChainId,
	},

	#[error("construction failed: {0}")]
	Construction(#[from] StrategyError),
}

/// Resolves a strategy id and chain to a constructed variant.
///
/// Every failure path is logged here, exactly once, and collapsed into one
/// normalized error; callers treat all unavailable strategies identically.
pub fn resolve(id: StrategyId, chain_id: ChainId) -> Result<StrategyKind, InvestError> {
	try_resolve(id, chain_id).map_err(|cause| {
		warn!(%id, chain_id, %cause, "strategy resolution failed");
		InvestError::StrategyUnavailableOnChain { id, chain_id, cause }
	})
}

fn try_resolve(id: StrategyId, chain_id: ChainId) -> Result<StrategyKind, ResolveFailure> {
	let descriptor = strategies::descriptor(id, chain_id)
		.ok_or(ResolveFailure::Unregistered { id, chain_id })?;

	if !descriptor.protocol.is_chain_supported(chain_id) {
		return Err(ResolveFailure::ChainNotSupported {
			protocol: descriptor.protocol.name,
			chain_id,
		});
	}

	Ok(StrategyKind::construct(id, chain_id)?)
}
