//! Fee computation, strategy resolution and call assembly.
//!
//! [`Investor`] is the entry point external callers use: it resolves a
//! strategy, splits the gross amount into fee and net, asks the variant for
//! its call sequence and appends the fee transfer last.

pub mod assembler;
pub mod fee;
pub mod resolver;

pub use assembler::Investor;
pub use fee::{compute_fee, FeeBreakdown, FeeCollector, DEFAULT_FEE_RATE_BPS};
pub use resolver::{resolve, ResolveFailure};

use invest_types::{ChainId, StrategyError, StrategyId};
use thiserror::Error;

/// Failures surfaced by the orchestrator.
#[derive(Debug, Error)]
pub enum InvestError {
	/// Normalized resolver failure: the strategy cannot be served on the
	/// chain, whatever the underlying reason. The cause stays attached so
	/// logs and tests can tell an unsupported chain from a broken variant.
	#[error("strategy {id} is unavailable on chain {chain_id}")]
	StrategyUnavailableOnChain {
		id: StrategyId,
		chain_id: ChainId,
		#[source]
		cause: ResolveFailure,
	},

	/// A constructed variant rejected the build; propagated unchanged so a
	/// half-implemented integration stays distinguishable from an
	/// unsupported chain.
	#[error(transparent)]
	Strategy(#[from] StrategyError),
}
