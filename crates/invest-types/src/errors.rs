//! Error taxonomy shared by the registries and strategy variants.

use crate::{ChainId, ContractRole, StrategyId};
use thiserror::Error;

/// Failures of the static token / protocol registries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
	/// The token is not native and has no deployment on the requested chain.
	#[error("token {token} has no address on chain {chain_id}")]
	UnsupportedChainAsset {
		token: &'static str,
		chain_id: ChainId,
	},

	/// The protocol's role table lacks the requested entry.
	#[error("protocol {protocol} has no {role} contract on chain {chain_id}")]
	MissingContractRole {
		protocol: &'static str,
		role: ContractRole,
		chain_id: ChainId,
	},
}

/// Failures while building a strategy's call sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyError {
	#[error(transparent)]
	Registry(#[from] RegistryError),

	/// The caller supplied or omitted `asset` in violation of the variant's
	/// policy.
	#[error("strategy {strategy} cannot take this asset: {detail}")]
	UnsupportedAssetForStrategy {
		strategy: StrategyId,
		detail: String,
	},

	/// Placeholder integration that cannot build calls yet.
	#[error("not implemented: {0}")]
	NotImplemented(String),
}

impl StrategyError {
	/// Shorthand for the asset-policy violation.
	pub fn unsupported_asset(strategy: StrategyId, detail: impl Into<String>) -> Self {
		StrategyError::UnsupportedAssetForStrategy {
			strategy,
			detail: detail.into(),
		}
	}
}
