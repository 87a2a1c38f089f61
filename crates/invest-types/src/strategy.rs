//! Strategy identity and catalog metadata.

use crate::{ChainId, Protocol, Token};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of supported strategy integrations.
///
/// The wire form (serde and `FromStr`) is the variant name verbatim, e.g.
/// `"MorphoSupply"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyId {
	MorphoSupply,
	CeloLstSwap,
	UniswapV3Liquidity,
	StCeloStaking,
	BeefyVaultDeposit,
	UbeswapFarmStaking,
}

impl StrategyId {
	pub const ALL: [StrategyId; 6] = [
		StrategyId::MorphoSupply,
		StrategyId::CeloLstSwap,
		StrategyId::UniswapV3Liquidity,
		StrategyId::StCeloStaking,
		StrategyId::BeefyVaultDeposit,
		StrategyId::UbeswapFarmStaking,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			StrategyId::MorphoSupply => "MorphoSupply",
			StrategyId::CeloLstSwap => "CeloLstSwap",
			StrategyId::UniswapV3Liquidity => "UniswapV3Liquidity",
			StrategyId::StCeloStaking => "StCeloStaking",
			StrategyId::BeefyVaultDeposit => "BeefyVaultDeposit",
			StrategyId::UbeswapFarmStaking => "UbeswapFarmStaking",
		}
	}
}

impl fmt::Display for StrategyId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Error for strategy ids outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy id: {0}")]
pub struct UnknownStrategyId(pub String);

impl FromStr for StrategyId {
	type Err = UnknownStrategyId;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		StrategyId::ALL
			.into_iter()
			.find(|id| id.as_str() == s)
			.ok_or_else(|| UnknownStrategyId(s.to_string()))
	}
}

/// Relative risk bucket shown alongside a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
	Low,
	Medium,
	High,
}

/// Immutable catalog entry describing one (strategy, chain) integration.
///
/// Pure metadata; looked up by `(id, chain_id)`. A miss is a lookup failure,
/// never a construction failure.
#[derive(Debug, Clone)]
pub struct StrategyDescriptor {
	pub id: StrategyId,
	pub title: &'static str,
	pub protocol: &'static Protocol,
	pub chain_id: ChainId,
	/// Advertised APY in percent; display metadata only.
	pub apy: f64,
	pub risk_level: RiskLevel,
	pub tokens: Vec<&'static Token>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn id_string_round_trip() {
		for id in StrategyId::ALL {
			assert_eq!(id.as_str().parse::<StrategyId>(), Ok(id));
		}
		assert!("NotAStrategy".parse::<StrategyId>().is_err());
	}

	#[test]
	fn serde_uses_variant_names() {
		let json = serde_json::to_string(&StrategyId::StCeloStaking).unwrap();
		assert_eq!(json, "\"StCeloStaking\"");
	}
}
