//! Builtin strategy descriptor catalog.

use crate::{protocols, tokens};
use invest_types::{ChainId, RiskLevel, StrategyDescriptor, StrategyId, BASE, CELO};
use std::sync::OnceLock;

fn build_catalog() -> Vec<StrategyDescriptor> {
	vec![
		StrategyDescriptor {
			id: StrategyId::MorphoSupply,
			title: "Morpho USDC lending",
			protocol: protocols::morpho(),
			chain_id: BASE,
			apy: 6.2,
			risk_level: RiskLevel::Medium,
			tokens: vec![tokens::usdc(), tokens::weth()],
		},
		StrategyDescriptor {
			id: StrategyId::CeloLstSwap,
			title: "Swap CELO to stCELO",
			protocol: protocols::uniswap(),
			chain_id: CELO,
			apy: 4.4,
			risk_level: RiskLevel::Low,
			tokens: vec![tokens::celo(), tokens::stcelo()],
		},
		StrategyDescriptor {
			id: StrategyId::UniswapV3Liquidity,
			title: "cUSD/USDC liquidity",
			protocol: protocols::uniswap(),
			chain_id: CELO,
			apy: 8.1,
			risk_level: RiskLevel::Medium,
			tokens: vec![tokens::cusd(), tokens::usdc()],
		},
		StrategyDescriptor {
			id: StrategyId::StCeloStaking,
			title: "Stake CELO for stCELO",
			protocol: protocols::stcelo_protocol(),
			chain_id: CELO,
			apy: 3.8,
			risk_level: RiskLevel::Low,
			tokens: vec![tokens::celo()],
		},
		StrategyDescriptor {
			id: StrategyId::BeefyVaultDeposit,
			title: "Beefy CELO vault",
			protocol: protocols::beefy(),
			chain_id: CELO,
			apy: 9.5,
			risk_level: RiskLevel::High,
			tokens: vec![tokens::celo()],
		},
		StrategyDescriptor {
			id: StrategyId::UbeswapFarmStaking,
			title: "Ubeswap UBE farm",
			protocol: protocols::ubeswap(),
			chain_id: CELO,
			apy: 12.0,
			risk_level: RiskLevel::High,
			tokens: vec![tokens::celo(), tokens::ube()],
		},
	]
}

/// Every (strategy, chain) integration the platform offers.
pub fn catalog() -> &'static [StrategyDescriptor] {
	static CATALOG: OnceLock<Vec<StrategyDescriptor>> = OnceLock::new();
	CATALOG.get_or_init(build_catalog)
}

/// Looks up the descriptor for a strategy on a chain.
pub fn descriptor(id: StrategyId, chain_id: ChainId) -> Option<&'static StrategyDescriptor> {
	catalog()
		.iter()
		.find(|d| d.id == id && d.chain_id == chain_id)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn every_id_appears_once() {
		for id in StrategyId::ALL {
			let count = catalog().iter().filter(|d| d.id == id).count();
			assert_eq!(count, 1, "{id} should have exactly one catalog entry");
		}
	}

	#[test]
	fn descriptors_sit_on_supported_chains() {
		for d in catalog() {
			assert!(
				d.protocol.is_chain_supported(d.chain_id),
				"{} lists chain {} its protocol does not support",
				d.id,
				d.chain_id
			);
		}
	}

	#[test]
	fn lookup_misses_on_wrong_chain() {
		assert!(descriptor(StrategyId::MorphoSupply, BASE).is_some());
		assert!(descriptor(StrategyId::MorphoSupply, CELO).is_none());
	}
}
