//! Builtin protocol catalog.
//!
//! The intermediate adapter, vault and farm entries here are deployment
//! configuration: strategies read them through contract roles instead of
//! baking the addresses into call-building logic.

use alloy_primitives::address;
use invest_types::{ContractRole, Protocol, BASE, CELO};
use std::collections::HashMap;
use std::sync::OnceLock;

struct Protocols {
	morpho: Protocol,
	uniswap: Protocol,
	stcelo: Protocol,
	beefy: Protocol,
	ubeswap: Protocol,
}

impl Protocols {
	fn builtin() -> Self {
		Self {
			morpho: Protocol {
				name: "Morpho",
				description: "Permissionless lending markets",
				icon: "morpho.svg",
				external_link: "https://morpho.org",
				contracts: HashMap::from([(
					BASE,
					HashMap::from([(
						ContractRole::Pool,
						address!("bbbbbbbbbb9cc5e90e3b3af64bdaf62c37eeffcb"),
					)]),
				)]),
			},
			uniswap: Protocol {
				name: "Uniswap",
				description: "Concentrated-liquidity DEX",
				icon: "uniswap.svg",
				external_link: "https://uniswap.org",
				contracts: HashMap::from([(
					CELO,
					HashMap::from([
						(
							ContractRole::Router,
							address!("5615cdab10dc425a742d643d949a7f474c01abc4"),
						),
						(
							ContractRole::PositionManager,
							address!("3d79edaabc0eab6f08ed885c05fc0b014290d95a"),
						),
					]),
				)]),
			},
			stcelo: Protocol {
				name: "stCELO",
				description: "Liquid staking for CELO",
				icon: "stcelo.svg",
				external_link: "https://stcelo.com",
				contracts: HashMap::from([(
					CELO,
					HashMap::from([(
						ContractRole::Manager,
						address!("0239b96d10a434a56cc9e09383077a0490cf9398"),
					)]),
				)]),
			},
			beefy: Protocol {
				name: "Beefy",
				description: "Autocompounding yield vaults",
				icon: "beefy.svg",
				external_link: "https://beefy.com",
				contracts: HashMap::from([(
					CELO,
					HashMap::from([
						(
							ContractRole::Adapter,
							address!("c7f8d9e0a1b2c3d4e5f60718293a4b5c6d7e8f90"),
						),
						(
							ContractRole::Vault,
							address!("a1b2c3d4e5f60718293a4b5c6d7e8f90c7f8d9e0"),
						),
					]),
				)]),
			},
			ubeswap: Protocol {
				name: "Ubeswap",
				description: "Celo-native DEX with incentive farms",
				icon: "ubeswap.svg",
				external_link: "https://ubeswap.org",
				contracts: HashMap::from([(
					CELO,
					HashMap::from([
						(
							ContractRole::Router,
							address!("e3d8bd6aed4f159bc8000a9cd47cffdb95f96121"),
						),
						(
							ContractRole::Farm,
							address!("9ee3600543eccc85020d6bc77eb553d1747a65d2"),
						),
					]),
				)]),
			},
		}
	}
}

fn protocols() -> &'static Protocols {
	static REGISTRY: OnceLock<Protocols> = OnceLock::new();
	REGISTRY.get_or_init(Protocols::builtin)
}

pub fn morpho() -> &'static Protocol {
	&protocols().morpho
}

pub fn uniswap() -> &'static Protocol {
	&protocols().uniswap
}

pub fn stcelo_protocol() -> &'static Protocol {
	&protocols().stcelo
}

pub fn beefy() -> &'static Protocol {
	&protocols().beefy
}

pub fn ubeswap() -> &'static Protocol {
	&protocols().ubeswap
}

pub fn all_protocols() -> [&'static Protocol; 5] {
	[
		morpho(),
		uniswap(),
		stcelo_protocol(),
		beefy(),
		ubeswap(),
	]
}
