//! Builtin token catalog.

use alloy_primitives::{address, Address};
use invest_types::{ChainId, RegistryError, Token, BASE, CELO};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Read-only table of all tokens the platform knows about.
pub struct TokenRegistry {
	tokens: Vec<Token>,
}

impl TokenRegistry {
	fn builtin() -> Self {
		let tokens = vec![
			Token {
				name: "CELO",
				icon: "celo.svg",
				decimals: 18,
				is_native: true,
				optional: false,
				addresses: HashMap::new(),
			},
			// The ERC-20 surface of CELO, used where a swap route needs a
			// token-in address for a native deposit.
			Token {
				name: "WCELO",
				icon: "celo.svg",
				decimals: 18,
				is_native: false,
				optional: false,
				addresses: HashMap::from([(
					CELO,
					address!("471ece3750da237f93b8e339c536989b8978a438"),
				)]),
			},
			Token {
				name: "stCELO",
				icon: "stcelo.svg",
				decimals: 18,
				is_native: false,
				optional: false,
				addresses: HashMap::from([(
					CELO,
					address!("c668583dcbdc9ae6fa3ce46462758188adfdfc24"),
				)]),
			},
			Token {
				name: "USDC",
				icon: "usdc.svg",
				decimals: 6,
				is_native: false,
				optional: false,
				addresses: HashMap::from([
					(BASE, address!("833589fcd6edb6e08f4c7c32d4f71b54bda02913")),
					(CELO, address!("ceba9300f2b948710d2653dd7b07f33a8b32118c")),
				]),
			},
			Token {
				name: "cUSD",
				icon: "cusd.svg",
				decimals: 18,
				is_native: false,
				optional: false,
				addresses: HashMap::from([(
					CELO,
					address!("765de816845861e75a25fca122bb6898b8b1282a"),
				)]),
			},
			Token {
				name: "WETH",
				icon: "weth.svg",
				decimals: 18,
				is_native: false,
				optional: true,
				addresses: HashMap::from([(
					BASE,
					address!("4200000000000000000000000000000000000006"),
				)]),
			},
			Token {
				name: "UBE",
				icon: "ube.svg",
				decimals: 18,
				is_native: false,
				optional: false,
				addresses: HashMap::from([(
					CELO,
					address!("00be915b9dcf56a3cbe739d9b9c202ca692409ec"),
				)]),
			},
		];
		Self { tokens }
	}

	pub fn all(&self) -> &[Token] {
		&self.tokens
	}

	pub fn by_name(&self, name: &str) -> Option<&Token> {
		self.tokens.iter().find(|t| t.name == name)
	}
}

/// Process-wide token registry, built on first use.
pub fn tokens() -> &'static TokenRegistry {
	static REGISTRY: OnceLock<TokenRegistry> = OnceLock::new();
	REGISTRY.get_or_init(TokenRegistry::builtin)
}

fn must(name: &str) -> &'static Token {
	tokens()
		.by_name(name)
		.unwrap_or_else(|| panic!("builtin token {name} missing"))
}

pub fn celo() -> &'static Token {
	must("CELO")
}

pub fn wcelo() -> &'static Token {
	must("WCELO")
}

pub fn stcelo() -> &'static Token {
	must("stCELO")
}

pub fn usdc() -> &'static Token {
	must("USDC")
}

pub fn cusd() -> &'static Token {
	must("cUSD")
}

pub fn weth() -> &'static Token {
	must("WETH")
}

pub fn ube() -> &'static Token {
	must("UBE")
}

/// Resolves a token's contract address on a chain.
///
/// Fails with [`RegistryError::UnsupportedChainAsset`] when the token is not
/// native and has no entry for the chain.
pub fn resolve_token_address(token: &Token, chain_id: ChainId) -> Result<Address, RegistryError> {
	token.address_on(chain_id)
}
