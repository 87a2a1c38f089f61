//! Shared domain types for the investment call-assembly system.
//!
//! This crate defines the vocabulary the registries, strategy variants and
//! orchestrator all speak: tokens, protocols, strategy descriptors, the
//! `Call` unit handed to the execution layer, and the error taxonomy.

pub mod call;
pub mod errors;
pub mod protocols;
pub mod strategy;
pub mod tokens;

pub use call::*;
pub use errors::*;
pub use protocols::*;
pub use strategy::*;
pub use tokens::*;

/// Numeric chain identifier (e.g. 42220 for Celo, 8453 for Base).
pub type ChainId = u64;

/// Celo mainnet.
pub const CELO: ChainId = 42220;
/// Base mainnet.
pub const BASE: ChainId = 8453;
