//! Static catalogs of tokens, protocols and strategy descriptors.
//!
//! Everything in this crate is immutable data built once behind a
//! `OnceLock` and read through accessors. There is no mutation API; the
//! address tables must be bit-exact with the deployed contracts.

pub mod protocols;
pub mod strategies;
pub mod tokens;

pub use protocols::*;
pub use strategies::*;
pub use tokens::*;
