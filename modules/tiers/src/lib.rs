//! Tiers Module
//!
//! Numbered cart entries ("tiers") with default CRUD over REST.
//! The only invariant is that a tier's `number` is unique, which the
//! database enforces through a unique index.

// Public exports
pub mod contract;
pub use contract::{client::TiersApi, error::TiersError, NewTier, Tier, TierPatch};

pub mod module;
pub use module::TiersModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;

pub use config::Config;
