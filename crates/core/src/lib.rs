//! Herdfolio Core - Livestock domain, valuation engine and portfolio services.
//!
//! This crate contains the valuation logic for Herdfolio. It is
//! storage-agnostic: herd data and settings are read through repository
//! traits implemented by the host application, and market prices come from
//! a [`herdfolio_market_data::PriceLookup`].

pub mod constants;
pub mod errors;
pub mod events;
pub mod livestock;
pub mod portfolio;
pub mod settings;
pub mod utils;

// Re-export common types from livestock and portfolio modules
pub use livestock::*;
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
