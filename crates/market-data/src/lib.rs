//! Herdfolio Market Data Crate
//!
//! This crate provides the price lookup seam used by the valuation engine.
//!
//! # Overview
//!
//! The market data crate supports:
//! - Livestock species and category classification
//! - Saleyard, state and national benchmark price resolution
//! - Historical ("as of") price queries
//! - Composable lookups that fall through to the next source on a miss
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |  Valuation Core  | --> |   PriceQuery     |  (species, category, breed,
//! +------------------+     +------------------+   state, saleyard, as-of)
//!                                  |
//!                                  v
//!                          +------------------+
//!                          | PriceLookupChain |  (tries lookups in order)
//!                          +------------------+
//!                                  |
//!                                  v
//!                  +-------------------------------+
//!                  | InMemoryPriceBook / Benchmark |
//!                  +-------------------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |   PriceQuote     |  (price per kg + source label)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`Species`] - Livestock species (cattle, sheep, pigs, goats)
//! - [`PriceQuery`] - Lookup key for a price per kilogram
//! - [`PriceQuote`] - Resolved price with its source label
//! - [`PriceRecord`] - A single historical saleyard price observation
//! - [`PriceLookup`] - The collaborator trait implemented by every price source

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::{MarketDataError, RetryClass};

pub use models::{
    category_multiplier, known_categories, PriceQuery, PriceQuote, PriceRecord, PriceTier,
    Species, UNKNOWN_PRICE_SOURCE,
};

pub use provider::{
    BenchmarkPriceLookup, InMemoryPriceBook, PriceLookup, PriceLookupChain,
    DEFAULT_BASE_PRICE_PER_KG,
};
