//! Price lookup abstractions and implementations.
//!
//! This module contains:
//! - The `PriceLookup` trait that every price source implements
//! - `InMemoryPriceBook`, backed by historical saleyard observations
//! - `BenchmarkPriceLookup`, a category-multiplier benchmark
//! - `PriceLookupChain`, which composes sources in priority order
//!
//! # Architecture
//!
//! The lookup system is designed to be:
//! - **Source-agnostic**: The valuation core only sees `PriceLookup`
//! - **Composable**: A chain is itself a `PriceLookup`
//! - **Non-fatal**: A miss is `Ok(None)`, never a panic

mod benchmark;
mod chain;
mod price_book;
mod traits;

pub use benchmark::{BenchmarkPriceLookup, DEFAULT_BASE_PRICE_PER_KG};
pub use chain::PriceLookupChain;
pub use price_book::InMemoryPriceBook;
pub use traits::PriceLookup;
