//! Market data models
//!
//! This module contains the core data types for price lookups:
//! - `species` - Livestock species classification
//! - `category` - Saleyard category catalogue and benchmark multipliers
//! - `price` - Price queries, quotes, tiers and historical records

mod category;
mod price;
mod species;

pub use category::{category_multiplier, known_categories};
pub use price::{PriceQuery, PriceQuote, PriceRecord, PriceTier, UNKNOWN_PRICE_SOURCE};
pub use species::Species;
