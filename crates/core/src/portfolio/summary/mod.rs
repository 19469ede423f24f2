//! Portfolio aggregation module.
//!
//! Rolls per-herd valuations up into portfolio totals, a per-species
//! breakdown and a value-over-time history. Live summaries are cached with an
//! explicit staleness window and cleared by domain events.

mod summary_cache;
mod summary_model;
mod summary_service;
mod summary_traits;

pub use summary_cache::SummaryCache;
pub use summary_model::*;
pub use summary_service::*;
pub use summary_traits::*;
