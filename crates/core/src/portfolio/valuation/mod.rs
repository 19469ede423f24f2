//! Herd valuation engine.
//!
//! `valuation_calculator` holds the pure valuation arithmetic; `valuation_service`
//! resolves a market price through the injected [`PriceLookup`](herdfolio_market_data::PriceLookup)
//! and feeds it to the calculator.

pub mod species_profile;
pub mod valuation_calculator;
pub mod valuation_model;
pub mod valuation_service;

pub use species_profile::*;
pub use valuation_calculator::*;
pub use valuation_model::*;
pub use valuation_service::ValuationService;
pub use valuation_service::ValuationServiceTrait;
