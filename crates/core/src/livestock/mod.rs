//! Livestock group domain module.
//!
//! Defines the validated `LivestockGroup` consumed by the valuation engine,
//! the loosely-typed `LivestockGroupInput` accepted at data entry, and the
//! repository trait through which groups are loaded.

mod livestock_model;
mod livestock_traits;

pub use livestock_model::*;
pub use livestock_traits::*;

#[cfg(test)]
mod livestock_model_tests;
