//! Domain event types.

use serde::{Deserialize, Serialize};

/// Domain events emitted after changes to data the valuation depends on.
///
/// These events represent facts about data changes. Subscribers translate
/// them into actions such as dropping cached portfolio summaries or
/// refreshing a dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// Livestock groups were created, updated, or deleted.
    HerdsChanged { herd_ids: Vec<String> },

    /// A sale was recorded; the group leaves live aggregation.
    HerdSold { herd_id: String },

    /// New market prices were loaded for the given categories.
    PricesUpdated { categories: Vec<String> },

    /// Valuation preferences (cost to carry, defaults, saleyard) changed.
    PreferencesChanged,
}

impl DomainEvent {
    /// Creates a HerdsChanged event.
    pub fn herds_changed(herd_ids: Vec<String>) -> Self {
        Self::HerdsChanged { herd_ids }
    }

    /// Creates a HerdSold event.
    pub fn herd_sold(herd_id: impl Into<String>) -> Self {
        Self::HerdSold {
            herd_id: herd_id.into(),
        }
    }

    /// Creates a PricesUpdated event.
    pub fn prices_updated(categories: Vec<String>) -> Self {
        Self::PricesUpdated { categories }
    }
}
