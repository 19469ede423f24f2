//! Repository traits for livestock groups.

use crate::errors::Result;

use super::LivestockGroup;

/// Read access to persisted livestock groups.
///
/// The valuation core never writes groups; mutations belong to the host
/// application, which emits a [`DomainEvent`](crate::events::DomainEvent)
/// afterwards so cached aggregates can be dropped.
pub trait LivestockRepositoryTrait: Send + Sync {
    /// Get a single group by id.
    fn get_by_id(&self, herd_id: &str) -> Result<LivestockGroup>;

    /// List groups, optionally including sold ones.
    fn list(&self, include_sold: bool) -> Result<Vec<LivestockGroup>>;
}
