//! Portfolio service traits.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use super::summary_model::{PortfolioHistoryPoint, PortfolioSummary};
use crate::errors::Result;
use crate::portfolio::valuation::HerdValuation;

/// Trait defining the contract for portfolio aggregation.
#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    /// Value the groups for the asset register.
    ///
    /// With `None` the valuation is live: it uses the same groups as
    /// [`get_portfolio_summary`](Self::get_portfolio_summary), i.e. unsold and
    /// already acquired. With `Some(as_of)` it values the groups held at that
    /// instant, including ones sold afterwards.
    async fn get_herd_valuations(
        &self,
        as_of: Option<DateTime<Utc>>,
    ) -> Result<Vec<HerdValuation>>;

    /// Live summary of the unsold, already acquired groups, served from cache
    /// while fresh.
    async fn get_portfolio_summary(&self) -> Result<PortfolioSummary>;

    /// Uncached summary of the groups held at `as_of`.
    async fn get_portfolio_summary_as_of(&self, as_of: DateTime<Utc>) -> Result<PortfolioSummary>;

    /// Portfolio value history from `start_date` to `end_date`, one point every
    /// `step_days` days plus the end date.
    ///
    /// Each point values the portfolio at the end of that local day.
    async fn get_valuation_history(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        step_days: u32,
    ) -> Result<Vec<PortfolioHistoryPoint>>;
}
