//! Compliance status aggregation over the backend collaborators.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use drivn_backend::{BackendApi, CallerContext};
use drivn_common::error::AppError;
use drivn_common::types::ComplianceResult;

use crate::compliance;
use crate::period::ReportingPeriod;

/// Computes a franchise's compliance status from backend reads.
#[derive(Clone)]
pub struct ComplianceService {
    backend: Arc<dyn BackendApi>,
}

impl ComplianceService {
    pub fn new(backend: Arc<dyn BackendApi>) -> Self {
        Self { backend }
    }

    /// Compliance status of the caller for the current month.
    pub async fn status(&self, caller: &CallerContext) -> Result<ComplianceResult, AppError> {
        self.status_at(caller, Utc::now()).await
    }

    /// Compliance status of the caller, labelled with the month containing `now`.
    ///
    /// The identity lookup runs first and short-circuits on failure. Sales and
    /// stock are then fetched concurrently; the first failure wins.
    pub async fn status_at(
        &self,
        caller: &CallerContext,
        now: DateTime<Utc>,
    ) -> Result<ComplianceResult, AppError> {
        let user = self.backend.current_user(caller).await?;
        let period = ReportingPeriod::current(now);

        tracing::debug!(
            user = %user.reference(),
            period_start = %period.start,
            period_end = %period.end,
            "Computing compliance status"
        );

        let (sales, stock) =
            tokio::try_join!(self.backend.sales(caller), self.backend.stock(caller))?;

        let result = compliance::evaluate(&sales, &stock, &period);

        tracing::info!(
            user = %user.reference(),
            sales = sales.len(),
            stock_entries = stock.len(),
            pourcentage = %result.pourcentage_achats,
            est_conforme = result.est_conforme,
            periode = %result.periode,
            "Compliance status computed"
        );

        Ok(result)
    }
}
