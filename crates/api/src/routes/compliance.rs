//! Franchise compliance route.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use drivn_common::error::AppError;
use drivn_common::types::ComplianceResult;

use crate::middleware::auth::AuthCaller;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/franchise/compliance", get(compliance_status))
}

/// Success envelope for the compliance status.
#[derive(Debug, Serialize)]
pub struct ComplianceResponse {
    pub success: bool,
    pub compliance: ComplianceResult,
}

/// GET /api/franchise/compliance: mandated-supplier purchase share of the caller.
async fn compliance_status(
    State(state): State<AppState>,
    auth: AuthCaller,
) -> Result<Json<ComplianceResponse>, AppError> {
    let compliance = state
        .compliance
        .status(&auth.caller)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "Compliance status failed"))?;

    Ok(Json(ComplianceResponse {
        success: true,
        compliance,
    }))
}
