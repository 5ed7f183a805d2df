//! `reqwest` implementation of [`BackendApi`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;

use drivn_common::config::BackendConfig;
use drivn_common::error::AppError;
use drivn_common::types::{CurrentUser, Sale, StockEntry};

use crate::{BackendApi, CallerContext};

/// HTTP client for the backend REST API.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    config: BackendConfig,
}

impl HttpBackend {
    /// Build a client whose every request is bounded by `config.timeout_ms`.
    pub fn new(config: BackendConfig) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        service: &'static str,
        path: &str,
        caller: &CallerContext,
    ) -> Result<T, AppError> {
        let url = self.config.url(path);

        let response = self
            .client
            .get(&url)
            .bearer_auth(caller.token())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(service, url = %url, error = %e, "Backend request failed");
                AppError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message =
                upstream_message(&body).unwrap_or_else(|| default_message(service).to_string());
            tracing::warn!(
                service,
                url = %url,
                status = status.as_u16(),
                "Backend returned an error status"
            );
            return Err(AppError::Upstream {
                service,
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!(service, url = %url, error = %e, "Malformed backend payload");
            AppError::Decode(format!("{} payload: {}", service, e))
        })
    }
}

#[async_trait]
impl BackendApi for HttpBackend {
    async fn current_user(&self, caller: &CallerContext) -> Result<CurrentUser, AppError> {
        self.get_json("identity", &self.config.me_path, caller).await
    }

    async fn sales(&self, caller: &CallerContext) -> Result<Vec<Sale>, AppError> {
        self.get_json("sales", &self.config.sales_path, caller).await
    }

    async fn stock(&self, caller: &CallerContext) -> Result<Vec<StockEntry>, AppError> {
        self.get_json("stock", &self.config.stock_path, caller).await
    }
}

/// Error message carried by a backend error body, if any.
fn upstream_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["error", "message"]
        .iter()
        .find_map(|key| value.get(key).and_then(|v| v.as_str()))
        .filter(|msg| !msg.trim().is_empty())
        .map(|msg| msg.to_string())
}

fn default_message(service: &str) -> &'static str {
    match service {
        "identity" => "Failed to resolve current user",
        "sales" => "Failed to fetch sales",
        "stock" => "Failed to fetch stock",
        _ => "Backend request failed",
    }
}
