//! Client side of the backend REST API.
//!
//! The backend owns authorization and persistence; this crate only performs
//! read requests on behalf of a caller, forwarding the caller's bearer token.

pub mod caller;
pub mod http;

use async_trait::async_trait;

use drivn_common::error::AppError;
use drivn_common::types::{CurrentUser, Sale, StockEntry};

pub use caller::CallerContext;
pub use http::HttpBackend;

/// Read operations the compliance aggregation needs from the backend.
#[async_trait]
pub trait BackendApi: Send + Sync {
    /// Resolve the identity behind the caller's token.
    async fn current_user(&self, caller: &CallerContext) -> Result<CurrentUser, AppError>;

    /// List the caller's sales.
    async fn sales(&self, caller: &CallerContext) -> Result<Vec<Sale>, AppError>;

    /// List the caller's current stock holdings.
    async fn stock(&self, caller: &CallerContext) -> Result<Vec<StockEntry>, AppError>;
}
