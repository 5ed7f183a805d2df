/// Global application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Interface the API server binds to
    pub api_host: String,

    /// Port the API server listens on (default: 3000)
    pub api_port: u16,

    /// Backend REST API collaborator settings
    pub backend: BackendConfig,
}

/// Where and how to reach the backend REST API.
///
/// Passed explicitly to the HTTP client; nothing below the binary reads the
/// environment.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL of the backend API, without trailing slash
    pub base_url: String,

    /// Per-request timeout for outbound calls in milliseconds (default: 10000)
    pub timeout_ms: u64,

    /// Current-user lookup path
    pub me_path: String,

    /// Caller's sales listing path
    pub sales_path: String,

    /// Caller's stock listing path
    pub stock_path: String,
}

impl BackendConfig {
    pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
    pub const DEFAULT_ME_PATH: &'static str = "/api/auth/me";
    pub const DEFAULT_SALES_PATH: &'static str = "/api/sales";
    pub const DEFAULT_STOCK_PATH: &'static str = "/api/stocks";

    /// Backend settings with default paths and timeout for the given base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            timeout_ms: Self::DEFAULT_TIMEOUT_MS,
            me_path: Self::DEFAULT_ME_PATH.to_string(),
            sales_path: Self::DEFAULT_SALES_PATH.to_string(),
            stock_path: Self::DEFAULT_STOCK_PATH.to_string(),
        }
    }

    /// Join the base URL with an endpoint path.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("BACKEND_API_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("BACKEND_API_URL environment variable is required"))?;

        let timeout_ms: u64 = lookup("UPSTREAM_TIMEOUT_MS")
            .unwrap_or_else(|| BackendConfig::DEFAULT_TIMEOUT_MS.to_string())
            .parse()
            .map_err(|_| anyhow::anyhow!("UPSTREAM_TIMEOUT_MS must be a valid u64"))?;
        if timeout_ms == 0 {
            anyhow::bail!("UPSTREAM_TIMEOUT_MS must be greater than zero");
        }

        Ok(Self {
            api_host: lookup("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            api_port: lookup("API_PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("API_PORT must be a valid u16"))?,
            backend: BackendConfig {
                base_url: normalize_base_url(&base_url),
                timeout_ms,
                me_path: lookup("BACKEND_ME_PATH")
                    .unwrap_or_else(|| BackendConfig::DEFAULT_ME_PATH.to_string()),
                sales_path: lookup("BACKEND_SALES_PATH")
                    .unwrap_or_else(|| BackendConfig::DEFAULT_SALES_PATH.to_string()),
                stock_path: lookup("BACKEND_STOCK_PATH")
                    .unwrap_or_else(|| BackendConfig::DEFAULT_STOCK_PATH.to_string()),
            },
        })
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
