/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Public URL base for locally stored media (default: `/storage`).
    pub public_storage_base_url: String,
    /// TTL for cached render payloads in seconds (default: `600`).
    pub payload_cache_ttl_secs: u64,
    /// When true, rendering fails with 422 if a template's required
    /// relations are missing; when false, the gaps are only logged.
    pub template_validation_enforce: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                       | Default                 |
    /// |-------------------------------|-------------------------|
    /// | `HOST`                        | `0.0.0.0`               |
    /// | `PORT`                        | `3000`                  |
    /// | `CORS_ORIGINS`                | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`        | `30`                    |
    /// | `PUBLIC_STORAGE_BASE_URL`     | `/storage`              |
    /// | `PAYLOAD_CACHE_TTL_SECS`      | `600`                   |
    /// | `TEMPLATE_VALIDATION_ENFORCE` | `false`                 |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let public_storage_base_url =
            std::env::var("PUBLIC_STORAGE_BASE_URL").unwrap_or_else(|_| "/storage".into());

        let payload_cache_ttl_secs: u64 = std::env::var("PAYLOAD_CACHE_TTL_SECS")
            .unwrap_or_else(|_| "600".into())
            .parse()
            .expect("PAYLOAD_CACHE_TTL_SECS must be a valid u64");

        let template_validation_enforce = std::env::var("TEMPLATE_VALIDATION_ENFORCE")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            public_storage_base_url,
            payload_cache_ttl_secs,
            template_validation_enforce,
        }
    }
}
