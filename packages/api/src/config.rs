//! API endpoint configuration.

use moderation_core::{Advertisement, catalog::IMAGE_PLACEHOLDER};

use crate::ApiError;

/// Default REST base path of the moderation backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/api/v1";

/// Host that relative image paths are served from.
pub const DEFAULT_ASSET_HOST: &str = "http://localhost:3001";

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Absolute base URL every endpoint path is appended to.
    pub base_url: String,
    /// Absolute origin for relative image URLs.
    pub asset_host: String,
    /// Request timeout in seconds (native targets only).
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            asset_host: DEFAULT_ASSET_HOST.to_string(),
            timeout_secs: 10,
        }
    }
}

impl ApiConfig {
    /// Build the configuration from `MODERATION_API_URL` and
    /// `MODERATION_ASSET_HOST`.
    ///
    /// Values baked in at build time are used first; on native targets the
    /// process environment overrides them.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(url) = option_env!("MODERATION_API_URL") {
            config.base_url = url.to_string();
        }
        if let Some(host) = option_env!("MODERATION_ASSET_HOST") {
            config.asset_host = host.to_string();
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Ok(url) = std::env::var("MODERATION_API_URL") {
                config.base_url = url;
            }
            if let Ok(host) = std::env::var("MODERATION_ASSET_HOST") {
                config.asset_host = host;
            }
        }

        config
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the asset host.
    pub fn with_asset_host(mut self, asset_host: impl Into<String>) -> Self {
        self.asset_host = asset_host.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Check that both URLs are absolute http(s) URLs.
    pub fn validate(&self) -> Result<(), ApiError> {
        for (name, value) in [("base_url", &self.base_url), ("asset_host", &self.asset_host)] {
            if !(value.starts_with("http://") || value.starts_with("https://")) {
                return Err(ApiError::InvalidConfig(format!(
                    "{name} must be an absolute http(s) URL, got {value:?}"
                )));
            }
        }
        Ok(())
    }

    /// Full URL of an endpoint path such as `/ads/3`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Resolve an image URL: absolute URLs pass through, relative paths are
    /// served from the asset host.
    pub fn image_url(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            format!(
                "{}/{}",
                self.asset_host.trim_end_matches('/'),
                path.trim_start_matches('/')
            )
        }
    }

    /// Card cover of an ad, or the placeholder when it has no images.
    pub fn cover_url(&self, ad: &Advertisement) -> String {
        ad.cover_image()
            .map(|path| self.image_url(path))
            .unwrap_or_else(|| IMAGE_PLACEHOLDER.to_string())
    }
}
