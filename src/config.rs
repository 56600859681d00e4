//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle cannot read a runtime environment, so the API base URL is
//! baked in at compile time from `BLOGFRONT_API_URL`. The resolved config is
//! provided through Leptos context from `App`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// API base used when `BLOGFRONT_API_URL` is unset at build time.
pub const DEFAULT_API_BASE: &str = "/api";

/// Posts requested per list page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "blogfront.token";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// REST base URL without a trailing slash.
    pub api_base: String,
    pub page_size: u32,
    pub token_key: String,
}

impl ClientConfig {
    /// Resolve configuration from compile-time environment.
    pub fn from_build_env() -> Self {
        Self::with_api_base(option_env!("BLOGFRONT_API_URL").unwrap_or(DEFAULT_API_BASE))
    }

    /// Config pointing at `api_base`, with defaults for everything else.
    pub fn with_api_base(api_base: &str) -> Self {
        let trimmed = api_base.trim().trim_end_matches('/');
        let api_base = if trimmed.is_empty() { DEFAULT_API_BASE } else { trimmed };
        Self {
            api_base: api_base.to_owned(),
            page_size: DEFAULT_PAGE_SIZE,
            token_key: TOKEN_STORAGE_KEY.to_owned(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_api_base(DEFAULT_API_BASE)
    }
}
