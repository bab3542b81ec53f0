//! API base URL resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server resolves the backend location from its environment and embeds
//! it in the SSR shell as a `<meta>` tag. The hydrated client reads the tag
//! back so both render passes talk to the same backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Port the backend listens on inside a hosted codespace.
pub const CODESPACE_API_PORT: u16 = 8000;

/// Name of the `<meta>` tag carrying the resolved base URL.
pub const API_BASE_META: &str = "octofit-api-base";

/// Resolved location of the OctoFit REST API. Always ends in `/api`, never in `/`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_owned() }
    }
}

impl ApiConfig {
    /// Pick the base URL: explicit override, then codespace-derived host, then
    /// the local default. Blank values count as unset.
    pub fn resolve(explicit: Option<&str>, codespace: Option<&str>) -> Self {
        if let Some(url) = explicit.map(str::trim).filter(|v| !v.is_empty()) {
            return Self { base_url: url.trim_end_matches('/').to_owned() };
        }
        if let Some(name) = codespace.map(str::trim).filter(|v| !v.is_empty()) {
            return Self { base_url: codespace_base_url(name) };
        }
        Self::default()
    }

    /// Resolve from values baked in at compile time.
    pub fn from_build_env() -> Self {
        Self::resolve(option_env!("OCTOFIT_API_URL"), option_env!("CODESPACE_NAME"))
    }

    /// Resolve inside the browser: the shell's meta tag wins, build-time values
    /// are the fallback.
    pub fn from_browser() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let meta = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.query_selector(&format!("meta[name=\"{API_BASE_META}\"]")).ok().flatten())
                .and_then(|el| el.get_attribute("content"));
            if let Some(url) = meta.as_deref().filter(|v| !v.trim().is_empty()) {
                return Self::resolve(Some(url), None);
            }
        }
        Self::from_build_env()
    }

    /// Full URL for a path below the API root, e.g. `users/` or `users/3/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Public URL of the backend inside a hosted codespace.
pub fn codespace_base_url(codespace_name: &str) -> String {
    format!("https://{codespace_name}-{CODESPACE_API_PORT}.app.github.dev/api")
}
