/// Base address used when no override was provided at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

pub struct Config;

impl Config {
    /// Base address of the Steam data API.
    ///
    /// Set `STEAM_VIEWER_API_BASE_URL` when building (e.g. `trunk build`) to
    /// point at another host. An empty value means relative URLs, for
    /// deployments where a proxy serves `/api/` next to the frontend.
    pub fn api_base_url() -> String {
        Self::resolve_base_url(option_env!("STEAM_VIEWER_API_BASE_URL"))
    }

    fn resolve_base_url(configured: Option<&str>) -> String {
        match configured {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => DEFAULT_API_BASE_URL.to_string(),
        }
    }
}
