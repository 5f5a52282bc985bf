//! Client configuration: where the backend lives.
//!
//! The base URL is fixed for the lifetime of the application. It is resolved
//! once at startup (from the compile-time `LINKFOLIO_API_URL` environment
//! variable, the wasm equivalent of a build-time setting) and handed to the
//! view layer explicitly; nothing mutates it afterwards.

/// Location of the backend API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash, e.g. `http://localhost:8000`.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
        }
    }
}

impl ApiConfig {
    /// Build a config from an explicit base URL. A trailing slash is trimmed
    /// so path concatenation stays uniform.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the base URL baked in at compile time, falling back to the
    /// local development backend.
    pub fn from_env() -> Self {
        match option_env!("LINKFOLIO_API_URL") {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    /// Full URL for an API path, e.g. `url("/api/profiles")`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Click-accounting redirect URL for a link, addressed by `(slug,
    /// position)`. The caller must navigate here with a full page load so
    /// the backend can count the click before redirecting; fetching it would
    /// bypass the redirect.
    pub fn redirect_url(&self, slug: &str, position: i32) -> String {
        format!("{}/r/{}/{}", self.base_url, slug, position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ApiConfig::new("http://localhost:8000/");
        assert_eq!(config.url("/api/profiles"), "http://localhost:8000/api/profiles");
    }

    #[test]
    fn redirect_url_is_keyed_by_slug_and_position() {
        let config = ApiConfig::new("https://links.example.com");
        assert_eq!(
            config.redirect_url("alice", 2),
            "https://links.example.com/r/alice/2"
        );
    }
}
