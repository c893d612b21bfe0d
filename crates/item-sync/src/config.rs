//! Client Configuration
//!
//! Base endpoint of the remote item store.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Endpoint used when no `ITEM_API_BASE_URL` was set at build time
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Characters escaped when an item id is placed in a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Remote store configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without trailing slash, e.g. `https://api.example.com/dev`
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Configuration baked in at compile time.
    ///
    /// `ITEM_API_BASE_URL` is read with `option_env!`, so it must be set in the
    /// environment of the build (e.g. `ITEM_API_BASE_URL=... trunk build`).
    pub fn from_build_env() -> Self {
        match option_env!("ITEM_API_BASE_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    /// `<base>/items`
    pub fn items_url(&self) -> String {
        format!("{}/items", self.base_url)
    }

    /// `<base>/items/<id>` with the id escaped as one path segment
    pub fn item_url(&self, id: &str) -> String {
        format!("{}/items/{}", self.base_url, utf8_percent_encode(id, PATH_SEGMENT))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_trimmed() {
        let config = ApiConfig::new("https://api.example.com/dev//");
        assert_eq!(config.base_url, "https://api.example.com/dev");
        assert_eq!(config.items_url(), "https://api.example.com/dev/items");
    }

    #[test]
    fn test_item_url_escapes_segment() {
        let config = ApiConfig::new("http://host");
        assert_eq!(config.item_url("a1"), "http://host/items/a1");
        assert_eq!(config.item_url("a/b c"), "http://host/items/a%2Fb%20c");
        assert_eq!(config.item_url("50%?"), "http://host/items/50%25%3F");
    }
}
