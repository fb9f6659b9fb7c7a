//! Backend endpoint configuration.

use serde::{Deserialize, Serialize};

/// Where the REST backend lives.
///
/// The default is the empty string, i.e. same-origin relative requests,
/// which is what the deployed web build wants. Desktop builds point at a
/// concrete origin via `WEAVERSONG_API_URL`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Resolve the config for this process: the `WEAVERSONG_API_URL`
    /// environment variable on native, same-origin otherwise.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        if let Ok(url) = std::env::var("WEAVERSONG_API_URL") {
            return Self::new(url);
        }
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_stripped() {
        assert_eq!(ApiConfig::new("http://localhost:8000/").base_url, "http://localhost:8000");
    }

    #[test]
    fn test_default_is_same_origin() {
        assert_eq!(ApiConfig::default().base_url, "");
    }
}
