use std::time::Duration;

use reqwest::Url;

use crate::error::{DynamocardsError, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);
pub const ANALYZE_VIDEO_PATH: &str = "analyze_video";

/// Where and how the analysis endpoint is reached.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Full URL of `POST /analyze_video` under the configured origin.
    pub fn analyze_url(&self) -> Result<Url> {
        let invalid = |reason: String| DynamocardsError::InvalidEndpoint {
            base_url: self.base_url.clone(),
            reason,
        };

        let mut base = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(invalid("URL cannot be used as a base".to_string()));
        }
        // Treat the base as a directory so a path prefix survives the join.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        base.join(ANALYZE_VIDEO_PATH)
            .map_err(|e| invalid(e.to_string()))
    }
}
