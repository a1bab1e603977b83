use reqwest::Url;
use serde_json::Value;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    concepts::concepts_or_empty,
    config::ClientConfig,
    error::{DynamocardsError, Result},
    types::{AnalyzeVideoRequest, ConceptRecord},
};

const MAX_ERROR_BODY_CHARS: usize = 512;

/// Anything that can turn a submitted link into a decoded analysis response.
pub trait Analyzer {
    async fn analyze(&self, request: &AnalyzeVideoRequest) -> Result<Value>;
}

/// HTTP client for the `POST /analyze_video` endpoint.
#[derive(Clone, Debug)]
pub struct AnalyzerClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl AnalyzerClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let endpoint = config.analyze_url()?;
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Post the request and decode the JSON body. Non-2xx statuses are errors.
    pub async fn analyze_video(&self, request: &AnalyzeVideoRequest) -> Result<Value> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DynamocardsError::Status {
                status,
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Submit the link and resolve the response into cards, empty on any failure.
    #[tracing::instrument(skip(self), fields(request_id = %Uuid::new_v4()))]
    pub async fn fetch_concepts(&self, request: &AnalyzeVideoRequest) -> Vec<ConceptRecord> {
        debug!(endpoint = %self.endpoint, "submitting link for analysis");
        let cards = concepts_or_empty(self.analyze_video(request).await);
        info!(count = cards.len(), "key concepts loaded");
        cards
    }
}

impl Analyzer for AnalyzerClient {
    async fn analyze(&self, request: &AnalyzeVideoRequest) -> Result<Value> {
        self.analyze_video(request).await
    }
}
