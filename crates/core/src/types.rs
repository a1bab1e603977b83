use serde::{Deserialize, Serialize};

/// One term/definition pair, shown as a single flashcard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptRecord {
    pub term: String,
    pub definition: String,
}

impl ConceptRecord {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
        }
    }
}

/// Body of `POST /analyze_video`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeVideoRequest {
    pub youtube_link: String,
}

impl AnalyzeVideoRequest {
    pub fn new(youtube_link: impl Into<String>) -> Self {
        Self {
            youtube_link: youtube_link.into(),
        }
    }
}
