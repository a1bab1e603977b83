use serde_json::Value;
use tracing::debug;

use crate::{
    client::Analyzer,
    concepts::concepts_or_empty,
    error::Result,
    types::{AnalyzeVideoRequest, ConceptRecord},
};

/// State behind the flashcard view: the link being edited and the visible cards.
///
/// The card list only ever holds what is on screen. A load replaces it
/// wholesale, a discard removes exactly one card.
#[derive(Debug, Default, Clone)]
pub struct Deck {
    link: String,
    cards: Vec<ConceptRecord>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn cards(&self) -> &[ConceptRecord] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn on_link_change(&mut self, text: impl Into<String>) {
        self.link = text.into();
    }

    /// Request body for submitting the current link as-is.
    pub fn request(&self) -> AnalyzeVideoRequest {
        AnalyzeVideoRequest::new(self.link.as_str())
    }

    pub fn on_loaded(&mut self, cards: Vec<ConceptRecord>) {
        self.cards = cards;
    }

    pub fn apply_response(&mut self, outcome: Result<Value>) {
        self.on_loaded(concepts_or_empty(outcome));
    }

    pub async fn on_submit<A: Analyzer>(&mut self, analyzer: &A) {
        let request = self.request();
        let outcome = analyzer.analyze(&request).await;
        self.apply_response(outcome);
    }

    /// Remove the card at `index`. Out of range is a no-op.
    pub fn on_discard(&mut self, index: usize) -> Option<ConceptRecord> {
        if index >= self.cards.len() {
            debug!(index, len = self.cards.len(), "discard ignored, index out of range");
            return None;
        }
        Some(self.cards.remove(index))
    }
}
