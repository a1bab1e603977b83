//! Dynamocards Core Library
//!
//! Submits a video link to the analysis endpoint and turns the returned key
//! concepts into a deck of discardable flashcards.

pub mod client;
pub mod concepts;
pub mod config;
pub mod deck;
pub mod error;
pub mod telemetry;
pub mod types;

// Re-export commonly used items at crate root
pub use client::{Analyzer, AnalyzerClient};
pub use concepts::{concepts_or_empty, flatten_key_concepts};
pub use config::ClientConfig;
pub use deck::Deck;
pub use error::{DynamocardsError, Result, ShapeError};
pub use telemetry::init_tracing;
pub use types::{AnalyzeVideoRequest, ConceptRecord};
