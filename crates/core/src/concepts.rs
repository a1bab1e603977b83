use serde_json::Value;
use tracing::{error, warn};

use crate::{
    error::{DynamocardsError, Result, ShapeError},
    types::ConceptRecord,
};

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Flatten the `key_concepts` of an analysis response into concept records.
///
/// Every element of `key_concepts` is a mapping of concept name to definition and
/// may hold several entries; each entry becomes one record. Records keep the
/// order of the array, then the insertion order inside each element.
pub fn flatten_key_concepts(
    payload: &Value,
) -> std::result::Result<Vec<ConceptRecord>, ShapeError> {
    let key_concepts = payload
        .get("key_concepts")
        .ok_or(ShapeError::MissingKeyConcepts)?;

    let elements = key_concepts.as_array().ok_or(ShapeError::NotASequence {
        found: json_kind(key_concepts),
    })?;

    let mut records = Vec::new();
    for (position, element) in elements.iter().enumerate() {
        let Some(entries) = element.as_object() else {
            warn!(
                position,
                kind = json_kind(element),
                "skipping key_concepts element that is not an object"
            );
            continue;
        };

        for (term, definition) in entries {
            let definition = match definition {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            records.push(ConceptRecord::new(term.as_str(), definition));
        }
    }

    Ok(records)
}

/// Resolve the outcome of one submission into the card list to show.
///
/// Any failure (transport, status, decoding or shape) is logged and yields an
/// empty list; nothing is propagated to the caller.
pub fn concepts_or_empty(outcome: Result<Value>) -> Vec<ConceptRecord> {
    let payload = match outcome {
        Ok(payload) => payload,
        Err(e) => {
            error!("analysis request failed: {e}");
            return Vec::new();
        }
    };

    match flatten_key_concepts(&payload) {
        Ok(records) => records,
        Err(e) => {
            warn!(response = %payload, "{}", DynamocardsError::from(e));
            Vec::new()
        }
    }
}
