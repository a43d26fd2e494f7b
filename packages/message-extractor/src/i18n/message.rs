//! Extracted messages

use super::digest::message_id;
use crate::parse_util::ParseSourceSpan;
use indexmap::IndexMap;
use serde::Serialize;

/// A translation unit: content with `<ph name="..."/>` placeholders plus the
/// meaning and description given by its marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub content: String,
    pub meaning: String,
    pub description: String,
    #[serde(skip)]
    pub source_span: ParseSourceSpan,
}

impl Message {
    pub fn new(
        content: impl Into<String>,
        meaning: impl Into<String>,
        description: impl Into<String>,
        source_span: ParseSourceSpan,
    ) -> Self {
        Message {
            content: content.into(),
            meaning: meaning.into(),
            description: description.into(),
            source_span,
        }
    }

    pub fn id(&self) -> String {
        message_id(self)
    }
}

/// Collapse messages sharing content and meaning, keeping the first one seen
/// (and its description) in discovery order.
pub fn remove_duplicates(messages: &[Message]) -> Vec<Message> {
    let mut unique: IndexMap<String, &Message> = IndexMap::new();
    for message in messages {
        unique.entry(message.id()).or_insert(message);
    }
    unique.into_values().cloned().collect()
}
