//! Message Bundle Module
//!
//! A container for messages extracted from several templates.

use super::errors::I18nError;
use super::message::{remove_duplicates, Message};
use super::message_extractor::MessageExtractor;

pub struct MessageBundle {
    extractor: MessageExtractor,
    messages: Vec<Message>,
}

impl MessageBundle {
    pub fn new(extractor: MessageExtractor) -> Self {
        MessageBundle {
            extractor,
            messages: Vec::new(),
        }
    }

    /// Extract the messages of one template into the bundle. A template that
    /// reports any error contributes no messages; its errors are returned.
    pub fn update_from_template(&mut self, source: &str, url: &str) -> Vec<I18nError> {
        let result = self.extractor.extract(source, url);
        if result.has_errors() {
            return result.errors;
        }
        self.messages.extend(result.messages);
        vec![]
    }

    /// Every message in discovery order, duplicates included.
    pub fn get_messages(&self) -> &[Message] {
        &self.messages
    }

    /// Messages deduplicated by content and meaning; the first occurrence
    /// wins.
    pub fn unique_messages(&self) -> Vec<Message> {
        remove_duplicates(&self.messages)
    }
}
