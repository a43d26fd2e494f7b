//! Message Extractor
//!
//! Walks a template top-down. At each sibling level the nodes are
//! partitioned; a translatable part becomes a message and its descendants
//! are then only scanned for attribute messages, while a non-translatable
//! part is descended into and partitioned again. Every element's attributes
//! are scanned for `i18n-*` markers and for configured implicit attributes.
//!
//! Errors are collected next to the messages and never stop the walk. Only
//! markup parse errors are fatal: they are returned as-is and no messages are
//! extracted.

use super::config::ExtractorConfig;
use super::errors::I18nError;
use super::expander::expand_nodes;
use super::markers::{
    explicit_attribute_markers, message_from_attribute, message_from_explicit_attribute, I18nMeta,
    I18N_ATTR_PREFIX,
};
use super::message::Message;
use super::partition::{partition, Part};
use super::stringify::stringify;
use crate::expression_parser::ExpressionParser;
use crate::ml_parser::ast::{Element, Node};
use crate::ml_parser::parser::MarkupParser;
use rayon::prelude::*;
use tracing::{debug, instrument, warn};

#[derive(Debug, Clone, Default)]
pub struct ExtractionResult {
    pub messages: Vec<Message>,
    pub errors: Vec<I18nError>,
}

impl ExtractionResult {
    pub fn new(messages: Vec<Message>, errors: Vec<I18nError>) -> Self {
        ExtractionResult { messages, errors }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

pub struct MessageExtractor {
    html_parser: Box<dyn MarkupParser>,
    expression_parser: Box<dyn ExpressionParser>,
    config: ExtractorConfig,
}

impl MessageExtractor {
    pub fn new(
        html_parser: impl MarkupParser + 'static,
        expression_parser: impl ExpressionParser + 'static,
        config: ExtractorConfig,
    ) -> Self {
        MessageExtractor {
            html_parser: Box::new(html_parser),
            expression_parser: Box::new(expression_parser),
            config,
        }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Parse `source` and extract its messages.
    #[instrument(level = "debug", skip(self, source))]
    pub fn extract(&self, source: &str, url: &str) -> ExtractionResult {
        let parsed = self.html_parser.parse(source, url);
        if !parsed.errors.is_empty() {
            warn!(errors = parsed.errors.len(), "template has parse errors, nothing extracted");
            let errors = parsed.errors.into_iter().map(I18nError::from).collect();
            return ExtractionResult::new(vec![], errors);
        }
        self.extract_nodes(&parsed.root_nodes)
    }

    /// Extract the messages of an already parsed tree.
    pub fn extract_nodes(&self, nodes: &[Node]) -> ExtractionResult {
        let expansion = expand_nodes(nodes);
        let mut extraction = Extraction::new(self);
        extraction.recurse(&expansion.nodes);

        debug!(
            messages = extraction.messages.len(),
            errors = extraction.errors.len(),
            expanded = expansion.expanded,
            "extracted messages"
        );
        if !extraction.errors.is_empty() {
            warn!(errors = extraction.errors.len(), "extraction reported errors");
        }
        ExtractionResult::new(extraction.messages, extraction.errors)
    }

    /// Extract several `(source, url)` templates in parallel. Results are in
    /// input order.
    pub fn extract_all(&self, templates: &[(&str, &str)]) -> Vec<ExtractionResult> {
        templates
            .par_iter()
            .map(|(source, url)| self.extract(source, url))
            .collect()
    }
}

/// Accumulator for a single extraction.
struct Extraction<'e> {
    extractor: &'e MessageExtractor,
    messages: Vec<Message>,
    errors: Vec<I18nError>,
}

impl<'e> Extraction<'e> {
    fn new(extractor: &'e MessageExtractor) -> Self {
        Extraction {
            extractor,
            messages: Vec::new(),
            errors: Vec::new(),
        }
    }

    fn recurse(&mut self, nodes: &[Node]) {
        let (parts, errors) = partition(nodes, &self.extractor.config.implicit_tags);
        self.errors.extend(errors);
        for part in &parts {
            self.extract_from_part(part);
        }
    }

    fn extract_from_part(&mut self, part: &Part<'_>) {
        if part.translatable {
            let (message, errors) = stringify(part, self.extractor.expression_parser.as_ref());
            self.messages.push(message);
            self.errors.extend(errors);
            self.recurse_to_extract_from_attributes(part.children());
            if let Some(root) = part.root_element() {
                self.extract_from_attributes(root);
            }
        } else {
            for element in part.nodes.iter().filter_map(Node::as_element) {
                self.recurse(&element.children);
                self.extract_from_attributes(element);
            }
        }
    }

    fn recurse_to_extract_from_attributes(&mut self, nodes: &[Node]) {
        for element in nodes.iter().filter_map(Node::as_element) {
            self.extract_from_attributes(element);
            self.recurse_to_extract_from_attributes(&element.children);
        }
    }

    fn extract_from_attributes(&mut self, element: &Element) {
        let mut explicit_attrs: Vec<&str> = Vec::new();

        for marker in explicit_attribute_markers(element) {
            explicit_attrs.push(&marker.name[I18N_ATTR_PREFIX.len()..]);
            match message_from_explicit_attribute(element, marker) {
                Ok(message) => self.messages.push(message),
                Err(error) => self.errors.push(error),
            }
        }

        let config = &self.extractor.config;
        for attr in &element.attrs {
            if attr.name.starts_with(I18N_ATTR_PREFIX)
                || explicit_attrs.contains(&attr.name.as_str())
            {
                continue;
            }
            if config.is_implicit_attr(&element.name, &attr.name) {
                self.messages.push(message_from_attribute(attr, I18nMeta::default()));
            }
        }
    }
}
