//! Message builder
//!
//! Serializes the content of a translatable [`Part`] into a flat string in
//! which markup is replaced by placeholders:
//!
//! - an element becomes `<ph name="eN">...</ph>`, or `<ph name="eN"/>` when
//!   it has no children;
//! - an interpolation becomes `<ph name="iN"/>`, or the name given by a
//!   trailing `// i18n(ph="name")` comment;
//! - a text node holding interpolations is wrapped in `<ph name="tN">...</ph>`
//!   unless it is the only child of an element placeholder or of the marked
//!   element itself;
//! - comments are dropped.
//!
//! `N` comes from one counter per message that starts at 0 and advances in
//! document order, so the same subtree always yields the same string. Names
//! are unique within a message: a name already emitted gets a `_K` suffix.

use super::errors::I18nError;
use super::message::Message;
use super::partition::Part;
use crate::expression_parser::ExpressionParser;
use crate::ml_parser::ast::{self as html, Comment, Element, Expansion, Node, Text, TextToken};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    static ref CUSTOM_PH_EXP: Regex =
        Regex::new(r#"//.*i18n\s*\(\s*ph\s*=\s*(?:"([^"]*)"|'([^']*)')\s*\)"#).unwrap();
}

/// Build the message for a translatable part, along with any expression
/// errors found in its interpolations.
pub fn stringify(part: &Part<'_>, parser: &dyn ExpressionParser) -> (Message, Vec<I18nError>) {
    let mut visitor = StringifyVisitor::new(parser);
    // A lone text child of the marked element needs no wrapper.
    visitor.sole_child = part
        .root_element()
        .is_some_and(|root| significant_children(&root.children) == 1);
    let content = html::visit_all(&mut visitor, part.children()).concat();
    let errors = visitor.errors;
    let message = Message::new(
        content,
        part.meta.meaning.clone(),
        part.meta.description.clone(),
        part.source_span.clone(),
    );
    (message, errors)
}

pub fn stringify_nodes(nodes: &[Node], parser: &dyn ExpressionParser) -> (String, Vec<I18nError>) {
    let mut visitor = StringifyVisitor::new(parser);
    let content = html::visit_all(&mut visitor, nodes).concat();
    (content, visitor.errors)
}

fn significant_children(nodes: &[Node]) -> usize {
    nodes.iter().filter(|n| !matches!(n, Node::Comment(_))).count()
}

/// Name given to an interpolation by a `// i18n(ph="name")` comment.
pub fn custom_placeholder_name(expression: &str) -> Option<&str> {
    let captures = CUSTOM_PH_EXP.captures(expression)?;
    captures.get(1).or_else(|| captures.get(2)).map(|m| m.as_str())
}

struct StringifyVisitor<'p> {
    parser: &'p dyn ExpressionParser,
    index: usize,
    /// Every placeholder name emitted so far in this message.
    used_names: HashSet<String>,
    /// Set while visiting the single child of an element placeholder.
    sole_child: bool,
    errors: Vec<I18nError>,
}

impl<'p> StringifyVisitor<'p> {
    fn new(parser: &'p dyn ExpressionParser) -> Self {
        StringifyVisitor {
            parser,
            index: 0,
            used_names: HashSet::new(),
            sole_child: false,
            errors: Vec::new(),
        }
    }

    fn next_index(&mut self) -> usize {
        let index = self.index;
        self.index += 1;
        index
    }

    /// Reserve `name`, or the first free `name_K` when it is taken.
    fn claim_name(&mut self, name: String) -> String {
        let mut candidate = name.clone();
        let mut suffix = 1;
        while self.used_names.contains(&candidate) {
            candidate = format!("{}_{}", name, suffix);
            suffix += 1;
        }
        self.used_names.insert(candidate.clone());
        candidate
    }

    fn interpolation(&mut self, expression: &str, text: &Text) -> String {
        let index = self.next_index();
        let location = text.source_span.start.to_string();
        if let Err(error) = self.parser.parse_binding(expression, &location) {
            self.errors.push(I18nError::expression_syntax(&text.source_span, error));
        }
        let name = match custom_placeholder_name(expression) {
            Some(custom) => custom.to_string(),
            None => format!("i{}", index),
        };
        format!("<ph name=\"{}\"/>", self.claim_name(name))
    }
}

impl html::Visitor for StringifyVisitor<'_> {
    type Output = String;

    fn visit_element(&mut self, element: &Element) -> String {
        let index = self.next_index();
        let name = self.claim_name(format!("e{}", index));
        if element.children.is_empty() {
            return format!("<ph name=\"{}\"/>", name);
        }

        let sole_child = significant_children(&element.children) == 1;
        let outer = std::mem::replace(&mut self.sole_child, sole_child);
        let content = html::visit_all(self, &element.children).concat();
        self.sole_child = outer;

        format!("<ph name=\"{}\">{}</ph>", name, content)
    }

    fn visit_text(&mut self, text: &Text) -> String {
        if !text.has_interpolation() {
            return text.value.clone();
        }

        let wrapper = if self.sole_child {
            None
        } else {
            let index = self.next_index();
            Some(self.claim_name(format!("t{}", index)))
        };
        let mut content = String::new();
        for token in &text.tokens {
            match token {
                TextToken::Literal(literal) => content.push_str(literal),
                TextToken::Interpolation { expression, .. } => {
                    let ph = self.interpolation(expression, text);
                    content.push_str(&ph);
                }
            }
        }

        match wrapper {
            Some(name) => format!("<ph name=\"{}\">{}</ph>", name, content),
            None => content,
        }
    }

    fn visit_comment(&mut self, _comment: &Comment) -> String {
        String::new()
    }

    // Expansions are rewritten before partitioning.
    fn visit_expansion(&mut self, _expansion: &Expansion) -> String {
        String::new()
    }
}
