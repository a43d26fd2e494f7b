//! Marker recognition
//!
//! Content is marked for translation by an `i18n` attribute on an element,
//! by an `i18n-<name>` attribute naming a sibling attribute, by membership
//! in the configured implicit tags, or by a `<!-- i18n -->` ...
//! `<!-- /i18n -->` comment pair around a run of siblings.

use super::errors::I18nError;
use super::message::Message;
use crate::ml_parser::ast::{Attribute, Element, Node};
use crate::ml_parser::html_tags::is_void_element;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref I18N_COMMENT_PREFIX_REGEXP: Regex = Regex::new(r"^i18n(?::|\s|$)").unwrap();
}

pub const I18N_ATTR: &str = "i18n";
pub const I18N_ATTR_PREFIX: &str = "i18n-";
const I18N_CLOSING_COMMENT: &str = "/i18n";
const MEANING_SEPARATOR: char = '|';

/// Meaning and description attached to a marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct I18nMeta {
    pub meaning: String,
    pub description: String,
}

/// Parse a marker value of the form `meaning|description`. Both halves are
/// optional; a value without separator is all meaning.
pub fn parse_i18n_meta(value: &str) -> Result<I18nMeta, String> {
    let mut parts = value.split(MEANING_SEPARATOR);
    let meaning = parts.next().unwrap_or_default().to_string();
    let description = parts.next().unwrap_or_default().to_string();
    if parts.next().is_some() {
        return Err(format!(
            "Malformed i18n value \"{}\", expected \"meaning|description\".",
            value
        ));
    }
    Ok(I18nMeta { meaning, description })
}

fn comment_value(node: &Node) -> Option<&str> {
    match node {
        Node::Comment(c) => c.value.as_deref().map(str::trim),
        _ => None,
    }
}

pub fn is_opening_comment(node: &Node) -> bool {
    comment_value(node).is_some_and(|v| I18N_COMMENT_PREFIX_REGEXP.is_match(v))
}

pub fn is_closing_comment(node: &Node) -> bool {
    comment_value(node) == Some(I18N_CLOSING_COMMENT)
}

pub fn find_i18n_attr(element: &Element) -> Option<&Attribute> {
    element.attr(I18N_ATTR)
}

/// The meta of an element's own `i18n` attribute, if it has one.
///
/// Void elements have no content to translate, so marking one is an error.
pub fn explicit_element_meta(element: &Element) -> Option<Result<I18nMeta, I18nError>> {
    let attr = find_i18n_attr(element)?;
    if is_void_element(&element.name) {
        return Some(Err(I18nError::marker(
            &attr.source_span,
            format!("Void element <{}> cannot carry an 'i18n' marker.", element.name),
        )));
    }
    Some(parse_i18n_meta(&attr.value).map_err(|msg| I18nError::marker(&attr.source_span, msg)))
}

/// Attributes of the form `i18n-<name>`.
pub fn explicit_attribute_markers(element: &Element) -> impl Iterator<Item = &Attribute> {
    element
        .attrs
        .iter()
        .filter(|a| a.name.starts_with(I18N_ATTR_PREFIX))
}

/// Build the message for an `i18n-<name>` marker: the content is the value
/// of attribute `<name>` on the same element.
pub fn message_from_explicit_attribute(
    element: &Element,
    i18n_attr: &Attribute,
) -> Result<Message, I18nError> {
    let expected_name = &i18n_attr.name[I18N_ATTR_PREFIX.len()..];
    let meta = parse_i18n_meta(&i18n_attr.value)
        .map_err(|msg| I18nError::marker(&i18n_attr.source_span, msg))?;
    let attr = element.attr(expected_name).ok_or_else(|| {
        I18nError::marker(&element.source_span, format!("Missing attribute '{}'.", expected_name))
    })?;
    Ok(message_from_attribute(attr, meta))
}

/// An attribute's raw value as message content.
pub fn message_from_attribute(attr: &Attribute, meta: I18nMeta) -> Message {
    Message::new(attr.value.clone(), meta.meaning, meta.description, attr.source_span.clone())
}
