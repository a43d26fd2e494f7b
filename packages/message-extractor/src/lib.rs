#![deny(clippy::all)]

//! Translatable message extraction for HTML-like templates.
//!
//! Given a parsed markup tree, [`i18n::MessageExtractor`] finds the content
//! marked for translation and turns it into [`i18n::Message`]s whose markup
//! and interpolations are replaced by named placeholders:
//!
//! ```text
//! <p i18n="greeting|Shown on login">Hello <b>{{name}}</b>!</p>
//! ```
//!
//! yields the message `Hello <ph name="e0"><ph name="i1"/></ph>!` with
//! meaning `greeting` and description `Shown on login`.
//!
//! The markup and expression parsers are collaborators supplied by the
//! caller through [`ml_parser::MarkupParser`] and
//! [`expression_parser::ExpressionParser`].

pub mod expression_parser;
pub mod i18n;
pub mod ml_parser;
pub mod parse_util;

pub use i18n::{ExtractionResult, ExtractorConfig, I18nError, Message, MessageExtractor};
