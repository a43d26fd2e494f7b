//! Extraction errors
//!
//! Every problem found while extracting is recorded as an [`I18nError`] and
//! collected next to the messages; none of them aborts the traversal.

use crate::expression_parser::ParserError;
use crate::parse_util::{ParseError, ParseSourceSpan};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum I18nErrorKind {
    /// An opening `<!-- i18n -->` comment without its `<!-- /i18n -->`.
    #[error("Missing closing 'i18n' comment.")]
    UnmatchedMarker,

    /// A `<!-- /i18n -->` comment with no open block.
    #[error("Unexpected closing 'i18n' comment.")]
    UnexpectedClosingMarker,

    /// A marker that cannot produce a message, or whose meta is malformed.
    #[error("{0}")]
    Marker(String),

    #[error(transparent)]
    ExpressionSyntax(ParserError),

    /// Forwarded from the markup parser; fatal to the whole extraction.
    #[error("{}", .0.msg)]
    Markup(ParseError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {}", .span.start)]
pub struct I18nError {
    pub kind: I18nErrorKind,
    pub span: ParseSourceSpan,
}

impl I18nError {
    pub fn new(kind: I18nErrorKind, span: ParseSourceSpan) -> Self {
        I18nError { kind, span }
    }

    pub fn unmatched_marker(span: &ParseSourceSpan) -> Self {
        I18nError::new(I18nErrorKind::UnmatchedMarker, span.clone())
    }

    pub fn unexpected_closing_marker(span: &ParseSourceSpan) -> Self {
        I18nError::new(I18nErrorKind::UnexpectedClosingMarker, span.clone())
    }

    pub fn marker(span: &ParseSourceSpan, msg: impl Into<String>) -> Self {
        I18nError::new(I18nErrorKind::Marker(msg.into()), span.clone())
    }

    pub fn expression_syntax(span: &ParseSourceSpan, error: ParserError) -> Self {
        I18nError::new(I18nErrorKind::ExpressionSyntax(error), span.clone())
    }

    /// The error message without location.
    pub fn msg(&self) -> String {
        self.kind.to_string()
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self.kind, I18nErrorKind::Markup(_))
    }
}

impl From<ParseError> for I18nError {
    fn from(error: ParseError) -> Self {
        let span = error.span.clone();
        I18nError::new(I18nErrorKind::Markup(error), span)
    }
}
