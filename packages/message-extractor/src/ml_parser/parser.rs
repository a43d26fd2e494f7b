//! Markup parser contract
//!
//! The extractor does not tokenize markup itself; it consumes trees produced
//! by an implementation of [`MarkupParser`].

use super::ast::Node;
use crate::parse_util::ParseError;

/// Result of parsing a template: the root nodes plus any parse errors.
#[derive(Debug, Clone, Default)]
pub struct ParseTreeResult {
    pub root_nodes: Vec<Node>,
    pub errors: Vec<ParseError>,
}

impl ParseTreeResult {
    pub fn new(root_nodes: Vec<Node>, errors: Vec<ParseError>) -> Self {
        ParseTreeResult { root_nodes, errors }
    }
}

/// Turns raw template text into a markup tree.
///
/// Implementations must tokenize expansion forms (`{count, plural, ...}`)
/// into [`Node::Expansion`](super::ast::Node::Expansion) nodes and split text
/// interpolations into tokens.
pub trait MarkupParser: Send + Sync {
    fn parse(&self, source: &str, url: &str) -> ParseTreeResult;
}
