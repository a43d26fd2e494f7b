//! Expression Parser Module
//!
//! Validation contract for interpolated expressions.

pub mod parser;

pub use parser::{
    find_comment_start, strip_comments, ExpressionAst, ExpressionParser, ParserError,
    SyntaxChecker,
};
