//! ML (Markup Language) Parser Module
//!
//! The markup tree consumed by the extractor and the contract of the parser
//! that produces it.

pub mod ast;
pub mod defaults;
pub mod html_tags;
pub mod parser;

pub use ast::*;
pub use defaults::*;
pub use html_tags::is_void_element;
pub use parser::{MarkupParser, ParseTreeResult};
