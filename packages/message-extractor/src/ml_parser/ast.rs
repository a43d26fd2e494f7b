//! ML Parser AST
//!
//! The markup tree handed over by the external parser. Nodes are immutable
//! once built; the extractor only reads them and groups references to them.

use super::defaults::InterpolationConfig;
use crate::parse_util::ParseSourceSpan;

/// Node type union
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(Text),
    Comment(Comment),
    Expansion(Expansion),
}

impl Node {
    pub fn source_span(&self) -> &ParseSourceSpan {
        match self {
            Node::Element(e) => &e.source_span,
            Node::Text(t) => &t.source_span,
            Node::Comment(c) => &c.source_span,
            Node::Expansion(e) => &e.source_span,
        }
    }

    pub fn visit<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Node::Element(e) => visitor.visit_element(e),
            Node::Text(t) => visitor.visit_text(t),
            Node::Comment(c) => visitor.visit_comment(c),
            Node::Expansion(e) => visitor.visit_expansion(e),
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }
}

/// Attribute node
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
    pub source_span: ParseSourceSpan,
}

impl Attribute {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        source_span: ParseSourceSpan,
    ) -> Self {
        Attribute {
            name: name.into(),
            value: value.into(),
            source_span,
        }
    }
}

/// Element node
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    pub attrs: Vec<Attribute>,
    pub children: Vec<Node>,
    pub source_span: ParseSourceSpan,
    pub start_source_span: ParseSourceSpan,
    pub end_source_span: Option<ParseSourceSpan>,
}

impl Element {
    pub fn new(
        name: impl Into<String>,
        attrs: Vec<Attribute>,
        children: Vec<Node>,
        source_span: ParseSourceSpan,
    ) -> Self {
        Element {
            name: name.into(),
            attrs,
            children,
            start_source_span: source_span.clone(),
            end_source_span: None,
            source_span,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&Attribute> {
        self.attrs.iter().find(|a| a.name == name)
    }
}

/// A piece of a text node: literal characters or an interpolated expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextToken {
    Literal(String),
    Interpolation {
        start: String,
        expression: String,
        end: String,
    },
}

/// Text node
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub value: String,
    pub tokens: Vec<TextToken>,
    pub source_span: ParseSourceSpan,
}

impl Text {
    pub fn new(
        value: impl Into<String>,
        tokens: Vec<TextToken>,
        source_span: ParseSourceSpan,
    ) -> Self {
        Text {
            value: value.into(),
            tokens,
            source_span,
        }
    }

    /// Build a text node, splitting `value` on the interpolation markers.
    pub fn parse(
        value: impl Into<String>,
        source_span: ParseSourceSpan,
        config: &InterpolationConfig,
    ) -> Self {
        let value = value.into();
        let tokens = tokenize_interpolations(&value, config);
        Text::new(value, tokens, source_span)
    }

    pub fn has_interpolation(&self) -> bool {
        self.tokens
            .iter()
            .any(|t| matches!(t, TextToken::Interpolation { .. }))
    }
}

/// Split raw text into literal and interpolation tokens. An unterminated
/// start marker is kept as literal text, and so is everything when a marker
/// is empty.
pub fn tokenize_interpolations(value: &str, config: &InterpolationConfig) -> Vec<TextToken> {
    if !config.is_usable() {
        if value.is_empty() {
            return vec![];
        }
        return vec![TextToken::Literal(value.to_string())];
    }

    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut rest = value;

    while let Some(start) = rest.find(&config.start) {
        let after_start = &rest[start + config.start.len()..];
        let Some(end) = after_start.find(&config.end) else {
            break;
        };
        literal.push_str(&rest[..start]);
        if !literal.is_empty() {
            tokens.push(TextToken::Literal(std::mem::take(&mut literal)));
        }
        tokens.push(TextToken::Interpolation {
            start: config.start.clone(),
            expression: after_start[..end].to_string(),
            end: config.end.clone(),
        });
        rest = &after_start[end + config.end.len()..];
    }

    literal.push_str(rest);
    if !literal.is_empty() {
        tokens.push(TextToken::Literal(literal));
    }
    tokens
}

/// Comment node
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub value: Option<String>,
    pub source_span: ParseSourceSpan,
}

impl Comment {
    pub fn new(value: Option<String>, source_span: ParseSourceSpan) -> Self {
        Comment { value, source_span }
    }
}

/// Expansion (ICU message format), e.g. `{count, plural, =0 {none} other {many}}`
#[derive(Debug, Clone, PartialEq)]
pub struct Expansion {
    pub switch_value: String,
    pub expansion_type: String,
    pub cases: Vec<ExpansionCase>,
    pub source_span: ParseSourceSpan,
    pub switch_value_source_span: ParseSourceSpan,
}

impl Expansion {
    pub fn new(
        switch_value: impl Into<String>,
        expansion_type: impl Into<String>,
        cases: Vec<ExpansionCase>,
        source_span: ParseSourceSpan,
    ) -> Self {
        Expansion {
            switch_value: switch_value.into(),
            expansion_type: expansion_type.into(),
            cases,
            switch_value_source_span: source_span.clone(),
            source_span,
        }
    }
}

/// Expansion case
#[derive(Debug, Clone, PartialEq)]
pub struct ExpansionCase {
    pub value: String,
    pub expression: Vec<Node>,
    pub source_span: ParseSourceSpan,
    pub value_source_span: ParseSourceSpan,
}

impl ExpansionCase {
    pub fn new(
        value: impl Into<String>,
        expression: Vec<Node>,
        source_span: ParseSourceSpan,
    ) -> Self {
        ExpansionCase {
            value: value.into(),
            expression,
            value_source_span: source_span.clone(),
            source_span,
        }
    }
}

/// Visitor trait for traversing AST
pub trait Visitor {
    type Output;

    fn visit_element(&mut self, element: &Element) -> Self::Output;
    fn visit_text(&mut self, text: &Text) -> Self::Output;
    fn visit_comment(&mut self, comment: &Comment) -> Self::Output;
    fn visit_expansion(&mut self, expansion: &Expansion) -> Self::Output;
}

/// Visit all nodes in array
pub fn visit_all<V: Visitor + ?Sized>(visitor: &mut V, nodes: &[Node]) -> Vec<V::Output> {
    nodes.iter().map(|node| node.visit(visitor)).collect()
}
