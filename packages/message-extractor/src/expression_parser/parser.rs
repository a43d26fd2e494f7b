//! Expression parser contract
//!
//! Interpolated expressions are only validated during extraction, never
//! evaluated. [`SyntaxChecker`] is the default validator: it strips trailing
//! `//` comments and checks quotes and bracket nesting.

use thiserror::Error;

/// The validated form of an interpolated expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionAst {
    /// Expression source with any trailing comment removed.
    pub source: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Parser Error: {message} {err_location} [{input}] in {ctx_location}")]
pub struct ParserError {
    pub message: String,
    pub input: String,
    pub err_location: String,
    pub ctx_location: String,
}

impl ParserError {
    pub fn new(
        message: impl Into<String>,
        input: impl Into<String>,
        err_location: impl Into<String>,
        ctx_location: impl Into<String>,
    ) -> Self {
        ParserError {
            message: message.into(),
            input: input.into(),
            err_location: err_location.into(),
            ctx_location: ctx_location.into(),
        }
    }
}

/// Parses the source of a single interpolated expression.
pub trait ExpressionParser: Send + Sync {
    fn parse_binding(&self, input: &str, location: &str) -> Result<ExpressionAst, ParserError>;
}

/// Byte offset of a `//` comment outside string literals, if any.
pub fn find_comment_start(input: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut prev: Option<(usize, char)> = None;

    for (i, ch) in input.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == q {
                quote = None;
            }
        } else if matches!(ch, '\'' | '"' | '`') {
            quote = Some(ch);
        } else if ch == '/' {
            if let Some((start, '/')) = prev {
                return Some(start);
            }
        }
        prev = Some((i, ch));
    }
    None
}

/// Expression source with any trailing `//` comment removed.
pub fn strip_comments(input: &str) -> &str {
    match find_comment_start(input) {
        Some(start) => &input[..start],
        None => input,
    }
}

fn closing_bracket(open: char) -> char {
    match open {
        '(' => ')',
        '[' => ']',
        _ => '}',
    }
}

/// Default [`ExpressionParser`] that checks the lexical shape of an
/// expression without building a full syntax tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntaxChecker;

impl SyntaxChecker {
    pub fn new() -> Self {
        SyntaxChecker
    }

    fn check(input: &str) -> Result<(), (String, usize)> {
        if input.trim().is_empty() {
            return Err((
                "Blank expressions are not allowed in interpolated strings".to_string(),
                0,
            ));
        }

        let mut brackets: Vec<(char, usize)> = Vec::new();
        let mut quote: Option<(char, usize)> = None;
        let mut escaped = false;

        for (i, ch) in input.char_indices() {
            if let Some((q, _)) = quote {
                if escaped {
                    escaped = false;
                } else if ch == '\\' {
                    escaped = true;
                } else if ch == q {
                    quote = None;
                }
                continue;
            }
            match ch {
                '\'' | '"' | '`' => quote = Some((ch, i)),
                '(' | '[' | '{' => brackets.push((ch, i)),
                ')' | ']' | '}' => match brackets.pop() {
                    Some((open, _)) if closing_bracket(open) == ch => {}
                    _ => return Err((format!("Unexpected token '{}'", ch), i)),
                },
                _ => {}
            }
        }

        if let Some((_, start)) = quote {
            return Err(("Unterminated quote".to_string(), start));
        }
        if let Some((open, _)) = brackets.pop() {
            return Err((format!("Missing expected {}", closing_bracket(open)), input.len()));
        }
        Ok(())
    }
}

impl ExpressionParser for SyntaxChecker {
    fn parse_binding(&self, input: &str, location: &str) -> Result<ExpressionAst, ParserError> {
        let source = strip_comments(input);
        SyntaxChecker::check(source).map_err(|(message, column)| {
            ParserError::new(message, input, format!("at column {} in", column), location)
        })?;
        Ok(ExpressionAst {
            source: source.to_string(),
            location: location.to_string(),
        })
    }
}
