//! Attribute block parsing.
//!
//! Each non-empty line of a class body becomes one [`Attribute`]:
//!
//! ```text
//! - id : int pk      → name "id",     raw type "int pk"
//! - genero : varchar → name "genero", raw type "varchar"
//! - apodo            → name "apodo",  raw type ""
//! ```
//!
//! Malformed lines never fail; a missing type simply maps to `String`
//! later on.

use super::lexer::{AttrToken, Lexer, Token};
use crate::model::Attribute;

/// Parse an attribute block into attributes, in input order.
pub fn parse_attributes(block: &str) -> Vec<Attribute> {
    let mut attributes = Vec::new();
    let mut line: Vec<Token<'_>> = Vec::new();

    for token in Lexer::new(block) {
        if token.kind.is_line_break() {
            attributes.extend(parse_line(&line));
            line.clear();
        } else {
            line.push(token);
        }
    }
    attributes.extend(parse_line(&line));

    attributes
}

/// Parse one line's tokens. Returns `None` for blank lines.
fn parse_line(tokens: &[Token<'_>]) -> Option<Attribute> {
    let mut rest = trim_whitespace(tokens);

    if let Some((first, tail)) = rest.split_first() {
        if first.kind == AttrToken::Dash {
            rest = trim_whitespace(tail);
        }
    }
    if rest.is_empty() {
        return None;
    }

    let (name, raw_type) = match rest.iter().position(|t| t.kind == AttrToken::Colon) {
        Some(colon) => (join(&rest[..colon]), join(&rest[colon + 1..])),
        None => (join(rest), String::new()),
    };

    if name.is_empty() {
        tracing::trace!("Skipping attribute line without a name: {:?}", join(rest));
        return None;
    }
    Some(Attribute::new(name, raw_type))
}

fn trim_whitespace<'t, 'a>(tokens: &'t [Token<'a>]) -> &'t [Token<'a>] {
    let start = tokens
        .iter()
        .position(|t| t.kind != AttrToken::Whitespace)
        .unwrap_or(tokens.len());
    let end = tokens
        .iter()
        .rposition(|t| t.kind != AttrToken::Whitespace)
        .map_or(start, |i| i + 1);
    &tokens[start..end]
}

fn join(tokens: &[Token<'_>]) -> String {
    let text: String = tokens.iter().map(|t| t.text).collect();
    text.trim().to_string()
}
