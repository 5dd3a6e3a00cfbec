//! Logos-based lexer for class attribute blocks
//!
//! Attribute blocks are bullet lists such as
//! `- id : int pk\n- edad : int`, where line breaks may be real newlines
//! or the two-character escape `\n` that the editor stores in exported JSON.

use logos::Logos;

/// Token kinds of an attribute block
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrToken {
    /// A literal backslash followed by `n`
    #[token("\\n")]
    EscapedNewline,

    #[regex(r"\r?\n")]
    Newline,

    #[regex(r"[ \t]+")]
    Whitespace,

    #[token("-")]
    Dash,

    #[token(":")]
    Colon,

    #[token("\\")]
    Backslash,

    #[regex(r"[^ \t\r\n:\-\\]+")]
    Text,
}

impl AttrToken {
    pub fn is_line_break(self) -> bool {
        matches!(self, AttrToken::EscapedNewline | AttrToken::Newline)
    }
}

/// A token with its kind and text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: AttrToken,
    pub text: &'a str,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, AttrToken>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: AttrToken::lexer(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.inner.next()?;
        let text = self.inner.slice();
        // Stray characters (a lone `\r`) read as text.
        let kind = result.unwrap_or(AttrToken::Text);
        Some(Token { kind, text })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}
