//! Text parsing for class bodies.
//!
//! ```text
//! body text ("- id : int\n- edad : int")
//!     ↓
//! Lexer (logos) → tokens
//!     ↓
//! parse_attributes → Vec<Attribute>
//! ```

mod attributes;
mod lexer;

pub use attributes::parse_attributes;
pub use lexer::{AttrToken, Lexer, Token, tokenize};
