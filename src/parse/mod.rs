//! Turns raw expression text into a tree of atoms and lists.
pub mod error;
pub mod tokenizer;
pub mod tree;

pub use error::ParseError;
pub use tokenizer::{strip_comments, tokenize, Token, TokenKind, Tokenizer};
pub use tree::{parse, parse_strict, Expr, ParsedDocument};
