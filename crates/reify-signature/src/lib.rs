//! Reify Signature Parser
//!
//! Lexer and parser for the compact textual signature grammar:
//! annotation clauses, a return (or field) type, a member name, and an
//! optional parenthesized parameter list. Parsing is pure; type tokens are
//! canonicalized through an injected [`TypeNamespace`](reify_types::TypeNamespace).

#![warn(missing_docs)]

pub mod error;
pub mod lexer;
pub mod parser;

pub use error::{ParseError, ParseErrorKind};
pub use lexer::{LexError, Lexer, Span, Token};
pub use parser::{parse_signature, SignatureParser};
