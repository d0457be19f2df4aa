//! Parse error types for the signature grammar

use crate::lexer::{LexError, Span, Token};
use reify_types::ResolveError;
use std::fmt;

/// A signature syntax error with the offending byte offset.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    /// The kind of error that occurred
    pub kind: ParseErrorKind,

    /// Source location of the error
    pub span: Span,

    /// Human-readable error message
    pub message: String,
}

/// The kind of signature parse error.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// Unexpected token found
    UnexpectedToken {
        /// Description of what was expected
        expected: String,
        /// Token actually found
        found: Token,
    },

    /// Signature ended before the grammar was satisfied, e.g. an
    /// unterminated parameter list or annotation clause
    UnexpectedEof {
        /// Description of what was expected
        expected: String,
    },

    /// Character not part of the grammar
    UnexpectedCharacter {
        /// The offending character
        character: char,
    },

    /// Annotation parameter value has an unsupported shape
    AnnotationValue {
        /// Why the value was rejected
        reason: String,
    },

    /// A type token did not resolve to a host type
    Resolve(ResolveError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature error at offset {}: {}", self.span.start, self.message)
    }
}

impl std::error::Error for ParseError {}

impl ParseError {
    /// Create an "unexpected token" error.
    pub fn unexpected_token(expected: impl Into<String>, found: Token, span: Span) -> Self {
        let expected = expected.into();
        let message = format!("Expected {}, found {}", expected, found);
        Self {
            kind: ParseErrorKind::UnexpectedToken { expected, found },
            span,
            message,
        }
    }

    /// Create an "unexpected end of signature" error.
    pub fn unexpected_eof(expected: impl Into<String>, span: Span) -> Self {
        let expected = expected.into();
        let message = format!("Unexpected end of signature, expected {}", expected);
        Self {
            kind: ParseErrorKind::UnexpectedEof { expected },
            span,
            message,
        }
    }

    /// Create an "unsupported annotation value" error.
    pub fn annotation_value(reason: impl Into<String>, span: Span) -> Self {
        let reason = reason.into();
        let message = format!("Unsupported annotation value: {}", reason);
        Self {
            kind: ParseErrorKind::AnnotationValue { reason },
            span,
            message,
        }
    }

    /// Wrap a type resolution failure at the given location.
    pub fn resolve(error: ResolveError, span: Span) -> Self {
        let message = error.to_string();
        Self {
            kind: ParseErrorKind::Resolve(error),
            span,
            message,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(error: LexError) -> Self {
        match error {
            LexError::UnexpectedCharacter { character, span } => Self {
                kind: ParseErrorKind::UnexpectedCharacter { character },
                span,
                message: format!("Unexpected character '{}'", character),
            },
            LexError::UnterminatedString { span } => Self {
                kind: ParseErrorKind::UnexpectedEof {
                    expected: "closing '\"'".to_string(),
                },
                span,
                message: "Unterminated string literal".to_string(),
            },
        }
    }
}
