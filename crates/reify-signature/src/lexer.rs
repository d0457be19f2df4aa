//! Lexer for the signature grammar.
//!
//! Tokenizes one textual signature declaration using logos, producing a
//! token stream with byte-offset spans for error reporting.

use logos::Logos;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Byte-offset range of a token within the signature text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Start offset, inclusive
    pub start: usize,
    /// End offset, exclusive
    pub end: usize,
}

impl Span {
    /// Create a span from start and end offsets
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Span covering both `self` and `other`
    pub fn merge(&self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Logos-based token enum for lexing.
///
/// Used internally for efficient tokenization and converted to the public
/// [`Token`] enum afterwards.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
enum LogosToken {
    #[token("@")]
    At,

    #[token("(")]
    LeftParen,

    #[token(")")]
    RightParen,

    #[token("{")]
    LeftBrace,

    #[token("}")]
    RightBrace,

    #[token("[")]
    LeftBracket,

    #[token("]")]
    RightBracket,

    #[token(",")]
    Comma,

    #[token(".")]
    Dot,

    #[token("=")]
    Equal,

    #[token("true")]
    True,

    #[token("false")]
    False,

    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*", |lex| lex.slice().to_string())]
    Identifier(String),

    #[regex(r"-?[0-9]+\.[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    Float(f64),

    #[regex(r"-?[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Int(i64),

    #[regex(r#""([^"\\]|\\.)*""#, lex_string)]
    Str(String),
}

/// Tokens of the signature grammar
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// `@` starting an annotation clause
    At,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{` starting an annotation value list
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[` of an array suffix
    LeftBracket,
    /// `]` of an array suffix
    RightBracket,
    /// `,`
    Comma,
    /// `.` separating qualified name segments
    Dot,
    /// `=` between an annotation parameter name and its value
    Equal,
    /// `true` literal
    True,
    /// `false` literal
    False,
    /// Identifier: name segment, primitive keyword, or parameter name
    Identifier(String),
    /// Floating-point literal
    Float(f64),
    /// Integer literal
    Int(i64),
    /// Double-quoted string literal
    Str(String),
    /// End of the signature text
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::At => write!(f, "'@'"),
            Token::LeftParen => write!(f, "'('"),
            Token::RightParen => write!(f, "')'"),
            Token::LeftBrace => write!(f, "'{{'"),
            Token::RightBrace => write!(f, "'}}'"),
            Token::LeftBracket => write!(f, "'['"),
            Token::RightBracket => write!(f, "']'"),
            Token::Comma => write!(f, "','"),
            Token::Dot => write!(f, "'.'"),
            Token::Equal => write!(f, "'='"),
            Token::True => write!(f, "'true'"),
            Token::False => write!(f, "'false'"),
            Token::Identifier(name) => write!(f, "identifier '{}'", name),
            Token::Float(x) => write!(f, "float {}", x),
            Token::Int(i) => write!(f, "integer {}", i),
            Token::Str(s) => write!(f, "string \"{}\"", s),
            Token::Eof => write!(f, "end of signature"),
        }
    }
}

// Helper parsing functions
fn lex_string(lex: &mut logos::Lexer<LogosToken>) -> Option<String> {
    let slice = lex.slice();
    Some(unescape(&slice[1..slice.len() - 1]))
}

fn unescape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => result.push('\n'),
                Some('r') => result.push('\r'),
                Some('t') => result.push('\t'),
                Some('\\') => result.push('\\'),
                Some('"') => result.push('"'),
                Some(other) => result.push(other),
                None => break,
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Lexer error types
#[derive(Debug, Clone, PartialEq)]
pub enum LexError {
    /// Character not part of the grammar
    UnexpectedCharacter {
        /// The offending character
        character: char,
        /// Where it occurred
        span: Span,
    },
    /// String literal without a closing quote
    UnterminatedString {
        /// Where the literal starts
        span: Span,
    },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnexpectedCharacter { character, span } => {
                write!(f, "Unexpected character '{}' at offset {}", character, span.start)
            }
            LexError::UnterminatedString { span } => {
                write!(f, "Unterminated string literal at offset {}", span.start)
            }
        }
    }
}

impl std::error::Error for LexError {}

/// Main lexer structure
pub struct Lexer<'a> {
    source: &'a str,
}

impl<'a> Lexer<'a> {
    /// Create a lexer over one signature declaration
    pub fn new(source: &'a str) -> Self {
        Self { source }
    }

    /// Tokenize the whole input, appending a trailing [`Token::Eof`]
    pub fn tokenize(self) -> Result<Vec<(Token, Span)>, LexError> {
        let mut tokens = Vec::new();
        let mut logos_lexer = LogosToken::lexer(self.source);

        while let Some(result) = logos_lexer.next() {
            let range = logos_lexer.span();
            let span = Span::new(range.start, range.end);

            match result {
                Ok(token) => tokens.push((convert_token(token), span)),
                Err(_) => {
                    let character = self.source[range.start..].chars().next().unwrap_or('\0');
                    if character == '"' {
                        return Err(LexError::UnterminatedString { span });
                    }
                    return Err(LexError::UnexpectedCharacter { character, span });
                }
            }
        }

        let end = self.source.len();
        tokens.push((Token::Eof, Span::new(end, end)));
        Ok(tokens)
    }
}

fn convert_token(token: LogosToken) -> Token {
    match token {
        LogosToken::At => Token::At,
        LogosToken::LeftParen => Token::LeftParen,
        LogosToken::RightParen => Token::RightParen,
        LogosToken::LeftBrace => Token::LeftBrace,
        LogosToken::RightBrace => Token::RightBrace,
        LogosToken::LeftBracket => Token::LeftBracket,
        LogosToken::RightBracket => Token::RightBracket,
        LogosToken::Comma => Token::Comma,
        LogosToken::Dot => Token::Dot,
        LogosToken::Equal => Token::Equal,
        LogosToken::True => Token::True,
        LogosToken::False => Token::False,
        LogosToken::Identifier(name) => Token::Identifier(name),
        LogosToken::Float(x) => Token::Float(x),
        LogosToken::Int(i) => Token::Int(i),
        LogosToken::Str(s) => Token::Str(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> Vec<Token> {
        Lexer::new(source)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|(token, _)| token)
            .collect()
    }

    #[test]
    fn test_method_tokens() {
        assert_eq!(
            lex("void foo(int)"),
            vec![
                Token::Identifier("void".to_string()),
                Token::Identifier("foo".to_string()),
                Token::LeftParen,
                Token::Identifier("int".to_string()),
                Token::RightParen,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_qualified_name_tokens() {
        assert_eq!(
            lex("org.foo.Bar bar"),
            vec![
                Token::Identifier("org".to_string()),
                Token::Dot,
                Token::Identifier("foo".to_string()),
                Token::Dot,
                Token::Identifier("Bar".to_string()),
                Token::Identifier("bar".to_string()),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_annotation_tokens() {
        assert_eq!(
            lex("@Anno(x = 2)"),
            vec![
                Token::At,
                Token::Identifier("Anno".to_string()),
                Token::LeftParen,
                Token::Identifier("x".to_string()),
                Token::Equal,
                Token::Int(2),
                Token::RightParen,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_literals() {
        assert_eq!(
            lex(r#""a\"b" 1.5 -3 true false"#),
            vec![
                Token::Str("a\"b".to_string()),
                Token::Float(1.5),
                Token::Int(-3),
                Token::True,
                Token::False,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_unexpected_character() {
        let err = Lexer::new("void foo(#)").tokenize().unwrap_err();
        assert_eq!(
            err,
            LexError::UnexpectedCharacter {
                character: '#',
                span: Span::new(9, 10)
            }
        );
    }

    #[test]
    fn test_unterminated_string() {
        let err = Lexer::new(r#"@Anno(x = "oops)"#).tokenize().unwrap_err();
        assert!(matches!(err, LexError::UnterminatedString { .. }));
    }
}
