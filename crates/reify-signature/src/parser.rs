//! Recursive descent parser for the signature grammar.
//!
//! One declaration describes either a method or a field:
//!
//! ```text
//! signature  := annotation* type IDENT params?     (params absent => field)
//! params     := '(' [ param (',' param)* ] ')'
//! param      := annotation* type IDENT?
//! type       := IDENT ('.' IDENT)* ('[' ']')*
//! annotation := '@' type [ '(' [ args ] ')' ]
//! args       := value | IDENT '=' value (',' IDENT '=' value)*
//! value      := STRING | INT | FLOAT | 'true' | 'false'
//!             | annotation | '{' [ value (',' value)* ] '}' | type
//! ```
//!
//! Every type token resolves through the injected [`TypeNamespace`], so
//! qualified names, primitive keywords, and nested class references are
//! handled uniformly. Parsing is pure: it touches no class configuration.

use crate::error::ParseError;
use crate::lexer::{Lexer, Span, Token};
use reify_types::{
    AnnotationAttachment, AnnotationValue, MemberKind, NativeTypeRef, Signature, TypeNamespace,
    TypeResolver,
};
use rustc_hash::FxHashMap;

type ParamParts = (
    Vec<NativeTypeRef>,
    Vec<Option<String>>,
    Vec<Vec<AnnotationAttachment>>,
);

/// Parse one textual signature declaration into a [`Signature`].
///
/// Convenience wrapper around [`SignatureParser`].
pub fn parse_signature(
    source: &str,
    namespace: &dyn TypeNamespace,
) -> Result<Signature, ParseError> {
    SignatureParser::new(source, namespace)?.parse()
}

/// Parser state for one signature declaration.
pub struct SignatureParser<'a> {
    /// Pre-tokenized input, Eof-terminated
    tokens: Vec<(Token, Span)>,

    /// Current position in token stream
    pos: usize,

    /// Resolver for every type token in the declaration
    resolver: TypeResolver<'a>,
}

impl<'a> SignatureParser<'a> {
    /// Create a parser from signature text, resolving types against `namespace`.
    pub fn new(source: &str, namespace: &'a dyn TypeNamespace) -> Result<Self, ParseError> {
        let tokens = Lexer::new(source).tokenize()?;
        Ok(Self {
            tokens,
            pos: 0,
            resolver: TypeResolver::new(namespace),
        })
    }

    /// Parse the declaration into a [`Signature`].
    pub fn parse(mut self) -> Result<Signature, ParseError> {
        let annotations = self.parse_annotations()?;
        let return_type = self.parse_type()?;
        let name = self.expect_identifier("a member name")?;

        let signature = if self.check(&Token::LeftParen) {
            let (parameter_types, parameter_names, parameter_annotations) = self.parse_params()?;
            Signature {
                kind: MemberKind::Method,
                name,
                return_type,
                parameter_types,
                parameter_names,
                annotations,
                parameter_annotations,
            }
        } else {
            Signature {
                kind: MemberKind::Field,
                name,
                return_type,
                parameter_types: Vec::new(),
                parameter_names: Vec::new(),
                annotations,
                parameter_annotations: Vec::new(),
            }
        };

        self.expect_eof()?;
        Ok(signature)
    }

    // ========================================================================
    // Token Management
    // ========================================================================

    #[inline]
    fn current(&self) -> &Token {
        &self.tokens[self.pos].0
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.tokens[self.pos].1
    }

    fn previous_span(&self) -> Span {
        self.tokens[self.pos.saturating_sub(1)].1
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos + 1).map(|(token, _)| token)
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].0.clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        token
    }

    #[inline]
    fn check(&self, expected: &Token) -> bool {
        std::mem::discriminant(self.current()) == std::mem::discriminant(expected)
    }

    #[inline]
    fn at_eof(&self) -> bool {
        matches!(self.current(), Token::Eof)
    }

    fn expect(&mut self, expected: Token, what: &str) -> Result<Token, ParseError> {
        if self.check(&expected) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(what))
        }
    }

    fn expect_identifier(&mut self, what: &str) -> Result<String, ParseError> {
        if let Token::Identifier(name) = self.current().clone() {
            self.advance();
            Ok(name)
        } else {
            Err(self.unexpected(what))
        }
    }

    fn expect_eof(&mut self) -> Result<(), ParseError> {
        if self.at_eof() {
            Ok(())
        } else {
            Err(self.unexpected("end of signature"))
        }
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        if self.at_eof() {
            ParseError::unexpected_eof(expected, self.current_span())
        } else {
            ParseError::unexpected_token(expected, self.current().clone(), self.current_span())
        }
    }

    // ========================================================================
    // Grammar Productions
    // ========================================================================

    /// Parse a type token: qualified name or primitive keyword, with any
    /// number of `[]` array suffixes, resolved to a canonical handle.
    fn parse_type(&mut self) -> Result<NativeTypeRef, ParseError> {
        let start = self.current_span();
        let mut text = self.expect_identifier("a type name")?;

        while self.check(&Token::Dot) {
            self.advance();
            text.push('.');
            text.push_str(&self.expect_identifier("a name segment after '.'")?);
        }

        while self.check(&Token::LeftBracket) {
            self.advance();
            self.expect(Token::RightBracket, "']' of the array suffix")?;
            text.push_str("[]");
        }

        let span = start.merge(self.previous_span());
        self.resolver
            .resolve_name(&text)
            .map_err(|error| ParseError::resolve(error, span))
    }

    fn parse_annotations(&mut self) -> Result<Vec<AnnotationAttachment>, ParseError> {
        let mut annotations = Vec::new();
        while self.check(&Token::At) {
            annotations.push(self.parse_annotation()?);
        }
        Ok(annotations)
    }

    /// Parse one annotation clause: `@Type` or `@Type(args)`.
    fn parse_annotation(&mut self) -> Result<AnnotationAttachment, ParseError> {
        self.expect(Token::At, "'@'")?;
        let annotation_type = self.parse_type()?;

        let mut parameters = FxHashMap::default();
        if self.check(&Token::LeftParen) {
            self.advance();
            if !self.check(&Token::RightParen) {
                self.parse_annotation_args(&mut parameters)?;
            }
            self.expect(Token::RightParen, "')' closing the annotation clause")?;
        }

        Ok(AnnotationAttachment::new(annotation_type, parameters))
    }

    fn parse_annotation_args(
        &mut self,
        parameters: &mut FxHashMap<String, AnnotationValue>,
    ) -> Result<(), ParseError> {
        // A single positional value binds to the default `value` member.
        let named = matches!(self.current(), Token::Identifier(_))
            && matches!(self.peek(), Some(Token::Equal));
        if !named {
            let value = self.parse_annotation_value()?;
            parameters.insert("value".to_string(), value);
            return Ok(());
        }

        loop {
            let key = self.expect_identifier("an annotation parameter name")?;
            self.expect(Token::Equal, "'='")?;
            let value = self.parse_annotation_value()?;
            parameters.insert(key, value);

            if self.check(&Token::Comma) {
                self.advance();
            } else {
                break;
            }
        }
        Ok(())
    }

    fn parse_annotation_value(&mut self) -> Result<AnnotationValue, ParseError> {
        match self.current().clone() {
            Token::Str(value) => {
                self.advance();
                Ok(AnnotationValue::Str(value))
            }
            Token::Int(value) => {
                self.advance();
                Ok(AnnotationValue::Int(value))
            }
            Token::Float(value) => {
                self.advance();
                Ok(AnnotationValue::Float(value))
            }
            Token::True => {
                self.advance();
                Ok(AnnotationValue::Bool(true))
            }
            Token::False => {
                self.advance();
                Ok(AnnotationValue::Bool(false))
            }
            Token::At => Ok(AnnotationValue::Annotation(Box::new(
                self.parse_annotation()?,
            ))),
            Token::LeftBrace => self.parse_annotation_list(),
            Token::Identifier(_) => Ok(AnnotationValue::Type(self.parse_type()?)),
            Token::Eof => Err(self.unexpected("an annotation value")),
            other => Err(ParseError::annotation_value(
                format!("{}", other),
                self.current_span(),
            )),
        }
    }

    fn parse_annotation_list(&mut self) -> Result<AnnotationValue, ParseError> {
        self.expect(Token::LeftBrace, "'{'")?;
        let mut values = Vec::new();
        if !self.check(&Token::RightBrace) {
            loop {
                values.push(self.parse_annotation_value()?);
                if self.check(&Token::Comma) {
                    self.advance();
                } else {
                    break;
                }
            }
        }
        self.expect(Token::RightBrace, "'}' closing the value list")?;
        Ok(AnnotationValue::List(values))
    }

    /// Parse a parameter list. Empty `()` is a zero-length sequence.
    fn parse_params(&mut self) -> Result<ParamParts, ParseError> {
        self.expect(Token::LeftParen, "'('")?;

        let mut types = Vec::new();
        let mut names = Vec::new();
        let mut annotations = Vec::new();

        if !self.check(&Token::RightParen) {
            loop {
                let parameter_annotations = self.parse_annotations()?;
                let ty = self.parse_type()?;
                let name = if let Token::Identifier(name) = self.current().clone() {
                    self.advance();
                    Some(name)
                } else {
                    None
                };

                types.push(ty);
                names.push(name);
                annotations.push(parameter_annotations);

                if self.check(&Token::Comma) {
                    self.advance();
                } else {
                    break;
                }
            }
        }

        self.expect(Token::RightParen, "')' closing the parameter list")?;
        Ok((types, names, annotations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;
    use reify_types::{MapNamespace, PrimitiveType};

    fn namespace() -> MapNamespace {
        let mut ns = MapNamespace::new();
        ns.register("java.lang.Override");
        ns.register("org.foo.Bar");
        ns
    }

    #[test]
    fn test_empty_parameter_list() {
        let ns = namespace();
        let sig = parse_signature("void foo()", &ns).unwrap();
        assert_eq!(sig.kind, MemberKind::Method);
        assert!(sig.parameter_types.is_empty());
    }

    #[test]
    fn test_named_parameters() {
        let ns = namespace();
        let sig = parse_signature("void foo(int foo, org.foo.Bar bar)", &ns).unwrap();
        assert_eq!(
            sig.parameter_types,
            vec![
                NativeTypeRef::primitive(PrimitiveType::Int),
                NativeTypeRef::class("org.foo.Bar"),
            ]
        );
        assert_eq!(
            sig.parameter_names,
            vec![Some("foo".to_string()), Some("bar".to_string())]
        );
    }

    #[test]
    fn test_trailing_garbage_rejected() {
        let ns = namespace();
        let err = parse_signature("void foo() bar", &ns).unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::UnexpectedToken { .. }));
    }

    #[test]
    fn test_unresolved_type_reported_with_span() {
        let ns = namespace();
        let err = parse_signature("org.missing.Type bar", &ns).unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::Resolve(_)));
        assert_eq!(err.span.start, 0);
    }
}
