use crate::{
    ast::Expr,
    compiler::{
        parser::binary::parse_term,
        token::{Token, TokenKind},
    },
    error::ParseError,
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Cursor over a scanned token slice.
///
/// Besides the read position, the cursor owns the absolute-value nesting
/// stack: one flag per syntactic nesting level, `true` while an `|...|`
/// grouping is open at that level. The stack lives and dies with one parse
/// invocation.
#[derive(Debug)]
pub struct TokenCursor<'a> {
    tokens:     &'a [Token],
    current:    usize,
    abs_levels: Vec<bool>,
    /// Position after the most recent closing pipe, and the depth it closed at.
    last_close: Option<(usize, usize)>,
}

impl<'a> TokenCursor<'a> {
    /// Creates a cursor at the first token, with a single closed nesting
    /// level.
    #[must_use]
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens,
               current: 0,
               abs_levels: vec![false],
               last_close: None }
    }

    /// The next token, without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.current)
    }

    /// The kind of the next token.
    #[must_use]
    pub fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(Token::kind)
    }

    /// The most recently consumed token.
    #[must_use]
    pub fn previous(&self) -> Option<&'a Token> {
        self.current
            .checked_sub(1)
            .and_then(|index| self.tokens.get(index))
    }

    /// Consumes and returns the next token.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.current)?;
        self.current += 1;
        Some(token)
    }

    /// Returns `true` if the next token has the given kind.
    #[must_use]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == Some(kind)
    }

    /// Consumes the next token if it has the given kind.
    pub fn advance_if(&mut self, kind: TokenKind) -> Option<&'a Token> {
        if self.check(kind) { self.advance() } else { None }
    }

    /// Consumes a token of the given kind or fails.
    ///
    /// # Errors
    /// - `UnexpectedToken` if the next token has another kind.
    /// - `UnexpectedEndOfInput` if there is no next token.
    pub fn expect(&mut self, kind: TokenKind) -> ParseResult<&'a Token> {
        match self.peek() {
            Some(token) if token.is(kind) => {
                self.current += 1;
                Ok(token)
            },
            Some(token) => Err(unexpected(token, &kind.to_string())),
            None => Err(ParseError::UnexpectedEndOfInput { expected: kind.to_string() }),
        }
    }

    /// Whether an absolute-value grouping is open at the current level.
    #[must_use]
    pub fn abs_open(&self) -> bool {
        self.abs_levels.last().copied().unwrap_or(false)
    }

    /// Marks the current level's absolute-value grouping open or closed.
    pub fn set_abs_open(&mut self, open: bool) {
        if let Some(level) = self.abs_levels.last_mut() {
            *level = open;
        }
    }

    /// Consumes the pipe closing an absolute-value grouping at the current
    /// level.
    ///
    /// # Errors
    /// Same as [`TokenCursor::expect`].
    pub fn close_abs(&mut self) -> ParseResult<&'a Token> {
        let pipe = self.expect(TokenKind::Pipe)?;
        self.last_close = Some((self.current, self.abs_levels.len()));
        Ok(pipe)
    }

    /// Whether the previous token is a pipe that closed a grouping at the
    /// current level.
    #[must_use]
    pub fn just_closed_abs(&self) -> bool {
        self.last_close == Some((self.current, self.abs_levels.len()))
    }

    /// Runs `parse` one nesting level deeper, where no absolute-value
    /// grouping is open yet.
    pub fn nested<T>(&mut self,
                     parse: impl FnOnce(&mut Self) -> ParseResult<T>)
                     -> ParseResult<T> {
        self.abs_levels.push(false);
        let result = parse(self);
        self.abs_levels.pop();
        result
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the lowest
/// precedence level, `term`, and recursively descends through the precedence
/// hierarchy.
///
/// Grammar: `expression := term`
pub fn parse_expression(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    parse_term(cursor)
}

/// Builds the error for a token the grammar does not accept here.
pub(crate) fn unexpected(token: &Token, expected: &str) -> ParseError {
    ParseError::UnexpectedToken { token:    token.lexeme().to_string(),
                                  expected: expected.to_string(),
                                  offset:   token.offset(), }
}

/// Builds the error for input that ended while `expected` was still
/// required.
pub(crate) fn end_of_input(expected: &str) -> ParseError {
    ParseError::UnexpectedEndOfInput { expected: expected.to_string() }
}
