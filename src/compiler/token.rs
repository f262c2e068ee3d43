/// The kind of a scanned token.
///
/// Every punctuation character of the language maps to exactly one kind.
/// Letter runs become [`TokenKind::Function`], [`TokenKind::Constant`] or a
/// sequence of single-letter [`TokenKind::Identifier`] tokens depending on
/// the library the source is scanned against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `(`
    ParenOpen,
    /// `)`
    ParenClose,
    /// `{`
    BraceOpen,
    /// `}`
    BraceClose,
    /// `|`
    Pipe,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `^`
    Caret,
    /// `!`
    Bang,
    /// `%`
    Percent,
    /// `=`
    Equal,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `,`
    Comma,
    /// `_`
    Underscore,
    /// Numeric literal such as `42` or `3.14`.
    Number,
    /// A reserved library function name.
    Function,
    /// A reserved library constant name.
    Constant,
    /// A single-letter parameter name.
    Identifier,
}

impl TokenKind {
    /// Returns `true` for the comparison kinds allowed inside guard clauses.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(self,
                 Self::Greater
                 | Self::GreaterEqual
                 | Self::Less
                 | Self::LessEqual
                 | Self::Equal)
    }

    /// Returns `true` if a token of this kind can start an operand that is
    /// implicitly multiplied with the operand before it.
    ///
    /// `|` is deliberately absent: whether a pipe opens a new operand depends
    /// on the absolute-value nesting state and is decided by the parser.
    #[must_use]
    pub const fn starts_implicit_operand(self) -> bool {
        matches!(self,
                 Self::Number
                 | Self::Identifier
                 | Self::Constant
                 | Self::ParenOpen
                 | Self::Function)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::ParenOpen => "'('",
            Self::ParenClose => "')'",
            Self::BraceOpen => "'{'",
            Self::BraceClose => "'}'",
            Self::Pipe => "'|'",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::Caret => "'^'",
            Self::Bang => "'!'",
            Self::Percent => "'%'",
            Self::Equal => "'='",
            Self::Greater => "'>'",
            Self::GreaterEqual => "'>='",
            Self::Less => "'<'",
            Self::LessEqual => "'<='",
            Self::Comma => "','",
            Self::Underscore => "'_'",
            Self::Number => "number",
            Self::Function => "function",
            Self::Constant => "constant",
            Self::Identifier => "identifier",
        };
        write!(f, "{name}")
    }
}

/// A lexical token: its kind, the exact source text it was built from, and
/// the byte offset of that text in the source.
///
/// Tokens are created once by the scanner and never modified afterwards.
///
/// # Example
/// ```
/// use mathfn::compiler::token::{Token, TokenKind};
///
/// let token = Token::new(TokenKind::Number, "2.5", 4);
/// assert_eq!(token.kind(), TokenKind::Number);
/// assert_eq!(token.lexeme(), "2.5");
/// assert_eq!(token.offset(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind:   TokenKind,
    lexeme: String,
    offset: usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, offset: usize) -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               offset }
    }

    /// The kind of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The source text of this token.
    #[must_use]
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Byte offset of the token in the scanned source.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns `true` if the token has the given kind.
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}'", self.lexeme)
    }
}
