use logos::Logos;
use tracing::trace;

use crate::{
    compiler::token::{Token, TokenKind},
    error::LexError,
    library::{Library, Number},
};

/// Result type used by the scanner.
pub type LexResult<T> = Result<T, LexError>;

/// Errors raised inside logos callbacks, before the offending span is known.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) enum RawLexError {
    /// No pattern matched.
    #[default]
    UnexpectedCharacter,
    /// A number ended in a radix point.
    MalformedNumber,
}

/// Raw lexical token, before letter runs are classified against a library.
///
/// Punctuation maps one-to-one onto [`TokenKind`]. Letter runs are kept whole
/// as `Word`; [`scan`] decides whether a word is a function, a
/// constant, or a run of single-letter identifiers.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(error = RawLexError)]
#[logos(skip r"[ \t\r\n]+")]
pub(crate) enum RawToken {
    /// `(`
    #[token("(")]
    ParenOpen,
    /// `)`
    #[token(")")]
    ParenClose,
    /// `{`
    #[token("{")]
    BraceOpen,
    /// `}`
    #[token("}")]
    BraceClose,
    /// `|`
    #[token("|")]
    Pipe,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `!`
    #[token("!")]
    Bang,
    /// `%`
    #[token("%")]
    Percent,
    /// `=`
    #[token("=")]
    Equal,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `,`
    #[token(",")]
    Comma,
    /// `_`
    #[token("_")]
    Underscore,
    /// Numeric literal tokens, such as `42` or `3.14`. No exponent notation.
    #[regex(r"[0-9]+(\.[0-9]*)?", check_fraction)]
    Number,
    /// A run of ASCII letters.
    #[regex(r"[a-zA-Z]+")]
    Word,
}

impl RawToken {
    /// The token kind of a punctuation or number token; `None` for words.
    const fn kind(self) -> Option<TokenKind> {
        let kind = match self {
            Self::ParenOpen => TokenKind::ParenOpen,
            Self::ParenClose => TokenKind::ParenClose,
            Self::BraceOpen => TokenKind::BraceOpen,
            Self::BraceClose => TokenKind::BraceClose,
            Self::Pipe => TokenKind::Pipe,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Star => TokenKind::Star,
            Self::Slash => TokenKind::Slash,
            Self::Caret => TokenKind::Caret,
            Self::Bang => TokenKind::Bang,
            Self::Percent => TokenKind::Percent,
            Self::Equal => TokenKind::Equal,
            Self::Greater => TokenKind::Greater,
            Self::GreaterEqual => TokenKind::GreaterEqual,
            Self::Less => TokenKind::Less,
            Self::LessEqual => TokenKind::LessEqual,
            Self::Comma => TokenKind::Comma,
            Self::Underscore => TokenKind::Underscore,
            Self::Number => TokenKind::Number,
            Self::Word => return None,
        };
        Some(kind)
    }
}

/// Rejects a number literal whose radix point is not followed by a digit.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Ok(())` for `12` or `1.5`.
/// - `Err(RawLexError::MalformedNumber)` for `1.`.
fn check_fraction(lex: &mut logos::Lexer<RawToken>) -> Result<(), RawLexError> {
    if lex.slice().ends_with('.') {
        Err(RawLexError::MalformedNumber)
    } else {
        Ok(())
    }
}

/// Scans a declaration source into tokens.
///
/// The scanner is a single forward pass:
/// - punctuation and operators map directly to their kinds (`>=` and `<=`
///   are single tokens),
/// - whitespace is skipped,
/// - digits form a number literal with an optional fractional part,
/// - a run of letters is a `function` token if it names a library function
///   (variant marker stripped), a `constant` token if it names a library
///   constant, and otherwise one `identifier` token per letter, so `xy`
///   scans as `x` `y` and is later multiplied implicitly.
///
/// # Errors
/// - [`LexError::UnexpectedCharacter`] for any character that starts no
///   token.
/// - [`LexError::MalformedNumber`] for a radix point without a following
///   digit.
///
/// # Example
/// ```
/// use mathfn::{
///     Library,
///     compiler::{lexer::scan, token::TokenKind},
/// };
///
/// let tokens = scan("f(x)=2sin(xy)", &Library::standard()).unwrap();
/// let kinds = tokens.iter().map(|t| t.kind()).collect::<Vec<_>>();
///
/// assert_eq!(kinds,
///            vec![TokenKind::Identifier,
///                 TokenKind::ParenOpen,
///                 TokenKind::Identifier,
///                 TokenKind::ParenClose,
///                 TokenKind::Equal,
///                 TokenKind::Number,
///                 TokenKind::Function,
///                 TokenKind::ParenOpen,
///                 TokenKind::Identifier,
///                 TokenKind::Identifier,
///                 TokenKind::ParenClose]);
/// ```
///
/// The raw logos pass stays internal:
/// ```compile_fail
/// use mathfn::compiler::lexer::RawToken;
/// ```
pub fn scan<T: Number>(source: &str, library: &Library<T>) -> LexResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(raw) = lexer.next() {
        let offset = lexer.span().start;
        let slice = lexer.slice();

        let raw = raw.map_err(|error| match error {
                         RawLexError::UnexpectedCharacter => {
                             LexError::UnexpectedCharacter { character: slice.chars()
                                                                             .next()
                                                                             .unwrap_or_default(),
                                                             offset }
                         },
                         RawLexError::MalformedNumber => {
                             LexError::MalformedNumber { lexeme: slice.to_string(),
                                                         offset }
                         },
                     })?;

        match raw.kind() {
            Some(kind) => tokens.push(Token::new(kind, slice, offset)),
            None => classify_word(slice, offset, library, &mut tokens),
        }
    }

    trace!(count = tokens.len(), "scanned tokens");
    Ok(tokens)
}

/// Turns a run of letters into tokens.
///
/// Reserved function names win over constant names; anything else becomes one
/// identifier per letter.
fn classify_word<T: Number>(word: &str,
                            offset: usize,
                            library: &Library<T>,
                            tokens: &mut Vec<Token>) {
    if library.is_function_name(word) {
        tokens.push(Token::new(TokenKind::Function, word, offset));
    } else if library.is_constant_name(word) {
        tokens.push(Token::new(TokenKind::Constant, word, offset));
    } else {
        // Letters are ASCII, so byte offsets advance by one per letter.
        tokens.extend(word.char_indices()
                          .map(|(i, letter)| {
                              Token::new(TokenKind::Identifier, letter.to_string(), offset + i)
                          }));
    }
}
