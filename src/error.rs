/// Lexing errors.
///
/// Raised by the scanner for characters that belong to no token and for
/// malformed numeric literals.
pub mod lex_error;
/// Parsing errors.
///
/// Raised when the token stream does not match the declaration grammar,
/// including ambiguous nested absolute values.
pub mod parse_error;
/// Compilation errors.
///
/// Raised by the code generator when the AST refers to symbols the bound
/// library does not define, or uses a construct the library gives no meaning.
pub mod compile_error;

pub use compile_error::CompileError;
pub use lex_error::LexError;
pub use parse_error::ParseError;
use thiserror::Error;

/// Any error produced while turning a declaration source into a compiled
/// function.
///
/// Every phase fails fast, so a failed compilation yields exactly one of
/// these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The scanner rejected the source.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The parser rejected the token stream.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The code generator rejected the declaration.
    #[error(transparent)]
    Compile(#[from] CompileError),
}
