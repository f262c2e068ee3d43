use thiserror::Error;

/// Represents all errors that can occur while parsing a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found a token that does not fit the grammar at this position.
    #[error("Error at offset {offset}: Unexpected token '{token}', expected {expected}.")]
    UnexpectedToken {
        /// Lexeme of the token encountered.
        token:    String,
        /// What the grammar required instead.
        expected: String,
        /// Byte offset of the token in the source.
        offset:   usize,
    },
    /// Reached the end of input while the grammar still required something.
    #[error("Unexpected end of input, expected {expected}.")]
    UnexpectedEndOfInput {
        /// What the grammar required.
        expected: String,
    },
    /// A complete declaration was followed by more tokens.
    #[error("Error at offset {offset}: Extra tokens after declaration, starting at '{token}'.")]
    UnexpectedTrailingTokens {
        /// Lexeme of the first extra token.
        token:  String,
        /// Byte offset of the token in the source.
        offset: usize,
    },
    /// An operand directly follows a nested absolute value, so the meaning of
    /// the surrounding pipes cannot be decided.
    #[error("Error at offset {offset}: Nested absolute value requires explicit '*' before '{token}'.")]
    AmbiguousAbsoluteValue {
        /// Lexeme of the token that made the pipes ambiguous.
        token:  String,
        /// Byte offset of the token in the source.
        offset: usize,
    },
    /// A second guard block was found.
    #[error("Error at offset {offset}: A declaration accepts at most one guard block.")]
    DuplicateGuard {
        /// Byte offset of the second `{`.
        offset: usize,
    },
}
