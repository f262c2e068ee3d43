use thiserror::Error;

/// Represents all errors that can occur while scanning a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that starts no token.
    #[error("Error at offset {offset}: Unexpected character '{character}'.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the source.
        offset:    usize,
    },
    /// A radix point that is not followed by a digit, such as `3.`.
    #[error("Error at offset {offset}: Expected fractional part after radix point in '{lexeme}'.")]
    MalformedNumber {
        /// The malformed literal text.
        lexeme: String,
        /// Byte offset of the literal in the source.
        offset: usize,
    },
}
