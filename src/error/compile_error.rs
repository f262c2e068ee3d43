use thiserror::Error;

/// Represents all errors that can occur while generating a compiled function
/// from a parsed declaration.
///
/// All of these are raised once, at compile time; a compiled function never
/// fails because of a missing symbol.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// An identifier that is not a declared parameter.
    #[error("Undefined identifier '{name}'.")]
    UndefinedIdentifier {
        /// The identifier.
        name: String,
    },
    /// A constant the bound library does not define.
    #[error("Undefined constant '{name}'.")]
    UndefinedConstant {
        /// The constant name.
        name: String,
    },
    /// A function the bound library does not define.
    #[error("Undefined function '{name}'.")]
    UndefinedFunction {
        /// The function name.
        name: String,
    },
    /// A call with the wrong number of arguments.
    #[error("Function '{name}' expects {expected} argument(s), but found {found}.")]
    ArgumentCountMismatch {
        /// The function name.
        name:     String,
        /// The arity the library declares.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
    },
    /// A subscript variant supplied to a function that declares none.
    #[error("Function '{name}' does not accept a variant subscript.")]
    UnexpectedVariant {
        /// The function name.
        name: String,
    },
    /// A function that declares variants called without a subscript.
    #[error("Function '{name}' requires a variant subscript, e.g. '{name}_10(x)'.")]
    MissingVariant {
        /// The function name.
        name: String,
    },
    /// An operator the library gives no meaning and that has no native form.
    #[error("The {operator} operator behavior is undefined.")]
    UndefinedOperator {
        /// Name of the operator, e.g. `factorial`.
        operator: String,
    },
    /// A numeric literal the numeric domain cannot represent.
    #[error("Invalid numeric literal '{lexeme}'.")]
    InvalidLiteral {
        /// The literal text.
        lexeme: String,
    },
}
