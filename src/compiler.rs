/// Lexical tokens shared by every phase.
pub mod token;

/// Scanner.
///
/// Turns a declaration source into tokens, consulting the library to know
/// which letter runs are reserved function and constant names.
pub mod lexer;

/// Recursive-descent parser.
///
/// Builds a [`FnDecl`](crate::ast::FnDecl) from tokens and resolves the
/// absolute-value and implicit-multiplication ambiguities of the grammar.
pub mod parser;

/// Code generator.
///
/// Resolves a declaration against a library into a [`function::CompiledFunction`].
pub mod codegen;

/// The compiled function and its evaluator.
pub mod function;
