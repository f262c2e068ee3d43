//! # mathfn
//!
//! mathfn compiles single-line mathematical function declarations such as
//! `f(x)={x>=0}x^2+sin(x)` into callable numeric functions.
//!
//! A declaration goes through three phases: the scanner turns it into
//! tokens, the parser builds a [`FnDecl`](ast::FnDecl), and the code
//! generator resolves every symbol against a [`Library`] into a
//! [`CompiledFunction`]. The grammar supports implicit multiplication
//! (`2xy`), nested absolute values (`|-|x||`), factorials, guard clauses with
//! chained comparisons (`{0<=x<10}`) and variant function calls
//! (`log_10(x)`).

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

use tracing::debug;

pub use crate::{compiler::function::CompiledFunction, error::Error, library::Library};
use crate::{
    compiler::{codegen::compile, lexer::scan, parser::parse},
    library::Number,
};

/// Defines the structure of parsed declarations.
///
/// This module declares the `Expr` enum, guard clauses and the `FnDecl` root
/// that the parser builds and the code generator consumes. A compiled
/// function keeps its declaration for introspection.
pub mod ast;
/// Scanner, parser and code generator.
///
/// Each phase is a pure function of its input and the library: nothing is
/// cached between compilations.
pub mod compiler;
/// Provides unified error types for scanning, parsing and compiling.
///
/// One enum per phase, each variant carrying the offending lexeme or
/// character and its byte offset where one exists, plus a top-level
/// [`Error`] that converts from all three.
pub mod error;
/// The capability set declarations are compiled against.
///
/// # Responsibilities
/// - Holds named functions, named constants and operator overrides.
/// - Defines the numeric domain trait.
/// - Provides the standard `f64` library.
pub mod library;
/// General numeric helpers used by the standard library.
pub mod util;

/// Compiles a declaration against the standard library.
///
/// # Errors
/// Returns the first lexical, syntax or compile error met.
///
/// # Examples
/// ```
/// use mathfn::compile_declaration;
///
/// let f = compile_declaration("f(x)={x>=0}x^2+sin(x)").unwrap();
/// assert_eq!(f.call(&[0.0]), Some(0.0));
/// assert_eq!(f.call(&[-1.0]), None);
///
/// // `zz` is not a library function.
/// assert!(compile_declaration("f(x)=zz(x)").is_err());
/// ```
pub fn compile_declaration(source: &str) -> Result<CompiledFunction<f64>, Error> {
    compile_declaration_with(source, &Library::standard())
}

/// Compiles a declaration against a given library.
///
/// The library is only read; the returned function keeps what it needs
/// from it.
///
/// # Errors
/// Returns the first lexical, syntax or compile error met.
///
/// # Examples
/// ```
/// use mathfn::{Library, compile_declaration_with, library::BinaryOperation};
///
/// // Saturating addition in a custom domain.
/// let library = Library::<f64>::new().with_binary_operation(BinaryOperation::Add,
///                                                           |a, b| (a + b).min(10.0));
///
/// let f = compile_declaration_with("f(x,y)=x+y", &library).unwrap();
/// assert_eq!(f.call(&[7.0, 8.0]), Some(10.0));
/// assert_eq!(f.source(), "|x, y| Some(operations.add(x, y))");
/// ```
pub fn compile_declaration_with<T: Number>(source: &str,
                                           library: &Library<T>)
                                           -> Result<CompiledFunction<T>, Error> {
    let tokens = scan(source, library)?;
    debug!(count = tokens.len(), "scanned declaration");
    let decl = parse(&tokens)?;
    Ok(compile(decl, library)?)
}
