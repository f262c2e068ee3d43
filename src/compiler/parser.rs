use tracing::debug;

use crate::{
    ast::FnDecl,
    compiler::{
        parser::core::{ParseResult, TokenCursor},
        token::Token,
    },
};

/// Core parsing logic: the token cursor, the absolute-value nesting stack
/// and the expression entry point.
pub mod core;

/// The declaration root: name, parameters, guard block and body.
pub mod declaration;

/// Binary operator parsing.
///
/// Implements the additive, multiplicative (explicit and implicit) and
/// exponent precedence levels.
pub mod binary;

/// Unary operator and primary expression parsing.
///
/// Covers negation, factorial, literals, groupings, absolute values and
/// library function calls.
pub mod unary;

/// Shared parsing helpers.
pub mod utils;

/// Parses a scanned token sequence into a function declaration.
///
/// # Errors
/// Returns the first [`ParseError`](crate::error::ParseError) met; no partial
/// declaration is produced.
///
/// # Example
/// ```
/// use mathfn::{Library, compiler::{lexer::scan, parser::parse}};
///
/// let tokens = scan("f(x,y)=xy{x>0}", &Library::standard()).unwrap();
/// let decl = parse(&tokens).unwrap();
///
/// assert_eq!(decl.param_names(), vec!["x", "y"]);
/// assert_eq!(decl.clauses.len(), 1);
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<FnDecl> {
    let mut cursor = TokenCursor::new(tokens);
    let decl = declaration::parse_declaration(&mut cursor)?;
    debug!(name = decl.ident.lexeme(),
           params = ?decl.param_names(),
           clauses = decl.clauses.len(),
           "parsed declaration");
    Ok(decl)
}
