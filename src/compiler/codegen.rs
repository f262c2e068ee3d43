use tracing::debug;

use crate::{
    ast::FnDecl,
    compiler::{
        codegen::{
            clause::emit_clause,
            core::{CompileResult, SymbolTable},
            expr::emit_expr,
        },
        function::CompiledFunction,
    },
    library::{Library, Number},
};

/// Symbol resolution against the declared parameters and the bound library.
pub mod core;

/// Expression emission: literals, calls and operators.
pub(crate) mod expr;

/// Guard clause emission.
pub(crate) mod clause;

/// Compiles a parsed declaration against a library.
///
/// Every symbol is resolved here, once; the returned function never looks
/// anything up again. The body and every guard clause are checked even if a
/// clause could never hold.
///
/// # Errors
/// The first [`CompileError`](crate::error::CompileError) met while
/// resolving the body, then the clauses.
///
/// # Example
/// ```
/// use mathfn::{Library, compiler::{codegen::compile, lexer::scan, parser::parse}};
///
/// let library = Library::standard();
/// let tokens = scan("f(x)={0<x<=pi}sin(x)", &library).unwrap();
/// let f = compile(parse(&tokens).unwrap(), &library).unwrap();
///
/// assert_eq!(f.source(),
///            "|x| if 0 < x && x <= constants.pi { Some(functions.sin(x)) } else { None }");
/// assert_eq!(f.call(&[0.0]), None);
/// ```
pub fn compile<T: Number>(decl: FnDecl, library: &Library<T>) -> CompileResult<CompiledFunction<T>> {
    let params = decl.param_names();
    let symbols = SymbolTable::new(&params, library);

    let body = emit_expr(&symbols, &decl.body)?;
    let (conditions, guards): (Vec<_>, Vec<_>) =
        decl.clauses
            .iter()
            .map(|clause| emit_clause(&symbols, clause))
            .collect::<CompileResult<Vec<_>>>()?
            .into_iter()
            .unzip();

    let source = render(&params, &body.source, &guards);
    debug!(name = decl.ident.lexeme(), %source, "compiled declaration");

    Ok(CompiledFunction::new(decl, source, body.node, conditions))
}

/// Renders the generated function as closure-like source text.
fn render(params: &[String], body: &str, guards: &[String]) -> String {
    let params = params.join(", ");
    if guards.is_empty() {
        format!("|{params}| Some({body})")
    } else {
        format!("|{params}| if {} {{ Some({body}) }} else {{ None }}",
                guards.join(" && "))
    }
}
