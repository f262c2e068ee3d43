use crate::{
    ast::LogicalExpr,
    compiler::{
        codegen::{
            core::{CompileResult, SymbolTable},
            expr::emit_expr,
        },
        function::Condition,
    },
    library::Number,
};

/// Resolves a guard clause into a chained comparison.
///
/// `a < b <= c` becomes `a < b && b <= c`, with `b` resolved and later
/// evaluated once. Returns the condition and its rendered source.
pub(crate) fn emit_clause<T: Number>(symbols: &SymbolTable<'_, T>,
                                     clause: &LogicalExpr)
                                     -> CompileResult<(Condition<T>, String)> {
    let (operands, comparisons) = clause.links();
    let emitted = operands.into_iter()
                          .map(|operand| emit_expr(symbols, operand))
                          .collect::<CompileResult<Vec<_>>>()?;

    let source = emitted.windows(2)
                        .zip(&comparisons)
                        .map(|(pair, op)| format!("{} {op} {}", pair[0].source, pair[1].source))
                        .collect::<Vec<_>>()
                        .join(" && ");

    let condition = Condition { operands: emitted.into_iter()
                                                 .map(|operand| operand.node)
                                                 .collect(),
                                comparisons };
    Ok((condition, source))
}
