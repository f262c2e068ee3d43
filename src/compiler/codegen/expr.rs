use std::sync::Arc;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    compiler::{
        codegen::core::{CompileResult, FunctionEntry, SymbolTable},
        function::Node,
        token::{Token, TokenKind},
    },
    error::CompileError,
    library::{
        Number,
        core::{BinaryFn, BinaryOperation, UnaryFn, UnaryOperation},
    },
};

/// A resolved expression together with the source text rendered for it.
pub(crate) struct Emitted<T> {
    pub(crate) node:   Node<T>,
    pub(crate) source: String,
}

/// Resolves an expression bottom-up.
///
/// # Errors
/// Any [`CompileError`] raised while resolving a literal, a function call or
/// an operator.
pub(crate) fn emit_expr<T: Number>(symbols: &SymbolTable<'_, T>,
                                   expr: &Expr)
                                   -> CompileResult<Emitted<T>> {
    match expr {
        Expr::Literal(token) => emit_literal(symbols, token),
        Expr::Grouping(inner) => {
            let inner = emit_expr(symbols, inner)?;
            Ok(Emitted { node:   inner.node,
                         source: format!("({})", inner.source), })
        },
        Expr::AbsGrouping(inner) => {
            let inner = emit_expr(symbols, inner)?;
            Ok(emit_abs(symbols, inner))
        },
        Expr::FnCall { ident, variant, args } => {
            let entry = symbols.function(ident.lexeme(), variant.is_some(), args.len())?;
            let mut emitted = args.iter()
                                  .map(|arg| emit_expr(symbols, arg))
                                  .collect::<CompileResult<Vec<_>>>()?;
            if let Some(variant) = variant {
                emitted.push(emit_expr(symbols, variant)?);
            }
            Ok(call(entry, emitted))
        },
        Expr::Unary { op, expr } => {
            let operand = emit_expr(symbols, expr)?;
            match op {
                UnaryOperator::Negate => Ok(emit_negate(symbols, operand)),
                UnaryOperator::Factorial => emit_factorial(symbols, operand),
            }
        },
        Expr::Binary { left, op, right } => {
            let left = emit_expr(symbols, left)?;
            let right = emit_expr(symbols, right)?;
            Ok(emit_binary(symbols, left, *op, right))
        },
    }
}

fn emit_literal<T: Number>(symbols: &SymbolTable<'_, T>,
                           token: &Token)
                           -> CompileResult<Emitted<T>> {
    let lexeme = token.lexeme();
    let (node, source) = match token.kind() {
        TokenKind::Identifier => (Node::Parameter(symbols.parameter(lexeme)?), lexeme.to_string()),
        TokenKind::Constant => (Node::Value(symbols.constant(lexeme)?), format!("constants.{lexeme}")),
        TokenKind::Number => {
            let value = T::from_literal(lexeme).ok_or_else(|| CompileError::InvalidLiteral {
                                                   lexeme: lexeme.to_string(),
                                               })?;
            (Node::Value(value), lexeme.to_string())
        },
        _ => {
            return Err(CompileError::InvalidLiteral { lexeme: lexeme.to_string() });
        },
    };
    Ok(Emitted { node, source })
}

/// `|x|`: the `abs` operation, else a plain `abs` function, else the native
/// absolute value.
fn emit_abs<T: Number>(symbols: &SymbolTable<'_, T>, operand: Emitted<T>) -> Emitted<T> {
    if let Some(func) = symbols.library().unary_operation(UnaryOperation::Abs) {
        return operation(UnaryOperation::Abs.name(), Arc::clone(func), operand);
    }
    if let Some(entry) = symbols.plain_function("abs")
       && matches!(entry.function.arity, 0 | 1)
    {
        return call(entry, vec![operand]);
    }
    let native: UnaryFn<T> = Arc::new(<T as Number>::abs);
    unary(native, format!("abs({})", operand.source), operand)
}

fn emit_negate<T: Number>(symbols: &SymbolTable<'_, T>, operand: Emitted<T>) -> Emitted<T> {
    if let Some(func) = symbols.library().unary_operation(UnaryOperation::Neg) {
        return operation(UnaryOperation::Neg.name(), Arc::clone(func), operand);
    }
    let native: UnaryFn<T> = Arc::new(|value: T| -value);
    unary(native, format!("(-{})", operand.source), operand)
}

/// `x!`: the `fac` operation, else a plain `fac` function.
///
/// # Errors
/// `UndefinedOperator` if the library provides neither.
fn emit_factorial<T: Number>(symbols: &SymbolTable<'_, T>,
                             operand: Emitted<T>)
                             -> CompileResult<Emitted<T>> {
    if let Some(func) = symbols.library().unary_operation(UnaryOperation::Fac) {
        return Ok(operation(UnaryOperation::Fac.name(), Arc::clone(func), operand));
    }
    if let Some(entry) = symbols.plain_function(UnaryOperation::Fac.name())
       && matches!(entry.function.arity, 0 | 1)
    {
        return Ok(call(entry, vec![operand]));
    }
    Err(CompileError::UndefinedOperator { operator: "factorial".to_string() })
}

fn emit_binary<T: Number>(symbols: &SymbolTable<'_, T>,
                          left: Emitted<T>,
                          op: BinaryOperator,
                          right: Emitted<T>)
                          -> Emitted<T> {
    let opcode = opcode(op);
    let (func, source) = match symbols.library().binary_operation(opcode) {
        Some(func) => (Arc::clone(func),
                       format!("operations.{}({}, {})", opcode.name(), left.source, right.source)),
        None => {
            let symbol = match op {
                BinaryOperator::Pow => "**".to_string(),
                _ => op.to_string(),
            };
            (native_binary(opcode), format!("{} {symbol} {}", left.source, right.source))
        },
    };
    Emitted { node: Node::Binary { func,
                                   left: Box::new(left.node),
                                   right: Box::new(right.node) },
              source }
}

const fn opcode(op: BinaryOperator) -> BinaryOperation {
    match op {
        BinaryOperator::Add => BinaryOperation::Add,
        BinaryOperator::Sub => BinaryOperation::Sub,
        BinaryOperator::Mul => BinaryOperation::Mul,
        BinaryOperator::Div => BinaryOperation::Div,
        BinaryOperator::Pow => BinaryOperation::Pow,
        BinaryOperator::Mod => BinaryOperation::Mod,
    }
}

fn native_binary<T: Number>(opcode: BinaryOperation) -> BinaryFn<T> {
    match opcode {
        BinaryOperation::Add => Arc::new(|a: T, b: T| a + b),
        BinaryOperation::Sub => Arc::new(|a: T, b: T| a - b),
        BinaryOperation::Mul => Arc::new(|a: T, b: T| a * b),
        BinaryOperation::Div => Arc::new(|a: T, b: T| a / b),
        BinaryOperation::Pow => Arc::new(|a: T, b: T| a.pow(b)),
        BinaryOperation::Mod => Arc::new(|a: T, b: T| a % b),
    }
}

/// A call to a library function, arguments in order.
fn call<T>(entry: FunctionEntry<'_, T>, args: Vec<Emitted<T>>) -> Emitted<T> {
    let source = format!("functions.{}({})",
                         entry.name,
                         args.iter()
                             .map(|arg| arg.source.as_str())
                             .collect::<Vec<_>>()
                             .join(", "));
    Emitted { node: Node::Call { func: Arc::clone(&entry.function.func),
                                 args: args.into_iter().map(|arg| arg.node).collect() },
              source }
}

/// A call to a library unary operation.
fn operation<T>(name: &str, func: UnaryFn<T>, operand: Emitted<T>) -> Emitted<T> {
    let source = format!("operations.{name}({})", operand.source);
    unary(func, source, operand)
}

fn unary<T>(func: UnaryFn<T>, source: String, operand: Emitted<T>) -> Emitted<T> {
    Emitted { node: Node::Unary { func,
                                  operand: Box::new(operand.node) },
              source }
}
