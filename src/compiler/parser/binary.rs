use crate::{
    ast::{BinaryOperator, Expr},
    compiler::{
        parser::{
            core::{ParseResult, TokenCursor},
            unary::parse_negative,
        },
        token::{Token, TokenKind},
    },
    error::ParseError,
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `term := factor (("+" | "-") factor)*`
///
/// # Parameters
/// - `cursor`: Token cursor.
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed expression.
pub fn parse_term(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let mut left = parse_factor(cursor)?;
    while let Some(kind) = cursor.peek_kind()
          && let Some(op) = BinaryOperator::from_token_kind(kind)
          && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    {
        cursor.advance();
        let right = parse_factor(cursor)?;
        left = Expr::binary(left, op, right);
    }
    Ok(left)
}

/// Parses multiplication-level expressions, explicit and implicit.
///
/// Explicit operators are `*`, `/` and `%`; their right operand starts a
/// fresh absolute-value nesting level. An operand that directly follows the
/// previous one without an operator (`2x`, `x(y+1)`, `2sin(x)`) is
/// multiplied implicitly.
///
/// A `|` after an operand is ambiguous: it either closes the enclosing
/// absolute value or opens a new one to multiply with. It opens a new one
/// only when no grouping is open at this level; otherwise the loop stops and
/// leaves the pipe to the grouping that is waiting for it.
///
/// The rule is: `factor := exponent ((("*" | "/" | "%") exponent) |
/// exponent)*`
///
/// # Errors
/// - `AmbiguousAbsoluteValue` when an operand directly follows a pipe that
///   closed a nested absolute value (`||2|3|`).
pub fn parse_factor(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let mut left = parse_exponent(cursor)?;
    while let Some(token) = cursor.peek() {
        let kind = token.kind();

        if let Some(op) = BinaryOperator::from_token_kind(kind)
           && matches!(op,
                       BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
        {
            cursor.advance();
            let right = cursor.nested(parse_exponent)?;
            left = Expr::binary(left, op, right);
        } else if kind.starts_implicit_operand() {
            check_abs_adjacency(cursor, token)?;
            let right = parse_exponent(cursor)?;
            left = Expr::binary(left, BinaryOperator::Mul, right);
        } else if kind == TokenKind::Pipe && !cursor.abs_open() {
            let right = parse_exponent(cursor)?;
            left = Expr::binary(left, BinaryOperator::Mul, right);
        } else {
            break;
        }
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Exponentiation is right-associative: `a ^ b ^ c` parses as
/// `a ^ (b ^ c)`. The right operand starts a fresh absolute-value nesting
/// level.
///
/// The rule is: `exponent := negative ("^" exponent)?`
pub fn parse_exponent(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let base = parse_negative(cursor)?;
    if cursor.advance_if(TokenKind::Caret).is_some() {
        let exponent = cursor.nested(parse_exponent)?;
        return Ok(Expr::binary(base, BinaryOperator::Pow, exponent));
    }
    Ok(base)
}

/// Rejects an implicit operand right after a pipe that closed a nested
/// absolute value at this level, where the pipes around it can no longer be
/// paired unambiguously. Pipes closed at a deeper level, such as inside an
/// exponent in `|2^|x|x|`, do not count.
fn check_abs_adjacency(cursor: &TokenCursor<'_>, next: &Token) -> ParseResult<()> {
    if cursor.abs_open() && cursor.just_closed_abs() {
        return Err(ParseError::AmbiguousAbsoluteValue { token:  next.lexeme().to_string(),
                                                        offset: next.offset(), });
    }
    Ok(())
}
