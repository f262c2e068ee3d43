use crate::{
    ast::{Expr, UnaryOperator},
    compiler::{
        parser::{
            core::{ParseResult, TokenCursor, end_of_input, parse_expression, unexpected},
            utils::parse_comma_separated,
        },
        token::{Token, TokenKind},
    },
    error::ParseError,
};

/// Parses a prefix negation.
///
/// Negation is right-associative, so `--x` is parsed as `-(-x)`. It binds
/// tighter than `^`: `-2^2` is `(-2)^2`.
///
/// Grammar:
/// ```text
///     negative := "-" negative
///               | factorial
/// ```
pub fn parse_negative(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    if cursor.advance_if(TokenKind::Minus).is_some() {
        let expr = parse_negative(cursor)?;
        return Ok(Expr::unary(UnaryOperator::Negate, expr));
    }
    parse_factorial(cursor)
}

/// Parses a primary expression followed by any number of `!`.
///
/// Grammar: `factorial := primary "!"*`
pub fn parse_factorial(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let mut expr = parse_primary(cursor)?;
    while cursor.advance_if(TokenKind::Bang).is_some() {
        expr = Expr::unary(UnaryOperator::Factorial, expr);
    }
    Ok(expr)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - number literals, parameters and constants,
/// - parenthesized expressions,
/// - absolute values (`|expr|`),
/// - library function calls, with an optional variant subscript.
///
/// Grammar:
/// ```text
///     primary := NUMBER | IDENTIFIER | CONSTANT
///              | "(" expression ")"
///              | "|" expression "|"
///              | FUNCTION ("_" primary)? "(" (expression ("," expression)*)? ")"
/// ```
///
/// # Errors
/// - `UnexpectedToken` for a token that cannot start an operand.
/// - `UnexpectedEndOfInput` when the input ends where an operand is due.
pub fn parse_primary(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let Some(token) = cursor.peek() else {
        return Err(end_of_input("an operand"));
    };

    match token.kind() {
        TokenKind::Number | TokenKind::Identifier | TokenKind::Constant => {
            cursor.advance();
            Ok(Expr::Literal(token.clone()))
        },
        TokenKind::ParenOpen => {
            cursor.advance();
            let inner = cursor.nested(parse_expression)?;
            cursor.expect(TokenKind::ParenClose)?;
            Ok(Expr::Grouping(Box::new(inner)))
        },
        TokenKind::Pipe => parse_abs_grouping(cursor, token),
        TokenKind::Function => parse_function_call(cursor),
        _ => Err(unexpected(token, "an operand")),
    }
}

/// Parses `| expression |`.
///
/// Opening a grouping while another one is open at the same level is only
/// accepted right after `|`, `+` or `-` (as in `||a|+|b||` or `|-|x||`);
/// anywhere else the pipe cannot be told apart from a closing one.
///
/// The level's open flag is set while the inner expression is parsed, which
/// makes the first unclaimed `|` inside it the closing pipe, and is restored
/// afterwards.
fn parse_abs_grouping(cursor: &mut TokenCursor<'_>, pipe: &Token) -> ParseResult<Expr> {
    let outer = cursor.abs_open();
    if outer
       && !cursor.previous()
                 .is_some_and(|token| {
                     matches!(token.kind(),
                              TokenKind::Pipe | TokenKind::Plus | TokenKind::Minus)
                 })
    {
        return Err(ParseError::AmbiguousAbsoluteValue { token:  pipe.lexeme().to_string(),
                                                        offset: pipe.offset(), });
    }

    cursor.advance();
    cursor.set_abs_open(true);
    let inner = parse_expression(cursor);
    cursor.set_abs_open(outer);

    let inner = inner?;
    cursor.close_abs()?;
    Ok(Expr::AbsGrouping(Box::new(inner)))
}

/// Parses a library function call such as `sin(x)`, `max(a, b, c)` or
/// `log_10(x)`.
///
/// The variant subscript and every argument are parsed one nesting level
/// deeper.
fn parse_function_call(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let ident = cursor.expect(TokenKind::Function)?.clone();

    let variant = if cursor.advance_if(TokenKind::Underscore).is_some() {
        Some(Box::new(cursor.nested(parse_primary)?))
    } else {
        None
    };

    cursor.expect(TokenKind::ParenOpen)?;
    let args = parse_comma_separated(cursor,
                                     |cursor| cursor.nested(parse_expression),
                                     TokenKind::ParenClose)?;

    Ok(Expr::FnCall { ident,
                      variant,
                      args })
}
