use crate::{
    ast::{ClauseOperand, ComparisonOperator, FnDecl, LogicalExpr},
    compiler::{
        parser::{
            core::{ParseResult, TokenCursor, end_of_input, parse_expression, unexpected},
            utils::parse_comma_separated,
        },
        token::{Token, TokenKind},
    },
    error::ParseError,
};

/// Parses a complete function declaration.
///
/// The guard block may sit right after `=` or after the body, but only once.
/// The whole token stream must be consumed.
///
/// Grammar:
/// ```text
///     declaration := IDENT "(" (IDENT ("," IDENT)*)? ")" "="
///                    guard? expression guard?
///     guard       := "{" clause ("," clause)* "}"
/// ```
///
/// # Errors
/// - `DuplicateGuard` if both guard positions are used.
/// - `UnexpectedTrailingTokens` if tokens remain after the declaration.
/// - Any error raised while parsing the body or the clauses.
pub fn parse_declaration(cursor: &mut TokenCursor<'_>) -> ParseResult<FnDecl> {
    let ident = cursor.expect(TokenKind::Identifier)?.clone();

    cursor.expect(TokenKind::ParenOpen)?;
    let params = parse_comma_separated(cursor, parse_parameter, TokenKind::ParenClose)?;
    cursor.expect(TokenKind::Equal)?;

    let mut clauses = parse_guard(cursor)?;
    let body = parse_expression(cursor)?;
    if clauses.is_none() {
        clauses = parse_guard(cursor)?;
    }

    if let Some(brace) = cursor.peek()
       && brace.is(TokenKind::BraceOpen)
    {
        return Err(ParseError::DuplicateGuard { offset: brace.offset() });
    }
    if let Some(token) = cursor.peek() {
        return Err(ParseError::UnexpectedTrailingTokens { token:  token.lexeme().to_string(),
                                                          offset: token.offset(), });
    }

    Ok(FnDecl { ident,
                params,
                body,
                clauses: clauses.unwrap_or_default() })
}

fn parse_parameter(cursor: &mut TokenCursor<'_>) -> ParseResult<Token> {
    cursor.expect(TokenKind::Identifier).cloned()
}

/// Parses `{ clause ("," clause)* }` if the next token opens a block.
fn parse_guard(cursor: &mut TokenCursor<'_>) -> ParseResult<Option<Vec<LogicalExpr>>> {
    if cursor.advance_if(TokenKind::BraceOpen).is_none() {
        return Ok(None);
    }
    if let Some(token) = cursor.advance_if(TokenKind::BraceClose) {
        return Err(unexpected(token, "a guard clause"));
    }
    parse_comma_separated(cursor, parse_clause, TokenKind::BraceClose).map(Some)
}

/// Parses a chained comparison, such as `x > 0` or `0 <= x < 10`.
///
/// Every link keeps its own operator; later links nest the earlier ones on
/// their left. Each side is parsed one nesting level deeper.
///
/// Grammar: `clause := expression (cmp expression)+`
fn parse_clause(cursor: &mut TokenCursor<'_>) -> ParseResult<LogicalExpr> {
    let first = cursor.nested(parse_expression)?;

    let op = parse_comparison(cursor)?;
    let right = cursor.nested(parse_expression)?;
    let mut clause = LogicalExpr { left: ClauseOperand::Expr(first),
                                   op,
                                   right };

    while cursor.peek_kind().is_some_and(TokenKind::is_comparison) {
        let op = parse_comparison(cursor)?;
        let right = cursor.nested(parse_expression)?;
        clause = LogicalExpr { left: ClauseOperand::Logical(Box::new(clause)),
                               op,
                               right };
    }

    Ok(clause)
}

fn parse_comparison(cursor: &mut TokenCursor<'_>) -> ParseResult<ComparisonOperator> {
    match cursor.advance() {
        Some(token) => ComparisonOperator::from_token_kind(token.kind())
            .ok_or_else(|| unexpected(token, "a comparison operator")),
        None => Err(end_of_input("a comparison operator")),
    }
}
