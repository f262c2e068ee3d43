use crate::compiler::{
    parser::core::{ParseResult, TokenCursor, end_of_input, unexpected},
    token::TokenKind,
};

/// Parses a comma-separated list of items until a closing token.
///
/// Shared by parameter lists, function argument lists and guard blocks. It
/// repeatedly calls `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the `closing` token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Parameters
/// - `cursor`: Cursor positioned after the opening token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The kind that terminates the list (e.g. `)` or `}`).
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::compiler::parser) fn parse_comma_separated<'a, T>(
    cursor: &mut TokenCursor<'a>,
    mut parse_item: impl FnMut(&mut TokenCursor<'a>) -> ParseResult<T>,
    closing: TokenKind)
    -> ParseResult<Vec<T>> {
    let mut items = Vec::new();
    if cursor.advance_if(closing).is_some() {
        return Ok(items);
    }
    loop {
        items.push(parse_item(cursor)?);
        match cursor.advance() {
            Some(token) if token.is(TokenKind::Comma) => {},
            Some(token) if token.is(closing) => break,
            Some(token) => return Err(unexpected(token, &format!("',' or {closing}"))),
            None => return Err(end_of_input(&format!("',' or {closing}"))),
        }
    }
    Ok(items)
}
