use mathfn::{
    Library,
    compiler::{
        lexer::scan,
        token::{Token, TokenKind},
    },
    error::LexError,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    scan(source, &Library::standard()).unwrap()
                                      .iter()
                                      .map(Token::kind)
                                      .collect()
}

fn lexemes(source: &str) -> Vec<String> {
    scan(source, &Library::standard()).unwrap()
                                      .iter()
                                      .map(|token| token.lexeme().to_string())
                                      .collect()
}

#[test]
fn punctuation_maps_to_kinds() {
    use TokenKind::*;
    assert_eq!(kinds("(){}|+-*/^!%=,_"),
               vec![ParenOpen, ParenClose, BraceOpen, BraceClose, Pipe, Plus, Minus, Star, Slash,
                    Caret, Bang, Percent, Equal, Comma, Underscore]);
}

#[test]
fn comparisons_take_one_character_of_lookahead() {
    use TokenKind::*;
    assert_eq!(kinds("> >= < <= ="),
               vec![Greater, GreaterEqual, Less, LessEqual, Equal]);
    assert_eq!(kinds(">=="), vec![GreaterEqual, Equal]);
}

#[test]
fn whitespace_is_skipped() {
    assert_eq!(lexemes(" f ( x )\t=\r\n x "), vec!["f", "(", "x", ")", "=", "x"]);
}

#[test]
fn numbers() {
    assert_eq!(lexemes("12 3.25 0.5"), vec!["12", "3.25", "0.5"]);
    assert_eq!(kinds("2x"), vec![TokenKind::Number, TokenKind::Identifier]);
}

#[test]
fn radix_point_needs_a_digit() {
    assert_eq!(scan("f(x)=1.+x", &Library::standard()),
               Err(LexError::MalformedNumber { lexeme: "1.".to_string(),
                                               offset: 5, }));
}

#[test]
fn unknown_characters_are_rejected_with_their_offset() {
    assert_eq!(scan("f(x)=x#", &Library::standard()),
               Err(LexError::UnexpectedCharacter { character: '#',
                                                   offset:    6, }));
    assert!(scan("f(x)=1e5", &Library::standard()).is_ok());
    assert!(scan("f(x)=x;", &Library::standard()).is_err());
}

#[test]
fn letter_runs_split_into_identifiers() {
    let tokens = scan("xyz", &Library::standard()).unwrap();
    assert_eq!(tokens,
               vec![Token::new(TokenKind::Identifier, "x", 0),
                    Token::new(TokenKind::Identifier, "y", 1),
                    Token::new(TokenKind::Identifier, "z", 2),]);
}

#[test]
fn reserved_words_stay_whole() {
    use TokenKind::*;
    assert_eq!(kinds("sin pi e"), vec![Function, Constant, Constant]);
    assert_eq!(kinds("log_10"), vec![Function, Underscore, Number]);
    assert_eq!(lexemes("log_10"), vec!["log", "_", "10"]);
    // Only whole runs are reserved.
    assert_eq!(kinds("sinx"), vec![Identifier; 4]);
}

#[test]
fn reserved_words_come_from_the_library() {
    let library = Library::<f64>::new().with_function("area", 2, |args| args[0] * args[1])
                                       .with_constant("g", 9.81);
    let tokens = scan("area(g,x)", &library).unwrap();
    let kinds = tokens.iter().map(Token::kind).collect::<Vec<_>>();

    assert_eq!(kinds,
               vec![TokenKind::Function,
                    TokenKind::ParenOpen,
                    TokenKind::Constant,
                    TokenKind::Comma,
                    TokenKind::Identifier,
                    TokenKind::ParenClose]);
    assert_eq!(kinds.len(), 6);

    // Without the library, `sin` is three identifiers.
    assert_eq!(scan("sin", &Library::<f64>::new()).unwrap().len(), 3);
}

#[test]
fn offsets_are_byte_positions() {
    let tokens = scan("f(x) = 2.5x", &Library::standard()).unwrap();
    let offsets = tokens.iter().map(Token::offset).collect::<Vec<_>>();
    assert_eq!(offsets, vec![0, 1, 2, 3, 5, 7, 10]);
}
