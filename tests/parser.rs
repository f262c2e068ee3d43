use mathfn::{
    Library,
    ast::{BinaryOperator, ClauseOperand, ComparisonOperator, Expr, FnDecl, UnaryOperator},
    compiler::{lexer::scan, parser::parse},
    error::ParseError,
};

fn parse_source(source: &str) -> Result<FnDecl, ParseError> {
    let tokens = scan(source, &Library::standard()).unwrap();
    parse(&tokens)
}

fn body(source: &str) -> Expr {
    parse_source(source).unwrap_or_else(|e| panic!("'{source}' failed to parse: {e}"))
                        .body
}

/// Renders an expression fully parenthesised, to compare tree shapes.
fn shape(expr: &Expr) -> String {
    match expr {
        Expr::Literal(token) => token.lexeme().to_string(),
        Expr::Grouping(inner) => format!("({})", shape(inner)),
        Expr::AbsGrouping(inner) => format!("|{}|", shape(inner)),
        Expr::FnCall { ident, variant, args } => {
            let args = args.iter().map(shape).collect::<Vec<_>>().join(",");
            match variant {
                Some(variant) => format!("{}_{}[{args}]", ident.lexeme(), shape(variant)),
                None => format!("{}[{args}]", ident.lexeme()),
            }
        },
        Expr::Unary { op: UnaryOperator::Negate, expr } => format!("(-{})", shape(expr)),
        Expr::Unary { op: UnaryOperator::Factorial, expr } => format!("({}!)", shape(expr)),
        Expr::Binary { left, op, right } => format!("({} {op} {})", shape(left), shape(right)),
    }
}

fn assert_shape(source: &str, expected: &str) {
    assert_eq!(shape(&body(source)), expected, "shape of '{source}'");
}

#[test]
fn precedence_and_associativity() {
    assert_shape("f(x)=1+2*3", "(1 + (2 * 3))");
    assert_shape("f(x)=1-2-3", "((1 - 2) - 3)");
    assert_shape("f(x)=2^3^4", "(2 ^ (3 ^ 4))");
    assert_shape("f(x)=-x^2", "((-x) ^ 2)");
    assert_shape("f(x)=-x!", "(-(x!))");
    assert_shape("f(x)=x!!", "((x!)!)");
    assert_shape("f(x)=x/2%3", "((x / 2) % 3)");
}

#[test]
fn implicit_multiplication_binds_like_explicit() {
    assert_shape("f(x,y)=xy", "(x * y)");
    assert_shape("f(x)=2x^2", "(2 * (x ^ 2))");
    assert_shape("f(x)=2sin(x)", "(2 * sin[x])");
    assert_shape("f(x)=x(x+1)", "(x * ((x + 1)))");
    assert_shape("f(x)=2|x|", "(2 * |x|)");
    assert_eq!(shape(&body("f(x,y)=xy")), shape(&body("f(x,y)=x*y")));
}

#[test]
fn nested_absolute_values() {
    assert_shape("f(x)=|-|x||", "|(-|x|)|");
    assert_shape("f(a,b)=||a|+|b||", "|(|a| + |b|)|");
    assert_shape("f(x)=|x||x|", "(|x| * |x|)");
    assert_shape("f(x)=|x*|x||", "|(x * |x|)|");
    assert_shape("f(x)=|(|x|)|", "|(|x|)|");
    assert_shape("f(x)=||2|*3x|", "|((|2| * 3) * x)|");
}

#[test]
fn ambiguous_absolute_values() {
    assert_eq!(parse_source("f(x)=||2|3|"),
               Err(ParseError::AmbiguousAbsoluteValue { token:  "3".to_string(),
                                                        offset: 9, }));
    assert!(matches!(parse_source("f(x)=|2|3||"),
                     Err(ParseError::UnexpectedEndOfInput { .. })));
    assert!(matches!(parse_source("f(x)=||x|sin(x)|"),
                     Err(ParseError::AmbiguousAbsoluteValue { .. })));
}

#[test]
fn function_calls_and_variants() {
    assert_shape("f(x)=max(x,1,2)", "max[x,1,2]");
    assert_shape("f(x)=log_10(x)", "log_10[x]");
    assert_shape("f(x)=log_(2x)(x)", "log_((2 * x))[x]");
    assert_shape("f()=random()", "random[]");
    assert!(matches!(parse_source("f(x)=sin x"), Err(ParseError::UnexpectedToken { .. })));
    assert!(matches!(parse_source("f(x)=max(x,"), Err(ParseError::UnexpectedEndOfInput { .. })));
}

#[test]
fn declaration_header() {
    let decl = parse_source("g(a,b,c)=a").unwrap();
    assert_eq!(decl.ident.lexeme(), "g");
    assert_eq!(decl.param_names(), vec!["a", "b", "c"]);
    assert!(decl.clauses.is_empty());

    assert!(parse_source("f()=1").unwrap().params.is_empty());
    assert!(matches!(parse_source("f(x,)=x"), Err(ParseError::UnexpectedToken { .. })));
    assert!(matches!(parse_source("f(2)=x"), Err(ParseError::UnexpectedToken { .. })));
    assert!(matches!(parse_source("sin(x)=x"), Err(ParseError::UnexpectedToken { .. })));
    assert!(matches!(parse_source("f(x)="), Err(ParseError::UnexpectedEndOfInput { .. })));
}

#[test]
fn guard_clauses() {
    let prefix = parse_source("f(x)={x>0,x<=5}x").unwrap();
    let suffix = parse_source("f(x)=x{x>0,x<=5}").unwrap();
    assert_eq!(shape(&prefix.body), shape(&suffix.body));
    assert_eq!(prefix.clauses.len(), 2);
    assert_eq!(suffix.clauses.len(), 2);
    assert_eq!(prefix.clauses[1].op, ComparisonOperator::LessEqual);

    assert!(matches!(parse_source("f(x)={x>0}x{x<1}"), Err(ParseError::DuplicateGuard { .. })));
    assert!(matches!(parse_source("f(x)=x{x>0}{x<1}"), Err(ParseError::DuplicateGuard { .. })));
    assert!(matches!(parse_source("f(x)=x{}"), Err(ParseError::UnexpectedToken { .. })));
    assert!(matches!(parse_source("f(x)=x{x>0"), Err(ParseError::UnexpectedEndOfInput { .. })));
}

#[test]
fn chained_comparisons_nest_to_the_left() {
    let decl = parse_source("f(x)={0<=x<10}x").unwrap();
    let clause = &decl.clauses[0];

    assert_eq!(clause.op, ComparisonOperator::Less);
    assert_eq!(shape(&clause.right), "10");
    let ClauseOperand::Logical(first) = &clause.left else {
        panic!("expected a chained comparison");
    };
    assert_eq!(first.op, ComparisonOperator::LessEqual);
    assert!(matches!(&first.left, ClauseOperand::Expr(Expr::Literal(token)) if token.lexeme() == "0"));

    let (operands, ops) = clause.links();
    assert_eq!(operands.iter().map(|e| shape(e)).collect::<Vec<_>>(),
               vec!["0", "x", "10"]);
    assert_eq!(ops, vec![ComparisonOperator::LessEqual, ComparisonOperator::Less]);
}

#[test]
fn absolute_values_inside_clauses() {
    let decl = parse_source("f(x)={|x|<1}x").unwrap();
    assert_eq!(shape(&decl.clauses[0].links().0[0]), "|x|");
}

#[test]
fn trailing_tokens_are_rejected() {
    assert_eq!(parse_source("f(x)=x)"),
               Err(ParseError::UnexpectedTrailingTokens { token:  ")".to_string(),
                                                          offset: 6, }));
    let binary = body("f(x)=x-1");
    assert!(matches!(binary, Expr::Binary { op: BinaryOperator::Sub, .. }));
}
