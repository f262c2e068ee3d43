use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use mathfn::{
    Error, Library, compile_declaration, compile_declaration_with,
    compiler::{codegen::compile, lexer::scan, parser::parse},
    error::CompileError,
    library::{BinaryOperation, UnaryOperation},
};

fn compile_error<T: mathfn::library::Number>(source: &str, library: &Library<T>) -> CompileError {
    match compile_declaration_with(source, library) {
        Err(Error::Compile(e)) => e,
        Err(e) => panic!("'{source}' failed before code generation: {e}"),
        Ok(_) => panic!("'{source}' was expected to fail to compile"),
    }
}

#[test]
fn rendered_source_uses_library_names() {
    let f = compile_declaration("f(x)=2sin(x)+pi").unwrap();
    assert_eq!(f.source(), "|x| Some(2 * functions.sin(x) + constants.pi)");

    let g = compile_declaration("f(x)=|x|^2-x!").unwrap();
    assert_eq!(g.source(), "|x| Some(functions.abs(x) ** 2 - operations.fac(x))");

    let h = compile_declaration("f(x,y)={0<x<y,y<=10}log_10(-y)").unwrap();
    assert_eq!(h.source(),
               "|x, y| if 0 < x && x < y && y <= 10 { Some(functions.log_((-y), 10)) } else { None }");
    assert_eq!(h.to_string(), h.source());
}

#[test]
fn declaration_is_kept_for_introspection() {
    let f = compile_declaration("f(x,y)=x+y{x>0}").unwrap();
    assert_eq!(f.declaration().ident.lexeme(), "f");
    assert_eq!(f.declaration().param_names(), f.params());
    assert_eq!(f.declaration().clauses.len(), 1);
}

#[test]
fn constants_must_be_in_the_compiling_library() {
    let scanning = Library::<f64>::new().with_constant("k", 2.0);
    let tokens = scan("f(x)=k*x", &scanning).unwrap();
    let decl = parse(&tokens).unwrap();

    let f = compile(decl.clone(), &scanning).unwrap();
    assert_eq!(f.call(&[3.0]), Some(6.0));

    assert_eq!(compile(decl, &Library::<f64>::new()).unwrap_err(),
               CompileError::UndefinedConstant { name: "k".to_string() });
}

#[test]
fn functions_must_be_in_the_compiling_library() {
    let scanning = Library::standard();
    let tokens = scan("f(x)=sin(x)", &scanning).unwrap();
    let decl = parse(&tokens).unwrap();

    assert_eq!(compile(decl, &Library::<f64>::new()).unwrap_err(),
               CompileError::UndefinedFunction { name: "sin".to_string() });
}

#[test]
fn binary_operations_can_be_overridden() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let library = Library::<f64>::new().with_binary_operation(BinaryOperation::Mul, move |a, b| {
                                           counter.fetch_add(1, Ordering::SeqCst);
                                           a * b
                                       })
                                       .with_binary_operation(BinaryOperation::Pow, |a, b| a + b);

    let f = compile_declaration_with("f(x,y)=2xy+x^y", &library).unwrap();
    assert_eq!(f.source(), "|x, y| Some(operations.mul(operations.mul(2, x), y) + operations.pow(x, y))");
    assert_eq!(f.call(&[3.0, 4.0]), Some(31.0));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn unary_operations_can_be_overridden() {
    let library = Library::<f64>::new().with_unary_operation(UnaryOperation::Neg, |a| a - 1.0)
                                       .with_unary_operation(UnaryOperation::Abs, |a| a * 10.0)
                                       .with_unary_operation(UnaryOperation::Fac, |a| a + 0.5);

    let f = compile_declaration_with("f(x)=-|x|+x!", &library).unwrap();
    assert_eq!(f.source(),
               "|x| Some(operations.neg(operations.abs(x)) + operations.fac(x))");
    assert_eq!(f.call(&[2.0]), Some(19.0 + 2.5));
}

#[test]
fn native_fallbacks() {
    let library = Library::<f64>::new();
    let f = compile_declaration_with("f(x)=-|x|%3", &library).unwrap();
    assert_eq!(f.source(), "|x| Some((-abs(x)) % 3)");
    assert_eq!(f.call(&[-7.0]), Some(-1.0));
}

#[test]
fn factorial_needs_library_support() {
    assert_eq!(compile_error("f(x)=x!", &Library::<f64>::new()),
               CompileError::UndefinedOperator { operator: "factorial".to_string() });

    let library = Library::<f64>::new().with_function("fac", 1, |args| {
                                           (1..=args[0] as u32).map(f64::from).product()
                                       });
    let f = compile_declaration_with("f(x)=x!", &library).unwrap();
    assert_eq!(f.source(), "|x| Some(functions.fac(x))");
    assert_eq!(f.call(&[4.0]), Some(24.0));
}

#[test]
fn plain_and_variant_registrations_coexist() {
    let library = Library::<f64>::new().with_function("root", 1, |args| args[0].sqrt())
                                       .with_function("root_", 1, |args| {
                                           args[0].powf(args[1].recip())
                                       });

    let f = compile_declaration_with("f(x)=root(x)+root_3(x)", &library).unwrap();
    assert_eq!(f.source(), "|x| Some(functions.root(x) + functions.root_(x, 3))");
    let value = f.call(&[64.0]).unwrap();
    assert!((value - 12.0).abs() < 1e-12);
}

#[test]
fn variadic_functions_accept_any_count() {
    let library = Library::<f64>::new().with_function("sum", 0, |args| args.iter().sum());
    let f = compile_declaration_with("f(x,y)=sum()+sum(x)+sum(x,y,1)", &library).unwrap();
    assert_eq!(f.call(&[1.0, 2.0]), Some(5.0));
}

#[test]
fn arity_is_checked_without_the_variant() {
    assert_eq!(compile_error("f(x)=log_2(x,x)", &Library::standard()),
               CompileError::ArgumentCountMismatch { name:     "log".to_string(),
                                                     expected: 1,
                                                     found:    2, });
    assert_eq!(compile_error("f(x)=pow(x)", &Library::standard()),
               CompileError::ArgumentCountMismatch { name:     "pow".to_string(),
                                                     expected: 2,
                                                     found:    1, });
}

#[test]
fn undefined_identifiers_inside_clauses() {
    assert_eq!(compile_error("f(x)=x{y>0}", &Library::standard()),
               CompileError::UndefinedIdentifier { name: "y".to_string() });
}

#[test]
fn clause_operands_are_evaluated_once_and_short_circuit() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let library = Library::<f64>::new().with_function("probe", 1, move |args| {
                                           counter.fetch_add(1, Ordering::SeqCst);
                                           args[0]
                                       });

    let f = compile_declaration_with("f(x)={0<probe(x)<10<probe(x)}x", &library).unwrap();

    assert_eq!(f.call(&[5.0]), None);
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    calls.store(0, Ordering::SeqCst);
    assert_eq!(f.call(&[-5.0]), None);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn single_precision_domain() {
    let library = Library::<f32>::new().with_constant("half", 0.5)
                                       .with_function("twice", 1, |args| args[0] * 2.0);
    let f = compile_declaration_with("f(x)={x>=0}twice(x)^2half", &library).unwrap();
    assert_eq!(f.call(&[3.0_f32]), Some(18.0_f32));
    assert_eq!(f.call(&[-3.0_f32]), None);
}
