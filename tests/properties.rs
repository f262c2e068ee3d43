//! Property tests for the compilation pipeline.

use mathfn::{Library, compile_declaration, compile_declaration_with};
use proptest::prelude::*;

/// Finite values small enough that products stay finite.
fn finite() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6
}

/// Strategy for strings built from the language's alphabet, mostly invalid.
fn declaration_like_string() -> impl Strategy<Value = String> {
    let part = prop_oneof![
        "[0-9]{1,3}(\\.[0-9]{1,2})?".prop_map(String::from),
        "[a-z]{1,3}".prop_map(String::from),
        prop::sample::select(vec!["sin", "log_", "max", "pi", "e", "f(x)=", "f(x,y)="])
            .prop_map(String::from),
        prop::sample::select(vec!["(", ")", "{", "}", "|", "+", "-", "*", "/", "^", "!", "%", "=",
                                  ">", ">=", "<", "<=", ",", "_", " "])
            .prop_map(String::from),
    ];
    prop::collection::vec(part, 0..40).prop_map(|parts| parts.join(""))
}

proptest! {
    #[test]
    fn identity_round_trips(n in finite()) {
        let f = compile_declaration("f(x)=x").unwrap();
        prop_assert_eq!(f.call(&[n]), Some(n));
    }

    #[test]
    fn implicit_multiplication_is_multiplication(a in finite(), b in finite()) {
        let implicit = compile_declaration("f(x,y)=xy").unwrap();
        let explicit = compile_declaration("f(x,y)=x*y").unwrap();
        prop_assert_eq!(implicit.call(&[a, b]), Some(a * b));
        prop_assert_eq!(explicit.call(&[a, b]), Some(a * b));
    }

    #[test]
    fn guard_partitions_the_domain(x in finite()) {
        let f = compile_declaration("f(x)=x^2{x>=0}").unwrap();
        let expected = if x >= 0.0 { Some(x.powf(2.0)) } else { None };
        prop_assert_eq!(f.call(&[x]), expected);
    }

    #[test]
    fn chained_guard_is_an_interval(x in -20.0..20.0_f64) {
        let f = compile_declaration("f(x)={0<=x<=10}x").unwrap();
        prop_assert_eq!(f.call(&[x]).is_some(), (0.0..=10.0).contains(&x));
    }

    #[test]
    fn absolute_value_is_non_negative(x in finite()) {
        let f = compile_declaration("f(x)=|-|x||").unwrap();
        prop_assert_eq!(f.call(&[x]), Some(x.abs()));
    }

    #[test]
    fn compiling_twice_gives_the_same_function(x in finite(), y in finite()) {
        let source = "f(x,y)=2x^2-3xy+|y|{x>-100}";
        let first = compile_declaration(source).unwrap();
        let second = compile_declaration(source).unwrap();
        prop_assert_eq!(first.source(), second.source());
        prop_assert_eq!(first.call(&[x, y]), second.call(&[x, y]));
    }

    #[test]
    fn parameters_keep_declaration_order(
        params in prop::sample::subsequence(vec!["a", "b", "c", "d", "f", "g", "h"], 0..=7)
            .prop_shuffle()
    ) {
        let source = format!("z({})=1", params.join(","));
        let f = compile_declaration_with(&source, &Library::<f64>::new()).unwrap();
        prop_assert_eq!(f.params(), params.as_slice());
    }

    #[test]
    fn pipeline_never_panics(source in declaration_like_string()) {
        if let Ok(f) = compile_declaration(&source) {
            let args = vec![0.5; f.arity()];
            let _ = f.call(&args);
        }
    }
}
