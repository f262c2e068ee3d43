use std::f64::consts::{E, PI};

use crate::{
    library::core::{Library, UnaryOperation},
    util::num::factorial,
};

/// Type alias for standard function bodies.
///
/// A standard function receives the evaluated arguments (variant last) and
/// returns the result. Domain errors surface as `NaN`, the way `f64` math
/// reports them.
type StandardFn = fn(&[f64]) -> f64;

/// Defines the standard functions by generating a lookup table and a name
/// list.
///
/// Each entry provides:
/// - a string name (ending in `_` when the function takes a variant),
/// - an arity, `0` meaning any number of arguments,
/// - a function pointer implementing it.
macro_rules! standard_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct StandardDef {
            name:  &'static str,
            arity: usize,
            func:  StandardFn,
        }
        static STANDARD_TABLE: &[StandardDef] = &[
            $(
                StandardDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of all standard functions, variant marker included.
        pub const STANDARD_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

/// Wraps a one-argument `f64` method as a standard function.
macro_rules! unary {
    ($method:ident) => {
        |args: &[f64]| args[0].$method()
    };
}

standard_functions! {
    "abs"    => { arity: 1, func: unary!(abs) },
    "acos"   => { arity: 1, func: unary!(acos) },
    "acosh"  => { arity: 1, func: unary!(acosh) },
    "asin"   => { arity: 1, func: unary!(asin) },
    "asinh"  => { arity: 1, func: unary!(asinh) },
    "atan"   => { arity: 1, func: unary!(atan) },
    "atanh"  => { arity: 1, func: unary!(atanh) },
    "cbrt"   => { arity: 1, func: unary!(cbrt) },
    "ceil"   => { arity: 1, func: unary!(ceil) },
    "cos"    => { arity: 1, func: unary!(cos) },
    "cosh"   => { arity: 1, func: unary!(cosh) },
    "exp"    => { arity: 1, func: unary!(exp) },
    "floor"  => { arity: 1, func: unary!(floor) },
    "hypot"  => { arity: 0, func: hypot },
    "log_"   => { arity: 1, func: log },
    "ln"     => { arity: 1, func: unary!(ln) },
    "max"    => { arity: 0, func: max },
    "min"    => { arity: 0, func: min },
    "pow"    => { arity: 2, func: |args| args[0].powf(args[1]) },
    "random" => { arity: 0, func: |_| rand::random::<f64>() },
    "round"  => { arity: 1, func: round },
    "sign"   => { arity: 1, func: sign },
    "sin"    => { arity: 1, func: unary!(sin) },
    "sinh"   => { arity: 1, func: unary!(sinh) },
    "sqrt"   => { arity: 1, func: unary!(sqrt) },
    "tan"    => { arity: 1, func: unary!(tan) },
    "tanh"   => { arity: 1, func: unary!(tanh) },
}

impl Library<f64> {
    /// The standard numeric library.
    ///
    /// Provides the common real functions (`sin`, `sqrt`, `ln`, ...), the
    /// variant function `log_` (`log_10(x)` is the base-10 logarithm), the
    /// variadic `hypot`, `max` and `min`, the constants `pi` and `e`, and the
    /// factorial operation. Every other operation uses native `f64`
    /// arithmetic.
    ///
    /// # Example
    /// ```
    /// use mathfn::compile_declaration;
    ///
    /// let f = compile_declaration("f(x)=log_2(x)+max(x,1,3)").unwrap();
    /// let y = f.call(&[8.0]).unwrap();
    /// assert!((y - 11.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn standard() -> Self {
        let library = STANDARD_TABLE.iter()
                                    .fold(Self::new(), |library, def| {
                                        library.with_function(def.name, def.arity, def.func)
                                    });

        library.with_constant("pi", PI)
               .with_constant("e", E)
               .with_unary_operation(UnaryOperation::Fac, factorial)
    }
}

/// `log_b(x)`: the logarithm of `x` in base `b`.
fn log(args: &[f64]) -> f64 {
    args[0].ln() / args[1].ln()
}

/// Rounds half-way cases towards positive infinity.
fn round(args: &[f64]) -> f64 {
    (args[0] + 0.5).floor()
}

/// `-1`, `0` or `1` depending on the sign; `NaN` stays `NaN`.
fn sign(args: &[f64]) -> f64 {
    let x = args[0];
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        x
    }
}

/// Scaled at every step, so it neither overflows nor underflows early.
fn hypot(args: &[f64]) -> f64 {
    args.iter().copied().fold(0.0, f64::hypot)
}

/// Largest argument; any `NaN` argument makes the result `NaN`.
fn max(args: &[f64]) -> f64 {
    fold_nan(args, f64::NEG_INFINITY, f64::max)
}

/// Smallest argument; any `NaN` argument makes the result `NaN`.
fn min(args: &[f64]) -> f64 {
    fold_nan(args, f64::INFINITY, f64::min)
}

fn fold_nan(args: &[f64], init: f64, pick: fn(f64, f64) -> f64) -> f64 {
    args.iter().copied().fold(init, |acc, x| {
                            if acc.is_nan() || x.is_nan() { f64::NAN } else { pick(acc, x) }
                        })
}
