/// The library type and its operation names.
///
/// A library is the capability set a declaration is compiled against: named
/// functions with their arities, named constants, and optional overrides of
/// the algebraic operations (`add`, `sub`, `mul`, `div`, `pow`, `mod`, `abs`,
/// `neg`, `fac`).
pub mod core;
/// The numeric domain trait.
///
/// Libraries and compiled functions are generic over a `Number`, implemented
/// for `f64` and `f32`.
pub mod number;
/// The standard `f64` library used when no library is supplied.
pub mod standard;

pub use self::core::{
    BinaryOperation, Library, LibraryFunction, UnaryOperation, VARIANT_MARKER,
};
pub use number::Number;
