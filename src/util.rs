/// Numeric helpers.
///
/// This module provides the numeric routines behind the standard library's
/// factorial operation: exact integer factorials where the result is
/// representable, the gamma function everywhere else, and the conversions
/// between `f64` and `u64` they rely on.
pub mod num;
