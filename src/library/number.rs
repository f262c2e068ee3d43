use std::{
    fmt::{Debug, Display},
    ops::{Add, Div, Mul, Neg, Rem, Sub},
    str::FromStr,
};

/// The numeric domain a library and its compiled functions operate on.
///
/// Besides the arithmetic operator traits, a domain provides the native
/// fallbacks used when a library defines no `pow` or `abs` operation, and
/// parses number literals from source text.
pub trait Number:
    Copy
    + PartialOrd
    + Debug
    + Display
    + FromStr
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Raises `self` to the power `exponent`.
    #[must_use]
    fn pow(self, exponent: Self) -> Self;

    /// The absolute value of `self`.
    #[must_use]
    fn abs(self) -> Self;

    /// Parses a number literal such as `42` or `0.5`.
    ///
    /// # Example
    /// ```
    /// use mathfn::library::number::Number;
    ///
    /// assert_eq!(<f64 as Number>::from_literal("2.5"), Some(2.5));
    /// assert_eq!(<f64 as Number>::from_literal("x"), None);
    /// ```
    fn from_literal(lexeme: &str) -> Option<Self> {
        lexeme.parse().ok()
    }
}

macro_rules! float_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Number for $ty {
                fn pow(self, exponent: Self) -> Self {
                    self.powf(exponent)
                }

                fn abs(self) -> Self {
                    <$ty>::abs(self)
                }
            }
        )*
    };
}

float_number!(f64, f32);
