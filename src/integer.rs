//! Integer traits and GCD/LCM utilities backing `Rational<T>`.
//!
//! The trait system uses two levels, mirroring how overflow is handled:
//!
//! - [`WideInteger`]: a signed primitive usable for intermediate arithmetic
//! - [`RationalInteger`]: a signed primitive that can back a `Rational<T>`,
//!   paired with a `Wide` type large enough for its intermediate products
//!
//! Every `RationalInteger` is also a `WideInteger`. `i128` is the terminal
//! type and only implements `WideInteger`.
//!
//! # Example
//!
//! ```
//! use exact_rational::{gcd, lcm, RationalInteger};
//!
//! assert_eq!(gcd(48i64, 18), 6);
//! assert_eq!(lcm(4i64, 6), 12);
//! assert_eq!(7i32.to_wide(), 7i64);
//! ```

use core::fmt::{Debug, Display};
use core::hash::Hash;
use num_traits::{CheckedNeg, CheckedRem, PrimInt, Signed};

/// Operations for types used in intermediate (widened) arithmetic.
///
/// Everything here comes from `num-traits`; the trait exists so that both the
/// narrow and the wide side of a `Rational<T>` computation share one bound.
pub trait WideInteger:
    PrimInt + Signed + CheckedRem + CheckedNeg + Debug + Display + Hash + Send + Sync + 'static
{
}

/// Integer type suitable for use in `Rational<T>`.
///
/// # Associated Type: Wide
///
/// The `Wide` type must hold the product of any two `Self` values, and the
/// sum of two such products. Doubling the bit width satisfies both.
///
/// # Implemented Types
///
/// `i8` (wide `i16`), `i16` (wide `i32`), `i32` (wide `i64`), `i64` (wide `i128`).
pub trait RationalInteger: WideInteger {
    /// The wide type for overflow-free intermediate arithmetic.
    type Wide: WideInteger;

    /// Lossless conversion to the wide type.
    fn to_wide(self) -> Self::Wide;

    /// Convert back from the wide type, returning `None` if the value doesn't fit.
    fn from_wide_checked(wide: Self::Wide) -> Option<Self>;
}

macro_rules! impl_wide_integer {
    ($type:ty) => {
        impl WideInteger for $type {}
    };
}

macro_rules! impl_rational_integer {
    ($narrow:ty, $wide:ty) => {
        impl_wide_integer!($narrow);

        impl RationalInteger for $narrow {
            type Wide = $wide;

            #[inline(always)]
            fn to_wide(self) -> $wide {
                <$wide>::from(self)
            }

            #[inline]
            fn from_wide_checked(wide: $wide) -> Option<Self> {
                <$narrow>::try_from(wide).ok()
            }
        }
    };
}

impl_rational_integer!(i8, i16);
impl_rational_integer!(i16, i32);
impl_rational_integer!(i32, i64);
impl_rational_integer!(i64, i128);

// i128 is terminal - only WideInteger
impl_wide_integer!(i128);

/// Greatest common divisor by the Euclidean algorithm.
///
/// `gcd(x, 0) == x`, and `gcd(x, y) == gcd(y, x % y)` otherwise. The sign of
/// the result is whatever the recursion produces, so it can be negative when
/// an input is; dividing a numerator and denominator by it still yields an
/// equal fraction.
///
/// The remainder `MIN % -1` is taken as `0` rather than overflowing, which
/// makes the function total.
///
/// # Examples
///
/// ```
/// use exact_rational::gcd;
///
/// assert_eq!(gcd(48i32, 18), 6);
/// assert_eq!(gcd(5i32, 0), 5);
/// assert_eq!(gcd(0i32, 7), 7);
/// ```
pub fn gcd<T: WideInteger>(mut x: T, mut y: T) -> T {
    while !y.is_zero() {
        let rem = x.checked_rem(&y).unwrap_or_else(T::zero);
        x = y;
        y = rem;
    }
    x
}

/// Least common multiple, `x * y / gcd(x, y)`.
///
/// The division happens before the multiplication, so the intermediate never
/// exceeds the result.
///
/// # Panics
///
/// Panics if both inputs are zero, or (with overflow checks enabled) if the
/// result does not fit in `T`. Use [`checked_lcm`] to get `None` instead.
pub fn lcm<T: WideInteger>(x: T, y: T) -> T {
    x / gcd(x, y) * y
}

/// Least common multiple, returning `None` if both inputs are zero or the
/// result overflows `T`.
pub fn checked_lcm<T: WideInteger>(x: T, y: T) -> Option<T> {
    x.checked_div(&gcd(x, y))?.checked_mul(&y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_basic() {
        assert_eq!(gcd(48i64, 18), 6);
        assert_eq!(gcd(100i32, 35), 5);
        assert_eq!(gcd(17i16, 5), 1);
    }

    #[test]
    fn test_gcd_with_zero() {
        assert_eq!(gcd(9i64, 0), 9);
        assert_eq!(gcd(0i64, 9), 9);
        assert_eq!(gcd(0i64, -9), -9);
        assert_eq!(gcd(0i64, 0), 0);
    }

    #[test]
    fn test_gcd_sign_follows_recursion() {
        // 4 % -6 = 4, -6 % 4 = -2, 4 % -2 = 0
        assert_eq!(gcd(4i32, -6), -2);
        // -4 % 6 = -4, 6 % -4 = 2, -4 % 2 = 0
        assert_eq!(gcd(-4i32, 6), 2);
        assert_eq!(gcd(-4i32, -6).abs(), 2);
    }

    #[test]
    fn test_gcd_min_is_total() {
        assert_eq!(gcd(i64::MIN, -1), -1);
        assert_eq!(gcd(i8::MIN, -1), -1);
        assert_eq!(gcd(i8::MIN, 64), 64);
    }

    #[test]
    fn test_lcm() {
        assert_eq!(lcm(4i64, 6), 12);
        assert_eq!(lcm(21i64, 6), 42);
        assert_eq!(lcm(7i64, 1), 7);
        assert_eq!(lcm(3i64, 3), 3);
    }

    #[test]
    fn test_checked_lcm() {
        assert_eq!(checked_lcm(4i32, 6), Some(12));
        assert_eq!(checked_lcm(0i32, 0), None);
        assert_eq!(checked_lcm(i64::MAX, i64::MAX - 1), None);
        assert_eq!(checked_lcm(100i8, 3), None);
    }

    #[test]
    fn test_wide_conversion() {
        assert_eq!(i64::MIN.to_wide(), i64::MIN as i128);
        assert_eq!(i8::from_wide_checked(-128i16), Some(-128));
        assert_eq!(i8::from_wide_checked(128i16), None);
        assert_eq!(i64::from_wide_checked(1i128 << 63), None);
    }
}
