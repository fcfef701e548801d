//! Exact rational number arithmetic over fixed-width signed integers.
//!
//! This library provides `Rational<T>`, a fraction that is always kept in
//! canonical form: numerator and denominator coprime, denominator positive,
//! and zero stored as `0/1`.
//!
//! # Features
//!
//! - **Generic over integer width**: `i8`, `i16`, `i32` and `i64` (the default)
//! - **Always reduced**: every constructor and operator re-canonicalizes
//! - **Overflow handling**: intermediates are computed in a type twice as wide,
//!   so an operation only fails when its exact result does not fit
//! - **Mixed operands**: `Rational + integer` and `integer * Rational` both work
//!
//! # Design Philosophy
//!
//! A `Rational<T>` is an immutable `Copy` value. Fallible operations come in
//! two flavours: `checked_*` methods returning [`Result`], and the `+ - * /`
//! operators which panic on failure the way primitive integer division panics
//! on a zero divisor.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use exact_rational::Rational64;
//!
//! let half = Rational64::new(2, 4)?;
//! assert_eq!(half.numerator(), 1);
//! assert_eq!(half.denominator(), 2);
//! assert_eq!(half.to_string(), "1/2");
//!
//! let sum = half + Rational64::new(1, 3)?;
//! assert_eq!(sum, Rational64::new(5, 6)?);
//!
//! assert_eq!((Rational64::new(5, 4)? + 3).to_string(), "17/4");
//! assert_eq!((3 * half).to_string(), "3/2");
//! # Ok::<(), exact_rational::RationalError>(())
//! ```
//!
//! ## Failure Path
//!
//! ```
//! use exact_rational::{Rational64, RationalError};
//!
//! assert_eq!(Rational64::new(3, 0), Err(RationalError::ZeroDenominator));
//!
//! let zero = Rational64::zero();
//! assert_eq!(Rational64::one().checked_div(&zero), Err(RationalError::ZeroDenominator));
//! assert_eq!(Rational64::new(i64::MIN, -1), Err(RationalError::Overflow));
//! ```

pub mod error;
pub mod integer;

pub use crate::error::{RationalError, Result};
pub use crate::integer::{checked_lcm, gcd, lcm, RationalInteger, WideInteger};

use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};
use num_traits::{CheckedAdd, CheckedDiv, CheckedNeg, CheckedSub, Signed};

/// A rational number in lowest terms.
///
/// # Type Parameter
///
/// `T` must implement [`RationalInteger`]; it defaults to `i64`.
///
/// # Invariants
///
/// - Denominator is never zero, and never negative
/// - `gcd(|numerator|, denominator) == 1`
/// - Zero is always represented as `0/1`
///
/// Because the form is canonical, the derived `PartialEq` and `Hash` compare
/// values rather than representations.
///
/// # Examples
///
/// ```
/// use exact_rational::Rational;
///
/// let r = Rational::<i32>::new(1, -2).unwrap();
/// assert_eq!(r.numerator(), -1);
/// assert_eq!(r.denominator(), 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rational<T: RationalInteger = i64> {
    numer: T,
    denom: T,
}

impl<T: RationalInteger> Rational<T> {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Create a rational and reduce it to canonical form.
    ///
    /// # Errors
    ///
    /// - [`RationalError::ZeroDenominator`] if `denom` is zero
    /// - [`RationalError::Overflow`] if the canonical form does not fit in `T`,
    ///   e.g. `i64::MIN / -1`
    ///
    /// # Examples
    ///
    /// ```
    /// use exact_rational::Rational64;
    ///
    /// let r = Rational64::new(-6, -8).unwrap();
    /// assert_eq!((r.numerator(), r.denominator()), (3, 4));
    ///
    /// let z = Rational64::new(0, -5).unwrap();
    /// assert_eq!((z.numerator(), z.denominator()), (0, 1));
    /// ```
    pub fn new(numer: T, denom: T) -> Result<Self> {
        if denom.is_zero() {
            tracing::debug!(%numer, "rejected rational with zero denominator");
            return Err(RationalError::ZeroDenominator);
        }
        Self::from_wide(numer.to_wide(), denom.to_wide())
    }

    /// Create a rational from an integer (denominator = 1).
    #[inline(always)]
    pub fn from_integer(numer: T) -> Self {
        Self {
            numer,
            denom: T::one(),
        }
    }

    /// Create a rational representing 0.
    #[inline(always)]
    pub fn zero() -> Self {
        Self::from_integer(T::zero())
    }

    /// Create a rational representing 1.
    #[inline(always)]
    pub fn one() -> Self {
        Self::from_integer(T::one())
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// The numerator of the canonical form; carries the sign.
    #[inline(always)]
    pub fn numerator(&self) -> T {
        self.numer
    }

    /// The denominator of the canonical form; always positive.
    #[inline(always)]
    pub fn denominator(&self) -> T {
        self.denom
    }

    /// Check if the rational is zero.
    #[inline(always)]
    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }

    /// Check if the rational is a whole number (denominator is 1).
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denom == T::one()
    }

    /// Check if the rational is strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.numer.is_positive()
    }

    /// Check if the rational is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.numer.is_negative()
    }

    /// Approximate conversion to f64.
    ///
    /// Magnitudes beyond 2^53 lose precision, as with `i64 as f64`.
    pub fn to_f64(&self) -> f64 {
        // ToPrimitive::to_f64 never fails for i8..=i64, so NaN is unreachable.
        match (self.numer.to_f64(), self.denom.to_f64()) {
            (Some(n), Some(d)) => n / d,
            _ => f64::NAN,
        }
    }

    // ========================================================================
    // REDUCTION
    // ========================================================================

    /// Reduce a wide numerator/denominator pair and narrow it back to `T`.
    ///
    /// `denom` must be non-zero.
    fn from_wide(numer: T::Wide, denom: T::Wide) -> Result<Self> {
        let g = gcd(numer, denom);
        let mut numer = numer.checked_div(&g).ok_or(RationalError::Overflow)?;
        let mut denom = denom.checked_div(&g).ok_or(RationalError::Overflow)?;

        // gcd may come back negative, so the sign fold happens after dividing.
        if denom.is_negative() {
            numer = numer.checked_neg().ok_or(RationalError::Overflow)?;
            denom = denom.checked_neg().ok_or(RationalError::Overflow)?;
        }

        match (T::from_wide_checked(numer), T::from_wide_checked(denom)) {
            (Some(numer), Some(denom)) => Ok(Self { numer, denom }),
            _ => {
                tracing::debug!(%numer, %denom, "canonical rational does not fit the integer type");
                Err(RationalError::Overflow)
            }
        }
    }

    #[inline(always)]
    fn to_wide_parts(self) -> (T::Wide, T::Wide) {
        (self.numer.to_wide(), self.denom.to_wide())
    }

    /// Scale both numerators onto the common denominator `lcm(b, d)`.
    fn over_common_denom(&self, other: &Self) -> Result<(T::Wide, T::Wide, T::Wide)> {
        let (a, b) = self.to_wide_parts();
        let (c, d) = other.to_wide_parts();
        let l = checked_lcm(b, d).ok_or(RationalError::Overflow)?;
        Ok((wide_mul(a, l / b)?, wide_mul(c, l / d)?, l))
    }

    // ========================================================================
    // ARITHMETIC
    // ========================================================================

    /// Add two rationals.
    ///
    /// # Examples
    ///
    /// ```
    /// use exact_rational::Rational64;
    ///
    /// let a = Rational64::new(1, 2).unwrap();
    /// let b = Rational64::new(1, 3).unwrap();
    /// assert_eq!(a.checked_add(&b), Rational64::new(5, 6));
    /// ```
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        let (lhs, rhs, l) = self.over_common_denom(other)?;
        Self::from_wide(lhs.checked_add(&rhs).ok_or(RationalError::Overflow)?, l)
    }

    /// Subtract another rational.
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        let (lhs, rhs, l) = self.over_common_denom(other)?;
        Self::from_wide(lhs.checked_sub(&rhs).ok_or(RationalError::Overflow)?, l)
    }

    /// Multiply two rationals.
    pub fn checked_mul(&self, other: &Self) -> Result<Self> {
        let (a, b) = self.to_wide_parts();
        let (c, d) = other.to_wide_parts();
        Self::from_wide(wide_mul(a, c)?, wide_mul(b, d)?)
    }

    /// Divide by another rational, i.e. multiply by its reciprocal.
    ///
    /// The reciprocal stays in the wide type, so `MIN / MIN` yields `1` even
    /// though `1/MIN` has no canonical form in `T`.
    ///
    /// # Errors
    ///
    /// [`RationalError::ZeroDenominator`] if `other` is zero.
    pub fn checked_div(&self, other: &Self) -> Result<Self> {
        if other.is_zero() {
            tracing::debug!(dividend = %self, "rejected division by zero");
            return Err(RationalError::ZeroDenominator);
        }
        let (a, b) = self.to_wide_parts();
        let (c, d) = other.to_wide_parts();
        Self::from_wide(wide_mul(a, d)?, wide_mul(b, c)?)
    }

    /// Get the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// [`RationalError::ZeroDenominator`] if `self` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use exact_rational::Rational64;
    ///
    /// let r = Rational64::new(-3, 4).unwrap();
    /// assert_eq!(r.reciprocal().unwrap().to_string(), "-4/3");
    /// assert!(Rational64::zero().reciprocal().is_err());
    /// ```
    pub fn reciprocal(&self) -> Result<Self> {
        Self::new(self.denom, self.numer)
    }

    /// Negate, failing only for a numerator of `T::MIN`.
    pub fn checked_neg(&self) -> Result<Self> {
        let numer = self.numer.checked_neg().ok_or(RationalError::Overflow)?;
        Ok(Self {
            numer,
            denom: self.denom,
        })
    }

    /// Absolute value, failing only for a numerator of `T::MIN`.
    pub fn checked_abs(&self) -> Result<Self> {
        if self.is_negative() {
            self.checked_neg()
        } else {
            Ok(*self)
        }
    }

    /// Absolute value.
    ///
    /// # Panics
    ///
    /// Panics if the numerator is `T::MIN`.
    #[track_caller]
    pub fn abs(&self) -> Self {
        unwrap_op(self.checked_abs(), "abs")
    }
}

/// The reciprocal of `r`; see [`Rational::reciprocal`].
pub fn reciprocal<T: RationalInteger>(r: &Rational<T>) -> Result<Rational<T>> {
    r.reciprocal()
}

// ============================================================================
// HELPERS
// ============================================================================

#[inline(always)]
fn wide_mul<W: WideInteger>(x: W, y: W) -> Result<W> {
    x.checked_mul(&y).ok_or(RationalError::Overflow)
}

#[track_caller]
fn unwrap_op<T: RationalInteger>(result: Result<Rational<T>>, op: &str) -> Rational<T> {
    match result {
        Ok(value) => value,
        Err(err) => panic!("rational {op} failed: {err}"),
    }
}

// ============================================================================
// TRAIT IMPLEMENTATIONS
// ============================================================================

impl<T: RationalInteger> Default for Rational<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: RationalInteger> From<T> for Rational<T> {
    #[inline(always)]
    fn from(n: T) -> Self {
        Self::from_integer(n)
    }
}

impl<T: RationalInteger> fmt::Display for Rational<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl<T: RationalInteger> Neg for Rational<T> {
    type Output = Self;
    #[track_caller]
    fn neg(self) -> Self {
        unwrap_op(self.checked_neg(), "neg")
    }
}

/// Operator impls for `Rational op Rational`, `&Rational op &Rational` and
/// `Rational op T`, all panicking on the checked method's error.
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl<T: RationalInteger> $trait for Rational<T> {
            type Output = Self;
            #[inline]
            #[track_caller]
            fn $method(self, other: Self) -> Self {
                unwrap_op(self.$checked(&other), stringify!($method))
            }
        }

        impl<T: RationalInteger> $trait for &Rational<T> {
            type Output = Rational<T>;
            #[inline]
            #[track_caller]
            fn $method(self, other: Self) -> Rational<T> {
                unwrap_op(self.$checked(other), stringify!($method))
            }
        }

        impl<T: RationalInteger> $trait<T> for Rational<T> {
            type Output = Self;
            #[inline]
            #[track_caller]
            fn $method(self, other: T) -> Self {
                unwrap_op(
                    self.$checked(&Rational::from_integer(other)),
                    stringify!($method),
                )
            }
        }
    };
}

impl_binary_op!(Add, add, checked_add);
impl_binary_op!(Sub, sub, checked_sub);
impl_binary_op!(Mul, mul, checked_mul);
impl_binary_op!(Div, div, checked_div);

/// Operator impls with a primitive on the left, e.g. `3 * Rational64`.
macro_rules! impl_integer_lhs_ops {
    ($($int:ty),*) => {
        $(
            impl Add<Rational<$int>> for $int {
                type Output = Rational<$int>;
                #[track_caller]
                fn add(self, other: Rational<$int>) -> Rational<$int> {
                    Rational::from_integer(self) + other
                }
            }

            impl Sub<Rational<$int>> for $int {
                type Output = Rational<$int>;
                #[track_caller]
                fn sub(self, other: Rational<$int>) -> Rational<$int> {
                    Rational::from_integer(self) - other
                }
            }

            impl Mul<Rational<$int>> for $int {
                type Output = Rational<$int>;
                #[track_caller]
                fn mul(self, other: Rational<$int>) -> Rational<$int> {
                    Rational::from_integer(self) * other
                }
            }

            impl Div<Rational<$int>> for $int {
                type Output = Rational<$int>;
                #[track_caller]
                fn div(self, other: Rational<$int>) -> Rational<$int> {
                    Rational::from_integer(self) / other
                }
            }
        )*
    };
}

impl_integer_lhs_ops!(i8, i16, i32, i64);

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// Rational using 8-bit integers.
pub type Rational8 = Rational<i8>;

/// Rational using 16-bit integers.
pub type Rational16 = Rational<i16>;

/// Rational using 32-bit integers.
pub type Rational32 = Rational<i32>;

/// Rational using 64-bit integers.
pub type Rational64 = Rational<i64>;
