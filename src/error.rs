use thiserror::Error;

/// Failures raised while constructing or computing a `Rational<T>`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RationalError {
    /// A denominator of zero was supplied, directly or through a reciprocal
    /// or division by a zero value.
    #[error("rational numbers cannot have a denominator of zero")]
    ZeroDenominator,

    /// The canonical result does not fit in the backing integer type.
    #[error("overflow: canonical result does not fit in the integer type")]
    Overflow,
}

pub type Result<T> = core::result::Result<T, RationalError>;
