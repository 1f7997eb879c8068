//! # Euclid
//!
//! Euclid contains the uscefull math functions the distributions are built on:
//!
//!  - [combinatorics]: factorials, binomial coefficients, Bernoulli and
//!     harmonic numbers.
//!  - [special]: gamma, digamma, trigamma, incomplete gamma, beta, zeta and
//!     Bessel functions.
//!  - [calculus]: numerical integration, root finding and minimization.
//!
//! Everything is reexported here, so `euclid::ln_gamma` works as well as
//! `euclid::special::ln_gamma`.
//!
//! All the functions are pure and thread safe.

pub mod calculus;
pub mod combinatorics;
pub mod special;

pub use calculus::*;
pub use combinatorics::*;
pub use special::*;

/// The [moments](https://en.wikipedia.org/wiki/Moment_(mathematics)) of a function
/// are some values that provide information about the shape of the function.
/// The moments can have be of any of the 3 variants in this enum:
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Moments {
    /// `E[X^k]`
    #[default]
    Raw,
    /// `E[(X - mean)^k]`
    Central,
    /// `E[((X - mean) / std_dev)^k]`
    Standarized,
}

/// `sqrt(2 * pi)`
pub const SQRT_2PI: f64 = 2.506_628_274_631_000_7;

/// `ln(sqrt(2 * pi))`
pub const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_8;

/// The [Euler–Mascheroni constant](https://en.wikipedia.org/wiki/Euler%27s_constant).
pub const EULER_MASCHERONI: f64 = 0.577_215_664_901_532_9;

/// Determines if `a` and `b` are equal up to a relative tolerance of `epsilon`.
///
/// `|a - b| <= epsilon * max(|a|, |b|)`
///
/// 2 zeros are close and any comparison with a NaN is `false`.
#[must_use]
pub fn are_close(a: f64, b: f64, epsilon: f64) -> bool {
    if a == b {
        return true;
    }
    let scale: f64 = a.abs().max(b.abs());
    return (a - b).abs() <= epsilon * scale;
}

/// [Linear interpolation](https://en.wikipedia.org/wiki/Linear_interpolation)
/// between `(x0, y0)` and `(x1, y1)` evaluated at `x`.
///
/// If `x0 == x1` the line is vertical and `y0` is returned.
#[must_use]
pub fn linear_interpolation(x: f64, x0: f64, y0: f64, x1: f64, y1: f64) -> f64 {
    if x0 == x1 {
        return y0;
    }
    return y0 + (y1 - y0) * (x - x0) / (x1 - x0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closeness() {
        assert!(are_close(1.0, 1.0 + 1e-9, 1e-6));
        assert!(!are_close(1.0, 1.1, 1e-6));
        assert!(are_close(0.0, 0.0, 1e-6));
        assert!(are_close(1e12, 1e12 + 1.0, 1e-6));
        assert!(!are_close(f64::NAN, f64::NAN, 1e-6));
    }

    #[test]
    fn interpolation() {
        assert_eq!(linear_interpolation(0.5, 0.0, 0.0, 1.0, 2.0), 1.0);
        assert_eq!(linear_interpolation(3.0, 1.0, 5.0, 1.0, 7.0), 5.0);
    }
}
