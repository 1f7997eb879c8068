//! # Uniform distribution
//!
//! The [uniform distribution](https://en.wikipedia.org/wiki/Continuous_uniform_distribution)
//! is a continuous distributions where all possible outcomes in the interval `[a, b]` have
//! equal likelyhood of happening.
//!
//! [Uniform::standard_variate] (a uniform `[0, 1)` value) is the source of
//! every other sampler of the library.
//!

use num_complex::Complex;
use rand::RngCore;

use crate::{distribution_trait::Distribution, domain::ContinuousDomain, errors::RandError};

/// `2^-53`
const INV_2_POW_53: f64 = 1.0 / 9_007_199_254_740_992.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Uniform {
    domain: ContinuousDomain,
    /// The minimum value
    a: f64,
    /// The maximum value
    b: f64,
}

impl Uniform {
    /// Creates a new [uniform distribution](https://en.wikipedia.org/wiki/Continuous_uniform_distribution).
    ///
    ///  - `a` indicates the minimum value.
    ///  - `b` indicates the maximum value.
    ///
    /// If `a < b` is not fulfilled or any of them is not finite, the standard
    /// uniform `[0, 1]` is returned instead.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Uniform {
        return Uniform::try_new(a, b).unwrap_or_else(|_| {
            tracing::debug!(a, b, "Invalid uniform bounds, using [0, 1]");
            Uniform::standard()
        });
    }

    /// Same as [Uniform::new] but reports invalid parameters as
    /// [RandError::InvalidParameter] instead of clamping them.
    pub fn try_new(a: f64, b: f64) -> Result<Uniform, RandError> {
        if !a.is_finite() || !b.is_finite() || b <= a {
            return Err(RandError::InvalidParameter);
        }

        let domain: ContinuousDomain = ContinuousDomain::Range(a, b);
        return Ok(Uniform { domain, a, b });
    }

    /// The standard uniform distribution over `[0, 1]`.
    #[must_use]
    pub const fn standard() -> Uniform {
        return Uniform {
            domain: ContinuousDomain::Range(0.0, 1.0),
            a: 0.0,
            b: 1.0,
        };
    }

    /// Return `a` (minimum value).
    #[must_use]
    pub const fn get_a(&self) -> f64 {
        return self.a;
    }

    /// Return `b` (maximum value).
    #[must_use]
    pub const fn get_b(&self) -> f64 {
        return self.b;
    }

    /// Returns a value uniformly distributed in `[0, 1)`.
    ///
    /// Uses the top 53 bits of a 64 bit draw, so every representable
    /// multiple of `2^-53` is equally likely.
    #[inline]
    pub fn standard_variate<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
        return (rng.next_u64() >> 11) as f64 * INV_2_POW_53;
    }

    /// Returns a value uniformly distributed in `(0, 1]`. Safe to pass to `ln`.
    #[inline]
    pub fn standard_variate_positive<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
        return 1.0 - Uniform::standard_variate(rng);
    }
}

impl Default for Uniform {
    fn default() -> Self {
        Uniform::standard()
    }
}

impl Distribution for Uniform {
    fn pdf(&self, x: f64) -> f64 {
        if !self.domain.contains(x) {
            return 0.0;
        }
        return 1.0 / (self.b - self.a);
    }

    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x <= self.a {
            return 0.0;
        }
        if self.b <= x {
            return 1.0;
        }
        return (x - self.a) / (self.b - self.a);
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &self.domain;
    }

    fn expected_value(&self) -> Option<f64> {
        return Some(0.5 * (self.a + self.b));
    }

    fn variance(&self) -> Option<f64> {
        let d: f64 = self.b - self.a;
        return Some(d * d / 12.0);
    }

    fn variate<R: RngCore + ?Sized>(&self, rng: &mut R) -> f64 {
        return self.a + Uniform::standard_variate(rng) * (self.b - self.a);
    }

    fn sample<R: RngCore + ?Sized>(&self, rng: &mut R, buffer: &mut [f64]) {
        let range: f64 = self.b - self.a;
        for slot in buffer.iter_mut() {
            *slot = self.a + Uniform::standard_variate(rng) * range;
        }
    }

    fn quantile(&self, p: f64) -> f64 {
        if p.is_nan() || !(0.0..=1.0).contains(&p) {
            return f64::NAN;
        }
        return self.a + p * (self.b - self.a);
    }

    fn median(&self) -> f64 {
        return 0.5 * (self.a + self.b);
    }

    /// Every point of the domain is a mode. We return the middle one.
    fn mode(&self) -> f64 {
        return 0.5 * (self.a + self.b);
    }

    fn skewness(&self) -> Option<f64> {
        return Some(0.0);
    }

    fn excess_kurtosis(&self) -> Option<f64> {
        return Some(-1.2);
    }

    fn entropy(&self) -> f64 {
        return (self.b - self.a).ln();
    }

    fn characteristic_function(&self, t: f64) -> Complex<f64> {
        if t == 0.0 {
            return Complex::new(1.0, 0.0);
        }
        // (e^(itb) - e^(ita)) / (it(b - a))
        let numerator: Complex<f64> =
            Complex::new(0.0, t * self.b).exp() - Complex::new(0.0, t * self.a).exp();
        let denominator: Complex<f64> = Complex::new(0.0, t * (self.b - self.a));
        return numerator / denominator;
    }
}
