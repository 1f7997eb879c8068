//! # Bernoulli distribution
//!
//! The [Bernoulli distribution](https://en.wikipedia.org/wiki/Bernoulli_distribution)
//! is a discrete distribution that models a single trial with probability
//! of success `p`: `1` with probability `p` and `0` with probability `1 - p`.
//!
//! Summing Bernoulli trials is one of the regimes of the
//! [Binomial](crate::distributions::Binomial) sampler.
//!

use num_complex::Complex;
use rand::RngCore;

use crate::{
    distribution_trait::DiscreteDistribution, distributions::Uniform::Uniform,
    domain::DiscreteDomain, errors::RandError,
};

pub const BERNOULLI_DOMAIN: DiscreteDomain = DiscreteDomain::Range(0, 1);

#[derive(Debug, Clone, PartialEq)]
pub struct Bernoulli {
    p: f64,
}

/// Clamps a probability into `[0, 1]`. A NaN becomes `0.5`.
pub(crate) fn clamp_probability(p: f64) -> f64 {
    if p.is_nan() {
        tracing::debug!("NaN probability, using 0.5");
        return 0.5;
    }
    if !(0.0..=1.0).contains(&p) {
        tracing::debug!(p, "Probability outside [0, 1], clamping it");
    }
    return p.clamp(0.0, 1.0);
}

impl Bernoulli {
    /// Creates a new [Bernoulli] distribution.
    ///
    ///  - `p` indicates the probability of success (returning `1`).
    ///  - `p` outside `[0.0, 1.0]` is clamped into the interval. A NaN becomes `0.5`.
    #[must_use]
    pub fn new(p: f64) -> Bernoulli {
        return Bernoulli {
            p: clamp_probability(p),
        };
    }

    /// Same as [Bernoulli::new] but reports invalid parameters as
    /// [RandError::InvalidParameter].
    pub fn try_new(p: f64) -> Result<Bernoulli, RandError> {
        if !(0.0..=1.0).contains(&p) {
            return Err(RandError::InvalidParameter);
        }
        return Ok(Bernoulli { p });
    }

    /// Return `p` (probability of success).
    #[must_use]
    pub const fn get_p(&self) -> f64 {
        return self.p;
    }

    /// A fair coin: `true` with probability `0.5`. Uses a single bit.
    #[inline]
    pub fn standard_variate<R: RngCore + ?Sized>(rng: &mut R) -> bool {
        return (rng.next_u32() >> 31) == 1;
    }

    /// Returns `true` with probability `p`.
    #[inline]
    pub fn variate_with<R: RngCore + ?Sized>(p: f64, rng: &mut R) -> bool {
        return Uniform::standard_variate(rng) < p;
    }
}

impl Default for Bernoulli {
    fn default() -> Self {
        Bernoulli::new(0.5)
    }
}

impl DiscreteDistribution for Bernoulli {
    fn pmf(&self, x: i64) -> f64 {
        return match x {
            0 => 1.0 - self.p,
            1 => self.p,
            _ => 0.0,
        };
    }

    fn cdf(&self, x: i64) -> f64 {
        if x < 0 {
            return 0.0;
        }
        if x == 0 {
            return 1.0 - self.p;
        }
        return 1.0;
    }

    fn get_domain(&self) -> &DiscreteDomain {
        return &BERNOULLI_DOMAIN;
    }

    fn expected_value(&self) -> Option<f64> {
        return Some(self.p);
    }

    fn variance(&self) -> Option<f64> {
        return Some(self.p * (1.0 - self.p));
    }

    fn variate<R: RngCore + ?Sized>(&self, rng: &mut R) -> i64 {
        return i64::from(Bernoulli::variate_with(self.p, rng));
    }

    fn mode(&self) -> f64 {
        return if self.p <= 0.5 { 0.0 } else { 1.0 };
    }

    fn skewness(&self) -> Option<f64> {
        let q: f64 = 1.0 - self.p;
        return Some((q - self.p) / (self.p * q).sqrt());
    }

    fn excess_kurtosis(&self) -> Option<f64> {
        let pq: f64 = self.p * (1.0 - self.p);
        return Some((1.0 - 6.0 * pq) / pq);
    }

    fn characteristic_function(&self, t: f64) -> Complex<f64> {
        return Complex::new(1.0 - self.p + self.p * t.cos(), self.p * t.sin());
    }
}
