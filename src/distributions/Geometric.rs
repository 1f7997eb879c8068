//! # Geometric distribution
//!
//! The [geometric distribution](https://en.wikipedia.org/wiki/Geometric_distribution)
//! is a discrete distribution that represents the number of failed
//! [Bernoulli](crate::distributions::Bernoulli::Bernoulli) trials before
//! the first success.
//!
//! Note that we count the *failures* (the domain starts at `0`), not the
//! total number of trials.
//!
//! The waiting regime of the [Binomial](crate::distributions::Binomial)
//! sampler is built on geometric variates.
//!

use num_complex::Complex;
use rand::RngCore;

use crate::{
    distribution_trait::DiscreteDistribution, distributions::Exponential::Exponential,
    domain::DiscreteDomain, errors::RandError,
};

pub const GEOMETRIC_DOMAIN: DiscreteDomain = DiscreteDomain::From(0);

#[derive(Debug, Clone, PartialEq)]
pub struct Geometric {
    p: f64,
    /// `-1 / ln(1 - p)`
    inv_log_q: f64,
}

impl Geometric {
    /// Creates a new [Geometric] distribution.
    ///
    ///  - `p` indicates the probability of success.
    ///  - `p` must belong in the interval `(0.0, 1.0]`. If `p <= 0.0` or it is
    ///     a NaN, `0.5` is used. Values over `1.0` are clamped to `1.0`.
    #[must_use]
    pub fn new(p: f64) -> Geometric {
        let p: f64 = if p.is_nan() || p <= 0.0 {
            tracing::debug!(p, "Invalid geometric probability, using 0.5");
            0.5
        } else if 1.0 < p {
            tracing::debug!(p, "Geometric probability over 1, clamping it");
            1.0
        } else {
            p
        };

        return Geometric {
            p,
            inv_log_q: Geometric::inv_log_q(p),
        };
    }

    /// Same as [Geometric::new] but reports invalid parameters as
    /// [RandError::InvalidParameter].
    pub fn try_new(p: f64) -> Result<Geometric, RandError> {
        if !(0.0 < p && p <= 1.0) {
            return Err(RandError::InvalidParameter);
        }
        return Ok(Geometric::new(p));
    }

    /// Return `p` (probability of success).
    #[must_use]
    pub const fn get_p(&self) -> f64 {
        return self.p;
    }

    #[inline]
    fn inv_log_q(p: f64) -> f64 {
        return -1.0 / (-p).ln_1p();
    }

    /// Draws the number of failures before the first success of trials with
    /// success probability `p` (`0 < p <= 1`), by inversion.
    ///
    /// Saturates at [u64::MAX].
    pub fn variate_with<R: RngCore + ?Sized>(p: f64, rng: &mut R) -> u64 {
        if 1.0 <= p {
            return 0;
        }
        return Geometric::variate_inverse(Geometric::inv_log_q(p), rng);
    }

    #[inline]
    fn variate_inverse<R: RngCore + ?Sized>(inv_log_q: f64, rng: &mut R) -> u64 {
        // `as` saturates (and maps NaN to 0)
        return (Exponential::standard_variate(rng) * inv_log_q).floor() as u64;
    }
}

impl Default for Geometric {
    fn default() -> Self {
        Geometric::new(0.5)
    }
}

impl DiscreteDistribution for Geometric {
    fn pmf(&self, x: i64) -> f64 {
        if x < 0 {
            return 0.0;
        }
        // p * (1 - p)^x
        return self.p * (x as f64 * (-self.p).ln_1p()).exp();
    }

    fn log_pmf(&self, x: i64) -> f64 {
        if x < 0 {
            return f64::NEG_INFINITY;
        }
        return self.p.ln() + x as f64 * (-self.p).ln_1p();
    }

    fn cdf(&self, x: i64) -> f64 {
        if x < 0 {
            return 0.0;
        }
        // 1 - (1 - p)^(x + 1)
        return -((x as f64 + 1.0) * (-self.p).ln_1p()).exp_m1();
    }

    fn survival(&self, x: i64) -> f64 {
        if x < 0 {
            return 1.0;
        }
        return ((x as f64 + 1.0) * (-self.p).ln_1p()).exp();
    }

    fn get_domain(&self) -> &DiscreteDomain {
        return &GEOMETRIC_DOMAIN;
    }

    fn expected_value(&self) -> Option<f64> {
        return Some((1.0 - self.p) / self.p);
    }

    fn variance(&self) -> Option<f64> {
        return Some((1.0 - self.p) / (self.p * self.p));
    }

    fn variate<R: RngCore + ?Sized>(&self, rng: &mut R) -> i64 {
        if 1.0 <= self.p {
            return 0;
        }
        let value: u64 = Geometric::variate_inverse(self.inv_log_q, rng);
        return i64::try_from(value).unwrap_or(i64::MAX);
    }

    fn quantile(&self, p: f64) -> f64 {
        if p.is_nan() || !(0.0..=1.0).contains(&p) {
            return f64::NAN;
        }
        if p == 1.0 {
            return f64::INFINITY;
        }
        if 1.0 <= self.p {
            return 0.0;
        }
        // smallest k with 1 - q^(k + 1) >= p
        let k: f64 = ((-p).ln_1p() / (-self.p).ln_1p()).ceil() - 1.0;
        return k.max(0.0);
    }

    fn mode(&self) -> f64 {
        return 0.0;
    }

    fn skewness(&self) -> Option<f64> {
        return Some((2.0 - self.p) / (1.0 - self.p).sqrt());
    }

    fn excess_kurtosis(&self) -> Option<f64> {
        return Some(6.0 + self.p * self.p / (1.0 - self.p));
    }

    fn characteristic_function(&self, t: f64) -> Complex<f64> {
        // p / (1 - (1 - p) e^(it))
        let q: f64 = 1.0 - self.p;
        let denominator: Complex<f64> = Complex::new(1.0 - q * t.cos(), -q * t.sin());
        return Complex::new(self.p, 0.0) / denominator;
    }
}
