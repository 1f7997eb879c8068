//! # Exponential distribution
//!
//! The [Exponential distribution](https://en.wikipedia.org/wiki/Exponential_distribution)
//! is a continuous distribution very important on statistics that measures
//! the time to the next poission event.
//!
//! A poission event does not have memory. Mathematically, if `e` follows
//! an Exponential distribution and `t_1 < t_2`
//! `P(t_1 < e) = P(t_1 < e | t_2 < e)`
//!
//! The Exponential distribution has a parameter: the rate `lambda` wich determines
//! how fast do events happen.
//!
//! The standard exponential (`lambda = 1`) is one of the building blocks of the
//! [Gamma](crate::distributions::Gamma) samplers.

use num_complex::Complex;
use rand::RngCore;

use crate::{
    distribution_trait::Distribution, distributions::Uniform::Uniform, domain::ContinuousDomain,
    errors::RandError,
};

pub const EXPONENTIAL_DOMAIN: ContinuousDomain = ContinuousDomain::From(0.0);

/// An [Exponential distribution](https://en.wikipedia.org/wiki/Exponential_distribution).
#[derive(Debug, Clone, PartialEq)]
pub struct Exponential {
    lambda: f64,
    inv_lambda: f64,
}

/// An iterator that generates infinites samples form the exponential distribution.
pub struct ExponentialGenerator<'a, R: RngCore + ?Sized> {
    inv_lambda: f64,
    rng: &'a mut R,
}

impl Exponential {
    /// Creates a new [Exponential] distribution with rate `lambda`.
    ///
    /// It is requiered that `0.0 < lambda` (and finite), otherwise `lambda = 1.0` is used.
    #[must_use]
    pub fn new(lambda: f64) -> Exponential {
        return Exponential::try_new(lambda).unwrap_or_else(|_| {
            tracing::debug!(lambda, "Invalid exponential rate, using 1.0");
            Exponential::standard()
        });
    }

    /// Same as [Exponential::new] but reports invalid parameters as
    /// [RandError::InvalidParameter].
    pub fn try_new(lambda: f64) -> Result<Exponential, RandError> {
        if !lambda.is_finite() || lambda <= 0.0 {
            return Err(RandError::InvalidParameter);
        }
        return Ok(Exponential {
            lambda,
            inv_lambda: 1.0 / lambda,
        });
    }

    /// The standard exponential distribution (`lambda = 1`).
    #[must_use]
    pub const fn standard() -> Exponential {
        return Exponential {
            lambda: 1.0,
            inv_lambda: 1.0,
        };
    }

    #[must_use]
    pub const fn get_lambda(&self) -> f64 {
        return self.lambda;
    }

    /// Returns a standard exponential variate, by inversion of the cdf.
    #[inline]
    pub fn standard_variate<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
        return -Uniform::standard_variate_positive(rng).ln();
    }

    /// Returns an iterator that generates [Exponential] samples from `rng`.
    pub fn iter<'a, R: RngCore + ?Sized>(&self, rng: &'a mut R) -> ExponentialGenerator<'a, R> {
        return ExponentialGenerator {
            inv_lambda: self.inv_lambda,
            rng,
        };
    }
}

impl Default for Exponential {
    fn default() -> Self {
        Exponential::standard()
    }
}

impl Distribution for Exponential {
    fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        return self.lambda * (-self.lambda * x).exp();
    }

    fn log_pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return f64::NEG_INFINITY;
        }
        return self.lambda.ln() - self.lambda * x;
    }

    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x <= 0.0 {
            return 0.0;
        }
        return -(-self.lambda * x).exp_m1();
    }

    fn survival(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 1.0;
        }
        return (-self.lambda * x).exp();
    }

    fn hazard(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        return self.lambda;
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &EXPONENTIAL_DOMAIN;
    }

    fn expected_value(&self) -> Option<f64> {
        return Some(self.inv_lambda);
    }

    fn variance(&self) -> Option<f64> {
        return Some(self.inv_lambda * self.inv_lambda);
    }

    fn variate<R: RngCore + ?Sized>(&self, rng: &mut R) -> f64 {
        return Exponential::standard_variate(rng) * self.inv_lambda;
    }

    fn quantile(&self, p: f64) -> f64 {
        if p.is_nan() || !(0.0..=1.0).contains(&p) {
            return f64::NAN;
        }
        return -(-p).ln_1p() * self.inv_lambda;
    }

    fn median(&self) -> f64 {
        return std::f64::consts::LN_2 * self.inv_lambda;
    }

    fn mode(&self) -> f64 {
        return 0.0;
    }

    fn skewness(&self) -> Option<f64> {
        return Some(2.0);
    }

    fn excess_kurtosis(&self) -> Option<f64> {
        return Some(6.0);
    }

    fn entropy(&self) -> f64 {
        return 1.0 - self.lambda.ln();
    }

    fn characteristic_function(&self, t: f64) -> Complex<f64> {
        // lambda / (lambda - it)
        return Complex::new(self.lambda, 0.0) / Complex::new(self.lambda, -t);
    }
}

impl<R: RngCore + ?Sized> Iterator for ExponentialGenerator<'_, R> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        return Some(Exponential::standard_variate(self.rng) * self.inv_lambda);
    }
}
