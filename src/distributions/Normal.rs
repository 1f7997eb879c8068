//! # Normal distribution
//!
//! The [Normal distribution](https://en.wikipedia.org/wiki/Normal_distribution)
//! ia a very important continuous probability distribution.
//!
//! We implement the [Normal] distribution and the [StdNormal], wich is the same as [Normal]
//! but for fixed `mean = 0.0` and `std_dev = 1.0`.
//!
//! Standard normal variates are drawn with the
//! [Marsaglia polar method](https://en.wikipedia.org/wiki/Marsaglia_polar_method).
//! The half-integer shape regime of the [Gamma](crate::distributions::Gamma)
//! sampler is built on them.
//!

use num_complex::Complex;
use rand::RngCore;
use std::f64::consts::{E, PI};

use crate::{
    distribution_trait::Distribution,
    distributions::{Uniform::Uniform, rejection_loop},
    domain::ContinuousDomain,
    errors::RandError,
    euclid,
};

/// `1 / sqrt(2 * pi)`
const INV_SQRT_2_PI: f64 = 0.398_942_280_401_432_7;

#[derive(Debug, Clone, PartialEq)]
pub struct StdNormal {
    domain: ContinuousDomain,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Normal {
    std_normal: StdNormal,
    /// The mean of the distribution
    mean: f64,
    /// The standard deviation of the distribution
    standard_deviation: f64,
}

impl StdNormal {
    /// Create a Standard normal distribution. Has a mean of `0.0` and a standard
    /// deviation of `1.0`.
    #[must_use]
    pub const fn new() -> StdNormal {
        return StdNormal {
            domain: ContinuousDomain::Reals,
        };
    }

    /// Draws a pair of independent standard normal values.
    pub fn try_variate_pair<R: RngCore + ?Sized>(rng: &mut R) -> Result<(f64, f64), RandError> {
        return rejection_loop(|| {
            let u: f64 = 2.0 * Uniform::standard_variate(rng) - 1.0;
            let v: f64 = 2.0 * Uniform::standard_variate(rng) - 1.0;
            let s: f64 = u * u + v * v;
            if s == 0.0 || 1.0 <= s {
                return None;
            }
            let factor: f64 = (-2.0 * s.ln() / s).sqrt();
            return Some((u * factor, v * factor));
        });
    }

    /// Returns a standard normal variate.
    ///
    /// Returns NaN if the polar rejection exhausted it's iteration cap.
    pub fn standard_variate<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
        return StdNormal::try_variate_pair(rng).map_or(f64::NAN, |(z, _)| z);
    }
}

impl Default for StdNormal {
    fn default() -> Self {
        StdNormal::new()
    }
}

impl Normal {
    /// Create a [Normal] distribution.
    ///
    ///  - If the `mean` is not finite, `0.0` is used.
    ///  - If the `standard_deviation` is not finite or not stricly positive, `1.0` is used.
    #[must_use]
    pub fn new(mean: f64, standard_deviation: f64) -> Normal {
        let mean: f64 = if mean.is_finite() {
            mean
        } else {
            tracing::debug!(mean, "Invalid normal mean, using 0.0");
            0.0
        };
        let standard_deviation: f64 = if standard_deviation.is_finite() && 0.0 < standard_deviation
        {
            standard_deviation
        } else {
            tracing::debug!(standard_deviation, "Invalid normal standard deviation, using 1.0");
            1.0
        };

        return Normal {
            std_normal: StdNormal::new(),
            mean,
            standard_deviation,
        };
    }

    /// Same as [Normal::new] but reports invalid parameters as
    /// [RandError::InvalidParameter].
    pub fn try_new(mean: f64, standard_deviation: f64) -> Result<Normal, RandError> {
        if !mean.is_finite() || !standard_deviation.is_finite() || standard_deviation <= 0.0 {
            return Err(RandError::InvalidParameter);
        }
        return Ok(Normal::new(mean, standard_deviation));
    }

    /// Returns the mean, the first parameter of the normal distribution.
    #[must_use]
    pub const fn get_mean(&self) -> f64 {
        return self.mean;
    }

    /// Returns the standard deviation, the second parameter of the normal distribution.
    #[must_use]
    pub const fn get_standard_deviation(&self) -> f64 {
        return self.standard_deviation;
    }

    #[inline]
    fn standarize(&self, x: f64) -> f64 {
        return (x - self.mean) / self.standard_deviation;
    }
}

impl Default for Normal {
    fn default() -> Self {
        Normal::new(0.0, 1.0)
    }
}

impl Distribution for StdNormal {
    fn pdf(&self, x: f64) -> f64 {
        return INV_SQRT_2_PI * (-x * x * 0.5).exp();
    }

    fn log_pdf(&self, x: f64) -> f64 {
        return -euclid::LN_SQRT_2PI - 0.5 * x * x;
    }

    /// `cdf(x) = (1 + sign(x) * P(1/2, x^2/2)) / 2` where `P` is the
    /// regularized lower incomplete gamma function.
    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        let half_x_2: f64 = 0.5 * x * x;
        if x < 0.0 {
            return 0.5 * euclid::regularized_upper_inc_gamma(0.5, half_x_2);
        }
        return 0.5 + 0.5 * euclid::regularized_lower_inc_gamma(0.5, half_x_2);
    }

    fn survival(&self, x: f64) -> f64 {
        return self.cdf(-x);
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &self.domain;
    }

    fn expected_value(&self) -> Option<f64> {
        return Some(0.0);
    }

    fn variance(&self) -> Option<f64> {
        return Some(1.0);
    }

    fn variate<R: RngCore + ?Sized>(&self, rng: &mut R) -> f64 {
        return StdNormal::standard_variate(rng);
    }

    fn sample<R: RngCore + ?Sized>(&self, rng: &mut R, buffer: &mut [f64]) {
        // the polar method produces 2 values per acceptance
        let mut chunks = buffer.chunks_exact_mut(2);
        for pair in &mut chunks {
            let (z1, z2): (f64, f64) =
                StdNormal::try_variate_pair(rng).unwrap_or((f64::NAN, f64::NAN));
            pair[0] = z1;
            pair[1] = z2;
        }
        for slot in chunks.into_remainder() {
            *slot = StdNormal::standard_variate(rng);
        }
    }

    fn median(&self) -> f64 {
        return 0.0;
    }

    fn mode(&self) -> f64 {
        return 0.0;
    }

    fn skewness(&self) -> Option<f64> {
        return Some(0.0);
    }

    fn excess_kurtosis(&self) -> Option<f64> {
        return Some(0.0);
    }

    fn entropy(&self) -> f64 {
        return 0.5 * (2.0 * PI * E).ln();
    }

    fn characteristic_function(&self, t: f64) -> Complex<f64> {
        return Complex::new((-0.5 * t * t).exp(), 0.0);
    }
}

impl Distribution for Normal {
    fn pdf(&self, x: f64) -> f64 {
        return self.std_normal.pdf(self.standarize(x)) / self.standard_deviation;
    }

    fn log_pdf(&self, x: f64) -> f64 {
        return self.std_normal.log_pdf(self.standarize(x)) - self.standard_deviation.ln();
    }

    fn cdf(&self, x: f64) -> f64 {
        return self.std_normal.cdf(self.standarize(x));
    }

    fn survival(&self, x: f64) -> f64 {
        return self.std_normal.survival(self.standarize(x));
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return self.std_normal.get_domain();
    }

    fn expected_value(&self) -> Option<f64> {
        return Some(self.mean);
    }

    fn variance(&self) -> Option<f64> {
        return Some(self.standard_deviation * self.standard_deviation);
    }

    fn variate<R: RngCore + ?Sized>(&self, rng: &mut R) -> f64 {
        return self.mean + self.standard_deviation * StdNormal::standard_variate(rng);
    }

    fn sample<R: RngCore + ?Sized>(&self, rng: &mut R, buffer: &mut [f64]) {
        self.std_normal.sample(rng, buffer);
        for x in buffer.iter_mut() {
            *x = self.mean + self.standard_deviation * *x;
        }
    }

    fn median(&self) -> f64 {
        return self.mean;
    }

    fn mode(&self) -> f64 {
        return self.mean;
    }

    fn skewness(&self) -> Option<f64> {
        return Some(0.0);
    }

    fn excess_kurtosis(&self) -> Option<f64> {
        return Some(0.0);
    }

    fn entropy(&self) -> f64 {
        return self.std_normal.entropy() + self.standard_deviation.ln();
    }

    fn characteristic_function(&self, t: f64) -> Complex<f64> {
        let s: f64 = self.standard_deviation * t;
        // e^(i mean t - s^2 / 2)
        return Complex::from_polar((-0.5 * s * s).exp(), self.mean * t);
    }
}
