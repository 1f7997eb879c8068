//! # Chi squared distribution
//!
//! The [chi squared distribution](https://en.wikipedia.org/wiki/Chi-squared_distribution)
//! is a continuous probability distribution. It is the distribution of the
//! sum of `k` squared independent standard normals.
//!
//! It's parameter `k` is the degrees of freedom (a positive integer).
//!
//! ChiSquared(k) ~ Gamma(a = k/2, beta = 1/2)
//!
//! Every function is computed trough the wrapped [Gamma], so both are always
//! consistent. Only the degrees of freedom can be changed.

use num_complex::Complex;
use rand::RngCore;

use crate::{
    distribution_trait::Distribution,
    distributions::Gamma::{GAMMA_DOMAIN, Gamma},
    domain::ContinuousDomain,
    errors::RandError,
};

pub const CHI_SQUARED_DOMAIN: ContinuousDomain = GAMMA_DOMAIN;

#[derive(Debug, Clone, PartialEq)]
pub struct ChiSquared {
    degrees_of_freedom: u32,
    gamma: Gamma,
}

impl ChiSquared {
    /// Creates a new [ChiSquared] distribution.
    ///
    /// If `degrees_of_freedom` is `0`, `1` is used.
    #[must_use]
    pub fn new(degrees_of_freedom: u32) -> ChiSquared {
        let degrees_of_freedom: u32 = if degrees_of_freedom == 0 {
            tracing::debug!("Chi squared with 0 degrees of freedom, using 1");
            1
        } else {
            degrees_of_freedom
        };

        return ChiSquared {
            degrees_of_freedom,
            gamma: Gamma::new(f64::from(degrees_of_freedom) * 0.5, 0.5),
        };
    }

    /// Same as [ChiSquared::new] but reports `0` degrees of freedom as
    /// [RandError::InvalidParameter].
    pub fn try_new(degrees_of_freedom: u32) -> Result<ChiSquared, RandError> {
        if degrees_of_freedom == 0 {
            return Err(RandError::InvalidParameter);
        }
        return Ok(ChiSquared::new(degrees_of_freedom));
    }

    /// Changes the degrees of freedom (with the same rules as [ChiSquared::new]).
    pub fn set_degrees_of_freedom(&mut self, degrees_of_freedom: u32) {
        *self = ChiSquared::new(degrees_of_freedom);
    }

    #[must_use]
    pub const fn get_degrees_of_freedom(&self) -> u32 {
        return self.degrees_of_freedom;
    }

    /// The equivalent [Gamma] distribution.
    #[must_use]
    pub const fn as_gamma(&self) -> &Gamma {
        return &self.gamma;
    }

    pub fn try_variate<R: RngCore + ?Sized>(&self, rng: &mut R) -> Result<f64, RandError> {
        return self.gamma.try_variate(rng);
    }
}

impl Default for ChiSquared {
    fn default() -> Self {
        ChiSquared::new(1)
    }
}

impl Distribution for ChiSquared {
    fn pdf(&self, x: f64) -> f64 {
        return self.gamma.pdf(x);
    }

    fn log_pdf(&self, x: f64) -> f64 {
        return self.gamma.log_pdf(x);
    }

    fn cdf(&self, x: f64) -> f64 {
        return self.gamma.cdf(x);
    }

    fn survival(&self, x: f64) -> f64 {
        return self.gamma.survival(x);
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &CHI_SQUARED_DOMAIN;
    }

    fn expected_value(&self) -> Option<f64> {
        return self.gamma.expected_value();
    }

    fn variance(&self) -> Option<f64> {
        return self.gamma.variance();
    }

    fn variate<R: RngCore + ?Sized>(&self, rng: &mut R) -> f64 {
        return self.gamma.variate(rng);
    }

    fn sample<R: RngCore + ?Sized>(&self, rng: &mut R, buffer: &mut [f64]) {
        self.gamma.sample(rng, buffer);
    }

    fn mode(&self) -> f64 {
        return self.gamma.mode();
    }

    fn skewness(&self) -> Option<f64> {
        return self.gamma.skewness();
    }

    fn excess_kurtosis(&self) -> Option<f64> {
        return self.gamma.excess_kurtosis();
    }

    fn entropy(&self) -> f64 {
        return self.gamma.entropy();
    }

    fn characteristic_function(&self, t: f64) -> Complex<f64> {
        return self.gamma.characteristic_function(t);
    }
}
