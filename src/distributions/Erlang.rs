//! # Erlang distribution
//!
//! The [Erlang distribution](https://en.wikipedia.org/wiki/Erlang_distribution)
//! is the distribution of the waiting time until the `k`-th event of a
//! Poisson process with rate `lambda`.
//!
//! Erlang(k, lambda) ~ Gamma(a = k, beta = lambda), with `k` a positive integer.
//!

use num_complex::Complex;
use rand::RngCore;

use crate::{
    distribution_trait::Distribution,
    distributions::Gamma::{GAMMA_DOMAIN, Gamma},
    domain::ContinuousDomain,
    errors::RandError,
};

pub const ERLANG_DOMAIN: ContinuousDomain = GAMMA_DOMAIN;

#[derive(Debug, Clone, PartialEq)]
pub struct Erlang {
    shape: u32,
    gamma: Gamma,
}

impl Erlang {
    /// Creates a new [Erlang] distribution.
    ///
    ///  - If `shape` is `0`, `1` is used.
    ///  - If `rate` is not finite or not stricly positive, `1.0` is used.
    #[must_use]
    pub fn new(shape: u32, rate: f64) -> Erlang {
        let shape: u32 = if shape == 0 {
            tracing::debug!("Erlang with shape 0, using 1");
            1
        } else {
            shape
        };

        return Erlang {
            shape,
            gamma: Gamma::new(f64::from(shape), rate),
        };
    }

    /// Same as [Erlang::new] but reports invalid parameters as
    /// [RandError::InvalidParameter].
    pub fn try_new(shape: u32, rate: f64) -> Result<Erlang, RandError> {
        if shape == 0 || !rate.is_finite() || rate <= 0.0 {
            return Err(RandError::InvalidParameter);
        }
        return Ok(Erlang::new(shape, rate));
    }

    pub fn set_parameters(&mut self, shape: u32, rate: f64) {
        *self = Erlang::new(shape, rate);
    }

    pub fn set_shape(&mut self, shape: u32) {
        self.set_parameters(shape, self.gamma.get_rate());
    }

    pub fn set_rate(&mut self, rate: f64) {
        self.set_parameters(self.shape, rate);
    }

    #[must_use]
    pub const fn get_shape(&self) -> u32 {
        return self.shape;
    }

    #[must_use]
    pub const fn get_rate(&self) -> f64 {
        return self.gamma.get_rate();
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

impl Default for Erlang {
    fn default() -> Self {
        Erlang::new(1, 1.0)
    }
}

impl Distribution for Erlang {
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
        return &ERLANG_DOMAIN;
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
