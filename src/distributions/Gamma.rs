//! # Gamma distribution
//!
//! The [Gamma distribution](https://en.wikipedia.org/wiki/Gamma_distribution)
//! is a continuous probability distribution.
//!
//! It has 2 parameters, but there are 2 ways to model it:
//!
//! 1. `alpha` or shape
//! 2. `theta` or scale
//!
//! The other way is:
//!
//! 1. `alpha` or shape
//! 2. `beta` or rate
//!
//! `theta = 1/beta`. We store the rate, but both are avaliable.
//!
//! All parameters (in every possible parametritzations) are stricly positive.
//!
//! ## Sampling
//!
//! The sampling algorithm depends on the shape. It is selected (together with
//! it's constants) every time the parameters change, see [GammaRegime]:
//!
//!  - Integer shape under 5: sum of `shape` standard exponentials.
//!  - Half integer shape under 5: sum of `floor(shape)` standard exponentials
//!     plus half of a squared standard normal.
//!  - `shape <= 1`: Ahrens–Dieter GS rejection.
//!  - `1 < shape <= 3`: rejection from an exponential proposal.
//!  - Otherwise: Marsaglia–Tsang rejection (a cubed shifted normal with a
//!     squeeze before the exact log test).
//!
//! [ChiSquared](crate::distributions::ChiSquared) and
//! [Erlang](crate::distributions::Erlang) are built on top of [Gamma].

use num_complex::Complex;
use rand::RngCore;

use crate::{
    configuration,
    distribution_trait::Distribution,
    distributions::{
        Exponential::Exponential, Normal::StdNormal, Uniform::Uniform, rejection_loop,
    },
    domain::ContinuousDomain,
    errors::RandError,
    euclid,
};

pub const GAMMA_DOMAIN: ContinuousDomain = ContinuousDomain::From(0.0);

/// Coefficient of the squeeze `u < 1 - 0.0331 x^4` of the large shape sampler.
const LARGE_SHAPE_SQUEEZE: f64 = 0.0331;
/// Shapes under this value can use the exact regimes.
const SMALL_SHAPE_LIMIT: f64 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Gamma {
    /// alpha or shape
    shape: f64,
    /// beta or rate
    rate: f64,
    /// theta or scale, `1 / rate`
    scale: f64,
    log_shape: f64,
    log_rate: f64,
    /// `ln(Γ(shape))`
    ln_gamma_shape: f64,
    /// `shape * ln(rate) - ln(Γ(shape))`, the log of the pdf normalitzation constant
    pdf_coef: f64,
    regime: GammaRegime,
}

/// The sampling algorithm of a [Gamma] (and it's constants).
///
/// Selected once per parameter set, never during sampling.
#[derive(Debug, Clone, PartialEq)]
pub enum GammaRegime {
    /// The shape is an integer under 5: sum of `count` standard exponentials.
    IntegerShape { count: u32 },
    /// The shape is `count + 0.5` (under 5): sum of `count` standard exponentials
    /// plus half a squared standard normal.
    HalfIntegerShape { count: u32 },
    /// `shape <= 1`: Ahrens–Dieter GS. `variate_coef = 1/shape + 1/e`.
    SmallShape { variate_coef: f64 },
    /// `1 < shape <= 3`: exponential proposal.
    MediumShape,
    /// The rest of the shapes.
    LargeShape(LargeShapeConstants),
}

/// The constants of [GammaRegime::LargeShape].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LargeShapeConstants {
    /// `shape - 1/3`
    d: f64,
    /// `1 / sqrt(9 d)`
    c: f64,
}

/// An iterator that generates infinites samples form a [Gamma] distribution.
/// The regime is fixed when the iterator is created.
pub struct GammaGenerator<'a, R: RngCore + ?Sized> {
    regime: GammaRegime,
    shape: f64,
    scale: f64,
    rng: &'a mut R,
}

impl LargeShapeConstants {
    fn new(shape: f64) -> LargeShapeConstants {
        let d: f64 = shape - 1.0 / 3.0;
        return LargeShapeConstants {
            d,
            c: 1.0 / (3.0 * d.sqrt()),
        };
    }
}

impl GammaRegime {
    /// Selects the regime for the given (valid) `shape`.
    #[must_use]
    pub fn select(shape: f64) -> GammaRegime {
        let eps: f64 = configuration::sampling::CLOSENESS_EPSILON;
        let regime: GammaRegime = if shape < SMALL_SHAPE_LIMIT && shape.fract() == 0.0 {
            GammaRegime::IntegerShape {
                count: shape as u32,
            }
        } else if shape < SMALL_SHAPE_LIMIT && euclid::are_close(shape - 0.5, (shape - 0.5).round(), eps)
        {
            GammaRegime::HalfIntegerShape {
                count: (shape - 0.5).round() as u32,
            }
        } else if shape <= 1.0 {
            GammaRegime::SmallShape {
                variate_coef: 1.0 / shape + std::f64::consts::E.recip(),
            }
        } else if shape <= 3.0 {
            GammaRegime::MediumShape
        } else {
            GammaRegime::LargeShape(LargeShapeConstants::new(shape))
        };

        tracing::trace!(shape, ?regime, "Gamma regime selected");
        return regime;
    }

    /// Draws a `Gamma(shape, 1)` variate with this regime.
    ///
    /// `shape` must be the one the regime was selected for.
    pub fn try_standard_variate<R: RngCore + ?Sized>(
        &self,
        shape: f64,
        rng: &mut R,
    ) -> Result<f64, RandError> {
        return match self {
            GammaRegime::IntegerShape { count } => Ok(sum_of_exponentials(*count, rng)),
            GammaRegime::HalfIntegerShape { count } => {
                let n: f64 = StdNormal::try_variate_pair(rng)?.0;
                Ok(sum_of_exponentials(*count, rng) + 0.5 * n * n)
            }
            GammaRegime::SmallShape { variate_coef } => {
                small_shape_variate(shape, *variate_coef, rng)
            }
            GammaRegime::MediumShape => medium_shape_variate(shape, rng),
            GammaRegime::LargeShape(constants) => large_shape_variate(constants, rng),
        };
    }
}

#[inline]
fn sum_of_exponentials<R: RngCore + ?Sized>(count: u32, rng: &mut R) -> f64 {
    let mut ret: f64 = 0.0;
    for _ in 0..count {
        ret += Exponential::standard_variate(rng);
    }
    return ret;
}

/// Fills `buffer` with `scale * draw()`. A failed draw is written as NaN.
fn fill_scaled<F>(buffer: &mut [f64], scale: f64, mut draw: F)
where
    F: FnMut() -> Result<f64, RandError>,
{
    for slot in buffer.iter_mut() {
        *slot = draw().map_or(f64::NAN, |x| scale * x);
    }
}

fn small_shape_variate<R: RngCore + ?Sized>(
    shape: f64,
    variate_coef: f64,
    rng: &mut R,
) -> Result<f64, RandError> {
    let inv_shape: f64 = 1.0 / shape;
    return rejection_loop(|| {
        let u: f64 = Uniform::standard_variate(rng);
        let p: f64 = shape * variate_coef * u;
        let w: f64 = Exponential::standard_variate(rng);
        if p <= 1.0 {
            let x: f64 = p.powf(inv_shape);
            return (x <= w).then_some(x);
        }
        let x: f64 = -(variate_coef * (1.0 - u)).ln();
        return ((1.0 - shape) * x.ln() <= w).then_some(x);
    });
}

fn medium_shape_variate<R: RngCore + ?Sized>(shape: f64, rng: &mut R) -> Result<f64, RandError> {
    let m: f64 = shape - 1.0;
    return rejection_loop(|| {
        let w1: f64 = Exponential::standard_variate(rng);
        let w2: f64 = Exponential::standard_variate(rng);
        return (m * (w1 - w1.ln() - 1.0) <= w2).then_some(shape * w1);
    });
}

fn large_shape_variate<R: RngCore + ?Sized>(
    k: &LargeShapeConstants,
    rng: &mut R,
) -> Result<f64, RandError> {
    return rejection_loop(|| {
        let x: f64 = StdNormal::standard_variate(rng);
        let v: f64 = 1.0 + k.c * x;
        if v <= 0.0 {
            return None;
        }
        let v: f64 = v * v * v;
        let u: f64 = Uniform::standard_variate_positive(rng);

        let x_2: f64 = x * x;
        if u < 1.0 - LARGE_SHAPE_SQUEEZE * x_2 * x_2 {
            return Some(k.d * v);
        }
        return (u.ln() < 0.5 * x_2 + k.d * (1.0 - v + v.ln())).then_some(k.d * v);
    });
}

impl Gamma {
    /// Creates a new [Gamma] distribution with parameters `shape` (alpha) and `rate` (beta).
    ///
    /// Non-positive or non-finite parameters are replaced by `1.0`.
    /// A shape within the closeness tolerance of an integer is snapped to it.
    #[must_use]
    pub fn new(shape: f64, rate: f64) -> Gamma {
        let shape: f64 = Gamma::clamp_parameter(shape, "shape");
        let rate: f64 = Gamma::clamp_parameter(rate, "rate");
        let rounded: f64 = shape.round();
        let shape: f64 =
            if euclid::are_close(shape, rounded, configuration::sampling::CLOSENESS_EPSILON) {
                rounded
            } else {
                shape
            };

        let log_shape: f64 = shape.ln();
        let log_rate: f64 = rate.ln();
        let ln_gamma_shape: f64 = euclid::ln_gamma(shape);

        return Gamma {
            shape,
            rate,
            scale: 1.0 / rate,
            log_shape,
            log_rate,
            ln_gamma_shape,
            pdf_coef: shape * log_rate - ln_gamma_shape,
            regime: GammaRegime::select(shape),
        };
    }

    /// Same as [Gamma::new] but reports invalid parameters as
    /// [RandError::InvalidParameter].
    pub fn try_new(shape: f64, rate: f64) -> Result<Gamma, RandError> {
        if !shape.is_finite() || !rate.is_finite() || shape <= 0.0 || rate <= 0.0 {
            return Err(RandError::InvalidParameter);
        }
        return Ok(Gamma::new(shape, rate));
    }

    /// Creates a new [Gamma] distribution with parameters `shape` and `scale` (theta).
    #[must_use]
    pub fn new_with_scale(shape: f64, scale: f64) -> Gamma {
        return Gamma::new(shape, 1.0 / scale);
    }

    fn clamp_parameter(value: f64, name: &'static str) -> f64 {
        if value.is_finite() && 0.0 < value {
            return value;
        }
        tracing::debug!(value, name, "Invalid gamma parameter, using 1.0");
        return 1.0;
    }

    /// Changes both parameters. Every derived constant (and the sampling
    /// regime) is recomputed.
    pub fn set_parameters(&mut self, shape: f64, rate: f64) {
        *self = Gamma::new(shape, rate);
    }

    /// Changes the shape, keeping the rate.
    pub fn set_shape(&mut self, shape: f64) {
        self.set_parameters(shape, self.rate);
    }

    /// Changes the rate, keeping the shape.
    pub fn set_rate(&mut self, rate: f64) {
        self.set_parameters(self.shape, rate);
    }

    /// Changes the scale (`1 / rate`), keeping the shape.
    pub fn set_scale(&mut self, scale: f64) {
        self.set_parameters(self.shape, 1.0 / scale);
    }

    /// The shape (alpha).
    #[must_use]
    pub const fn get_shape(&self) -> f64 {
        return self.shape;
    }

    /// The rate (beta).
    #[must_use]
    pub const fn get_rate(&self) -> f64 {
        return self.rate;
    }

    /// The scale (theta = 1 / beta).
    #[must_use]
    pub const fn get_scale(&self) -> f64 {
        return self.scale;
    }

    #[must_use]
    pub const fn get_log_shape(&self) -> f64 {
        return self.log_shape;
    }

    #[must_use]
    pub const fn get_log_rate(&self) -> f64 {
        return self.log_rate;
    }

    /// `ln(Γ(shape))`
    #[must_use]
    pub const fn get_ln_gamma_shape(&self) -> f64 {
        return self.ln_gamma_shape;
    }

    /// The sampling regime selected for the current shape.
    #[must_use]
    pub const fn get_regime(&self) -> &GammaRegime {
        return &self.regime;
    }

    /// Draws a single variate, reporting an exhausted rejection loop as an error.
    pub fn try_variate<R: RngCore + ?Sized>(&self, rng: &mut R) -> Result<f64, RandError> {
        return Ok(self.scale * self.regime.try_standard_variate(self.shape, rng)?);
    }

    /// The [geometric mean](https://en.wikipedia.org/wiki/Geometric_mean):
    /// `exp(E[ln(X)]) = exp(psi(shape) - ln(rate))`.
    #[must_use]
    pub fn geometric_mean(&self) -> f64 {
        return (euclid::digamma(self.shape) - self.log_rate).exp();
    }

    /// The variance of `ln(X)`: `psi'(shape)`.
    #[must_use]
    pub fn geometric_variance(&self) -> f64 {
        return euclid::trigamma(self.shape);
    }

    /// Returns an iterator that generates [Gamma] samples from `rng`.
    pub fn iter<'a, R: RngCore + ?Sized>(&self, rng: &'a mut R) -> GammaGenerator<'a, R> {
        return GammaGenerator {
            regime: self.regime.clone(),
            shape: self.shape,
            scale: self.scale,
            rng,
        };
    }
}

impl Default for Gamma {
    fn default() -> Self {
        Gamma::new(1.0, 1.0)
    }
}

impl Distribution for Gamma {
    fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        if x == 0.0 {
            // the limit depends on the shape
            return if self.shape < 1.0 {
                f64::INFINITY
            } else if self.shape == 1.0 {
                self.rate
            } else {
                0.0
            };
        }
        return self.log_pdf(x).exp();
    }

    fn log_pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return f64::NEG_INFINITY;
        }
        if x == 0.0 {
            return self.pdf(x).ln();
        }
        return self.pdf_coef + (self.shape - 1.0) * x.ln() - self.rate * x;
    }

    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x <= 0.0 {
            return 0.0;
        }
        return euclid::regularized_lower_inc_gamma(self.shape, self.rate * x);
    }

    fn survival(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x <= 0.0 {
            return 1.0;
        }
        return euclid::regularized_upper_inc_gamma(self.shape, self.rate * x);
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &GAMMA_DOMAIN;
    }

    fn expected_value(&self) -> Option<f64> {
        return Some(self.shape * self.scale);
    }

    fn variance(&self) -> Option<f64> {
        return Some(self.shape * self.scale * self.scale);
    }

    /// Returns NaN if the rejection loop exhausted it's iteration cap.
    fn variate<R: RngCore + ?Sized>(&self, rng: &mut R) -> f64 {
        return self.try_variate(rng).unwrap_or(f64::NAN);
    }

    /// The regime is matched once for the whole buffer.
    fn sample<R: RngCore + ?Sized>(&self, rng: &mut R, buffer: &mut [f64]) {
        let scale: f64 = self.scale;
        let shape: f64 = self.shape;

        match &self.regime {
            GammaRegime::IntegerShape { count } => {
                fill_scaled(buffer, scale, || Ok(sum_of_exponentials(*count, rng)));
            }
            GammaRegime::HalfIntegerShape { count } => fill_scaled(buffer, scale, || {
                let n: f64 = StdNormal::try_variate_pair(rng)?.0;
                Ok(sum_of_exponentials(*count, rng) + 0.5 * n * n)
            }),
            GammaRegime::SmallShape { variate_coef } => {
                fill_scaled(buffer, scale, || {
                    small_shape_variate(shape, *variate_coef, rng)
                });
            }
            GammaRegime::MediumShape => {
                fill_scaled(buffer, scale, || medium_shape_variate(shape, rng));
            }
            GammaRegime::LargeShape(constants) => {
                fill_scaled(buffer, scale, || large_shape_variate(constants, rng));
            }
        }
    }

    fn mode(&self) -> f64 {
        if self.shape < 1.0 {
            return 0.0;
        }
        return (self.shape - 1.0) * self.scale;
    }

    fn skewness(&self) -> Option<f64> {
        return Some(2.0 / self.shape.sqrt());
    }

    fn excess_kurtosis(&self) -> Option<f64> {
        return Some(6.0 / self.shape);
    }

    fn entropy(&self) -> f64 {
        return self.shape - self.log_rate
            + self.ln_gamma_shape
            + (1.0 - self.shape) * euclid::digamma(self.shape);
    }

    fn characteristic_function(&self, t: f64) -> Complex<f64> {
        // (1 - it/beta)^(-alpha)
        return Complex::new(1.0, -t * self.scale).powf(-self.shape);
    }
}

impl<R: RngCore + ?Sized> Iterator for GammaGenerator<'_, R> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let x: f64 = self
            .regime
            .try_standard_variate(self.shape, self.rng)
            .map_or(f64::NAN, |x| self.scale * x);
        return Some(x);
    }
}
