//! This script contains the interfaces used to comunicate with the distributions.
//!
//!  - [Distribution] for the continuous ones.
//!  - [DiscreteDistribution] for the discrete ones.
//!
//! Both traits only requiere the density, the cdf, the domain, the first 2
//! moments and a way to draw a variate. Everything else (quantile, mode,
//! higher moments, characteristic function...) has a generic implementation
//! built on the [numerical kernel](crate::euclid) that distributions are
//! encouraged to override when a closed form exists.
//!
//! The generic procedures never crash on numerical difficulty. Instead they
//! return a sentinel:
//!  - NaN for an invalid query or an undetermined result.
//!  - `+inf` for a quantile whose root finding did not converge (no finite
//!     quantile, tipically `p ~ 1`).

use num_complex::Complex;
use rand::RngCore;

use crate::configuration;
use crate::domain::{ContinuousDomain, DiscreteDomain};
use crate::errors::RandError;
use crate::euclid::{self, Moments};

/// The trait for any continuous distribution.
///
/// None of the provided methods are guaranteed to work if the implemented [Distribution::pdf]
/// is NOT a [valid pdf](https://en.wikipedia.org/wiki/Probability_density_function).
/// So, it needs to fullfill:
///  - The function must be stricly non-negative
///  - The function must be real valued
///  - The function must have a total area of 1 under the curve.
pub trait Distribution {
    //Requiered methods:

    /// Evaluates the [PDF](https://en.wikipedia.org/wiki/Probability_density_function)
    /// (Probability Density function) of the distribution at point `x`.
    ///
    /// Outside of the domain the pdf is `0.0`.
    fn pdf(&self, x: f64) -> f64;

    /// Evaluates the [CDF](https://en.wikipedia.org/wiki/Cumulative_distribution_function)
    /// (Cumulative distribution function).
    ///
    /// If the function is evaluated outside the domain of the pdf, it will
    /// return either `0.0` or `1.0`.
    fn cdf(&self, x: f64) -> f64;

    /// Returns a reference to the pdf [ContinuousDomain], wich indicates at wich points
    /// the pdf can be evaluated. The returned domain should be constant and not change.
    fn get_domain(&self) -> &ContinuousDomain;

    /// The [expected value](https://en.wikipedia.org/wiki/Expected_value)
    /// of the distribution, if it exists.
    fn expected_value(&self) -> Option<f64>;

    /// The [variance](https://en.wikipedia.org/wiki/Variance) of the distribution,
    /// if it exists.
    ///
    /// It must be given in closed form: the generic procedures use it to
    /// size their search steps, so it can't be computed trough them.
    fn variance(&self) -> Option<f64>;

    /// Draws a single variate using the random source `rng`.
    fn variate<R: RngCore + ?Sized>(&self, rng: &mut R) -> f64
    where
        Self: Sized;

    // Provided methods:
    // Manual implementation for a specific distribution is recommended.

    /// The natural logarithm of the pdf.
    fn log_pdf(&self, x: f64) -> f64 {
        return self.pdf(x).ln();
    }

    /// The [survival function](https://en.wikipedia.org/wiki/Survival_function)
    /// `S(x) = 1 - cdf(x)`.
    fn survival(&self, x: f64) -> f64 {
        return 1.0 - self.cdf(x);
    }

    /// The [hazard function](https://en.wikipedia.org/wiki/Failure_rate)
    /// `h(x) = pdf(x) / S(x)`.
    fn hazard(&self, x: f64) -> f64 {
        return self.pdf(x) / self.survival(x);
    }

    /// Draws `buffer.len()` variates and writes them in place.
    fn sample<R: RngCore + ?Sized>(&self, rng: &mut R, buffer: &mut [f64])
    where
        Self: Sized,
    {
        for slot in buffer.iter_mut() {
            *slot = self.variate(rng);
        }
    }

    /// Evaluates the [quantile function](https://en.wikipedia.org/wiki/Quantile_function),
    /// the inverse of [Distribution::cdf]. See [Distribution::quantile] for
    /// the sentinel based version.
    ///
    ///  - `p` outside `[0, 1]` or NaN: [RandError::InvalidQuery].
    ///  - `p = 0`: the infimum of the domain.
    ///  - `p = 1`: the supremum of the domain.
    ///  - Otherwise Newton's method is applied to `cdf(x) - p` (with the pdf as
    ///     the derivative), starting from the mean (or `0.0` if it is not finite).
    ///     If it does not converge: [RandError::NumericNonConvergence].
    fn try_quantile(&self, p: f64) -> Result<f64, RandError> {
        if p.is_nan() || !(0.0..=1.0).contains(&p) {
            return Err(RandError::InvalidQuery);
        }

        let (lower, upper): (f64, f64) = self.get_domain().get_bounds();
        if p == 0.0 {
            return Ok(lower);
        }
        if p == 1.0 {
            return Ok(upper);
        }

        let start: f64 = match self.expected_value() {
            Some(mean) if mean.is_finite() => mean,
            _ => 0.0,
        };
        let start: f64 = self.get_domain().clamp(start);

        let function = |x: f64| self.cdf(x) - p;
        let derivative = |x: f64| self.pdf(x);

        return euclid::find_root_newton()
            .function(&function)
            .derivative(&derivative)
            .initial_guess(start)
            .call();
    }

    /// Evaluates the [quantile function](https://en.wikipedia.org/wiki/Quantile_function).
    ///
    ///  - Returns NaN if `p` is outside `[0, 1]` or a NaN.
    ///  - Returns `+inf` if the root finding does not converge.
    ///
    /// See [Distribution::try_quantile] for the details.
    fn quantile(&self, p: f64) -> f64 {
        return match self.try_quantile(p) {
            Ok(x) => x,
            Err(RandError::InvalidQuery) => {
                tracing::debug!(p, "Invalid probability given to the quantile function");
                f64::NAN
            }
            Err(_) => f64::INFINITY,
        };
    }

    /// The [median](https://en.wikipedia.org/wiki/Median): `quantile(0.5)`.
    fn median(&self) -> f64 {
        return self.quantile(0.5);
    }

    /// The [mode](https://en.wikipedia.org/wiki/Mode_(statistics)): the point
    /// where the pdf is maximal.
    ///
    /// A bracket is expanded outward from the mean (or the median, if the mean
    /// is not finite) until the pdf at both ends is smaller than at the
    /// starting point. The first step is `variance` sized and each expansion
    /// doubles it. Then `-pdf` is minimized inside the bracket with
    /// [euclid::find_min].
    ///
    /// Returns NaN if the bracket can't be found or the minimization fails.
    fn mode(&self) -> f64 {
        let domain: &ContinuousDomain = self.get_domain();
        let (lower, upper): (f64, f64) = domain.get_bounds();

        let center: f64 = match self.expected_value() {
            Some(mean) if mean.is_finite() => mean,
            _ => self.median(),
        };
        if !center.is_finite() {
            return f64::NAN;
        }
        let center: f64 = domain.clamp(center);
        let pdf_center: f64 = self.pdf(center);

        let mut step: f64 = match self.variance() {
            Some(var) if var.is_finite() && 0.0 < var => {
                configuration::mode::STEP_VARIANCE_FACTOR * var
            }
            _ => configuration::mode::FALLBACK_STEP,
        };

        let mut a: f64 = (center - step).max(lower);
        let mut b: f64 = (center + step).min(upper);
        let mut expansions: u32 = 0;
        loop {
            let a_done: bool = a <= lower || self.pdf(a) < pdf_center;
            let b_done: bool = upper <= b || self.pdf(b) < pdf_center;
            if a_done && b_done {
                break;
            }

            expansions += 1;
            if configuration::mode::MAX_BRACKET_EXPANSIONS < expansions {
                tracing::debug!(a, b, "Could not find a bracket for the mode");
                return f64::NAN;
            }

            step *= 2.0;
            if !a_done {
                a = (center - step).max(lower);
            }
            if !b_done {
                b = (center + step).min(upper);
            }
        }

        let negative_pdf = |x: f64| -self.pdf(x);
        return euclid::find_min()
            .function(&negative_pdf)
            .a(a)
            .b(b)
            .call()
            .unwrap_or(f64::NAN);
    }

    /// Computes `E[g(X)]` by numerical integration.
    ///
    /// The integration bounds are found by stepping away from `start` (in
    /// increments of size `variance`, or `1.0` if there is no finite variance)
    /// until `|g(x) * pdf(x)|` is smaller than
    /// [configuration::expected_value::EPSILON] at 2 consecutive steps (a
    /// single root of `g` does not end the search), or until the domain ends. If a bound is not found in
    /// [configuration::expected_value::MAX_BOUND_STEPS] steps the integral is
    /// considered divergent and NaN is returned.
    ///
    /// Points where `g(x) * pdf(x)` is not finite (like an integrable
    /// singularity at the border of the domain) contribute `0.0`.
    fn expectation(&self, g: &dyn Fn(f64) -> f64, start: f64) -> f64 {
        let domain: &ContinuousDomain = self.get_domain();
        let (lower, upper): (f64, f64) = domain.get_bounds();
        let start: f64 = domain.clamp(start);
        if !start.is_finite() {
            return f64::NAN;
        }

        let step: f64 = match self.variance() {
            Some(var) if var.is_finite() && 0.0 < var => var,
            _ => 1.0,
        };

        let integrand = |x: f64| {
            let density: f64 = self.pdf(x);
            if density == 0.0 {
                return 0.0;
            }
            let value: f64 = g(x) * density;
            if value.is_finite() { value } else { 0.0 }
        };

        let negligible =
            |x: f64| (g(x) * self.pdf(x)).abs() < configuration::expected_value::EPSILON;

        let find_bound = |direction: f64, limit: f64| -> Option<f64> {
            let mut x: f64 = start;
            let mut previous_negligible: bool = false;
            for _ in 0..configuration::expected_value::MAX_BOUND_STEPS {
                x += direction * step;
                if (direction < 0.0 && x <= limit) || (0.0 < direction && limit <= x) {
                    return Some(limit);
                }
                let current_negligible: bool = negligible(x);
                if previous_negligible && current_negligible {
                    return Some(x);
                }
                previous_negligible = current_negligible;
            }
            return None;
        };

        let (a, b): (f64, f64) = match (find_bound(-1.0, lower), find_bound(1.0, upper)) {
            (Some(a), Some(b)) => (a, b),
            _ => {
                tracing::debug!(start, step, "The expected value bounds were not found");
                return f64::NAN;
            }
        };

        return euclid::integral()
            .function(&integrand)
            .a(a)
            .b(b)
            .max_depth(configuration::expected_value::MAX_RECURSION_DEPTH)
            .call();
    }

    /// Computes the `order`-th [moment](https://en.wikipedia.org/wiki/Moment_(mathematics))
    /// of the given kind trough [Distribution::expectation].
    ///
    /// Returns NaN if a needed mean or variance does not exist.
    fn moments(&self, order: u8, mode: Moments) -> f64 {
        let order: i32 = i32::from(order);
        let mean: f64 = self.expected_value().unwrap_or(f64::NAN);
        let start: f64 = if mean.is_finite() { mean } else { 0.0 };

        return match mode {
            Moments::Raw => self.expectation(&|x: f64| x.powi(order), start),
            Moments::Central => {
                if !mean.is_finite() {
                    return f64::NAN;
                }
                self.expectation(&|x: f64| (x - mean).powi(order), start)
            }
            Moments::Standarized => {
                let std_dev: f64 = self.variance().unwrap_or(f64::NAN).sqrt();
                if !mean.is_finite() || !std_dev.is_finite() || std_dev == 0.0 {
                    return f64::NAN;
                }
                self.expectation(&|x: f64| ((x - mean) / std_dev).powi(order), start)
            }
        };
    }

    /// The [skewness](https://en.wikipedia.org/wiki/Skewness) of the distribution.
    fn skewness(&self) -> Option<f64> {
        self.variance()?;
        let value: f64 = self.moments(3, Moments::Standarized);
        return if value.is_nan() { None } else { Some(value) };
    }

    /// The [excess kurtosis](https://en.wikipedia.org/wiki/Kurtosis#Excess_kurtosis)
    /// of the distribution (`kurtosis - 3`).
    fn excess_kurtosis(&self) -> Option<f64> {
        self.variance()?;
        let value: f64 = self.moments(4, Moments::Standarized);
        return if value.is_nan() {
            None
        } else {
            Some(value - 3.0)
        };
    }

    /// The [kurtosis](https://en.wikipedia.org/wiki/Kurtosis) of the distribution.
    fn kurtosis(&self) -> Option<f64> {
        return self.excess_kurtosis().map(|x| x + 3.0);
    }

    /// The [differential entropy](https://en.wikipedia.org/wiki/Differential_entropy)
    /// of the distribution (in nats).
    fn entropy(&self) -> f64 {
        let start: f64 = self.expected_value().unwrap_or(0.0);
        return self.expectation(&|x: f64| -self.log_pdf(x), start);
    }

    /// The [characteristic function](https://en.wikipedia.org/wiki/Characteristic_function_(probability_theory))
    /// `E[e^(itX)] = E[cos(tX)] + i E[sin(tX)]`.
    fn characteristic_function(&self, t: f64) -> Complex<f64> {
        let start: f64 = self.expected_value().unwrap_or(0.0);
        let re: f64 = self.expectation(&|x: f64| (t * x).cos(), start);
        let im: f64 = self.expectation(&|x: f64| (t * x).sin(), start);
        return Complex::new(re, im);
    }

    /// The [likelihood](https://en.wikipedia.org/wiki/Likelihood_function) of
    /// the given `data`: the product of the pdf at every point.
    fn likelihood(&self, data: &[f64]) -> f64 {
        return data.iter().map(|&x| self.pdf(x)).product();
    }

    /// The logarithm of the [likelihood](https://en.wikipedia.org/wiki/Likelihood_function)
    /// of the given `data`: the sum of the log pdf at every point.
    fn log_likelihood(&self, data: &[f64]) -> f64 {
        return data.iter().map(|&x| self.log_pdf(x)).sum();
    }
}

/// The trait for any discrete distribution.
///
/// The values of the distribution are integers (see [DiscreteDomain]).
///
/// None of the provided methods are guaranteed to work if the implemented
/// [DiscreteDistribution::pmf] is NOT a
/// [valid pmf](https://en.wikipedia.org/wiki/Probability_mass_function).
pub trait DiscreteDistribution {
    //Requiered methods:

    /// Evaluates the [PMF](https://en.wikipedia.org/wiki/Probability_mass_function)
    /// (Probability Mass Function) of the distribution at point `x`.
    ///
    /// Outside of the domain the pmf is `0.0`.
    fn pmf(&self, x: i64) -> f64;

    /// Evaluates the [CDF](https://en.wikipedia.org/wiki/Cumulative_distribution_function)
    /// `P(X <= x)`.
    fn cdf(&self, x: i64) -> f64;

    /// Returns a reference to the pmf [DiscreteDomain].
    fn get_domain(&self) -> &DiscreteDomain;

    /// The [expected value](https://en.wikipedia.org/wiki/Expected_value)
    /// of the distribution, if it exists.
    fn expected_value(&self) -> Option<f64>;

    /// The [variance](https://en.wikipedia.org/wiki/Variance) of the distribution,
    /// if it exists. Must be given in closed form.
    fn variance(&self) -> Option<f64>;

    /// Draws a single variate using the random source `rng`.
    ///
    /// Returns `-1` if the sampler failed (see
    /// [RandError::RejectionLoopExhaustion]).
    fn variate<R: RngCore + ?Sized>(&self, rng: &mut R) -> i64
    where
        Self: Sized;

    // Provided methods:

    /// The natural logarithm of the pmf.
    fn log_pmf(&self, x: i64) -> f64 {
        return self.pmf(x).ln();
    }

    /// The [survival function](https://en.wikipedia.org/wiki/Survival_function)
    /// `P(X > x) = 1 - cdf(x)`.
    fn survival(&self, x: i64) -> f64 {
        return 1.0 - self.cdf(x);
    }

    /// The discrete [hazard function](https://en.wikipedia.org/wiki/Failure_rate)
    /// `P(X = x) / P(X >= x)`.
    fn hazard(&self, x: i64) -> f64 {
        let at_least: f64 = match x.checked_sub(1) {
            Some(previous) => self.survival(previous),
            None => 1.0,
        };
        return self.pmf(x) / at_least;
    }

    /// Draws `buffer.len()` variates and writes them in place.
    fn sample<R: RngCore + ?Sized>(&self, rng: &mut R, buffer: &mut [i64])
    where
        Self: Sized,
    {
        for slot in buffer.iter_mut() {
            *slot = self.variate(rng);
        }
    }

    /// Evaluates the [quantile function](https://en.wikipedia.org/wiki/Quantile_function):
    /// the smallest `k` such that `p <= cdf(k)`.
    ///
    ///  - `p` outside `[0, 1]` or NaN: [RandError::InvalidQuery].
    ///  - `p = 0`: the lower bound of the domain (`-inf` if unbounded).
    ///  - `p = 1`: the upper bound of the domain (`+inf` if unbounded).
    ///
    /// The search starts at the mean and moves one value at a time. If it
    /// takes more than [configuration::discrete::MAX_SEARCH_STEPS] steps:
    /// [RandError::NumericNonConvergence].
    fn try_quantile(&self, p: f64) -> Result<f64, RandError> {
        if p.is_nan() || !(0.0..=1.0).contains(&p) {
            return Err(RandError::InvalidQuery);
        }

        let domain: &DiscreteDomain = self.get_domain();
        let (lower, upper): (i64, i64) = domain.get_bounds();
        let bound_to_f64 = |bound: i64| -> f64 {
            if bound == i64::MIN {
                f64::NEG_INFINITY
            } else if bound == i64::MAX {
                f64::INFINITY
            } else {
                bound as f64
            }
        };

        if p == 0.0 {
            return Ok(bound_to_f64(lower));
        }
        if p == 1.0 {
            return Ok(bound_to_f64(upper));
        }

        let start: f64 = match self.expected_value() {
            Some(mean) if mean.is_finite() => mean.round(),
            _ => 0.0,
        };
        let mut k: i64 = domain.clamp(start as i64);

        if p <= self.cdf(k) {
            // move down while the previous value still satisfies the condition
            for _ in 0..configuration::discrete::MAX_SEARCH_STEPS {
                if k <= lower || self.cdf(k - 1) < p {
                    return Ok(k as f64);
                }
                k -= 1;
            }
        } else {
            for _ in 0..configuration::discrete::MAX_SEARCH_STEPS {
                if upper <= k {
                    return Ok(k as f64);
                }
                k += 1;
                if p <= self.cdf(k) {
                    return Ok(k as f64);
                }
            }
        }

        return Err(RandError::NumericNonConvergence);
    }

    /// Evaluates the [quantile function](https://en.wikipedia.org/wiki/Quantile_function).
    ///
    ///  - Returns NaN if `p` is outside `[0, 1]` or a NaN.
    ///  - Returns `+inf` if the search does not finish.
    fn quantile(&self, p: f64) -> f64 {
        return match self.try_quantile(p) {
            Ok(x) => x,
            Err(RandError::InvalidQuery) => {
                tracing::debug!(p, "Invalid probability given to the quantile function");
                f64::NAN
            }
            Err(_) => f64::INFINITY,
        };
    }

    /// The [median](https://en.wikipedia.org/wiki/Median): `quantile(0.5)`.
    fn median(&self) -> f64 {
        return self.quantile(0.5);
    }

    /// The [mode](https://en.wikipedia.org/wiki/Mode_(statistics)): the value
    /// with the largest pmf.
    ///
    /// Hill climbing from the mean. If there are 2 modes, the one closest to
    /// the mean is returned. Returns NaN if the search does not finish.
    fn mode(&self) -> f64 {
        let domain: &DiscreteDomain = self.get_domain();
        let (lower, upper): (i64, i64) = domain.get_bounds();

        let start: f64 = match self.expected_value() {
            Some(mean) if mean.is_finite() => mean.round(),
            _ => 0.0,
        };
        let mut k: i64 = domain.clamp(start as i64);
        let mut current: f64 = self.pmf(k);

        for _ in 0..configuration::discrete::MAX_SEARCH_STEPS {
            if k < upper {
                let next: f64 = self.pmf(k + 1);
                if current < next {
                    k += 1;
                    current = next;
                    continue;
                }
            }
            if lower < k {
                let previous: f64 = self.pmf(k - 1);
                if current < previous {
                    k -= 1;
                    current = previous;
                    continue;
                }
            }
            return k as f64;
        }

        tracing::debug!(k, "The discrete mode search did not finish");
        return f64::NAN;
    }

    /// Computes `E[g(X)]` by summation.
    ///
    /// The sum starts at `start` and goes outward in both directions until
    /// `|g(k) * pmf(k)|` is smaller than
    /// [configuration::expected_value::EPSILON] for 2 consecutive values, or
    /// the domain ends. If a direction takes more than
    /// [configuration::discrete::MAX_SEARCH_STEPS] steps, NaN is returned.
    fn expectation(&self, g: &dyn Fn(i64) -> f64, start: i64) -> f64 {
        let domain: &DiscreteDomain = self.get_domain();
        let eps: f64 = configuration::expected_value::EPSILON;
        let start: i64 = domain.clamp(start);

        let term = |k: i64| -> (f64, bool) {
            let mass: f64 = self.pmf(k);
            if mass == 0.0 {
                return (0.0, true);
            }
            let value: f64 = g(k) * mass;
            return (value, value.abs() < eps);
        };

        let (mut total, _): (f64, bool) = term(start);

        for direction in [1_i64, -1] {
            let mut k: i64 = start;
            let mut finished: bool = false;
            let mut previous_negligible: bool = false;
            for _ in 0..configuration::discrete::MAX_SEARCH_STEPS {
                k = match k.checked_add(direction) {
                    Some(next) if domain.contains(next) => next,
                    _ => {
                        finished = true;
                        break;
                    }
                };
                let (value, negligible): (f64, bool) = term(k);
                total += value;
                if previous_negligible && negligible {
                    finished = true;
                    break;
                }
                previous_negligible = negligible;
            }
            if !finished {
                tracing::debug!(start, direction, "The discrete expected value did not finish");
                return f64::NAN;
            }
        }

        return total;
    }

    /// Computes the `order`-th [moment](https://en.wikipedia.org/wiki/Moment_(mathematics))
    /// of the given kind trough [DiscreteDistribution::expectation].
    fn moments(&self, order: u8, mode: Moments) -> f64 {
        let order: i32 = i32::from(order);
        let mean: f64 = self.expected_value().unwrap_or(f64::NAN);
        let start: i64 = if mean.is_finite() {
            mean.round() as i64
        } else {
            0
        };

        return match mode {
            Moments::Raw => self.expectation(&|k: i64| (k as f64).powi(order), start),
            Moments::Central => {
                if !mean.is_finite() {
                    return f64::NAN;
                }
                self.expectation(&|k: i64| (k as f64 - mean).powi(order), start)
            }
            Moments::Standarized => {
                let std_dev: f64 = self.variance().unwrap_or(f64::NAN).sqrt();
                if !mean.is_finite() || !std_dev.is_finite() || std_dev == 0.0 {
                    return f64::NAN;
                }
                self.expectation(&|k: i64| ((k as f64 - mean) / std_dev).powi(order), start)
            }
        };
    }

    /// The [skewness](https://en.wikipedia.org/wiki/Skewness) of the distribution.
    fn skewness(&self) -> Option<f64> {
        self.variance()?;
        let value: f64 = self.moments(3, Moments::Standarized);
        return if value.is_nan() { None } else { Some(value) };
    }

    /// The [excess kurtosis](https://en.wikipedia.org/wiki/Kurtosis#Excess_kurtosis)
    /// of the distribution (`kurtosis - 3`).
    fn excess_kurtosis(&self) -> Option<f64> {
        self.variance()?;
        let value: f64 = self.moments(4, Moments::Standarized);
        return if value.is_nan() {
            None
        } else {
            Some(value - 3.0)
        };
    }

    /// The [kurtosis](https://en.wikipedia.org/wiki/Kurtosis) of the distribution.
    fn kurtosis(&self) -> Option<f64> {
        return self.excess_kurtosis().map(|x| x + 3.0);
    }

    /// The [characteristic function](https://en.wikipedia.org/wiki/Characteristic_function_(probability_theory))
    /// `E[e^(itX)] = E[cos(tX)] + i E[sin(tX)]`.
    fn characteristic_function(&self, t: f64) -> Complex<f64> {
        let start: i64 = self.expected_value().map_or(0, |mean| mean.round() as i64);
        let re: f64 = self.expectation(&|k: i64| (t * k as f64).cos(), start);
        let im: f64 = self.expectation(&|k: i64| (t * k as f64).sin(), start);
        return Complex::new(re, im);
    }

    /// The [likelihood](https://en.wikipedia.org/wiki/Likelihood_function) of
    /// the given `data`: the product of the pmf at every point.
    fn likelihood(&self, data: &[i64]) -> f64 {
        return data.iter().map(|&k| self.pmf(k)).product();
    }

    /// The logarithm of the [likelihood](https://en.wikipedia.org/wiki/Likelihood_function)
    /// of the given `data`.
    fn log_likelihood(&self, data: &[i64]) -> f64 {
        return data.iter().map(|&k| self.log_pmf(k)).sum();
    }
}
