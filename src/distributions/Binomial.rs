//! # Binomial distribution
//!
//! The [Binomial distribution](https://en.wikipedia.org/wiki/Binomial_distribution)
//! is a discrete distribution that represents the number of successes in `n`
//! independent [Bernoulli](crate::distributions::Bernoulli) trials with
//! probability of success `p`.
//!
//! ## Sampling
//!
//! The algorithm is selected once per parameter set (see [BinomialRegime]).
//! All of them work with `min(p, 1 - p)` and reflect the result (`n - x`)
//! when `0.5 < p`:
//!
//!  - `p = 0` or `p = 1`: constant.
//!  - Tiny `n` (or `p ~ 0.5` with moderate `n`): sum of `n` Bernoulli trials.
//!  - Small `floor(n * p)`: count the successes with geometric waiting times.
//!  - Otherwise: a 4 region rejection after Devroye (Non-Uniform Random Variate
//!     Generation, p. 533) for `Binomial(n, floor(n * p) / n)`, plus a second
//!     (waiting) Binomial for the residual probability when `n * p` is not an
//!     integer.
//!
//! The envelope of the rejection is a half normal on each side of
//! `floor(n * p)`, continued by an exponential tail. Each side carries it's own
//! log offset (`c1` on the right, `c2` on the left) and the tails share the
//! offset of their side, so the hat is above the pmf at every integer.
//!

use num_complex::Complex;
use rand::RngCore;

use crate::{
    configuration,
    distribution_trait::DiscreteDistribution,
    distributions::{
        Bernoulli::{Bernoulli, clamp_probability},
        Exponential::Exponential,
        Geometric::Geometric,
        Normal::StdNormal,
        Uniform::Uniform,
        rejection_loop,
    },
    domain::DiscreteDomain,
    errors::RandError,
    euclid,
};

/// Up to this number of trials the Bernoulli sum is always used.
const TINY_N: u32 = 3;
/// Up to this number of trials the Bernoulli sum is used if `min(p, q)` is large.
const SMALL_N: u32 = 13;
/// Up to this number of trials the Bernoulli sum is used if `p ~ 0.5`.
const FAIR_N: u32 = 200;
/// The waiting algorithm is used while `floor(n * min(p, q))` is at most this.
const WAITING_MAX_NP: f64 = 12.0;
/// Same, when `n * min(p, q)` is not an integer (the rejection would need
/// a second waiting draw anyway).
const WAITING_MAX_NP_RESIDUAL: f64 = 16.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Binomial {
    n: u32,
    p: f64,
    q: f64,
    domain: DiscreteDomain,
    regime: BinomialRegime,
}

/// The sampling algorithm of a [Binomial] (and it's constants).
#[derive(Debug, Clone, PartialEq)]
pub enum BinomialRegime {
    /// `p = 0` or `p = 1`: always `value`.
    Constant { value: u32 },
    /// Sum of `n` Bernoulli trials.
    BernoulliSum,
    /// Count the successes of geometric waiting times with success
    /// probability `min_pq`.
    Waiting { min_pq: f64 },
    /// Four region rejection.
    Rejection(RejectionConstants),
}

/// Constants of [BinomialRegime::Rejection]. All of them are computed for
/// `p_floor = floor(n * min(p, q)) / n`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RejectionConstants {
    n: u32,
    np_floor: f64,
    /// Probability of the correction draw `Binomial(n - x, residual)`, if needed.
    residual: Option<f64>,
    delta1: f64,
    delta2: f64,
    sigma1: f64,
    sigma2: f64,
    /// log offset of the right side of the envelope
    c1: f64,
    /// log offset of the left side of the envelope
    c2: f64,
    a1: f64,
    a2: f64,
    a3: f64,
    a4: f64,
    coef_a3: f64,
    coef_a4: f64,
    log_p_floor: f64,
    log_q_floor: f64,
    /// `ln(P(np_floor))` under `p_floor`
    log_prob_np_floor: f64,
}

/// An iterator that generates infinites samples form a [Binomial] distribution.
pub struct BinomialGenerator<'a, R: RngCore + ?Sized> {
    binomial: Binomial,
    rng: &'a mut R,
}

impl RejectionConstants {
    fn new(n: u32, min_pq: f64) -> RejectionConstants {
        let n_f: f64 = f64::from(n);
        let np_floor: f64 = (n_f * min_pq).floor();
        let p_floor: f64 = np_floor / n_f;
        let q_floor: f64 = 1.0 - p_floor;
        let nq_floor: f64 = n_f - np_floor;

        let residual: Option<f64> = if euclid::are_close(
            np_floor,
            n_f * min_pq,
            configuration::sampling::CLOSENESS_EPSILON,
        ) {
            None
        } else {
            Some((min_pq - p_floor) / q_floor)
        };

        let npq: f64 = np_floor * q_floor;
        let coef: f64 = 128.0 * n_f / std::f64::consts::PI;
        let delta = |ratio: f64| -> f64 {
            let d: f64 = npq * (coef * ratio).ln();
            if 1.0 < d { d.sqrt() } else { 1.0 }
        };
        let delta1: f64 = delta(p_floor / (81.0 * q_floor));
        let delta2: f64 = delta(q_floor / p_floor);

        let npq_sqrt: f64 = npq.sqrt();
        let sigma1: f64 = npq_sqrt * (1.0 + 0.25 * delta1 / np_floor);
        let sigma2: f64 = npq_sqrt * (1.0 + 0.25 * delta2 / nq_floor);
        // the pmf is flat between np_floor - 1 and np_floor, so the left half
        // normal needs it's own offset
        let c1: f64 = 2.0 * delta1 / np_floor;
        let c2: f64 = 0.5 * delta2 / np_floor;

        let a1: f64 = 0.5 * c1.exp() * sigma1 * euclid::SQRT_2PI;
        let a2: f64 = a1 + 0.5 * c2.exp() * sigma2 * euclid::SQRT_2PI;
        // the tails are the chords of the half normals through the origin,
        // so they stay above them after delta
        let coef_a3: f64 = 0.5 * delta1 / (sigma1 * sigma1);
        let a3: f64 = a2 + (c1 - delta1 * coef_a3).exp() / coef_a3;
        let coef_a4: f64 = 0.5 * delta2 / (sigma2 * sigma2);
        let a4: f64 = a3 + (c2 - delta2 * coef_a4).exp() / coef_a4;

        let log_p_floor: f64 = p_floor.ln();
        let log_q_floor: f64 = if p_floor == q_floor {
            log_p_floor
        } else {
            q_floor.ln()
        };

        let mut ret: RejectionConstants = RejectionConstants {
            n,
            np_floor,
            residual,
            delta1,
            delta2,
            sigma1,
            sigma2,
            c1,
            c2,
            a1,
            a2,
            a3,
            a4,
            coef_a3,
            coef_a4,
            log_p_floor,
            log_q_floor,
            log_prob_np_floor: 0.0,
        };
        ret.log_prob_np_floor = ret.log_prob_floor(np_floor);
        return ret;
    }

    /// `ln(P(k))` for `Binomial(n, p_floor)`.
    fn log_prob_floor(&self, k: f64) -> f64 {
        let n_f: f64 = f64::from(self.n);
        return euclid::ln_binomial_coef(u64::from(self.n), k as u64)
            + k * self.log_p_floor
            + (n_f - k) * self.log_q_floor;
    }

    /// Draws a `Binomial(n, p_floor)` variate.
    fn try_variate_floor<R: RngCore + ?Sized>(&self, rng: &mut R) -> Result<u32, RandError> {
        let n_f: f64 = f64::from(self.n);
        return rejection_loop(|| {
            let u: f64 = self.a4 * Uniform::standard_variate(rng);
            let (y, v): (f64, f64) = if u <= self.a1 {
                let n: f64 = StdNormal::standard_variate(rng);
                let y: f64 = self.sigma1 * n.abs();
                if self.delta1 <= y {
                    return None;
                }
                let w: f64 = Exponential::standard_variate(rng);
                (y.floor(), -w - 0.5 * n * n + self.c1)
            } else if u <= self.a2 {
                let n: f64 = StdNormal::standard_variate(rng);
                let y: f64 = self.sigma2 * n.abs();
                if self.delta2 <= y {
                    return None;
                }
                let w: f64 = Exponential::standard_variate(rng);
                ((-y).floor(), -w - 0.5 * n * n + self.c2)
            } else if u <= self.a3 {
                let w1: f64 = Exponential::standard_variate(rng);
                let w2: f64 = Exponential::standard_variate(rng);
                let y: f64 = self.delta1 + w1 / self.coef_a3;
                (y.floor(), -w2 - self.coef_a3 * y + self.c1)
            } else {
                let w1: f64 = Exponential::standard_variate(rng);
                let w2: f64 = Exponential::standard_variate(rng);
                let y: f64 = self.delta2 + w1 / self.coef_a4;
                ((-y).floor(), -w2 - self.coef_a4 * y + self.c2)
            };

            let x: f64 = y + self.np_floor;
            if x < 0.0 || n_f < x {
                return None;
            }
            return (v <= self.log_prob_floor(x) - self.log_prob_np_floor).then_some(x as u32);
        });
    }

    /// Draws a `Binomial(n, min(p, q))` variate.
    fn try_variate<R: RngCore + ?Sized>(&self, rng: &mut R) -> Result<u32, RandError> {
        let x: u32 = self.try_variate_floor(rng)?;
        return Ok(match self.residual {
            Some(residual) => x + waiting_variate(self.n - x, residual, rng),
            None => x,
        });
    }
}

/// Number of successes in `trials` trials of probability `p`, counting the
/// geometric waiting times between successes.
fn waiting_variate<R: RngCore + ?Sized>(trials: u32, p: f64, rng: &mut R) -> u32 {
    let mut successes: u32 = 0;
    let mut used: u64 = 0;
    // each success uses at least 1 trial, so this ends after `trials + 1` steps
    loop {
        used = used
            .saturating_add(Geometric::variate_with(p, rng))
            .saturating_add(1);
        if u64::from(trials) < used {
            return successes;
        }
        successes += 1;
    }
}

/// Number of successes in `trials` Bernoulli trials of probability `p`.
fn bernoulli_sum<R: RngCore + ?Sized>(trials: u32, p: f64, rng: &mut R) -> u32 {
    let fair: bool = euclid::are_close(p, 0.5, configuration::sampling::CLOSENESS_EPSILON);
    let mut successes: u32 = 0;
    for _ in 0..trials {
        let success: bool = if fair {
            Bernoulli::standard_variate(rng)
        } else {
            Bernoulli::variate_with(p, rng)
        };
        successes += u32::from(success);
    }
    return successes;
}

impl BinomialRegime {
    /// Selects the regime for `n` trials with probability `p` (already valid).
    #[must_use]
    pub fn select(n: u32, p: f64) -> BinomialRegime {
        let eps: f64 = configuration::sampling::CLOSENESS_EPSILON;
        let min_pq: f64 = p.min(1.0 - p);
        let n_f: f64 = f64::from(n);
        let np: f64 = n_f * min_pq;
        let np_floor: f64 = np.floor();
        let has_residual: bool = !euclid::are_close(np_floor, np, eps);

        let regime: BinomialRegime = if p == 0.0 {
            BinomialRegime::Constant { value: 0 }
        } else if p == 1.0 {
            BinomialRegime::Constant { value: n }
        } else if n <= TINY_N
            || (n <= SMALL_N && 0.025 * (n_f + 6.0) < min_pq)
            || (n <= FAIR_N && euclid::are_close(p, 0.5, eps))
        {
            BinomialRegime::BernoulliSum
        } else if np_floor <= WAITING_MAX_NP || (has_residual && np_floor <= WAITING_MAX_NP_RESIDUAL)
        {
            BinomialRegime::Waiting { min_pq }
        } else {
            BinomialRegime::Rejection(RejectionConstants::new(n, min_pq))
        };

        tracing::trace!(n, p, ?regime, "Binomial regime selected");
        return regime;
    }
}

impl Binomial {
    /// Creates a new [Binomial] distribution with `n` trials and probability
    /// of success `p`.
    ///
    ///  - If `n` is `0`, `1` is used.
    ///  - `p` outside `[0.0, 1.0]` is clamped into the interval. A NaN becomes `0.5`.
    #[must_use]
    pub fn new(n: u32, p: f64) -> Binomial {
        let n: u32 = if n == 0 {
            tracing::debug!("Binomial with 0 trials, using 1");
            1
        } else {
            n
        };
        let p: f64 = clamp_probability(p);

        return Binomial {
            n,
            p,
            q: 1.0 - p,
            domain: DiscreteDomain::Range(0, i64::from(n)),
            regime: BinomialRegime::select(n, p),
        };
    }

    /// Same as [Binomial::new] but reports invalid parameters as
    /// [RandError::InvalidParameter].
    pub fn try_new(n: u32, p: f64) -> Result<Binomial, RandError> {
        if n == 0 || !(0.0..=1.0).contains(&p) {
            return Err(RandError::InvalidParameter);
        }
        return Ok(Binomial::new(n, p));
    }

    /// Changes both parameters, recomputing the regime.
    pub fn set_parameters(&mut self, n: u32, p: f64) {
        *self = Binomial::new(n, p);
    }

    pub fn set_n(&mut self, n: u32) {
        self.set_parameters(n, self.p);
    }

    pub fn set_p(&mut self, p: f64) {
        self.set_parameters(self.n, p);
    }

    /// The number of trials.
    #[must_use]
    pub const fn get_n(&self) -> u32 {
        return self.n;
    }

    /// The probability of success.
    #[must_use]
    pub const fn get_p(&self) -> f64 {
        return self.p;
    }

    #[must_use]
    pub const fn get_regime(&self) -> &BinomialRegime {
        return &self.regime;
    }

    /// Draws a single variate, reporting an exhausted rejection loop as an error.
    pub fn try_variate<R: RngCore + ?Sized>(&self, rng: &mut R) -> Result<u32, RandError> {
        let reflect = |x: u32| if 0.5 < self.p { self.n - x } else { x };
        return match &self.regime {
            BinomialRegime::Constant { value } => Ok(*value),
            BinomialRegime::BernoulliSum => Ok(bernoulli_sum(self.n, self.p, rng)),
            BinomialRegime::Waiting { min_pq } => {
                Ok(reflect(waiting_variate(self.n, *min_pq, rng)))
            }
            BinomialRegime::Rejection(constants) => Ok(reflect(constants.try_variate(rng)?)),
        };
    }

    /// Returns an iterator that generates [Binomial] samples from `rng`.
    ///
    /// A failed draw is returned as `-1`.
    pub fn iter<'a, R: RngCore + ?Sized>(&self, rng: &'a mut R) -> BinomialGenerator<'a, R> {
        return BinomialGenerator {
            binomial: self.clone(),
            rng,
        };
    }
}

impl Default for Binomial {
    fn default() -> Self {
        Binomial::new(1, 0.5)
    }
}

impl DiscreteDistribution for Binomial {
    fn pmf(&self, x: i64) -> f64 {
        if x < 0 || i64::from(self.n) < x {
            return 0.0;
        }
        let n: u64 = u64::from(self.n);
        let k: u64 = x as u64;
        if self.p == 0.0 || self.q == 0.0 {
            let certain: u64 = if self.p == 0.0 { 0 } else { n };
            return if k == certain { 1.0 } else { 0.0 };
        }

        let coef: f64 = euclid::binomial_coef(n, k);
        let tail: f64 = if k == n - k {
            (self.p * self.q).powf(k as f64)
        } else {
            self.p.powf(k as f64) * self.q.powf((n - k) as f64)
        };
        let ret: f64 = coef * tail;
        if ret.is_finite() && 0.0 < ret {
            return ret;
        }
        // overflow of the coefficient or underflow of the powers
        return self.log_pmf(x).exp();
    }

    fn log_pmf(&self, x: i64) -> f64 {
        if x < 0 || i64::from(self.n) < x {
            return f64::NEG_INFINITY;
        }
        if self.p == 0.0 || self.q == 0.0 {
            return self.pmf(x).ln();
        }
        let n: u64 = u64::from(self.n);
        let k: u64 = x as u64;
        return euclid::ln_binomial_coef(n, k)
            + k as f64 * self.p.ln()
            + (n - k) as f64 * self.q.ln();
    }

    /// Trough the Binomial–Beta duality: `P(X <= k) = I_q(n - k, k + 1)`.
    fn cdf(&self, x: i64) -> f64 {
        if x < 0 {
            return 0.0;
        }
        if i64::from(self.n) <= x {
            return 1.0;
        }
        let k: f64 = x as f64;
        return euclid::regularized_beta_fun(self.q, f64::from(self.n) - k, k + 1.0);
    }

    fn survival(&self, x: i64) -> f64 {
        if x < 0 {
            return 1.0;
        }
        if i64::from(self.n) <= x {
            return 0.0;
        }
        let k: f64 = x as f64;
        return euclid::regularized_beta_fun(self.p, k + 1.0, f64::from(self.n) - k);
    }

    fn get_domain(&self) -> &DiscreteDomain {
        return &self.domain;
    }

    fn expected_value(&self) -> Option<f64> {
        return Some(f64::from(self.n) * self.p);
    }

    fn variance(&self) -> Option<f64> {
        return Some(f64::from(self.n) * self.p * self.q);
    }

    /// Returns `-1` if the rejection loop exhausted it's iteration cap.
    fn variate<R: RngCore + ?Sized>(&self, rng: &mut R) -> i64 {
        return self.try_variate(rng).map_or(-1, i64::from);
    }

    /// The regime is matched once for the whole buffer.
    fn sample<R: RngCore + ?Sized>(&self, rng: &mut R, buffer: &mut [i64]) {
        let n: u32 = self.n;
        let reflect = |x: u32| -> i64 {
            i64::from(if 0.5 < self.p { n - x } else { x })
        };

        match &self.regime {
            BinomialRegime::Constant { value } => buffer.fill(i64::from(*value)),
            BinomialRegime::BernoulliSum => {
                for slot in buffer.iter_mut() {
                    *slot = i64::from(bernoulli_sum(n, self.p, rng));
                }
            }
            BinomialRegime::Waiting { min_pq } => {
                for slot in buffer.iter_mut() {
                    *slot = reflect(waiting_variate(n, *min_pq, rng));
                }
            }
            BinomialRegime::Rejection(constants) => {
                for slot in buffer.iter_mut() {
                    *slot = constants.try_variate(rng).map_or(-1, reflect);
                }
            }
        }
    }

    fn mode(&self) -> f64 {
        return ((f64::from(self.n) + 1.0) * self.p)
            .floor()
            .min(f64::from(self.n));
    }

    fn skewness(&self) -> Option<f64> {
        let npq: f64 = f64::from(self.n) * self.p * self.q;
        if npq == 0.0 {
            return None;
        }
        return Some((self.q - self.p) / npq.sqrt());
    }

    fn excess_kurtosis(&self) -> Option<f64> {
        let pq: f64 = self.p * self.q;
        if pq == 0.0 {
            return None;
        }
        return Some((1.0 - 6.0 * pq) / (f64::from(self.n) * pq));
    }

    fn characteristic_function(&self, t: f64) -> Complex<f64> {
        // (q + p e^(it))^n
        return Complex::new(self.q + self.p * t.cos(), self.p * t.sin()).powu(self.n);
    }
}

impl<R: RngCore + ?Sized> Iterator for BinomialGenerator<'_, R> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        return Some(self.binomial.variate(self.rng));
    }
}
