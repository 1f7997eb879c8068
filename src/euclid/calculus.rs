//! Numerical integration, root finding and minimization.
//!
//! The routines with tuning knobs are exposed trough [bon] builders:
//!
//! ```
//! use AdvancedSampling::euclid;
//!
//! let square = |x: f64| x * x;
//! let area: f64 = euclid::integral().function(&square).a(0.0).b(3.0).call();
//! assert!((area - 9.0).abs() < 1e-9);
//! ```
//!
//! Every iterative procedure carries an iteration cap (see
//! [crate::configuration]). Exhausting it is reported as
//! [RandError::NumericNonConvergence], never as an endless loop.

use crate::configuration::{integration, minimization, root_finding};
use crate::errors::RandError;

/// `(3 - sqrt(5)) / 2`, the golden section ratio used by [find_min].
const GOLDEN_SECTION: f64 = 0.381_966_011_250_105_1;

/// Integrates `function` over `[a, b]` with an
/// [adaptive Simpson's rule](https://en.wikipedia.org/wiki/Adaptive_Simpson%27s_method).
///
/// A subinterval is accepted when the coarse and the refined estimates
/// differ by less than `15 * epsilon`, where the tolerance is halved at every
/// bisection. Once `max_depth` is reached the best available estimate is
/// used, so the procedure always terminates (at the cost of accuracy on
/// pathological integrands).
///
/// If `b < a` the integral is negated. Non-finite bounds return NaN.
#[bon::builder]
pub fn integral(
    function: &dyn Fn(f64) -> f64,
    a: f64,
    b: f64,
    #[builder(default = integration::DEFAULT_EPSILON)] epsilon: f64,
    #[builder(default = integration::DEFAULT_MAX_RECURSION_DEPTH)] max_depth: u32,
) -> f64 {
    if !a.is_finite() || !b.is_finite() {
        return f64::NAN;
    }
    if a == b {
        return 0.0;
    }
    if b < a {
        return -integral()
            .function(function)
            .a(b)
            .b(a)
            .epsilon(epsilon)
            .max_depth(max_depth)
            .call();
    }

    let fa: f64 = function(a);
    let fb: f64 = function(b);
    let fm: f64 = function(0.5 * (a + b));
    let whole: f64 = (b - a) / 6.0 * (fa + 4.0 * fm + fb);

    return simpson_step(function, (a, b), (fa, fm, fb), whole, epsilon, max_depth);
}

/// One recursive step of [integral].
fn simpson_step(
    function: &dyn Fn(f64) -> f64,
    (a, b): (f64, f64),
    (fa, fm, fb): (f64, f64, f64),
    whole: f64,
    epsilon: f64,
    depth: u32,
) -> f64 {
    let m: f64 = 0.5 * (a + b);
    let flm: f64 = function(0.5 * (a + m));
    let frm: f64 = function(0.5 * (m + b));

    let left: f64 = (m - a) / 6.0 * (fa + 4.0 * flm + fm);
    let right: f64 = (b - m) / 6.0 * (fm + 4.0 * frm + fb);
    let delta: f64 = left + right - whole;

    if depth == 0 || delta.abs() <= 15.0 * epsilon {
        // Richardson extrapolation
        return left + right + delta / 15.0;
    }

    let half_epsilon: f64 = 0.5 * epsilon;
    return simpson_step(function, (a, m), (fa, flm, fm), left, half_epsilon, depth - 1)
        + simpson_step(function, (m, b), (fm, frm, fb), right, half_epsilon, depth - 1);
}

/// Finds a root of `function` with
/// [Newton's method](https://en.wikipedia.org/wiki/Newton%27s_method) using the
/// explicit `derivative`.
///
/// The method is damped: if a full step does not reduce `|function|` (or
/// lands on a point where the derivative vanishes) the step is halved until
/// it does. If it can't be reduced below [root_finding::MIN_DAMPING] of the
/// full step, or the iteration cap is reached, the search fails.
///
/// The root is accepted when `|function(x)| < epsilon`.
#[bon::builder]
pub fn find_root_newton(
    function: &dyn Fn(f64) -> f64,
    derivative: &dyn Fn(f64) -> f64,
    initial_guess: f64,
    #[builder(default = root_finding::DEFAULT_EPSILON)] epsilon: f64,
) -> Result<f64, RandError> {
    let epsilon: f64 = epsilon.max(root_finding::MIN_EPSILON);

    let mut x: f64 = initial_guess;
    let mut fx: f64 = function(x);
    if !fx.is_finite() {
        tracing::debug!(x, "Newton's method started on a non-finite value");
        return Err(RandError::NumericNonConvergence);
    }

    for _ in 0..root_finding::MAX_ITERATIONS {
        if fx.abs() < epsilon {
            return Ok(x);
        }

        let dfx: f64 = derivative(x);
        let step: f64 = fx / dfx;
        if !step.is_finite() {
            tracing::debug!(x, fx, dfx, "Newton's method hit a flat or invalid derivative");
            return Err(RandError::NumericNonConvergence);
        }

        let mut damping: f64 = 1.0;
        loop {
            let candidate: f64 = x - damping * step;
            let fc: f64 = function(candidate);
            let dfc: f64 = derivative(candidate);
            if fc.is_finite() && fc.abs() < fx.abs() && (fc.abs() < epsilon || dfc != 0.0) {
                x = candidate;
                fx = fc;
                break;
            }

            damping *= 0.5;
            if damping < root_finding::MIN_DAMPING {
                tracing::debug!(x, fx, "Newton's method could not improve the residual");
                return Err(RandError::NumericNonConvergence);
            }
        }
    }

    tracing::debug!(x, fx, "Newton's method exhausted it's iterations");
    return Err(RandError::NumericNonConvergence);
}

/// Finds a root of `function` with the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method), for when no
/// derivative is available.
///
/// The second starting point is a small perturbation of `initial_guess`.
#[bon::builder]
pub fn find_root_secant(
    function: &dyn Fn(f64) -> f64,
    initial_guess: f64,
    #[builder(default = root_finding::DEFAULT_EPSILON)] epsilon: f64,
) -> Result<f64, RandError> {
    let epsilon: f64 = epsilon.max(root_finding::MIN_EPSILON);

    let mut x0: f64 = initial_guess;
    let mut x1: f64 = initial_guess + 1e-4 * initial_guess.abs().max(1.0);
    let mut f0: f64 = function(x0);
    let mut f1: f64 = function(x1);

    for _ in 0..root_finding::MAX_ITERATIONS {
        if f1.abs() < epsilon {
            return Ok(x1);
        }
        if !f0.is_finite() || !f1.is_finite() {
            break;
        }

        let denominator: f64 = f1 - f0;
        if denominator == 0.0 {
            break;
        }
        let x2: f64 = x1 - f1 * (x1 - x0) / denominator;
        if !x2.is_finite() {
            break;
        }

        x0 = x1;
        f0 = f1;
        x1 = x2;
        f1 = function(x1);
    }

    tracing::debug!(x1, f1, "The secant method did not converge");
    return Err(RandError::NumericNonConvergence);
}

/// Finds a root of `function` inside `[a, b]` with
/// [Brent's method](https://en.wikipedia.org/wiki/Brent%27s_method).
///
/// `function(a)` and `function(b)` must have different signs (or one of them
/// be 0), otherwise [RandError::InvalidParameter] is returned. With a valid
/// bracket the method always converges.
#[bon::builder]
pub fn find_root_brent(
    function: &dyn Fn(f64) -> f64,
    a: f64,
    b: f64,
    #[builder(default = root_finding::DEFAULT_EPSILON)] epsilon: f64,
) -> Result<f64, RandError> {
    let epsilon: f64 = epsilon.max(root_finding::MIN_EPSILON);

    let mut a: f64 = a;
    let mut b: f64 = b;
    let mut fa: f64 = function(a);
    let mut fb: f64 = function(b);

    if fa == 0.0 {
        return Ok(a);
    }
    if fb == 0.0 {
        return Ok(b);
    }
    if fa.is_nan() || fb.is_nan() || fa.signum() == fb.signum() {
        tracing::debug!(a, b, fa, fb, "Brent's method needs a sign change");
        return Err(RandError::InvalidParameter);
    }

    let mut c: f64 = a;
    let mut fc: f64 = fa;
    let mut d: f64 = b - a;
    let mut e: f64 = d;

    for _ in 0..root_finding::MAX_ITERATIONS {
        if fb.signum() == fc.signum() {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tolerance: f64 = 2.0 * f64::EPSILON * b.abs() + 0.5 * epsilon;
        let m: f64 = 0.5 * (c - b);
        if m.abs() <= tolerance || fb == 0.0 {
            return Ok(b);
        }

        if e.abs() < tolerance || fa.abs() <= fb.abs() {
            // bisection
            d = m;
            e = m;
        } else {
            let s: f64 = fb / fa;
            let (mut p, mut q): (f64, f64) = if a == c {
                // secant
                (2.0 * m * s, 1.0 - s)
            } else {
                // inverse quadratic interpolation
                let q: f64 = fa / fc;
                let r: f64 = fb / fc;
                (
                    s * (2.0 * m * q * (q - r) - (b - a) * (r - 1.0)),
                    (q - 1.0) * (r - 1.0) * (s - 1.0),
                )
            };
            if 0.0 < p {
                q = -q;
            } else {
                p = -p;
            }

            if 2.0 * p < (3.0 * m * q - (tolerance * q).abs()).min((e * q).abs()) {
                e = d;
                d = p / q;
            } else {
                d = m;
                e = m;
            }
        }

        a = b;
        fa = fb;
        b += if tolerance < d.abs() {
            d
        } else if 0.0 < m {
            tolerance
        } else {
            -tolerance
        };
        fb = function(b);
    }

    tracing::debug!(b, fb, "Brent's method exhausted it's iterations");
    return Err(RandError::NumericNonConvergence);
}

/// Finds the minimum of `function` inside `[a, b]` with
/// [Brent's method](https://en.wikipedia.org/wiki/Brent%27s_method#Brent's_minimization)
/// (golden section search combined with parabolic interpolation).
///
/// Returns the location of the minimum. If `function` is not unimodal in
/// the bracket, a local minimum is returned.
#[bon::builder]
pub fn find_min(
    function: &dyn Fn(f64) -> f64,
    a: f64,
    b: f64,
    #[builder(default = minimization::DEFAULT_EPSILON)] epsilon: f64,
) -> Result<f64, RandError> {
    let (mut a, mut b): (f64, f64) = if a <= b { (a, b) } else { (b, a) };
    if !a.is_finite() || !b.is_finite() {
        tracing::debug!(a, b, "Brent's minimization needs a finite bracket");
        return Err(RandError::InvalidParameter);
    }

    let mut x: f64 = a + GOLDEN_SECTION * (b - a);
    let mut w: f64 = x;
    let mut v: f64 = x;
    let mut fx: f64 = function(x);
    let mut fw: f64 = fx;
    let mut fv: f64 = fx;
    let mut d: f64 = 0.0;
    let mut e: f64 = 0.0;

    for _ in 0..minimization::MAX_ITERATIONS {
        let m: f64 = 0.5 * (a + b);
        let tolerance: f64 = f64::EPSILON.sqrt() * x.abs() + epsilon / 3.0;
        let tolerance_2: f64 = 2.0 * tolerance;

        if (x - m).abs() <= tolerance_2 - 0.5 * (b - a) {
            return Ok(x);
        }

        let mut use_golden: bool = true;
        if tolerance < e.abs() {
            // try a parabolic fit trough x, w and v
            let r: f64 = (x - w) * (fx - fv);
            let mut q: f64 = (x - v) * (fx - fw);
            let mut p: f64 = (x - v) * q - (x - w) * r;
            q = 2.0 * (q - r);
            if 0.0 < q {
                p = -p;
            } else {
                q = -q;
            }
            let previous_e: f64 = e;
            e = d;

            if p.abs() < (0.5 * q * previous_e).abs() && q * (a - x) < p && p < q * (b - x) {
                d = p / q;
                let u: f64 = x + d;
                if u - a < tolerance_2 || b - u < tolerance_2 {
                    d = if x < m { tolerance } else { -tolerance };
                }
                use_golden = false;
            }
        }

        if use_golden {
            e = if x < m { b - x } else { a - x };
            d = GOLDEN_SECTION * e;
        }

        let u: f64 = x + if tolerance <= d.abs() {
            d
        } else if 0.0 < d {
            tolerance
        } else {
            -tolerance
        };
        let fu: f64 = function(u);

        if fu <= fx {
            if u < x {
                b = x;
            } else {
                a = x;
            }
            v = w;
            fv = fw;
            w = x;
            fw = fx;
            x = u;
            fx = fu;
        } else {
            if u < x {
                a = u;
            } else {
                b = u;
            }
            if fu <= fw || w == x {
                v = w;
                fv = fw;
                w = u;
                fw = fu;
            } else if fu <= fv || v == x || v == w {
                v = u;
                fv = fu;
            }
        }
    }

    tracing::debug!(x, fx, "Brent's minimization exhausted it's iterations");
    return Err(RandError::NumericNonConvergence);
}
