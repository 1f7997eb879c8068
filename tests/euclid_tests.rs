//! Tests for the numerical kernel trough the public interface.
//!
//! Reference values come from wolframalpha.

use std::f64::consts::{E, PI};

use AdvancedSampling::errors::RandError;
use AdvancedSampling::euclid;
use assert_approx_eq::assert_approx_eq;

#[test]
fn factorials_agree_at_the_table_boundary() {
    // the last table value and the log version must agree
    let table: f64 = euclid::factorial(170);
    assert!(table.is_finite());
    assert_approx_eq!(table.ln(), euclid::ln_factorial(170), 1e-9);
    assert!(euclid::factorial(171).is_infinite());
    // Stirling beyond the table
    assert_approx_eq!(euclid::ln_factorial(171), 171.0_f64.ln() + table.ln(), 1e-9);
}

#[test]
fn binomial_coefficients() {
    assert_eq!(euclid::binomial_coef(10, 3), 120.0);
    assert_eq!(euclid::binomial_coef(3, 10), 0.0);
    assert_eq!(euclid::binomial_coef(50, 0), 1.0);
    for k in 0..=20 {
        assert_eq!(euclid::binomial_coef(20, k), euclid::binomial_coef(20, 20 - k));
    }
    // C(1000, 500) ~ 2.7028824094543655e299
    let big: f64 = euclid::binomial_coef(1000, 500);
    assert!((big / 2.702_882_409_454_365_5e299 - 1.0).abs() < 1e-8);
}

#[test]
fn gamma_family_functions() {
    assert_approx_eq!(euclid::gamma(5.0), 24.0, 1e-12);
    assert_approx_eq!(euclid::gamma(0.5), PI.sqrt(), 1e-12);
    assert_approx_eq!(euclid::gamma_half(2), 0.75 * PI.sqrt(), 1e-12);
    assert_approx_eq!(euclid::ln_gamma(100.0), 359.134_205_369_575_4, 1e-9);
    assert_approx_eq!(euclid::ln_gamma(100.5), euclid::ln_gamma(100.0) + 0.5 * 100.0_f64.ln(), 1e-2);

    assert_approx_eq!(euclid::digamma(1.0), -euclid::EULER_MASCHERONI, 1e-10);
    assert_approx_eq!(euclid::digamma(2.5), 0.703_156_640_645_243_2, 1e-10);
    // psi(n) = H(n - 1) - gamma, exact for small integers and series after
    assert_approx_eq!(euclid::digamma(5.0), 25.0 / 12.0 - euclid::EULER_MASCHERONI, 1e-15);
    assert_approx_eq!(euclid::digamma(40.0), 3.676_327_374_034_842_8, 1e-12);
    assert!(euclid::digamma(32.0) < euclid::digamma(32.5));
    // integers read the factorial table, also it's last rows
    assert_approx_eq!(euclid::ln_gamma(131.0), 506.132_825_342_034_95, 1e-9);
    assert_approx_eq!(euclid::ln_gamma(141.0), 555.220_294_146_894_8, 1e-9);
    assert_approx_eq!(euclid::trigamma(1.0), PI * PI / 6.0, 1e-10);
}

#[test]
fn incomplete_gamma_functions() {
    // P(1, x) = 1 - e^-x
    assert_approx_eq!(euclid::regularized_lower_inc_gamma(1.0, 2.0), 1.0 - (-2.0_f64).exp(), 1e-12);
    // both sides of the series / fraction split
    for &(a, x) in &[(2.5, 1.0), (2.5, 6.0), (0.3, 0.1), (10.0, 30.0)] {
        let p: f64 = euclid::regularized_lower_inc_gamma(a, x);
        let q: f64 = euclid::regularized_upper_inc_gamma(a, x);
        assert_approx_eq!(p + q, 1.0, 1e-12);
    }
    // γ(2, 3) = 1 - 4 e^-3
    assert_approx_eq!(euclid::lower_inc_gamma(2.0, 3.0), 1.0 - 4.0 * (-3.0_f64).exp(), 1e-12);
    assert_approx_eq!(euclid::upper_inc_gamma(2.0, 3.0), 4.0 * (-3.0_f64).exp(), 1e-12);
}

#[test]
fn beta_functions() {
    assert_approx_eq!(euclid::beta_fun(2.0, 3.0), 1.0 / 12.0, 1e-12);
    // I_x(1, 1) = x
    assert_approx_eq!(euclid::regularized_beta_fun(0.3, 1.0, 1.0), 0.3, 1e-12);
    // symmetry I_x(a, b) = 1 - I_(1-x)(b, a)
    let left: f64 = euclid::regularized_beta_fun(0.7, 3.0, 5.0);
    let right: f64 = 1.0 - euclid::regularized_beta_fun(0.3, 5.0, 3.0);
    assert_approx_eq!(left, right, 1e-12);
    // I_0.4(2, 3) = 0.5248
    assert_approx_eq!(euclid::regularized_beta_fun(0.4, 2.0, 3.0), 0.5248, 1e-12);
}

#[test]
fn zeta_and_bernoulli_numbers() {
    assert_approx_eq!(euclid::zeta_riemann(2.0), PI * PI / 6.0, 1e-10);
    assert_approx_eq!(euclid::zeta_riemann(4.0), PI.powi(4) / 90.0, 1e-10);
    assert_approx_eq!(euclid::zeta_riemann(0.0), -0.5, 1e-10);
    assert!(euclid::zeta_riemann(1.0).is_infinite());

    assert_eq!(euclid::bernoulli_number(0), 1.0);
    assert_approx_eq!(euclid::bernoulli_number(2), 1.0 / 6.0, 1e-13);
    assert_eq!(euclid::bernoulli_number(7), 0.0);
    assert_approx_eq!(euclid::bernoulli_number(20), -529.124_242_424_242_4, 1e-6);
}

#[test]
fn modified_bessel() {
    // I_0(1) = 1.2660658777520082
    assert_approx_eq!(euclid::modified_bessel_first_kind(1.0, 0.0), 1.266_065_877_752_008_2, 1e-12);
    // I_1(-2) = -I_1(2)
    let i1: f64 = euclid::modified_bessel_first_kind(2.0, 1.0);
    assert_approx_eq!(i1, 1.590_636_854_637_329, 1e-12);
    assert_approx_eq!(euclid::modified_bessel_first_kind(-2.0, 1.0), -i1, 1e-12);
    assert!(euclid::modified_bessel_first_kind(-2.0, 0.5).is_nan());
}

#[test]
fn simpson_integration() {
    let sin = |x: f64| x.sin();
    let result: f64 = euclid::integral().function(&sin).a(0.0).b(PI).call();
    assert_approx_eq!(result, 2.0, 1e-9);

    let exp = |x: f64| x.exp();
    let reversed: f64 = euclid::integral().function(&exp).a(1.0).b(0.0).call();
    assert_approx_eq!(reversed, 1.0 - E, 1e-9);

    // a low depth still terminates
    let wild = |x: f64| (1.0 / x).sin();
    let rough: f64 = euclid::integral()
        .function(&wild)
        .a(0.001)
        .b(1.0)
        .max_depth(3)
        .call();
    assert!(rough.is_finite());
}

#[test]
fn root_finding() {
    let f = |x: f64| x * x - 2.0;
    let df = |x: f64| 2.0 * x;

    let newton: f64 = euclid::find_root_newton()
        .function(&f)
        .derivative(&df)
        .initial_guess(1.0)
        .call()
        .expect("Newton should converge for x^2 - 2");
    assert_approx_eq!(newton, 2.0_f64.sqrt(), 1e-9);

    let secant: f64 = euclid::find_root_secant()
        .function(&f)
        .initial_guess(1.0)
        .call()
        .expect("The secant method should converge for x^2 - 2");
    assert_approx_eq!(secant, 2.0_f64.sqrt(), 1e-9);

    let brent: f64 = euclid::find_root_brent()
        .function(&f)
        .a(0.0)
        .b(3.0)
        .call()
        .expect("There is a sign change in [0, 3]");
    assert_approx_eq!(brent, 2.0_f64.sqrt(), 1e-9);
}

#[test]
fn root_finding_failures_are_reported() {
    let no_root = |x: f64| x * x + 1.0;
    let derivative = |x: f64| 2.0 * x;

    let newton: Result<f64, RandError> = euclid::find_root_newton()
        .function(&no_root)
        .derivative(&derivative)
        .initial_guess(3.0)
        .call();
    assert!(newton.is_err());

    let brent: Result<f64, RandError> = euclid::find_root_brent()
        .function(&no_root)
        .a(-1.0)
        .b(1.0)
        .call();
    assert_eq!(brent, Err(RandError::InvalidParameter));
}

#[test]
fn minimization() {
    let parabola = |x: f64| (x - 1.5) * (x - 1.5) + 3.0;
    let min: f64 = euclid::find_min()
        .function(&parabola)
        .a(-10.0)
        .b(10.0)
        .call()
        .expect("The bracket is finite");
    assert_approx_eq!(min, 1.5, 1e-6);

    let cos_min: f64 = euclid::find_min()
        .function(&f64::cos)
        .a(2.0)
        .b(4.0)
        .call()
        .expect("The bracket is finite");
    assert_approx_eq!(cos_min, PI, 1e-6);

    let unbounded: Result<f64, RandError> = euclid::find_min()
        .function(&parabola)
        .a(0.0)
        .b(f64::INFINITY)
        .call();
    assert_eq!(unbounded, Err(RandError::InvalidParameter));
}

#[test]
fn helpers() {
    assert!(euclid::are_close(1.0, 1.0 + 1e-9, 1e-6));
    assert!(!euclid::are_close(1.0, 1.1, 1e-6));
    assert_approx_eq!(euclid::linear_interpolation(1.5, 1.0, 10.0, 2.0, 20.0), 15.0, 1e-12);
    assert_approx_eq!(euclid::harmonic_number(1.0, 4), 25.0 / 12.0, 1e-12);
}
