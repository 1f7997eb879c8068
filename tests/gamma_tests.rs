//! Tests for the Gamma family ([Gamma], [ChiSquared], [Erlang]).
//!
//! The Monte-Carlo tests use a fixed seed, so they are deterministic. The
//! tolerances are 5 standard errors.

use AdvancedSampling::{
    distribution_trait::Distribution,
    distributions::{
        ChiSquared::ChiSquared,
        Erlang::Erlang,
        Gamma::{Gamma, GammaRegime},
    },
    errors::RandError,
    euclid,
    generator::RandGenerator,
};
use assert_approx_eq::assert_approx_eq;
use rand::SeedableRng;

const SAMPLES: usize = 100_000;

fn mean_and_variance(data: &[f64]) -> (f64, f64) {
    let n: f64 = data.len() as f64;
    let mean: f64 = data.iter().sum::<f64>() / n;
    let variance: f64 = data.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / (n - 1.0);
    return (mean, variance);
}

/// Checks the empirical mean and variance of `SAMPLES` batch draws.
fn check_moments(gamma: &Gamma, seed: u64) {
    let mut rng: RandGenerator = RandGenerator::seed_from_u64(seed);
    let mut data: Vec<f64> = vec![0.0; SAMPLES];
    gamma.sample(&mut rng, &mut data);
    assert!(data.iter().all(|&x| x.is_finite() && 0.0 <= x));

    let (mean, variance): (f64, f64) = mean_and_variance(&data);
    let true_mean: f64 = gamma.expected_value().unwrap();
    let true_variance: f64 = gamma.variance().unwrap();
    let n: f64 = SAMPLES as f64;

    let mean_tolerance: f64 = 5.0 * (true_variance / n).sqrt();
    assert!(
        (mean - true_mean).abs() < mean_tolerance,
        "shape: {}, mean: {mean}, expected: {true_mean}",
        gamma.get_shape()
    );

    // var(s^2) ~ sigma^4 * (kurtosis - 1) / n
    let kurtosis: f64 = gamma.kurtosis().unwrap();
    let variance_tolerance: f64 = 5.0 * true_variance * ((kurtosis - 1.0) / n).sqrt();
    assert!(
        (variance - true_variance).abs() < variance_tolerance,
        "shape: {}, variance: {variance}, expected: {true_variance}",
        gamma.get_shape()
    );
}

/// Kolmogorov–Smirnov check of `KS_SAMPLES` batch draws against [Gamma::cdf].
///
/// The empirical cdf is compared at `KS_POINTS` order statistics, so the
/// statistic is a lower bound of the exact one. The threshold is the
/// critical value at a significance of `0.001`.
fn check_distribution(gamma: &Gamma, seed: u64) {
    const KS_SAMPLES: usize = 1_000_000;
    const KS_POINTS: usize = 4000;

    let mut rng: RandGenerator = RandGenerator::seed_from_u64(seed);
    let mut data: Vec<f64> = vec![0.0; KS_SAMPLES];
    gamma.sample(&mut rng, &mut data);
    data.sort_by(f64::total_cmp);

    let n: f64 = KS_SAMPLES as f64;
    let mut statistic: f64 = 0.0;
    for i in (0..KS_SAMPLES).step_by(KS_SAMPLES / KS_POINTS) {
        let f: f64 = gamma.cdf(data[i]);
        let below: f64 = f - i as f64 / n;
        let above: f64 = (i + 1) as f64 / n - f;
        statistic = statistic.max(below).max(above);
    }

    let critical: f64 = 1.949 / n.sqrt();
    assert!(
        statistic < critical,
        "shape: {}, KS statistic: {statistic}, critical value: {critical}",
        gamma.get_shape()
    );
}

#[test]
fn concrete_values() {
    let gamma: Gamma = Gamma::new(2.0, 1.0);
    assert_eq!(gamma.expected_value(), Some(2.0));
    assert_eq!(gamma.variance(), Some(2.0));
    assert_eq!(gamma.cdf(0.0), 0.0);
    assert_approx_eq!(gamma.pdf(1.0), (-1.0_f64).exp(), 1e-12);
    // F(x) = 1 - (1 + x) e^-x
    assert_approx_eq!(gamma.cdf(3.0), 1.0 - 4.0 * (-3.0_f64).exp(), 1e-12);
    assert_approx_eq!(gamma.survival(3.0), 4.0 * (-3.0_f64).exp(), 1e-12);
    assert_approx_eq!(gamma.log_pdf(1.0), -1.0, 1e-12);
    assert_eq!(gamma.mode(), 1.0);
}

#[test]
fn pdf_at_zero() {
    assert!(Gamma::new(0.5, 1.0).pdf(0.0).is_infinite());
    assert_eq!(Gamma::new(1.0, 3.0).pdf(0.0), 3.0);
    assert_eq!(Gamma::new(2.0, 1.0).pdf(0.0), 0.0);
    assert_eq!(Gamma::new(2.0, 1.0).pdf(-1.0), 0.0);
    assert_eq!(Gamma::new(2.0, 1.0).log_pdf(-1.0), f64::NEG_INFINITY);
}

#[test]
fn invalid_parameters_are_clamped() {
    let gamma: Gamma = Gamma::new(-3.0, 0.0);
    assert_eq!(gamma.get_shape(), 1.0);
    assert_eq!(gamma.get_rate(), 1.0);

    let gamma: Gamma = Gamma::new(f64::NAN, f64::INFINITY);
    assert_eq!(gamma.get_shape(), 1.0);
    assert_eq!(gamma.get_rate(), 1.0);

    assert_eq!(Gamma::try_new(0.0, 1.0), Err(RandError::InvalidParameter));
    assert_eq!(Gamma::try_new(1.0, -2.0), Err(RandError::InvalidParameter));
    assert!(Gamma::try_new(2.0, 0.5).is_ok());
}

#[test]
fn near_integer_shapes_snap() {
    let gamma: Gamma = Gamma::new(3.000_000_1, 1.0);
    assert_eq!(gamma.get_shape(), 3.0);
    assert_eq!(gamma.get_regime(), &GammaRegime::IntegerShape { count: 3 });
}

#[test]
fn derived_values_follow_the_parameters() {
    let mut gamma: Gamma = Gamma::new(2.0, 4.0);
    assert_eq!(gamma.get_scale(), 0.25);
    assert_approx_eq!(gamma.get_log_rate(), 4.0_f64.ln(), 1e-15);
    assert_approx_eq!(gamma.get_ln_gamma_shape(), 0.0, 1e-15);

    gamma.set_shape(7.5);
    assert_eq!(gamma.get_shape(), 7.5);
    assert_eq!(gamma.get_rate(), 4.0);
    assert_approx_eq!(gamma.get_log_shape(), 7.5_f64.ln(), 1e-15);
    assert_approx_eq!(gamma.get_ln_gamma_shape(), euclid::ln_gamma(7.5), 1e-15);
    assert!(matches!(gamma.get_regime(), GammaRegime::LargeShape(_)));

    gamma.set_scale(2.0);
    assert_eq!(gamma.get_rate(), 0.5);
    assert_eq!(gamma.expected_value(), Some(15.0));

    gamma.set_rate(-1.0);
    assert_eq!(gamma.get_rate(), 1.0);
}

#[test]
fn regime_selection() {
    assert_eq!(Gamma::new(1.0, 1.0).get_regime(), &GammaRegime::IntegerShape { count: 1 });
    assert_eq!(Gamma::new(4.0, 1.0).get_regime(), &GammaRegime::IntegerShape { count: 4 });
    assert_eq!(Gamma::new(0.5, 1.0).get_regime(), &GammaRegime::HalfIntegerShape { count: 0 });
    assert_eq!(Gamma::new(3.5, 1.0).get_regime(), &GammaRegime::HalfIntegerShape { count: 3 });
    assert!(matches!(Gamma::new(0.7, 1.0).get_regime(), GammaRegime::SmallShape { .. }));
    assert_eq!(Gamma::new(1.7, 1.0).get_regime(), &GammaRegime::MediumShape);
    assert_eq!(Gamma::new(3.0, 1.0).get_regime(), &GammaRegime::IntegerShape { count: 3 });
    assert!(matches!(Gamma::new(3.2, 1.0).get_regime(), GammaRegime::LargeShape(_)));
    // integers over 5 are not summed
    assert!(matches!(Gamma::new(5.0, 1.0).get_regime(), GammaRegime::LargeShape(_)));
    assert!(matches!(Gamma::new(6.5, 1.0).get_regime(), GammaRegime::LargeShape(_)));
}

#[test]
fn integer_shape_moments() {
    for (i, shape) in [1.0, 2.0, 3.0, 4.0].into_iter().enumerate() {
        check_moments(&Gamma::new(shape, 1.0), 100 + i as u64);
    }
    check_moments(&Gamma::new(3.0, 2.5), 110);
}

#[test]
fn half_integer_shape_moments() {
    check_moments(&Gamma::new(0.5, 1.0), 200);
    check_moments(&Gamma::new(2.5, 1.0), 201);
    check_moments(&Gamma::new(4.5, 0.3), 202);
}

#[test]
fn small_shape_moments() {
    check_moments(&Gamma::new(0.7, 1.0), 300);
    check_moments(&Gamma::new(0.2, 2.0), 301);
}

#[test]
fn medium_shape_moments() {
    check_moments(&Gamma::new(1.7, 1.0), 400);
    check_moments(&Gamma::new(2.9, 0.5), 401);
}

#[test]
fn large_shape_moments() {
    check_moments(&Gamma::new(7.3, 1.0), 500);
    check_moments(&Gamma::new(42.0, 3.0), 501);
    check_moments(&Gamma::new(1000.0, 1.0), 502);
}

#[test]
fn integer_shape_distribution() {
    check_distribution(&Gamma::new(3.0, 1.0), 600);
}

#[test]
fn half_integer_shape_distribution() {
    check_distribution(&Gamma::new(2.5, 1.0), 610);
    check_distribution(&Gamma::new(4.5, 2.0), 611);
}

#[test]
fn small_shape_distribution() {
    check_distribution(&Gamma::new(0.3, 1.0), 620);
}

#[test]
fn medium_shape_distribution() {
    check_distribution(&Gamma::new(1.7, 1.0), 630);
}

#[test]
fn large_shape_distribution() {
    // just over the medium regime and non integers under 5
    check_distribution(&Gamma::new(3.2, 1.0), 640);
    check_distribution(&Gamma::new(4.6, 1.0), 641);
    check_distribution(&Gamma::new(7.3, 0.5), 642);
    check_distribution(&Gamma::new(42.0, 1.0), 643);
}

#[test]
fn large_shape_density_integrates_to_one() {
    // shapes over 130 read the last rows of the factorial table
    for shape in [131.0, 135.0, 140.0, 155.5] {
        let gamma: Gamma = Gamma::new(shape, 1.0);
        let total: f64 = euclid::integral()
            .function(&|x: f64| gamma.pdf(x))
            .a(0.0)
            .b(shape + 20.0 * shape.sqrt())
            .call();
        assert_approx_eq!(total, 1.0, 1e-7);
        assert_approx_eq!(gamma.cdf(shape + 20.0 * shape.sqrt()), 1.0, 1e-9);
    }
}

#[test]
fn single_draws_match_the_regime() {
    let gamma: Gamma = Gamma::new(7.3, 2.0);
    let mut rng: RandGenerator = RandGenerator::seed_from_u64(7);
    let data: Vec<f64> = (0..SAMPLES).map(|_| gamma.variate(&mut rng)).collect();
    let (mean, _): (f64, f64) = mean_and_variance(&data);
    let tolerance: f64 = 5.0 * (gamma.variance().unwrap() / SAMPLES as f64).sqrt();
    assert!((mean - 3.65).abs() < tolerance, "mean: {mean}");

    let mut rng: RandGenerator = RandGenerator::seed_from_u64(8);
    let iterated: Vec<f64> = gamma.iter(&mut rng).take(100).collect();
    assert_eq!(iterated.len(), 100);
    assert!(iterated.iter().all(|&x| 0.0 < x));

    let mut rng: RandGenerator = RandGenerator::seed_from_u64(9);
    assert!(gamma.try_variate(&mut rng).is_ok());
}

#[test]
fn sampling_is_deterministic() {
    let gamma: Gamma = Gamma::new(0.7, 1.0);
    let mut a: RandGenerator = RandGenerator::seed_from_u64(11);
    let mut b: RandGenerator = RandGenerator::seed_from_u64(11);
    let mut first: [f64; 64] = [0.0; 64];
    let mut second: [f64; 64] = [0.0; 64];
    gamma.sample(&mut a, &mut first);
    gamma.sample(&mut b, &mut second);
    assert_eq!(first, second);
}

#[test]
fn density_integrates_to_one() {
    for gamma in [Gamma::new(2.0, 1.0), Gamma::new(3.5, 2.0), Gamma::new(9.0, 0.5)] {
        let total: f64 = gamma.expectation(&|_| 1.0, gamma.expected_value().unwrap());
        assert_approx_eq!(total, 1.0, 1e-6);
    }
}

#[test]
fn cdf_is_monotone() {
    let gamma: Gamma = Gamma::new(2.3, 1.4);
    let mut previous: f64 = gamma.cdf(0.0);
    assert_eq!(previous, 0.0);
    for i in 1..200 {
        let current: f64 = gamma.cdf(f64::from(i) * 0.1);
        assert!(previous <= current);
        previous = current;
    }
    assert_approx_eq!(gamma.cdf(100.0), 1.0, 1e-12);
}

#[test]
fn quantile_round_trip() {
    let gamma: Gamma = Gamma::new(2.5, 1.5);
    for i in 1..10 {
        let p: f64 = f64::from(i) * 0.1;
        let x: f64 = gamma.quantile(p);
        assert_approx_eq!(gamma.cdf(x), p, 1e-6);
    }
    assert_eq!(gamma.quantile(0.0), 0.0);
    assert_eq!(gamma.quantile(1.0), f64::INFINITY);
    assert!(gamma.quantile(1.5).is_nan());
    assert!(gamma.quantile(f64::NAN).is_nan());
}

#[test]
fn closed_forms_match_the_generic_versions() {
    let gamma: Gamma = Gamma::new(3.5, 2.0);
    let mean: f64 = gamma.expected_value().unwrap();

    // the generic procedures of the trait, evaluated directly
    let skewness: f64 = gamma.moments(3, euclid::Moments::Standarized);
    assert_approx_eq!(skewness, gamma.skewness().unwrap(), 1e-5);

    let entropy: f64 = gamma.expectation(&|x: f64| -gamma.log_pdf(x), mean);
    assert_approx_eq!(entropy, gamma.entropy(), 1e-5);

    let re: f64 = gamma.expectation(&|x: f64| (0.7 * x).cos(), mean);
    let im: f64 = gamma.expectation(&|x: f64| (0.7 * x).sin(), mean);
    let cf = gamma.characteristic_function(0.7);
    assert_approx_eq!(cf.re, re, 1e-6);
    assert_approx_eq!(cf.im, im, 1e-6);

    let geometric: f64 = gamma.expectation(&f64::ln, mean).exp();
    assert_approx_eq!(geometric, gamma.geometric_mean(), 1e-5);
}

#[test]
fn chi_squared_is_a_gamma() {
    let chi: ChiSquared = ChiSquared::new(5);
    let gamma: Gamma = Gamma::new(2.5, 0.5);
    for x in [0.5, 1.0, 4.0, 11.0] {
        assert_eq!(chi.pdf(x), gamma.pdf(x));
        assert_eq!(chi.cdf(x), gamma.cdf(x));
    }
    assert_eq!(chi.expected_value(), Some(5.0));
    assert_eq!(chi.variance(), Some(10.0));
    assert_eq!(chi.as_gamma(), &gamma);

    let mut chi: ChiSquared = ChiSquared::new(0);
    assert_eq!(chi.get_degrees_of_freedom(), 1);
    chi.set_degrees_of_freedom(4);
    assert_eq!(chi.as_gamma().get_regime(), &GammaRegime::IntegerShape { count: 2 });
    assert_eq!(ChiSquared::try_new(0), Err(RandError::InvalidParameter));

    // chi squared with 1 degree of freedom is a squared standard normal
    assert_approx_eq!(ChiSquared::new(1).cdf(1.0), 0.682_689_492_137_085_9, 1e-10);
}

#[test]
fn erlang_is_a_gamma() {
    let erlang: Erlang = Erlang::new(3, 2.0);
    let gamma: Gamma = Gamma::new(3.0, 2.0);
    for x in [0.1, 1.0, 2.5] {
        assert_eq!(erlang.pdf(x), gamma.pdf(x));
        assert_eq!(erlang.survival(x), gamma.survival(x));
    }
    assert_eq!(erlang.expected_value(), Some(1.5));

    let mut erlang: Erlang = Erlang::new(0, -1.0);
    assert_eq!(erlang.get_shape(), 1);
    assert_eq!(erlang.get_rate(), 1.0);
    erlang.set_shape(4);
    erlang.set_rate(0.5);
    assert_eq!(erlang.as_gamma(), &Gamma::new(4.0, 0.5));
    assert!(Erlang::try_new(2, 0.0).is_err());

    let mut rng: RandGenerator = RandGenerator::seed_from_u64(33);
    let mut data: Vec<f64> = vec![0.0; SAMPLES];
    erlang.sample(&mut rng, &mut data);
    let (mean, _): (f64, f64) = mean_and_variance(&data);
    // mean 8, variance 16
    assert!((mean - 8.0).abs() < 5.0 * (16.0 / SAMPLES as f64).sqrt());
}
