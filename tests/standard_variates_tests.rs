//! Tests for the building blocks of the samplers: [Uniform], [Exponential]
//! and [Normal].

use std::f64::consts::PI;

use AdvancedSampling::{
    distribution_trait::Distribution,
    distributions::{
        Exponential::Exponential,
        Normal::{Normal, StdNormal},
        Uniform::Uniform,
    },
    errors::RandError,
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

#[test]
fn standard_uniform_range() {
    let mut rng: RandGenerator = RandGenerator::seed_from_u64(1);
    for _ in 0..SAMPLES {
        let u: f64 = Uniform::standard_variate(&mut rng);
        assert!((0.0..1.0).contains(&u));
        let v: f64 = Uniform::standard_variate_positive(&mut rng);
        assert!(0.0 < v && v <= 1.0);
    }
}

#[test]
fn uniform_distribution() {
    let uniform: Uniform = Uniform::new(-2.0, 6.0);
    assert_eq!(uniform.pdf(0.0), 0.125);
    assert_eq!(uniform.pdf(7.0), 0.0);
    assert_eq!(uniform.cdf(2.0), 0.5);
    assert_eq!(uniform.quantile(0.25), 0.0);
    assert_eq!(uniform.expected_value(), Some(2.0));

    let invalid: Uniform = Uniform::new(3.0, 1.0);
    assert_eq!((invalid.get_a(), invalid.get_b()), (0.0, 1.0));
    assert_eq!(Uniform::try_new(1.0, 1.0), Err(RandError::InvalidParameter));

    let mut rng: RandGenerator = RandGenerator::seed_from_u64(2);
    let mut data: Vec<f64> = vec![0.0; SAMPLES];
    uniform.sample(&mut rng, &mut data);
    let (mean, _): (f64, f64) = mean_and_variance(&data);
    // variance 64 / 12
    assert!((mean - 2.0).abs() < 5.0 * (64.0 / 12.0 / SAMPLES as f64).sqrt());
}

#[test]
fn exponential_distribution() {
    let exponential: Exponential = Exponential::new(2.0);
    assert_eq!(exponential.pdf(0.0), 2.0);
    assert_approx_eq!(exponential.cdf(1.0), 1.0 - (-2.0_f64).exp(), 1e-15);
    assert_approx_eq!(exponential.quantile(exponential.cdf(0.8)), 0.8, 1e-12);
    assert_eq!(exponential.hazard(3.0), 2.0);
    assert_eq!(Exponential::new(-1.0).get_lambda(), 1.0);

    let mut rng: RandGenerator = RandGenerator::seed_from_u64(3);
    let data: Vec<f64> = exponential.iter(&mut rng).take(SAMPLES).collect();
    let (mean, variance): (f64, f64) = mean_and_variance(&data);
    assert!((mean - 0.5).abs() < 5.0 * (0.25 / SAMPLES as f64).sqrt(), "mean: {mean}");
    assert!((variance - 0.25).abs() < 5.0 * 0.25 * (8.0 / SAMPLES as f64).sqrt());
}

#[test]
fn standard_normal_values() {
    let normal: StdNormal = StdNormal::new();
    assert_approx_eq!(normal.pdf(0.0), 1.0 / (2.0 * PI).sqrt(), 1e-15);
    assert_eq!(normal.cdf(0.0), 0.5);
    assert_approx_eq!(normal.cdf(1.96), 0.975_002_104_851_780_1, 1e-12);
    assert_approx_eq!(normal.cdf(-1.0), 0.158_655_253_931_457_05, 1e-12);
    assert_approx_eq!(normal.quantile(0.975), 1.959_963_984_540_054, 1e-6);
}

#[test]
fn normal_sampling() {
    let normal: Normal = Normal::new(3.0, 2.0);
    let mut rng: RandGenerator = RandGenerator::seed_from_u64(4);
    // odd length: the last value does not come from a pair
    let mut data: Vec<f64> = vec![0.0; SAMPLES + 1];
    normal.sample(&mut rng, &mut data);
    let (mean, variance): (f64, f64) = mean_and_variance(&data);
    assert!((mean - 3.0).abs() < 5.0 * (4.0 / SAMPLES as f64).sqrt(), "mean: {mean}");
    assert!((variance - 4.0).abs() < 5.0 * 4.0 * (2.0 / SAMPLES as f64).sqrt());

    let mut rng: RandGenerator = RandGenerator::seed_from_u64(5);
    let (z1, z2): (f64, f64) = StdNormal::try_variate_pair(&mut rng).unwrap();
    assert!(z1.is_finite() && z2.is_finite());
}

#[test]
fn normal_parameters() {
    let normal: Normal = Normal::new(f64::NAN, -1.0);
    assert_eq!(normal.get_mean(), 0.0);
    assert_eq!(normal.get_standard_deviation(), 1.0);
    assert!(Normal::try_new(0.0, 0.0).is_err());

    let normal: Normal = Normal::new(1.0, 3.0);
    assert_approx_eq!(normal.cdf(1.0), 0.5, 1e-15);
    let cf = normal.characteristic_function(0.5);
    assert_approx_eq!(cf.norm(), (-0.5 * 2.25_f64).exp(), 1e-12);
}
