#![allow(
    non_snake_case,
    clippy::needless_return,
    clippy::assign_op_pattern,
    clippy::excessive_precision
)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
)]
// ^Disable warning "crate `AdvancedSampling` should have a snake case name convert the identifier to snake case: `advanced_sampling`"
// The rest of the names will follow the snake_case convention.

//! # Advanced Sampling
//!
//! This library generates random variates and evaluates the common functions
//! (pdf, cdf, quantile, moments...) of a few probability distributions. It provides:
//!
//! - [x] [Uniform engines](generator) (32 and 64 bit KISS generators)
//! - [x] A [numerical kernel](euclid): special functions, integration,
//!     root finding and minimization.
//! - [x] Regime selected samplers for the Gamma family and the Binomial distribution
//! - [x] Generic quantile, mode and expected value for any distribution
//! - [x] Updated to rust 2024 version
//!
//! ## Distributions
//!
//! We have defined the traits [Distribution](distribution_trait::Distribution) and
//! [DiscreteDistribution](distribution_trait::DiscreteDistribution). The requiered
//! methods are the density (pdf or pmf), the cdf, the [domain], the mean, the
//! variance and a way to draw a variate.
//!
//! After this, a wide array of funcions are avaliable (check
//! [distribution_trait::Distribution] for more details). Note that this deafult
//! implementations can be computationally costly, therefore the distributions
//! of this library override them whenever there is an analytical solution.
//!
//! ### Continuous distributions:
//!
//!  - [x] [Gamma distribution](crate::distributions::Gamma) ([Wiki](https://en.wikipedia.org/wiki/Gamma_distribution))
//!  - [x] [Chi-squared distribution](crate::distributions::ChiSquared) ([Wiki](https://en.wikipedia.org/wiki/Chi-squared_distribution))
//!  - [x] [Erlang distribution](crate::distributions::Erlang) ([Wiki](https://en.wikipedia.org/wiki/Erlang_distribution))
//!  - [x] [Normal distribution](crate::distributions::Normal) ([Wiki](https://en.wikipedia.org/wiki/Normal_distribution))
//!  - [x] [Uniform distribution](crate::distributions::Uniform) ([Wiki](https://en.wikipedia.org/wiki/Continuous_uniform_distribution))
//!  - [x] [Exponential](crate::distributions::Exponential) ([Wiki](https://en.wikipedia.org/wiki/Exponential_distribution))
//!
//! ### Discrete distributions:
//!
//!  - [x] [Binomial](distributions::Binomial) ([Wiki](https://en.wikipedia.org/wiki/Binomial_distribution))
//!  - [x] [Bernoulli](distributions::Bernoulli) ([Wiki](https://en.wikipedia.org/wiki/Bernoulli_distribution))
//!  - [x] [Geometric distribution](distributions::Geometric) ([Wiki](https://en.wikipedia.org/wiki/Geometric_distribution))
//!
//! ## Randomness
//!
//! Nothing in this library uses global state. Every sampling method takes an
//! explicit generator (anything implementing [rand::RngCore]), so:
//!
//! ```
//! use AdvancedSampling::distribution_trait::Distribution;
//! use AdvancedSampling::distributions::Gamma::Gamma;
//! use AdvancedSampling::generator::RandGenerator;
//! use rand::SeedableRng;
//!
//! let mut rng: RandGenerator = RandGenerator::seed_from_u64(42);
//! let gamma: Gamma = Gamma::new(2.5, 1.0);
//!
//! let mut buffer: [f64; 16] = [0.0; 16];
//! gamma.sample(&mut rng, &mut buffer);
//! assert!(buffer.iter().all(|&x| 0.0 <= x));
//! ```
//!
//! ***
//!

pub mod configuration;
pub mod distribution_trait;
pub mod distributions;
pub mod domain;
pub mod errors;
pub mod euclid;
pub mod generator;
