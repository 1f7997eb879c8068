//! This file contains the deafult values and other value choices used trough the library.
//!
//! There are no perfect values that will work with every distribution. Increasing
//! precision or iteration caps comes with an extra computational cost. This values
//! are just a mere recomendation.
//!

/// The library uses numerical integration in a few instances (the generic
/// [expected value](crate::distribution_trait::Distribution::expectation) and
/// everything built on top of it).
///
/// We integrate with an [adaptive Simpson's rule](https://en.wikipedia.org/wiki/Adaptive_Simpson%27s_method):
/// the interval is bisected until the coarse and the refined estimates agree
/// up to the tolerance of the subinterval, or until the maximum recursion depth is reached.
pub mod integration {

    /// The deafult tolerance of [crate::euclid::integral].
    pub const DEFAULT_EPSILON: f64 = 1e-11;

    /// The deafult maximum recursion depth of [crate::euclid::integral].
    ///
    /// Every level can double the number of evaluations, so the worst case
    /// is `~ 2^(depth + 1)` evaluations of the integrand.
    pub const DEFAULT_MAX_RECURSION_DEPTH: u32 = 10;
}

/// Values used by the root finding procedures
/// ([crate::euclid::find_root_newton], [crate::euclid::find_root_secant]
/// and [crate::euclid::find_root_brent]).
pub mod root_finding {

    /// Deafult tolerance.
    pub const DEFAULT_EPSILON: f64 = 1e-10;

    /// Maximum number of iterations before giving up.
    pub const MAX_ITERATIONS: u32 = 100_000;

    /// The tolerance is never allowed to go below this value.
    pub const MIN_EPSILON: f64 = 1e-21;

    /// Newton's step is halved while it does not improve the residual, but never
    /// below this fraction of the full step.
    pub const MIN_DAMPING: f64 = 1e-5;
}

/// Values used by [crate::euclid::find_min].
pub mod minimization {

    /// Deafult tolerance.
    pub const DEFAULT_EPSILON: f64 = 1e-10;

    /// Maximum number of iterations before giving up.
    pub const MAX_ITERATIONS: u32 = 10_000;
}

/// Values used by the generic [expected value](crate::distribution_trait::Distribution::expectation).
pub mod expected_value {

    /// The bounds of the integral are moved away from the starting point until
    /// both `|g(x) * pdf(x)|` and `pdf(x)` are smaller than this value.
    pub const EPSILON: f64 = 1e-10;

    /// Maximum number of steps (of size `variance`) when looking for each bound.
    /// If they are exhausted, the integral is considered divergent or too slow to
    /// decrease and a NaN is returned.
    pub const MAX_BOUND_STEPS: u32 = 1000;

    /// Maximum recursion depth of the integration.
    pub const MAX_RECURSION_DEPTH: u32 = 20;
}

/// Values used by the generic [mode](crate::distribution_trait::Distribution::mode).
pub mod mode {

    /// The first step of the bracket expansion is `STEP_VARIANCE_FACTOR * variance`.
    /// Every following step doubles the previous one.
    pub const STEP_VARIANCE_FACTOR: f64 = 1.0;

    /// Step used if the variance is undefined.
    pub const FALLBACK_STEP: f64 = 100.0;

    /// Maximum number of expansions of the bracket.
    pub const MAX_BRACKET_EXPANSIONS: u32 = 1000;
}

/// Values used by the discrete searches (quantile, mode and expected value
/// of [crate::distribution_trait::DiscreteDistribution]).
pub mod discrete {

    /// Maximum number of points visited by a search.
    pub const MAX_SEARCH_STEPS: u64 = 100_000_000;
}

/// Values used by the samplers.
pub mod sampling {

    /// Defensive cap of every "loop until accepted" sampler.
    ///
    /// It is a ceiling and not a designed limit: for valid parameters the
    /// expected number of iterations is a small constant and this value is
    /// never reached. If it is, the sampler reports
    /// [crate::errors::RandError::RejectionLoopExhaustion].
    pub const REJECTION_LOOP_CAP: u64 = 1_000_000_000;

    /// Relative tolerance used to decide if a parameter is "the same" as
    /// a close integer (or half integer).
    pub const CLOSENESS_EPSILON: f64 = 1e-6;
}
