//! The distributions implemented by this library.
//!
//! The Gamma family ([Gamma], [ChiSquared], [Erlang]) and [Binomial] have
//! regime selected samplers. The rest are the standard variates they are
//! built from.

use crate::configuration;
use crate::errors::RandError;

// Discrete
pub mod Bernoulli;
pub mod Binomial;
pub mod Geometric;

// Continuous
pub mod ChiSquared;
pub mod Erlang;
pub mod Exponential;
pub mod Gamma;
pub mod Normal;
pub mod Uniform;

/// Runs `attempt` until it accepts (returns `Some`), at most `cap` times.
///
/// This is the shape of every "loop until accepted" sampler of the library.
/// For valid parameters the expected number of attempts is a small constant
/// and the cap is never reached. If it is, [RandError::RejectionLoopExhaustion]
/// is returned instead of looping forever.
pub(crate) fn bounded_rejection<T, F>(cap: u64, mut attempt: F) -> Result<T, RandError>
where
    F: FnMut() -> Option<T>,
{
    for _ in 0..cap {
        if let Some(value) = attempt() {
            return Ok(value);
        }
    }
    tracing::warn!(cap, "A rejection loop exhausted it's iteration cap");
    return Err(RandError::RejectionLoopExhaustion);
}

/// [bounded_rejection] with the deafult cap
/// ([configuration::sampling::REJECTION_LOOP_CAP]).
pub(crate) fn rejection_loop<T, F>(attempt: F) -> Result<T, RandError>
where
    F: FnMut() -> Option<T>,
{
    return bounded_rejection(configuration::sampling::REJECTION_LOOP_CAP, attempt);
}
