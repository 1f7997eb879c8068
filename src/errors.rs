use thiserror::Error;

/// What went wrong inside the library.
///
/// Most public functions do **not** return this type directly: following the
/// convention of the numerical routines, soft failures are encoded in the
/// returned value (a NaN, `+inf` or `-1`). [RandError] is used by the internal
/// fallible computations (root finding, bounded rejection loops...) and by the
/// `try_*` variants of the public API.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandError {
    /// A parameter was outside the domain of the distribution. The regular
    /// constructors clamp the value to a safe default instead of failing.
    #[error("A parameter was outside the domain of the distribution. ")]
    InvalidParameter,
    /// A root-finding, integration or minimization routine exceeded it's
    /// iteration cap before converging. The result is undetermined.
    #[error(
        "A numerical routine exceeded it's iteration cap before converging. The result is undetermined. "
    )]
    NumericNonConvergence,
    /// A sampling loop exceeded it's defensive iteration cap. This is never
    /// expected for valid parameters and indicates a logic fault.
    #[error(
        "A sampling loop exceeded it's defensive iteration cap. This indicates a parameter or logic fault. "
    )]
    RejectionLoopExhaustion,
    /// A probability outside `[0.0, 1.0]` (or a NaN) was given to a quantile function.
    #[error("A probability outside [0.0, 1.0] (or a NaN) was given to a quantile function. ")]
    InvalidQuery,
}
