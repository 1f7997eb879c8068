//! A Domain represents the set of points where a function is defined.
//!
//! In this library we use it mainly for the pdf or pmf of Distributons (see
//! [crate::distribution_trait]). It has 2 variants:
//!  - [DiscreteDomain]
//!  - [ContinuousDomain]
//!

/// A [domain](https://en.wikipedia.org/wiki/Domain_of_a_function) composed of
/// integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiscreteDomain {
    /// All integers
    #[default]
    Integers,
    /// All the integers in the range [.0, .1] (**both** inclusive).
    /// The first number is the minimum, and the last is the maximum.
    ///
    /// Has the **invariant** that `min <= max`.
    Range(i64, i64),
    /// All the integers from the given value onwards. The value **is** included.
    From(i64),
    /// All the integers until the given value. The value **is** included.
    To(i64),
}

/// A [domain](https://en.wikipedia.org/wiki/Domain_of_a_function) of a region
/// of the real numbers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ContinuousDomain {
    /// All real numbers
    #[default]
    Reals,
    /// The values contained in the range.
    ///
    /// The first number is the minimum, and the last is the maximum.
    ///
    /// Has the **invariant** that `min <= max`.
    Range(f64, f64),
    /// All the numbers from the given value onwards.
    From(f64),
    /// All the numbers until the given value.
    To(f64),
}

impl DiscreteDomain {
    #[must_use]
    pub const fn contains(&self, x: i64) -> bool {
        match self {
            DiscreteDomain::Integers => true,
            DiscreteDomain::Range(min, max) => (*min <= x) && (x <= *max),
            DiscreteDomain::From(min) => *min <= x,
            DiscreteDomain::To(max) => x <= *max,
        }
    }

    /// Returns the lower and upper bounds of the domain (both included).
    ///
    /// Unbounded sides are represented by [i64::MIN] and [i64::MAX].
    #[must_use]
    pub const fn get_bounds(&self) -> (i64, i64) {
        match self {
            DiscreteDomain::Integers => (i64::MIN, i64::MAX),
            DiscreteDomain::Range(min, max) => (*min, *max),
            DiscreteDomain::From(min) => (*min, i64::MAX),
            DiscreteDomain::To(max) => (i64::MIN, *max),
        }
    }

    /// Moves `x` inside the domain (to the closest bound if it was outside).
    #[must_use]
    pub fn clamp(&self, x: i64) -> i64 {
        let (min, max): (i64, i64) = self.get_bounds();
        return x.clamp(min, max);
    }

    /// Returns true if the domain contains a finite number of elements.
    #[must_use]
    pub const fn contains_finite_elements(&self) -> bool {
        match self {
            DiscreteDomain::Range(_, _) => true,
            DiscreteDomain::Integers | DiscreteDomain::From(_) | DiscreteDomain::To(_) => false,
        }
    }
}

impl ContinuousDomain {
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        match self {
            ContinuousDomain::Reals => !x.is_nan(),
            ContinuousDomain::Range(min, max) => (*min <= x) && (x <= *max),
            ContinuousDomain::From(min) => *min <= x,
            ContinuousDomain::To(max) => x <= *max,
        }
    }

    /// Returns the upper and lower bounds of the domain.
    ///
    /// Take into account that the values can also include positive and negative infinity.
    /// It is guaranteed that return.0 <= return.1. If the bounds are finite, the values
    /// themselves are included.
    #[must_use]
    pub const fn get_bounds(&self) -> (f64, f64) {
        match self {
            ContinuousDomain::Reals => (f64::NEG_INFINITY, f64::INFINITY),
            ContinuousDomain::Range(min, max) => (*min, *max),
            ContinuousDomain::From(min) => (*min, f64::INFINITY),
            ContinuousDomain::To(max) => (f64::NEG_INFINITY, *max),
        }
    }

    /// Moves `x` inside the domain (to the closest bound if it was outside).
    #[must_use]
    pub fn clamp(&self, x: f64) -> f64 {
        let (min, max): (f64, f64) = self.get_bounds();
        return x.clamp(min, max);
    }
}
