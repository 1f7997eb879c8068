//! Factorials, binomial coefficients and other integer sequences.

use super::special::zeta_riemann;

/// The largest `n` such that `n!` is representable by an [f64].
pub const MAX_FACTORIAL_ARGUMENT: u64 = 170;

/// `(10 * k)!` for `k` in `0..=17`.
const FACTORIAL_TABLE: [f64; 18] = [
    1.0,
    3_628_800.0,
    2.432_902_008_176_64e18,
    2.652_528_598_121_910_6e32,
    8.159_152_832_478_977e47,
    3.041_409_320_171_337_6e64,
    8.320_987_112_741_39e81,
    1.197_857_166_996_989_2e100,
    7.156_945_704_626_381e118,
    1.485_715_964_481_761_5e138,
    9.332_621_544_394_415e157,
    1.588_245_541_522_743e178,
    6.689_502_913_449_127e198,
    6.466_855_489_220_474e219,
    1.346_201_247_571_752_5e241,
    5.713_383_956_445_855e262,
    4.714_723_635_992_061_6e284,
    7.257_415_615_307_999e306,
];

/// Computes the [factorial](https://en.wikipedia.org/wiki/Factorial) `n!`.
///
/// The closest multiple of 10 is read from a table and at most 9 more
/// multiplications are performed. For `n > 170` the result does not fit in
/// an [f64] and `+inf` is returned. Use [ln_factorial] in that case.
#[must_use]
pub fn factorial(n: u64) -> f64 {
    if MAX_FACTORIAL_ARGUMENT < n {
        return f64::INFINITY;
    }

    let index: usize = (n / 10) as usize;
    let mut ret: f64 = FACTORIAL_TABLE[index];
    for i in (index as u64 * 10 + 1)..=n {
        ret *= i as f64;
    }
    return ret;
}

/// Computes `ln(n!)`.
///
/// Exact (table based) up to `n = 170` and
/// [Stirling's series](https://en.wikipedia.org/wiki/Stirling%27s_approximation)
/// with 4 correction terms beyond that.
#[must_use]
pub fn ln_factorial(n: u64) -> f64 {
    if n <= MAX_FACTORIAL_ARGUMENT {
        return factorial(n).ln();
    }

    let x: f64 = n as f64;
    let inv: f64 = 1.0 / x;
    let inv_2: f64 = inv * inv;
    // 1/(12n) - 1/(360n^3) + 1/(1260n^5) - 1/(1680n^7)
    let correction: f64 =
        inv * (1.0 / 12.0 - inv_2 * (1.0 / 360.0 - inv_2 * (1.0 / 1260.0 - inv_2 / 1680.0)));

    return x * x.ln() - x + 0.5 * (2.0 * std::f64::consts::PI * x).ln() + correction;
}

/// Computes the [double factorial](https://en.wikipedia.org/wiki/Double_factorial)
/// `n!! = n * (n - 2) * (n - 4) * ...`
///
/// Returns `+inf` on overflow.
#[must_use]
pub fn double_factorial(n: u64) -> f64 {
    let mut ret: f64 = 1.0;
    let mut i: u64 = n;
    while 1 < i {
        ret *= i as f64;
        if ret.is_infinite() {
            break;
        }
        i -= 2;
    }
    return ret;
}

/// Computes the [binomial coefficient](https://en.wikipedia.org/wiki/Binomial_coefficient)
/// `C(n, k) = n! / (k! * (n - k)!)`.
///
/// If `n < k` the result is `0.0`.
///
/// For `n <= 170` the factorial ratio is used directly. Otherwise the
/// coefficient is accumulated multiplicatively (small `k`) or in log-space.
#[must_use]
pub fn binomial_coef(n: u64, k: u64) -> f64 {
    if n < k {
        return 0.0;
    }
    let k: u64 = k.min(n - k);
    if k == 0 {
        return 1.0;
    }
    if k == 1 {
        return n as f64;
    }

    if n <= MAX_FACTORIAL_ARGUMENT {
        return factorial(n) / (factorial(k) * factorial(n - k));
    }

    if k < 64 {
        let base: f64 = (n - k) as f64;
        let mut ret: f64 = 1.0;
        for i in 1..=k {
            ret = ret * (base + i as f64) / (i as f64);
        }
        return ret;
    }

    return ln_binomial_coef(n, k).exp();
}

/// Computes `ln(C(n, k))`.
///
/// If `n < k` the coefficient is 0 and `-inf` is returned.
#[must_use]
pub fn ln_binomial_coef(n: u64, k: u64) -> f64 {
    if n < k {
        return f64::NEG_INFINITY;
    }
    let k: u64 = k.min(n - k);
    if n <= MAX_FACTORIAL_ARGUMENT {
        return binomial_coef(n, k).ln();
    }
    return ln_factorial(n) - ln_factorial(k) - ln_factorial(n - k);
}

/// `B_2k` for `k` in `0..=10` as exact ratios.
const EVEN_BERNOULLI_TABLE: [f64; 11] = [
    1.0,
    1.0 / 6.0,
    -1.0 / 30.0,
    1.0 / 42.0,
    -1.0 / 30.0,
    5.0 / 66.0,
    -691.0 / 2730.0,
    7.0 / 6.0,
    -3617.0 / 510.0,
    43867.0 / 798.0,
    -174_611.0 / 330.0,
];

/// Returns the `n`-th [Bernoulli number](https://en.wikipedia.org/wiki/Bernoulli_number).
///
/// We follow the convention `B1 = +1/2`. All the odd Bernoulli numbers
/// after `B1` are `0`.
///
/// Up to `B20` the values are read from a table of exact ratios. After that we
/// use the identity `B_2k = (-1)^(k+1) * 2 * (2k)! * zeta(2k) / (2 * pi)^(2k)`.
#[must_use]
pub fn bernoulli_number(n: u32) -> f64 {
    if n == 1 {
        return 0.5;
    }
    if n % 2 == 1 {
        return 0.0;
    }

    let index: usize = (n / 2) as usize;
    if index < EVEN_BERNOULLI_TABLE.len() {
        return EVEN_BERNOULLI_TABLE[index];
    }

    let two_pi: f64 = 2.0 * std::f64::consts::PI;
    let sign: f64 = if (n / 2) % 2 == 1 { 1.0 } else { -1.0 };
    let ln_abs: f64 =
        std::f64::consts::LN_2 + ln_factorial(u64::from(n)) - f64::from(n) * two_pi.ln();
    return sign * ln_abs.exp() * zeta_riemann(f64::from(n));
}

/// Computes the generalized [harmonic number](https://en.wikipedia.org/wiki/Harmonic_number)
/// `H(n, s) = sum_{i = 1}^{n} i^-s`.
///
/// `harmonic_number(1.0, n)` is the usual harmonic number.
#[must_use]
pub fn harmonic_number(exponent: f64, n: u64) -> f64 {
    if n == 0 {
        return 0.0;
    }

    // summing from the smallest terms loses less precision
    let mut ret: f64 = 0.0;
    if exponent == 1.0 {
        for i in (1..=n).rev() {
            ret += 1.0 / (i as f64);
        }
    } else {
        for i in (1..=n).rev() {
            ret += (i as f64).powf(-exponent);
        }
    }
    return ret;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factorial_table_agrees_with_products() {
        let mut product: f64 = 1.0;
        for n in 1..=MAX_FACTORIAL_ARGUMENT {
            product *= n as f64;
            let value: f64 = factorial(n);
            assert!(
                (value - product).abs() <= 1e-12 * product,
                "{n}! = {value} but the product is {product}"
            );
        }
    }

    #[test]
    fn stirling_continues_the_table() {
        // 170 is the last exact value, compare the series against it
        let x: f64 = 170.0;
        let inv: f64 = 1.0 / x;
        let inv_2: f64 = inv * inv;
        let correction: f64 =
            inv * (1.0 / 12.0 - inv_2 * (1.0 / 360.0 - inv_2 * (1.0 / 1260.0 - inv_2 / 1680.0)));
        let stirling: f64 =
            x * x.ln() - x + 0.5 * (2.0 * std::f64::consts::PI * x).ln() + correction;
        assert!((stirling - ln_factorial(170)).abs() < 1e-10);

        assert!((ln_factorial(171) - ln_factorial(170) - 171.0_f64.ln()).abs() < 1e-9);
    }

    #[test]
    fn factorial_table_is_exact() {
        // every entry against the running product, not only the first ones
        let mut product: f64 = 1.0;
        for (k, entry) in FACTORIAL_TABLE.iter().enumerate() {
            if k != 0 {
                for i in (10 * k - 9)..=(10 * k) {
                    product *= i as f64;
                }
            }
            let relative: f64 = (entry - product).abs() / product;
            assert!(relative < 1e-13, "({})! = {entry}, product {product}", 10 * k);
        }
        assert!((factorial(130) / 6.466_855_489_220_474e219 - 1.0).abs() < 1e-14);
        assert!((factorial(135) / factorial(134) - 135.0).abs() < 1e-12);
    }

    #[test]
    fn bernoulli_numbers_are_exact() {
        let exact: [(u32, f64); 8] = [
            (2, 1.0 / 6.0),
            (4, -1.0 / 30.0),
            (6, 1.0 / 42.0),
            (8, -1.0 / 30.0),
            (10, 5.0 / 66.0),
            (12, -691.0 / 2730.0),
            (14, 7.0 / 6.0),
            (20, -174_611.0 / 330.0),
        ];
        for (n, value) in exact {
            let relative: f64 = (bernoulli_number(n) - value).abs() / value.abs();
            assert!(relative < 1e-15, "B{n} = {}", bernoulli_number(n));
        }
        // first value given by the zeta identity
        let b22: f64 = 854_513.0 / 138.0;
        assert!((bernoulli_number(22) - b22).abs() / b22 < 1e-12);
        assert_eq!(bernoulli_number(0), 1.0);
        assert_eq!(bernoulli_number(7), 0.0);
    }
}
