//! # Uniform engines
//!
//! The source of all the randomness of the library. Every sampler takes an
//! explicit handle to a generator (anything implementing [RngCore]), so that
//! each thread can own it's own private instance and the tests can inject
//! deterministic seeds.
//!
//! We provide 2 [KISS](https://en.wikipedia.org/wiki/KISS_(algorithm)) style
//! engines from D. Jones, *Good Practice in (Pseudo) Random Number Generation
//! for Bioinformatics Applications*. Both combine simple components (a
//! congruential stage, a xorshift stage and multiply-with-carry stages) by
//! summation:
//!
//!  - [JKiss]: 32 bit output.
//!  - [JLKiss64]: 64 bit output, period of about `2^250`.
//!
//! Wich one is [RandGenerator] is a build time choice: enable the `jlkiss64`
//! feature to use [JLKiss64].
//!
//! The engines are **not** synchronized. Sharing one between threads requires
//! external locking.

use rand::{RngCore, SeedableRng};

/// The common interface of the uniform engines.
pub trait BasicRandGenerator: RngCore {
    /// The maximum value [BasicRandGenerator::variate] can return.
    const MAX_VALUE: u64;

    /// Returns an unsigned integer uniformly distributed over `[0, MAX_VALUE]`.
    fn variate(&mut self) -> u64;

    /// Returns [BasicRandGenerator::MAX_VALUE].
    #[must_use]
    fn max_value() -> u64 {
        return Self::MAX_VALUE;
    }

    /// The number of decimal digits of a uniform `[0, 1)` fraction that can be
    /// represented without loss by the integer width of the engine.
    ///
    /// `9` for a 32 bit engine and `19` for a 64 bit engine.
    #[must_use]
    fn max_decimals() -> usize {
        let mut remaining: u64 = Self::MAX_VALUE;
        let mut digits: usize = 0;
        while 10 <= remaining {
            remaining /= 10;
            digits += 1;
        }
        return digits;
    }
}

#[cfg(not(feature = "jlkiss64"))]
/// The engine selected at build time.
pub type RandGenerator = JKiss;

#[cfg(feature = "jlkiss64")]
/// The engine selected at build time.
pub type RandGenerator = JLKiss64;

/// Multiplier shared by all the multiply-with-carry stages.
const MWC_MULTIPLIER: u64 = 4_294_584_393;
/// The carry of a multiply-with-carry stage must stay below this value.
const MWC_MAX_CARRY: u32 = 698_769_069;

/// Expands a single `u64` into well mixed words. Used to seed the engines.
fn split_mix_64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z: u64 = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    return z ^ (z >> 31);
}

/// One multiply-with-carry step. Returns the new `(z, c)`.
#[inline]
fn mwc_step(z: u32, c: u32) -> (u32, u32) {
    let t: u64 = MWC_MULTIPLIER * u64::from(z) + u64::from(c);
    return (t as u32, (t >> 32) as u32);
}

/// Makes sure a multiply-with-carry pair is not degenerate.
fn repair_mwc(z: u32, c: u32, default_z: u32) -> (u32, u32) {
    let c: u32 = c % MWC_MAX_CARRY;
    if z == 0 && c == 0 {
        return (default_z, c);
    }
    return (z, c);
}

/// Fills `dest` with the little endian bytes of successive `next_u64` calls.
fn fill_bytes_with<R: RngCore + ?Sized>(rng: &mut R, dest: &mut [u8]) {
    let mut chunks = dest.chunks_exact_mut(8);
    for chunk in &mut chunks {
        chunk.copy_from_slice(&rng.next_u64().to_le_bytes());
    }
    let rest: &mut [u8] = chunks.into_remainder();
    if !rest.is_empty() {
        let bytes: [u8; 8] = rng.next_u64().to_le_bytes();
        let len: usize = rest.len();
        rest.copy_from_slice(&bytes[..len]);
    }
}

#[inline]
fn u32_at(bytes: &[u8], offset: usize) -> u32 {
    return u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ]);
}

#[inline]
fn u64_at(bytes: &[u8], offset: usize) -> u64 {
    return u64::from(u32_at(bytes, offset)) | (u64::from(u32_at(bytes, offset + 4)) << 32);
}

/// The 32 bit JKISS engine.
///
/// State: a congruential register `x`, a xorshift register `y` and a
/// multiply-with-carry pair `(z, c)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JKiss {
    x: u32,
    y: u32,
    z: u32,
    c: u32,
}

impl JKiss {
    const DEFAULT_X: u32 = 123_456_789;
    const DEFAULT_Y: u32 = 987_654_321;
    const DEFAULT_Z: u32 = 43_219_876;
    const DEFAULT_C: u32 = 6_543_217;

    /// Creates a new [JKiss] engine from it's registers.
    ///
    /// Degenerate registers are repaired:
    ///  - A `y = 0` would make the xorshift stage stuck at 0. It is replaced by the deafult.
    ///  - The carry `c` is reduced below it's admissible maximum and `z = c = 0`
    ///     is replaced by the deafult `z`.
    #[must_use]
    pub fn new(x: u32, y: u32, z: u32, c: u32) -> JKiss {
        let y: u32 = if y == 0 { JKiss::DEFAULT_Y } else { y };
        let (z, c): (u32, u32) = repair_mwc(z, c, JKiss::DEFAULT_Z);
        return JKiss { x, y, z, c };
    }

    /// Returns the registers `(x, y, z, c)`. Together they are the complete
    /// state of the engine: feeding them to [JKiss::new] resumes the sequence.
    #[must_use]
    pub const fn get_state(&self) -> (u32, u32, u32, u32) {
        return (self.x, self.y, self.z, self.c);
    }

    #[inline]
    fn step(&mut self) -> u32 {
        self.x = self.x.wrapping_mul(314_527_869).wrapping_add(1_234_567);

        self.y ^= self.y << 5;
        self.y ^= self.y >> 7;
        self.y ^= self.y << 22;

        (self.z, self.c) = mwc_step(self.z, self.c);

        return self.x.wrapping_add(self.y).wrapping_add(self.z);
    }
}

impl Default for JKiss {
    fn default() -> Self {
        JKiss::new(
            JKiss::DEFAULT_X,
            JKiss::DEFAULT_Y,
            JKiss::DEFAULT_Z,
            JKiss::DEFAULT_C,
        )
    }
}

impl BasicRandGenerator for JKiss {
    const MAX_VALUE: u64 = u32::MAX as u64;

    fn variate(&mut self) -> u64 {
        return u64::from(self.step());
    }
}

impl RngCore for JKiss {
    fn next_u32(&mut self) -> u32 {
        return self.step();
    }

    fn next_u64(&mut self) -> u64 {
        let high: u64 = u64::from(self.step());
        let low: u64 = u64::from(self.step());
        return (high << 32) | low;
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_bytes_with(self, dest);
    }
}

impl SeedableRng for JKiss {
    /// The little endian bytes of `x`, `y`, `z` and `c`.
    type Seed = [u8; 16];

    fn from_seed(seed: Self::Seed) -> Self {
        return JKiss::new(
            u32_at(&seed, 0),
            u32_at(&seed, 4),
            u32_at(&seed, 8),
            u32_at(&seed, 12),
        );
    }

    fn seed_from_u64(state: u64) -> Self {
        let mut state: u64 = state;
        let first: u64 = split_mix_64(&mut state);
        let second: u64 = split_mix_64(&mut state);
        return JKiss::new(
            first as u32,
            (first >> 32) as u32,
            second as u32,
            (second >> 32) as u32,
        );
    }
}

/// The 64 bit JLKISS64 engine.
///
/// State: a congruential register `x`, a xorshift register `y` and 2
/// multiply-with-carry pairs `(z1, c1)` and `(z2, c2)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JLKiss64 {
    x: u64,
    y: u64,
    z1: u32,
    c1: u32,
    z2: u32,
    c2: u32,
}

impl JLKiss64 {
    const DEFAULT_X: u64 = 123_456_789_123;
    const DEFAULT_Y: u64 = 987_654_321_987;
    const DEFAULT_Z1: u32 = 43_219_876;
    const DEFAULT_C1: u32 = 6_543_217;
    const DEFAULT_Z2: u32 = 21_987_643;
    const DEFAULT_C2: u32 = 1_732_654;

    /// Creates a new [JLKiss64] engine from it's registers.
    ///
    /// Degenerate registers are repaired the same way as in [JKiss::new].
    #[must_use]
    pub fn new(x: u64, y: u64, z1: u32, c1: u32, z2: u32, c2: u32) -> JLKiss64 {
        let y: u64 = if y == 0 { JLKiss64::DEFAULT_Y } else { y };
        let (z1, c1): (u32, u32) = repair_mwc(z1, c1, JLKiss64::DEFAULT_Z1);
        let (z2, c2): (u32, u32) = repair_mwc(z2, c2, JLKiss64::DEFAULT_Z2);
        return JLKiss64 {
            x,
            y,
            z1,
            c1,
            z2,
            c2,
        };
    }

    #[inline]
    fn step(&mut self) -> u64 {
        self.x = self
            .x
            .wrapping_mul(1_490_024_343_005_336_237)
            .wrapping_add(123_456_789);

        self.y ^= self.y << 21;
        self.y ^= self.y >> 17;
        self.y ^= self.y << 30;

        (self.z1, self.c1) = mwc_step(self.z1, self.c1);
        (self.z2, self.c2) = mwc_step(self.z2, self.c2);

        return self
            .x
            .wrapping_add(self.y)
            .wrapping_add(u64::from(self.z1))
            .wrapping_add(u64::from(self.z2) << 32);
    }
}

impl Default for JLKiss64 {
    fn default() -> Self {
        JLKiss64::new(
            JLKiss64::DEFAULT_X,
            JLKiss64::DEFAULT_Y,
            JLKiss64::DEFAULT_Z1,
            JLKiss64::DEFAULT_C1,
            JLKiss64::DEFAULT_Z2,
            JLKiss64::DEFAULT_C2,
        )
    }
}

impl BasicRandGenerator for JLKiss64 {
    const MAX_VALUE: u64 = u64::MAX;

    fn variate(&mut self) -> u64 {
        return self.step();
    }
}

impl RngCore for JLKiss64 {
    fn next_u32(&mut self) -> u32 {
        // the high bits are the best mixed ones
        return (self.step() >> 32) as u32;
    }

    fn next_u64(&mut self) -> u64 {
        return self.step();
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_bytes_with(self, dest);
    }
}

impl SeedableRng for JLKiss64 {
    /// The little endian bytes of `x`, `y`, `z1`, `c1`, `z2` and `c2`.
    type Seed = [u8; 32];

    fn from_seed(seed: Self::Seed) -> Self {
        return JLKiss64::new(
            u64_at(&seed, 0),
            u64_at(&seed, 8),
            u32_at(&seed, 16),
            u32_at(&seed, 20),
            u32_at(&seed, 24),
            u32_at(&seed, 28),
        );
    }

    fn seed_from_u64(state: u64) -> Self {
        let mut state: u64 = state;
        let x: u64 = split_mix_64(&mut state);
        let y: u64 = split_mix_64(&mut state);
        let first: u64 = split_mix_64(&mut state);
        let second: u64 = split_mix_64(&mut state);
        return JLKiss64::new(
            x,
            y,
            first as u32,
            (first >> 32) as u32,
            second as u32,
            (second >> 32) as u32,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_registers_are_repaired() {
        let engine: JKiss = JKiss::new(1, 0, 0, 0);
        let (_, y, z, c): (u32, u32, u32, u32) = engine.get_state();
        assert_ne!(y, 0);
        assert!(z != 0 || c != 0);

        let engine: JKiss = JKiss::new(1, 2, 3, u32::MAX);
        let (_, _, _, c): (u32, u32, u32, u32) = engine.get_state();
        assert!(c < MWC_MAX_CARRY);
    }

    #[test]
    fn split_mix_is_deterministic() {
        let mut a: u64 = 42;
        let mut b: u64 = 42;
        for _ in 0..16 {
            assert_eq!(split_mix_64(&mut a), split_mix_64(&mut b));
        }
    }

    #[test]
    fn fill_bytes_handles_remainders() {
        let mut engine: JLKiss64 = JLKiss64::default();
        let mut reference: JLKiss64 = JLKiss64::default();
        let mut bytes: [u8; 11] = [0; 11];
        engine.fill_bytes(&mut bytes);

        let first: [u8; 8] = reference.next_u64().to_le_bytes();
        let second: [u8; 8] = reference.next_u64().to_le_bytes();
        assert_eq!(&bytes[..8], &first);
        assert_eq!(&bytes[8..], &second[..3]);
    }
}
