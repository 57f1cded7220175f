//! Seeded random stream for battle resolution.
//!
//! Every probabilistic decision in a battle (turn-order tie-break, whiff,
//! ranged variance, dodge, crit, chaos reshuffles, special stat picks) draws
//! from one [`BattleRng`] created from the battle seed.
//!
//! # Determinism
//!
//! Given the same seed, the stream yields the same sequence of values on every
//! platform. Combined with a fixed per-round call order this makes a battle
//! reproducible bit-for-bit from its seed and starting combatants.

/// Source of random draws for the engine.
///
/// Implementations must be deterministic for a given seed. Each helper
/// consumes exactly one value from the stream, so callers can reason about
/// stream position by counting calls.
pub trait RandomSource {
    /// Next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Uniform float in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / 4_294_967_296.0
    }

    /// Uniform integer in `[0, n)`. Returns 0 when `n == 0`.
    fn below(&mut self, n: u32) -> u32 {
        let value = self.next_u32();
        if n == 0 { 0 } else { value % n }
    }

    /// Bernoulli trial: `true` with probability `p`.
    ///
    /// Always consumes a draw, even when `p <= 0` or `p >= 1`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Uniform float in `[low, high)`.
    fn range_f64(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_f64()
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// This implementation uses PCG-XSH-RR, which produces 32-bit output from
/// 64-bit state: a single multiply + xorshift + rotate per draw.
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleRng {
    seed: u64,
    state: u64,
    draws: u64,
}

impl BattleRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a stream from a battle seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            state: mix_seed(seed),
            draws: 0,
        }
    }

    /// Picks a fresh seed from OS entropy for battles started without one.
    #[cfg(feature = "std")]
    pub fn generate_seed() -> u64 {
        rand::random::<u64>()
    }

    /// The seed this stream was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Advance the PCG state by one step.
    ///
    /// Uses LCG formula: `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RandomSource for BattleRng {
    fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        self.draws += 1;
        Self::pcg_output(self.state)
    }
}

/// Spreads low-entropy seeds (0, 1, 12345, ...) across the state space.
///
/// SplitMix64-style avalanche so neighbouring seeds start far apart.
fn mix_seed(seed: u64) -> u64 {
    let mut hash = seed ^ 0x9e3779b97f4a7c15;
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xc4ceb9fe1a85ec53);
    hash ^= hash >> 33;
    hash
}
