//! Mersenne Twister variant driving the lattice animation.
//!
//! This is MT19937 with one deliberate deviation inherited from the original
//! generator: in the seeding recurrence the `+ i` term binds inside the XOR
//! operand (`prev ^ ((prev >> 30) + i)`) instead of being added to the
//! product. Every recorded output sequence depends on that binding; it must
//! not be "corrected" back to the canonical formula. No statistical-quality
//! claims are made; the generator only has to be deterministic and
//! reproducible for a fixed seed.

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_B0DF;
const SEED_MULT: u32 = 1_812_433_253;
const LOWER_MASK: u32 = 0x7FFF_FFFF;
const UPPER_MASK: u32 = 0x8000_0000;

// Canonical MT19937 tempering constants.
const TEMPER_U: u32 = 11;
const TEMPER_D: u32 = 0xFFFF_FFFF;
const TEMPER_S: u32 = 7;
const TEMPER_B: u32 = 0x9D2C_5680;
const TEMPER_T: u32 = 15;
const TEMPER_C: u32 = 0xEFC6_0000;
const TEMPER_L: u32 = 18;

/// Deterministic PRNG with a 624-word state array and a lazy twist.
///
/// The state is owned by the instance; reseeding replaces the whole array
/// and resets the cursor, so a fixed seed reproduces the same sequence bit
/// for bit across runs and across instances.
pub struct MersenneTwister {
    mt: [u32; N],
    index: usize,
}

impl MersenneTwister {
    /// Creates a generator seeded with `seed`.
    pub fn new(seed: u32) -> Self {
        let mut rng = MersenneTwister {
            mt: [0; N],
            index: 0,
        };
        rng.reseed(seed);
        rng
    }

    /// Reinitializes the state array from `seed` and resets the cursor to 0.
    ///
    /// The recurrence keeps the original operator binding: the word index is
    /// added to the shifted previous word before the XOR, not to the
    /// product.
    pub fn reseed(&mut self, seed: u32) {
        self.index = 0;
        self.mt[0] = seed;
        for i in 1..N {
            let prev = self.mt[i - 1];
            self.mt[i] = SEED_MULT.wrapping_mul(prev ^ ((prev >> 30).wrapping_add(i as u32)));
        }
    }

    /// Extracts the next tempered 32-bit value.
    ///
    /// A full twist runs whenever the cursor sits at 0, which includes the
    /// first extraction after a reseed.
    pub fn next_u32(&mut self) -> u32 {
        if self.index == 0 {
            self.twist();
        }
        let mut y = self.mt[self.index];
        y ^= (y >> TEMPER_U) & TEMPER_D;
        y ^= (y << TEMPER_S) & TEMPER_B;
        y ^= (y << TEMPER_T) & TEMPER_C;
        y ^= y >> TEMPER_L;
        self.index = (self.index + 1) % N;
        y
    }

    /// Uniform draw in `[0, u32::MAX / (2^31 - 1)]`, roughly `[0, 2]`.
    ///
    /// The divisor is `LOWER_MASK`, not `u32::MAX`; values above 1.0 are
    /// common. The scatter stage is written against this range, so the
    /// divisor is part of the generator's contract.
    pub fn uniform(&mut self) -> f64 {
        f64::from(self.next_u32()) / f64::from(LOWER_MASK)
    }

    /// One sequential in-place pass over all 624 words. Wrapped reads
    /// (`i + 1` at the end of the array, `i + M` once it wraps) observe
    /// already-updated words; the recurrence is defined over them.
    fn twist(&mut self) {
        for i in 0..N {
            let x = (self.mt[i] & UPPER_MASK) + (self.mt[(i + 1) % N] & LOWER_MASK);
            let mut xa = x >> 1;
            if x & 1 != 0 {
                xa ^= MATRIX_A;
            }
            self.mt[i] = self.mt[(i + M) % N] ^ xa;
        }
    }
}
