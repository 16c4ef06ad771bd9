//! Seeded Mersenne Twister stream used for every randomized generation step.
//!
//! The stream is a plain value: each `generate()` call builds its own instance and
//! threads it through placement, corridor routing, and role assignment by `&mut`.
//! Output matches the reference MT19937 (`init_by_array` seeding) word for word, and
//! the derived draws (`below`, `int_in_range`, `next_f64`) consume words exactly the
//! way the reference level oracle does, so golden levels stay reproducible.

use std::fmt;

const STATE_SIZE: usize = 624;
const SHIFT_SIZE: usize = 397;
const MATRIX_A: u32 = 0x9908_B0DF;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7FFF_FFFF;

#[derive(Clone)]
pub struct Mt19937 {
    state: Box<[u32; STATE_SIZE]>,
    index: usize,
}

impl fmt::Debug for Mt19937 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mt19937").field("index", &self.index).finish_non_exhaustive()
    }
}

impl Mt19937 {
    /// Seeds the stream from `seed` split into little-endian 32-bit key words.
    pub fn new(seed: u64) -> Self {
        let low = seed as u32;
        let high = (seed >> 32) as u32;
        if high == 0 { Self::from_key(&[low]) } else { Self::from_key(&[low, high]) }
    }

    fn from_key(key: &[u32]) -> Self {
        debug_assert!(!key.is_empty());
        let mut rng = Self::from_word(19_650_218);
        let state = &mut rng.state;

        let mut i = 1_usize;
        let mut j = 0_usize;
        for _ in 0..STATE_SIZE.max(key.len()) {
            let previous = state[i - 1];
            state[i] = (state[i] ^ (previous ^ (previous >> 30)).wrapping_mul(1_664_525))
                .wrapping_add(key[j])
                .wrapping_add(j as u32);
            i += 1;
            j += 1;
            if i >= STATE_SIZE {
                state[0] = state[STATE_SIZE - 1];
                i = 1;
            }
            if j >= key.len() {
                j = 0;
            }
        }
        for _ in 0..(STATE_SIZE - 1) {
            let previous = state[i - 1];
            state[i] = (state[i] ^ (previous ^ (previous >> 30)).wrapping_mul(1_566_083_941))
                .wrapping_sub(i as u32);
            i += 1;
            if i >= STATE_SIZE {
                state[0] = state[STATE_SIZE - 1];
                i = 1;
            }
        }
        state[0] = UPPER_MASK;
        rng.index = STATE_SIZE;
        rng
    }

    fn from_word(seed: u32) -> Self {
        let mut state = Box::new([0_u32; STATE_SIZE]);
        state[0] = seed;
        for i in 1..STATE_SIZE {
            let previous = state[i - 1];
            state[i] = 1_812_433_253_u32
                .wrapping_mul(previous ^ (previous >> 30))
                .wrapping_add(i as u32);
        }
        Self { state, index: STATE_SIZE }
    }

    fn twist(&mut self) {
        for current in 0..STATE_SIZE {
            let y = (self.state[current] & UPPER_MASK)
                | (self.state[(current + 1) % STATE_SIZE] & LOWER_MASK);
            let mut next = self.state[(current + SHIFT_SIZE) % STATE_SIZE] ^ (y >> 1);
            if y & 1 != 0 {
                next ^= MATRIX_A;
            }
            self.state[current] = next;
        }
        self.index = 0;
    }

    pub fn next_u32(&mut self) -> u32 {
        if self.index >= STATE_SIZE {
            self.twist();
        }
        let mut y = self.state[self.index];
        self.index += 1;

        y ^= y >> 11;
        y ^= (y << 7) & 0x9D2C_5680;
        y ^= (y << 15) & 0xEFC6_0000;
        y ^ (y >> 18)
    }

    /// Returns the top `bits` bits of one output word. Zero bits consume nothing.
    pub fn next_bits(&mut self, bits: u32) -> u32 {
        debug_assert!(bits <= 32);
        if bits == 0 {
            return 0;
        }
        self.next_u32() >> (32 - bits)
    }

    /// Uniform draw in `0..bound` by rejection sampling on `bit_length(bound)` bits.
    pub fn below(&mut self, bound: u32) -> u32 {
        debug_assert!(bound > 0, "below() needs a non-empty range");
        let bits = u32::BITS - bound.leading_zeros();
        loop {
            let candidate = self.next_bits(bits);
            if candidate < bound {
                return candidate;
            }
        }
    }

    /// Top-aligned draw of up to 64 bits. Requests wider than one word take the low
    /// word from the first output and the remaining top bits from the second.
    pub fn next_bits_u64(&mut self, bits: u32) -> u64 {
        debug_assert!(bits <= 64);
        if bits <= 32 {
            return u64::from(self.next_bits(bits));
        }
        let low = u64::from(self.next_u32());
        let high = u64::from(self.next_bits(bits - 32));
        (high << 32) | low
    }

    /// [`Mt19937::below`] for bounds wider than one output word.
    pub fn below_u64(&mut self, bound: u64) -> u64 {
        debug_assert!(bound > 0, "below_u64() needs a non-empty range");
        let bits = u64::BITS - bound.leading_zeros();
        loop {
            let candidate = self.next_bits_u64(bits);
            if candidate < bound {
                return candidate;
            }
        }
    }

    /// Uniform draw in the inclusive range `low..=high`.
    pub fn int_in_range(&mut self, low: usize, high: usize) -> usize {
        debug_assert!(low <= high);
        let Some(span) = (high - low).checked_add(1) else {
            // `low..=high` covers every usize.
            return self.next_bits_u64(usize::BITS) as usize;
        };
        match u32::try_from(span) {
            Ok(span) => low + self.below(span) as usize,
            Err(_) => low + self.below_u64(span as u64) as usize,
        }
    }

    /// Uniform float in `[0, 1)` with 53 bits of precision.
    pub fn next_f64(&mut self) -> f64 {
        let upper = f64::from(self.next_u32() >> 5);
        let lower = f64::from(self.next_u32() >> 6);
        (upper * 67_108_864.0 + lower) * (1.0 / 9_007_199_254_740_992.0)
    }

    pub fn chance(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_reference_words_for_small_seeds() {
        let mut rng = Mt19937::new(42);
        let words: Vec<u32> = (0..3).map(|_| rng.next_u32()).collect();
        assert_eq!(words, [2_746_317_213, 478_163_327, 107_420_369]);

        let mut zero = Mt19937::new(0);
        let words: Vec<u32> = (0..3).map(|_| zero.next_u32()).collect();
        assert_eq!(words, [3_626_764_237, 1_654_615_998, 3_255_389_356]);
    }

    #[test]
    fn wide_seeds_use_both_key_words() {
        let mut rng = Mt19937::new((1_u64 << 40) + 7);
        assert_eq!(rng.next_u32(), 2_635_837_658);
        assert_eq!(rng.next_u32(), 3_209_733_218);
    }

    #[test]
    fn float_draws_match_reference() {
        let mut rng = Mt19937::new(42);
        assert_eq!(rng.next_f64(), 0.639_426_798_457_883_7);
        assert_eq!(rng.next_f64(), 0.025_010_755_222_666_936);
    }

    #[test]
    fn inclusive_ranges_match_reference() {
        let mut rng = Mt19937::new(7);
        let draws: Vec<usize> = (0..8).map(|_| rng.int_in_range(4, 10)).collect();
        assert_eq!(draws, [6, 5, 7, 9, 4, 4, 10, 8]);
    }

    #[test]
    fn single_value_range_still_consumes_words() {
        let mut rng = Mt19937::new(7);
        for _ in 0..3 {
            assert_eq!(rng.int_in_range(3, 3), 3);
        }
        assert_eq!(rng.next_u32(), 2_795_742_288);
    }

    #[test]
    fn wide_bit_draws_fill_the_low_word_first() {
        let mut rng = Mt19937::new(7);
        assert_eq!(rng.next_bits_u64(40), 1_040_772_936_760);
        assert_eq!(rng.next_bits_u64(64), 7_283_207_964_119_141_687);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn ranges_wider_than_one_word_match_reference() {
        let mut rng = Mt19937::new(7);
        let draws: Vec<usize> = (0..4).map(|_| rng.int_in_range(0, 1 << 40)).collect();
        assert_eq!(draws, [868_231_286_071, 105_874_957_392, 208_460_025_899, 470_330_855_157]);
        assert_eq!(rng.next_u32(), 161_042_648);

        let mut rng = Mt19937::new(7);
        let low = 5;
        let draws: Vec<usize> = (0..3).map(|_| rng.int_in_range(low, low + (1 << 32))).collect();
        assert_eq!(draws, [647_892_284, 2_795_742_293, 2_301_595_696]);
        assert_eq!(rng.next_u32(), 1_570_621_944);
    }

    #[test]
    fn streams_survive_state_regeneration() {
        let mut left = Mt19937::new(99);
        let mut right = left.clone();
        for _ in 0..(STATE_SIZE * 3) {
            assert_eq!(left.next_u32(), right.next_u32());
        }
    }
}
