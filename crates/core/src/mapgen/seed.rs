//! Runtime seed drawing for callers that do not pin a seed.

use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Drawn seeds stay below 2^31 so they fit every consumer that stores them as `i32`.
const RUNTIME_SEED_MASK: u64 = 0x7FFF_FFFF;

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

pub(super) fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(process::id());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.wrapping_mul(0x9E37_79B9_7F4A_7C15);

    mix_seed(entropy) & RUNTIME_SEED_MASK
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_seed_changes_between_calls() {
        let first = generate_runtime_seed();
        let second = generate_runtime_seed();
        assert_ne!(first, second, "runtime seed generation should vary per call");
    }

    #[test]
    fn generated_seeds_fit_in_31_bits() {
        for _ in 0..64 {
            assert!(generate_runtime_seed() <= RUNTIME_SEED_MASK);
        }
    }

    #[test]
    fn mixing_spreads_adjacent_inputs() {
        assert_ne!(mix_seed(1) & RUNTIME_SEED_MASK, mix_seed(2) & RUNTIME_SEED_MASK);
    }
}
