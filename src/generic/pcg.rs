//! A small permuted-congruential pseudorandom number generator.
//!
//! The 32-bit PCG variant from <https://www.pcg-random.org/>, with the reference stream constant.
//! PCG was chosen as it is tiny, fast, and easily seeded, and the library needs nothing stronger:
//! randomness only decides initial atom phases, under [polarity_lean](crate::config::Config::polarity_lean).
//!
//! The [Default] instance is seeded with a fixed value so that, by default, solves are
//! deterministic and repeatable.

use rand::SeedableRng;
use rand_core::{impls, RngCore};

/// The 64 bits of state of a PCG32 generator, and the (odd) stream increment.
pub struct Pcg32 {
    state: u64,
    increment: u64,
}

/// The multiplier of the reference implementation.
const PCG_MULTIPLIER: u64 = 6364136223846793005;

/// The stream increment of the reference implementation.
const PCG_INCREMENT: u64 = 1442695040888963407;

impl Default for Pcg32 {
    fn default() -> Self {
        Self::from_seed(0x5EED_u64.to_le_bytes())
    }
}

impl RngCore for Pcg32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;
        self.state = old_state
            .wrapping_mul(PCG_MULTIPLIER)
            .wrapping_add(self.increment);

        let xor_shifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rotation = (old_state >> 59) as u32;
        xor_shifted.rotate_right(rotation)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for Pcg32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut pcg = Pcg32 {
            state: 0,
            increment: PCG_INCREMENT,
        };
        // The reference seeding discipline: advance, add the seed, advance again.
        pcg.next_u32();
        pcg.state = pcg.state.wrapping_add(u64::from_le_bytes(seed));
        pcg.next_u32();
        pcg
    }
}

#[cfg(test)]
mod pcg_tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn repeatable() {
        let mut a = Pcg32::from_seed(2_u64.to_le_bytes());
        let mut b = Pcg32::from_seed(2_u64.to_le_bytes());

        for _ in 0..64 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn seed_sensitive() {
        let mut a = Pcg32::from_seed(2_u64.to_le_bytes());
        let mut b = Pcg32::from_seed(3_u64.to_le_bytes());

        let a_run: Vec<u32> = (0..8).map(|_| a.next_u32()).collect();
        let b_run: Vec<u32> = (0..8).map(|_| b.next_u32()).collect();
        assert_ne!(a_run, b_run);
    }

    #[test]
    fn degenerate_leans() {
        let mut pcg = Pcg32::default();
        for _ in 0..64 {
            assert!(!pcg.random_bool(0.0));
            assert!(pcg.random_bool(1.0));
        }
    }
}
