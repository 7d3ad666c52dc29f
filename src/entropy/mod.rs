//! Secure random source for password generation.
//!
//! Every draw goes through `rand::rngs::OsRng` (or another `CryptoRng`
//! handed in by the caller). A general purpose PRNG is rejected at compile
//! time by the `CryptoRng` bound.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

// 2^32 - 1
const U32_DIVISOR: f64 = u32::MAX as f64;

/// Marker for RNGs allowed to produce credentials.
pub trait SecureRng: RngCore + CryptoRng {}

impl<T: RngCore + CryptoRng> SecureRng for T {}

/// Handle to the operating system CSPRNG.
#[inline]
pub fn os() -> OsRng {
    OsRng
}

pub fn source_name() -> &'static str {
    "OS CSPRNG (getrandom)"
}

/// Uniform value in [0, 1] from a single 32-bit draw.
///
/// The divisor is `u32::MAX`, so a draw of `u32::MAX` maps to exactly 1.0.
#[inline]
pub fn uniform<R: SecureRng + ?Sized>(rng: &mut R) -> f64 {
    rng.next_u32() as f64 / U32_DIVISOR
}

/// Index in `0..n` via `floor(uniform * n)`.
///
/// Clamped to `n - 1` for the single draw where `uniform` returns 1.0.
#[inline]
pub fn index<R: SecureRng + ?Sized>(rng: &mut R, n: usize) -> usize {
    debug_assert!(n > 0, "index over an empty range");
    let i = (uniform(rng) * n as f64).floor() as usize;
    i.min(n.saturating_sub(1))
}

#[cfg(test)]
pub(crate) mod testing {
    use rand::{CryptoRng, RngCore};

    /// Replays a fixed list of u32 draws, cycling when exhausted.
    pub struct Scripted {
        draws: Vec<u32>,
        pos: usize,
    }

    impl Scripted {
        pub fn new(draws: &[u32]) -> Self {
            Self {
                draws: draws.to_vec(),
                pos: 0,
            }
        }
    }

    impl RngCore for Scripted {
        fn next_u32(&mut self) -> u32 {
            let v = self.draws[self.pos % self.draws.len()];
            self.pos += 1;
            v
        }

        fn next_u64(&mut self) -> u64 {
            let lo = self.next_u32() as u64;
            let hi = self.next_u32() as u64;
            (hi << 32) | lo
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for chunk in dest.chunks_mut(4) {
                let bytes = self.next_u32().to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    // Test-only: lets scripted draws stand in for the OS source.
    impl CryptoRng for Scripted {}
}

#[cfg(test)]
mod tests {
    use super::testing::Scripted;
    use super::*;

    #[test]
    fn uniform_covers_closed_unit_interval() {
        let mut rng = Scripted::new(&[0, u32::MAX, u32::MAX / 2]);
        assert_eq!(uniform(&mut rng), 0.0);
        assert_eq!(uniform(&mut rng), 1.0);
        let mid = uniform(&mut rng);
        assert!(mid > 0.49 && mid < 0.51);
    }

    #[test]
    fn index_never_reaches_n() {
        let mut rng = Scripted::new(&[u32::MAX]);
        for n in [1, 4, 10, 23, 26] {
            assert_eq!(index(&mut rng, n), n - 1);
        }
    }

    #[test]
    fn index_maps_floor_of_scaled_uniform() {
        let mut rng = Scripted::new(&[0, u32::MAX / 4 + 1, u32::MAX / 2 + 1]);
        assert_eq!(index(&mut rng, 4), 0);
        assert_eq!(index(&mut rng, 4), 1);
        assert_eq!(index(&mut rng, 4), 2);
    }

    #[test]
    fn os_source_stays_in_range() {
        let mut rng = os();
        for _ in 0..10_000 {
            assert!(index(&mut rng, 23) < 23);
        }
    }
}
