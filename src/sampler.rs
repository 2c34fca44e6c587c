//! Uniform random word indices, for identifier-generation front-ends.
//!
//! Stateless: every call draws independently. Seeding, and with it
//! determinism, stays with the caller via [`sample_indices_with`].

use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Which generator backs a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RandomSource {
    /// The thread-local generator; fast, not suitable for secrets.
    #[default]
    Default,
    /// A generator freshly seeded from operating-system entropy.
    Os,
}

/// Draws `n` independent word indices, uniform over 0..=65535.
pub fn sample_indices(n: usize, source: RandomSource) -> Vec<u16> {
    match source {
        RandomSource::Default => sample_indices_with(&mut rand::rng(), n),
        RandomSource::Os => sample_indices_with(&mut StdRng::from_os_rng(), n),
    }
}

/// Draws `n` indices from a caller-managed generator.
///
/// Every `u16` is a valid word index, so a plain uniform draw covers the
/// domain exactly.
pub fn sample_indices_with<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<u16> {
    (0..n).map(|_| rng.random()).collect()
}
