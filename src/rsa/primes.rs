// Prime Candidates
// Trial-division primality and uniform sampling of prime candidates below a bound

use clap::ValueEnum;
use rand::seq::SliceRandom;
use rand::Rng;

use super::bigint::{from_u64, is_probable_prime};
use crate::error::{VaultError, VaultResult};

/// Miller-Rabin rounds used when the probabilistic mode is selected
pub const MILLER_RABIN_ROUNDS: u32 = 20;

/// Which primality test backs candidate sampling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PrimalityMode {
    /// Trial division. Reports 0 and 1 as prime.
    #[default]
    TrialDivision,
    /// Miller-Rabin. Only genuine primes qualify.
    MillerRabin,
}

impl PrimalityMode {
    pub fn test<R: Rng + ?Sized>(self, num: u64, rng: &mut R) -> bool {
        match self {
            PrimalityMode::TrialDivision => is_prime(num),
            PrimalityMode::MillerRabin => {
                is_probable_prime(&from_u64(num), MILLER_RABIN_ROUNDS, rng)
            }
        }
    }
}

/// Trial division over [2, num).
///
/// For num <= 1 the loop never runs, so 0 and 1 come back as prime.
pub fn is_prime(num: u64) -> bool {
    if num > 1 {
        for i in 2..num {
            if num % i == 0 {
                return false;
            }
        }
    }
    true
}

/// Pick one candidate uniformly from {k in [0, bound) : mode.test(k)}
pub fn sample_prime<R: Rng + ?Sized>(
    rng: &mut R,
    bound: u64,
    mode: PrimalityMode,
) -> VaultResult<u64> {
    let mut candidates = Vec::new();
    for k in 0..bound {
        if mode.test(k, rng) {
            candidates.push(k);
        }
    }

    candidates
        .choose(rng)
        .copied()
        .ok_or(VaultError::EmptyCandidateSet { bound })
}
