// RSA Key Generation
// Derives a public/private key pair from two prime candidates

use num_traits::One;
use rand::Rng;
use tracing::debug;

use super::bigint::{from_u64, gcd, modular_inverse, RsaBigInt};
use super::primes::{sample_prime, PrimalityMode};
use crate::error::{VaultError, VaultResult};

/// Magnitude ceiling for prime candidates drawn by the file workflow
pub const PRIME_BOUND: u64 = 1024;

/// Public exponents are drawn from [1, WEAK_EXPONENT_CEILING)
pub const WEAK_EXPONENT_CEILING: u64 = (1u64 << 32) - 1;

/// RSA Public Key
#[derive(Debug, Clone, PartialEq)]
pub struct RsaPublicKey {
    pub n: RsaBigInt,  // Modulus
    pub e: RsaBigInt,  // Public exponent
}

/// RSA Private Key
#[derive(Debug, Clone, PartialEq)]
pub struct RsaPrivateKey {
    pub n: RsaBigInt,  // Modulus (same as public)
    pub d: RsaBigInt,  // Private exponent
}

/// RSA Key Pair (both public and private keys)
#[derive(Debug, Clone)]
pub struct RsaKeyPair {
    pub public_key: RsaPublicKey,
    pub private_key: RsaPrivateKey,
}

impl RsaPublicKey {
    /// Encrypt text character by character with this public key
    pub fn encrypt(&self, plaintext: &str) -> Vec<RsaBigInt> {
        super::encrypt::encrypt_text(plaintext, self)
    }
}

impl RsaPrivateKey {
    /// Decrypt a ciphertext sequence back into text
    pub fn decrypt(&self, ciphertext: &[RsaBigInt]) -> VaultResult<String> {
        super::decrypt::decrypt_to_string(ciphertext, self)
    }
}

/// Draw a candidate exponent uniformly from [1, 2^32 - 1)
fn weak_exponent<R: Rng + ?Sized>(rng: &mut R) -> RsaBigInt {
    from_u64(rng.gen_range(1..WEAK_EXPONENT_CEILING))
}

/// Generate an RSA key pair from two distinct prime candidates
///
/// e is redrawn until it is coprime to phi; there is no retry limit.
pub fn generate_keypair<R: Rng + ?Sized>(rng: &mut R, p: u64, q: u64) -> VaultResult<RsaKeyPair> {
    if p == q {
        return Err(VaultError::IdenticalPrimes(p));
    }
    // n = 0 breaks exponentiation and phi = 0 never admits a coprime e
    if p < 2 || q < 2 {
        return Err(VaultError::DegenerateModulus { p, q });
    }

    let n = from_u64(p) * from_u64(q);
    let phi = from_u64(p - 1) * from_u64(q - 1);

    let mut e = weak_exponent(rng);
    while !gcd(&e, &phi).is_one() {
        e = weak_exponent(rng);
    }

    let d = modular_inverse(&e, &phi);
    debug!(modulus_bits = n.bits(), "derived key pair");

    Ok(RsaKeyPair {
        public_key: RsaPublicKey { n: n.clone(), e },
        private_key: RsaPrivateKey { n, d },
    })
}

/// Sample two distinct prime candidates below `bound` and derive a key pair
///
/// Candidates below 2 are redrawn, as is q while it equals p.
pub fn generate_key_tuples<R: Rng + ?Sized>(
    rng: &mut R,
    bound: u64,
    mode: PrimalityMode,
) -> VaultResult<RsaKeyPair> {
    // Below 4 there are not two distinct candidates >= 2 to draw
    if bound < 4 {
        return Err(VaultError::EmptyCandidateSet { bound });
    }

    let draw = |rng: &mut R| -> VaultResult<u64> {
        loop {
            let candidate = sample_prime(rng, bound, mode)?;
            // The sampler still yields 0 and 1; a key from either has n = 0
            // (modular exponentiation divides by zero) or phi = 0 (no e
            // except 1 is coprime, so the exponent loop effectively never ends)
            if candidate >= 2 {
                return Ok(candidate);
            }
        }
    };

    let p = draw(rng)?;
    let mut q = draw(rng)?;
    while p == q {
        q = draw(rng)?;
    }

    generate_keypair(rng, p, q)
}
