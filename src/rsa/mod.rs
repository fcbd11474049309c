// RSA Module - Main module file
// Exports the number theory, key generation and character cipher

pub mod bigint;
pub mod codec;
pub mod decrypt;
pub mod encrypt;
pub mod keygen;
pub mod primes;

pub use bigint::{extended_gcd, gcd, mod_pow, modular_inverse, RsaBigInt};
pub use codec::{parse_ciphertext, render_ciphertext};
pub use decrypt::decrypt_to_string;
pub use encrypt::encrypt_text;
pub use keygen::{generate_key_tuples, generate_keypair, RsaKeyPair, RsaPrivateKey, RsaPublicKey};
pub use primes::{is_prime, sample_prime, PrimalityMode};
