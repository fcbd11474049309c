// RSA Encryption Implementation
// Textbook RSA applied to each character code, no padding

use super::bigint::{from_u64, mod_pow, RsaBigInt};
use super::keygen::RsaPublicKey;

/// Encrypt a single character code: c = m^e mod n
pub fn encrypt_code(m: u32, public_key: &RsaPublicKey) -> RsaBigInt {
    mod_pow(&from_u64(u64::from(m)), &public_key.e, &public_key.n)
}

/// Encrypt a string one character at a time
///
/// Every character code must be below n. This is not checked; a larger code
/// silently decrypts to something else.
pub fn encrypt_text(plaintext: &str, public_key: &RsaPublicKey) -> Vec<RsaBigInt> {
    plaintext
        .chars()
        .map(|c| encrypt_code(c as u32, public_key))
        .collect()
}
