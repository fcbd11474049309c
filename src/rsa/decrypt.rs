// RSA Decryption Implementation
// Inverts the character cipher with the private exponent

use num_traits::ToPrimitive;

use super::bigint::{mod_pow, RsaBigInt};
use super::keygen::RsaPrivateKey;
use crate::error::{VaultError, VaultResult};

/// Decrypt a single value: m = c^d mod n
pub fn decrypt_code(c: &RsaBigInt, private_key: &RsaPrivateKey) -> RsaBigInt {
    mod_pow(c, &private_key.d, &private_key.n)
}

/// Decrypt a ciphertext sequence to a string
pub fn decrypt_to_string(ciphertext: &[RsaBigInt], private_key: &RsaPrivateKey) -> VaultResult<String> {
    ciphertext
        .iter()
        .map(|c| {
            let m = decrypt_code(c, private_key);
            m.to_u32()
                .and_then(char::from_u32)
                .ok_or_else(|| VaultError::InvalidCodePoint(m.to_string()))
        })
        .collect()
}
