// Ciphertext Text Codec
// Comma-separated decimal integers, one per plaintext character

use std::str::FromStr;

use super::bigint::RsaBigInt;
use crate::error::{VaultError, VaultResult};

/// Render a ciphertext as `c0,c1,...` with no header or trailing newline
pub fn render_ciphertext(ciphertext: &[RsaBigInt]) -> String {
    ciphertext
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Parse `c0,c1,...` back into integers.
///
/// Tokens must be unsigned decimal integers; surrounding whitespace is ignored.
/// Anything else is rejected rather than interpreted.
pub fn parse_ciphertext(content: &str) -> VaultResult<Vec<RsaBigInt>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    content
        .split(',')
        .enumerate()
        .map(|(index, raw)| {
            let token = raw.trim();
            let malformed = || VaultError::MalformedCiphertext {
                index,
                token: token.to_string(),
            };
            // BigUint::from_str accepts a leading '+' and '_' separators
            if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            RsaBigInt::from_str(token).map_err(|_| malformed())
        })
        .collect()
}
