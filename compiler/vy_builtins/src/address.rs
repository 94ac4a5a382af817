//! EIP-55 mixed-case checksums for address literals.

use sha3::{Digest, Keccak256};

/// Length of an address literal: `0x` and 40 hex digits.
pub const ADDRESS_LITERAL_LEN: usize = 42;

/// The checksummed spelling of an address literal, or `None` if `text` is
/// not `0x` followed by exactly 40 hex digits.
///
/// A letter digit is upper-cased when the matching nibble of the Keccak-256
/// hash of the lower-case digits is 8 or more.
pub fn checksum_encode(text: &str) -> Option<String> {
    let digits = text.strip_prefix("0x")?;
    if text.len() != ADDRESS_LITERAL_LEN || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let lower = digits.to_ascii_lowercase();
    let hash = Keccak256::digest(lower.as_bytes());

    let mut out = String::with_capacity(ADDRESS_LITERAL_LEN);
    out.push_str("0x");
    for (i, digit) in lower.chars().enumerate() {
        let shift = if i % 2 == 0 { 4 } else { 0 };
        let nibble = (hash[i / 2] >> shift) & 0x0f;
        out.push(if nibble >= 8 {
            digit.to_ascii_uppercase()
        } else {
            digit
        });
    }
    Some(out)
}

/// Whether `text` is a well-formed address literal spelled with its
/// checksum.
pub fn is_checksum_address(text: &str) -> bool {
    checksum_encode(text).is_some_and(|encoded| encoded == text)
}
