//! Jury credential hashing and verification
//!
//! Stored values are `"<saltHex>:<derivedHex>"`: a 16-byte random salt and a
//! 64-byte scrypt-derived key, each hex encoded. Verification never errors;
//! a malformed stored value is simply a non-match.

use std::sync::LazyLock;

use rand::RngCore;
use scrypt::Params;

/// Salt length in bytes
pub const SALT_LEN: usize = 16;

/// Derived key length in bytes
pub const KEY_LEN: usize = 64;

// N = 2^14, r = 8, p = 1
static SCRYPT_PARAMS: LazyLock<Params> =
    LazyLock::new(|| Params::new(14, 8, 1, KEY_LEN).expect("valid scrypt parameters"));

/// Hash a password into its storage form
pub fn hash_password(password: &str) -> String {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill_bytes(&mut salt);

    let mut derived = [0u8; KEY_LEN];
    scrypt::scrypt(password.as_bytes(), &salt, &SCRYPT_PARAMS, &mut derived)
        .expect("output buffer length is valid");

    format!("{}:{}", hex::encode(salt), hex::encode(derived))
}

/// Check a password against a stored hash
///
/// Returns false for stored values with the wrong number of colon-separated
/// parts, empty or non-hex halves, or a derived key of the wrong length.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let mut parts = stored.split(':');
    let (Some(salt_hex), Some(derived_hex), None) = (parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    if salt_hex.is_empty() || derived_hex.is_empty() {
        return false;
    }

    let Ok(salt) = hex::decode(salt_hex) else {
        return false;
    };
    let Ok(expected) = hex::decode(derived_hex) else {
        return false;
    };
    if expected.len() != KEY_LEN {
        return false;
    }

    let mut derived = [0u8; KEY_LEN];
    if scrypt::scrypt(password.as_bytes(), &salt, &SCRYPT_PARAMS, &mut derived).is_err() {
        return false;
    }

    constant_time_eq(&derived, &expected)
}

/// Constant-time comparison to prevent timing attacks
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_round_trip() {
        let stored = hash_password("correct horse battery staple");
        assert!(verify_password("correct horse battery staple", &stored));
        assert!(!verify_password("correct horse battery stable", &stored));
    }

    #[test]
    fn test_stored_format() {
        let stored = hash_password("secret");
        let parts: Vec<&str> = stored.split(':').collect();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].len(), SALT_LEN * 2);
        assert_eq!(parts[1].len(), KEY_LEN * 2);
        assert!(parts[0].chars().all(|c| c.is_ascii_hexdigit()));
        assert!(parts[1].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_distinct_salts() {
        let first = hash_password("secret");
        let second = hash_password("secret");
        assert_ne!(first, second);
        assert!(verify_password("secret", &first));
        assert!(verify_password("secret", &second));
    }

    #[test]
    fn test_malformed_stored_values() {
        assert!(!verify_password("secret", ""));
        assert!(!verify_password("secret", "nocolon"));
        assert!(!verify_password("secret", ":"));
        assert!(!verify_password("secret", "abcd:"));
        assert!(!verify_password("secret", ":abcd"));
        assert!(!verify_password("secret", "ab:cd:ef"));
        assert!(!verify_password("secret", "nothex!!:deadbeef"));
        assert!(!verify_password("secret", "deadbeef:nothex!!"));
        // valid hex but derived key of the wrong length
        assert!(!verify_password("secret", "deadbeef:deadbeef"));
    }

    #[test]
    fn test_wrong_password_against_other_hash() {
        let stored = hash_password("alpha");
        assert!(!verify_password("beta", &stored));
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"abcdef", b"abcdef"));
        assert!(!constant_time_eq(b"abcdef", b"abcdeg"));
        assert!(!constant_time_eq(b"abc", b"abcdef"));
        assert!(constant_time_eq(b"", b""));
    }
}
