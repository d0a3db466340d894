//! Typed access to the API key embedded at build time.
//!
//! The key is stored obfuscated and revealed on first use. A key that was
//! never provided, or that fails its digest check, reads as `""`.

use std::sync::OnceLock;

use sha2::{Digest, Sha256};

use crate::config::{API_KEY_OBFUSCATED, API_KEY_SHA256, API_KEY_XOR_KEY};
use crate::obfuscate;

static API_KEY: OnceLock<String> = OnceLock::new();

/// The embedded API key, or the empty string when none was built in.
pub fn api_key() -> &'static str {
    API_KEY
        .get_or_init(|| reveal_checked(API_KEY_OBFUSCATED, &API_KEY_XOR_KEY, &API_KEY_SHA256))
        .as_str()
}

/// The embedded API key, or `None` when it is absent or empty.
pub fn try_api_key() -> Option<&'static str> {
    Some(api_key()).filter(|key| !key.is_empty())
}

/// Short SHA-256 prefix of the key, safe to put in logs.
pub fn fingerprint() -> Option<String> {
    try_api_key().map(fingerprint_of)
}

fn fingerprint_of(key: &str) -> String {
    let digest = Sha256::digest(key.as_bytes());
    hex::encode(&digest[..4])
}

fn reveal_checked(obfuscated: &[u8], xor_key: &[u8; 32], expected: &[u8; 32]) -> String {
    if obfuscated.is_empty() {
        return String::new();
    }

    let Some(plain) = obfuscate::reveal(obfuscated, xor_key) else {
        error!("Embedded API key is not valid UTF-8, using empty key");
        return String::new();
    };

    let digest = Sha256::digest(plain.as_bytes());
    if digest.as_slice() != expected {
        // Zero digest means the config was not generated by build.rs.
        if *expected != [0u8; 32] {
            error!(
                "API key hash mismatch! Expected: {}, Actual: {}",
                hex::encode(expected),
                hex::encode(digest)
            );
            return String::new();
        }
        warn!("API key hash check skipped (embedded hash is zero).");
    }

    plain
}
