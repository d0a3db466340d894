// Fallback config used when API_KEY is not set at build time.
// build.rs copies this into OUT_DIR/config.rs; an empty key is revealed as "".
// A set but non-UTF-8 API_KEY fails the build instead of landing here.

pub const API_KEY_XOR_KEY: [u8; 32] = [0u8; 32];

pub const API_KEY_OBFUSCATED: &[u8] = b"";

pub const API_KEY_SHA256: [u8; 32] = [0u8; 32];
