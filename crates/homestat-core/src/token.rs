// Bearer credential generation
// Decision: Session tokens are 32 random bytes (256 bits, well above the
// 128-bit floor); API keys are 256 random bytes, deliberately oversized
// because they live for years. Both are hex-encoded for transport.

use rand::Rng;
use sha2::{Digest, Sha256};

/// Random bytes in a session token
pub const SESSION_TOKEN_BYTES: usize = 32;

/// Random bytes in an API key
pub const API_KEY_BYTES: usize = 256;

/// Generate a session token from a cryptographically secure random source
pub fn generate_session_token() -> String {
    random_hex(SESSION_TOKEN_BYTES)
}

/// Generate an API key from a cryptographically secure random source
pub fn generate_api_key() -> String {
    random_hex(API_KEY_BYTES)
}

/// Short SHA-256 fingerprint of a key, safe for display and logging
pub fn key_fingerprint(key: &str) -> String {
    let hash = Sha256::digest(key.as_bytes());
    hex::encode(&hash[..8])
}

fn random_hex(len: usize) -> String {
    let mut rng = rand::thread_rng();
    let bytes: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
    hex::encode(bytes)
}
