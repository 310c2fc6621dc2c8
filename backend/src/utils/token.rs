use rand::RngCore;
use sha2::{Digest, Sha256};

/// Generates a fresh session token: 32 random bytes, hex encoded.
/// The raw value travels only in the cookie; the store keeps its digest.
pub fn generate_session_token() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// SHA-256 digest of a session token, hex encoded, as persisted in `sesiones`.
pub fn hash_session_token(token: &str) -> String {
    let digest = Sha256::digest(token.as_bytes());
    hex::encode(digest)
}
