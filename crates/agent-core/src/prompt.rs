//! Prompt helpers for fingerprinting system prompts.
//!
//! Registries log a fingerprint when a persona is created or updated so
//! operators can tell which prompt version produced a given response.

use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a prompt string.
pub fn hash_prompt(prompt: &str) -> String {
    let digest = Sha256::digest(prompt.as_bytes());
    digest.iter().map(|byte| format!("{:02x}", byte)).collect()
}
