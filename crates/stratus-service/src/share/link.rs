//! Share link token generation.

use rand::RngCore;

/// Number of random bytes per token. 20 bytes hex-encode to 40
/// characters, roughly 160 bits of entropy.
const TOKEN_BYTES: usize = 20;

/// Generates share link tokens.
#[derive(Debug, Clone)]
pub struct LinkService;

impl LinkService {
    /// Creates a new link service.
    pub fn new() -> Self {
        Self
    }

    /// Generates a cryptographically secure random token.
    ///
    /// Uniqueness is not guaranteed here; the database constraint on the
    /// token column is authoritative and callers retry on collision.
    pub fn generate_token(&self) -> String {
        let mut bytes = [0u8; TOKEN_BYTES];
        rand::rng().fill_bytes(&mut bytes);
        hex::encode(bytes)
    }
}

impl Default for LinkService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_40_hex_chars() {
        let token = LinkService::new().generate_token();
        assert_eq!(token.len(), 40);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_tokens_differ() {
        let svc = LinkService::new();
        assert_ne!(svc.generate_token(), svc.generate_token());
    }
}
