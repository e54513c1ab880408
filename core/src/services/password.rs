//! One-way password hashing.
//!
//! The verifier never sees plaintext storage: it only asks a hasher whether
//! a raw password matches a stored hash.

use crate::errors::DomainError;

/// Password hashing strategy
pub trait PasswordHasher: Send + Sync {
    /// Check a raw password against a stored hash
    ///
    /// Returns `false` for a mismatch and for a malformed hash.
    fn matches(&self, raw_password: &str, hashed: &str) -> bool;

    /// Hash a raw password for storage
    fn hash(&self, raw_password: &str) -> Result<String, DomainError>;
}

/// bcrypt-backed password hasher
///
/// Comparison timing is whatever `bcrypt::verify` provides; no extra
/// lockout or throttling is applied here.
#[derive(Debug, Clone)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Create a hasher with an explicit cost factor
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// The configured cost factor
    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl From<&ia_shared::PasswordConfig> for BcryptPasswordHasher {
    fn from(config: &ia_shared::PasswordConfig) -> Self {
        Self::new(config.bcrypt_cost)
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn matches(&self, raw_password: &str, hashed: &str) -> bool {
        match bcrypt::verify(raw_password, hashed) {
            Ok(matched) => matched,
            Err(e) => {
                tracing::debug!(error = %e, "Stored password hash could not be parsed");
                false
            }
        }
    }

    fn hash(&self, raw_password: &str) -> Result<String, DomainError> {
        bcrypt::hash(raw_password, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Password hashing failed: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum bcrypt cost keeps the tests fast
    fn hasher() -> BcryptPasswordHasher {
        BcryptPasswordHasher::new(4)
    }

    #[test]
    fn test_hash_then_match() {
        let hasher = hasher();
        let hash = hasher.hash("correct horse battery staple").unwrap();

        assert_ne!(hash, "correct horse battery staple");
        assert!(hasher.matches("correct horse battery staple", &hash));
        assert!(!hasher.matches("Correct horse battery staple", &hash));
    }

    #[test]
    fn test_malformed_hash_does_not_match() {
        assert!(!hasher().matches("anything", "not-a-bcrypt-hash"));
        assert!(!hasher().matches("", ""));
    }

    #[test]
    fn test_invalid_cost_is_an_error() {
        let result = BcryptPasswordHasher::new(99).hash("password");
        assert!(matches!(result, Err(DomainError::Internal { .. })));
    }

    #[test]
    fn test_from_password_config() {
        let config = ia_shared::PasswordConfig { bcrypt_cost: 6 };
        assert_eq!(BcryptPasswordHasher::from(&config).cost(), 6);
    }
}
