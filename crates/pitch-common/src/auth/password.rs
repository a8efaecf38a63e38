//! Password hashing, verification and strength rules
//!
//! Uses Argon2id for password hashing.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use pitch_core::DomainError;

use crate::error::AppError;

/// Hash a password using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verify a password against a hash
///
/// # Errors
/// Returns an error if the stored hash is malformed
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Check that a password and its confirmation are identical
///
/// # Errors
/// Returns `DomainError::PasswordMismatch` when they differ
pub fn ensure_passwords_match(password: &str, confirm_password: &str) -> Result<(), AppError> {
    if password == confirm_password {
        Ok(())
    } else {
        Err(DomainError::PasswordMismatch.into())
    }
}

/// Rules a new password must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub required_length: usize,
    pub require_digit: bool,
    pub require_lowercase: bool,
    pub require_uppercase: bool,
    pub require_non_alphanumeric: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            required_length: 6,
            require_digit: true,
            require_lowercase: true,
            require_uppercase: true,
            require_non_alphanumeric: true,
        }
    }
}

impl PasswordPolicy {
    /// Collect every rule the password breaks
    #[must_use]
    pub fn violations(&self, password: &str) -> Vec<&'static str> {
        let mut violations = Vec::new();

        if password.chars().count() < self.required_length {
            violations.push("Password is too short");
        }
        if self.require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
            violations.push("Password must contain a digit");
        }
        if self.require_lowercase && !password.chars().any(char::is_lowercase) {
            violations.push("Password must contain a lowercase letter");
        }
        if self.require_uppercase && !password.chars().any(char::is_uppercase) {
            violations.push("Password must contain an uppercase letter");
        }
        if self.require_non_alphanumeric && password.chars().all(char::is_alphanumeric) {
            violations.push("Password must contain a non-alphanumeric character");
        }

        violations
    }

    /// # Errors
    /// Returns a validation error listing every broken rule
    pub fn check(&self, password: &str) -> Result<(), AppError> {
        let violations = self.violations(password);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(violations.join("; ")))
        }
    }
}

/// Password service for dependency injection
#[derive(Debug, Clone, Default)]
pub struct PasswordService {
    policy: PasswordPolicy,
}

impl PasswordService {
    #[must_use]
    pub fn new(policy: PasswordPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }

    /// Check strength, then hash
    ///
    /// # Errors
    /// Returns a validation error for weak passwords, internal on hashing failure
    pub fn hash_new(&self, password: &str) -> Result<String, AppError> {
        self.policy.check(password)?;
        hash_password(password)
    }

    /// Verify a password and return an error if invalid
    ///
    /// # Errors
    /// Returns `AppError::InvalidCredentials` if the password doesn't match
    pub fn verify_or_error(&self, password: &str, hash: &str) -> Result<(), AppError> {
        if verify_password(password, hash)? {
            Ok(())
        } else {
            Err(AppError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password() {
        let password = "Secure#Pass1";
        let hash = hash_password(password).unwrap();

        assert!(hash.starts_with("$argon2"));
        assert_ne!(hash, hash_password(password).unwrap());
    }

    #[test]
    fn test_verify_password() {
        let hash = hash_password("Secure#Pass1").unwrap();

        assert!(verify_password("Secure#Pass1", &hash).unwrap());
        assert!(!verify_password("Wrong#Pass1", &hash).unwrap());
        assert!(verify_password("x", "not-a-hash").is_err());
    }

    #[test]
    fn test_passwords_match() {
        assert!(ensure_passwords_match("abc", "abc").is_ok());
        let err = ensure_passwords_match("abc", "abd").unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "PASSWORD_MISMATCH");
    }

    #[test]
    fn test_default_policy() {
        let policy = PasswordPolicy::default();
        assert!(policy.check("Abc12#").is_ok());
        assert!(policy.check("Ab1#").is_err());
        assert_eq!(policy.violations("abcdef").len(), 3);
        assert_eq!(
            policy.violations("ABCDEF1#"),
            vec!["Password must contain a lowercase letter"]
        );
    }

    #[test]
    fn test_service_hash_new_checks_policy() {
        let service = PasswordService::default();
        assert!(matches!(
            service.hash_new("weak"),
            Err(AppError::Validation(_))
        ));

        let hash = service.hash_new("Strong#1").unwrap();
        assert!(service.verify_or_error("Strong#1", &hash).is_ok());
        assert!(matches!(
            service.verify_or_error("Strong#2", &hash),
            Err(AppError::InvalidCredentials)
        ));
    }
}
