use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Hash a plaintext password.
///
/// Uses Argon2id with a freshly generated random salt. The returned string is
/// in PHC format (algorithm, parameters, salt, and digest), ready for storage.
///
/// # Errors
/// * `HashingFailed` - the hashing operation itself failed
pub fn hash(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PasswordError::HashingFailed(e.to_string()))
}

/// Verify a plaintext password against a stored PHC-format hash.
///
/// A password that simply does not match yields `Ok(false)`; only a hash that
/// cannot be parsed or compared is an error.
///
/// # Errors
/// * `VerificationFailed` - the stored hash is not a valid PHC string
pub fn verify(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| PasswordError::VerificationFailed(format!("Invalid password hash: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
