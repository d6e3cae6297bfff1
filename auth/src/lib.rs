//! Authentication utilities library
//!
//! Password hashing (Argon2id) and signed access tokens (HS256), kept free of
//! web and storage concerns so the service crate can wire them behind its own
//! ports.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! let hash = auth::password::hash("hunter2").unwrap();
//! assert!(auth::password::verify("hunter2", &hash).unwrap());
//! assert!(!auth::password::verify("wrong", &hash).unwrap());
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::token::TokenIssuer;
//! use uuid::Uuid;
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!");
//! let user_id = Uuid::new_v4();
//!
//! let token = issuer.issue(user_id).unwrap();
//! let claims = issuer.verify(&token).unwrap();
//! assert_eq!(claims.user_id, user_id);
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenIssuer;
