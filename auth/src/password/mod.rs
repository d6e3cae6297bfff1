pub mod argon2;
pub mod errors;

pub use argon2::hash;
pub use argon2::verify;
pub use errors::PasswordError;
