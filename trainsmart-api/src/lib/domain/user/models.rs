use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::user::errors::EmailError;
use crate::user::errors::GenderError;
use crate::user::errors::PersonNameError;
use crate::user::errors::UserIdError;

/// User aggregate entity.
///
/// The credential part (email + password hash) doubles as the sign-in record;
/// the remaining fields are the fitness profile.
#[derive(Clone)]
pub struct User {
    pub id: UserId,
    pub name: PersonName,
    pub surname: PersonName,
    pub email: EmailAddress,
    pub password_hash: String,
    pub weight: f64,
    pub gender: Gender,
    pub created_at: DateTime<Utc>,
}

// Manual impl so the password hash never leaks through debug logging
impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("surname", &self.surname)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("weight", &self.weight)
            .field("gender", &self.gender)
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID (UUID v4).
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Personal name value type (first or last name).
///
/// The only rule carried by the domain is that a name is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    /// Create a new valid name.
    ///
    /// # Errors
    /// * `Empty` - Name is empty or whitespace only
    pub fn new(name: String) -> Result<Self, PersonNameError> {
        if name.trim().is_empty() {
            Err(PersonNameError::Empty)
        } else {
            Ok(Self(name))
        }
    }

    /// Get the name as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser. Comparisons are
/// exact: no case folding is applied anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Gender as the profile records it.
///
/// The accepted wire values are exactly "male" and "female".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parse a gender from its wire value.
    ///
    /// # Errors
    /// * `Unsupported` - Value is neither "male" nor "female"
    pub fn new(value: &str) -> Result<Self, GenderError> {
        match value {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(GenderError::Unsupported(other.to_string())),
        }
    }

    /// Get the wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

/// Command to create a new user with domain types
#[derive(Debug)]
pub struct CreateUserCommand {
    pub name: PersonName,
    pub surname: PersonName,
    pub email: EmailAddress,
    pub password: String,
    pub weight: f64,
    pub gender: Gender,
}

impl CreateUserCommand {
    /// Construct a new create user command from validated fields.
    ///
    /// The password stays plaintext here; the authentication service hashes it
    /// before anything is persisted.
    pub fn new(
        name: PersonName,
        surname: PersonName,
        email: EmailAddress,
        password: String,
        weight: f64,
        gender: Gender,
    ) -> Self {
        Self {
            name,
            surname,
            email,
            password,
            weight,
            gender,
        }
    }
}

/// Command to update an existing user's profile with optional validated fields.
///
/// All fields are optional to support partial updates. Passwords are not
/// updated through this command; password changes go through a dedicated
/// operation so the hash is never mixed into profile writes.
#[derive(Debug)]
pub struct UpdateUserCommand {
    pub name: Option<PersonName>,
    pub surname: Option<PersonName>,
    pub email: Option<EmailAddress>,
    pub weight: Option<f64>,
    pub gender: Option<Gender>,
}
