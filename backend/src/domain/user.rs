//! User data model.
//!
//! Each field is a validated newtype; a [`UserProfile`] bundles the three
//! caller-supplied fields and a [`User`] adds the store-assigned identifier.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

/// Validation errors returned by the user field constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    InvalidId,
    EmptyName,
    EmptyEmail,
    InvalidEmail,
    NegativeAge,
    AgeTooLarge { max: i32 },
}

impl UserValidationError {
    /// Wire name of the field the failure refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidId => "id",
            Self::EmptyName => "name",
            Self::EmptyEmail | Self::InvalidEmail => "email",
            Self::NegativeAge | Self::AgeTooLarge { .. } => "age",
        }
    }

    /// Stable machine-readable code for the failure.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidId => "invalid_id",
            Self::EmptyName => "empty_name",
            Self::EmptyEmail => "empty_email",
            Self::InvalidEmail => "invalid_email",
            Self::NegativeAge => "negative_age",
            Self::AgeTooLarge { .. } => "age_too_large",
        }
    }
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId => write!(f, "user id must be a positive integer"),
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::InvalidEmail => write!(f, "email must be a valid email address"),
            Self::NegativeAge => write!(f, "age must be zero or greater"),
            Self::AgeTooLarge { max } => write!(f, "age must be at most {max}"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Store-assigned user identifier.
///
/// Identifiers are positive; `0` and negative values never name a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(i64);

impl UserId {
    /// Validate and construct a [`UserId`].
    pub fn new(id: i64) -> Result<Self, UserValidationError> {
        if id <= 0 {
            return Err(UserValidationError::InvalidId);
        }
        Ok(Self(id))
    }

    /// Raw integer value.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = UserValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .parse::<i64>()
            .map_err(|_| UserValidationError::InvalidId)?;
        Self::new(raw)
    }
}

/// Non-empty user name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    /// Validate and construct a [`UserName`].
    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.0
    }
}

/// Maximum length of an email address accepted by [`EmailAddress::new`].
pub const EMAIL_MAX: usize = 254;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // WHATWG "valid email address" production.
        let pattern = r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Syntactically valid email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`].
    pub fn new(email: impl Into<String>) -> Result<Self, UserValidationError> {
        let email = email.into();
        if email.is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        if email.len() > EMAIL_MAX || !email_regex().is_match(&email) {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

/// Non-negative age in years, stored as a 32-bit integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Age(i32);

impl Age {
    /// Validate and construct an [`Age`].
    pub fn new(age: i64) -> Result<Self, UserValidationError> {
        if age < 0 {
            return Err(UserValidationError::NegativeAge);
        }
        let age = i32::try_from(age)
            .map_err(|_| UserValidationError::AgeTooLarge { max: i32::MAX })?;
        Ok(Self(age))
    }

    /// Raw integer value.
    pub fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The caller-supplied fields of a user: everything except the identifier.
///
/// Used as the payload for both create and full-overwrite update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    name: UserName,
    email: EmailAddress,
    age: Age,
}

impl UserProfile {
    /// Build a profile from validated components.
    pub fn new(name: UserName, email: EmailAddress, age: Age) -> Self {
        Self { name, email, age }
    }

    /// Fallible constructor validating every field.
    ///
    /// Fields are checked in order `name`, `email`, `age`; the first failure
    /// is returned.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{UserProfile, UserValidationError};
    ///
    /// let profile = UserProfile::try_from_parts("Ada", "ada@example.com", 30).expect("valid");
    /// assert_eq!(profile.age().get(), 30);
    ///
    /// let err = UserProfile::try_from_parts("Ada", "ada@example.com", -1).unwrap_err();
    /// assert_eq!(err, UserValidationError::NegativeAge);
    /// ```
    pub fn try_from_parts(
        name: impl Into<String>,
        email: impl Into<String>,
        age: i64,
    ) -> Result<Self, UserValidationError> {
        Ok(Self::new(
            UserName::new(name)?,
            EmailAddress::new(email)?,
            Age::new(age)?,
        ))
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn age(&self) -> Age {
        self.age
    }
}

/// A persisted user.
///
/// ## Invariants
/// - `id` is positive and assigned by the store.
/// - every profile field satisfied its validation rule when written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    profile: UserProfile,
}

impl User {
    /// Pair a store-assigned identifier with a profile.
    pub fn new(id: UserId, profile: UserProfile) -> Self {
        Self { id, profile }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn name(&self) -> &UserName {
        self.profile.name()
    }

    pub fn email(&self) -> &EmailAddress {
        self.profile.email()
    }

    pub fn age(&self) -> Age {
        self.profile.age()
    }

    /// Split into identifier and profile.
    pub fn into_parts(self) -> (UserId, UserProfile) {
        (self.id, self.profile)
    }
}
