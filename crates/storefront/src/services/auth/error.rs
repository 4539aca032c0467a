//! Authentication error types.

use thiserror::Error;

use unlock_style_core::{EmailError, PhoneError};
use unlock_style_storage::StorageError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Name too short.
    #[error("name must be at least {min} characters")]
    NameTooShort {
        /// Minimum accepted length.
        min: usize,
    },

    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Invalid phone format.
    #[error("invalid phone: {0}")]
    InvalidPhone(#[from] PhoneError),

    /// Password too weak.
    #[error("password must be at least {min} characters")]
    PasswordTooShort {
        /// Minimum accepted length.
        min: usize,
    },

    /// An account with this email already exists.
    #[error("an account with this email already exists")]
    DuplicateEmail,

    /// Wrong password or unknown account. Deliberately one variant for
    /// both, so a caller cannot probe which emails are registered.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The operation needs a signed-in session.
    #[error("not signed in")]
    NotSignedIn,

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,

    /// The store rejected a write.
    #[error(transparent)]
    Storage(#[from] StorageError),
}
