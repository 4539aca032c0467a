//! Authentication service.
//!
//! Registration, password login, the in-process session, and profile
//! edits. Passwords are hashed with argon2; the stored hash is the only
//! credential material that ever touches the store. "Remember me" keeps
//! the email alone, never a token.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::{DateTime, Utc};

use unlock_style_core::{BookingView, Email, Phone, UserId};
use unlock_style_storage::Store;

use crate::db::UserRepository;
use crate::models::{Booking, User};

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Minimum display-name length.
const MIN_NAME_LENGTH: usize = 2;

/// Completed visits needed to earn a loyalty reward.
pub const LOYALTY_TARGET: usize = 5;

/// What the signup form collects.
#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Progress toward the next loyalty reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoyaltyProgress {
    /// Completed visits, all time.
    pub completed: usize,
    /// Visits counted toward the next reward.
    pub toward_next: usize,
    /// Visits per reward.
    pub target: usize,
}

/// Authentication service.
///
/// The session lives inside the service value and dies with it; only the
/// account records and the remembered email survive in the store.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
    session: Option<User>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service over a store.
    #[must_use]
    pub const fn new(store: &'a dyn Store) -> Self {
        Self {
            users: UserRepository::new(store),
            session: None,
        }
    }

    // =========================================================================
    // Registration & login
    // =========================================================================

    /// Register a new account.
    ///
    /// # Errors
    ///
    /// Returns a field error for a bad name, email, phone, or password;
    /// `AuthError::DuplicateEmail` if the exact email is already taken.
    pub fn register(&self, form: &RegisterForm, now: DateTime<Utc>) -> Result<User, AuthError> {
        let name = form.name.trim();
        if name.chars().count() < MIN_NAME_LENGTH {
            return Err(AuthError::NameTooShort {
                min: MIN_NAME_LENGTH,
            });
        }
        let email = Email::parse(&form.email)?;
        let phone = Phone::parse(&form.phone)?;
        validate_password(&form.password)?;

        let mut users = self.users.load();
        if users.iter().any(|u| u.email == email) {
            return Err(AuthError::DuplicateEmail);
        }

        let password_hash = hash_password(&form.password)?;
        let user = User {
            id: UserId::generate(now, &mut rand::rng()),
            name: name.to_owned(),
            email,
            phone,
            password_hash,
            joined: now,
            loyalty_points: 0,
        };
        users.push(user.clone());
        self.users.save(&users)?;

        tracing::info!(user = %user.id, "account registered");
        Ok(user)
    }

    /// Check a credential pair without touching the session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` for an unknown email, a
    /// malformed email, or a wrong password alike.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let email = Email::parse(email).map_err(|_| AuthError::InvalidCredentials)?;
        let user = self
            .users
            .find_by_email(&email)
            .ok_or(AuthError::InvalidCredentials)?;
        verify_password(password, &user.password_hash)?;
        Ok(user)
    }

    /// Authenticate and establish the session.
    ///
    /// With `remember` set, the email (only) is persisted so the login
    /// form can prefill next time; without it, any previously remembered
    /// email is dropped.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` as [`authenticate`] does,
    /// or a storage error from the remembered-email write.
    ///
    /// [`authenticate`]: Self::authenticate
    pub fn login(
        &mut self,
        email: &str,
        password: &str,
        remember: bool,
    ) -> Result<&User, AuthError> {
        let user = self.authenticate(email, password)?;
        if remember {
            self.users.remember(&user.email)?;
        } else {
            self.users.forget()?;
        }
        tracing::info!(user = %user.id, "signed in");
        Ok(self.session.insert(user))
    }

    /// Drop the session. The remembered email, if any, stays.
    pub fn logout(&mut self) {
        self.session = None;
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.session.as_ref()
    }

    /// The email persisted by a past "remember me" login.
    #[must_use]
    pub fn remembered_email(&self) -> Option<Email> {
        self.users.remembered()
    }

    /// Drop the remembered email.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the removal fails.
    pub fn forget_remembered(&self) -> Result<(), AuthError> {
        self.users.forget()?;
        Ok(())
    }

    // =========================================================================
    // Profile
    // =========================================================================

    /// Update the signed-in user's name and phone.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NotSignedIn` without a session, or a field
    /// error for a bad name or phone.
    pub fn update_profile(&mut self, name: &str, phone: &str) -> Result<&User, AuthError> {
        let current = self.session.as_ref().ok_or(AuthError::NotSignedIn)?;

        let name = name.trim();
        if name.chars().count() < MIN_NAME_LENGTH {
            return Err(AuthError::NameTooShort {
                min: MIN_NAME_LENGTH,
            });
        }
        let phone = Phone::parse(phone)?;

        let mut users = self.users.load();
        let record = users
            .iter_mut()
            .find(|u| u.id == current.id)
            .ok_or(AuthError::NotSignedIn)?;
        record.name = name.to_owned();
        record.phone = phone;
        let updated = record.clone();
        self.users.save(&users)?;

        Ok(self.session.insert(updated))
    }

    /// Change the signed-in user's password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NotSignedIn` without a session,
    /// `AuthError::InvalidCredentials` if `current` doesn't verify, or a
    /// password-strength error for the replacement.
    pub fn change_password(&mut self, current: &str, new: &str) -> Result<(), AuthError> {
        let user = self.session.as_ref().ok_or(AuthError::NotSignedIn)?;
        verify_password(current, &user.password_hash)?;
        validate_password(new)?;

        let password_hash = hash_password(new)?;
        let mut users = self.users.load();
        let record = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(AuthError::NotSignedIn)?;
        record.password_hash.clone_from(&password_hash);
        let updated = record.clone();
        self.users.save(&users)?;

        self.session = Some(updated);
        Ok(())
    }
}

/// Progress toward the user's next loyalty reward, counted from their
/// completed visits as of `now`.
#[must_use]
pub fn loyalty_progress(user: &User, bookings: &[Booking], now: DateTime<Utc>) -> LoyaltyProgress {
    let completed = bookings
        .iter()
        .filter(|b| b.email.as_ref() == Some(&user.email) && b.view(now) == BookingView::Completed)
        .count();
    LoyaltyProgress {
        completed,
        toward_next: completed % LOYALTY_TARGET,
        target: LOYALTY_TARGET,
    }
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }
    Ok(())
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}
