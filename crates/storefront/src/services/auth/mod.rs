//! Authentication service.
//!
//! There is exactly one account: the configured demo identity. Logging in
//! writes a [`Session`] and, on the very first login, seeds the
//! [`UserData`] profile that the profile service edits from then on.

mod error;

pub use error::AuthError;

use chrono::Utc;

use shelf_core::{DemoCredentials, Email};

use crate::models::{Address, Session, UserData};
use crate::storage::{Storage, keys};

/// Authentication service.
pub struct AuthService<'a> {
    storage: &'a Storage,
    credentials: &'a DemoCredentials,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(storage: &'a Storage, credentials: &'a DemoCredentials) -> Self {
        Self {
            storage,
            credentials,
        }
    }

    /// Login with email and password.
    ///
    /// Seeds the profile record if none exists yet; an existing profile
    /// (and any name change made through it) is kept.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the pair does not exactly
    /// match the demo identity.
    pub fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        if !self.credentials.matches(email, password) {
            tracing::warn!("Login rejected");
            return Err(AuthError::InvalidCredentials);
        }
        let email = Email::parse(email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = match self.user_data() {
            Some(user) => user,
            None => {
                let user = self.seed_user_data(email.clone());
                self.save_user_data(&user);
                tracing::info!(email = %email, "Seeded user profile");
                user
            }
        };

        let session = Session {
            name: user.name,
            email,
            login_time: Utc::now(),
        };
        self.storage.set(keys::SESSION, &session);

        tracing::info!(email = %session.email, "User logged in");
        Ok(session)
    }

    /// Drop the session. Safe to call when already logged out.
    pub fn logout(&self) {
        self.storage.remove(keys::SESSION);
        tracing::info!("User logged out");
    }

    /// Whether a readable session exists.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    /// The stored session, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<Session> {
        self.storage.get(keys::SESSION)
    }

    /// The stored profile, if any.
    #[must_use]
    pub fn user_data(&self) -> Option<UserData> {
        self.storage.get(keys::USER_DATA)
    }

    /// Overwrite the stored profile.
    pub fn save_user_data(&self, user: &UserData) {
        self.storage.set(keys::USER_DATA, user);
    }

    /// First-login profile: demo name plus one default address.
    fn seed_user_data(&self, email: Email) -> UserData {
        let mut user = UserData::new(self.credentials.name.clone(), email);
        let id = user.allocate_address_id();
        user.addresses.push(Address {
            id,
            city: "Visakhapatnam".to_string(),
            street: "MVP Road".to_string(),
            district: Some("Visakhapatnam".to_string()),
            building_number: Some("123".to_string()),
            postal_code: Some("530001".to_string()),
            is_default: true,
        });
        user
    }
}
