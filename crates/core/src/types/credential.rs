//! The single demo identity the storefront accepts.

use secrecy::{ExposeSecret, SecretString};

/// Email/password pair checked by login.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct DemoCredentials {
    /// Display name given to the session and seeded user record.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Login password.
    pub password: SecretString,
}

impl DemoCredentials {
    /// Create a credential pair.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// Exact comparison against both fields.
    #[must_use]
    pub fn matches(&self, email: &str, password: &str) -> bool {
        // Evaluate both sides so a wrong email and a wrong password take the same path.
        let email_ok = self.email == email;
        let password_ok = self.password.expose_secret() == password;
        email_ok & password_ok
    }
}

impl Default for DemoCredentials {
    fn default() -> Self {
        Self::new("Haythem", "haythem@example.com", "123456")
    }
}

impl std::fmt::Debug for DemoCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DemoCredentials")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
