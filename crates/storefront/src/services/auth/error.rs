//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during authentication operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Email or password did not match the demo identity.
    ///
    /// Unknown emails and wrong passwords are deliberately indistinguishable.
    #[error("Invalid email or password")]
    InvalidCredentials,
}
