//! Profile error types.

use thiserror::Error;

use shelf_core::AddressId;

/// Errors that can occur when editing the profile or its address book.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("Address not found: {0}")]
    AddressNotFound(AddressId),

    /// A required address field was blank.
    #[error("{0} is required")]
    MissingRequiredField(&'static str),

    #[error("Name cannot be empty")]
    EmptyName,

    /// The default address can only go once it is the last one left.
    #[error("Cannot delete the default address")]
    CannotDeleteDefault,

    /// No profile has been created yet (nobody has logged in).
    #[error("User not found")]
    UserNotFound,
}
