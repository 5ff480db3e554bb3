//! Session-related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shelf_core::Email;

/// Proof that the current process is logged in.
///
/// Holds a copy of the display name, not a reference to [`super::UserData`];
/// profile updates must mirror name changes here by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Display name.
    pub name: String,
    /// Logged-in email.
    pub email: Email,
    /// When the session was created.
    pub login_time: DateTime<Utc>,
}
