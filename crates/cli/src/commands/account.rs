//! Login, logout, and session inspection.

use tracing::info;

use super::notify;

use shelf_storefront::error::{Notice, Result};
use shelf_storefront::filters::format_date;
use shelf_storefront::state::AppState;

/// Log in and report who is now signed in.
///
/// # Errors
///
/// Returns an error if the credentials do not match the demo account.
pub fn login(state: &AppState, email: &str, password: &str) -> Result<()> {
    let session = state.auth().login(email, password)?;
    notify(&Notice::success(format!("Welcome back, {}!", session.name)));
    Ok(())
}

pub fn logout(state: &AppState) {
    state.auth().logout();
    notify(&Notice::info("Logged out"));
}

pub fn whoami(state: &AppState) {
    match state.auth().current_user() {
        Some(session) => info!(
            "{} <{}>, logged in {}",
            session.name,
            session.email,
            format_date(&session.login_time)
        ),
        None => notify(&Notice::info("Not logged in")),
    }
}
