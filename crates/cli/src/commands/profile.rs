//! Profile and address book commands.

use tracing::info;

use super::notify;

use shelf_core::AddressId;
use shelf_storefront::error::{Notice, Result};
use shelf_storefront::models::{Address, NewAddress};
use shelf_storefront::services::ProfileError;
use shelf_storefront::state::AppState;

/// # Errors
///
/// Returns `ProfileError::UserNotFound` if nobody has logged in yet.
pub fn show(state: &AppState) -> Result<()> {
    let user = state.auth().user_data().ok_or(ProfileError::UserNotFound)?;
    info!("{} <{}>", user.name, user.email);
    match user.default_address() {
        Some(address) => info!("Default address: {}", address.summary()),
        None => info!("No addresses saved"),
    }
    info!("{} addresses", user.addresses.len());
    Ok(())
}

/// # Errors
///
/// Returns an error if the name is blank or there is no profile.
pub fn rename(state: &AppState, name: &str) -> Result<()> {
    let user = state.profile().update_name(name)?;
    notify(&Notice::success(format!("Name updated to {}", user.name)));
    Ok(())
}

pub fn addresses(state: &AppState) {
    let addresses = state.profile().addresses();
    if addresses.is_empty() {
        info!("No addresses saved");
        return;
    }
    for address in &addresses {
        print_address(address);
    }
}

/// # Errors
///
/// Returns an error if city or street is blank or there is no profile.
pub fn add_address(state: &AppState, address: NewAddress) -> Result<()> {
    let address = state.profile().add_address(address)?;
    notify(&Notice::success("Address added"));
    print_address(&address);
    Ok(())
}

/// # Errors
///
/// Returns an error if the address does not exist.
pub fn set_default(state: &AppState, id: AddressId) -> Result<()> {
    let address = state.profile().set_default_address(id)?;
    notify(&Notice::success(format!(
        "Default address is now #{}: {}",
        address.id,
        address.summary()
    )));
    Ok(())
}

/// # Errors
///
/// Returns an error if the address does not exist or is a default that
/// cannot be removed yet.
pub fn delete(state: &AppState, id: AddressId) -> Result<()> {
    state.profile().delete_address(id)?;
    notify(&Notice::success(format!("Address #{id} deleted")));
    Ok(())
}

fn print_address(address: &Address) {
    let marker = if address.is_default { " (default)" } else { "" };
    let mut extra = Vec::new();
    if let Some(building) = &address.building_number {
        extra.push(format!("building {building}"));
    }
    if let Some(postal) = &address.postal_code {
        extra.push(format!("postal code {postal}"));
    }
    if extra.is_empty() {
        info!("#{} {}{marker}", address.id, address.summary());
    } else {
        info!(
            "#{} {}{marker}, {}",
            address.id,
            address.summary(),
            extra.join(", ")
        );
    }
}
