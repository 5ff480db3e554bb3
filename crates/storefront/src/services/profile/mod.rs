//! Profile service.
//!
//! Edits the [`UserData`] record seeded at first login: the display name and
//! the address book. Whenever the address book is non-empty, exactly one
//! address is the default.

mod error;

pub use error::ProfileError;

use shelf_core::AddressId;

use crate::models::{Address, NewAddress, Session, UserData};
use crate::storage::{Storage, keys};

/// Profile service.
pub struct ProfileService<'a> {
    storage: &'a Storage,
}

impl<'a> ProfileService<'a> {
    /// Create a new profile service.
    #[must_use]
    pub const fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    fn user(&self) -> Result<UserData, ProfileError> {
        self.storage.get(keys::USER_DATA).ok_or_else(|| {
            tracing::warn!("Profile change without user data");
            ProfileError::UserNotFound
        })
    }

    fn save_user(&self, user: &UserData) {
        self.storage.set(keys::USER_DATA, user);
    }

    /// Change the display name.
    ///
    /// The live session, if any, picks up the new name too.
    ///
    /// # Errors
    ///
    /// - `ProfileError::EmptyName` if `name` is blank.
    /// - `ProfileError::UserNotFound` if no profile exists.
    pub fn update_name(&self, name: &str) -> Result<UserData, ProfileError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ProfileError::EmptyName);
        }
        let mut user = self.user()?;
        name.clone_into(&mut user.name);
        self.save_user(&user);

        if let Some(mut session) = self.storage.get::<Session>(keys::SESSION) {
            name.clone_into(&mut session.name);
            self.storage.set(keys::SESSION, &session);
        }

        tracing::info!(name, "Profile name updated");
        Ok(user)
    }

    /// The address book, or an empty list when there is no profile.
    #[must_use]
    pub fn addresses(&self) -> Vec<Address> {
        self.user().map(|user| user.addresses).unwrap_or_default()
    }

    /// The default address, if any.
    #[must_use]
    pub fn default_address(&self) -> Option<Address> {
        self.user().ok()?.default_address().cloned()
    }

    /// Add an address. The first address becomes the default.
    ///
    /// # Errors
    ///
    /// - `ProfileError::MissingRequiredField` if city or street is blank.
    /// - `ProfileError::UserNotFound` if no profile exists.
    pub fn add_address(&self, new: NewAddress) -> Result<Address, ProfileError> {
        let city = required(&new.city, "City")?;
        let street = required(&new.street, "Street")?;
        let mut user = self.user()?;

        let address = Address {
            id: user.allocate_address_id(),
            city,
            street,
            district: optional(new.district),
            building_number: optional(new.building_number),
            postal_code: optional(new.postal_code),
            is_default: user.addresses.is_empty(),
        };
        user.addresses.push(address.clone());
        self.save_user(&user);

        tracing::info!(
            address_id = %address.id,
            is_default = address.is_default,
            "Address added"
        );
        Ok(address)
    }

    /// Make `id` the only default address.
    ///
    /// # Errors
    ///
    /// - `ProfileError::UserNotFound` if no profile exists.
    /// - `ProfileError::AddressNotFound` if no address has this ID.
    pub fn set_default_address(&self, id: AddressId) -> Result<Address, ProfileError> {
        let mut user = self.user()?;
        if user.address(id).is_none() {
            tracing::warn!(address_id = %id, "Default change for unknown address");
            return Err(ProfileError::AddressNotFound(id));
        }
        for address in &mut user.addresses {
            address.is_default = address.id == id;
        }
        self.save_user(&user);

        tracing::info!(address_id = %id, "Default address changed");
        user.address(id)
            .cloned()
            .ok_or(ProfileError::AddressNotFound(id))
    }

    /// Delete an address.
    ///
    /// The default address may only be deleted when it is the only one.
    ///
    /// # Errors
    ///
    /// - `ProfileError::UserNotFound` if no profile exists.
    /// - `ProfileError::AddressNotFound` if no address has this ID.
    /// - `ProfileError::CannotDeleteDefault` if it is the default and others remain.
    pub fn delete_address(&self, id: AddressId) -> Result<(), ProfileError> {
        let mut user = self.user()?;
        let Some(address) = user.address(id) else {
            tracing::warn!(address_id = %id, "Delete of unknown address");
            return Err(ProfileError::AddressNotFound(id));
        };
        if address.is_default && user.addresses.len() > 1 {
            tracing::warn!(address_id = %id, "Delete of default address rejected");
            return Err(ProfileError::CannotDeleteDefault);
        }
        user.addresses.retain(|a| a.id != id);
        self.save_user(&user);

        tracing::info!(address_id = %id, remaining = user.addresses.len(), "Address deleted");
        Ok(())
    }
}

fn required(value: &str, field: &'static str) -> Result<String, ProfileError> {
    let value = value.trim();
    if value.is_empty() {
        tracing::warn!(field, "Required address field missing");
        return Err(ProfileError::MissingRequiredField(field));
    }
    Ok(value.to_owned())
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use shelf_core::Email;

    use super::*;

    fn storage_with_user() -> Storage {
        let storage = Storage::in_memory();
        let user = UserData::new(
            "Haythem".to_string(),
            Email::parse("haythem@example.com").unwrap(),
        );
        storage.set(keys::USER_DATA, &user);
        storage
    }

    #[test]
    fn test_everything_requires_user() {
        let storage = Storage::in_memory();
        let profile = ProfileService::new(&storage);

        assert_eq!(profile.update_name("Ana"), Err(ProfileError::UserNotFound));
        assert_eq!(
            profile.add_address(NewAddress::new("Riyadh", "Olaya St")),
            Err(ProfileError::UserNotFound)
        );
        assert_eq!(
            profile.set_default_address(AddressId::new(1)),
            Err(ProfileError::UserNotFound)
        );
        assert_eq!(
            profile.delete_address(AddressId::new(1)),
            Err(ProfileError::UserNotFound)
        );
        assert!(profile.addresses().is_empty());
        assert_eq!(profile.default_address(), None);
    }

    #[test]
    fn test_update_name_trims_and_mirrors_session() {
        let storage = storage_with_user();
        storage.set(
            keys::SESSION,
            &Session {
                name: "Haythem".to_string(),
                email: Email::parse("haythem@example.com").unwrap(),
                login_time: Utc::now(),
            },
        );
        let profile = ProfileService::new(&storage);

        let user = profile.update_name("  Haythem A.  ").unwrap();
        assert_eq!(user.name, "Haythem A.");
        let session: Session = storage.get(keys::SESSION).unwrap();
        assert_eq!(session.name, "Haythem A.");

        assert_eq!(profile.update_name("   "), Err(ProfileError::EmptyName));
    }

    #[test]
    fn test_update_name_without_session() {
        let storage = storage_with_user();
        let profile = ProfileService::new(&storage);
        profile.update_name("Ana").unwrap();
        assert!(storage.get::<Session>(keys::SESSION).is_none());
    }

    #[test]
    fn test_first_address_is_default() {
        let storage = storage_with_user();
        let profile = ProfileService::new(&storage);

        let first = profile
            .add_address(NewAddress::new(" Riyadh ", " Olaya St "))
            .unwrap();
        assert_eq!(first.id, AddressId::new(1));
        assert_eq!(first.city, "Riyadh");
        assert_eq!(first.street, "Olaya St");
        assert!(first.is_default);

        let second = profile
            .add_address(NewAddress {
                district: Some("  ".to_string()),
                postal_code: Some(" 12211 ".to_string()),
                ..NewAddress::new("Jeddah", "Tahlia St")
            })
            .unwrap();
        assert_eq!(second.id, AddressId::new(2));
        assert!(!second.is_default);
        assert_eq!(second.district, None);
        assert_eq!(second.postal_code.as_deref(), Some("12211"));
    }

    #[test]
    fn test_required_fields() {
        let storage = storage_with_user();
        let profile = ProfileService::new(&storage);

        assert_eq!(
            profile.add_address(NewAddress::new("", "Olaya St")),
            Err(ProfileError::MissingRequiredField("City"))
        );
        assert_eq!(
            profile.add_address(NewAddress::new("Riyadh", " ")),
            Err(ProfileError::MissingRequiredField("Street"))
        );
        assert!(profile.addresses().is_empty());
    }

    #[test]
    fn test_set_default_leaves_exactly_one() {
        let storage = storage_with_user();
        let profile = ProfileService::new(&storage);
        profile.add_address(NewAddress::new("A", "1")).unwrap();
        profile.add_address(NewAddress::new("B", "2")).unwrap();
        let third = profile.add_address(NewAddress::new("C", "3")).unwrap();

        profile.set_default_address(third.id).unwrap();
        let defaults: Vec<AddressId> = profile
            .addresses()
            .iter()
            .filter(|a| a.is_default)
            .map(|a| a.id)
            .collect();
        assert_eq!(defaults, vec![third.id]);
        assert_eq!(profile.default_address().map(|a| a.id), Some(third.id));

        assert_eq!(
            profile.set_default_address(AddressId::new(9)),
            Err(ProfileError::AddressNotFound(AddressId::new(9)))
        );
    }

    #[test]
    fn test_delete_default_rules() {
        let storage = storage_with_user();
        let profile = ProfileService::new(&storage);
        let x = profile.add_address(NewAddress::new("A", "1")).unwrap();
        let z = profile.add_address(NewAddress::new("B", "2")).unwrap();

        assert_eq!(
            profile.delete_address(x.id),
            Err(ProfileError::CannotDeleteDefault)
        );
        profile.set_default_address(z.id).unwrap();
        profile.delete_address(x.id).unwrap();

        let remaining = profile.addresses();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, z.id);
        assert!(remaining[0].is_default);

        profile.delete_address(z.id).unwrap();
        assert!(profile.addresses().is_empty());
        assert_eq!(
            profile.delete_address(z.id),
            Err(ProfileError::AddressNotFound(z.id))
        );
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let storage = storage_with_user();
        let profile = ProfileService::new(&storage);
        profile.add_address(NewAddress::new("A", "1")).unwrap();
        let second = profile.add_address(NewAddress::new("B", "2")).unwrap();
        profile.delete_address(second.id).unwrap();

        let third = profile.add_address(NewAddress::new("C", "3")).unwrap();
        assert_eq!(third.id, AddressId::new(3));
    }
}
