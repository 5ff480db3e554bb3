//! User profile and address book.

use serde::{Deserialize, Serialize};

use shelf_core::{AddressId, Email};

/// Profile record. Outlives sessions: logout leaves it in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub name: String,
    pub email: Email,
    #[serde(default)]
    pub addresses: Vec<Address>,
    /// Next address ID to hand out. Zero in records written before the
    /// counter existed; [`UserData::allocate_address_id`] handles that.
    #[serde(default)]
    pub next_address_id: u32,
}

impl UserData {
    /// Empty address book for `name`/`email`.
    #[must_use]
    pub const fn new(name: String, email: Email) -> Self {
        Self {
            name,
            email,
            addresses: Vec::new(),
            next_address_id: 1,
        }
    }

    /// The first address flagged as default.
    #[must_use]
    pub fn default_address(&self) -> Option<&Address> {
        self.addresses.iter().find(|a| a.is_default)
    }

    /// Address by ID.
    #[must_use]
    pub fn address(&self, id: AddressId) -> Option<&Address> {
        self.addresses.iter().find(|a| a.id == id)
    }

    /// Hand out a fresh address ID and advance the counter.
    ///
    /// IDs are never reused, even after the highest address is deleted.
    pub fn allocate_address_id(&mut self) -> AddressId {
        let above_existing = self
            .addresses
            .iter()
            .map(|a| a.id.as_u32())
            .max()
            .map_or(1, |max| max.saturating_add(1));
        let id = self.next_address_id.max(above_existing).max(1);
        self.next_address_id = id.saturating_add(1);
        AddressId::new(id)
    }
}

/// A delivery address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: AddressId,
    pub city: String,
    pub street: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    pub is_default: bool,
}

impl Address {
    /// One-line form: `street, city[, district]`.
    #[must_use]
    pub fn summary(&self) -> String {
        match &self.district {
            Some(district) => format!("{}, {}, {district}", self.street, self.city),
            None => format!("{}, {}", self.street, self.city),
        }
    }
}

/// Fields supplied when adding an address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAddress {
    pub city: String,
    pub street: String,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub building_number: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
}

impl NewAddress {
    /// Address with just the required fields.
    #[must_use]
    pub fn new(city: impl Into<String>, street: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            street: street.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn user() -> UserData {
        UserData::new("Ana".to_string(), Email::parse("ana@example.com").unwrap())
    }

    fn address(id: u32, is_default: bool) -> Address {
        Address {
            id: AddressId::new(id),
            city: "Riyadh".to_string(),
            street: "King Fahd Rd".to_string(),
            district: None,
            building_number: None,
            postal_code: None,
            is_default,
        }
    }

    #[test]
    fn test_allocate_starts_at_one() {
        let mut user = user();
        assert_eq!(user.allocate_address_id(), AddressId::new(1));
        assert_eq!(user.allocate_address_id(), AddressId::new(2));
    }

    #[test]
    fn test_allocate_never_reuses_after_delete() {
        let mut user = user();
        let first = user.allocate_address_id();
        user.addresses.push(address(first.as_u32(), true));
        let second = user.allocate_address_id();
        user.addresses.push(address(second.as_u32(), false));

        user.addresses.retain(|a| a.id != second);
        assert_eq!(user.allocate_address_id(), AddressId::new(3));
    }

    #[test]
    fn test_legacy_record_without_counter() {
        let json = r#"{"name":"Ana","email":"ana@example.com","addresses":[
            {"id":4,"city":"Jeddah","street":"Tahlia St","isDefault":true}
        ]}"#;
        let mut user: UserData = serde_json::from_str(json).unwrap();
        assert_eq!(user.next_address_id, 0);
        assert_eq!(user.allocate_address_id(), AddressId::new(5));
    }

    #[test]
    fn test_summary() {
        let mut a = address(1, true);
        assert_eq!(a.summary(), "King Fahd Rd, Riyadh");
        a.district = Some("Olaya".to_string());
        assert_eq!(a.summary(), "King Fahd Rd, Riyadh, Olaya");
    }
}
