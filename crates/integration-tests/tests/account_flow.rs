//! Login, profile, and address book scenarios.

use shelf_core::AddressId;
use shelf_integration_tests::{DEMO_EMAIL, DEMO_PASSWORD, login, memory_state};
use shelf_storefront::models::NewAddress;
use shelf_storefront::services::{AuthError, ProfileError};

// ============================================================================
// Session
// ============================================================================

#[test]
fn test_login_logout_cycle() {
    let state = memory_state();
    let auth = state.auth();

    assert_eq!(
        auth.login(DEMO_EMAIL, "wrong"),
        Err(AuthError::InvalidCredentials)
    );
    assert!(!auth.is_authenticated());

    let session = auth.login(DEMO_EMAIL, DEMO_PASSWORD).expect("login");
    assert!(auth.is_authenticated());
    assert_eq!(session.email.as_str(), DEMO_EMAIL);

    auth.logout();
    assert!(!auth.is_authenticated());
    assert!(auth.current_user().is_none());
}

#[test]
fn test_profile_before_login() {
    let state = memory_state();
    assert_eq!(
        state.profile().update_name("Ana"),
        Err(ProfileError::UserNotFound)
    );
}

#[test]
fn test_rename_survives_relogin() {
    let state = memory_state();
    login(&state);
    state.profile().update_name("Haythem B.").expect("rename");
    assert_eq!(
        state.auth().current_user().map(|s| s.name).as_deref(),
        Some("Haythem B.")
    );

    state.auth().logout();
    login(&state);
    assert_eq!(
        state.auth().current_user().map(|s| s.name).as_deref(),
        Some("Haythem B.")
    );
}

// ============================================================================
// Address Book
// ============================================================================

#[test]
fn test_default_address_deletion_rules() {
    let state = memory_state();
    login(&state);
    let profile = state.profile();

    // Start from an empty book.
    profile
        .delete_address(AddressId::new(1))
        .expect("sole seeded address can go");
    assert!(profile.addresses().is_empty());

    let x = profile
        .add_address(NewAddress::new("Riyadh", "Olaya St"))
        .expect("add X");
    let z = profile
        .add_address(NewAddress::new("Jeddah", "Tahlia St"))
        .expect("add Z");
    assert!(x.is_default);
    assert!(!z.is_default);

    assert_eq!(
        profile.delete_address(x.id),
        Err(ProfileError::CannotDeleteDefault)
    );

    profile.set_default_address(z.id).expect("set default");
    profile.delete_address(x.id).expect("delete X");

    let remaining = profile.addresses();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, z.id);
    assert!(remaining[0].is_default);
}

#[test]
fn test_address_ids_are_never_reused() {
    let state = memory_state();
    login(&state);
    let profile = state.profile();

    // Seeded address is #1.
    let second = profile
        .add_address(NewAddress::new("Dammam", "Corniche Rd"))
        .expect("add");
    assert_eq!(second.id, AddressId::new(2));
    profile.delete_address(second.id).expect("delete");

    let third = profile
        .add_address(NewAddress::new("Khobar", "Prince Turki St"))
        .expect("add");
    assert_eq!(third.id, AddressId::new(3));
}

#[test]
fn test_exactly_one_default_after_any_change() {
    let state = memory_state();
    login(&state);
    let profile = state.profile();
    for (city, street) in [("A", "1"), ("B", "2"), ("C", "3")] {
        profile
            .add_address(NewAddress::new(city, street))
            .expect("add");
    }

    for address in profile.addresses() {
        profile.set_default_address(address.id).expect("set default");
        let defaults: Vec<AddressId> = profile
            .addresses()
            .into_iter()
            .filter(|a| a.is_default)
            .map(|a| a.id)
            .collect();
        assert_eq!(defaults, vec![address.id]);
    }
}
