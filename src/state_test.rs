use super::*;

use crate::identity::{ProviderIdentity, User};

fn google_user() -> User {
    User::from_google(ProviderIdentity {
        id: Some("g1".to_owned()),
        name: Some("Alice".to_owned()),
        picture: Some("a.png".to_owned()),
    })
}

fn facebook_only_user() -> User {
    User::from_facebook(ProviderIdentity {
        id: Some("f1".to_owned()),
        name: Some("Bob".to_owned()),
        picture: Some("b.png".to_owned()),
    })
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_logged_out() {
    let state = AuthState::default();
    assert!(!state.is_authenticated());
    assert_eq!(*state.user(), User::default());
}

// =============================================================
// set_user flag semantics
// =============================================================

#[test]
fn set_user_with_google_id_sets_flag_true() {
    let mut state = AuthState::default();
    state.set_user(google_user());
    assert!(state.is_authenticated());
    assert_eq!(state.user().google.id.as_deref(), Some("g1"));
}

#[test]
fn set_user_without_google_id_leaves_flag_false() {
    let mut state = AuthState::default();
    state.set_user(facebook_only_user());
    assert!(!state.is_authenticated());
    // Facebook identity is still stored and readable.
    assert_eq!(state.user().facebook.id.as_deref(), Some("f1"));
    assert_eq!(state.user().facebook.name.as_deref(), Some("Bob"));
}

#[test]
fn facebook_only_login_does_not_invent_google_id() {
    let mut state = AuthState::default();
    state.set_user(facebook_only_user());
    assert!(state.user().google.id.is_none());
}

#[test]
fn set_user_replaces_wholesale_not_merges() {
    let mut state = AuthState::default();
    state.set_user(google_user());
    state.set_user(facebook_only_user());
    // The earlier Google identity must not survive the replacement.
    assert!(state.user().google.id.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn flag_is_a_snapshot_of_the_last_mutation() {
    let mut state = AuthState::default();
    state.set_user(google_user());
    assert!(state.is_authenticated());
    // A later mutation recomputes it; reads in between never change it.
    let _ = state.user();
    assert!(state.is_authenticated());
}

// =============================================================
// clear_user
// =============================================================

#[test]
fn clear_user_restores_default_shape() {
    let mut state = AuthState::default();
    state.set_user(google_user());
    state.clear_user();
    assert_eq!(state, AuthState::default());
}

#[test]
fn clear_user_is_idempotent() {
    let mut state = AuthState::default();
    state.set_user(facebook_only_user());
    state.clear_user();
    let once = state.clone();
    state.clear_user();
    assert_eq!(state, once);
}
