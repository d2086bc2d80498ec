//! # auth-store
//!
//! Client-side authentication state for an app that signs users in through
//! Google or Facebook. This crate owns the "who is currently logged in"
//! record and nothing else: identity-provider integration code assembles a
//! [`identity::User`] from a login response and hands it to the store; UI
//! code reads the user and the authentication flag and subscribes to changes.
//!
//! No network calls, no token handling, no persistence — those belong to the
//! callers on either side.

pub mod identity;
pub mod state;
pub mod store;

pub use identity::{ProviderIdentity, User};
pub use state::AuthState;
pub use store::AuthStore;
