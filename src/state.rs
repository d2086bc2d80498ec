#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::identity::User;

/// Authentication state: the current user snapshot and a derived flag.
///
/// `is_authenticated` is recomputed only inside [`set_user`], from the
/// Google id alone — it is a snapshot of the last mutation, not a live
/// projection over `user`. Fields are private so no caller can mutate
/// `user` without going through the mutators and leave the flag stale.
///
/// [`set_user`]: AuthState::set_user
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    user: User,
    is_authenticated: bool,
}

impl AuthState {
    /// The current identity snapshot.
    #[must_use]
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Whether the user recorded by the last mutation counts as logged in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    /// Replace the stored user wholesale and recompute the flag.
    ///
    /// Only the Google id drives the flag; Facebook identity is stored for
    /// display but never counts as authentication.
    pub fn set_user(&mut self, user: User) {
        self.is_authenticated = user.google.id.is_some();
        self.user = user;
    }

    /// Reset to the logged-out defaults: all-`None` identity, flag false.
    ///
    /// Idempotent.
    pub fn clear_user(&mut self) {
        self.user = User::default();
        self.is_authenticated = false;
    }
}
