#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::identity::User;
use crate::state::AuthState;

type Subscriber = Box<dyn Fn(&AuthState)>;

/// Shared handle to the session's [`AuthState`], with change notification.
///
/// The composition root creates one store and hands clones to whichever
/// modules need it; clones alias the same state and subscriber list, so a
/// mutation through any handle notifies observers registered on any other.
///
/// Single-threaded by construction (`Rc`/`RefCell`): there is one writer
/// path (the two mutators) and any number of read-only observers, so no
/// locking is involved. Subscribers run synchronously after a mutation
/// completes, never mid-mutation, and see the post-mutation state.
#[derive(Clone, Default)]
pub struct AuthStore {
    state: Rc<RefCell<AuthState>>,
    subscribers: Rc<RefCell<Vec<Subscriber>>>,
}

impl AuthStore {
    /// Create a store in the logged-out default state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current identity.
    #[must_use]
    pub fn user(&self) -> User {
        self.state.borrow().user().clone()
    }

    /// Whether the last mutation left the session authenticated.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    /// Replace the stored user and notify subscribers.
    ///
    /// See [`AuthState::set_user`] for the flag semantics.
    pub fn set_user(&self, user: User) {
        self.state.borrow_mut().set_user(user);
        log::debug!(
            "auth user set, authenticated={}",
            self.state.borrow().is_authenticated()
        );
        self.notify();
    }

    /// Reset to the logged-out defaults and notify subscribers.
    pub fn clear_user(&self) {
        self.state.borrow_mut().clear_user();
        log::debug!("auth user cleared");
        self.notify();
    }

    /// Register an observer called after every mutation with the new state.
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&AuthState) + 'static,
    {
        self.subscribers.borrow_mut().push(Box::new(callback));
    }

    /// Run all subscribers against a snapshot taken after the write borrow
    /// is released, so callbacks can freely read the store.
    fn notify(&self) {
        let snapshot = self.state.borrow().clone();
        for callback in self.subscribers.borrow().iter() {
            callback(&snapshot);
        }
    }
}
