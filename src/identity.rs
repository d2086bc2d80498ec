#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use serde::{Deserialize, Serialize};

/// Identity fields supplied by a single provider's login response.
///
/// All fields are optional; `None` means "no value from this provider".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderIdentity {
    pub id: Option<String>,
    pub name: Option<String>,
    pub picture: Option<String>,
}

/// The authenticated principal, aggregated across both identity providers.
///
/// Both sub-records are plain fields, so a `User` always carries a Google
/// and a Facebook record; a provider not involved in the current login is
/// represented by an all-`None` [`ProviderIdentity`], never by an absent one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub google: ProviderIdentity,
    pub facebook: ProviderIdentity,
}

impl User {
    /// Build a user from a Google login, leaving the Facebook record empty.
    #[must_use]
    pub fn from_google(identity: ProviderIdentity) -> Self {
        Self {
            google: identity,
            facebook: ProviderIdentity::default(),
        }
    }

    /// Build a user from a Facebook login, leaving the Google record empty.
    #[must_use]
    pub fn from_facebook(identity: ProviderIdentity) -> Self {
        Self {
            google: ProviderIdentity::default(),
            facebook: identity,
        }
    }
}
