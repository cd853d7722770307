//! The signed-in identity for the running session.

use tracing::{debug, info};

use crate::model::{Identity, Role};

/// Holder of the current identity.
///
/// Starts empty, is filled by a successful login or signup and is cleared on
/// logout. Nothing here outlives the process.
#[derive(Debug, Default, Clone)]
pub struct Session {
    identity: Option<Identity>,
}

impl Session {
    /// An empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the signed-in identity, replacing any previous one.
    pub fn sign_in(&mut self, identity: Identity) {
        info!("Signed in as {} ({})", identity.name(), identity.role());
        self.identity = Some(identity);
    }

    /// Clear the session and return the identity that was signed in.
    pub fn sign_out(&mut self) -> Option<Identity> {
        let previous = self.identity.take();
        match &previous {
            Some(identity) => info!("Signed out {}", identity.name()),
            None => debug!("Sign out with no identity"),
        }
        previous
    }

    /// The signed-in identity.
    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Role of the signed-in identity.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(Identity::role)
    }

    /// Check whether anyone is signed in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}
