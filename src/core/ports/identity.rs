//! Identity provider port
//!
//! Resolves a caller credential (bearer token, session id, ...) to an actor.
//! How credentials are issued is out of scope.

use super::super::models::Actor;

/// Resolves caller credentials to actors
pub trait IdentityProvider: Send + Sync {
    /// Resolve a credential, or `None` if it is unknown/expired
    fn resolve(&self, credential: &str) -> anyhow::Result<Option<Actor>>;
}
