use crate::storage::KeyValueStore;

use super::role::Role;

/// Storage key the login flow writes the session role under.
pub const ROLE_KEY: &str = "user_role";

/// Answers "what can the current caller do" from a read-only store.
///
/// Never writes; the role is owned by the external login flow.
#[derive(Debug, Clone)]
pub struct RoleProvider<S> {
    store: S,
}

impl<S: KeyValueStore> RoleProvider<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current role. Total: absent or unrecognized values resolve to `Guest`.
    pub fn resolve_role(&self) -> Role {
        let raw = self.store.get(ROLE_KEY);
        let role = Role::from_stored(raw.as_deref());

        if role == Role::Guest {
            if let Some(raw) = raw.as_deref().filter(|r| *r != Role::Guest.as_str()) {
                tracing::debug!("Unrecognized stored role {:?}, treating as guest", raw);
            }
        }

        role
    }

    /// Derived from a single read so it always agrees with `resolve_role`.
    pub fn has_elevated_access(&self) -> bool {
        self.resolve_role().is_elevated()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
