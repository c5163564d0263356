//! Who is playing

use super::{SESSION, Store, StoreError};

/// Supplies the username scores are saved under
pub trait Identity {
    /// Current user, `None` when nobody is signed in
    fn current_user(&self) -> Option<String>;
}

/// Always the same user (demos, tests, single-seat installs)
#[derive(Debug, Clone)]
pub struct FixedIdentity(pub String);

impl Identity for FixedIdentity {
    fn current_user(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Reads the signed-in username from the `session` collection
#[derive(Debug, Clone)]
pub struct SessionIdentity<S: Store> {
    store: S,
}

impl<S: Store> SessionIdentity<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn sign_in(&mut self, username: &str) -> Result<(), StoreError> {
        let json = serde_json::to_string(username)?;
        self.store.set(SESSION, &json)
    }

    pub fn sign_out(&mut self) -> Result<(), StoreError> {
        self.store.remove(SESSION)
    }
}

impl<S: Store> Identity for SessionIdentity<S> {
    fn current_user(&self) -> Option<String> {
        let raw = match self.store.get(SESSION) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("Could not read session: {e}");
                return None;
            }
        };
        match serde_json::from_str::<String>(&raw) {
            Ok(name) if !name.is_empty() => Some(name),
            Ok(_) => None,
            Err(e) => {
                log::warn!("Ignoring malformed session: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_session_sign_in_out() {
        let mut identity = SessionIdentity::new(MemoryStore::new());
        assert_eq!(identity.current_user(), None);

        identity.sign_in("alice").unwrap();
        assert_eq!(identity.current_user().as_deref(), Some("alice"));

        identity.sign_out().unwrap();
        assert_eq!(identity.current_user(), None);
    }

    #[test]
    fn test_malformed_session_is_anonymous() {
        let mut store = MemoryStore::new();
        store.set(SESSION, "{not json").unwrap();
        assert_eq!(SessionIdentity::new(store).current_user(), None);
    }

    #[test]
    fn test_fixed_identity() {
        assert_eq!(FixedIdentity("bob".into()).current_user().as_deref(), Some("bob"));
    }
}
