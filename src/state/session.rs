//! Session Store
//!
//! The sole persisted state in the app: a single string under one
//! `localStorage` key. Its presence means "signed in"; the value is the
//! identity shown in the UI. The marker is trusted unconditionally and checked
//! at mount time only - there is no server, no expiry, no cross-tab sync.

use leptos::*;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Storage key holding the signed-in identity.
pub const SESSION_KEY: &str = "avia_user";

/// Identity used when the sign-in form is submitted without an email.
pub const FALLBACK_IDENTITY: &str = "user@avia.ai";

/// Minimal key-value store interface so the browser-backed store can be
/// swapped out (for tests today, for a verified-token store later).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn clear(&self, key: &str);
}

/// `localStorage`-backed store. All browser failures degrade to "no value".
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn clear(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// In-memory store used by unit tests.
#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn clear(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

/// Session handle provided through context to both pages.
#[derive(Clone)]
pub struct Session {
    store: Rc<dyn KeyValueStore>,
}

impl Session {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn browser() -> Self {
        Self::new(Rc::new(LocalStore))
    }

    /// Record the identity; subsequent protected-page mounts treat the
    /// visitor as authenticated. Empty input falls back to a placeholder.
    pub fn sign_in(&self, identity: &str) {
        let identity = identity.trim();
        let identity = if identity.is_empty() {
            FALLBACK_IDENTITY
        } else {
            identity
        };
        self.store.set(SESSION_KEY, identity);
    }

    /// Delete the marker; protected pages redirect on their next check.
    pub fn sign_out(&self) {
        self.store.clear(SESSION_KEY);
    }

    pub fn identity(&self) -> Option<String> {
        self.store.get(SESSION_KEY)
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity().is_some()
    }
}

/// Provide the browser-backed session to the component tree.
pub fn provide_session() {
    provide_context(Session::browser());
}

/// Outcome of the dashboard route guard, resolved once per mount.
#[derive(Clone, Debug, PartialEq)]
pub enum GuardOutcome {
    /// Marker present: render protected content for this identity.
    Authenticated(String),
    /// No marker: leave for the landing page.
    Redirected,
}

/// Resolve the guard from whatever the store held at mount time.
pub fn resolve_guard(identity: Option<String>) -> GuardOutcome {
    match identity {
        Some(id) => GuardOutcome::Authenticated(id),
        None => GuardOutcome::Redirected,
    }
}

/// Derive a display first name from an email-like identity.
///
/// Takes the local part, treats digits and separators as spaces, and
/// capitalizes the first remaining token ("jane.doe42@x.com" -> "Jane").
pub fn first_name(identity: &str) -> String {
    let local = identity.split('@').next().unwrap_or("");
    let cleaned: String = local
        .chars()
        .map(|c| {
            if c.is_ascii_digit() || matches!(c, '.' | '_' | '-' | '+') {
                ' '
            } else {
                c
            }
        })
        .collect();

    match cleaned.split_whitespace().next() {
        Some(word) => {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        }
        None => String::new(),
    }
}

/// First character of the identity, uppercased, for avatar badges.
pub fn initial(identity: &str) -> String {
    identity
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "U".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_session() -> Session {
        Session::new(Rc::new(MemoryStore::default()))
    }

    #[test]
    fn test_sign_in_round_trip() {
        let session = memory_session();
        assert!(!session.is_authenticated());

        session.sign_in("jane@example.com");
        assert!(session.is_authenticated());
        assert_eq!(session.identity().as_deref(), Some("jane@example.com"));

        session.sign_out();
        assert!(!session.is_authenticated());
        assert_eq!(session.identity(), None);
    }

    #[test]
    fn test_sign_in_trims_and_falls_back() {
        let session = memory_session();
        session.sign_in("  padded@example.com  ");
        assert_eq!(session.identity().as_deref(), Some("padded@example.com"));

        session.sign_in("   ");
        assert_eq!(session.identity().as_deref(), Some(FALLBACK_IDENTITY));
    }

    #[test]
    fn test_guard_redirects_without_marker() {
        assert_eq!(resolve_guard(None), GuardOutcome::Redirected);
    }

    #[test]
    fn test_guard_admits_any_stored_identity() {
        assert_eq!(
            resolve_guard(Some("jane@example.com".to_string())),
            GuardOutcome::Authenticated("jane@example.com".to_string())
        );
    }

    #[test]
    fn test_first_name_from_identity() {
        assert_eq!(first_name("jane@example.com"), "Jane");
        assert_eq!(first_name("jane.doe42@example.com"), "Jane");
        assert_eq!(first_name("MARCUS_j@example.com"), "Marcus");
        assert_eq!(first_name("123@example.com"), "");
        assert_eq!(first_name(""), "");
    }

    #[test]
    fn test_initial() {
        assert_eq!(initial("jane@example.com"), "J");
        assert_eq!(initial(""), "U");
    }
}
