//! Session token persistence and the session context shared through Leptos.
//!
//! The token is an opaque string the API returns at sign-in. Its presence in
//! the store is the sole signed-in signal: nothing here inspects or expires
//! it, and authorization re-reads the store on every evaluation instead of
//! caching the decision. Real access control lives on the API.

use leptos::prelude::*;
use std::sync::{Arc, Mutex};

/// Fixed storage key for the session token. Absence means signed out.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Where the session token lives. Injected so the guard and the sign-in flow
/// can run against an in-memory store in tests.
pub trait SessionStore: Send + Sync {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Store backed by browser localStorage; the session survives reloads until
/// something removes the key.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSession;

impl SessionStore for BrowserSession {
    fn get(&self) -> Option<String> {
        read_storage(TOKEN_STORAGE_KEY)
    }

    fn set(&self, token: &str) {
        write_storage(TOKEN_STORAGE_KEY, token);
    }

    fn clear(&self) {
        remove_storage(TOKEN_STORAGE_KEY);
    }
}

/// In-memory store for tests and native builds.
#[derive(Clone, Debug, Default)]
pub struct MemorySession {
    token: Arc<Mutex<Option<String>>>,
}

impl SessionStore for MemorySession {
    fn get(&self) -> Option<String> {
        self.token.lock().ok().and_then(|token| token.clone())
    }

    fn set(&self, value: &str) {
        if let Ok(mut token) = self.token.lock() {
            *token = Some(value.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut token) = self.token.lock() {
            *token = None;
        }
    }
}

/// Session context provided at the application root. The signal mirrors the
/// store for reactive chrome; authorization decisions always go back to the
/// store itself.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn SessionStore>,
    token: RwSignal<Option<String>>,
}

impl SessionContext {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        let token = RwSignal::new(store.get());

        Self { store, token }
    }

    /// Persists the token after a successful sign-in.
    pub fn set_session(&self, token: &str) {
        self.store.set(token);
        self.token.set(Some(token.to_string()));
    }

    /// Removes the token, typically on logout. Takes effect on the next
    /// authorization evaluation.
    pub fn clear_session(&self) {
        self.store.clear();
        self.token.set(None);
    }

    /// Sole authorization signal: the token key is present in the store.
    /// Re-reads the store every time; a token cleared elsewhere is noticed
    /// on the next evaluation.
    pub fn is_authorized(&self) -> bool {
        self.store.get().is_some()
    }

    /// Reactive view of the session for nav chrome.
    pub fn is_authenticated(&self) -> Signal<bool> {
        let token = self.token;

        Signal::derive(move || token.get().is_some())
    }
}

/// Provides the session context backed by browser storage.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let session = SessionContext::new(Arc::new(BrowserSession));
    provide_context(session);

    view! { {children()} }
}

/// Returns the shared session context, or a browser-backed fallback when a
/// component mounts outside the provider.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .unwrap_or_else(|| SessionContext::new(Arc::new(BrowserSession)))
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

#[cfg(target_arch = "wasm32")]
fn read_storage(key: &str) -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
}

#[cfg(target_arch = "wasm32")]
fn write_storage(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

#[cfg(target_arch = "wasm32")]
fn remove_storage(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_storage(_key: &str) -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
fn write_storage(_key: &str, _value: &str) {}

#[cfg(not(target_arch = "wasm32"))]
fn remove_storage(_key: &str) {}

#[cfg(test)]
mod tests {
    use super::{MemorySession, SessionContext, SessionStore};
    use std::sync::Arc;

    #[test]
    fn memory_store_round_trips_and_clears() {
        let store = MemorySession::default();

        assert_eq!(store.get(), None);
        store.set("abc123");
        assert_eq!(store.get(), Some("abc123".to_string()));
        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn sign_in_success_persists_the_token() {
        let store = Arc::new(MemorySession::default());
        let session = SessionContext::new(store.clone());

        assert!(!session.is_authorized());
        session.set_session("abc123");
        assert!(session.is_authorized());
        assert_eq!(store.get(), Some("abc123".to_string()));
    }

    #[test]
    fn clearing_invalidates_the_next_evaluation() {
        let store = Arc::new(MemorySession::default());
        let session = SessionContext::new(store.clone());

        session.set_session("abc123");
        session.clear_session();

        // Presence is re-read every time; the earlier grant is not cached.
        assert!(!session.is_authorized());
        assert_eq!(store.get(), None);
    }

    #[test]
    fn authorization_follows_the_store_not_the_context() {
        let store = Arc::new(MemorySession::default());
        let session = SessionContext::new(store.clone());

        // A token cleared behind the context's back is noticed immediately.
        session.set_session("abc123");
        store.clear();
        assert!(!session.is_authorized());
    }

    #[test]
    fn failed_sign_in_leaves_the_store_unchanged() {
        let store = Arc::new(MemorySession::default());
        store.set("previous");
        let session = SessionContext::new(store.clone());

        // A rejected sign-in surfaces a notice without calling set_session;
        // whatever the store held stays put.
        assert!(session.is_authorized());
        assert_eq!(store.get(), Some("previous".to_string()));
    }
}
