//! Application State Store
//!
//! Uses Leptos reactive_stores. The session (items and selection slots) is
//! owned here and handed to the controller through [`StoreSession`].

use leptos::prelude::*;
use reactive_stores::Store;

use item_sync::{Notice, SessionHandle, SessionState};

/// A notice on screen
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items, selections and in-flight operations
    pub session: SessionState,
    /// Visible notifications, oldest first
    pub toasts: Vec<Toast>,
    /// Last toast id handed out
    pub next_toast_id: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Controller access to the session field of the store
#[derive(Clone, Copy)]
pub struct StoreSession(pub AppStore);

impl SessionHandle for StoreSession {
    fn with_session<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> R {
        let field = self.0.session();
        let mut session = field.write();
        f(&mut session)
    }
}

// ========================
// Store Helper Functions
// ========================

/// Show a notice; returns its toast id
pub fn store_push_notice(store: &AppStore, notice: Notice) -> u64 {
    let id = {
        let field = store.next_toast_id();
        let mut next = field.write();
        *next += 1;
        *next
    };
    store.toasts().write().push(Toast { id, notice });
    id
}

/// Remove a toast by id (no-op if already gone)
pub fn store_dismiss_toast(store: &AppStore, toast_id: u64) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}
