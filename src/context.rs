//! Application Context
//!
//! Shared handles provided via Leptos Context API. Components call the action
//! methods here; each one runs the controller on a local task and turns its
//! outcome into a toast.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use item_sync::{HttpItemClient, Item, ItemController, ItemDraft, Notice, Operation};

use crate::store::{store_dismiss_toast, store_push_notice, AppStateStoreFields, AppStore, StoreSession};

/// How long a toast stays up
const TOAST_TIMEOUT_MS: u32 = 4_000;

pub type Controller = ItemController<HttpItemClient>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Reactive application state
    pub store: AppStore,
    /// Remote store controller (browser-only client, kept in local storage)
    controller: StoredValue<Controller, LocalStorage>,
}

impl AppContext {
    pub fn new(store: AppStore, controller: Controller) -> Self {
        Self {
            store,
            controller: StoredValue::new_local(controller),
        }
    }

    pub fn is_pending(&self, op: &Operation) -> bool {
        self.store.session().read().pending.contains(op)
    }

    // ========================
    // Selection Slots
    // ========================

    pub fn open_create(&self) {
        self.store.session().write().open_create();
    }

    pub fn close_create(&self) {
        self.store.session().write().close_create();
    }

    pub fn start_edit(&self, item: Item) {
        self.store.session().write().start_edit(item);
    }

    pub fn cancel_edit(&self) {
        self.store.session().write().cancel_edit();
    }

    pub fn view(&self, item: Item) {
        self.store.session().write().view(item);
    }

    pub fn close_view(&self) {
        self.store.session().write().close_view();
    }

    // ========================
    // Remote Actions
    // ========================

    pub fn create(&self, draft: ItemDraft) {
        let ctx = *self;
        let controller = self.controller.get_value();
        spawn_local(async move {
            let notice = controller.create(&StoreSession(ctx.store), draft.to_new_item()).await;
            ctx.notify(notice);
        });
    }

    /// Update the item selected for edit
    pub fn update(&self, draft: ItemDraft) {
        let ctx = *self;
        let controller = self.controller.get_value();
        spawn_local(async move {
            let notice = controller.update(&StoreSession(ctx.store), draft.to_patch()).await;
            ctx.notify(notice);
        });
    }

    /// Delete after the user confirmed
    pub fn delete(&self, id: String) {
        let ctx = *self;
        let controller = self.controller.get_value();
        spawn_local(async move {
            let notice = controller.delete(&StoreSession(ctx.store), &id).await;
            ctx.notify(notice);
        });
    }

    pub fn search(&self, id: String) {
        let ctx = *self;
        let controller = self.controller.get_value();
        spawn_local(async move {
            let notice = controller.search(&StoreSession(ctx.store), &id).await;
            ctx.notify(notice);
        });
    }

    fn notify(&self, notice: Option<Notice>) {
        let Some(notice) = notice else {
            return;
        };
        if notice.is_error() {
            log::warn!("{}: {}", notice.title, notice.message);
        } else {
            log::info!("{}: {}", notice.title, notice.message);
        }

        let store = self.store;
        let toast_id = store_push_notice(&store, notice);
        spawn_local(async move {
            TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
            store_dismiss_toast(&store, toast_id);
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
