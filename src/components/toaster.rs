//! Toaster Component
//!
//! Stack of notifications; click one to dismiss it early.

use leptos::prelude::*;

use crate::format::toast_class;
use crate::store::{store_dismiss_toast, use_app_store, AppStateStoreFields};

#[component]
pub fn Toaster() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=toast_class(toast.notice.kind)
                            role="status"
                            on:click=move |_| store_dismiss_toast(&store, id)
                        >
                            <strong class="toast-title">{toast.notice.title}</strong>
                            <p class="toast-message">{toast.notice.message}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}
