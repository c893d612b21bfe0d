//! Item Manager App
//!
//! Owns the store and controller and lays out the page: header, search,
//! create button, item grid, dialogs and toasts.

use leptos::prelude::*;
use reactive_stores::Store;

use item_sync::{ApiConfig, HttpItemClient, ItemController};

use crate::components::{CreateItemDialog, EditItemDialog, ItemCard, SearchBar, Toaster, ViewItemDialog};
use crate::context::AppContext;
use crate::format::item_count_label;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::new());
    provide_context(store);

    let config = ApiConfig::from_build_env();
    log::info!("item store at {}", config.base_url);
    let ctx = AppContext::new(store, ItemController::new(HttpItemClient::new(config)));
    provide_context(ctx);

    let items = Memo::new(move |_| store.session().read().items.clone());

    view! {
        <div class="page">
            <div class="container">
                <header class="page-header">
                    <h1 class="page-title">"Item Manager"</h1>
                    <p class="subtitle">"Manage your items with full CRUD operations"</p>
                </header>

                <SearchBar />

                <div class="create-row">
                    <button class="btn primary large" on:click=move |_| ctx.open_create()>
                        "+ Create New Item"
                    </button>
                </div>

                <Show
                    when=move || items.with(|items| !items.is_empty())
                    fallback=|| view! {
                        <section class="card empty-state">
                            <p>"No items yet. Create your first item or search for an existing one."</p>
                        </section>
                    }
                >
                    <section class="items-section">
                        <div class="items-header">
                            <h2>"Your Items"</h2>
                            <span class="badge">{move || item_count_label(items.with(Vec::len))}</span>
                        </div>
                        <div class="item-grid">
                            <For
                                each=move || items.get()
                                key=|item| {
                                    // Every displayed field, so an updated item re-renders
                                    (
                                        item.id.clone(),
                                        item.name.clone(),
                                        item.description.clone(),
                                        item.category.clone(),
                                        item.price.clone(),
                                        item.updated_at.clone(),
                                    )
                                }
                                children=move |item| view! { <ItemCard item=item /> }
                            />
                        </div>
                    </section>
                </Show>

                <CreateItemDialog />
                <EditItemDialog />
                <ViewItemDialog />
            </div>

            <Toaster />
        </div>
    }
}
