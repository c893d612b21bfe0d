//! Search Bar Component
//!
//! Look up an item by ID on the remote store.

use leptos::prelude::*;

use item_sync::Operation;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_app_context();

    let (search_id, set_search_id) = signal(String::new());
    let searching = move || ctx.is_pending(&Operation::Search);
    let last_result = Memo::new(move |_| ctx.store.session().read().search_result.clone());

    let run_search = move || {
        let id = search_id.get_untracked();
        if id.trim().is_empty() {
            return;
        }
        ctx.search(id);
    };

    view! {
        <section class="card search-card">
            <h2 class="card-title">"Search Item by ID"</h2>
            <div class="search-row">
                <input
                    type="text"
                    placeholder="Enter item ID"
                    disabled=searching
                    prop:value=move || search_id.get()
                    on:input=move |ev| set_search_id.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            run_search();
                        }
                    }
                />
                <button
                    class="btn primary"
                    disabled=move || searching() || search_id.get().trim().is_empty()
                    on:click=move |_| run_search()
                >
                    {move || if searching() { "Searching..." } else { "Search" }}
                </button>
            </div>
            {move || last_result.get().map(|item| {
                let shown = item.clone();
                view! {
                    <div class="search-result">
                        <span class="label">"Last result:"</span>
                        " "
                        <span class="search-result-name">{item.name}</span>
                        " "
                        <span class="search-result-id">"(" {item.id} ")"</span>
                        <button class="btn link" on:click=move |_| ctx.view(shown.clone())>"View"</button>
                    </div>
                }
            })}
        </section>
    }
}
