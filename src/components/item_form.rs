//! Item Form Component
//!
//! Form for creating a new item or editing an existing one.

use leptos::prelude::*;

use item_sync::{Item, ItemDraft};

/// Create/edit form.
///
/// With `item` the form is prefilled and the ID field is locked. Submit stays
/// disabled until both ID and name are non-blank, and the missing field is
/// named above the buttons.
#[component]
pub fn ItemForm(
    #[prop(optional)] item: Option<Item>,
    #[prop(into)] on_submit: Callback<ItemDraft>,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(into)] is_loading: Signal<bool>,
) -> impl IntoView {
    let is_edit = item.is_some();
    let draft = RwSignal::new(item.as_ref().map(ItemDraft::from_item).unwrap_or_default());

    let can_submit = move || !is_loading.get() && draft.with(ItemDraft::is_valid);
    let draft_error = move || draft.with(|d| d.validate().err()).map(|err| err.to_string());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if !can_submit() {
            return;
        }
        on_submit.run(draft.get());
    };

    view! {
        <form class="item-form" on:submit=submit>
            <label class="form-field">
                <span class="form-label">"ID"</span>
                <input
                    type="text"
                    placeholder="Enter unique ID"
                    required=true
                    disabled=move || is_edit || is_loading.get()
                    prop:value=move || draft.with(|d| d.id.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.id = value);
                    }
                />
            </label>

            <label class="form-field">
                <span class="form-label">"Name"</span>
                <input
                    type="text"
                    placeholder="Enter item name"
                    required=true
                    disabled=move || is_loading.get()
                    prop:value=move || draft.with(|d| d.name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.name = value);
                    }
                />
            </label>

            <label class="form-field">
                <span class="form-label">"Category"</span>
                <input
                    type="text"
                    placeholder="Enter category"
                    disabled=move || is_loading.get()
                    prop:value=move || draft.with(|d| d.category.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.category = value);
                    }
                />
            </label>

            <label class="form-field">
                <span class="form-label">"Price"</span>
                <input
                    type="text"
                    placeholder="Enter price"
                    disabled=move || is_loading.get()
                    prop:value=move || draft.with(|d| d.price.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.price = value);
                    }
                />
            </label>

            <label class="form-field">
                <span class="form-label">"Description"</span>
                <textarea
                    rows="3"
                    placeholder="Enter description"
                    disabled=move || is_loading.get()
                    prop:value=move || draft.with(|d| d.description.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.description = value);
                    }
                ></textarea>
            </label>

            {move || draft_error().map(|message| view! { <p class="form-hint">{message}</p> })}

            <div class="form-actions">
                <button type="submit" class="btn primary" disabled=move || !can_submit()>
                    {move || {
                        if is_loading.get() {
                            "Saving..."
                        } else if is_edit {
                            "Update"
                        } else {
                            "Create"
                        }
                    }}
                </button>
                <button
                    type="button"
                    class="btn secondary"
                    disabled=move || is_loading.get()
                    on:click=move |_| on_cancel.run(())
                >
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
