//! Item Dialogs
//!
//! Create, edit and view dialogs, each bound to its selection slot.

use leptos::prelude::*;

use item_sync::{ItemDraft, Operation};

use crate::components::{ItemDetails, ItemForm, Modal};
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

/// Blank form, shown while the create slot is open
#[component]
pub fn CreateItemDialog() -> impl IntoView {
    let ctx = use_app_context();
    let open = Memo::new(move |_| ctx.store.session().read().creating);
    let saving = Signal::derive(move || ctx.is_pending(&Operation::Create));

    view! {
        <Show when=move || open.get()>
            <Modal title="Create New Item" on_close=move |_: ()| ctx.close_create()>
                <ItemForm
                    on_submit=move |draft: ItemDraft| ctx.create(draft)
                    on_cancel=move |_: ()| ctx.close_create()
                    is_loading=saving
                />
            </Modal>
        </Show>
    }
}

/// Prefilled form for the item selected for edit
#[component]
pub fn EditItemDialog() -> impl IntoView {
    let ctx = use_app_context();
    // Memo so the form is rebuilt only when the selection changes, not on
    // every session write (which would wipe in-progress input)
    let editing = Memo::new(move |_| ctx.store.session().read().editing.clone());
    let saving = Signal::derive(move || ctx.is_pending(&Operation::Update));

    move || {
        editing.get().map(|item| view! {
            <Modal title="Edit Item" on_close=move |_: ()| ctx.cancel_edit()>
                <ItemForm
                    item=item
                    on_submit=move |draft: ItemDraft| ctx.update(draft)
                    on_cancel=move |_: ()| ctx.cancel_edit()
                    is_loading=saving
                />
            </Modal>
        })
    }
}

#[component]
pub fn ViewItemDialog() -> impl IntoView {
    let ctx = use_app_context();
    let viewing = Memo::new(move |_| ctx.store.session().read().viewing.clone());

    move || {
        viewing.get().map(|item| view! {
            <Modal title="Item Details" on_close=move |_: ()| ctx.close_view()>
                <ItemDetails item=item />
            </Modal>
        })
    }
}
