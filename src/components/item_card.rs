//! Item Card Component
//!
//! One item in the grid, with View/Edit/Delete actions.

use leptos::prelude::*;

use item_sync::{Item, Operation};

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::format::short_date;

#[component]
pub fn ItemCard(item: Item) -> impl IntoView {
    let ctx = use_app_context();

    let delete_op = Operation::Delete(item.id.clone());
    let deleting = Signal::derive(move || ctx.is_pending(&delete_op));

    let id = item.id.clone();
    let view_item = item.clone();
    let edit_item = item.clone();
    let created = item.created_at.as_deref().map(short_date);
    let updated = item.updated_at.as_deref().map(short_date);

    view! {
        <article class="card item-card">
            <header class="item-card-header">
                <h3 class="item-name">{item.name.clone()}</h3>
                {item.category.clone().map(|category| view! { <span class="badge">{category}</span> })}
            </header>

            <div class="item-card-body">
                <div class="item-id">
                    <span class="label">"ID:"</span>
                    " "
                    {item.id.clone()}
                </div>

                {item.price.clone().map(|price| view! {
                    <div class="item-price">
                        <span class="label">"Price:"</span>
                        " "
                        {price}
                    </div>
                })}

                {item.description.clone().map(|description| view! {
                    <p class="item-description">{description}</p>
                })}

                {(created.is_some() || updated.is_some()).then(|| view! {
                    <div class="item-dates">
                        {created.map(|date| view! { <div>"Created: " {date}</div> })}
                        {updated.map(|date| view! { <div>"Updated: " {date}</div> })}
                    </div>
                })}

                <div class="item-actions">
                    <button class="btn outline" on:click=move |_| ctx.view(view_item.clone())>
                        "View"
                    </button>
                    <button class="btn outline" on:click=move |_| ctx.start_edit(edit_item.clone())>
                        "Edit"
                    </button>
                    <DeleteConfirmButton
                        button_class="btn destructive"
                        disabled=deleting
                        on_confirm=move |_: ()| ctx.delete(id.clone())
                    />
                </div>
            </div>
        </article>
    }
}
