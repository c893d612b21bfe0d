//! Item Details Component
//!
//! Read-only view of every field of an item.

use leptos::prelude::*;

use item_sync::Item;

use crate::format::date_time;

#[component]
pub fn ItemDetails(item: Item) -> impl IntoView {
    let created = item.created_at.as_deref().map(date_time);
    let updated = item.updated_at.as_deref().map(date_time);

    view! {
        <div class="item-details">
            <div class="details-grid">
                <div>
                    <span class="detail-label">"ID"</span>
                    <p class="detail-value mono">{item.id}</p>
                </div>
                <div>
                    <span class="detail-label">"Name"</span>
                    <p class="detail-value">{item.name}</p>
                </div>
            </div>

            {item.category.map(|category| view! {
                <div>
                    <span class="detail-label">"Category"</span>
                    <p class="detail-value">{category}</p>
                </div>
            })}

            {item.price.map(|price| view! {
                <div>
                    <span class="detail-label">"Price"</span>
                    <p class="detail-value">{price}</p>
                </div>
            })}

            {item.description.map(|description| view! {
                <div>
                    <span class="detail-label">"Description"</span>
                    <p class="detail-value muted">{description}</p>
                </div>
            })}

            <div class="details-grid timestamps">
                {created.map(|at| view! {
                    <div>
                        <span class="detail-label">"Created"</span>
                        <p>{at}</p>
                    </div>
                })}
                {updated.map(|at| view! {
                    <div>
                        <span class="detail-label">"Updated"</span>
                        <p>{at}</p>
                    </div>
                })}
            </div>
        </div>
    }
}
