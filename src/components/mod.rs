//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod item_card;
mod item_details;
mod item_dialogs;
mod item_form;
mod modal;
mod search_bar;
mod toaster;

pub use delete_confirm_button::DeleteConfirmButton;
pub use item_card::ItemCard;
pub use item_details::ItemDetails;
pub use item_dialogs::{CreateItemDialog, EditItemDialog, ViewItemDialog};
pub use item_form::ItemForm;
pub use modal::Modal;
pub use search_bar::SearchBar;
pub use toaster::Toaster;
