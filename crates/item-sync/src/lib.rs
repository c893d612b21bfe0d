//! Item Sync
//!
//! Data-synchronization contract between the item manager UI and the remote
//! item store. Platform independent: compiles for `wasm32-unknown-unknown`
//! (the browser UI) and for the host (tests).
//!
//! Layers, leaves first:
//! - models: the item entity and request/response payloads
//! - client: the remote store client (`ItemApi`) and its HTTP implementation
//! - session: in-memory session state and reconciliation rules
//! - controller: mediates every mutation between the UI and the store

mod config;
mod error;
mod models;
mod notice;
mod session;
mod controller;
pub mod client;

pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use error::{ApiError, ApiResult};
pub use models::{DraftError, Item, ItemDraft, ItemPatch, NewItem, SavedItem};
pub use notice::{Notice, NoticeKind};
pub use session::{Operation, Pending, SessionState};
pub use controller::{ItemController, SessionHandle};
pub use client::{HttpItemClient, ItemApi};
