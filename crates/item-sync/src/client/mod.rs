//! Remote Store Client
//!
//! Four logical operations against the remote item store. Every failure is
//! reported as an [`ApiError`]; nothing is retried or recovered here.

mod http;


use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{Item, ItemPatch, NewItem, SavedItem};

pub use http::HttpItemClient;

/// Remote item store operations
///
/// Futures are not `Send`: the browser runs them on its single event loop.
#[async_trait(?Send)]
pub trait ItemApi {
    /// POST `/items` with `createdAt`/`updatedAt` stamped now
    async fn create(&self, item: &NewItem) -> ApiResult<SavedItem>;

    /// GET `/items/{id}`
    async fn fetch_by_id(&self, id: &str) -> ApiResult<Item>;

    /// PUT `/items/{id}` with `updatedAt` stamped now
    async fn update(&self, id: &str, patch: &ItemPatch) -> ApiResult<SavedItem>;

    /// DELETE `/items/{id}`; returns the store's confirmation message
    async fn delete(&self, id: &str) -> ApiResult<String>;
}
