//! HTTP Item Client
//!
//! `reqwest` implementation of [`ItemApi`]. On wasm32 reqwest drives the
//! browser's `fetch`; on the host it uses hyper.

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::ItemApi;
use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{DeleteResponse, Item, ItemPatch, NewItem, SavedItem};

// ========================
// Request Bodies
// ========================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateBody<'a> {
    #[serde(flatten)]
    item: &'a NewItem,
    created_at: &'a str,
    updated_at: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateBody<'a> {
    #[serde(flatten)]
    patch: &'a ItemPatch,
    updated_at: &'a str,
}

/// Current time as `YYYY-MM-DDTHH:MM:SS.mmmZ`
pub(crate) fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Remote store client over HTTP
#[derive(Debug, Clone)]
pub struct HttpItemClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl HttpItemClient {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(http: reqwest::Client, config: ApiConfig) -> Self {
        Self { http, config }
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        log::debug!("{} {}", method, url);
        self.http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json")
    }

    /// Send once and return the body of a success response
    async fn send(&self, request: RequestBuilder) -> ApiResult<String> {
        let response = request.send().await.map_err(|e| {
            log::warn!("request failed: {}", e);
            ApiError::from(e)
        })?;

        let status = response.status();
        log::debug!("response status {}", status);

        if !status.is_success() {
            // An unreadable error body is treated like an absent one
            let body = response.text().await.unwrap_or_default();
            let err = ApiError::from_response(status, &body);
            log::warn!("store returned {}: {}", status, err);
            return Err(err);
        }

        Ok(response.text().await?)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let body = self.send(request).await?;
        decode(&body)
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    serde_json::from_str(body).map_err(|e| {
        log::warn!("undecodable response body: {}", e);
        ApiError::Decode(e.to_string())
    })
}

#[async_trait(?Send)]
impl ItemApi for HttpItemClient {
    async fn create(&self, item: &NewItem) -> ApiResult<SavedItem> {
        let now = timestamp();
        let body = CreateBody {
            item,
            created_at: &now,
            updated_at: &now,
        };
        let request = self.request(Method::POST, &self.config.items_url()).json(&body);
        self.send_json(request).await
    }

    async fn fetch_by_id(&self, id: &str) -> ApiResult<Item> {
        let request = self.request(Method::GET, &self.config.item_url(id));
        self.send_json(request).await
    }

    async fn update(&self, id: &str, patch: &ItemPatch) -> ApiResult<SavedItem> {
        let now = timestamp();
        let body = UpdateBody {
            patch,
            updated_at: &now,
        };
        let request = self.request(Method::PUT, &self.config.item_url(id)).json(&body);
        self.send_json(request).await
    }

    async fn delete(&self, id: &str) -> ApiResult<String> {
        let request = self.request(Method::DELETE, &self.config.item_url(id));
        let body = self.send(request).await?;
        if body.trim().is_empty() {
            return Ok(String::new());
        }
        let response: DeleteResponse = decode(&body)?;
        Ok(response.message)
    }
}
