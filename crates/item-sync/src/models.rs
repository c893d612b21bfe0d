//! Item Models
//!
//! The item entity and the payloads exchanged with the remote store.

use serde::{Deserialize, Serialize};

/// Item record (matches the remote store's JSON)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Externally assigned, immutable once created
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// ISO-8601, stamped by the client on create
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// ISO-8601, stamped by the client on create and update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            category: None,
            price: None,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Fields of a new item; timestamps are stamped by the client at send time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

/// Partial update; absent fields are left untouched by the store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

/// `{ message, item }` returned by create and update
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SavedItem {
    #[serde(default)]
    pub message: String,
    pub item: Item,
}

/// `{ message }` returned by delete
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub(crate) struct DeleteResponse {
    #[serde(default)]
    pub message: String,
}

/// Why a draft cannot be submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("ID is required")]
    MissingId,
    #[error("Name is required")]
    MissingName,
}

/// Editable form state for creating or editing an item
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: String,
}

impl ItemDraft {
    /// Prefill from an existing item (edit form)
    pub fn from_item(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            description: item.description.clone().unwrap_or_default(),
            category: item.category.clone().unwrap_or_default(),
            price: item.price.clone().unwrap_or_default(),
        }
    }

    /// `id` and `name` must be non-blank before a request is issued
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.id.trim().is_empty() {
            return Err(DraftError::MissingId);
        }
        if self.name.trim().is_empty() {
            return Err(DraftError::MissingName);
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Create payload; blank optional fields are omitted
    pub fn to_new_item(&self) -> NewItem {
        NewItem {
            id: self.id.trim().to_string(),
            name: self.name.clone(),
            description: non_blank(&self.description),
            category: non_blank(&self.category),
            price: non_blank(&self.price),
        }
    }

    /// Update patch; every editable field is sent so blank values clear the store's copy
    pub fn to_patch(&self) -> ItemPatch {
        ItemPatch {
            name: Some(self.name.clone()),
            description: Some(self.description.clone()),
            category: Some(self.category.clone()),
            price: Some(self.price.clone()),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_json_is_camel_case() {
        let mut item = Item::new("a1", "Widget");
        item.created_at = Some("2024-01-01T00:00:00.000Z".to_string());
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "a1", "name": "Widget", "createdAt": "2024-01-01T00:00:00.000Z"})
        );
    }

    #[test]
    fn test_item_tolerates_missing_optionals() {
        let item: Item = serde_json::from_str(r#"{"id":"a1","name":"Widget","price":"9.99"}"#).unwrap();
        assert_eq!(item.price.as_deref(), Some("9.99"));
        assert!(item.description.is_none());
        assert!(item.updated_at.is_none());
    }

    #[test]
    fn test_draft_validation() {
        let mut draft = ItemDraft::default();
        assert_eq!(draft.validate(), Err(DraftError::MissingId));
        draft.id = "a1".to_string();
        draft.name = "   ".to_string();
        assert_eq!(draft.validate(), Err(DraftError::MissingName));
        draft.name = "Widget".to_string();
        assert!(draft.is_valid());
    }

    #[test]
    fn test_draft_error_messages() {
        assert_eq!(DraftError::MissingId.to_string(), "ID is required");
        assert_eq!(DraftError::MissingName.to_string(), "Name is required");
    }

    #[test]
    fn test_draft_to_new_item_drops_blank_fields() {
        let draft = ItemDraft {
            id: " a1 ".to_string(),
            name: "Widget".to_string(),
            description: String::new(),
            category: "Tools".to_string(),
            price: "  ".to_string(),
        };
        let new_item = draft.to_new_item();
        assert_eq!(new_item.id, "a1");
        assert_eq!(new_item.category.as_deref(), Some("Tools"));
        assert!(new_item.description.is_none());
        assert!(new_item.price.is_none());
    }

    #[test]
    fn test_draft_patch_sends_all_fields() {
        let mut item = Item::new("a1", "Widget");
        item.price = Some("3".to_string());
        let mut draft = ItemDraft::from_item(&item);
        draft.price.clear();

        let json = serde_json::to_value(draft.to_patch()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Widget", "description": "", "category": "", "price": ""})
        );
    }
}
