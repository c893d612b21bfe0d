//! Session State
//!
//! In-memory state of one UI session: the local item collection (a cache of
//! what was fetched, created, or updated), the selection slots, and the set of
//! operations currently in flight.
//!
//! The `apply_*` methods reconcile the collection with the outcome of a remote
//! call and return the one notice that outcome produces.

use std::collections::BTreeSet;

use crate::error::ApiResult;
use crate::models::{Item, SavedItem};
use crate::notice::Notice;

/// A user action that can be in flight
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
    Search,
    /// Delete of one item, keyed by id
    Delete(String),
}

/// Operations awaiting a response. At most one of each kind (delete: per id).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pending {
    pub create: bool,
    pub update: bool,
    pub search: bool,
    pub deletes: BTreeSet<String>,
}

impl Pending {
    pub fn contains(&self, op: &Operation) -> bool {
        match op {
            Operation::Create => self.create,
            Operation::Update => self.update,
            Operation::Search => self.search,
            Operation::Delete(id) => self.deletes.contains(id),
        }
    }

    /// Mark `op` in flight. Returns false if it already was.
    pub fn begin(&mut self, op: Operation) -> bool {
        match op {
            Operation::Create => !std::mem::replace(&mut self.create, true),
            Operation::Update => !std::mem::replace(&mut self.update, true),
            Operation::Search => !std::mem::replace(&mut self.search, true),
            Operation::Delete(id) => self.deletes.insert(id),
        }
    }

    pub fn finish(&mut self, op: &Operation) {
        match op {
            Operation::Create => self.create = false,
            Operation::Update => self.update = false,
            Operation::Search => self.search = false,
            Operation::Delete(id) => {
                self.deletes.remove(id);
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Known items in arrival order; ids are unique
    pub items: Vec<Item>,
    /// Item returned by the last successful search
    pub search_result: Option<Item>,
    /// Create form open
    pub creating: bool,
    /// Item selected for edit
    pub editing: Option<Item>,
    /// Item selected for the details view
    pub viewing: Option<Item>,
    pub pending: Pending,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    // ========================
    // Selection Slots
    // ========================

    pub fn open_create(&mut self) {
        self.creating = true;
    }

    pub fn close_create(&mut self) {
        self.creating = false;
    }

    pub fn start_edit(&mut self, item: Item) {
        self.editing = Some(item);
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn view(&mut self, item: Item) {
        self.viewing = Some(item);
    }

    pub fn close_view(&mut self) {
        self.viewing = None;
    }

    // ========================
    // Collection Mutations
    // ========================

    /// Replace the item with the same id in place, or append it
    pub fn upsert(&mut self, item: Item) {
        match self.items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
    }

    /// Append only if the id is unknown (first seen wins). Returns true if added.
    pub fn merge(&mut self, item: Item) -> bool {
        if self.contains(&item.id) {
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn remove(&mut self, id: &str) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    // ========================
    // Reconciliation
    // ========================

    pub fn apply_created(&mut self, result: ApiResult<SavedItem>) -> Notice {
        match result {
            Ok(saved) => {
                self.upsert(saved.item);
                self.creating = false;
                Notice::success("Success", "Item created successfully")
            }
            Err(err) => Notice::failed("Error", &err),
        }
    }

    pub fn apply_updated(&mut self, result: ApiResult<SavedItem>) -> Notice {
        match result {
            Ok(saved) => {
                self.upsert(saved.item);
                self.editing = None;
                Notice::success("Success", "Item updated successfully")
            }
            Err(err) => Notice::failed("Error", &err),
        }
    }

    pub fn apply_deleted(&mut self, id: &str, result: ApiResult<String>) -> Notice {
        match result {
            Ok(_) => {
                self.remove(id);
                if self.viewing.as_ref().is_some_and(|item| item.id == id) {
                    self.viewing = None;
                }
                if self.search_result.as_ref().is_some_and(|item| item.id == id) {
                    self.search_result = None;
                }
                Notice::success("Success", "Item deleted successfully")
            }
            Err(err) => Notice::failed("Error", &err),
        }
    }

    pub fn apply_fetched(&mut self, result: ApiResult<Item>) -> Notice {
        match result {
            Ok(item) => {
                let notice = Notice::success("Found", format!("Item \"{}\" found successfully", item.name));
                self.merge(item.clone());
                self.search_result = Some(item);
                notice
            }
            Err(err) => {
                self.search_result = None;
                Notice::failed("Not Found", &err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::notice::NoticeKind;

    fn item(id: &str, name: &str) -> Item {
        Item::new(id, name)
    }

    fn saved(item: Item) -> ApiResult<SavedItem> {
        Ok(SavedItem { message: "ok".to_string(), item })
    }

    fn status_error(message: &str) -> ApiError {
        ApiError::Status { status: 500, message: message.to_string() }
    }

    #[test]
    fn test_create_appends_and_closes_form() {
        let mut state = SessionState::new();
        state.open_create();

        let notice = state.apply_created(saved(item("a1", "Widget")));

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].id, "a1");
        assert!(!state.creating);
        assert_eq!(notice, Notice::success("Success", "Item created successfully"));
    }

    #[test]
    fn test_create_same_id_twice_keeps_ids_unique() {
        let mut state = SessionState::new();
        state.apply_created(saved(item("a1", "Widget")));
        state.apply_created(saved(item("a1", "Widget v2")));

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].name, "Widget v2");
    }

    #[test]
    fn test_create_failure_keeps_form_open() {
        let mut state = SessionState::new();
        state.open_create();

        let notice = state.apply_created(Err(status_error("id taken")));

        assert!(state.items.is_empty());
        assert!(state.creating);
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, "id taken");
    }

    #[test]
    fn test_update_replaces_by_id() {
        let mut state = SessionState::new();
        state.items = vec![item("a1", "One"), item("b2", "Two"), item("c3", "Three")];
        state.start_edit(item("b2", "Two"));

        let notice = state.apply_updated(saved(item("b2", "Two!")));

        assert_eq!(state.items.len(), 3);
        assert_eq!(state.items[1].name, "Two!");
        assert!(state.editing.is_none());
        assert!(!notice.is_error());
    }

    #[test]
    fn test_update_failure_keeps_selection() {
        let mut state = SessionState::new();
        state.items = vec![item("a1", "One")];
        state.start_edit(item("a1", "One"));

        let notice = state.apply_updated(Err(status_error("boom")));

        assert_eq!(state.items[0].name, "One");
        assert_eq!(state.editing.as_ref().map(|i| i.id.as_str()), Some("a1"));
        assert!(notice.is_error());
    }

    #[test]
    fn test_update_of_unknown_id_is_upsert() {
        let mut state = SessionState::new();
        state.apply_updated(saved(item("zz", "Remote only")));
        assert!(state.contains("zz"));
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut state = SessionState::new();
        state.items = vec![item("a1", "One"), item("b2", "Two")];
        state.view(item("a1", "One"));

        let notice = state.apply_deleted("a1", Ok("deleted".to_string()));

        assert_eq!(state.items, vec![item("b2", "Two")]);
        assert!(state.viewing.is_none());
        assert_eq!(notice.message, "Item deleted successfully");
    }

    #[test]
    fn test_delete_clears_matching_search_result() {
        let mut state = SessionState::new();
        state.apply_fetched(Ok(item("a1", "One")));
        state.apply_fetched(Ok(item("b2", "Two")));

        state.apply_deleted("a1", Ok(String::new()));
        assert_eq!(state.search_result.as_ref().map(|i| i.id.as_str()), Some("b2"));

        state.apply_deleted("b2", Ok(String::new()));
        assert!(state.search_result.is_none());
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_delete_failure_leaves_collection() {
        let mut state = SessionState::new();
        state.items = vec![item("a1", "One")];

        let notice = state.apply_deleted("nope", Err(status_error("HTTP 404: Not Found")));

        assert_eq!(state.items.len(), 1);
        assert_eq!(notice.message, "HTTP 404: Not Found");
    }

    #[test]
    fn test_fetch_first_seen_wins() {
        let mut state = SessionState::new();
        let mut local = item("a1", "Local");
        local.price = Some("1".to_string());
        state.items = vec![local.clone()];

        let mut remote = item("a1", "Remote");
        remote.price = Some("2".to_string());
        let notice = state.apply_fetched(Ok(remote.clone()));

        assert_eq!(state.items, vec![local]);
        assert_eq!(state.search_result, Some(remote));
        assert_eq!(notice.title, "Found");
        assert_eq!(notice.message, "Item \"Remote\" found successfully");
    }

    #[test]
    fn test_fetch_merges_unknown_item() {
        let mut state = SessionState::new();
        state.apply_fetched(Ok(item("n1", "New")));
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn test_fetch_failure_clears_search_result() {
        let mut state = SessionState::new();
        state.search_result = Some(item("a1", "Old"));

        let notice = state.apply_fetched(Err(ApiError::Transport("offline".to_string())));

        assert!(state.search_result.is_none());
        assert_eq!(notice, Notice::error("Not Found", "offline"));
    }

    #[test]
    fn test_pending_begin_is_exclusive() {
        let mut pending = Pending::default();
        assert!(pending.begin(Operation::Create));
        assert!(!pending.begin(Operation::Create));
        assert!(pending.begin(Operation::Delete("a1".to_string())));
        assert!(pending.begin(Operation::Delete("b2".to_string())));
        assert!(!pending.begin(Operation::Delete("a1".to_string())));

        pending.finish(&Operation::Create);
        pending.finish(&Operation::Delete("a1".to_string()));
        assert!(!pending.contains(&Operation::Create));
        assert!(!pending.contains(&Operation::Delete("a1".to_string())));
        assert!(pending.contains(&Operation::Delete("b2".to_string())));
    }
}
